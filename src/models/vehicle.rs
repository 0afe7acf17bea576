// ============================================================================
// VEHICLE - Modelo de vehículo y formulario de creación
// ============================================================================

use serde::{Deserialize, Serialize};

/// Opciones que ofrece el formulario (el backend valida por su lado)
pub const VEHICLE_TYPES: [&str; 2] = ["voiture", "utilitaire"];
pub const VEHICLE_STATUTS: [&str; 4] = ["actif", "inactif", "maintenance", "assigne"];

/// Vehículo tal como lo devuelve GET /vehicles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: String,
    pub immatriculation: String,
    pub marque: String,
    pub modele: String,
    #[serde(default)]
    pub annee: i32,
    #[serde(default)]
    pub kilometrage_initial: i64,
    #[serde(rename = "type", default)]
    pub type_vehicule: String,
    #[serde(default)]
    pub statut: String,
    #[serde(default)]
    pub departement: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload de POST /vehicles
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VehiclePayload {
    pub immatriculation: String,
    pub marque: String,
    pub modele: String,
    pub annee: i32,
    pub kilometrage_initial: i64,
    #[serde(rename = "type")]
    pub type_vehicule: String,
    pub statut: String,
    pub departement: String,
    pub notes: String,
}

/// Filtros de la lista de vehículos. Solo los valores no vacíos
/// terminan en el query string (ver services::query).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFilters {
    pub q: String,
    pub statut: String,
    pub departement: String,
}

/// Borrador del formulario. Los campos numéricos se guardan como texto
/// crudo del input y se normalizan en to_payload().
#[derive(Debug, Clone)]
pub struct VehicleDraft {
    pub immatriculation: String,
    pub marque: String,
    pub modele: String,
    pub annee: String,
    pub kilometrage_initial: String,
    pub type_vehicule: String,
    pub statut: String,
    pub departement: String,
    pub notes: String,
}

impl Default for VehicleDraft {
    fn default() -> Self {
        Self {
            immatriculation: String::new(),
            marque: String::new(),
            modele: String::new(),
            annee: "2020".to_string(),
            kilometrage_initial: "0".to_string(),
            type_vehicule: "voiture".to_string(),
            statut: "actif".to_string(),
            departement: String::new(),
            notes: String::new(),
        }
    }
}

impl VehicleDraft {
    /// Normalizar el borrador: año y kilométrage inválidos vuelven
    /// a sus valores por defecto (2020 / 0).
    pub fn to_payload(&self) -> VehiclePayload {
        VehiclePayload {
            immatriculation: self.immatriculation.clone(),
            marque: self.marque.clone(),
            modele: self.modele.clone(),
            annee: self.annee.trim().parse().unwrap_or(2020),
            kilometrage_initial: self.kilometrage_initial.trim().parse().unwrap_or(0),
            type_vehicule: self.type_vehicule.clone(),
            statut: self.statut.clone(),
            departement: self.departement.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_coerces_numeric_fields() {
        let mut draft = VehicleDraft::default();
        draft.annee = " 2021 ".to_string();
        draft.kilometrage_initial = "15000".to_string();
        let payload = draft.to_payload();
        assert_eq!(payload.annee, 2021);
        assert_eq!(payload.kilometrage_initial, 15000);
    }

    #[test]
    fn test_payload_falls_back_on_invalid_numbers() {
        let mut draft = VehicleDraft::default();
        draft.annee = "l'an dernier".to_string();
        draft.kilometrage_initial = String::new();
        let payload = draft.to_payload();
        assert_eq!(payload.annee, 2020);
        assert_eq!(payload.kilometrage_initial, 0);
    }

    #[test]
    fn test_payload_serializes_type_key() {
        let draft = VehicleDraft::default();
        let json = serde_json::to_string(&draft.to_payload()).unwrap();
        assert!(json.contains(r#""type":"voiture""#));
        assert!(json.contains(r#""statut":"actif""#));
    }

    #[test]
    fn test_vehicle_tolerates_missing_optionals() {
        let vehicle: Vehicle = serde_json::from_str(
            r#"{"id":"v1","immatriculation":"AB-123-CD","marque":"Renault","modele":"Kangoo","annee":2019,"type":"utilitaire","statut":"actif"}"#,
        )
        .unwrap();
        assert_eq!(vehicle.kilometrage_initial, 0);
        assert_eq!(vehicle.departement, None);
    }
}
