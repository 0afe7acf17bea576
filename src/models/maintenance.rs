// ============================================================================
// MAINTENANCE - Entretiens (révisions et réparations)
// ============================================================================

use serde::{Deserialize, Serialize};

pub const MAINTENANCE_TYPES: [&str; 2] = ["revision", "reparation"];

/// Entretien tal como lo devuelve GET /maintenances
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaintenanceRecord {
    pub id: String,
    pub vehicule_id: String,
    pub date: String,
    #[serde(rename = "type", default)]
    pub type_entretien: String,
    #[serde(default)]
    pub garage: Option<String>,
    #[serde(default)]
    pub cout: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub kilometrage: i64,
}

/// Payload de POST /maintenances
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MaintenancePayload {
    pub vehicule_id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub type_entretien: String,
    pub garage: String,
    pub cout: f64,
    pub description: String,
    pub kilometrage: i64,
}

#[derive(Debug, Clone)]
pub struct MaintenanceDraft {
    pub vehicule_id: String,
    pub date: String,
    pub type_entretien: String,
    pub garage: String,
    pub cout: String,
    pub description: String,
    pub kilometrage: String,
}

impl Default for MaintenanceDraft {
    fn default() -> Self {
        Self {
            vehicule_id: String::new(),
            date: String::new(),
            type_entretien: "revision".to_string(),
            garage: String::new(),
            cout: "0".to_string(),
            description: String::new(),
            kilometrage: "0".to_string(),
        }
    }
}

impl MaintenanceDraft {
    pub fn to_payload(&self, today: &str) -> MaintenancePayload {
        let date = if self.date.is_empty() {
            today.to_string()
        } else {
            self.date.clone()
        };
        MaintenancePayload {
            vehicule_id: self.vehicule_id.clone(),
            date,
            type_entretien: self.type_entretien.clone(),
            garage: self.garage.clone(),
            cout: self.cout.trim().parse().unwrap_or(0.0),
            description: self.description.clone(),
            kilometrage: self.kilometrage.trim().parse().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_and_mileage_are_coerced() {
        let mut draft = MaintenanceDraft::default();
        draft.cout = "149.90".to_string();
        draft.kilometrage = "82000".to_string();
        let payload = draft.to_payload("2026-08-22");
        assert_eq!(payload.cout, 149.90);
        assert_eq!(payload.kilometrage, 82000);
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_zero() {
        let mut draft = MaintenanceDraft::default();
        draft.cout = "cher".to_string();
        draft.kilometrage = String::new();
        let payload = draft.to_payload("2026-08-22");
        assert_eq!(payload.cout, 0.0);
        assert_eq!(payload.kilometrage, 0);
    }

    #[test]
    fn test_empty_date_defaults_to_today() {
        let draft = MaintenanceDraft::default();
        assert_eq!(draft.to_payload("2026-08-22").date, "2026-08-22");
    }

    #[test]
    fn test_type_serializes_under_type_key() {
        let draft = MaintenanceDraft::default();
        let json = serde_json::to_string(&draft.to_payload("2026-08-22")).unwrap();
        assert!(json.contains(r#""type":"revision""#));
    }
}
