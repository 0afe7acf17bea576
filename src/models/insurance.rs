// ============================================================================
// INSURANCE - Polices d'assurance
// ============================================================================
// La création pasa por multipart/form-data porque puede llevar un
// documento adjunto. Los campos de texto se calculan acá (puro y
// testeable); el FormData real se arma en el servicio.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Police tal como la devuelve GET /insurances
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsurancePolicy {
    pub id: String,
    pub vehicule_id: String,
    pub assureur: String,
    #[serde(default)]
    pub numero_contrat: Option<String>,
    #[serde(default)]
    pub date_debut: Option<String>,
    pub date_fin: String,
    #[serde(default)]
    pub prime: f64,
    #[serde(default)]
    pub fichier_document: Option<String>,
}

impl InsurancePolicy {
    pub fn has_document(&self) -> bool {
        self.fichier_document.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct InsuranceDraft {
    pub vehicule_id: String,
    pub assureur: String,
    pub numero_contrat: String,
    pub date_debut: String,
    pub date_fin: String,
    pub prime: String,
}

impl Default for InsuranceDraft {
    fn default() -> Self {
        Self {
            vehicule_id: String::new(),
            assureur: String::new(),
            numero_contrat: String::new(),
            date_debut: String::new(),
            date_fin: String::new(),
            prime: "0".to_string(),
        }
    }
}

impl InsuranceDraft {
    /// Campos de texto del multipart, en el orden del formulario.
    /// Siempre los seis, vacíos incluidos; la prime se normaliza a número.
    /// El documento adjunto NO aparece acá: solo se agrega al FormData
    /// cuando el usuario eligió un archivo.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        let prime: f64 = self.prime.trim().parse().unwrap_or(0.0);
        vec![
            ("vehicule_id", self.vehicule_id.clone()),
            ("assureur", self.assureur.clone()),
            ("numero_contrat", self.numero_contrat.clone()),
            ("date_debut", self.date_debut.clone()),
            ("date_fin", self.date_fin.clone()),
            ("prime", prime.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_six_fields_always_present() {
        let fields = InsuranceDraft::default().multipart_fields();
        let names: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "vehicule_id",
                "assureur",
                "numero_contrat",
                "date_debut",
                "date_fin",
                "prime"
            ]
        );
    }

    #[test]
    fn test_empty_dates_are_sent_as_empty_strings() {
        let fields = InsuranceDraft::default().multipart_fields();
        let date_fin = fields.iter().find(|(n, _)| *n == "date_fin").unwrap();
        assert_eq!(date_fin.1, "");
    }

    #[test]
    fn test_prime_is_normalized_to_number_text() {
        let mut draft = InsuranceDraft::default();
        draft.prime = " 540.5 ".to_string();
        let fields = draft.multipart_fields();
        let prime = fields.iter().find(|(n, _)| *n == "prime").unwrap();
        assert_eq!(prime.1, "540.5");
    }

    #[test]
    fn test_invalid_prime_becomes_zero() {
        let mut draft = InsuranceDraft::default();
        draft.prime = "beaucoup".to_string();
        let fields = draft.multipart_fields();
        let prime = fields.iter().find(|(n, _)| *n == "prime").unwrap();
        assert_eq!(prime.1, "0");
    }

    #[test]
    fn test_policy_without_document() {
        let policy: InsurancePolicy = serde_json::from_str(
            r#"{"id":"a1","vehicule_id":"v1","assureur":"AXA","date_fin":"2026-12-31","prime":520.0}"#,
        )
        .unwrap();
        assert!(!policy.has_document());
    }
}
