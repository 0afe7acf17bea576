// ============================================================================
// ASSIGNMENT - Affectation véhicule <-> utilisateur
// ============================================================================

use serde::{Deserialize, Serialize};

/// Affectation tal como la devuelve GET /assignments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    pub id: String,
    pub vehicule_id: String,
    pub utilisateur_id: String,
    pub date_debut: String,
    #[serde(default)]
    pub date_fin_prevue: Option<String>,
    #[serde(default)]
    pub motif: Option<String>,
}

/// Payload de POST /assignments
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssignmentPayload {
    pub vehicule_id: String,
    pub utilisateur_id: String,
    pub date_debut: String,
    pub date_fin_prevue: Option<String>,
    pub motif: String,
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentDraft {
    pub vehicule_id: String,
    pub utilisateur_id: String,
    pub date_debut: String,
    pub date_fin_prevue: String,
    pub motif: String,
}

impl AssignmentDraft {
    /// `today` llega en formato YYYY-MM-DD. Fecha de inicio vacía toma hoy,
    /// fecha de fin vacía se envía como null.
    pub fn to_payload(&self, today: &str) -> AssignmentPayload {
        let date_debut = if self.date_debut.is_empty() {
            today.to_string()
        } else {
            self.date_debut.clone()
        };
        let date_fin_prevue = if self.date_fin_prevue.is_empty() {
            None
        } else {
            Some(self.date_fin_prevue.clone())
        };
        AssignmentPayload {
            vehicule_id: self.vehicule_id.clone(),
            utilisateur_id: self.utilisateur_id.clone(),
            date_debut,
            date_fin_prevue,
            motif: self.motif.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_start_date_defaults_to_today() {
        let draft = AssignmentDraft::default();
        let payload = draft.to_payload("2026-08-22");
        assert_eq!(payload.date_debut, "2026-08-22");
    }

    #[test]
    fn test_filled_start_date_is_kept() {
        let mut draft = AssignmentDraft::default();
        draft.date_debut = "2026-01-15".to_string();
        let payload = draft.to_payload("2026-08-22");
        assert_eq!(payload.date_debut, "2026-01-15");
    }

    #[test]
    fn test_empty_end_date_becomes_null() {
        let draft = AssignmentDraft::default();
        let json = serde_json::to_string(&draft.to_payload("2026-08-22")).unwrap();
        assert!(json.contains(r#""date_fin_prevue":null"#));
    }

    #[test]
    fn test_filled_end_date_is_sent() {
        let mut draft = AssignmentDraft::default();
        draft.date_fin_prevue = "2026-09-01".to_string();
        let payload = draft.to_payload("2026-08-22");
        assert_eq!(payload.date_fin_prevue.as_deref(), Some("2026-09-01"));
    }
}
