// ============================================================================
// FUEL - Pleins de carburant
// ============================================================================

use serde::{Deserialize, Serialize};

/// Plein tal como lo devuelve GET /fuels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FuelEntry {
    pub id: String,
    pub vehicule_id: String,
    pub date: String,
    #[serde(default)]
    pub kilometrage: i64,
    #[serde(default)]
    pub litres: f64,
    #[serde(default)]
    pub cout: f64,
}

/// Payload de POST /fuels
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FuelPayload {
    pub vehicule_id: String,
    pub date: String,
    pub kilometrage: i64,
    pub litres: f64,
    pub cout: f64,
}

#[derive(Debug, Clone)]
pub struct FuelDraft {
    pub vehicule_id: String,
    pub date: String,
    pub kilometrage: String,
    pub litres: String,
    pub cout: String,
}

impl Default for FuelDraft {
    fn default() -> Self {
        Self {
            vehicule_id: String::new(),
            date: String::new(),
            kilometrage: "0".to_string(),
            litres: "0".to_string(),
            cout: "0".to_string(),
        }
    }
}

impl FuelDraft {
    pub fn to_payload(&self, today: &str) -> FuelPayload {
        let date = if self.date.is_empty() {
            today.to_string()
        } else {
            self.date.clone()
        };
        FuelPayload {
            vehicule_id: self.vehicule_id.clone(),
            date,
            kilometrage: self.kilometrage.trim().parse().unwrap_or(0),
            litres: self.litres.trim().parse().unwrap_or(0.0),
            cout: self.cout.trim().parse().unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_numeric_fields_coerced() {
        let mut draft = FuelDraft::default();
        draft.kilometrage = "84300".to_string();
        draft.litres = "45.2".to_string();
        draft.cout = "78.64".to_string();
        let payload = draft.to_payload("2026-08-22");
        assert_eq!(payload.kilometrage, 84300);
        assert_eq!(payload.litres, 45.2);
        assert_eq!(payload.cout, 78.64);
    }

    #[test]
    fn test_garbage_defaults_to_zero_and_today() {
        let mut draft = FuelDraft::default();
        draft.litres = "plein".to_string();
        let payload = draft.to_payload("2026-08-22");
        assert_eq!(payload.litres, 0.0);
        assert_eq!(payload.date, "2026-08-22");
    }
}
