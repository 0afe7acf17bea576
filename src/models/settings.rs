// ============================================================================
// SETTINGS - Paramètres globaux (seuil d'alerte assurance)
// ============================================================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_ALERT_DAYS: u32 = 30;

/// GET /settings y payload de PUT /settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub alert_threshold_days: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            alert_threshold_days: DEFAULT_ALERT_DAYS,
        }
    }
}

/// Normalizar el input del formulario. Texto inválido vuelve al default.
pub fn parse_alert_days(value: &str) -> u32 {
    value.trim().parse().unwrap_or(DEFAULT_ALERT_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alert_days_valid() {
        assert_eq!(parse_alert_days("45"), 45);
        assert_eq!(parse_alert_days(" 7 "), 7);
    }

    #[test]
    fn test_parse_alert_days_invalid_falls_back() {
        assert_eq!(parse_alert_days("bientôt"), DEFAULT_ALERT_DAYS);
        assert_eq!(parse_alert_days(""), DEFAULT_ALERT_DAYS);
        assert_eq!(parse_alert_days("-3"), DEFAULT_ALERT_DAYS);
    }
}
