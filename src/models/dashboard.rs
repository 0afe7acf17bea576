// ============================================================================
// DASHBOARD - Indicateurs de la flotte
// ============================================================================

use serde::Deserialize;

/// Respuesta de GET /dashboard
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardStats {
    #[serde(default)]
    pub nombre_vehicules: i64,
    #[serde(default)]
    pub vehicules_actifs: i64,
    #[serde(default)]
    pub vehicules_en_maintenance: i64,
    #[serde(default)]
    pub couts_entretiens_mois: f64,
    #[serde(default)]
    pub assurances_a_risque: Vec<ExpiringInsurance>,
}

/// Police cercana a expirar, listada en el tablero
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExpiringInsurance {
    pub id: String,
    pub assureur: String,
    pub date_fin: String,
}
