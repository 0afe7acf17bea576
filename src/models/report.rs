// ============================================================================
// REPORT - Coûts d'entretien agrégés par véhicule
// ============================================================================

use serde::Deserialize;

/// Fila de GET /reports/maintenance-costs
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MaintenanceCostRow {
    pub vehicule_id: String,
    pub total: f64,
}
