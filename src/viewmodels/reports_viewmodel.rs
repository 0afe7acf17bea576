// ============================================================================
// REPORTS VIEWMODEL - Rapport de coûts d'entretien
// ============================================================================

use crate::models::ApiError;
use crate::services::query::report_query;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

pub struct ReportsViewModel {
    state: AppState,
}

impl ReportsViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// GET /reports/maintenance-costs con el rango elegido. A diferencia
    /// de los filtros de listas, start y end viajan siempre, vacíos o no.
    pub async fn generate(&self) {
        let query = {
            let start = self.state.report_start.borrow();
            let end = self.state.report_end.borrow();
            report_query(&start, &end)
        };

        let api = ApiClient::with_token(self.state.session.get_token());
        match api.maintenance_costs(&query).await {
            Ok(rows) => {
                log::info!("📈 [REPORTS] {} véhicules en el rapport", rows.len());
                *self.state.report_rows.borrow_mut() = rows;
                self.state.notify_subscribers();
            }
            Err(ApiError::Auth) => {
                SessionViewModel::new(self.state.clone()).force_logout();
            }
            Err(e) => {
                // Se conserva el rapport anterior
                log::error!("❌ [REPORTS] Error generando rapport: {}", e);
            }
        }
    }
}
