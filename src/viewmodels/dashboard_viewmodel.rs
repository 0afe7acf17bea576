// ============================================================================
// DASHBOARD VIEWMODEL - Carga del tableau de bord
// ============================================================================

use crate::models::ApiError;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

pub struct DashboardViewModel {
    state: AppState,
}

impl DashboardViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// GET /dashboard. Mientras no haya respuesta la vista muestra
    /// "Chargement..."; si falla, se queda ahí y se loguea el motivo.
    pub async fn load(&self) {
        let api = ApiClient::with_token(self.state.session.get_token());
        match api.dashboard().await {
            Ok(stats) => {
                log::info!(
                    "📊 [DASHBOARD] {} véhicules, {} alertas de assurance",
                    stats.nombre_vehicules,
                    stats.assurances_a_risque.len()
                );
                *self.state.dashboard.borrow_mut() = Some(stats);
                self.state.notify_subscribers();
            }
            Err(ApiError::Auth) => {
                SessionViewModel::new(self.state.clone()).force_logout();
            }
            Err(e) => {
                log::error!("❌ [DASHBOARD] Error cargando stats: {}", e);
            }
        }
    }
}
