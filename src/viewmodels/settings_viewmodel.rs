// ============================================================================
// SETTINGS VIEWMODEL - Paramètres de alertas
// ============================================================================

use crate::dom::alert;
use crate::models::{ApiError, AppSettings, DEFAULT_ALERT_DAYS};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

pub struct SettingsViewModel {
    state: AppState,
}

impl SettingsViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// GET /settings. Si el backend no responde (o devuelve 0 días),
    /// la pantalla arranca con el umbral por defecto.
    pub async fn load(&self) {
        let api = ApiClient::with_token(self.state.session.get_token());
        let settings = match api.settings().await {
            Ok(mut settings) => {
                if settings.alert_threshold_days == 0 {
                    settings.alert_threshold_days = DEFAULT_ALERT_DAYS;
                }
                settings
            }
            Err(ApiError::Auth) => {
                SessionViewModel::new(self.state.clone()).force_logout();
                return;
            }
            Err(e) => {
                log::error!("❌ [SETTINGS] Error cargando paramètres: {}", e);
                AppSettings::default()
            }
        };

        *self.state.settings.borrow_mut() = Some(settings);
        self.state.notify_subscribers();
    }

    /// PUT /settings con el valor del input (inválido cae en 30).
    pub async fn save(&self, days_raw: &str) {
        let settings = AppSettings {
            alert_threshold_days: crate::models::parse_alert_days(days_raw),
        };

        let api = ApiClient::with_token(self.state.session.get_token());
        match api.save_settings(&settings).await {
            Ok(()) => {
                *self.state.settings.borrow_mut() = Some(settings);
                alert("Enregistré");
            }
            Err(ApiError::Auth) => {
                SessionViewModel::new(self.state.clone()).force_logout();
            }
            Err(e) => {
                log::error!("❌ [SETTINGS] Error guardando paramètres: {}", e);
            }
        }
    }
}
