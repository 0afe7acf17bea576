// ============================================================================
// SESSION VIEWMODEL - Lógica de autenticación
// ============================================================================
// Login, registro y cierre de sesión. Las vistas solo llaman y pintan;
// el estado vive en AppState.
// ============================================================================

use crate::models::{ApiError, RegisterDraft};
use crate::services::ApiClient;
use crate::state::AppState;

pub struct SessionViewModel {
    state: AppState,
}

impl SessionViewModel {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Login contra POST /auth/login. Si el backend acepta, la sesión
    /// queda abierta y persistida; el error se devuelve para que la
    /// vista lo muestre inline.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let response = ApiClient::new().login(email, password).await?;
        self.state
            .session
            .set_session(response.access_token, response.user);
        Ok(())
    }

    /// Alta de usuario vía POST /auth/register (pantalla Utilisateurs).
    /// El endpoint no exige token; quién llega a la pantalla lo decide
    /// la guardia de rutas.
    pub async fn register(&self, draft: &RegisterDraft) -> Result<(), ApiError> {
        let request = draft.to_payload();
        log::info!("👤 [SESSION] Registrando usuario {}", request.email);
        ApiClient::new().register(&request).await
    }

    /// Logout pedido por el usuario.
    pub fn logout(&self) {
        self.state.session.clear();
        self.state.reset_screen_caches();
        self.state.notify_subscribers();
    }

    /// El backend rechazó el token (401): cerrar la sesión y dejar que
    /// la guardia mande al login en el próximo render.
    pub fn force_logout(&self) {
        log::warn!("⚠️ [SESSION] Token rechazado por el backend, cerrando sesión");
        self.logout();
    }
}
