// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// El token viaja en Authorization: Bearer cuando hay sesión.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::{File, FormData};

use crate::models::{
    ApiError, AppSettings, DashboardStats, LoginResponse, MaintenanceCostRow, RegisterRequest,
};
use crate::utils::constants::BACKEND_URL;

/// Cliente API. Se construye ad hoc en cada operación, con el token
/// que tenga la sesión en ese momento.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
            token: None,
        }
    }

    pub fn with_token(token: Option<String>) -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            Ok(response)
        } else {
            Err(ApiError::from_status(response.status()))
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// GET autenticado que espera JSON
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check(response)?;
        Self::parse_json(response).await
    }

    /// POST autenticado con body JSON. El body de la respuesta se descarta.
    pub async fn post_json<P: Serialize>(&self, path: &str, payload: &P) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(payload)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response)?;
        Ok(())
    }

    /// PUT autenticado con body JSON
    pub async fn put_json<P: Serialize>(&self, path: &str, payload: &P) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::put(&self.url(path)))
            .json(payload)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response)?;
        Ok(())
    }

    /// POST autenticado en multipart/form-data. No se fija Content-Type:
    /// el navegador agrega el boundary solo.
    pub async fn post_multipart(
        &self,
        path: &str,
        fields: &[(&'static str, String)],
        file: Option<&File>,
        file_field: &str,
    ) -> Result<(), ApiError> {
        let form = FormData::new()
            .map_err(|_| ApiError::Network("FormData indisponible".to_string()))?;
        for (name, value) in fields {
            form.append_with_str(name, value)
                .map_err(|_| ApiError::Network(format!("FormData: champ {}", name)))?;
        }
        if let Some(file) = file {
            form.append_with_blob(file_field, file)
                .map_err(|_| ApiError::Network("FormData: document".to_string()))?;
        }

        let response = self
            .authorize(Request::post(&self.url(path)))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Endpoints de autenticación
    // ------------------------------------------------------------------

    /// POST /auth/login con body x-www-form-urlencoded (username + password).
    /// Cualquier respuesta no-ok se trata como credenciales rechazadas.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_urlencoded::to_string([("username", email), ("password", password)])
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!("🔐 [API] Login de {}", email);

        let response = Request::post(&self.url("/auth/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Auth);
        }
        Self::parse_json(response).await
    }

    /// POST /auth/register. El backend no exige token para crear cuentas,
    /// el acceso a la pantalla lo controla el guard de rutas.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<(), ApiError> {
        log::info!("👤 [API] Registro de {}", payload.email);
        let response = Request::post(&self.url("/auth/register"))
            .json(payload)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Endpoints puntuales (fuera del par list/create genérico)
    // ------------------------------------------------------------------

    pub async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/dashboard").await
    }

    pub async fn maintenance_costs(&self, query: &str) -> Result<Vec<MaintenanceCostRow>, ApiError> {
        self.get_json(&format!("/reports/maintenance-costs?{}", query)).await
    }

    pub async fn settings(&self) -> Result<AppSettings, ApiError> {
        self.get_json("/settings").await
    }

    pub async fn save_settings(&self, settings: &AppSettings) -> Result<(), ApiError> {
        self.put_json("/settings", settings).await
    }

    /// URL de descarga del document d'assurance (se usa como href directo)
    pub fn insurance_download_url(&self, id: &str) -> String {
        format!("{}/insurances/{}/download", self.base_url, id)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
