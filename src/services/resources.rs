// ============================================================================
// RESOURCES - Acceso genérico list/create a los recursos REST
// ============================================================================
// Un solo cliente parametrizado en lugar de cinco servicios repetidos:
// vehicles, assignments, maintenances, insurances y fuels comparten el
// mismo par GET lista / POST creación.
// ============================================================================

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use web_sys::File;

use crate::models::ApiError;
use crate::services::api_client::ApiClient;
use crate::services::query::with_query;

pub const VEHICLES_PATH: &str = "/vehicles";
pub const ASSIGNMENTS_PATH: &str = "/assignments";
pub const MAINTENANCES_PATH: &str = "/maintenances";
pub const INSURANCES_PATH: &str = "/insurances";
pub const FUELS_PATH: &str = "/fuels";

/// Nombre del campo archivo en el multipart de assurances
pub const INSURANCE_FILE_FIELD: &str = "fichier_document";

/// Cliente de un recurso REST: T es el registro que devuelve la lista,
/// P el payload de creación.
pub struct ResourceClient<T, P> {
    api: ApiClient,
    path: &'static str,
    _kinds: PhantomData<(T, P)>,
}

impl<T, P> ResourceClient<T, P>
where
    T: DeserializeOwned,
    P: Serialize,
{
    pub fn new(api: ApiClient, path: &'static str) -> Self {
        Self {
            api,
            path,
            _kinds: PhantomData,
        }
    }

    /// GET {path}?{query}
    pub async fn list(&self, query: &str) -> Result<Vec<T>, ApiError> {
        let path = with_query(self.path, query);
        log::info!("📋 [API] GET {}", path);
        self.api.get_json(&path).await
    }

    /// POST {path} con body JSON. El body de la respuesta se ignora.
    pub async fn create(&self, payload: &P) -> Result<(), ApiError> {
        log::info!("📝 [API] POST {}", self.path);
        self.api.post_json(self.path, payload).await
    }

    /// POST {path} en multipart/form-data, con documento opcional
    pub async fn create_multipart(
        &self,
        fields: &[(&'static str, String)],
        file: Option<&File>,
    ) -> Result<(), ApiError> {
        log::info!(
            "📝 [API] POST {} (multipart, document: {})",
            self.path,
            file.is_some()
        );
        self.api
            .post_multipart(self.path, fields, file, INSURANCE_FILE_FIELD)
            .await
    }
}
