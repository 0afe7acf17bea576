use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::models::ApiError;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Guardar un string crudo (el token se guarda sin comillas JSON)
pub fn save_raw(key: &str, value: &str) -> Result<(), ApiError> {
    let storage = get_local_storage()
        .ok_or_else(|| ApiError::Storage("localStorage indisponible".to_string()))?;
    storage
        .set_item(key, value)
        .map_err(|_| ApiError::Storage(format!("impossible d'écrire {}", key)))
}

pub fn load_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Guardar serializado como JSON
pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), ApiError> {
    let json = serde_json::to_string(value).map_err(|e| ApiError::Storage(e.to_string()))?;
    save_raw(key, &json)
}

pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = load_raw(key)?;
    serde_json::from_str(&json).ok()
}

pub fn remove(key: &str) -> Result<(), ApiError> {
    let storage = get_local_storage()
        .ok_or_else(|| ApiError::Storage("localStorage indisponible".to_string()))?;
    storage
        .remove_item(key)
        .map_err(|_| ApiError::Storage(format!("impossible de supprimer {}", key)))
}
