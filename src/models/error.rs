// ============================================================================
// API ERROR - Errores de comunicación con el backend
// ============================================================================

use thiserror::Error;

/// Errores del cliente HTTP y del storage local
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Http(u16),

    /// 401 del backend o login rechazado. La sesión local ya no es válida.
    #[error("Unauthorized")]
    Auth,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Clasificar un status HTTP de una respuesta no-ok
    pub fn from_status(status: u16) -> Self {
        if status == 401 {
            ApiError::Auth
        } else {
            ApiError::Http(status)
        }
    }

    /// Mensaje inline del formulario de connexion. Credenciales
    /// rechazadas tienen su texto fijo; el resto se muestra tal cual.
    pub fn login_message(&self) -> String {
        match self {
            ApiError::Auth => "Identifiants invalides".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_unauthorized() {
        assert!(matches!(ApiError::from_status(401), ApiError::Auth));
    }

    #[test]
    fn test_from_status_other() {
        assert!(matches!(ApiError::from_status(500), ApiError::Http(500)));
    }

    #[test]
    fn test_login_message_for_bad_credentials() {
        assert_eq!(ApiError::Auth.login_message(), "Identifiants invalides");
    }

    #[test]
    fn test_login_message_keeps_other_errors() {
        assert_eq!(ApiError::Http(500).login_message(), "HTTP 500");
        assert_eq!(
            ApiError::Network("timeout".to_string()).login_message(),
            "Network error: timeout"
        );
    }
}
