/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000 (por defecto)
/// - Producción: via BACKEND_URL env var (ver build.rs y .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Claves de localStorage. Las mismas que usaba la versión anterior del
/// back-office para no invalidar las sesiones existentes.
pub const TOKEN_STORAGE_KEY: &str = "tp_token";
pub const USER_STORAGE_KEY: &str = "tp_user";
