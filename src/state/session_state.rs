// ============================================================================
// SESSION STATE - Sesión autenticada (token bearer + perfil de usuario)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Role, User};
use crate::utils::constants::{TOKEN_STORAGE_KEY, USER_STORAGE_KEY};
use crate::utils::storage;

/// Estado de sesión compartido. El token se persiste crudo bajo
/// `tp_token` y el perfil como JSON bajo `tp_user`, así la sesión
/// sobrevive a un reload de la página.
#[derive(Clone)]
pub struct SessionState {
    token: Rc<RefCell<Option<String>>>,
    user: Rc<RefCell<Option<User>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            token: Rc::new(RefCell::new(None)),
            user: Rc::new(RefCell::new(None)),
        }
    }

    /// Restaurar la sesión desde localStorage al arrancar la app.
    /// Solo se restaura si token Y perfil están presentes y legibles.
    pub fn restore(&self) {
        let token = storage::load_raw(TOKEN_STORAGE_KEY);
        let user = storage::load_json::<User>(USER_STORAGE_KEY);

        if let (Some(token), Some(user)) = (token, user) {
            log::info!("💾 [SESSION] Sesión restaurada para {}", user.nom);
            self.set_memory(token, user);
        }
    }

    /// Abrir sesión tras un login exitoso y persistirla.
    pub fn set_session(&self, token: String, user: User) {
        if let Err(e) = storage::save_raw(TOKEN_STORAGE_KEY, &token) {
            log::error!("❌ [SESSION] No se pudo guardar el token: {}", e);
        }
        if let Err(e) = storage::save_json(USER_STORAGE_KEY, &user) {
            log::error!("❌ [SESSION] No se pudo guardar el perfil: {}", e);
        }

        log::info!("🔓 [SESSION] Sesión abierta: {} ({})", user.nom, user.role.as_str());
        self.set_memory(token, user);
    }

    /// Cerrar sesión: borra memoria y localStorage.
    pub fn clear(&self) {
        let _ = storage::remove(TOKEN_STORAGE_KEY);
        let _ = storage::remove(USER_STORAGE_KEY);
        self.clear_memory();
        log::info!("🔒 [SESSION] Sesión cerrada");
    }

    /// Mitad en memoria de la apertura de sesión. Token y perfil
    /// siempre se escriben juntos.
    fn set_memory(&self, token: String, user: User) {
        *self.token.borrow_mut() = Some(token);
        *self.user.borrow_mut() = Some(user);
    }

    /// Mitad en memoria del cierre. Sin token no hay sesión.
    fn clear_memory(&self) {
        *self.token.borrow_mut() = None;
        *self.user.borrow_mut() = None;
    }

    pub fn is_authed(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn get_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.borrow().as_ref().map(|u| u.role)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(role: &str) -> User {
        serde_json::from_str(&format!(
            r#"{{"id":"u1","nom":"Marie","email":"marie@transpublic.fr","role":"{}"}}"#,
            role
        ))
        .unwrap()
    }

    #[test]
    fn test_new_session_starts_logged_out() {
        let session = SessionState::new();

        assert!(!session.is_authed());
        assert!(session.get_token().is_none());
        assert!(session.get_user().is_none());
        assert!(session.role().is_none());
    }

    #[test]
    fn test_clone_shares_session() {
        let session = SessionState::new();
        let alias = session.clone();

        session.set_memory("jwt-abc".to_string(), sample_user("admin"));

        assert!(alias.is_authed());
        assert_eq!(alias.get_token().as_deref(), Some("jwt-abc"));
        assert_eq!(alias.get_user().map(|u| u.nom), Some("Marie".to_string()));
    }

    #[test]
    fn test_role_comes_from_stored_profile() {
        let session = SessionState::new();
        session.set_memory("jwt-abc".to_string(), sample_user("gestionnaire"));

        assert_eq!(session.role(), Some(Role::Gestionnaire));
    }

    #[test]
    fn test_clear_wipes_token_and_profile() {
        let session = SessionState::new();
        session.set_memory("jwt-abc".to_string(), sample_user("admin"));
        assert!(session.is_authed());

        session.clear_memory();

        assert!(!session.is_authed());
        assert!(session.get_token().is_none());
        assert!(session.get_user().is_none());
        assert!(session.role().is_none());
    }
}
