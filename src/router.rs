// ============================================================================
// ROUTER - Rutas hash + guardia de acceso por rol
// ============================================================================

use crate::models::Role;

/// Pantallas de la aplicación. La ruta viaja en el fragmento de la URL
/// (#/vehicles) para que el hosting estático no necesite rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Vehicles,
    Assignments,
    Maintenance,
    Insurance,
    Fuel,
    Reports,
    Users,
    Settings,
    Login,
}

impl Route {
    /// Parsear el fragmento de la URL. Las rutas desconocidas caen en
    /// el tableau de bord.
    pub fn from_hash(hash: &str) -> Self {
        match hash.trim_start_matches('#') {
            "/vehicles" => Route::Vehicles,
            "/assignments" => Route::Assignments,
            "/maintenance" => Route::Maintenance,
            "/insurance" => Route::Insurance,
            "/fuel" => Route::Fuel,
            "/reports" => Route::Reports,
            "/users" => Route::Users,
            "/settings" => Route::Settings,
            "/login" => Route::Login,
            _ => Route::Dashboard,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Vehicles => "/vehicles",
            Route::Assignments => "/assignments",
            Route::Maintenance => "/maintenance",
            Route::Insurance => "/insurance",
            Route::Fuel => "/fuel",
            Route::Reports => "/reports",
            Route::Users => "/users",
            Route::Settings => "/settings",
            Route::Login => "/login",
        }
    }

    /// Roles autorizados para la ruta; None = basta con estar conectado.
    pub fn required_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Users => Some(&[Role::Admin]),
            _ => None,
        }
    }
}

/// Decisión de la guardia para el render actual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Sin sesión: mostrar el login
    Login,
    /// Volver al tableau de bord (rol insuficiente, o ya conectado en /login)
    Home,
    /// Renderizar la pantalla pedida
    Render(Route),
}

/// Guardia central de rutas. Se evalúa en cada render, nunca en el
/// momento del click, así un logout forzado también la atraviesa.
pub fn resolve(route: Route, role: Option<Role>) -> RouteDecision {
    let Some(role) = role else {
        return match route {
            Route::Login => RouteDecision::Render(Route::Login),
            _ => RouteDecision::Login,
        };
    };

    if route == Route::Login {
        return RouteDecision::Home;
    }

    match route.required_roles() {
        Some(allowed) if !allowed.contains(&role) => RouteDecision::Home,
        _ => RouteDecision::Render(route),
    }
}

/// Cambiar la ruta. El listener de hashchange dispara el re-render.
pub fn navigate(route: Route) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(route.path()) {
            log::error!("❌ [ROUTER] No se pudo navegar a {}: {:?}", route.path(), e);
        }
    }
}

/// Ruta actual según location.hash.
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or(Route::Dashboard)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hash_parses_known_routes() {
        assert_eq!(Route::from_hash("#/vehicles"), Route::Vehicles);
        assert_eq!(Route::from_hash("#/users"), Route::Users);
        assert_eq!(Route::from_hash("#/login"), Route::Login);
        assert_eq!(Route::from_hash("#/settings"), Route::Settings);
    }

    #[test]
    fn test_from_hash_defaults_to_dashboard() {
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#/"), Route::Dashboard);
        assert_eq!(Route::from_hash("#/nimporte-quoi"), Route::Dashboard);
    }

    #[test]
    fn test_hash_roundtrip() {
        for route in [
            Route::Dashboard,
            Route::Vehicles,
            Route::Assignments,
            Route::Maintenance,
            Route::Insurance,
            Route::Fuel,
            Route::Reports,
            Route::Users,
            Route::Settings,
            Route::Login,
        ] {
            assert_eq!(Route::from_hash(&format!("#{}", route.path())), route);
        }
    }

    #[test]
    fn test_guard_blocks_anonymous_users() {
        assert_eq!(resolve(Route::Vehicles, None), RouteDecision::Login);
        assert_eq!(resolve(Route::Dashboard, None), RouteDecision::Login);
        assert_eq!(resolve(Route::Users, None), RouteDecision::Login);
    }

    #[test]
    fn test_guard_lets_anonymous_users_log_in() {
        assert_eq!(resolve(Route::Login, None), RouteDecision::Render(Route::Login));
    }

    #[test]
    fn test_guard_redirects_authed_users_away_from_login() {
        assert_eq!(resolve(Route::Login, Some(Role::Agent)), RouteDecision::Home);
        assert_eq!(resolve(Route::Login, Some(Role::Admin)), RouteDecision::Home);
    }

    #[test]
    fn test_guard_restricts_users_screen_to_admins() {
        assert_eq!(
            resolve(Route::Users, Some(Role::Admin)),
            RouteDecision::Render(Route::Users)
        );
        assert_eq!(resolve(Route::Users, Some(Role::Gestionnaire)), RouteDecision::Home);
        assert_eq!(resolve(Route::Users, Some(Role::Agent)), RouteDecision::Home);
    }

    #[test]
    fn test_guard_allows_any_role_on_shared_screens() {
        for role in [Role::Admin, Role::Gestionnaire, Role::Agent] {
            assert_eq!(
                resolve(Route::Fuel, Some(role)),
                RouteDecision::Render(Route::Fuel)
            );
        }
    }
}
