// ============================================================================
// APP VIEW - Guardia de rutas + composición de la pantalla activa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, create_element, set_class_name, ElementBuilder};
use crate::router::{self, current_route, resolve, Route, RouteDecision};
use crate::state::AppState;
use crate::views::{
    render_assignments, render_dashboard, render_fuel, render_header, render_insurance,
    render_login, render_maintenance, render_reports, render_settings, render_users,
    render_vehicles,
};

/// Punto de entrada de cada render: la guardia decide y aquí se monta
/// la pantalla que corresponde.
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let route = current_route();
    match resolve(route, state.session.role()) {
        RouteDecision::Login | RouteDecision::Render(Route::Login) => render_login(state),
        RouteDecision::Home => {
            // Redirigir; el hashchange vuelve a renderizar con la ruta buena
            router::navigate(Route::Dashboard);
            Ok(ElementBuilder::new("div")?.text("Chargement...").build())
        }
        RouteDecision::Render(route) => render_shell(state, route),
    }
}

/// Header + <main> con la pantalla activa
fn render_shell(state: &AppState, route: Route) -> Result<Element, JsValue> {
    let wrapper = ElementBuilder::new("div")?
        .class("min-h-screen bg-slate-50")
        .child(render_header(state)?)?
        .build();

    let main = create_element("main")?;
    set_class_name(&main, "max-w-6xl mx-auto p-4");

    let screen = match route {
        Route::Vehicles => render_vehicles(state)?,
        Route::Assignments => render_assignments(state)?,
        Route::Maintenance => render_maintenance(state)?,
        Route::Insurance => render_insurance(state)?,
        Route::Fuel => render_fuel(state)?,
        Route::Reports => render_reports(state)?,
        Route::Users => render_users(state)?,
        Route::Settings => render_settings(state)?,
        // Login nunca llega hasta aquí: lo corta la guardia
        Route::Dashboard | Route::Login => render_dashboard(state)?,
    };
    append_child(&main, &screen)?;
    append_child(&wrapper, &main)?;
    Ok(wrapper)
}
