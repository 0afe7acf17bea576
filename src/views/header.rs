// ============================================================================
// HEADER - Barra de navegación de la aplicación
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, create_element, on_click, ElementBuilder};
use crate::models::Role;
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

const NAV_LINKS: [(&str, Route); 7] = [
    ("Tableau de bord", Route::Dashboard),
    ("Véhicules", Route::Vehicles),
    ("Affectations", Route::Assignments),
    ("Entretiens", Route::Maintenance),
    ("Assurances", Route::Insurance),
    ("Carburant", Route::Fuel),
    ("Rapports", Route::Reports),
];

pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("bg-slate-900 text-white").build();
    let bar = ElementBuilder::new("div")?
        .class("max-w-6xl mx-auto flex items-center justify-between p-4")
        .build();

    let brand = ElementBuilder::new("a")?
        .class("font-bold")
        .attr("href", "#/")?
        .text("TransPublic")
        .build();

    let nav = ElementBuilder::new("nav")?.class("flex gap-4 text-sm").build();
    for (label, route) in NAV_LINKS {
        append_child(&nav, &nav_link(label, route)?)?;
    }
    // La gestion des utilisateurs queda reservada a los admins
    if state.session.role() == Some(Role::Admin) {
        append_child(&nav, &nav_link("Utilisateurs", Route::Users)?)?;
    }

    let session_box = ElementBuilder::new("div")?
        .class("text-sm flex items-center gap-3")
        .build();

    match state.session.get_user() {
        Some(user) => {
            let chip = ElementBuilder::new("span")?
                .text(&format!("{} · {}", user.nom, user.role.as_str()))
                .build();

            let logout_btn = ElementBuilder::new("button")?
                .class("bg-red-500 hover:bg-red-600 text-white px-3 py-1 rounded")
                .text("Quitter")
                .build();
            {
                let state = state.clone();
                on_click(&logout_btn, move |_| {
                    SessionViewModel::new(state.clone()).logout();
                })?;
            }

            append_child(&session_box, &chip)?;
            append_child(&session_box, &logout_btn)?;
        }
        None => {
            let login_link = create_element("a")?;
            crate::dom::set_attribute(&login_link, "href", "#/login")?;
            crate::dom::set_text_content(&login_link, "Connexion");
            append_child(&session_box, &login_link)?;
        }
    }

    append_child(&bar, &brand)?;
    append_child(&bar, &nav)?;
    append_child(&bar, &session_box)?;
    append_child(&header, &bar)?;
    Ok(header)
}

fn nav_link(label: &str, route: Route) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("a")?
        .class("hover:underline")
        .attr("href", &format!("#{}", route.path()))?
        .text(label)
        .build())
}
