// ============================================================================
// USERS VIEW - Création rapide d'utilisateurs (admins)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{alert, append_child, on_click, ElementBuilder};
use crate::models::RegisterDraft;
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;
use crate::views::fields::{labeled_input, labeled_select};

const ROLES: [&str; 3] = ["admin", "gestionnaire", "agent"];

pub fn render_users(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("grid gap-4").build();

    let draft = Rc::new(RefCell::new(RegisterDraft::default()));
    let form = ElementBuilder::new("div")?
        .class("bg-white border rounded p-3 grid md:grid-cols-5 gap-2 items-end")
        .build();
    append_child(&form, &labeled_input("nom", "text", &draft, |d: &mut RegisterDraft| &mut d.nom)?)?;
    append_child(&form, &labeled_input("email", "text", &draft, |d: &mut RegisterDraft| &mut d.email)?)?;
    append_child(&form, &labeled_input("mot de passe", "password", &draft, |d: &mut RegisterDraft| &mut d.mot_de_passe)?)?;
    append_child(&form, &labeled_select("role", None, &ROLES, &draft, |d: &mut RegisterDraft| &mut d.role)?)?;
    append_child(&form, &labeled_input("departement", "text", &draft, |d: &mut RegisterDraft| &mut d.departement)?)?;

    let create_btn = ElementBuilder::new("button")?
        .class("bg-green-600 text-white px-3 py-2 rounded")
        .text("Créer")
        .build();
    {
        let state = state.clone();
        let draft = Rc::clone(&draft);
        on_click(&create_btn, move |_| {
            let vm = SessionViewModel::new(state.clone());
            let request_draft = draft.borrow().clone();
            spawn_local(async move {
                match vm.register(&request_draft).await {
                    Ok(()) => alert("Utilisateur créé. Utilisez la page de connexion."),
                    Err(e) => {
                        log::error!("❌ [USERS] Error creando usuario: {}", e);
                        alert("Erreur de création");
                    }
                }
            });
        })?;
    }
    append_child(&form, &create_btn)?;
    append_child(&page, &form)?;

    let note = ElementBuilder::new("p")?
        .class("text-sm text-slate-600")
        .text("Gestion des utilisateurs: création rapide ci-dessus. Pour des rôles/permissions avancés, nous pourrions ajouter la liste/édition/suppression.")
        .build();
    append_child(&page, &note)?;

    Ok(page)
}
