// ============================================================================
// ASSIGNMENTS VIEW - Affectations véhicule / conducteur
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::AssignmentDraft;
use crate::state::AppState;
use crate::utils::dates::today;
use crate::viewmodels::ResourceViewModel;
use crate::views::fields::{labeled_input, table_row, table_shell};

pub fn render_assignments(state: &AppState) -> Result<Element, JsValue> {
    if state.assignments.needs_load() {
        state.assignments.begin_load();
        let vm = ResourceViewModel::assignments(state);
        spawn_local(async move { vm.refresh("").await });
    }

    let page = ElementBuilder::new("div")?.class("grid gap-4").build();

    // Formulario
    let draft = Rc::new(RefCell::new(AssignmentDraft::default()));
    let form = ElementBuilder::new("div")?
        .class("bg-white border rounded p-3 grid md:grid-cols-5 gap-2 items-end")
        .build();
    append_child(&form, &labeled_input("vehicule id", "text", &draft, |d: &mut AssignmentDraft| &mut d.vehicule_id)?)?;
    append_child(&form, &labeled_input("utilisateur id", "text", &draft, |d: &mut AssignmentDraft| &mut d.utilisateur_id)?)?;
    append_child(&form, &labeled_input("date debut", "date", &draft, |d: &mut AssignmentDraft| &mut d.date_debut)?)?;
    append_child(&form, &labeled_input("date fin prevue", "date", &draft, |d: &mut AssignmentDraft| &mut d.date_fin_prevue)?)?;
    append_child(&form, &labeled_input("motif", "text", &draft, |d: &mut AssignmentDraft| &mut d.motif)?)?;

    let create_btn = ElementBuilder::new("button")?
        .class("bg-green-600 text-white px-3 py-2 rounded")
        .text("Assigner")
        .build();
    {
        let state = state.clone();
        let draft = Rc::clone(&draft);
        on_click(&create_btn, move |_| {
            let vm = ResourceViewModel::assignments(&state);
            let payload = draft.borrow().to_payload(&today());
            spawn_local(async move { vm.create(&payload, "").await });
        })?;
    }
    append_child(&form, &create_btn)?;
    append_child(&page, &form)?;

    // Tabla
    let (card, tbody) = table_shell(&["Véhicule", "Utilisateur", "Début", "Fin prévue", "Motif"])?;
    for assignment in state.assignments.get_items() {
        let row = table_row(&[
            &assignment.vehicule_id,
            &assignment.utilisateur_id,
            &assignment.date_debut,
            assignment.date_fin_prevue.as_deref().unwrap_or("-"),
            assignment.motif.as_deref().unwrap_or("-"),
        ])?;
        append_child(&tbody, &row)?;
    }
    append_child(&page, &card)?;

    Ok(page)
}
