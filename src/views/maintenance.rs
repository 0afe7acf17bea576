// ============================================================================
// MAINTENANCE VIEW - Entretiens des véhicules
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, set_class_name, ElementBuilder};
use crate::models::{MaintenanceDraft, MAINTENANCE_TYPES};
use crate::state::AppState;
use crate::utils::dates::today;
use crate::viewmodels::ResourceViewModel;
use crate::views::fields::{labeled_input, labeled_select, labeled_textarea, table_row, table_shell};

pub fn render_maintenance(state: &AppState) -> Result<Element, JsValue> {
    if state.maintenances.needs_load() {
        state.maintenances.begin_load();
        let vm = ResourceViewModel::maintenances(state);
        spawn_local(async move { vm.refresh("").await });
    }

    let page = ElementBuilder::new("div")?.class("grid gap-4").build();

    let draft = Rc::new(RefCell::new(MaintenanceDraft::default()));
    let form = ElementBuilder::new("div")?
        .class("bg-white border rounded p-3 grid md:grid-cols-6 gap-2 items-end")
        .build();
    append_child(&form, &labeled_input("vehicule_id", "text", &draft, |d: &mut MaintenanceDraft| &mut d.vehicule_id)?)?;
    append_child(&form, &labeled_input("date", "date", &draft, |d: &mut MaintenanceDraft| &mut d.date)?)?;
    append_child(&form, &labeled_select("type", None, &MAINTENANCE_TYPES, &draft, |d: &mut MaintenanceDraft| &mut d.type_entretien)?)?;
    append_child(&form, &labeled_input("garage", "text", &draft, |d: &mut MaintenanceDraft| &mut d.garage)?)?;
    append_child(&form, &labeled_input("cout", "text", &draft, |d: &mut MaintenanceDraft| &mut d.cout)?)?;
    append_child(&form, &labeled_input("kilometrage", "text", &draft, |d: &mut MaintenanceDraft| &mut d.kilometrage)?)?;

    let description_group = labeled_textarea("Description", &draft, |d: &mut MaintenanceDraft| &mut d.description)?;
    set_class_name(&description_group, "md:col-span-6");
    append_child(&form, &description_group)?;

    let create_btn = ElementBuilder::new("button")?
        .class("bg-green-600 text-white px-3 py-2 rounded")
        .text("Ajouter")
        .build();
    {
        let state = state.clone();
        let draft = Rc::clone(&draft);
        on_click(&create_btn, move |_| {
            let vm = ResourceViewModel::maintenances(&state);
            let payload = draft.borrow().to_payload(&today());
            spawn_local(async move { vm.create(&payload, "").await });
        })?;
    }
    append_child(&form, &create_btn)?;
    append_child(&page, &form)?;

    let (card, tbody) = table_shell(&["Véhicule", "Date", "Type", "Garage", "Coût"])?;
    for record in state.maintenances.get_items() {
        let row = table_row(&[
            &record.vehicule_id,
            &record.date,
            &record.type_entretien,
            record.garage.as_deref().unwrap_or("-"),
            &format!("€ {}", record.cout),
        ])?;
        append_child(&tbody, &row)?;
    }
    append_child(&page, &card)?;

    Ok(page)
}
