// ============================================================================
// FUEL VIEW - Journal de carburant
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::FuelDraft;
use crate::state::AppState;
use crate::utils::dates::today;
use crate::viewmodels::ResourceViewModel;
use crate::views::fields::{labeled_input, table_row, table_shell};

pub fn render_fuel(state: &AppState) -> Result<Element, JsValue> {
    if state.fuels.needs_load() {
        state.fuels.begin_load();
        let vm = ResourceViewModel::fuels(state);
        spawn_local(async move { vm.refresh("").await });
    }

    let page = ElementBuilder::new("div")?.class("grid gap-4").build();

    let draft = Rc::new(RefCell::new(FuelDraft::default()));
    let form = ElementBuilder::new("div")?
        .class("bg-white border rounded p-3 grid md:grid-cols-5 gap-2 items-end")
        .build();
    append_child(&form, &labeled_input("vehicule_id", "text", &draft, |d: &mut FuelDraft| &mut d.vehicule_id)?)?;
    append_child(&form, &labeled_input("date", "date", &draft, |d: &mut FuelDraft| &mut d.date)?)?;
    append_child(&form, &labeled_input("kilometrage", "text", &draft, |d: &mut FuelDraft| &mut d.kilometrage)?)?;
    append_child(&form, &labeled_input("litres", "text", &draft, |d: &mut FuelDraft| &mut d.litres)?)?;
    append_child(&form, &labeled_input("cout", "text", &draft, |d: &mut FuelDraft| &mut d.cout)?)?;

    let create_btn = ElementBuilder::new("button")?
        .class("bg-green-600 text-white px-3 py-2 rounded")
        .text("Ajouter")
        .build();
    {
        let state = state.clone();
        let draft = Rc::clone(&draft);
        on_click(&create_btn, move |_| {
            let vm = ResourceViewModel::fuels(&state);
            let payload = draft.borrow().to_payload(&today());
            spawn_local(async move { vm.create(&payload, "").await });
        })?;
    }
    append_child(&form, &create_btn)?;
    append_child(&page, &form)?;

    let (card, tbody) = table_shell(&["Véhicule", "Date", "Km", "Litres", "Coût"])?;
    for entry in state.fuels.get_items() {
        let row = table_row(&[
            &entry.vehicule_id,
            &entry.date,
            &entry.kilometrage.to_string(),
            &entry.litres.to_string(),
            &format!("€ {}", entry.cout),
        ])?;
        append_child(&tbody, &row)?;
    }
    append_child(&page, &card)?;

    Ok(page)
}
