// ============================================================================
// VEHICLES VIEW - Liste, filtres et création de véhicules
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_click, set_class_name, ElementBuilder};
use crate::models::{VehicleDraft, VehicleFilters, VEHICLE_STATUTS, VEHICLE_TYPES};
use crate::services::query::vehicle_query;
use crate::state::AppState;
use crate::viewmodels::ResourceViewModel;
use crate::views::fields::{labeled_input, labeled_select, labeled_textarea, table_row, table_shell};

pub fn render_vehicles(state: &AppState) -> Result<Element, JsValue> {
    if state.vehicles.needs_load() {
        state.vehicles.begin_load();
        let vm = ResourceViewModel::vehicles(state);
        let query = vehicle_query(&state.vehicle_filters.borrow());
        spawn_local(async move { vm.refresh(&query).await });
    }

    let page = ElementBuilder::new("div")?.class("grid gap-4").build();
    append_child(&page, &filter_bar(state)?)?;
    append_child(&page, &create_form(state)?)?;
    append_child(&page, &vehicle_table(state)?)?;
    Ok(page)
}

/// Los filtros viven en el AppState: el query de refetch tras una
/// creación los reutiliza tal cual.
fn filter_bar(state: &AppState) -> Result<Element, JsValue> {
    let bar = ElementBuilder::new("div")?
        .class("bg-white border rounded p-3 grid md:grid-cols-4 gap-2 items-end")
        .build();

    let filters = &state.vehicle_filters;
    append_child(&bar, &labeled_input("Recherche", "text", filters, |f: &mut VehicleFilters| &mut f.q)?)?;
    append_child(
        &bar,
        &labeled_select("Statut", Some("Tous"), &VEHICLE_STATUTS, filters, |f: &mut VehicleFilters| {
            &mut f.statut
        })?,
    )?;
    append_child(
        &bar,
        &labeled_input("Département", "text", filters, |f: &mut VehicleFilters| &mut f.departement)?,
    )?;

    let filter_btn = ElementBuilder::new("button")?
        .class("bg-slate-900 text-white py-2 px-3 rounded")
        .text("Filtrer")
        .build();
    {
        let state = state.clone();
        on_click(&filter_btn, move |_| {
            let vm = ResourceViewModel::vehicles(&state);
            let query = vehicle_query(&state.vehicle_filters.borrow());
            state.vehicles.begin_load();
            spawn_local(async move { vm.refresh(&query).await });
        })?;
    }
    append_child(&bar, &filter_btn)?;

    Ok(bar)
}

fn create_form(state: &AppState) -> Result<Element, JsValue> {
    let draft = Rc::new(RefCell::new(VehicleDraft::default()));

    let card = ElementBuilder::new("div")?.class("bg-white border rounded p-3").build();
    let title = ElementBuilder::new("h3")?
        .class("font-semibold mb-2")
        .text("Nouveau véhicule")
        .build();
    append_child(&card, &title)?;

    let grid = ElementBuilder::new("div")?.class("grid md:grid-cols-4 gap-2").build();
    append_child(&grid, &labeled_input("immatriculation", "text", &draft, |d: &mut VehicleDraft| &mut d.immatriculation)?)?;
    append_child(&grid, &labeled_input("marque", "text", &draft, |d: &mut VehicleDraft| &mut d.marque)?)?;
    append_child(&grid, &labeled_input("modele", "text", &draft, |d: &mut VehicleDraft| &mut d.modele)?)?;
    append_child(&grid, &labeled_input("annee", "text", &draft, |d: &mut VehicleDraft| &mut d.annee)?)?;
    append_child(&grid, &labeled_input("kilometrage initial", "text", &draft, |d: &mut VehicleDraft| &mut d.kilometrage_initial)?)?;
    append_child(&grid, &labeled_select("type", None, &VEHICLE_TYPES, &draft, |d: &mut VehicleDraft| &mut d.type_vehicule)?)?;
    append_child(&grid, &labeled_select("statut", None, &VEHICLE_STATUTS, &draft, |d: &mut VehicleDraft| &mut d.statut)?)?;
    append_child(&grid, &labeled_input("departement", "text", &draft, |d: &mut VehicleDraft| &mut d.departement)?)?;

    let notes_group = labeled_textarea("Notes", &draft, |d: &mut VehicleDraft| &mut d.notes)?;
    set_class_name(&notes_group, "md:col-span-4");
    append_child(&grid, &notes_group)?;
    append_child(&card, &grid)?;

    let create_btn = ElementBuilder::new("button")?
        .class("mt-2 bg-green-600 text-white px-3 py-2 rounded")
        .text("Créer")
        .build();
    {
        let state = state.clone();
        let draft = Rc::clone(&draft);
        on_click(&create_btn, move |_| {
            let vm = ResourceViewModel::vehicles(&state);
            let payload = draft.borrow().to_payload();
            let query = vehicle_query(&state.vehicle_filters.borrow());
            spawn_local(async move { vm.create(&payload, &query).await });
        })?;
    }
    append_child(&card, &create_btn)?;

    Ok(card)
}

fn vehicle_table(state: &AppState) -> Result<Element, JsValue> {
    let (card, tbody) = table_shell(&[
        "Immatriculation",
        "Marque",
        "Modèle",
        "Année",
        "Statut",
        "Département",
    ])?;

    for vehicle in state.vehicles.get_items() {
        let row = table_row(&[
            &vehicle.immatriculation,
            &vehicle.marque,
            &vehicle.modele,
            &vehicle.annee.to_string(),
            &vehicle.statut,
            vehicle.departement.as_deref().unwrap_or(""),
        ])?;
        append_child(&tbody, &row)?;
    }

    Ok(card)
}
