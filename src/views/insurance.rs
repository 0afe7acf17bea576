// ============================================================================
// INSURANCE VIEW - Assurances et documents de contrat
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, create_element, on_click, selected_file, set_attribute, set_class_name,
    set_text_content, ElementBuilder,
};
use crate::models::InsuranceDraft;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::viewmodels::ResourceViewModel;
use crate::views::fields::{labeled_input, table_shell};

pub fn render_insurance(state: &AppState) -> Result<Element, JsValue> {
    if state.insurances.needs_load() {
        state.insurances.begin_load();
        let vm = ResourceViewModel::insurances(state);
        spawn_local(async move { vm.refresh("").await });
    }

    let page = ElementBuilder::new("div")?.class("grid gap-4").build();

    let draft = Rc::new(RefCell::new(InsuranceDraft::default()));
    let form = ElementBuilder::new("div")?
        .class("bg-white border rounded p-3 grid md:grid-cols-7 gap-2 items-end")
        .build();
    append_child(&form, &labeled_input("vehicule id", "text", &draft, |d: &mut InsuranceDraft| &mut d.vehicule_id)?)?;
    append_child(&form, &labeled_input("assureur", "text", &draft, |d: &mut InsuranceDraft| &mut d.assureur)?)?;
    append_child(&form, &labeled_input("numero contrat", "text", &draft, |d: &mut InsuranceDraft| &mut d.numero_contrat)?)?;
    append_child(&form, &labeled_input("date debut", "date", &draft, |d: &mut InsuranceDraft| &mut d.date_debut)?)?;
    append_child(&form, &labeled_input("date fin", "date", &draft, |d: &mut InsuranceDraft| &mut d.date_fin)?)?;
    append_child(&form, &labeled_input("prime", "text", &draft, |d: &mut InsuranceDraft| &mut d.prime)?)?;

    // Input de fichero: se lee al crear, no pasa por el borrador
    let document_group = create_element("div")?;
    let document_label = ElementBuilder::new("label")?
        .class("text-xs")
        .text("Document")
        .build();
    let document_input = create_element("input")?;
    set_attribute(&document_input, "type", "file")?;
    set_class_name(&document_input, "w-full");
    append_child(&document_group, &document_label)?;
    append_child(&document_group, &document_input)?;
    append_child(&form, &document_group)?;

    let create_btn = ElementBuilder::new("button")?
        .class("bg-green-600 text-white px-3 py-2 rounded")
        .text("Créer")
        .build();
    {
        let state = state.clone();
        let draft = Rc::clone(&draft);
        let document_input = document_input.clone();
        on_click(&create_btn, move |_| {
            let vm = ResourceViewModel::insurances(&state);
            let fields = draft.borrow().multipart_fields();
            let file = selected_file(&document_input);
            spawn_local(async move {
                vm.create_with_document(&fields, file.as_ref(), "").await;
            });
        })?;
    }
    append_child(&form, &create_btn)?;
    append_child(&page, &form)?;

    let (card, tbody) = table_shell(&["Véhicule", "Assureur", "Fin", "Prime", "Doc"])?;
    let api = ApiClient::new();
    for policy in state.insurances.get_items() {
        let row = ElementBuilder::new("tr")?.class("border-t").build();

        let vehicle_cell = create_element("td")?;
        set_class_name(&vehicle_cell, "p-2");
        set_text_content(&vehicle_cell, &policy.vehicule_id);
        append_child(&row, &vehicle_cell)?;

        for text in [policy.assureur.as_str(), policy.date_fin.as_str()] {
            let td = create_element("td")?;
            set_text_content(&td, text);
            append_child(&row, &td)?;
        }

        let prime_cell = create_element("td")?;
        set_text_content(&prime_cell, &format!("€ {}", policy.prime));
        append_child(&row, &prime_cell)?;

        let doc_cell = create_element("td")?;
        if policy.has_document() {
            let link = ElementBuilder::new("a")?
                .class("text-blue-600")
                .attr("href", &api.insurance_download_url(&policy.id))?
                .text("Télécharger")
                .build();
            append_child(&doc_cell, &link)?;
        } else {
            set_text_content(&doc_cell, "-");
        }
        append_child(&row, &doc_cell)?;

        append_child(&tbody, &row)?;
    }
    append_child(&page, &card)?;

    Ok(page)
}
