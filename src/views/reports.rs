// ============================================================================
// REPORTS VIEW - Rapport de coûts d'entretien
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, create_element, on_click, on_input, set_attribute, set_class_name,
    set_input_value, ElementBuilder,
};
use crate::state::AppState;
use crate::viewmodels::ReportsViewModel;

/// El rango elegido vive en el AppState para sobrevivir al re-render
/// que sigue a la generación del rapport.
pub fn render_reports(state: &AppState) -> Result<Element, JsValue> {
    let page = ElementBuilder::new("div")?.class("grid gap-4").build();

    let controls = ElementBuilder::new("div")?
        .class("bg-white border rounded p-3 flex gap-2 items-end")
        .build();
    append_child(&controls, &date_field("Début", &state.report_start)?)?;
    append_child(&controls, &date_field("Fin", &state.report_end)?)?;

    let generate_btn = ElementBuilder::new("button")?
        .class("bg-slate-900 text-white px-3 py-2 rounded")
        .text("Générer")
        .build();
    {
        let state = state.clone();
        on_click(&generate_btn, move |_| {
            let vm = ReportsViewModel::new(state.clone());
            spawn_local(async move { vm.generate().await });
        })?;
    }
    append_child(&controls, &generate_btn)?;
    append_child(&page, &controls)?;

    let results_card = ElementBuilder::new("div")?.class("bg-white border rounded p-3").build();
    let title = ElementBuilder::new("h3")?
        .class("font-semibold mb-2")
        .text("Coûts d’entretien par véhicule")
        .build();
    let list = ElementBuilder::new("ul")?.class("text-sm list-disc pl-5").build();
    for row in state.report_rows.borrow().iter() {
        let item = ElementBuilder::new("li")?
            .text(&format!("{} · € {}", row.vehicule_id, row.total))
            .build();
        append_child(&list, &item)?;
    }
    append_child(&results_card, &title)?;
    append_child(&results_card, &list)?;
    append_child(&page, &results_card)?;

    Ok(page)
}

fn date_field(label_text: &str, value: &Rc<RefCell<String>>) -> Result<Element, JsValue> {
    let group = create_element("div")?;
    let label = ElementBuilder::new("label")?
        .class("text-xs")
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", "date")?;
    set_class_name(&input, "border px-2 py-1 rounded");
    set_input_value(&input, &value.borrow());

    {
        let value = Rc::clone(value);
        on_input(&input, move |e| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *value.borrow_mut() = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}
