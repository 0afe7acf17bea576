// ============================================================================
// SETTINGS VIEW - Paramètres des alertes d'assurance
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
use crate::models::DEFAULT_ALERT_DAYS;
use crate::state::AppState;
use crate::viewmodels::SettingsViewModel;

pub fn render_settings(state: &AppState) -> Result<Element, JsValue> {
    if !*state.settings_loaded.borrow() {
        *state.settings_loaded.borrow_mut() = true;
        let vm = SettingsViewModel::new(state.clone());
        spawn_local(async move { vm.load().await });
    }

    let current_days = state
        .settings
        .borrow()
        .as_ref()
        .map(|s| s.alert_threshold_days)
        .unwrap_or(DEFAULT_ALERT_DAYS);
    let days = Rc::new(RefCell::new(current_days.to_string()));

    let card = ElementBuilder::new("div")?
        .class("bg-white border rounded p-4 w-full max-w-lg")
        .build();

    let title = ElementBuilder::new("h3")?
        .class("font-semibold mb-2")
        .text("Paramètres")
        .build();

    let label = ElementBuilder::new("label")?
        .class("text-sm")
        .text("Alerte expiration assurance (jours)")
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", "number")?;
    set_class_name(&input, "border w-full px-2 py-1 rounded mt-1");
    set_input_value(&input, &days.borrow());
    {
        let days = Rc::clone(&days);
        on_input(&input, move |e| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *days.borrow_mut() = target.value();
            }
        })?;
    }

    let save_btn = ElementBuilder::new("button")?
        .class("mt-3 bg-slate-900 text-white px-3 py-2 rounded")
        .text("Sauvegarder")
        .build();
    {
        let state = state.clone();
        let days = Rc::clone(&days);
        on_click(&save_btn, move |_| {
            let vm = SettingsViewModel::new(state.clone());
            let days_val = days.borrow().clone();
            spawn_local(async move { vm.save(&days_val).await });
        })?;
    }

    append_child(&card, &title)?;
    append_child(&card, &label)?;
    append_child(&card, &input)?;
    append_child(&card, &save_btn)?;

    Ok(card)
}
