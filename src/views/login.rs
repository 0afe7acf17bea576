// ============================================================================
// LOGIN VIEW - Pantalla de connexion
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    append_child, create_element, on_input, on_submit, set_attribute, set_class_name,
    set_input_value, set_text_content, ElementBuilder,
};
use crate::state::AppState;
use crate::viewmodels::SessionViewModel;

/// Pantalla completa de login, sin header. Las credenciales de demo
/// vienen precargadas.
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let email = Rc::new(RefCell::new("admin@demo.fr".to_string()));
    let password = Rc::new(RefCell::new("admin".to_string()));

    let screen = ElementBuilder::new("div")?
        .class("min-h-screen grid place-items-center bg-gradient-to-br from-blue-50 to-slate-100")
        .build();

    let form = create_element("form")?;
    set_class_name(&form, "bg-white shadow rounded p-6 w-96 space-y-4");

    let title = ElementBuilder::new("h1")?
        .class("text-2xl font-bold")
        .text("Connexion")
        .build();

    // Oculto hasta que el login falle
    let error_slot = ElementBuilder::new("p")?
        .class("text-red-600 text-sm hidden")
        .build();

    let email_group = credential_field("Email", "text", &email)?;
    let password_group = credential_field("Mot de passe", "password", &password)?;

    let submit_btn = ElementBuilder::new("button")?
        .class("w-full bg-slate-900 text-white py-2 rounded")
        .text("Se connecter")
        .build();

    let hint = ElementBuilder::new("p")?
        .class("text-xs text-slate-600")
        .text("Astuce: en première utilisation, créez un compte admin via l'API /auth/register")
        .build();

    {
        let email = Rc::clone(&email);
        let password = Rc::clone(&password);
        let error_slot = error_slot.clone();
        let state = state.clone();

        on_submit(&form, move |e| {
            e.prevent_default();

            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();
            let error_slot = error_slot.clone();
            let state = state.clone();

            spawn_local(async move {
                let vm = SessionViewModel::new(state);
                match vm.login(&email_val, &password_val).await {
                    Ok(()) => {
                        log::info!("✅ [LOGIN] Login exitoso para {}", email_val);
                        dispatch_logged_in();
                    }
                    Err(e) => {
                        let message = e.login_message();
                        log::warn!("⚠️ [LOGIN] Login rechazado: {}", message);
                        set_text_content(&error_slot, &message);
                        set_class_name(&error_slot, "text-red-600 text-sm");
                    }
                }
            });
        })?;
    }

    append_child(&form, &title)?;
    append_child(&form, &error_slot)?;
    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &submit_btn)?;
    append_child(&form, &hint)?;
    append_child(&screen, &form)?;

    Ok(screen)
}

fn credential_field(
    label_text: &str,
    input_type: &str,
    value: &Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = create_element("div")?;
    let label = ElementBuilder::new("label")?
        .class("block text-sm")
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_class_name(&input, "border w-full px-3 py-2 rounded");
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

/// Avisar a main() para que re-renderice con la sesión ya abierta
fn dispatch_logged_in() {
    if let Some(window) = web_sys::window() {
        if let Ok(event) = web_sys::Event::new("loggedIn") {
            let _ = window.dispatch_event(&event);
        }
    }
}
