// ============================================================================
// TRANSPUBLIC FLOTTE - BACK-OFFICE MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod router;
mod views;
mod utils;
mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_logger::Config;

use crate::app::App;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🚀 TransPublic Flotte - Rust Puro + MVVM");

    // Crear y renderizar app
    let mut app = App::new()?;
    app.render()?;

    let state = app.state().clone();

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Nota: estos listeners globales solo se registran UNA VEZ en init(),
    // por lo que forget() no acumula closures.
    if let Some(win) = web_sys::window() {
        // Escuchar evento "loggedIn" para re-renderizar tras el login
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            log::info!("🔄 [MAIN] Evento loggedIn recibido, re-renderizando app...");
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);
        win.add_event_listener_with_callback("loggedIn", closure.as_ref().unchecked_ref())?;
        closure.forget();

        // Cada cambio de hash equivale a montar una pantalla nueva:
        // se invalidan las listas cargadas y se vuelve a renderizar
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            log::info!("🧭 [MAIN] Cambio de ruta detectado");
            state.reset_screen_caches();
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);
        win.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Re-render completo de la app (la única estrategia de refresco)
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App todavía no inicializada");
        }
    });
}
