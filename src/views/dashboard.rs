// ============================================================================
// DASHBOARD VIEW - Tableau de bord de la flotte
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::DashboardViewModel;

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    if !*state.dashboard_loaded.borrow() {
        *state.dashboard_loaded.borrow_mut() = true;
        let vm = DashboardViewModel::new(state.clone());
        spawn_local(async move { vm.load().await });
    }

    let stats = state.dashboard.borrow().clone();
    let Some(stats) = stats else {
        return Ok(ElementBuilder::new("p")?.text("Chargement...").build());
    };

    let page = ElementBuilder::new("div")?.class("grid md:grid-cols-4 gap-4").build();

    append_child(&page, &stat_card("Nombre véhicules", &stats.nombre_vehicules.to_string())?)?;
    append_child(&page, &stat_card("Actifs", &stats.vehicules_actifs.to_string())?)?;
    append_child(
        &page,
        &stat_card("En maintenance", &stats.vehicules_en_maintenance.to_string())?,
    )?;
    append_child(
        &page,
        &stat_card(
            "Coûts entretiens (mois)",
            &format!("€ {:.2}", stats.couts_entretiens_mois),
        )?,
    )?;

    let alerts_card = ElementBuilder::new("div")?
        .class("md:col-span-4 bg-white rounded p-4 border")
        .build();
    let alerts_title = ElementBuilder::new("h3")?
        .class("font-semibold mb-2")
        .text("Assurances à risque")
        .build();
    let alerts_list = ElementBuilder::new("ul")?.class("text-sm list-disc pl-5").build();

    for policy in &stats.assurances_a_risque {
        let item = ElementBuilder::new("li")?
            .text(&format!("{} · fin {}", policy.assureur, policy.date_fin))
            .build();
        append_child(&alerts_list, &item)?;
    }

    append_child(&alerts_card, &alerts_title)?;
    append_child(&alerts_card, &alerts_list)?;
    append_child(&page, &alerts_card)?;

    Ok(page)
}

fn stat_card(title: &str, value: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?.class("bg-white rounded p-4 border").build();
    let label = ElementBuilder::new("div")?
        .class("text-slate-500 text-sm")
        .text(title)
        .build();
    let amount = ElementBuilder::new("div")?
        .class("text-2xl font-bold")
        .text(value)
        .build();
    append_child(&card, &label)?;
    append_child(&card, &amount)?;
    Ok(card)
}
