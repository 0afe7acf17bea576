// ============================================================================
// FIELDS - Campos de formulario y tablas compartidos por las pantallas
// ============================================================================
// Cada campo escribe directo en su borrador Rc<RefCell<D>> vía un
// accessor, igual en todas las pantallas de recursos. El borrador es
// local a la vista: un re-render lo vuelve a los valores por defecto.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::{
    append_child, create_element, on_change, on_input, set_attribute, set_class_name,
    set_input_value, set_select_value, set_textarea_value, ElementBuilder,
};

/// Label + <input>. input_type "text", "date", "password" o "number".
pub fn labeled_input<D: 'static>(
    label_text: &str,
    input_type: &str,
    draft: &Rc<RefCell<D>>,
    accessor: fn(&mut D) -> &mut String,
) -> Result<Element, JsValue> {
    let group = create_element("div")?;
    let label = ElementBuilder::new("label")?
        .class("text-xs capitalize")
        .text(label_text)
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_class_name(&input, "w-full border px-2 py-1 rounded");
    set_input_value(&input, accessor(&mut draft.borrow_mut()));

    {
        let draft = Rc::clone(draft);
        on_input(&input, move |e| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *accessor(&mut draft.borrow_mut()) = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    Ok(group)
}

/// Label + <select>. Con `blank_label` se antepone una opción de valor
/// vacío (el "Tous" de los filtros).
pub fn labeled_select<D: 'static>(
    label_text: &str,
    blank_label: Option<&str>,
    options: &[&str],
    draft: &Rc<RefCell<D>>,
    accessor: fn(&mut D) -> &mut String,
) -> Result<Element, JsValue> {
    let group = create_element("div")?;
    let label = ElementBuilder::new("label")?
        .class("text-xs capitalize")
        .text(label_text)
        .build();

    let select = create_element("select")?;
    set_class_name(&select, "w-full border px-2 py-1 rounded");

    if let Some(blank) = blank_label {
        let option = ElementBuilder::new("option")?.attr("value", "")?.text(blank).build();
        append_child(&select, &option)?;
    }
    for value in options {
        let option = ElementBuilder::new("option")?.text(value).build();
        append_child(&select, &option)?;
    }
    set_select_value(&select, accessor(&mut draft.borrow_mut()));

    {
        let draft = Rc::clone(draft);
        on_change(&select, move |e| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                *accessor(&mut draft.borrow_mut()) = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &select)?;
    Ok(group)
}

/// Label + <textarea>. El caller le pone la clase col-span al grupo.
pub fn labeled_textarea<D: 'static>(
    label_text: &str,
    draft: &Rc<RefCell<D>>,
    accessor: fn(&mut D) -> &mut String,
) -> Result<Element, JsValue> {
    let group = create_element("div")?;
    let label = ElementBuilder::new("label")?
        .class("text-xs")
        .text(label_text)
        .build();

    let area = create_element("textarea")?;
    set_class_name(&area, "w-full border px-2 py-1 rounded");
    set_textarea_value(&area, accessor(&mut draft.borrow_mut()));

    {
        let draft = Rc::clone(draft);
        on_input(&area, move |e| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok())
            {
                *accessor(&mut draft.borrow_mut()) = target.value();
            }
        })?;
    }

    append_child(&group, &label)?;
    append_child(&group, &area)?;
    Ok(group)
}

/// Tarjeta con tabla vacía. Devuelve (tarjeta, tbody): las filas se
/// agregan al tbody.
pub fn table_shell(headers: &[&str]) -> Result<(Element, Element), JsValue> {
    let card = ElementBuilder::new("div")?.class("bg-white border rounded").build();
    let table = ElementBuilder::new("table")?.class("w-full text-sm").build();
    let thead = ElementBuilder::new("thead")?.class("bg-slate-100 text-left").build();
    let header_row = create_element("tr")?;

    for (i, header) in headers.iter().enumerate() {
        let th = create_element("th")?;
        if i == 0 {
            set_class_name(&th, "p-2");
        }
        crate::dom::set_text_content(&th, header);
        append_child(&header_row, &th)?;
    }

    let tbody = create_element("tbody")?;
    append_child(&thead, &header_row)?;
    append_child(&table, &thead)?;
    append_child(&table, &tbody)?;
    append_child(&card, &table)?;
    Ok((card, tbody))
}

/// Fila de tabla; la primera celda lleva el padding de la cabecera.
pub fn table_row(cells: &[&str]) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("tr")?.class("border-t").build();
    for (i, cell) in cells.iter().enumerate() {
        let td = create_element("td")?;
        if i == 0 {
            set_class_name(&td, "p-2");
        }
        crate::dom::set_text_content(&td, cell);
        append_child(&row, &td)?;
    }
    Ok(row)
}
