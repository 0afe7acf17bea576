/// Fecha de hoy en formato YYYY-MM-DD (UTC, igual que toISOString del
/// navegador). Los formularios la usan como default de los campos date.
pub fn today() -> String {
    let iso = js_sys::Date::new_0().to_iso_string();
    let iso = iso.as_string().unwrap_or_default();
    iso.get(..10).unwrap_or("").to_string()
}
