// ============================================================================
// QUERY - Armado de query strings
// ============================================================================

use crate::models::VehicleFilters;

/// Query de GET /vehicles: solo los filtros con valor terminan en la URL.
/// Devuelve "" cuando no hay ninguno.
pub fn vehicle_query(filters: &VehicleFilters) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    if !filters.q.is_empty() {
        pairs.push(("q", &filters.q));
    }
    if !filters.statut.is_empty() {
        pairs.push(("statut", &filters.statut));
    }
    if !filters.departement.is_empty() {
        pairs.push(("departement", &filters.departement));
    }
    serde_urlencoded::to_string(&pairs).unwrap_or_default()
}

/// Query del rapport de coûts: start y end viajan siempre, vacíos incluidos.
pub fn report_query(start: &str, end: &str) -> String {
    serde_urlencoded::to_string([("start", start), ("end", end)]).unwrap_or_default()
}

/// Pegar path y query. Sin query no hay '?'.
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filters_yields_empty_query() {
        assert_eq!(vehicle_query(&VehicleFilters::default()), "");
    }

    #[test]
    fn test_single_filter() {
        let filters = VehicleFilters {
            statut: "actif".to_string(),
            ..Default::default()
        };
        assert_eq!(vehicle_query(&filters), "statut=actif");
    }

    #[test]
    fn test_all_filters_keep_order() {
        let filters = VehicleFilters {
            q: "kangoo".to_string(),
            statut: "maintenance".to_string(),
            departement: "Nord".to_string(),
        };
        assert_eq!(
            vehicle_query(&filters),
            "q=kangoo&statut=maintenance&departement=Nord"
        );
    }

    #[test]
    fn test_values_are_url_encoded() {
        let filters = VehicleFilters {
            q: "renault trafic".to_string(),
            ..Default::default()
        };
        assert_eq!(vehicle_query(&filters), "q=renault+trafic");
    }

    #[test]
    fn test_report_query_always_sends_both_bounds() {
        assert_eq!(report_query("", ""), "start=&end=");
        assert_eq!(
            report_query("2026-01-01", "2026-06-30"),
            "start=2026-01-01&end=2026-06-30"
        );
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/vehicles", ""), "/vehicles");
        assert_eq!(with_query("/vehicles", "statut=actif"), "/vehicles?statut=actif");
    }
}
