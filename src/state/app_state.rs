// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{
    AppSettings, Assignment, DashboardStats, FuelEntry, InsurancePolicy, MaintenanceCostRow,
    MaintenanceRecord, Vehicle, VehicleFilters,
};
use crate::state::resource_state::ResourceState;
use crate::state::session_state::SessionState;

/// Estado global compartido entre viewmodels y vistas.
///
/// Todo vive detrás de Rc<RefCell<...>>: clonar el AppState es barato y
/// cualquier copia ve (y muta) los mismos datos.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,

    // Listas de recursos (list + create)
    pub vehicles: ResourceState<Vehicle>,
    pub assignments: ResourceState<Assignment>,
    pub maintenances: ResourceState<MaintenanceRecord>,
    pub insurances: ResourceState<InsurancePolicy>,
    pub fuels: ResourceState<FuelEntry>,

    // Filtros de la pantalla véhicules. Viven aquí y no en la vista
    // para sobrevivir al re-render que sigue a cada refetch.
    pub vehicle_filters: Rc<RefCell<VehicleFilters>>,

    // Tableau de bord
    pub dashboard: Rc<RefCell<Option<DashboardStats>>>,
    pub dashboard_loaded: Rc<RefCell<bool>>,

    // Rapports: rango elegido + filas generadas
    pub report_start: Rc<RefCell<String>>,
    pub report_end: Rc<RefCell<String>>,
    pub report_rows: Rc<RefCell<Vec<MaintenanceCostRow>>>,

    // Paramètres
    pub settings: Rc<RefCell<Option<AppSettings>>>,
    pub settings_loaded: Rc<RefCell<bool>>,

    // Callbacks de re-render (el App se suscribe al arrancar)
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            vehicles: ResourceState::new(),
            assignments: ResourceState::new(),
            maintenances: ResourceState::new(),
            insurances: ResourceState::new(),
            fuels: ResourceState::new(),
            vehicle_filters: Rc::new(RefCell::new(VehicleFilters::default())),
            dashboard: Rc::new(RefCell::new(None)),
            dashboard_loaded: Rc::new(RefCell::new(false)),
            report_start: Rc::new(RefCell::new(String::new())),
            report_end: Rc::new(RefCell::new(String::new())),
            report_rows: Rc::new(RefCell::new(Vec::new())),
            settings: Rc::new(RefCell::new(None)),
            settings_loaded: Rc::new(RefCell::new(false)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Registrar un callback que se dispara en cada notify_subscribers().
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar un cambio de estado (provoca un re-render completo).
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }

    /// Al navegar, cada pantalla vuelve a cargar sus datos como si se
    /// montara de cero. Las listas viejas se conservan hasta que llegue
    /// la respuesta nueva.
    pub fn reset_screen_caches(&self) {
        self.vehicles.reset();
        self.assignments.reset();
        self.maintenances.reset();
        self.insurances.reset();
        self.fuels.reset();
        *self.vehicle_filters.borrow_mut() = VehicleFilters::default();
        *self.dashboard_loaded.borrow_mut() = false;
        *self.settings_loaded.borrow_mut() = false;
        self.report_start.borrow_mut().clear();
        self.report_end.borrow_mut().clear();
        self.report_rows.borrow_mut().clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_resource_lists() {
        let state = AppState::new();
        let alias = state.clone();

        let vehicle: Vehicle = serde_json::from_str(
            r#"{"id":"v1","immatriculation":"AB-123-CD","marque":"Renault","modele":"Clio"}"#,
        )
        .unwrap();
        state.vehicles.begin_load();
        state.vehicles.finish(vec![vehicle]);

        assert_eq!(alias.vehicles.get_items().len(), 1);
    }

    #[test]
    fn test_notify_reaches_every_subscriber() {
        let state = AppState::new();
        let hits = Rc::new(RefCell::new(0u32));

        for _ in 0..3 {
            let hits = Rc::clone(&hits);
            state.subscribe_to_changes(move || {
                *hits.borrow_mut() += 1;
            });
        }

        state.notify_subscribers();
        assert_eq!(*hits.borrow(), 3);
    }

    #[test]
    fn test_reset_screen_caches_clears_filters_and_reports() {
        let state = AppState::new();
        state.vehicle_filters.borrow_mut().statut = "actif".to_string();
        state.report_start.borrow_mut().push_str("2024-01-01");
        state.report_rows.borrow_mut().push(MaintenanceCostRow {
            vehicule_id: "v1".to_string(),
            total: 12.5,
        });
        state.vehicles.begin_load();
        state.vehicles.finish(Vec::new());

        state.reset_screen_caches();

        assert!(state.vehicle_filters.borrow().statut.is_empty());
        assert!(state.report_start.borrow().is_empty());
        assert!(state.report_rows.borrow().is_empty());
        assert!(state.vehicles.needs_load());
    }
}
