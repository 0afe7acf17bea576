// ============================================================================
// RESOURCE VIEWMODEL - Lógica list/create compartida por los recursos
// ============================================================================
// Une el ResourceClient con su lista en el AppState. Véhicules,
// affectations, entretiens, assurances y carburant instancian este
// mismo viewmodel con su tipo de registro y de payload.
// ============================================================================

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::File;

use crate::dom::alert;
use crate::models::{
    ApiError, Assignment, AssignmentPayload, FuelEntry, FuelPayload, InsurancePolicy,
    MaintenancePayload, MaintenanceRecord, Vehicle, VehiclePayload,
};
use crate::services::resources::{
    ASSIGNMENTS_PATH, FUELS_PATH, INSURANCES_PATH, MAINTENANCES_PATH, VEHICLES_PATH,
};
use crate::services::{ApiClient, ResourceClient};
use crate::state::{AppState, ResourceState};
use crate::viewmodels::SessionViewModel;

pub struct ResourceViewModel<T, P> {
    state: AppState,
    list: ResourceState<T>,
    path: &'static str,
    _payload: PhantomData<P>,
}

impl<T, P> ResourceViewModel<T, P>
where
    T: DeserializeOwned + 'static,
    P: Serialize,
{
    fn client(&self) -> ResourceClient<T, P> {
        ResourceClient::new(
            ApiClient::with_token(self.state.session.get_token()),
            self.path,
        )
    }

    /// Cargar la lista. La vista marca begin_load() antes de spawnear
    /// este future; aquí solo se resuelve el resultado.
    pub async fn refresh(&self, query: &str) {
        match self.client().list(query).await {
            Ok(items) => {
                self.list.finish(items);
                self.state.notify_subscribers();
            }
            Err(ApiError::Auth) => {
                self.list.fail();
                SessionViewModel::new(self.state.clone()).force_logout();
            }
            Err(e) => {
                // Fallo silencioso: la lista anterior sigue en pantalla
                log::error!("❌ [RESOURCE] Error cargando {}: {}", self.path, e);
                self.list.fail();
                self.state.notify_subscribers();
            }
        }
    }

    /// Crear un registro y refrescar la lista. Con error se avisa por
    /// alert y no se notifica: el borrador del formulario queda intacto
    /// para reintentar.
    pub async fn create(&self, payload: &P, refetch_query: &str) {
        match self.client().create(payload).await {
            Ok(()) => self.refresh(refetch_query).await,
            Err(ApiError::Auth) => {
                SessionViewModel::new(self.state.clone()).force_logout();
            }
            Err(e) => {
                log::error!("❌ [RESOURCE] Error creando en {}: {}", self.path, e);
                alert("Erreur de création");
            }
        }
    }

    /// Variante multipart (assurances): campos de texto + documento
    /// opcional. El campo fichero no viaja si no se eligió archivo.
    pub async fn create_with_document(
        &self,
        fields: &[(&'static str, String)],
        file: Option<&File>,
        refetch_query: &str,
    ) {
        match self.client().create_multipart(fields, file).await {
            Ok(()) => self.refresh(refetch_query).await,
            Err(ApiError::Auth) => {
                SessionViewModel::new(self.state.clone()).force_logout();
            }
            Err(e) => {
                log::error!("❌ [RESOURCE] Error creando en {}: {}", self.path, e);
                alert("Erreur de création");
            }
        }
    }
}

// ----------------------------------------------------------------------
// Constructores por recurso
// ----------------------------------------------------------------------

impl ResourceViewModel<Vehicle, VehiclePayload> {
    pub fn vehicles(state: &AppState) -> Self {
        Self {
            state: state.clone(),
            list: state.vehicles.clone(),
            path: VEHICLES_PATH,
            _payload: PhantomData,
        }
    }
}

impl ResourceViewModel<Assignment, AssignmentPayload> {
    pub fn assignments(state: &AppState) -> Self {
        Self {
            state: state.clone(),
            list: state.assignments.clone(),
            path: ASSIGNMENTS_PATH,
            _payload: PhantomData,
        }
    }
}

impl ResourceViewModel<MaintenanceRecord, MaintenancePayload> {
    pub fn maintenances(state: &AppState) -> Self {
        Self {
            state: state.clone(),
            list: state.maintenances.clone(),
            path: MAINTENANCES_PATH,
            _payload: PhantomData,
        }
    }
}

// Las assurances crean siempre en multipart, no hay payload JSON
impl ResourceViewModel<InsurancePolicy, ()> {
    pub fn insurances(state: &AppState) -> Self {
        Self {
            state: state.clone(),
            list: state.insurances.clone(),
            path: INSURANCES_PATH,
            _payload: PhantomData,
        }
    }
}

impl ResourceViewModel<FuelEntry, FuelPayload> {
    pub fn fuels(state: &AppState) -> Self {
        Self {
            state: state.clone(),
            list: state.fuels.clone(),
            path: FUELS_PATH,
            _payload: PhantomData,
        }
    }
}
