pub mod assignment;
pub mod dashboard;
pub mod error;
pub mod fuel;
pub mod insurance;
pub mod maintenance;
pub mod report;
pub mod settings;
pub mod user;
pub mod vehicle;

pub use assignment::{Assignment, AssignmentDraft, AssignmentPayload};
pub use dashboard::DashboardStats;
pub use error::ApiError;
pub use fuel::{FuelDraft, FuelEntry, FuelPayload};
pub use insurance::{InsuranceDraft, InsurancePolicy};
pub use maintenance::{MaintenanceDraft, MaintenancePayload, MaintenanceRecord, MAINTENANCE_TYPES};
pub use report::MaintenanceCostRow;
pub use settings::{parse_alert_days, AppSettings, DEFAULT_ALERT_DAYS};
pub use user::{LoginResponse, RegisterDraft, RegisterRequest, Role, User};
pub use vehicle::{Vehicle, VehicleDraft, VehicleFilters, VehiclePayload, VEHICLE_STATUTS, VEHICLE_TYPES};
