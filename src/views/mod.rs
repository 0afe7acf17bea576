// ============================================================================
// VIEWS MODULE - Pantallas y componentes (solo construcción de DOM)
// ============================================================================

pub mod app;
pub mod assignments;
pub mod dashboard;
pub mod fields;
pub mod fuel;
pub mod header;
pub mod insurance;
pub mod login;
pub mod maintenance;
pub mod reports;
pub mod settings;
pub mod users;
pub mod vehicles;

pub use app::render_app;
pub use assignments::render_assignments;
pub use dashboard::render_dashboard;
pub use fuel::render_fuel;
pub use header::render_header;
pub use insurance::render_insurance;
pub use login::render_login;
pub use maintenance::render_maintenance;
pub use reports::render_reports;
pub use settings::render_settings;
pub use users::render_users;
pub use vehicles::render_vehicles;
