// ============================================================================
// VIEWMODELS MODULE - Lógica de pantallas (sin DOM)
// ============================================================================

pub mod dashboard_viewmodel;
pub mod reports_viewmodel;
pub mod resource_viewmodel;
pub mod session_viewmodel;
pub mod settings_viewmodel;

pub use dashboard_viewmodel::DashboardViewModel;
pub use reports_viewmodel::ReportsViewModel;
pub use resource_viewmodel::ResourceViewModel;
pub use session_viewmodel::SessionViewModel;
pub use settings_viewmodel::SettingsViewModel;
