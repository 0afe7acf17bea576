// ============================================================================
// STATE MODULE - Estado compartido con Rc<RefCell> + notificación de cambios
// ============================================================================

pub mod app_state;
pub mod resource_state;
pub mod session_state;

// Re-exports
pub use app_state::AppState;
pub use resource_state::ResourceState;
