// ============================================================================
// STATE - Estado global + primitivas de reactividad
// ============================================================================

pub mod app_state;
pub mod reactivity;

pub use app_state::AppState;
pub use reactivity::ReactiveState;
