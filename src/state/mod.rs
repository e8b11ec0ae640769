pub mod app_state;
pub mod ui_state;

pub use app_state::BrowserState;
pub use ui_state::{UiState, ViewMode};
