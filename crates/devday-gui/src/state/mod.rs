//! Application state management
//!
//! Contains all runtime state types for the GUI application.

mod app_state;
mod display;
mod registration_state;

pub use app_state::{AppState, Section};
pub use display::{SessionKindDisplay, SocialPlatformDisplay};
pub use registration_state::RegistrationState;
