//! Application state module

mod app_state;
pub mod forms;
mod receipt;
mod splash_state;

pub use app_state::*;
pub use receipt::*;
pub use splash_state::*;
