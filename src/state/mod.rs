//! Application state module

mod app_state;
mod forms;
mod jobs;

pub use app_state::*;
pub use forms::*;
pub use jobs::*;
