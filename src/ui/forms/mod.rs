//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `pickers`: Country dropdown and date picker overlays
//! - `register_form`: The sign-up screen

mod field_renderer;
mod pickers;
mod register_form;

pub use register_form::draw_register;
