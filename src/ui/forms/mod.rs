//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `waitlist_form`: The multi-step waitlist form

mod field_renderer;
mod waitlist_form;

pub use waitlist_form::draw as draw_waitlist_form;
