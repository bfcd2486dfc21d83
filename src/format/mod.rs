//! Pure display helpers shared by the TUI and headless renderers.

pub mod age;
pub mod mask;
pub mod status;

pub use age::relative_age;
pub use mask::mask_url;
pub use status::{event_glyph, state_class, StateClass};
