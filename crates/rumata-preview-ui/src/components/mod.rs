//! Preview widgets for the Rumata embed surface.
//!
//! Everything here is plain-CSS styled: components emit stable semantic
//! classes (`quill-wrapper`, `ink-drop`, `sp-button`, ...) and the rules
//! live in `theme::LOADING_STYLES`.

mod loading;
mod open_in_rumata_button;

pub use loading::*;
pub use open_in_rumata_button::*;
