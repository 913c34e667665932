//! Rumata Preview UI Components
//!
//! Dioxus components for embedding a Rumata code-execution preview in a
//! desktop application. The centerpiece is the [`Loading`] indicator: a
//! floating quill illustration shown while the preview compiles, which
//! morphs on hover into an "Open in Rumata" button.
//!
//! ## Design Philosophy
//!
//! All show/hide behavior is encoded in the stylesheet, not in signals:
//! the hover pseudo-state flips visibility between the decorative layer
//! and the action button in the same paint, so the two are never visible
//! at once and the component never re-renders on pointer movement.
//!
//! Consumers inject [`LOADING_STYLES`] once (a `style` element near the
//! document root) and mount [`Loading`] wherever a preview is pending.

pub mod components;
pub mod theme;
pub mod utils;

pub use components::*;
pub use theme::LOADING_STYLES;
pub use utils::class_names;
