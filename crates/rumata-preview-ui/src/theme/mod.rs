//! Styling for the preview widgets.

pub mod colors;
mod styles;

pub use styles::LOADING_STYLES;
