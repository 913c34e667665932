//! Small helpers shared by the preview widgets.

mod class_names;

pub use class_names::class_names;
