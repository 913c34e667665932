//! Class-name composition.
//!
//! Components carry a stable semantic class plus whatever decorations
//! the caller supplies. Composition is a union: the base class is
//! always present, absent or empty decorations are simply skipped.

/// Merge a base class with optional decorations into one class string.
///
/// # Example
///
/// ```rust
/// use rumata_preview_ui::class_names;
///
/// let class = class_names("quill-wrapper", &[Some("preview-corner"), None]);
/// assert_eq!(class, "quill-wrapper preview-corner");
/// ```
pub fn class_names(base: &str, decorations: &[Option<&str>]) -> String {
    let mut out = String::from(base);
    for class in decorations.iter().flatten() {
        if !class.is_empty() {
            out.push(' ');
            out.push_str(class);
        }
    }
    out
}
