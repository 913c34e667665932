//! Preview Loading Indicator
//!
//! A floating quill that writes with sparkling ink while the embedded
//! preview is compiling. Hovering the indicator swaps the illustration
//! for the "Open in Rumata" action button.
//!
//! ## Visual states
//!
//! | State   | Quill group     | Action button          |
//! |---------|-----------------|------------------------|
//! | Idle    | `display: flex` | `display: none`        |
//! | Hovered | `display: none` | `display: flex`, glyph only |
//!
//! The toggle lives entirely in `LOADING_STYLES` (`:hover` rules on
//! `.quill-wrapper`), so both layers share one predicate and are never
//! visible at the same time.

use dioxus::prelude::*;

use crate::components::OpenInRumataButton;
use crate::utils::class_names;

/// Advisory tooltip shown on the root element in both states.
pub const LOADING_TOOLTIP: &str = "Open in Rumata";

/// Fixed placement and animation stagger for one particle element.
///
/// The stylesheet supplies the looping keyframes; placement and delay are
/// per-element and carried as inline style so no two particles of a kind
/// pulse in unison.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ParticleTiming {
    /// `animation-delay` in seconds.
    pub delay_s: f32,
    /// Absolute-position declarations, e.g. `"left: 26px; top: 32px;"`.
    pub placement: &'static str,
}

impl ParticleTiming {
    /// Inline style for this particle: placement plus staggered delay.
    pub fn inline_style(&self) -> String {
        format!("{} animation-delay: {}s;", self.placement, self.delay_s)
    }
}

/// Ink drops falling from the quill tip. Staggered half a period apart.
pub const INK_DROPS: [ParticleTiming; 4] = [
    ParticleTiming { delay_s: 0.0, placement: "left: 25px; top: 30px;" },
    ParticleTiming { delay_s: 0.5, placement: "left: 26px; top: 32px;" },
    ParticleTiming { delay_s: 1.0, placement: "left: 24px; top: 34px;" },
    ParticleTiming { delay_s: 1.5, placement: "left: 28px; top: 33px;" },
];

/// Sparkles around the feather. Staggered a fifth of a period apart.
pub const SPARKLES: [ParticleTiming; 3] = [
    ParticleTiming { delay_s: 0.0, placement: "top: 8px; right: 12px;" },
    ParticleTiming { delay_s: 0.3, placement: "top: 16px; right: 8px;" },
    ParticleTiming { delay_s: 0.6, placement: "top: 12px; right: 16px;" },
];

/// Properties for the [`Loading`] component.
#[derive(Clone, PartialEq, Props)]
pub struct LoadingProps {
    /// Optional additional CSS classes, merged with the built-in
    /// `quill-wrapper` class (union, never replacement).
    #[props(default)]
    pub class: Option<String>,
    /// Mount the "Open in Rumata" button as the hover affordance.
    /// When false, no button node exists in the tree in either state.
    pub show_open_in_rumata: bool,
    /// Arbitrary attributes (id, ARIA labels, ...) forwarded verbatim to
    /// the root element.
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// Floating loading indicator for the embedded preview.
///
/// Purely declarative: no signals, no timers, no event handlers. All
/// animation runs on the compositor once mounted and stops when the
/// caller unmounts the component.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     if preview_loading() {
///         Loading {
///             show_open_in_rumata: true,
///             aria_label: "preview loading",
///         }
///     }
/// }
/// ```
#[component]
pub fn Loading(props: LoadingProps) -> Element {
    let wrapper_class = class_names("quill-wrapper", &[props.class.as_deref()]);
    let ink_drops: Vec<String> = INK_DROPS.iter().map(ParticleTiming::inline_style).collect();
    let sparkles: Vec<String> = SPARKLES.iter().map(ParticleTiming::inline_style).collect();

    rsx! {
        div {
            class: "{wrapper_class}",
            title: "{LOADING_TOOLTIP}",
            ..props.attributes,

            if props.show_open_in_rumata {
                OpenInRumataButton {}
            }

            div { class: "quill",
                div { class: "quill-container",
                    svg {
                        class: "quill-svg",
                        view_box: "0 0 24 24",

                        // Feather body
                        path {
                            class: "quill-path",
                            d: "M3 20 Q4.5 16 7 13 Q10 10 13 8 Q16 6 19 4 Q17.5 7 15 9 Q12.5 11 10 13 Q7.5 15 5.5 17.5 Q4 19 3 20",
                        }
                        // Shaft
                        path {
                            class: "quill-path",
                            d: "M3 20 L2 22 Q2.5 22.5 3.5 22 Q4 21.5 4.5 21 L3 20",
                        }
                        // Barbs
                        path { class: "quill-path", d: "M5.5 17.5 Q6.5 16.5 7.5 15.5" }
                        path { class: "quill-path", d: "M7.5 15.5 Q8.5 14.5 9.5 13.5" }
                        path { class: "quill-path", d: "M10 13 Q11 12 12 11" }
                        // Ink dot at the tip
                        circle { class: "quill-fill", cx: "2.5", cy: "21.5", r: "0.5" }
                    }

                    for style in ink_drops {
                        div { class: "ink-drop", style: "{style}" }
                    }

                    for style in sparkles {
                        div { class: "sparkle", style: "{style}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(props: LoadingProps) -> String {
        let mut dom = VirtualDom::new_with_props(Loading, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn props(show: bool, class: Option<&str>) -> LoadingProps {
        LoadingProps {
            class: class.map(str::to_string),
            show_open_in_rumata: show,
            attributes: Vec::new(),
        }
    }

    #[test]
    fn mounts_button_only_when_requested() {
        let with_button = render(props(true, None));
        assert!(with_button.contains("sp-button"));

        let without_button = render(props(false, None));
        assert!(!without_button.contains("sp-button"));
    }

    #[test]
    fn tooltip_is_constant() {
        for show in [true, false] {
            let markup = render(props(show, Some("custom")));
            assert!(markup.contains(r#"title="Open in Rumata""#));
        }
    }

    #[test]
    fn caller_class_is_merged_not_replaced() {
        let markup = render(props(true, Some("preview-corner")));
        assert!(markup.contains(r#"class="quill-wrapper preview-corner""#));
    }

    #[test]
    fn quill_group_has_full_illustration() {
        let markup = render(props(true, None));
        assert_eq!(markup.matches(r#"class="quill-path""#).count(), 5);
        assert_eq!(markup.matches(r#"class="quill-fill""#).count(), 1);
        assert_eq!(markup.matches(r#"class="ink-drop""#).count(), 4);
        assert_eq!(markup.matches(r#"class="sparkle""#).count(), 3);
        assert_eq!(markup.matches(r#"class="quill-container""#).count(), 1);
    }

    #[test]
    fn rendering_is_idempotent() {
        let a = render(props(true, Some("x")));
        let b = render(props(true, Some("x")));
        assert_eq!(a, b);
    }

    #[test]
    fn ink_drop_delays_are_pairwise_distinct() {
        for (i, a) in INK_DROPS.iter().enumerate() {
            for b in &INK_DROPS[i + 1..] {
                assert_ne!(a.delay_s, b.delay_s);
                assert_ne!(a.placement, b.placement);
            }
        }
    }

    #[test]
    fn sparkle_delays_are_pairwise_distinct() {
        for (i, a) in SPARKLES.iter().enumerate() {
            for b in &SPARKLES[i + 1..] {
                assert_ne!(a.delay_s, b.delay_s);
                assert_ne!(a.placement, b.placement);
            }
        }
    }

    #[test]
    fn particle_inline_style_carries_placement_and_delay() {
        let style = INK_DROPS[1].inline_style();
        assert_eq!(style, "left: 26px; top: 32px; animation-delay: 0.5s;");
    }

    #[test]
    fn passthrough_attributes_reach_the_root() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                Loading {
                    show_open_in_rumata: false,
                    id: "preview-loading",
                    aria_label: "preview loading",
                }
            }
        });
        dom.rebuild_in_place();
        let markup = dioxus_ssr::render(&dom);
        assert!(markup.contains(r#"id="preview-loading""#));
        assert!(markup.contains(r#"aria-label="preview loading""#));
    }
}
