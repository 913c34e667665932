//! Open in Rumata Button
//!
//! The action affordance revealed when the loading indicator is hovered.
//! Carries the `sp-button` class the wrapper's hover rules key on; the
//! inner label span is hidden on hover so only the glyph shows inside
//! the compact indicator footprint.

use dioxus::prelude::*;

/// Properties for the [`OpenInRumataButton`] component.
#[derive(Clone, PartialEq, Props)]
pub struct OpenInRumataButtonProps {
    /// Click handler; the embedding application owns what "open" does.
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
}

/// Button that hands the current preview off to the external Rumata
/// sandbox. Stateless; visibility is controlled by the parent
/// indicator's stylesheet, not by this component.
#[component]
pub fn OpenInRumataButton(props: OpenInRumataButtonProps) -> Element {
    rsx! {
        button {
            class: "sp-button open-in-rumata",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            // Export glyph: box with an arrow leaving through the corner
            svg {
                class: "open-in-rumata-glyph",
                view_box: "0 0 24 24",
                path {
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6 M15 3h6v6 M10 14 L21 3",
                }
            }
            span { "Open in Rumata" }
        }
    }
}
