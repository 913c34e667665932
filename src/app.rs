use std::time::Duration;

use dioxus::prelude::*;
use rumata_preview_ui::{Loading, LOADING_STYLES};

use crate::theme::GLOBAL_STYLES;

/// How long the fake compile runs before the preview "arrives".
const FAKE_COMPILE: Duration = Duration::from_secs(4);

const SAMPLE_SNIPPET: &str = r#"fn main() {
    let quill = Quill::dipped();
    for line in manuscript() {
        quill.write(line);
    }
}"#;

/// Root demo component.
///
/// Simulates the embedding application: a preview pane that "compiles"
/// for a few seconds, showing the loading indicator in its corner.
/// Unmounting the indicator when the compile finishes is what stops its
/// animations; the widget itself never ticks.
#[component]
pub fn App() -> Element {
    let mut loading = use_signal(|| true);
    let mut generation = use_signal(|| 0u32);

    use_effect(move || {
        let gen = generation();
        loading.set(true);
        spawn(async move {
            tokio::time::sleep(FAKE_COMPILE).await;
            // A rerun may have started a newer compile in the meantime
            if generation() == gen {
                loading.set(false);
                tracing::info!("preview ready (compile #{})", gen);
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {LOADING_STYLES} }

        div { class: "demo-shell",
            header { class: "demo-header",
                h1 { "Rumata Preview" }
                button {
                    class: "rerun-button",
                    onclick: move |_| generation += 1,
                    "Rerun"
                }
            }

            div { class: "preview-pane",
                pre { class: "preview-code", "{SAMPLE_SNIPPET}" }

                if loading() {
                    Loading {
                        show_open_in_rumata: crate::show_open_button(),
                        id: "preview-loading",
                        aria_label: "preview loading",
                    }
                } else {
                    div { class: "preview-ready", "preview ready" }
                }
            }

            p { class: "demo-hint",
                "Hover the quill while the preview loads to open it in Rumata."
            }
        }
    }
}
