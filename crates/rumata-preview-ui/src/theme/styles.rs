//! Stylesheet for the preview loading indicator.
//!
//! Inject once near the document root: `style { {LOADING_STYLES} }`.
//!
//! The Idle/Hovered state machine lives here, not in component code:
//! `.quill-wrapper:hover` flips the quill group and the `sp-button`
//! in the same rule cascade, so exactly one of the two is visible at
//! any instant and pointer movement never triggers a re-render.

pub const LOADING_STYLES: &str = r#"
/* === Ink Palette === */
:root {
  --ink-blue: #8ab4f8;
  --ink-glow: rgba(138, 180, 248, 0.3);
  --ink-glow-bright: rgba(138, 180, 248, 0.6);
  --panel-dark: rgba(13, 15, 20, 0.95);
  --panel-light: rgba(26, 29, 37, 0.95);
}

/* === Root Container === */
.quill-wrapper {
  position: absolute;
  right: 8px;
  bottom: 8px;
  z-index: 10;
  width: 48px;
  height: 48px;
  border-radius: 12px;
  background: linear-gradient(135deg, var(--panel-dark) 0%, var(--panel-light) 100%);
  backdrop-filter: blur(12px);
  border: 1px solid var(--ink-glow);
  box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4), 0 0 0 1px rgba(138, 180, 248, 0.1);
  transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}

.quill-wrapper:hover {
  transform: translateY(-2px) scale(1.02);
  box-shadow: 0 12px 40px rgba(0, 0, 0, 0.5), 0 0 0 1px rgba(138, 180, 248, 0.4), 0 0 20px rgba(138, 180, 248, 0.2);
  border-color: rgba(138, 180, 248, 0.5);
}

/* Idle: illustration visible, action button absent from paint */
.quill-wrapper .quill {
  display: flex;
}

.quill-wrapper .sp-button {
  display: none;
}

/* Hovered: action button visible (glyph only), illustration hidden */
.quill-wrapper:hover .sp-button {
  display: flex;
}

.quill-wrapper:hover .sp-button > span {
  display: none;
}

.quill-wrapper:hover .quill {
  display: none;
}

/* === Decorative Icon Group === */
.quill {
  transform: translate(-2px, -2px) scale(0.8);
  width: 36px;
  height: 36px;
  align-items: center;
  justify-content: center;
}

.quill-container {
  animation: quill-float 3s ease-in-out infinite;
  position: relative;
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
}

/* Glow layers onto the float while the wrapper is hovered */
.quill-wrapper:hover .quill-container {
  animation: quill-float 3s ease-in-out infinite, quill-glow 2s ease-in-out infinite;
}

.quill-svg {
  width: 24px;
  height: 24px;
}

.quill-svg .quill-path {
  fill: none;
  stroke: var(--ink-blue);
  stroke-width: 1.5;
  stroke-linecap: round;
  stroke-linejoin: round;
  stroke-dasharray: 100;
  stroke-dashoffset: 100;
  animation: quill-draw 4s ease-in-out infinite;
  filter: drop-shadow(0 0 4px var(--ink-glow));
}

.quill-svg .quill-fill {
  fill: var(--ink-blue);
}

/* === Particles === */
/* Placement and animation-delay are inline per element (see INK_DROPS
   and SPARKLES in components::loading) so the stagger is data, not CSS */
.ink-drop {
  position: absolute;
  width: 3px;
  height: 3px;
  background: var(--ink-blue);
  border-radius: 50%;
  opacity: 0;
  animation: ink-drop 2s ease-in-out infinite;
}

.sparkle {
  position: absolute;
  width: 2px;
  height: 2px;
  background: var(--ink-blue);
  border-radius: 50%;
  animation: sparkle 1.5s ease-out infinite;
}

/* === Action Button === */
.sp-button {
  position: absolute;
  inset: 0;
  align-items: center;
  justify-content: center;
  gap: 0.25rem;
  background: transparent;
  border: none;
  border-radius: 12px;
  color: var(--ink-blue);
  font-size: 0.75rem;
  cursor: pointer;
}

.open-in-rumata-glyph {
  width: 18px;
  height: 18px;
}

/* === Animations === */
@keyframes quill-float {
  0%, 100% {
    transform: translateY(0px) rotate(0deg);
  }
  50% {
    transform: translateY(-3px) rotate(2deg);
  }
}

/* Dash offset sweeps 100 -> 0 -> -100 against a 100-unit dash array:
   the stroke draws in, holds fully drawn, then withdraws the other way */
@keyframes quill-draw {
  0% {
    stroke-dashoffset: 100;
  }
  50% {
    stroke-dashoffset: 0;
  }
  100% {
    stroke-dashoffset: -100;
  }
}

@keyframes ink-drop {
  0% {
    opacity: 0;
    transform: translateY(0px) scale(1);
  }
  50% {
    opacity: 1;
    transform: translateY(8px) scale(0.8);
  }
  100% {
    opacity: 0;
    transform: translateY(16px) scale(0.3);
  }
}

@keyframes quill-glow {
  0%, 100% {
    filter: drop-shadow(0 0 4px var(--ink-glow));
  }
  50% {
    filter: drop-shadow(0 0 8px var(--ink-glow-bright));
  }
}

@keyframes sparkle {
  0% {
    opacity: 0;
    transform: scale(0) rotate(0deg);
  }
  50% {
    opacity: 1;
    transform: scale(1) rotate(180deg);
  }
  100% {
    opacity: 0;
    transform: scale(0) rotate(360deg);
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    /// Names of `@keyframes` blocks defined in the sheet.
    fn defined_keyframes() -> Vec<&'static str> {
        LOADING_STYLES
            .lines()
            .filter_map(|line| line.trim().strip_prefix("@keyframes "))
            .map(|rest| rest.trim_end_matches('{').trim())
            .collect()
    }

    #[test]
    fn every_animation_references_a_defined_keyframes() {
        let defined = defined_keyframes();
        assert!(!defined.is_empty());

        for line in LOADING_STYLES.lines() {
            let Some(value) = line.trim().strip_prefix("animation:") else {
                continue;
            };
            for layer in value.trim_end_matches(';').split(',') {
                let name = layer
                    .split_whitespace()
                    .next()
                    .expect("animation layer has a name");
                assert!(defined.contains(&name), "undefined keyframes: {name}");
            }
        }
    }

    #[test]
    fn all_five_loops_are_defined() {
        let defined = defined_keyframes();
        for name in ["quill-float", "quill-draw", "ink-drop", "quill-glow", "sparkle"] {
            assert!(defined.contains(&name), "missing keyframes: {name}");
        }
    }

    #[test]
    fn hover_rules_swap_the_two_layers() {
        // Idle
        assert!(LOADING_STYLES.contains(".quill-wrapper .quill {\n  display: flex;\n}"));
        assert!(LOADING_STYLES.contains(".quill-wrapper .sp-button {\n  display: none;\n}"));
        // Hovered
        assert!(LOADING_STYLES.contains(".quill-wrapper:hover .quill {\n  display: none;\n}"));
        assert!(LOADING_STYLES.contains(".quill-wrapper:hover .sp-button {\n  display: flex;\n}"));
        // Hovered button shows its glyph only
        assert!(LOADING_STYLES
            .contains(".quill-wrapper:hover .sp-button > span {\n  display: none;\n}"));
    }

    #[test]
    fn glow_is_layered_onto_the_float_not_replacing_it() {
        let hovered_container = LOADING_STYLES
            .split(".quill-wrapper:hover .quill-container {")
            .nth(1)
            .and_then(|rest| rest.split('}').next())
            .expect("hover rule for quill-container");
        assert!(hovered_container.contains("quill-float"));
        assert!(hovered_container.contains("quill-glow"));
    }

    #[test]
    fn draw_loop_sweeps_dash_offset_symmetrically() {
        let draw = LOADING_STYLES
            .split("@keyframes quill-draw {")
            .nth(1)
            .and_then(|rest| rest.split("@keyframes").next())
            .expect("quill-draw keyframes");
        assert!(draw.contains("stroke-dashoffset: 100"));
        assert!(draw.contains("stroke-dashoffset: 0"));
        assert!(draw.contains("stroke-dashoffset: -100"));
    }
}
