//! Color constants for the ink palette.
//!
//! The stylesheet mirrors these as CSS custom properties; keep the two
//! in sync when tuning the palette.

#![allow(dead_code)]

// === INK BLUE (strokes, particles, glyphs) ===
pub const INK_BLUE: &str = "#8ab4f8";
pub const INK_GLOW: &str = "rgba(138, 180, 248, 0.3)";
pub const INK_GLOW_BRIGHT: &str = "rgba(138, 180, 248, 0.6)";

// === PANEL (indicator background gradient) ===
pub const PANEL_DARK: &str = "rgba(13, 15, 20, 0.95)";
pub const PANEL_LIGHT: &str = "rgba(26, 29, 37, 0.95)";
