//! Global CSS for the demo shell.
//!
//! Only the surrounding chrome lives here; everything the indicator
//! itself needs ships with `rumata_preview_ui::LOADING_STYLES`.

pub const GLOBAL_STYLES: &str = r#"
/* === Demo Palette === */
:root {
  --shell-black: #0d0f14;
  --shell-panel: #1a1d25;
  --shell-border: rgba(138, 180, 248, 0.2);
  --shell-text: #e8eaed;
  --shell-muted: rgba(232, 234, 237, 0.55);
  --shell-accent: #8ab4f8;

  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-mono);
  background: var(--shell-black);
  color: var(--shell-text);
  min-height: 100vh;
}

/* === Shell Layout === */
.demo-shell {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem;
  min-height: 100vh;
}

.demo-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.demo-header h1 {
  font-size: 1.125rem;
  font-weight: 500;
  color: var(--shell-accent);
  letter-spacing: 0.05em;
}

.rerun-button {
  font-family: var(--font-mono);
  font-size: 0.8125rem;
  color: var(--shell-accent);
  background: transparent;
  border: 1px solid var(--shell-border);
  border-radius: 6px;
  padding: 0.375rem 0.875rem;
  cursor: pointer;
  transition: border-color 150ms ease;
}

.rerun-button:hover {
  border-color: var(--shell-accent);
}

/* === Preview Pane === */
/* position: relative anchors the indicator to the pane's corner */
.preview-pane {
  position: relative;
  flex: 1;
  background: var(--shell-panel);
  border: 1px solid var(--shell-border);
  border-radius: 12px;
  padding: 1.25rem;
  overflow: hidden;
}

.preview-code {
  font-size: 0.8125rem;
  line-height: 1.7;
  color: var(--shell-muted);
  white-space: pre;
}

.preview-ready {
  position: absolute;
  right: 12px;
  bottom: 12px;
  font-size: 0.75rem;
  color: var(--shell-accent);
}

.demo-hint {
  font-size: 0.75rem;
  color: var(--shell-muted);
}
"#;
