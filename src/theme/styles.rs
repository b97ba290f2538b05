//! Global CSS styles for Engine Spec.
//!
//! The desktop/mobile switch for adaptive tables is appended at runtime
//! from `enginespec_ui::responsive_css` so the breakpoint has one source.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #ffffff;
  --surface-alt: #f4f6f8;
  --surface-dark: #e6eaee;
  --border: #d5dbe1;

  /* Accents */
  --accent: #1f6feb;
  --accent-soft: rgba(31, 111, 235, 0.12);
  --warning: #d97706;

  /* Text */
  --text-primary: #1b1f24;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--surface);
  color: var(--text-primary);
  line-height: 1.6;
}

/* === Page === */
.engine-view {
  max-width: 1100px;
  margin: 0 auto;
  padding: 1.5rem;
}

.engine-header {
  margin-bottom: 2rem;
}

.page-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  margin-top: 1rem;
}

.page-summary {
  color: var(--text-secondary);
  margin-top: 0.5rem;
}

.empty-state {
  color: var(--text-muted);
  font-style: italic;
}

/* === Page Pills === */
.page-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.pill {
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: 0.25rem 0.9rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.pill:hover {
  border-color: var(--accent);
}

.pill.selected {
  background: var(--accent);
  border-color: var(--accent);
  color: #ffffff;
}

/* === Sections === */
.spec-section {
  margin-bottom: 2.5rem;
}

.section-header {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-xl);
  font-weight: 600;
  margin-bottom: 1rem;
}

.section-icon {
  color: var(--accent);
}

.labeled-list dt {
  font-weight: 600;
  margin-top: 0.75rem;
}

.labeled-list dd {
  color: var(--text-secondary);
}

.unlabeled-list,
.link-list {
  padding-left: 1.25rem;
}

.link-list a {
  color: var(--accent);
}

.card-grid {
  display: grid;
  gap: 0.75rem;
}

.grid-card {
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 1rem;
}

.grid-card.tone-light { background: var(--surface-alt); }
.grid-card.tone-dark { background: var(--surface-dark); }

.grid-card-title {
  font-size: var(--text-base);
  font-family: var(--font-mono);
}

/* === Adaptive Table: grid === */
.spec-grid {
  width: 100%;
  border-collapse: collapse;
  border: 1px solid var(--border);
}

.spec-grid th {
  text-align: left;
  background: var(--surface-dark);
  padding: 0.75rem 1rem;
  font-size: var(--text-sm);
}

.spec-grid td {
  padding: 0.75rem 1rem;
  border-top: 1px solid var(--border);
}

.spec-grid .stripe-odd { background: var(--surface-alt); }

.grid-cell.strong { font-weight: 600; }

.spec-grid.compact th,
.spec-grid.compact td {
  padding: 0.4rem 0.6rem;
  font-size: var(--text-xs);
}

.grid-scroll {
  overflow-x: auto;
  -webkit-overflow-scrolling: touch;
}

/* === Adaptive Table: cards === */
.record-cards {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.record-card {
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 0.75rem 1rem;
}

.record-card.stripe-odd { background: var(--surface-alt); }

.card-field {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
  font-size: var(--text-sm);
}

.card-label { color: var(--text-muted); }
.card-value.strong { font-weight: 600; }

.card-source {
  margin-top: 0.5rem;
  font-size: var(--text-xs);
}

.card-source summary {
  cursor: pointer;
  color: var(--accent);
}

.card-source-text {
  margin-top: 0.25rem;
  color: var(--text-secondary);
}

/* === Buttons === */
.icon-btn {
  background: transparent;
  border: none;
  cursor: pointer;
  font-size: var(--text-base);
  color: var(--text-muted);
  padding: 0.1rem 0.4rem;
  transition: color var(--transition-fast);
}

.icon-btn:hover { color: var(--accent); }

.btn-primary,
.btn-ghost {
  border-radius: 6px;
  padding: 0.4rem 1rem;
  cursor: pointer;
  font-size: var(--text-sm);
}

.btn-primary {
  background: var(--accent);
  border: 1px solid var(--accent);
  color: #ffffff;
}

.btn-ghost {
  background: transparent;
  border: 1px solid var(--border);
  color: var(--text-primary);
}

/* === Citation Dialog === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(15, 23, 42, 0.55);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.citation-dialog {
  background: var(--surface);
  border-radius: 8px;
  max-width: 480px;
  width: 100%;
  box-shadow: 0 12px 32px rgba(0, 0, 0, 0.2);
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 1.25rem;
  border-bottom: 1px solid var(--border);
}

.modal-title {
  font-size: var(--text-lg);
}

.citation-text {
  padding: 1.25rem;
  white-space: pre-wrap;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  padding: 0 1.25rem 1.25rem;
}

@media (prefers-reduced-motion: reduce) {
  * {
    transition: none !important;
  }
}
"#;
