//! Global styles for Engine Spec.

mod styles;

pub use styles::GLOBAL_STYLES;

/// Base stylesheet plus the breakpoint rules for adaptive tables
pub fn global_styles() -> String {
    format!("{}\n{}", GLOBAL_STYLES, enginespec_ui::responsive_css())
}
