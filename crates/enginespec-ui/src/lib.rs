//! Engine Spec UI Components
//!
//! Dioxus components for engine specification pages. The layout
//! decisions live in `enginespec_core::plan`; components here map a
//! plan onto elements and own the transient citation-dialog state.
//!
//! ## Responsive layout
//!
//! Every [`AdaptiveTable`] renders both representations:
//! - `.table-desktop`: the full grid, visible at or above the breakpoint
//! - `.table-mobile`: cards or a compact scroll grid, visible below it
//!
//! The host application supplies the media query (see
//! [`responsive_css`]).

pub mod components;

pub use components::*;

use enginespec_core::MOBILE_BREAKPOINT_PX;

/// Media-query rules that switch between the two table layouts
pub fn responsive_css() -> String {
    format!(
        "@media (max-width: {mobile_max}px) {{ .table-desktop {{ display: none; }} }}\n\
         @media (min-width: {desktop_min}px) {{ .table-mobile {{ display: none; }} }}\n",
        mobile_max = MOBILE_BREAKPOINT_PX - 1,
        desktop_min = MOBILE_BREAKPOINT_PX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responsive_css_uses_breakpoint() {
        let css = responsive_css();
        assert!(css.contains("@media (max-width: 767px) { .table-desktop { display: none; } }"));
        assert!(css.contains("@media (min-width: 768px) { .table-mobile { display: none; } }"));
    }
}
