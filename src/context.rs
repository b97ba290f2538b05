//! Catalog context for Engine Spec.
//!
//! Provides the loaded [`Catalog`] and the selected page slug to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! let mut selected = use_selected_page();
//! ```

use std::path::Path;

use anyhow::Context;
use dioxus::prelude::*;
use enginespec_core::Catalog;

pub use crate::get_launch_options;

/// Catalog plus the slug of the page being shown
#[derive(Clone, Copy)]
pub struct CatalogContext {
    pub catalog: Signal<Catalog>,
    pub selected: Signal<Option<String>>,
}

/// Read and parse a catalog file off the UI thread
pub async fn read_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    Catalog::from_json_str(&json)
        .with_context(|| format!("Invalid catalog {}", path.display()))
}

/// The bundled catalog, or an empty one if it fails to parse
pub fn bundled_catalog() -> Catalog {
    Catalog::bundled().unwrap_or_else(|e| {
        tracing::error!("Bundled catalog is invalid: {}", e);
        Catalog::default()
    })
}

/// Hook to access the catalog from context.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<CatalogContext>().catalog
}

/// Hook to access the selected page slug.
///
/// `None` means "first page of the catalog".
pub fn use_selected_page() -> Signal<Option<String>> {
    use_context::<CatalogContext>().selected
}
