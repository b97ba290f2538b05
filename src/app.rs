use dioxus::prelude::*;

use crate::context::{bundled_catalog, get_launch_options, read_catalog, CatalogContext};
use crate::pages::EngineView;
use crate::theme::global_styles;

/// Root application component.
///
/// Provides global styles and the catalog context. Starts on the bundled
/// catalog and swaps in the configured file once it has been read.
#[component]
pub fn App() -> Element {
    let options = use_hook(get_launch_options);

    let mut catalog = use_signal(bundled_catalog);
    let selected = use_signal(|| options.page.clone());

    use_context_provider(|| CatalogContext { catalog, selected });

    let content = options.content.clone();
    use_effect(move || {
        let Some(path) = content.clone() else {
            return;
        };
        spawn(async move {
            match read_catalog(&path).await {
                Ok(loaded) => {
                    tracing::info!(pages = loaded.pages().len(), "Catalog loaded from {}", path.display());
                    catalog.set(loaded);
                }
                Err(e) => {
                    tracing::error!("Failed to load catalog, keeping bundled one: {:#}", e);
                }
            }
        });
    });

    let styles = use_hook(global_styles);

    rsx! {
        style { "{styles}" }
        EngineView {}
    }
}
