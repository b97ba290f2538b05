//! Engine page view.
//!
//! Page selector across the top, then the selected engine's sections in
//! authored order.

use dioxus::prelude::*;
use enginespec_core::{Catalog, EnginePage};
use enginespec_ui::{page_options, PagePills, SpecSection};

use crate::context::{use_catalog, use_selected_page};

/// Page for `selected`, falling back to the first page for unknown or
/// missing slugs
pub fn resolve_page<'a>(catalog: &'a Catalog, selected: Option<&str>) -> Option<&'a EnginePage> {
    selected
        .and_then(|slug| catalog.page(slug).ok())
        .or_else(|| catalog.pages().first())
}

#[component]
pub fn EngineView() -> Element {
    let catalog = use_catalog();
    let mut selected = use_selected_page();

    let catalog = catalog.read();
    let Some(page) = resolve_page(&catalog, selected().as_deref()) else {
        return rsx! {
            main { class: "engine-view empty",
                p { class: "empty-state", "No engine pages in this catalog." }
            }
        };
    };

    let options = page_options(&catalog);
    let page = page.clone();

    rsx! {
        main { class: "engine-view",
            header { class: "engine-header",
                PagePills {
                    pages: options,
                    selected: page.slug.clone(),
                    on_select: move |slug: String| {
                        tracing::debug!(%slug, "page selected");
                        selected.set(Some(slug));
                    },
                }
                h1 { class: "page-title", "{page.name}" }
                if !page.summary.is_empty() {
                    p { class: "page-summary", "{page.summary}" }
                }
            }
            for (i, section) in page.sections.iter().enumerate() {
                SpecSection {
                    key: "{page.slug}-{i}",
                    section: section.clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_slug() {
        let catalog = Catalog::bundled().unwrap();
        let page = resolve_page(&catalog, Some("vw-ea189")).unwrap();
        assert_eq!(page.slug, "vw-ea189");
    }

    #[test]
    fn resolve_falls_back_to_first_page() {
        let catalog = Catalog::bundled().unwrap();
        let first = &catalog.pages()[0].slug;
        assert_eq!(&resolve_page(&catalog, None).unwrap().slug, first);
        assert_eq!(&resolve_page(&catalog, Some("unknown")).unwrap().slug, first);
    }

    #[test]
    fn resolve_empty_catalog() {
        assert!(resolve_page(&Catalog::default(), None).is_none());
    }
}
