//! Page Pills Component
//!
//! Horizontal row of engine pages to switch between.

use dioxus::prelude::*;
use enginespec_core::Catalog;

/// One selectable page: slug plus display name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOption {
    pub slug: String,
    pub name: String,
}

/// Pill options for every page of a catalog, in catalog order
pub fn page_options(catalog: &Catalog) -> Vec<PageOption> {
    catalog
        .pages()
        .iter()
        .map(|p| PageOption {
            slug: p.slug.clone(),
            name: p.name.clone(),
        })
        .collect()
}

/// Properties for the PagePills component
#[derive(Clone, PartialEq, Props)]
pub struct PagePillsProps {
    /// Available pages
    pub pages: Vec<PageOption>,
    /// Slug of the selected page
    pub selected: String,
    /// Called with the slug of the chosen page
    pub on_select: EventHandler<String>,
}

/// Displays a horizontal row of selectable page pills
///
/// # Example
///
/// ```rust,ignore
/// let mut selected = use_signal(|| "bmw-n47".to_string());
///
/// rsx! {
///     PagePills {
///         pages: page_options(&catalog),
///         selected: selected(),
///         on_select: move |slug| selected.set(slug)
///     }
/// }
/// ```
#[component]
pub fn PagePills(props: PagePillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        nav {
            class: "page-pills",
            role: "radiogroup",
            "aria-label": "Engine selection",
            for page in props.pages.iter() {
                {
                    let slug = page.slug.clone();
                    let is_selected = selected == page.slug;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{page.slug}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(slug.clone());
                            },
                            "{page.name}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_catalog_order() {
        let catalog = Catalog::bundled().unwrap();
        let options = page_options(&catalog);
        assert_eq!(options.len(), catalog.pages().len());
        for (option, page) in options.iter().zip(catalog.pages()) {
            assert_eq!(option.slug, page.slug);
            assert_eq!(option.name, page.name);
        }
    }

    #[test]
    fn empty_catalog_has_no_options() {
        assert!(page_options(&Catalog::default()).is_empty());
    }
}
