//! Markup query adapter.
//!
//! Extractors only ever talk to the [`Markup`] trait. [`Document`] and
//! [`Node`] are the `scraper`-backed implementation.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// Query surface over one element of a loaded page.
///
/// Selectors are plain CSS strings. A selector that fails to parse matches
/// nothing.
pub trait Markup: Clone {
    /// All descendants matching `css`, in document order.
    fn select(&self, css: &str) -> Vec<Self>;

    fn attr(&self, name: &str) -> Option<String>;

    fn has_class(&self, class: &str) -> bool;

    /// Concatenated descendant text, untrimmed.
    fn raw_text(&self) -> String;

    fn inner_html(&self) -> String;

    /// Inner markup with every descendant matching `css` removed.
    fn inner_html_without(&self, css: &str) -> String;

    /// Nearest ancestor matching `css`, not including `self`.
    fn closest(&self, css: &str) -> Option<Self>;

    /// Element children only.
    fn children(&self) -> Vec<Self>;

    fn exists(&self, css: &str) -> bool {
        self.first(css).is_some()
    }

    fn first(&self, css: &str) -> Option<Self> {
        self.nth(css, 0)
    }

    fn nth(&self, css: &str, index: usize) -> Option<Self> {
        self.select(css).into_iter().nth(index)
    }

    fn text(&self) -> String {
        self.raw_text().trim().to_string()
    }

    /// Text of every match joined together, then trimmed. Empty when nothing
    /// matches.
    fn select_text(&self, css: &str) -> String {
        self.select(css)
            .iter()
            .map(Self::raw_text)
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Trimmed text of the `index`-th match, or empty.
    fn nth_text(&self, css: &str, index: usize) -> String {
        self.nth(css, index).map(|n| n.text()).unwrap_or_default()
    }
}

/// A parsed HTML page. Owns the tree; [`Document::root`] borrows into it.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn root(&self) -> Node<'_> {
        Node {
            el: self.html.root_element(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    el: ElementRef<'a>,
}

fn compile(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(sel) => Some(sel),
        Err(e) => {
            warn!(selector = css, error = %e, "invalid selector, matching nothing");
            None
        }
    }
}

impl<'a> Markup for Node<'a> {
    fn select(&self, css: &str) -> Vec<Self> {
        let Some(sel) = compile(css) else {
            return Vec::new();
        };
        self.el.select(&sel).map(|el| Node { el }).collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.el.value().attr(name).map(str::to_string)
    }

    fn has_class(&self, class: &str) -> bool {
        self.el.value().classes().any(|c| c == class)
    }

    fn raw_text(&self) -> String {
        self.el.text().collect()
    }

    fn inner_html(&self) -> String {
        self.el.inner_html()
    }

    fn inner_html_without(&self, css: &str) -> String {
        let Some(sel) = compile(css) else {
            return self.inner_html();
        };
        // Re-parse the subtree so removal never touches the shared page.
        let mut fragment = Html::parse_fragment(&self.el.inner_html());
        let doomed: Vec<_> = fragment.select(&sel).map(|el| el.id()).collect();
        for id in doomed {
            if let Some(mut node) = fragment.tree.get_mut(id) {
                node.detach();
            }
        }
        fragment.root_element().inner_html()
    }

    fn closest(&self, css: &str) -> Option<Self> {
        let sel = compile(css)?;
        self.el
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|el| sel.matches(el))
            .map(|el| Node { el })
    }

    fn children(&self) -> Vec<Self> {
        self.el
            .children()
            .filter_map(ElementRef::wrap)
            .map(|el| Node { el })
            .collect()
    }
}
