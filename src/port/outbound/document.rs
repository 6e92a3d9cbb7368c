//! Queryable document handle.
//!
//! Adapters never reach for ambient page state: the caller parses a page (or
//! an embedded frame's content) into a [`Document`] and passes it in. The
//! free functions below are the small set of element queries every adapter
//! shares.

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;

/// A parsed, read-only HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full HTML document. Malformed markup is recovered, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Root element of the document.
    #[must_use]
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// All elements matching `selector`, in document order.
    pub fn select_all<'a>(&'a self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.html.select(selector).collect()
    }

    /// True when at least one element matches `selector`.
    #[must_use]
    pub fn contains(&self, selector: &Selector) -> bool {
        self.html.select(selector).next().is_some()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").finish_non_exhaustive()
    }
}

/// Compile a CSS selector, mapping parse errors to [`ExtractError::InvalidSelector`].
pub fn compile(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|err| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        reason: format!("{err:?}"),
    })
}

/// Compile an optional selector.
pub fn compile_opt(selector: Option<&str>) -> Result<Option<Selector>, ExtractError> {
    selector.map(compile).transpose()
}

/// Whitespace-collapsed text content of an element.
#[must_use]
pub fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of the first match under `scope`, if non-empty.
#[must_use]
pub fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(text_of)
        .filter(|t| !t.is_empty())
}

/// Non-empty texts of every match under `scope`.
#[must_use]
pub fn all_text(scope: ElementRef<'_>, selector: &Selector) -> Vec<String> {
    scope
        .select(selector)
        .map(text_of)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Attribute of the first match under `scope`.
#[must_use]
pub fn first_attr(scope: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    scope
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Attribute of `element` itself.
#[must_use]
pub fn attr(element: ElementRef<'_>, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Closest ancestor element of `element` (its parent element).
#[must_use]
pub fn parent_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.parent().and_then(ElementRef::wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_whitespace_collapsed() {
        let doc = Document::parse("<div class='a'>\n  Paris   <b>SG</b>\n</div>");
        let sel = compile(".a").unwrap();
        assert_eq!(first_text(doc.root(), &sel).as_deref(), Some("Paris SG"));
    }

    #[test]
    fn invalid_selector_is_reported() {
        let err = compile("div[").unwrap_err();
        assert!(matches!(err, ExtractError::InvalidSelector { .. }));
    }

    #[test]
    fn empty_attributes_are_none() {
        let doc = Document::parse("<a href=''>x</a><a href='/m/1'>y</a>");
        let sel = compile("a").unwrap();
        assert_eq!(first_attr(doc.root(), &sel, "href"), None);
        let hrefs: Vec<_> = doc
            .select_all(&sel)
            .into_iter()
            .filter_map(|a| attr(a, "href"))
            .collect();
        assert_eq!(hrefs, vec!["/m/1".to_string()]);
    }
}
