// src/core/dom.rs
//
// Read-only query capability over one element subtree. Page specs only talk to
// this trait, so extraction can run against a parsed document or a fixture.

use scraper::{ElementRef, Selector};

use crate::error::ExportError;

pub trait CardQuery {
    /// Attribute value of the first descendant matching `selector`, if any.
    fn first_attr(&self, selector: &str, attr: &str) -> Result<Option<String>, ExportError>;

    /// Text content of the first descendant matching `selector`.
    /// `Some("")` when the element exists but has no text.
    fn first_text(&self, selector: &str) -> Result<Option<String>, ExportError>;

    /// Text content of every descendant matching `selector`, in document order.
    fn all_text(&self, selector: &str) -> Result<Vec<String>, ExportError>;
}

pub fn parse_selector(sel: &str) -> Result<Selector, ExportError> {
    Selector::parse(sel).map_err(|e| {
        loge!("Selector {sel:?} rejected: {e}");
        ExportError::Selector(s!(sel))
    })
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

impl CardQuery for ElementRef<'_> {
    fn first_attr(&self, selector: &str, attr: &str) -> Result<Option<String>, ExportError> {
        let sel = parse_selector(selector)?;
        Ok(self
            .select(&sel)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(str::to_string))
    }

    fn first_text(&self, selector: &str) -> Result<Option<String>, ExportError> {
        let sel = parse_selector(selector)?;
        Ok(self.select(&sel).next().map(text_of))
    }

    fn all_text(&self, selector: &str) -> Result<Vec<String>, ExportError> {
        let sel = parse_selector(selector)?;
        Ok(self.select(&sel).map(text_of).collect())
    }
}
