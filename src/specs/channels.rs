//! Extraction rules for TGStat channel listings.
//!
//! Purpose:
//! - Find every channel card on a rendered listing page
//!   (`.card.peer-item-row` on search/rating pages, `.channel-item` on catalog pages).
//! - Read one [`ChannelRecord`] per card: Telegram link, title, subscribers,
//!   reach and citation index.
//!
//! Non-Responsibilities:
//! - **No file output, dialogs or CSV.** See `export` and `csv`.
//!
//! Extraction works over [`CardQuery`], so a card can be a parsed element or a
//! hand-built fixture.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::config::consts::{
    CARD_SELECTOR, LINK_SELECTOR, NAME_SELECTORS, STAT_SELECTOR, TG_BASE, TG_JOINCHAT,
};
use crate::core::dom::{parse_selector, CardQuery};
use crate::core::sanitize::{digits_and_dots, digits_only};
use crate::error::ExportError;

// "/channel/@name" -> public username
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/channel/(@[^/]+)").expect("static regex"));

// "/channel/AAAAxyz" -> private invite id
static INVITE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/channel/([^@][^/]+)").expect("static regex"));

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelRecord {
    pub url: String,
    pub name: String,
    pub subscribers: String,
    pub reach: String,
    pub citation_index: String,
}

impl ChannelRecord {
    /// Cells in CSV column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.url.clone(),
            self.name.clone(),
            self.subscribers.clone(),
            self.reach.clone(),
            self.citation_index.clone(),
        ]
    }
}

/// Map a TGStat channel href to its t.me link.
/// Username links win over invite links; anything else maps to "".
pub fn normalize_link(href: &str) -> String {
    if let Some(c) = USERNAME_RE.captures(href) {
        return join!(TG_BASE, c[1].trim_start_matches('@'));
    }
    if let Some(c) = INVITE_RE.captures(href) {
        return join!(TG_JOINCHAT, &c[1]);
    }
    s!()
}

/// Pull one record out of a card. Absent pieces become empty strings.
pub fn extract_record<C: CardQuery + ?Sized>(card: &C) -> Result<ChannelRecord, ExportError> {
    let url = card
        .first_attr(LINK_SELECTOR, "href")?
        .map(|href| normalize_link(&href))
        .unwrap_or_default();

    // First selector that matches an element wins, even if its text is blank.
    let mut name = s!();
    for sel in NAME_SELECTORS {
        if let Some(text) = card.first_text(sel)? {
            name = text.trim().to_string();
            break;
        }
    }

    let stats = card.all_text(STAT_SELECTOR)?;
    let stat = |i: usize, keep: fn(&str) -> String| stats.get(i).map(|s| keep(s)).unwrap_or_default();

    Ok(ChannelRecord {
        url,
        name,
        subscribers: stat(0, digits_only),
        reach: stat(1, digits_only),
        citation_index: stat(2, digits_and_dots),
    })
}

/// Scan a whole document. Records keep document order.
/// An empty result is not an error here; the exporter decides what that means.
pub fn scan_document(doc: &Html) -> Result<Vec<ChannelRecord>, ExportError> {
    let cards = parse_selector(CARD_SELECTOR)?;
    let mut out = Vec::new();
    for card in doc.select(&cards) {
        out.push(extract_record(&card)?);
    }
    logd!("Scan: {} card(s)", out.len());
    Ok(out)
}

/// Parse and scan raw HTML.
pub fn scan_html(html: &str) -> Result<Vec<ChannelRecord>, ExportError> {
    let doc = Html::parse_document(html);
    scan_document(&doc)
}
