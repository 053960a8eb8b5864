// src/specs/mod.rs
//! # Page specs
//!
//! Where the ground truth lives in a saved TGStat listing page and how to read it.
//!
//! ## What lives here
//! - **Card selection** (`.card.peer-item-row, .channel-item`) and per-card field
//!   extraction with selector precedence (name: `.font-16` → `h6` → `.text-truncate`
//!   → `strong`).
//! - **Link normalization** from TGStat channel URLs to public `t.me` links.
//! - **Light shaping** into `ChannelRecord`s, one per card, in document order.
//!
//! ## What does **not** live here
//! - CSV formatting (`csv`), file delivery (`file`), dialogs (`export`, frontends).
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → export::export_channels → specs::channels::scan_html
//!                                    ↘  Vec<ChannelRecord>
//!                     csv::to_export_string → Download::save
//! ```
//!
//! ## Testing notes
//! Extraction is written against `core::CardQuery`, so tests can feed a fake card
//! without building a DOM; whole-page tests use small inline HTML fixtures.
pub mod channels;
