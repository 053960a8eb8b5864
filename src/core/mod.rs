// src/core/mod.rs

pub mod dom;
pub mod sanitize;

pub use dom::CardQuery;
