// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod export;
pub mod file;
pub mod gui;
pub mod timer;

#[cfg(feature = "cli")]
pub mod cli;
