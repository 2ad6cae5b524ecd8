//! Application layer for the `quadsim` binary.

pub mod app;
pub mod config;
