//! HTTP API crate for the inventory & replenishment engine.

pub mod app;
