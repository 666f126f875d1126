//! neo-filter — single-page web filter over NASA close-approach data.
//!
//! The dataset is loaded once at startup and shared read-only; every request
//! is an independent scan-and-render over that immutable table.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Dataset ──► Filter ──► Page
//! ```
//!
//! The axum router wires a GET/POST pair on `/` through the filter and page
//! layers. The layers are exposed as public modules so that the integration
//! harness can drive the real router against fixture datasets.

pub mod app;
pub mod data;
pub mod state;
pub mod web;
