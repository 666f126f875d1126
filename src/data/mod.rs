//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!  nasa.csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse file → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Dataset  │  Vec<Row>, header-ordered columns
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  match predicate → matching row indices
//!   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
