//! Presentation layer: pure functions from (rows, columns) to markup.
//!
//! Nothing in here touches the request cycle; `app` calls these with the
//! filtered row indices and embeds the returned strings in the response.

pub mod page;
