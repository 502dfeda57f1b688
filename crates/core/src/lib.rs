//! Domain primitives for the planetarium catalog.
//!
//! Everything here is free of HTTP and SQL concerns: error taxonomy, id and
//! timestamp aliases, list-filter parsing, catalog rules, upload image
//! validation and the blob store used for show images.

pub mod catalog;
pub mod error;
pub mod filters;
pub mod images;
pub mod storage;
pub mod types;
