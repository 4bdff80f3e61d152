//! Relnote Core Library
//!
//! Related-note ranking for linked note collections: given a snapshot of
//! directed links, rank the notes most related to a query note using the
//! Adamic–Adar index plus optional direct-link augmentation.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod similarity;
pub mod snapshot;
