//! Link graph model
//!
//! - [`RawLinkGraph`]: directed links as reported by the host
//! - [`LinkGraphProvider`]: trait for pluggable link sources
//! - [`FilteredGraph`]: undirected, exclusion-filtered view used for scoring

pub mod builder;
pub mod provider;
pub mod types;

pub use builder::{DirectConnections, FilteredGraph};
pub use provider::LinkGraphProvider;
pub use types::{LinkPresence, LinkTargets, RawLinkGraph};
