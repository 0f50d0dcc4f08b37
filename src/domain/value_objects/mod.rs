//! Domain Value Objects
//!
//! Immutable value types that represent menu concepts.

mod node_id;
mod node_kind;
mod url_suffixes;

pub use node_id::NodeId;
pub use node_kind::NodeKind;
pub use url_suffixes::UrlSuffixes;
