//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors; raw
//! constructors are never exported. Mutation happens only through the
//! session orchestrator.

pub mod error;
pub mod identifiers;
pub mod node;
pub mod row;

// Re-export for convenience
pub use error::{FetchError, LoadFailure, ParseError, StoreError};
pub use identifiers::NodeId;
pub use node::{Node, NodeKind};
pub use row::Row;
