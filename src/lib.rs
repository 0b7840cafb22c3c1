//! Content tree engine (contree)
//!
//! Turns a recursively nested content tree plus a set of expanded node ids
//! into a flat, ordered row list, and computes the minimal insert/delete
//! deltas needed to transition between row lists when a single node is
//! toggled. An offline-capable session orchestrator sits on top.
//!
//! Architecture follows Pure Core / Impure Shell: [`flatten`] and [`diff`]
//! are pure functions over plain data; [`session`] drives them against two
//! injected collaborators (a [`source::ContentSource`] and a
//! [`store::ContentStore`]) and publishes state changes over a watch channel
//! rather than calling back into any presentation layer.

pub mod config;
pub mod diff;
pub mod flatten;
pub mod logging;
pub mod model;
pub mod parser;
pub mod session;
pub mod source;
pub mod store;
pub mod util;

#[cfg(test)]
mod test_support;

// Re-export the core surface for convenience
pub use diff::{diff_toggle, RowDiff};
pub use flatten::{flatten, ExpansionState};
pub use model::{LoadFailure, Node, NodeId, NodeKind, Row};
pub use session::{ContentSession, Phase};
