//! semnet-graph: In-memory semantic network engine.
//!
//! [`SemanticNet`] is the single owner of all nodes and labeled edges.
//! Everything else is a stateless function borrowing it:
//! - [`queries`]: neighbors, predecessors, and nodes by kind
//! - [`inference`]: property inheritance along `is-a` edges
//! - [`conflicts`]: sources with several targets for one relation

pub mod conflicts;
pub mod inference;
pub mod mutations;
pub mod queries;
pub mod store;

pub use conflicts::{find_all_conflicts, find_conflicts, RelationConflicts};
pub use inference::{inherit_properties, inherit_to_fixed_point, InheritanceRun};
pub use queries::{incoming_with_relation, neighbors_with_relation, nodes_of_kind};
pub use store::SemanticNet;
