//! Core domain types for the semantic network.
//!
//! Everything here is plain data: query results, inferred facts, conflicts,
//! and full graph snapshots are all owned copies that can be serialized and
//! handed to consumers (visualizers, demos, the CLI) without exposing the
//! store itself.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ── Well-known vocabulary ─────────────────────────────────────────

/// Kind assigned to nodes created implicitly by a relation insert.
pub const DEFAULT_KIND: &str = "concept";

/// Kind given to the target of a `has-part` relation.
pub const PART_KIND: &str = "part";

/// Kind given to the target of a `uses-fuel` relation.
pub const FUEL_KIND: &str = "fuel";

/// Subtype / instance-of relation walked by inheritance.
pub const IS_A: &str = "is-a";

/// Whole-to-part relation.
pub const HAS_PART: &str = "has-part";

/// Vehicle-to-fuel relation.
pub const USES_FUEL: &str = "uses-fuel";

// ── Nodes ─────────────────────────────────────────────────────────

/// A named entity in the network together with its classification tag.
///
/// The name is the only identity. `kind` is free-form and never takes part
/// in inference or conflict detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Node {
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: String,
}

impl Node {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// A node with the default `concept` kind.
    pub fn concept(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_KIND)
    }
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

// ── Facts ─────────────────────────────────────────────────────────

/// A single `(source, relation, target)` triple.
///
/// Used both for enumerating stored edges and for reporting facts created
/// by inheritance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fact {
    pub source: String,
    pub relation: String,
    pub target: String,
}

impl Fact {
    pub fn new(
        source: impl Into<String>,
        relation: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            relation: relation.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} -[{}]-> {})", self.source, self.relation, self.target)
    }
}

// ── Conflicts ─────────────────────────────────────────────────────

/// A source node that maps to more than one distinct target under the
/// same relation label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conflict {
    pub source: String,
    pub targets: BTreeSet<String>,
}

impl Conflict {
    /// Whether `target` is one of the competing targets.
    pub fn involves(&self, target: &str) -> bool {
        self.targets.contains(target)
    }
}

// ── Snapshots ─────────────────────────────────────────────────────

/// Owned copy of every node and edge in a network.
///
/// This is the shape handed to rendering collaborators and the document
/// format read and written by the CLI. Both lists default to empty so a
/// partial document (edges only, say) is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Fact>,
}

impl GraphSnapshot {
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Read a snapshot document from a JSON file.
    pub fn read_file(path: impl AsRef<Path>) -> crate::error::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
