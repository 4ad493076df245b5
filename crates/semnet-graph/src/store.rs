//! The owned node/edge store backing a semantic network.
//!
//! The network is a simple directed graph: at most one edge per ordered
//! `(source, target)` pair. Inserting a second relation between the same
//! ordered pair replaces the stored label. Nodes and adjacency lists are
//! kept in insertion order so every enumeration is deterministic.

use indexmap::IndexMap;

use semnet_core::types::{Fact, GraphSnapshot, Node, DEFAULT_KIND};

/// Per-node storage: the kind tag plus both adjacency directions.
///
/// `outgoing` maps target → label and `incoming` maps source → label. The
/// two sides always mirror each other.
#[derive(Debug, Clone, Default)]
struct NodeSlot {
    kind: String,
    outgoing: IndexMap<String, String>,
    incoming: IndexMap<String, String>,
}

impl NodeSlot {
    fn new(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..Default::default()
        }
    }
}

/// The semantic network store.
///
/// Sole owner of every node and edge. Query, inference and conflict
/// functions borrow it; nothing outside holds a reference into it.
#[derive(Debug, Clone, Default)]
pub struct SemanticNet {
    nodes: IndexMap<String, NodeSlot>,
}

impl SemanticNet {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a network from a snapshot.
    ///
    /// Nodes are upserted first, then every edge is inserted in order, so
    /// a document listing two labels for the same ordered pair keeps the last.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Self {
        let mut net = Self::new();
        for node in &snapshot.nodes {
            net.add_node(&node.name, &node.kind);
        }
        for edge in &snapshot.edges {
            net.add_relation(&edge.source, &edge.relation, &edge.target);
        }
        net
    }

    // ── Nodes ─────────────────────────────────────────────────────

    /// Insert a node, or update the kind of an existing one.
    pub fn add_node(&mut self, name: &str, kind: &str) {
        match self.nodes.get_mut(name) {
            Some(slot) => {
                if slot.kind != kind {
                    tracing::debug!(node = name, from = %slot.kind, to = kind, "Node kind updated");
                    slot.kind = kind.to_string();
                }
            }
            None => {
                tracing::debug!(node = name, kind, "Node added");
                self.nodes.insert(name.to_string(), NodeSlot::new(kind));
            }
        }
    }

    /// Insert a node with the default kind only if it is absent.
    ///
    /// Unlike [`add_node`](Self::add_node), an existing node keeps its kind.
    fn ensure_node(&mut self, name: &str) {
        if !self.nodes.contains_key(name) {
            self.add_node(name, DEFAULT_KIND);
        }
    }

    /// Remove a node and every edge touching it. No-op if absent.
    pub fn remove_node(&mut self, name: &str) {
        let Some(slot) = self.nodes.shift_remove(name) else {
            return;
        };

        for target in slot.outgoing.keys() {
            if let Some(other) = self.nodes.get_mut(target) {
                other.incoming.shift_remove(name);
            }
        }
        for source in slot.incoming.keys() {
            if let Some(other) = self.nodes.get_mut(source) {
                other.outgoing.shift_remove(name);
            }
        }

        tracing::debug!(
            node = name,
            outgoing = slot.outgoing.len(),
            incoming = slot.incoming.len(),
            "Node removed"
        );
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// The stored kind of a node, if present.
    pub fn kind_of(&self, name: &str) -> Option<&str> {
        self.nodes.get(name).map(|slot| slot.kind.as_str())
    }

    // ── Relations ─────────────────────────────────────────────────

    /// Insert or overwrite the edge for the ordered pair `(source, target)`.
    ///
    /// Missing endpoints are created with the default kind. If the pair
    /// already carries a different label, that label is replaced.
    pub fn add_relation(&mut self, source: &str, relation: &str, target: &str) {
        self.ensure_node(source);
        self.ensure_node(target);

        let previous = self
            .nodes
            .get_mut(source)
            .and_then(|slot| slot.outgoing.insert(target.to_string(), relation.to_string()));
        if let Some(slot) = self.nodes.get_mut(target) {
            slot.incoming.insert(source.to_string(), relation.to_string());
        }

        match previous {
            Some(old) if old != relation => {
                tracing::warn!(
                    source,
                    target,
                    old_relation = %old,
                    new_relation = relation,
                    "Relation overwritten for existing node pair"
                );
            }
            Some(_) => {}
            None => tracing::debug!(source, relation, target, "Relation added"),
        }
    }

    /// Remove the edge `(source, target)` only if it carries `relation`.
    pub fn remove_relation(&mut self, source: &str, relation: &str, target: &str) {
        if !self.has_fact(source, relation, target) {
            return;
        }
        if let Some(slot) = self.nodes.get_mut(source) {
            slot.outgoing.shift_remove(target);
        }
        if let Some(slot) = self.nodes.get_mut(target) {
            slot.incoming.shift_remove(source);
        }
        tracing::debug!(source, relation, target, "Relation removed");
    }

    /// True iff the pair `(source, target)` has an edge labeled `relation`.
    pub fn has_fact(&self, source: &str, relation: &str, target: &str) -> bool {
        self.relation_between(source, target) == Some(relation)
    }

    /// The label stored for the ordered pair, if any.
    pub fn relation_between(&self, source: &str, target: &str) -> Option<&str> {
        self.nodes
            .get(source)
            .and_then(|slot| slot.outgoing.get(target))
            .map(String::as_str)
    }

    // ── Enumeration ───────────────────────────────────────────────

    /// Outgoing `(target, relation)` pairs of `source`, in insertion order.
    /// Empty if the node is absent.
    pub fn outgoing(&self, source: &str) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.nodes
            .get(source)
            .into_iter()
            .flat_map(|slot| slot.outgoing.iter())
            .map(|(target, relation)| (target.as_str(), relation.as_str()))
    }

    /// Incoming `(source, relation)` pairs of `target`, in insertion order.
    /// Empty if the node is absent.
    pub fn incoming(&self, target: &str) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.nodes
            .get(target)
            .into_iter()
            .flat_map(|slot| slot.incoming.iter())
            .map(|(source, relation)| (source.as_str(), relation.as_str()))
    }

    /// All `(name, kind)` pairs in node insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.nodes
            .iter()
            .map(|(name, slot)| (name.as_str(), slot.kind.as_str()))
    }

    /// All `(source, relation, target)` edges: nodes in insertion order,
    /// then each node's outgoing edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.nodes.iter().flat_map(|(source, slot)| {
            slot.outgoing.iter().map(move |(target, relation)| {
                (source.as_str(), relation.as_str(), target.as_str())
            })
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|slot| slot.outgoing.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Owned copy of every node and edge, for rendering or export.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self
                .nodes()
                .map(|(name, kind)| Node::new(name, kind))
                .collect(),
            edges: self
                .edges()
                .map(|(source, relation, target)| Fact::new(source, relation, target))
                .collect(),
        }
    }
}
