//! Conflict detection: sources with more than one distinct target under the
//! same relation label.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use semnet_core::types::Conflict;

use crate::store::SemanticNet;

/// Conflicts found for one relation label.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RelationConflicts {
    pub relation: String,
    pub conflicts: Vec<Conflict>,
}

/// Report every source whose `relation` edges reach more than one distinct
/// target.
///
/// Sources appear in the order their first matching edge is enumerated;
/// callers should treat the result as a set.
pub fn find_conflicts(net: &SemanticNet, relation: &str) -> Vec<Conflict> {
    let mut targets_by_source: IndexMap<&str, BTreeSet<String>> = IndexMap::new();
    for (source, label, target) in net.edges() {
        if label == relation {
            targets_by_source
                .entry(source)
                .or_default()
                .insert(target.to_string());
        }
    }

    let conflicts: Vec<Conflict> = targets_by_source
        .into_iter()
        .filter(|(_, targets)| targets.len() > 1)
        .map(|(source, targets)| Conflict {
            source: source.to_string(),
            targets,
        })
        .collect();

    if !conflicts.is_empty() {
        tracing::info!(relation, count = conflicts.len(), "Conflicting facts detected");
    }
    conflicts
}

/// Run [`find_conflicts`] for each relation, keeping only relations that
/// have at least one conflict.
pub fn find_all_conflicts<S: AsRef<str>>(
    net: &SemanticNet,
    relations: &[S],
) -> Vec<RelationConflicts> {
    relations
        .iter()
        .map(|relation| RelationConflicts {
            relation: relation.as_ref().to_string(),
            conflicts: find_conflicts(net, relation.as_ref()),
        })
        .filter(|found| !found.conflicts.is_empty())
        .collect()
}
