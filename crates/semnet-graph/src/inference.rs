//! Property inheritance along `is-a` edges.
//!
//! A single pass copies each listed relation one hop, from a parent to
//! its direct `is-a` children. The `is-a` edges and every parent's outgoing
//! edges are captured before the first write, so facts inferred during a
//! pass never feed that same pass. Deeper hierarchies need repeated passes;
//! [`inherit_to_fixed_point`] runs them.

use std::collections::HashSet;

use serde::Serialize;

use semnet_core::types::{Fact, IS_A};

use crate::store::SemanticNet;

/// A parent's outgoing edges as `(relation, target)`, captured up front.
type ParentEdges = Vec<(String, String)>;

/// Outcome of [`inherit_to_fixed_point`].
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct InheritanceRun {
    /// Every fact added, in the order it was added.
    pub new_facts: Vec<Fact>,
    /// Number of passes executed, including a final empty one.
    pub rounds: usize,
    /// Whether the last pass added nothing.
    pub converged: bool,
}

/// Copy the listed relations from each `is-a` parent to its child.
///
/// For every `child is-a parent` edge and every `parent -[r]-> z` edge with
/// `r` in `property_relations`, adds `child -[r]-> z` unless that exact fact
/// already holds. Returns the added facts in the order they were written.
///
/// Writing goes through [`SemanticNet::add_relation`], so a pre-existing
/// `child -> z` edge with a different label is overwritten.
pub fn inherit_properties<S: AsRef<str>>(
    net: &mut SemanticNet,
    property_relations: &[S],
) -> Vec<Fact> {
    let wanted: HashSet<&str> = property_relations.iter().map(|r| r.as_ref()).collect();
    if wanted.is_empty() {
        return Vec::new();
    }

    let plan = capture_plan(net, &wanted);

    let mut new_facts = Vec::new();
    for (child, parent_edges) in &plan {
        for (relation, target) in parent_edges {
            if net.has_fact(child, relation, target) {
                continue;
            }
            net.add_relation(child, relation, target);
            new_facts.push(Fact::new(child.as_str(), relation.as_str(), target.as_str()));
        }
    }

    tracing::info!(
        isa_edges = plan.len(),
        inferred = new_facts.len(),
        "Property inheritance pass complete"
    );
    new_facts
}

/// Repeat [`inherit_properties`] until a pass adds nothing or `max_rounds`
/// passes have run.
///
/// Passes can keep producing facts forever when inherited labels overwrite
/// each other around a cycle; `max_rounds` bounds that case and
/// `converged` reports which way the run ended.
pub fn inherit_to_fixed_point<S: AsRef<str>>(
    net: &mut SemanticNet,
    property_relations: &[S],
    max_rounds: usize,
) -> InheritanceRun {
    let mut run = InheritanceRun::default();

    while run.rounds < max_rounds {
        let added = inherit_properties(net, property_relations);
        run.rounds += 1;
        if added.is_empty() {
            run.converged = true;
            break;
        }
        run.new_facts.extend(added);
    }

    if !run.converged {
        tracing::warn!(
            max_rounds,
            inferred = run.new_facts.len(),
            "Inheritance stopped before reaching a fixed point"
        );
    }
    run
}

/// Pair every `is-a` child with the relevant outgoing edges of its parent,
/// in store edge order. Nothing in the plan borrows the store.
fn capture_plan(net: &SemanticNet, wanted: &HashSet<&str>) -> Vec<(String, ParentEdges)> {
    net.edges()
        .filter(|(_, relation, _)| *relation == IS_A)
        .map(|(child, _, parent)| {
            let parent_edges = net
                .outgoing(parent)
                .filter(|(_, relation)| wanted.contains(relation))
                .map(|(target, relation)| (relation.to_string(), target.to_string()))
                .collect();
            (child.to_string(), parent_edges)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::neighbors_with_relation;

    #[test]
    fn test_inherits_parent_part() {
        let mut net = SemanticNet::new();
        net.add_is_a("Car", "Vehicle");
        net.add_has_part("Vehicle", "Engine");

        let facts = inherit_properties(&mut net, &["has-part"]);

        assert_eq!(facts, vec![Fact::new("Car", "has-part", "Engine")]);
        assert_eq!(neighbors_with_relation(&net, "Car", "has-part"), vec!["Engine"]);
    }

    #[test]
    fn test_second_pass_adds_nothing() {
        let mut net = SemanticNet::new();
        net.add_is_a("Car", "Vehicle");
        net.add_has_part("Vehicle", "Engine");

        assert!(!inherit_properties(&mut net, &["has-part"]).is_empty());
        assert!(inherit_properties(&mut net, &["has-part"]).is_empty());
        assert_eq!(net.edge_count(), 3);
    }

    #[test]
    fn test_unlisted_relations_are_not_inherited() {
        let mut net = SemanticNet::new();
        net.add_is_a("Car", "Vehicle");
        net.add_has_part("Vehicle", "Engine");
        net.add_uses_fuel("Vehicle", "Petrol");

        let facts = inherit_properties(&mut net, &["uses-fuel"]);

        assert_eq!(facts, vec![Fact::new("Car", "uses-fuel", "Petrol")]);
        assert!(!net.has_fact("Car", "has-part", "Engine"));
    }

    #[test]
    fn test_one_hop_per_pass() {
        let mut net = SemanticNet::new();
        net.add_is_a("ElectricCar", "Car");
        net.add_is_a("Car", "Vehicle");
        net.add_has_part("Vehicle", "Engine");

        let first = inherit_properties(&mut net, &["has-part"]);
        assert_eq!(first, vec![Fact::new("Car", "has-part", "Engine")]);
        assert!(!net.has_fact("ElectricCar", "has-part", "Engine"));

        let second = inherit_properties(&mut net, &["has-part"]);
        assert_eq!(second, vec![Fact::new("ElectricCar", "has-part", "Engine")]);
    }

    #[test]
    fn test_one_hop_independent_of_edge_order() {
        // Parent's is-a edge is stored before the child's.
        let mut net = SemanticNet::new();
        net.add_is_a("Car", "Vehicle");
        net.add_is_a("ElectricCar", "Car");
        net.add_has_part("Vehicle", "Engine");

        let first = inherit_properties(&mut net, &["has-part"]);

        assert_eq!(first, vec![Fact::new("Car", "has-part", "Engine")]);
        assert!(!net.has_fact("ElectricCar", "has-part", "Engine"));
    }

    #[test]
    fn test_shared_part_from_two_parents_added_once() {
        let mut net = SemanticNet::new();
        net.add_is_a("Amphicar", "Car");
        net.add_is_a("Amphicar", "Boat");
        net.add_has_part("Car", "Engine");
        net.add_has_part("Boat", "Engine");

        let facts = inherit_properties(&mut net, &["has-part"]);

        assert_eq!(facts, vec![Fact::new("Amphicar", "has-part", "Engine")]);
    }

    #[test]
    fn test_inheritance_overwrites_differing_label() {
        let mut net = SemanticNet::new();
        net.add_is_a("Car", "Vehicle");
        net.add_has_part("Vehicle", "Engine");
        net.add_relation("Car", "lacks", "Engine");

        let facts = inherit_properties(&mut net, &["has-part"]);

        assert_eq!(facts, vec![Fact::new("Car", "has-part", "Engine")]);
        assert!(!net.has_fact("Car", "lacks", "Engine"));
    }

    #[test]
    fn test_empty_inputs_yield_nothing() {
        let mut empty = SemanticNet::new();
        assert!(inherit_properties(&mut empty, &["has-part"]).is_empty());

        let mut net = SemanticNet::new();
        net.add_is_a("Car", "Vehicle");
        net.add_has_part("Vehicle", "Engine");
        let none: [&str; 0] = [];
        assert!(inherit_properties(&mut net, &none).is_empty());
        assert_eq!(net.edge_count(), 2);
    }

    #[test]
    fn test_fixed_point_walks_whole_chain() {
        let mut net = SemanticNet::new();
        net.add_is_a("ElectricCar", "Car");
        net.add_is_a("Car", "Vehicle");
        net.add_has_part("Vehicle", "Engine");

        let run = inherit_to_fixed_point(&mut net, &["has-part"], 10);

        assert!(run.converged);
        assert_eq!(run.rounds, 3);
        assert_eq!(
            run.new_facts,
            vec![
                Fact::new("Car", "has-part", "Engine"),
                Fact::new("ElectricCar", "has-part", "Engine"),
            ]
        );
    }

    #[test]
    fn test_fixed_point_respects_round_limit() {
        let mut net = SemanticNet::new();
        net.add_is_a("ElectricCar", "Car");
        net.add_is_a("Car", "Vehicle");
        net.add_has_part("Vehicle", "Engine");

        let run = inherit_to_fixed_point(&mut net, &["has-part"], 1);

        assert!(!run.converged);
        assert_eq!(run.rounds, 1);
        assert_eq!(run.new_facts.len(), 1);
    }

    #[test]
    fn test_is_a_cycle_terminates() {
        let mut net = SemanticNet::new();
        net.add_is_a("A", "B");
        net.add_is_a("B", "A");
        net.add_has_part("A", "X");

        let run = inherit_to_fixed_point(&mut net, &["has-part"], 10);

        assert!(run.converged);
        assert!(net.has_fact("B", "has-part", "X"));
    }
}
