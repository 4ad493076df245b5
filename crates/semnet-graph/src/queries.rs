//! Relation and classification queries.
//!
//! All results are owned copies; they do not track later changes to the
//! network.

use crate::store::SemanticNet;

/// Targets of `source`'s outgoing edges labeled `relation`, in edge order.
pub fn neighbors_with_relation(net: &SemanticNet, source: &str, relation: &str) -> Vec<String> {
    net.outgoing(source)
        .filter(|(_, label)| *label == relation)
        .map(|(target, _)| target.to_string())
        .collect()
}

/// Sources of `target`'s incoming edges labeled `relation`, in edge order.
pub fn incoming_with_relation(net: &SemanticNet, target: &str, relation: &str) -> Vec<String> {
    net.incoming(target)
        .filter(|(_, label)| *label == relation)
        .map(|(source, _)| source.to_string())
        .collect()
}

/// Names of every node whose kind equals `kind`, in node order.
pub fn nodes_of_kind(net: &SemanticNet, kind: &str) -> Vec<String> {
    net.nodes()
        .filter(|(_, node_kind)| *node_kind == kind)
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicles() -> SemanticNet {
        let mut net = SemanticNet::new();
        net.add_is_a("Car", "Vehicle");
        net.add_is_a("Truck", "Vehicle");
        net.add_has_part("Vehicle", "Engine");
        net.add_has_part("Vehicle", "Wheel");
        net.add_uses_fuel("Car", "Petrol");
        net.add_uses_fuel("Truck", "Diesel");
        net
    }

    #[test]
    fn test_neighbors_with_relation() {
        let net = vehicles();
        assert_eq!(
            neighbors_with_relation(&net, "Vehicle", "has-part"),
            vec!["Engine", "Wheel"]
        );
        assert_eq!(neighbors_with_relation(&net, "Car", "uses-fuel"), vec!["Petrol"]);
        assert!(neighbors_with_relation(&net, "Car", "has-part").is_empty());
    }

    #[test]
    fn test_incoming_with_relation() {
        let net = vehicles();
        assert_eq!(
            incoming_with_relation(&net, "Vehicle", "is-a"),
            vec!["Car", "Truck"]
        );
        assert!(incoming_with_relation(&net, "Vehicle", "has-part").is_empty());
    }

    #[test]
    fn test_queries_on_absent_node_are_empty() {
        let net = vehicles();
        assert!(neighbors_with_relation(&net, "Boat", "has-part").is_empty());
        assert!(incoming_with_relation(&net, "Boat", "is-a").is_empty());
    }

    #[test]
    fn test_nodes_of_kind() {
        let net = vehicles();
        assert_eq!(nodes_of_kind(&net, "fuel"), vec!["Petrol", "Diesel"]);
        assert_eq!(nodes_of_kind(&net, "part"), vec!["Engine", "Wheel"]);
        assert_eq!(
            nodes_of_kind(&net, "concept"),
            vec!["Car", "Vehicle", "Truck"]
        );
        assert!(nodes_of_kind(&net, "role").is_empty());
    }

    #[test]
    fn test_results_are_snapshots() {
        let mut net = vehicles();
        let parts = neighbors_with_relation(&net, "Vehicle", "has-part");

        net.remove_node("Engine");

        assert_eq!(parts, vec!["Engine", "Wheel"]);
        assert_eq!(neighbors_with_relation(&net, "Vehicle", "has-part"), vec!["Wheel"]);
    }
}
