//! Convenience constructors for the common relation types.
//!
//! Each constructor (re)establishes the kinds of both endpoints before
//! inserting the relation, so calling one on pre-existing nodes also resets
//! their kinds.

use semnet_core::types::{DEFAULT_KIND, FUEL_KIND, HAS_PART, IS_A, PART_KIND, USES_FUEL};

use crate::store::SemanticNet;

impl SemanticNet {
    /// `child is-a parent`. Both endpoints become `concept` nodes.
    pub fn add_is_a(&mut self, child: &str, parent: &str) {
        self.add_node(child, DEFAULT_KIND);
        self.add_node(parent, DEFAULT_KIND);
        self.add_relation(child, IS_A, parent);
    }

    /// `whole has-part part`. The whole is a `concept`, the part a `part`.
    pub fn add_has_part(&mut self, whole: &str, part: &str) {
        self.add_node(whole, DEFAULT_KIND);
        self.add_node(part, PART_KIND);
        self.add_relation(whole, HAS_PART, part);
    }

    /// `vehicle uses-fuel fuel`. The vehicle is a `concept`, the fuel a `fuel`.
    pub fn add_uses_fuel(&mut self, vehicle: &str, fuel: &str) {
        self.add_node(vehicle, DEFAULT_KIND);
        self.add_node(fuel, FUEL_KIND);
        self.add_relation(vehicle, USES_FUEL, fuel);
    }
}
