use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Immutable feature-descriptor to point-weight table. Injected into the
/// pricing engine so tests and per-market deployments can substitute their
/// own weights without touching process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturePointTable {
    weights: BTreeMap<String, u32>,
}

impl FeaturePointTable {
    pub fn new(weights: BTreeMap<String, u32>) -> Self {
        Self { weights }
    }

    /// Standard marketplace weights for the room amenity tiers.
    pub fn standard() -> Self {
        let mut weights = BTreeMap::new();
        weights.insert("private_bathroom_balcony".to_string(), 15);
        weights.insert("private_bathroom".to_string(), 12);
        weights.insert("shared_bathroom_balcony".to_string(), 8);
        weights.insert("shared_bathroom".to_string(), 5);
        Self { weights }
    }

    /// Unknown descriptors score zero points rather than failing, so a
    /// half-configured room never breaks an allocation pass.
    pub fn points(&self, descriptor: &str) -> u32 {
        match self.weights.get(descriptor) {
            Some(points) => *points,
            None => {
                tracing::debug!(%descriptor, "unknown feature descriptor scored as zero points");
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_ranks_private_amenities_highest() {
        let table = FeaturePointTable::standard();
        assert_eq!(table.points("private_bathroom_balcony"), 15);
        assert_eq!(table.points("shared_bathroom"), 5);
        assert!(table.points("private_bathroom") > table.points("shared_bathroom_balcony"));
    }

    #[test]
    fn unknown_descriptor_scores_zero() {
        let table = FeaturePointTable::standard();
        assert_eq!(table.points("penthouse_jacuzzi"), 0);
        assert_eq!(table.points(""), 0);
    }
}
