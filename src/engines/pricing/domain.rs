use serde::{Deserialize, Serialize};

/// Host-configured room awaiting a price. The room number is positive and
/// unique within a property; the importer enforces both before drafts reach
/// the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDraft {
    pub room_number: u32,
    pub name: String,
    pub feature: String,
}

/// Room with its allocated share of the property price. `computed_price` is
/// derived state, never authoritative: it is re-derived from the total price
/// and the point table on every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedRoom {
    pub room_number: u32,
    pub name: String,
    pub feature: String,
    pub points: u32,
    pub computed_price: f64,
    pub tenant_total: f64,
}

/// Output of one allocation pass over a property's rooms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingAllocation {
    pub rooms: Vec<PricedRoom>,
    pub total_points: u32,
    pub price_per_point: f64,
}
