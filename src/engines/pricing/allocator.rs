use tracing::warn;

use super::domain::{PricedRoom, PricingAllocation, RoomDraft};
use super::points::FeaturePointTable;

/// Stateless engine that splits a property's total monthly price across its
/// rooms in proportion to their feature point weights.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    table: FeaturePointTable,
    service_fee_rate: f64,
}

impl PricingEngine {
    pub fn new(table: FeaturePointTable, service_fee_rate: f64) -> Self {
        Self {
            table,
            service_fee_rate,
        }
    }

    /// Allocates `total_price` across `rooms` proportionally to their point
    /// weights. Each room's share is rounded half-up independently, so the
    /// rounded prices are not reconciled back to the total; the drift is
    /// bounded by half a currency unit per room.
    ///
    /// When every room scores zero points the whole allocation is zero:
    /// ambiguous descriptors must not accrue price, and an equal split would
    /// hide the misconfiguration from the host.
    pub fn allocate(&self, rooms: &[RoomDraft], total_price: f64) -> PricingAllocation {
        let total_price = if total_price < 0.0 || !total_price.is_finite() {
            warn!(total_price, "invalid total price clamped to zero before allocation");
            0.0
        } else {
            total_price
        };

        let points: Vec<u32> = rooms
            .iter()
            .map(|room| self.table.points(&room.feature))
            .collect();
        let total_points: u32 = points.iter().sum();

        let price_per_point = if total_points == 0 {
            0.0
        } else {
            total_price / f64::from(total_points)
        };

        let rooms = rooms
            .iter()
            .zip(points)
            .map(|(room, points)| {
                let computed_price = if total_points == 0 {
                    0.0
                } else {
                    (total_price * f64::from(points) / f64::from(total_points)).round()
                };
                let tenant_total = (computed_price * (1.0 + self.service_fee_rate)).round();

                PricedRoom {
                    room_number: room.room_number,
                    name: room.name.clone(),
                    feature: room.feature.clone(),
                    points,
                    computed_price,
                    tenant_total,
                }
            })
            .collect();

        PricingAllocation {
            rooms,
            total_points,
            price_per_point,
        }
    }

    pub fn service_fee_rate(&self) -> f64 {
        self.service_fee_rate
    }
}
