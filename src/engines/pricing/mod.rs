//! Point-weighted allocation of a property's total monthly price across its
//! rooms. Each room carries a feature descriptor that maps to an integer
//! point weight; prices are split proportionally to those weights.

mod allocator;
mod domain;
mod importer;
mod points;

pub use allocator::PricingEngine;
pub use domain::{PricedRoom, PricingAllocation, RoomDraft};
pub use importer::{rooms_from_reader, RoomImportError};
pub use points::FeaturePointTable;

/// Surcharge applied on top of a room's allocated price to derive the
/// tenant-facing total. Presentation-level only; the allocated price stays
/// the authoritative figure.
pub const DEFAULT_SERVICE_FEE_RATE: f64 = 0.07;
