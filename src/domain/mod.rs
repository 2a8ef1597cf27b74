//! Domain - Pure Data Structures and Wire Types
//!
//! These types don't depend on GPUI and represent the business domain.
//! Wire field names follow the Spanish schemas of the upstream services.

pub mod alert;
pub mod chart;
pub mod config;
pub mod device;
pub mod stats;
