//! Features - Vertical Feature Slices
//!
//! Each feature contains its panel, controller, and local widgets.

pub mod alerts;
pub mod chart;
pub mod devices;
