//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by update frequency to avoid unnecessary re-renders.

pub mod alerts_state;
pub mod chart_state;
pub mod clock_state;
pub mod devices_state;
pub mod i18n_state;
pub mod log_state;
pub mod stats_state;
pub mod toast_state;
