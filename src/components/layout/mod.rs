//! Layout Components

pub mod header;
pub mod log_panel;
pub mod stats_row;
