//! Alerts Feature - Active Alert Feed

pub mod controller;
pub mod panel;
