//! Chart Feature - Rolling Temperature Chart

pub mod panel;
