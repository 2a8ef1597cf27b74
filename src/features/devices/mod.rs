//! Devices Feature - Registry Panel and CRUD

pub mod controller;
pub mod panel;
