//! Vigia GUI Client Library
//!
//! This crate provides the main application logic for the Vigia dashboard
//! client, a native monitoring front end for an IoT zone installation
//! (device registry, alert feed and zone statistics).

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
