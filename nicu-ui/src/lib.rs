//! Shared Dioxus components and Plotly.js bridge for the NICU dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers that load Plotly.js and draw serialized figures
//! - `state`: Reactive AppState with Dioxus Signals
//! - `upload`: reading the files picked in the upload input
//! - `components`: Reusable RSX components (upload zone, table, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod upload;
