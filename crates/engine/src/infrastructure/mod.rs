//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod cache;
pub mod clock;
pub mod config;
pub mod ports;
pub mod scene_model;
pub mod whiteboard_api;
