//! # tfleet-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the entire tfleet workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and also hosts the process-wide settings holder, which is
//! independent of the document assembly pipeline.

pub mod config;
pub mod constants;
pub mod error;
pub mod registry;
pub mod settings;
pub mod types;
