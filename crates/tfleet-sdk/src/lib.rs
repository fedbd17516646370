//! # tfleet-sdk
//!
//! Public SDK for using tfleet as a Rust library.
//!
//! Provides two entry points:
//! - [`FleetBuilder`](builder::FleetBuilder): Fluent API for assembling fleets and module groups.
//! - [`write_document`](export::write_document): Writes a merged document to disk.
//!
//! # Example
//!
//! ```rust,no_run
//! use tfleet_sdk::builder::FleetBuilder;
//!
//! # fn main() -> tfleet_common::error::Result<()> {
//! let path = FleetBuilder::new()
//!     .build_fleet("app", 3)?
//!     .build_group("net", 2)?
//!     .export("terraform/main.tf.json")?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod export;
