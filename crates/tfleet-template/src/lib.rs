//! # tfleet-template
//!
//! Building blocks for Terraform JSON documents.
//!
//! Handles:
//! - **Fragment**: the typed `resource` / `module` document tree and its merged [`Document`](fragment::Document) form.
//! - **Factory**: single-resource templates stamped with fresh triggers.
//! - **Cloner**: independent copies of a template, each edited by a mutator.
//! - **Aggregator**: ordered accumulation and merging of fragments.
//! - **Manifest**: declarative lists of fleets and groups to assemble.

pub mod aggregator;
pub mod cloner;
pub mod factory;
pub mod fragment;
pub mod manifest;
