//! Typed Terraform JSON document tree.
//!
//! The top level is fixed to a `resource` section and an optional `module`
//! section. Resource bodies are free-form [`serde_json::Value`] maps, so any
//! attribute nesting survives a round trip while the outer shape is checked
//! on deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use tfleet_common::error::{Result, TfleetError};
use tfleet_common::types::{ResourceKind, ResourceName};

/// Body of one resource block, e.g. `{"triggers": {...}}`.
pub type Attributes = Map<String, Value>;

/// Resource blocks of one kind, keyed by name.
pub type ResourceBlocks = BTreeMap<ResourceName, Attributes>;

/// One self-contained configuration unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fragment {
    /// Resource blocks grouped by kind.
    #[serde(default)]
    pub resource: BTreeMap<ResourceKind, ResourceBlocks>,
    /// Nested sub-documents keyed by module name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub module: BTreeMap<ResourceName, Fragment>,
}

impl Fragment {
    /// Creates a fragment holding a single resource block.
    #[must_use]
    pub fn single(kind: ResourceKind, name: ResourceName, attributes: Attributes) -> Self {
        let mut blocks = ResourceBlocks::new();
        let _ = blocks.insert(name, attributes);
        let mut resource = BTreeMap::new();
        let _ = resource.insert(kind, blocks);
        Self {
            resource,
            module: BTreeMap::new(),
        }
    }

    /// Creates a fragment holding a single module entry.
    #[must_use]
    pub fn module_entry(name: ResourceName, body: Self) -> Self {
        let mut module = BTreeMap::new();
        let _ = module.insert(name, body);
        Self {
            resource: BTreeMap::new(),
            module,
        }
    }

    /// Returns all resource blocks of `kind`.
    #[must_use]
    pub fn resources(&self, kind: &str) -> Option<&ResourceBlocks> {
        self.resource.get(kind)
    }

    /// Returns the body of one resource block.
    #[must_use]
    pub fn resource(&self, kind: &str, name: &str) -> Option<&Attributes> {
        self.resource.get(kind).and_then(|blocks| blocks.get(name))
    }

    /// Returns the mutable body of one resource block.
    pub fn resource_mut(&mut self, kind: &str, name: &str) -> Option<&mut Attributes> {
        self.resource
            .get_mut(kind)
            .and_then(|blocks| blocks.get_mut(name))
    }

    /// Removes a resource block and returns its body.
    ///
    /// # Errors
    ///
    /// Returns [`TfleetError::NotFound`] if no block `kind.name` exists.
    pub fn remove_resource(&mut self, kind: &str, name: &str) -> Result<Attributes> {
        self.resource
            .get_mut(kind)
            .and_then(|blocks| blocks.remove(name))
            .ok_or_else(|| TfleetError::NotFound {
                kind: "resource",
                id: format!("{kind}.{name}"),
            })
    }

    /// Moves the block `kind.from` to `kind.to`, keeping its body.
    ///
    /// # Errors
    ///
    /// Returns [`TfleetError::NotFound`] if `kind.from` does not exist.
    pub fn rename_resource(&mut self, kind: &str, from: &str, to: ResourceName) -> Result<()> {
        let attributes = self.remove_resource(kind, from)?;
        if let Some(blocks) = self.resource.get_mut(kind) {
            let _ = blocks.insert(to, attributes);
        }
        Ok(())
    }

    /// Returns a nested module by name.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&Self> {
        self.module.get(name)
    }

    /// Number of resource blocks at this level, across all kinds.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.resource.values().map(BTreeMap::len).sum()
    }

    /// Number of resource blocks at this level and in every nested module.
    #[must_use]
    pub fn total_resource_count(&self) -> usize {
        self.resource_count()
            + self
                .module
                .values()
                .map(Self::total_resource_count)
                .sum::<usize>()
    }

    /// Whether the fragment declares neither resources nor modules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resource_count() == 0 && self.module.is_empty()
    }
}

/// Fully merged output ready for serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Fragment);

impl Document {
    /// Wraps a merged fragment.
    #[must_use]
    pub const fn new(merged: Fragment) -> Self {
        Self(merged)
    }

    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or has an unexpected shape.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns the merged tree.
    #[must_use]
    pub const fn as_fragment(&self) -> &Fragment {
        &self.0
    }

    /// Consumes the document, returning the merged tree.
    #[must_use]
    pub fn into_fragment(self) -> Fragment {
        self.0
    }

    /// Returns all top-level resource blocks of `kind`.
    #[must_use]
    pub fn resources(&self, kind: &str) -> Option<&ResourceBlocks> {
        self.0.resources(kind)
    }

    /// Returns a nested module by name.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&Fragment> {
        self.0.module(name)
    }

    /// Serializes the document to JSON text.
    ///
    /// Pretty output is indented and ends with a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        if pretty {
            let mut text = serde_json::to_string_pretty(self)?;
            text.push('\n');
            Ok(text)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }

    /// Hex-encoded SHA-256 of the compact JSON serialization.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn digest(&self) -> Result<String> {
        let compact = serde_json::to_vec(self)?;
        Ok(format!("{:x}", Sha256::digest(&compact)))
    }
}
