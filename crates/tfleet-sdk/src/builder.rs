//! Fluent API for assembling fleets of resources.

use std::path::{Path, PathBuf};

use tfleet_common::config::GeneratorConfig;
use tfleet_common::error::Result;
use tfleet_common::types::{ResourceKind, ResourceName};
use tfleet_template::aggregator::FragmentAggregator;
use tfleet_template::cloner::{self, TemplateCloner};
use tfleet_template::factory::ResourceFactory;
use tfleet_template::fragment::{Document, Fragment};
use tfleet_template::manifest::FleetManifest;

/// Builder collecting fleets and module groups into one document.
///
/// Each call appends fragments; nothing is merged until
/// [`document`](Self::document) or [`export`](Self::export).
#[derive(Debug, Clone, Default)]
pub struct FleetBuilder {
    factory: ResourceFactory,
    aggregator: FragmentAggregator,
}

impl FleetBuilder {
    /// Creates a builder producing `null_resource` blocks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder producing blocks of `kind`.
    #[must_use]
    pub fn with_kind(kind: ResourceKind) -> Self {
        Self {
            factory: ResourceFactory::new(kind),
            aggregator: FragmentAggregator::new(),
        }
    }

    /// Creates a builder using the configured resource kind.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::with_kind(config.resource_kind.clone())
    }

    /// Adds `count` resources named `{base_name}_0 .. {base_name}_{count-1}`.
    ///
    /// One template is created for `base_name` and cloned once per member,
    /// each clone renamed to its indexed name.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_name` is not a valid identifier.
    pub fn build_fleet(mut self, base_name: &str, count: usize) -> Result<Self> {
        let base = ResourceName::new(base_name)?;
        let prototype = TemplateCloner::new(self.factory.create(base.as_str(), None)?);
        let kind = self.factory.kind().as_str();

        for i in 0..count {
            let member =
                prototype.clone_with(cloner::rename(kind, base.as_str(), base.indexed(i)))?;
            self.aggregator.add(member);
        }

        tracing::info!(kind, base = %base, count, "built fleet");
        Ok(self)
    }

    /// Adds a fleet of `size` resources nested under `module.{name}`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a valid identifier.
    pub fn build_group(self, name: &str, size: usize) -> Result<Self> {
        let module = ResourceName::new(name)?;
        let group = Self::with_kind(self.factory.kind().clone()).build_fleet(name, size)?;
        Ok(self.nest(module, &group))
    }

    /// Nests everything `group` has collected under `module.{name}`.
    ///
    /// Groups may themselves contain nested groups to any depth.
    #[must_use]
    pub fn nest(mut self, name: ResourceName, group: &Self) -> Self {
        tracing::debug!(module = %name, fragments = group.aggregator.len(), "nesting group");
        let body = group.aggregator.export().into_fragment();
        self.aggregator.add(Fragment::module_entry(name, body));
        self
    }

    /// Builds every fleet, then every group, listed in `manifest`.
    ///
    /// A resource kind set in the manifest replaces the builder's kind for
    /// this and all later calls.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest repeats a name.
    pub fn apply_manifest(mut self, manifest: &FleetManifest) -> Result<Self> {
        manifest.validate()?;
        if let Some(kind) = &manifest.resource_kind {
            self.factory = ResourceFactory::new(kind.clone());
        }
        for fleet in &manifest.fleets {
            self = self.build_fleet(fleet.name.as_str(), fleet.count)?;
        }
        for group in &manifest.groups {
            self = self.build_group(group.name.as_str(), group.size)?;
        }
        Ok(self)
    }

    /// Resource kind of the blocks this builder produces.
    #[must_use]
    pub const fn kind(&self) -> &ResourceKind {
        self.factory.kind()
    }

    /// Fragments collected so far.
    #[must_use]
    pub const fn aggregator(&self) -> &FragmentAggregator {
        &self.aggregator
    }

    /// Merges the collected fragments; later names overwrite earlier ones.
    #[must_use]
    pub fn document(&self) -> Document {
        self.aggregator.export()
    }

    /// Merges the collected fragments, failing on any duplicate name.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first duplicate resource or module.
    pub fn document_checked(&self) -> Result<Document> {
        self.aggregator.export_checked()
    }

    /// Writes the merged document to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        crate::export::write_document(&self.document(), path, true)?;
        Ok(path.to_path_buf())
    }
}
