//! Composite aggregation of fragments into one document.
//!
//! Fragments are kept in insertion order and only merged on export. Merging
//! groups `resource` blocks by kind and `module` entries by name; a later
//! fragment replaces a same-named entry from an earlier one.

use std::convert::Infallible;

use tfleet_common::error::{Result, TfleetError};
use tfleet_common::types::ResourceName;

use crate::fragment::{Document, Fragment};

/// Ordered collection of fragments awaiting a merge.
#[derive(Debug, Clone, Default)]
pub struct FragmentAggregator {
    fragments: Vec<Fragment>,
}

impl FragmentAggregator {
    /// Creates an empty aggregator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Appends a fragment. No deduplication takes place.
    pub fn add(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Number of accumulated fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether no fragment has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Accumulated fragments in insertion order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Merges all fragments; later entries silently replace earlier ones.
    #[must_use]
    pub fn export(&self) -> Document {
        let Ok(merged) = self.fold(|section, group, name| {
            tracing::debug!(section, group, name = %name, "overwriting earlier entry");
            Ok::<(), Infallible>(())
        });
        Document::new(merged)
    }

    /// Merges all fragments, failing on the first duplicate entry.
    ///
    /// # Errors
    ///
    /// Returns [`TfleetError::Collision`] naming the duplicate resource or module.
    pub fn export_checked(&self) -> Result<Document> {
        self.fold(|section, group, name| {
            Err(TfleetError::Collision {
                section,
                group: group.to_string(),
                name: name.to_string(),
            })
        })
        .map(Document::new)
    }

    fn fold<E>(
        &self,
        mut on_collision: impl FnMut(&'static str, &str, &ResourceName) -> std::result::Result<(), E>,
    ) -> std::result::Result<Fragment, E> {
        let mut merged = Fragment::default();

        for fragment in &self.fragments {
            for (kind, blocks) in &fragment.resource {
                let target = merged.resource.entry(kind.clone()).or_default();
                for (name, attributes) in blocks {
                    if target.insert(name.clone(), attributes.clone()).is_some() {
                        on_collision("resource", kind.as_str(), name)?;
                    }
                }
            }
            for (name, body) in &fragment.module {
                if merged.module.insert(name.clone(), body.clone()).is_some() {
                    on_collision("module", "module", name)?;
                }
            }
        }

        tracing::debug!(
            fragments = self.fragments.len(),
            resources = merged.resource_count(),
            modules = merged.module.len(),
            "merged fragments"
        );
        Ok(merged)
    }
}
