//! Single-resource template factory.
//!
//! Every fragment the factory returns holds exactly one resource block whose
//! body is `{"triggers": ...}`. When the caller supplies no triggers the
//! factory stamps a fresh UUID and timestamp, so two such fragments are never
//! identical.

use serde_json::Value;
use tfleet_common::constants::{TRIGGER_ID_KEY, TRIGGER_TIMESTAMP_KEY, TRIGGERS_KEY};
use tfleet_common::error::Result;
use tfleet_common::types::{FreshnessStamp, ResourceKind, ResourceName};

use crate::fragment::{Attributes, Fragment};

/// Produces single-resource fragments of one kind.
#[derive(Debug, Clone, Default)]
pub struct ResourceFactory {
    kind: ResourceKind,
}

impl ResourceFactory {
    /// Creates a factory stamping resources of `kind`.
    #[must_use]
    pub const fn new(kind: ResourceKind) -> Self {
        Self { kind }
    }

    /// Resource kind this factory produces.
    #[must_use]
    pub const fn kind(&self) -> &ResourceKind {
        &self.kind
    }

    /// Creates a fragment holding one resource block named `name`.
    ///
    /// `triggers` becomes the block's `triggers` map; when absent a fresh
    /// `{"id", "timestamp"}` pair is generated.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or not a valid identifier.
    pub fn create(&self, name: &str, triggers: Option<Attributes>) -> Result<Fragment> {
        let name = ResourceName::new(name)?;
        let triggers = triggers.unwrap_or_else(fresh_triggers);

        tracing::debug!(kind = %self.kind, name = %name, "creating resource template");

        let mut body = Attributes::new();
        let _ = body.insert(TRIGGERS_KEY.to_string(), Value::Object(triggers));
        Ok(Fragment::single(self.kind.clone(), name, body))
    }
}

fn fresh_triggers() -> Attributes {
    let stamp = FreshnessStamp::generate();
    let mut triggers = Attributes::new();
    let _ = triggers.insert(TRIGGER_ID_KEY.to_string(), Value::String(stamp.id));
    let _ = triggers.insert(
        TRIGGER_TIMESTAMP_KEY.to_string(),
        Value::String(stamp.timestamp),
    );
    triggers
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_holds_exactly_one_block() {
        let fragment = ResourceFactory::default()
            .create("app", None)
            .expect("should create");
        assert_eq!(fragment.resource.len(), 1);
        let blocks = fragment.resources("null_resource").expect("kind present");
        assert_eq!(blocks.len(), 1);
        assert!(blocks.contains_key("app"));
        assert!(fragment.module.is_empty());
    }

    #[test]
    fn synthesized_triggers_carry_id_and_timestamp() {
        let fragment = ResourceFactory::default()
            .create("app", None)
            .expect("should create");
        let body = fragment.resource("null_resource", "app").expect("block");
        let triggers = body["triggers"].as_object().expect("triggers map");
        assert!(triggers["id"].as_str().is_some_and(|id| id.len() == 36));
        assert!(triggers["timestamp"].as_str().is_some());
    }

    #[test]
    fn two_unstamped_calls_differ() {
        let factory = ResourceFactory::default();
        let a = factory.create("app", None).expect("should create");
        let b = factory.create("app", None).expect("should create");
        assert_ne!(a, b);
    }

    #[test]
    fn explicit_triggers_are_used_verbatim() {
        let mut triggers = Attributes::new();
        let _ = triggers.insert("version".into(), json!("1.2.3"));
        let fragment = ResourceFactory::default()
            .create("app", Some(triggers))
            .expect("should create");
        let value = serde_json::to_value(&fragment).expect("serialize");
        assert_eq!(
            value,
            json!({ "resource": { "null_resource": { "app": { "triggers": { "version": "1.2.3" } } } } })
        );
    }

    #[test]
    fn custom_kind_is_stamped() {
        let kind = ResourceKind::new("terraform_data").expect("valid kind");
        let fragment = ResourceFactory::new(kind)
            .create("app", None)
            .expect("should create");
        assert!(fragment.resources("terraform_data").is_some());
        assert!(fragment.resources("null_resource").is_none());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = ResourceFactory::default()
            .create("", None)
            .expect_err("empty name");
        assert!(err.to_string().contains("must not be empty"), "got: {err}");
    }
}
