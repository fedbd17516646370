//! Prototype-style template cloning.
//!
//! A [`TemplateCloner`] owns an immutable template and hands out independent
//! copies. Each copy is edited by a caller-supplied mutator before it is
//! returned; the template itself is never touched. Fragments own all of
//! their data, so a clone shares no container or leaf with its source.

use tfleet_common::error::Result;
use tfleet_common::types::ResourceName;

use crate::fragment::Fragment;

/// Returns an edited deep copy of `template`.
///
/// `mutator` runs exactly once, on the copy only.
///
/// # Errors
///
/// Propagates the mutator's error unchanged, e.g. `NotFound` when it looks
/// up an entry the template does not have.
pub fn clone_with<F>(template: &Fragment, mutator: F) -> Result<Fragment>
where
    F: FnOnce(&mut Fragment) -> Result<()>,
{
    let mut copy = template.clone();
    mutator(&mut copy)?;
    Ok(copy)
}

/// Mutator moving the block `kind.from` to `kind.to`.
pub fn rename<'a>(
    kind: &'a str,
    from: &'a str,
    to: ResourceName,
) -> impl FnOnce(&mut Fragment) -> Result<()> + 'a {
    move |fragment| fragment.rename_resource(kind, from, to)
}

/// Holds a template and produces edited copies of it.
#[derive(Debug, Clone)]
pub struct TemplateCloner {
    template: Fragment,
}

impl TemplateCloner {
    /// Takes ownership of `template`; it stays unchanged from here on.
    #[must_use]
    pub const fn new(template: Fragment) -> Self {
        Self { template }
    }

    /// The source template.
    #[must_use]
    pub const fn template(&self) -> &Fragment {
        &self.template
    }

    /// Returns an independent copy of the template edited by `mutator`.
    ///
    /// # Errors
    ///
    /// Propagates the mutator's error unchanged.
    pub fn clone_with<F>(&self, mutator: F) -> Result<Fragment>
    where
        F: FnOnce(&mut Fragment) -> Result<()>,
    {
        clone_with(&self.template, mutator)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use tfleet_common::error::TfleetError;

    use super::*;
    use crate::factory::ResourceFactory;

    fn name(value: &str) -> ResourceName {
        ResourceName::new(value).expect("valid name")
    }

    fn template() -> Fragment {
        ResourceFactory::default()
            .create("foo", None)
            .expect("should create")
    }

    #[test]
    fn clones_are_independent_of_each_other_and_the_template() {
        let cloner = TemplateCloner::new(template());
        let original = cloner.template().clone();

        let c1 = cloner
            .clone_with(rename("null_resource", "foo", name("foo_1")))
            .expect("first clone");
        let mut c2 = cloner
            .clone_with(|f| {
                let body = f
                    .resource_mut("null_resource", "foo")
                    .expect("template block");
                let _ = body.insert("depends_on".into(), json!(["null_resource.bar"]));
                Ok(())
            })
            .expect("second clone");

        assert!(c1.resource("null_resource", "foo_1").is_some());
        assert!(c1.resource("null_resource", "foo").is_none());
        assert!(c2.resource("null_resource", "foo").is_some());
        assert!(c2.resource("null_resource", "foo_1").is_none());

        if let Some(Value::Object(triggers)) = c2
            .resource_mut("null_resource", "foo")
            .and_then(|body| body.get_mut("triggers"))
        {
            let _ = triggers.insert("id".into(), json!("overwritten"));
        }

        assert_eq!(cloner.template(), &original);
        let c1_id = &c1.resource("null_resource", "foo_1").expect("block")["triggers"]["id"];
        assert_ne!(c1_id, &json!("overwritten"));
        assert!(
            original
                .resource("null_resource", "foo")
                .is_some_and(|body| !body.contains_key("depends_on"))
        );
    }

    #[test]
    fn mutator_runs_exactly_once() {
        let cloner = TemplateCloner::new(template());
        let mut calls = 0;
        let _ = cloner
            .clone_with(|_| {
                calls += 1;
                Ok(())
            })
            .expect("clone");
        assert_eq!(calls, 1);
    }

    #[test]
    fn mutator_lookup_failure_propagates() {
        let cloner = TemplateCloner::new(template());
        let err = cloner
            .clone_with(rename("null_resource", "bar", name("bar_0")))
            .expect_err("missing placeholder");
        assert!(matches!(err, TfleetError::NotFound { .. }));
    }

    #[test]
    fn renaming_an_already_renamed_clone_fails() {
        let renamed = clone_with(&template(), rename("null_resource", "foo", name("foo_0")))
            .expect("first rename");
        let err = clone_with(&renamed, rename("null_resource", "foo", name("foo_1")))
            .expect_err("placeholder is gone");
        assert!(err.to_string().contains("null_resource.foo"), "got: {err}");
    }
}
