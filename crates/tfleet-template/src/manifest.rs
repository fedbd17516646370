//! Declarative fleet manifests.
//!
//! A manifest lists the fleets and groups one generation run should
//! assemble:
//!
//! ```yaml
//! resource_kind: null_resource
//! fleets:
//!   - name: app
//!     count: 3
//! groups:
//!   - name: net
//!     size: 2
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tfleet_common::error::{Result, TfleetError};
use tfleet_common::types::{ResourceKind, ResourceName};

/// Top-level resources `{name}_0 .. {name}_{count-1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetSpec {
    /// Base name of every member.
    pub name: ResourceName,
    /// Number of members.
    pub count: usize,
}

/// Fleet nested under `module.{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupSpec {
    /// Module name, also the base name of every member.
    pub name: ResourceName,
    /// Number of members.
    pub size: usize,
}

/// Fleets and groups to assemble in one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FleetManifest {
    /// Overrides the configured resource kind.
    pub resource_kind: Option<ResourceKind>,
    /// Top-level fleets, assembled in order.
    pub fleets: Vec<FleetSpec>,
    /// Module groups, assembled after the fleets.
    pub groups: Vec<GroupSpec>,
}

impl FleetManifest {
    /// Loads and validates a manifest file.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or
    /// repeats a fleet or group name.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!(path = %path.display(), "loading fleet manifest");

        let content = std::fs::read_to_string(path).map_err(|e| TfleetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let manifest: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| manifest_error(path, &e))?
        } else {
            serde_yaml::from_str(&content).map_err(|e| manifest_error(path, &e))?
        };

        manifest
            .validate()
            .map_err(|e| manifest_error(path, &e))?;
        Ok(manifest)
    }

    /// Checks that no fleet name and no group name repeats.
    ///
    /// # Errors
    ///
    /// Returns [`TfleetError::Collision`] naming the first repeated entry.
    pub fn validate(&self) -> Result<()> {
        check_unique("fleet", self.fleets.iter().map(|f| &f.name))?;
        check_unique("group", self.groups.iter().map(|g| &g.name))?;
        Ok(())
    }

    /// Total number of resources the manifest will produce.
    #[must_use]
    pub fn resource_total(&self) -> usize {
        self.fleets.iter().map(|f| f.count).sum::<usize>()
            + self.groups.iter().map(|g| g.size).sum::<usize>()
    }
}

fn check_unique<'a>(
    section: &'static str,
    names: impl Iterator<Item = &'a ResourceName>,
) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(TfleetError::Collision {
                section,
                group: "manifest".into(),
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

fn manifest_error(path: &Path, err: &dyn std::fmt::Display) -> TfleetError {
    TfleetError::Manifest {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

fn parse_pair(value: &str) -> Result<(ResourceName, usize)> {
    let (name, count) = value.split_once('=').ok_or_else(|| TfleetError::Config {
        message: format!("expected NAME=COUNT, got \"{value}\""),
    })?;
    let name = ResourceName::new(name.trim())?;
    let count = count.trim().parse().map_err(|_| TfleetError::Config {
        message: format!("invalid count in \"{value}\""),
    })?;
    Ok((name, count))
}

impl FromStr for FleetSpec {
    type Err = TfleetError;

    /// Parses `NAME=COUNT`.
    fn from_str(value: &str) -> Result<Self> {
        let (name, count) = parse_pair(value)?;
        Ok(Self { name, count })
    }
}

impl FromStr for GroupSpec {
    type Err = TfleetError;

    /// Parses `NAME=SIZE`.
    fn from_str(value: &str) -> Result<Self> {
        let (name, size) = parse_pair(value)?;
        Ok(Self { name, size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, file: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(file);
        std::fs::write(&path, content).expect("write manifest");
        path
    }

    #[test]
    fn load_yaml_manifest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(
            &dir,
            "fleet.yml",
            "fleets:\n  - name: app\n    count: 3\ngroups:\n  - name: net\n    size: 2\n",
        );

        let manifest = FleetManifest::load(&path).expect("should load");
        assert_eq!(manifest.fleets.len(), 1);
        assert_eq!(manifest.fleets[0].name.as_str(), "app");
        assert_eq!(manifest.groups[0].size, 2);
        assert_eq!(manifest.resource_total(), 5);
        assert!(manifest.resource_kind.is_none());
    }

    #[test]
    fn load_json_manifest_with_kind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(
            &dir,
            "fleet.json",
            r#"{"resource_kind": "terraform_data", "fleets": [{"name": "db", "count": 1}]}"#,
        );

        let manifest = FleetManifest::load(&path).expect("should load");
        assert_eq!(
            manifest.resource_kind.as_ref().map(ResourceKind::as_str),
            Some("terraform_data")
        );
        assert!(manifest.groups.is_empty());
    }

    #[test]
    fn load_rejects_duplicate_fleet() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(
            &dir,
            "fleet.yml",
            "fleets:\n  - name: app\n    count: 1\n  - name: app\n    count: 2\n",
        );

        let err = FleetManifest::load(&path).expect_err("duplicate fleet");
        assert!(matches!(err, TfleetError::Manifest { .. }));
        assert!(err.to_string().contains("app"), "got: {err}");
    }

    #[test]
    fn same_name_as_fleet_and_group_is_allowed() {
        let manifest = FleetManifest {
            resource_kind: None,
            fleets: vec!["web=1".parse().expect("fleet")],
            groups: vec!["web=1".parse().expect("group")],
        };
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn load_rejects_invalid_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(&dir, "fleet.yml", "fleets:\n  - name: 9app\n    count: 1\n");
        assert!(FleetManifest::load(&path).is_err());
    }

    #[test]
    fn parse_pairs() {
        let fleet: FleetSpec = "app=3".parse().expect("valid pair");
        assert_eq!(fleet.name.as_str(), "app");
        assert_eq!(fleet.count, 3);

        let group: GroupSpec = " net = 2 ".parse().expect("valid pair");
        assert_eq!(group.name.as_str(), "net");
        assert_eq!(group.size, 2);

        assert!("app".parse::<FleetSpec>().is_err());
        assert!("app=x".parse::<FleetSpec>().is_err());
        assert!("=3".parse::<FleetSpec>().is_err());
    }
}
