//! `tfleet generate` — Assemble fleets and write the Terraform JSON document.

use std::path::PathBuf;

use clap::Args;
use tfleet_common::config::GeneratorConfig;
use tfleet_common::types::ResourceKind;
use tfleet_sdk::builder::FleetBuilder;
use tfleet_template::manifest::{FleetManifest, FleetSpec, GroupSpec};

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Top-level fleet as NAME=COUNT (repeatable).
    #[arg(long = "fleet", value_name = "NAME=COUNT")]
    pub fleets: Vec<FleetSpec>,

    /// Module group as NAME=SIZE (repeatable).
    #[arg(long = "group", value_name = "NAME=SIZE")]
    pub groups: Vec<GroupSpec>,

    /// Fleet manifest (YAML or JSON), applied after --fleet and --group.
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Output path [default: terraform/main.tf.json].
    #[arg(short, long, env = "TFLEET_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Resource kind to generate [default: null_resource].
    #[arg(short, long)]
    pub kind: Option<ResourceKind>,

    /// Fail instead of overwriting when two entries share a name.
    #[arg(long)]
    pub strict: bool,

    /// Write compact JSON instead of pretty-printed output.
    #[arg(long)]
    pub compact: bool,
}

/// Executes the `generate` command.
///
/// `--kind` overrides a manifest's `resource_kind`, which overrides the
/// configuration file, which overrides the defaults.
///
/// # Errors
///
/// Returns an error if nothing was requested, a name is invalid, the
/// manifest cannot be loaded, a strict merge finds a duplicate, or the
/// document cannot be written.
pub fn execute(args: GenerateArgs, config: &GeneratorConfig) -> anyhow::Result<()> {
    let mut manifest = args
        .manifest
        .as_deref()
        .map(FleetManifest::load)
        .transpose()?;

    if args.fleets.is_empty() && args.groups.is_empty() && manifest.is_none() {
        anyhow::bail!("nothing to generate: pass --fleet, --group, or --manifest");
    }

    if let Some(manifest) = manifest.as_mut().filter(|_| args.kind.is_some()) {
        manifest.resource_kind = None;
    }

    let kind = args.kind.unwrap_or_else(|| config.resource_kind.clone());
    let inline = FleetManifest {
        resource_kind: None,
        fleets: args.fleets,
        groups: args.groups,
    };

    let mut builder = FleetBuilder::with_kind(kind).apply_manifest(&inline)?;
    if let Some(manifest) = &manifest {
        builder = builder.apply_manifest(manifest)?;
    }

    let document = if args.strict {
        builder.document_checked()?
    } else {
        builder.document()
    };

    let output = args.output.unwrap_or_else(|| config.output_path.clone());
    let pretty = config.pretty && !args.compact;
    tfleet_sdk::export::write_document(&document, &output, pretty)?;

    println!("Wrote {}", output.display());
    println!("  {}", crate::output::summary(document.as_fragment()));
    println!("  digest: sha256:{}", document.digest()?);

    Ok(())
}
