//! `tfleet plan` — Display the contents of a generated document.

use std::path::PathBuf;

use clap::Args;
use tfleet_common::config::GeneratorConfig;

/// Arguments for the `plan` command.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the generated document [default: configured output path].
    pub file: Option<PathBuf>,
}

/// Executes the `plan` command.
///
/// Reads the document, validates its shape, and lists every resource and
/// module it declares.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid document.
pub fn execute(args: PlanArgs, config: &GeneratorConfig) -> anyhow::Result<()> {
    let file = args.file.unwrap_or_else(|| config.output_path.clone());
    let document = tfleet_sdk::export::read_document(&file)?;

    println!("Plan for: {}", file.display());
    println!("{}", "\u{2550}".repeat(35));
    println!();

    for line in crate::output::render_tree(document.as_fragment()) {
        println!("  {line}");
    }

    println!();
    println!("  {}", crate::output::summary(document.as_fragment()));
    println!("  digest: sha256:{}", document.digest()?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use tfleet_sdk::builder::FleetBuilder;

    use super::*;

    #[test]
    fn plan_reads_generated_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = FleetBuilder::new()
            .build_fleet("app", 2)
            .expect("fleet")
            .export(dir.path().join("main.tf.json"))
            .expect("export");

        execute(PlanArgs { file: Some(file) }, &GeneratorConfig::default()).expect("should plan");
    }

    #[test]
    fn plan_rejects_foreign_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("main.tf.json");
        std::fs::write(&file, r#"{"variable": {"x": {}}}"#).expect("write");

        assert!(execute(PlanArgs { file: Some(file) }, &GeneratorConfig::default()).is_err());
    }

    #[test]
    fn plan_missing_file_fails() {
        let args = PlanArgs {
            file: Some(PathBuf::from("/nonexistent/main.tf.json")),
        };
        assert!(execute(args, &GeneratorConfig::default()).is_err());
    }
}
