use crate::cli::ExportArgs;
use crate::error::Result;
use sonifold::workflows::sonify;
use std::fs::File;
use std::io::BufWriter;
use tracing::info;

pub fn run(args: ExportArgs) -> Result<()> {
    let run = sonify::load(&args.input)?;
    let entries = run.residue_entries()?;
    info!(entries = entries.len(), "Residue entries resolved.");

    let payload = serde_json::json!({ "entries": entries });
    let file = File::create(&args.output)?;
    serde_json::to_writer(BufWriter::new(file), &payload)?;

    info!(path = %args.output.display(), "JSON file created.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn export_writes_entries_object() {
        let mut input = tempfile::NamedTempFile::new().unwrap();
        writeln!(input, "HELX_P 1 SER A 2 10 ? GLY A 12 ?").unwrap();
        writeln!(
            input,
            "ATOM 11 C CG1 . ILE A 1 3 ? 10.1 21.4 11.0 1.00 25.50 ? 11 ILE A CG1 1"
        )
        .unwrap();
        let output = tempfile::NamedTempFile::new().unwrap();

        run(ExportArgs {
            input: input.path().to_path_buf(),
            output: output.path().to_path_buf(),
        })
        .unwrap();

        let text = std::fs::read_to_string(output.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let entries = value["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["site"], 11);
        assert_eq!(entries[0]["structType"], 0);
        assert_eq!(entries[0]["category"], 1);
    }

    #[test]
    fn export_fails_for_missing_input() {
        let output = tempfile::NamedTempFile::new().unwrap();
        let result = run(ExportArgs {
            input: "/nope.cif".into(),
            output: output.path().to_path_buf(),
        });
        assert!(result.is_err());
    }
}
