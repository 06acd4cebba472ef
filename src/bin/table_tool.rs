use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use waytokens::io_utils::{io_cli_error, simple_cli_error, table_cli_error};
use waytokens::{build_table, parse_table, validate_table, GroupSpec};

#[derive(Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive a token table from an authored variants file.
    Build {
        /// JSON file holding a list of group specs.
        specs: PathBuf,
        /// Where to write the derived table.
        output: PathBuf,
    },
    /// Parse and validate published token tables.
    Check {
        /// Table files to check.
        tables: Vec<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    match Args::parse().command {
        Command::Build { specs, output } => {
            let raw = fs::read_to_string(&specs).map_err(|e| io_cli_error("reading", &specs, e))?;
            let authored: Vec<GroupSpec> = serde_json::from_str(&raw).map_err(|e| {
                simple_cli_error(&format!(
                    "'{}' is not a valid spec file: {e}",
                    specs.display()
                ))
            })?;
            let table =
                build_table(&authored).map_err(|e| table_cli_error("building table", e))?;
            let mut json = serde_json::to_string_pretty(&table)?;
            json.push('\n');
            fs::write(&output, json).map_err(|e| io_cli_error("writing", &output, e))?;
            println!("wrote {} groups to {}", table.len(), output.display());
        }
        Command::Check { tables } => {
            if tables.is_empty() {
                return Err(Box::new(simple_cli_error("no table files given")));
            }
            for path in &tables {
                let raw =
                    fs::read_to_string(path).map_err(|e| io_cli_error("reading", path, e))?;
                let language = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("table");
                let groups = parse_table(language, &raw)
                    .and_then(|groups| validate_table(&groups).map(|()| groups))
                    .map_err(|e| table_cli_error(&format!("checking '{}'", path.display()), e))?;
                println!("{}: ok ({} groups)", path.display(), groups.len());
            }
        }
    }
    Ok(())
}
