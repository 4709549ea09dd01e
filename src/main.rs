//! ussgen - Build USS stylesheets from JSON manifests

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ussgen::manifest::Manifest;
use ussgen::sheet::SheetConfig;

#[derive(Parser)]
#[command(name = "ussgen")]
#[command(version, about = "Build USS stylesheets from JSON manifests", long_about = None)]
#[command(after_help = "EXAMPLES:
    ussgen card.json                 Print the stylesheet
    ussgen card.json -o Assets/UI    Write Assets/UI/<name>.uss
    ussgen card.json --indent 2      Indent rules by two spaces")]
struct Cli {
    /// Manifest describing the stylesheet
    #[arg(value_name = "MANIFEST")]
    manifest: PathBuf,

    /// Directory to export into (prints to stdout when omitted)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Replace an existing stylesheet file
    #[arg(short, long)]
    force: bool,

    /// Spaces before each rule
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// Do not separate selector blocks with blank lines
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = SheetConfig::new()
        .with_indent(cli.indent)
        .with_blank_lines(!cli.compact);
    let sheet = Manifest::from_path(&cli.manifest)
        .and_then(|m| m.into_sheet(config))
        .map_err(|e| format!("{}: {e}", cli.manifest.display()))?;

    let invalid = sheet.invalid_rules().len();
    if invalid > 0 {
        tracing::warn!(count = invalid, "stylesheet contains invalid rules");
    }

    match &cli.output {
        None => {
            print!("{sheet}");
            Ok(())
        }
        Some(dir) => {
            if sheet.export(dir, cli.force) {
                Ok(())
            } else {
                Err(format!("could not export '{}' to {}", sheet.name(), dir.display()))
            }
        }
    }
}
