use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use eventdesk::{EventConsole, EventRecord};

#[derive(Debug, Parser)]
#[command(
    name = "eventdesk",
    version,
    about = "Manage event records through an interactive terminal console"
)]
struct Cli {
    /// Event list to load: a JSON file path, or "-" for stdin
    #[arg(short = 'i', long = "input", value_name = "SPEC")]
    input: Option<String>,

    /// Where to write the committed list ("-" writes to stdout)
    #[arg(short = 'o', long = "output", value_name = "DEST", default_value = "-")]
    output: String,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite the output file even if it already exists
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let events = load_events(cli.input.as_deref())?;

    if cli.output != "-" && !cli.force {
        let path = PathBuf::from(&cli.output);
        if path.exists() {
            return Err(eyre!(
                "file {} already exists (pass --force to overwrite)",
                path.display()
            ));
        }
    }

    let committed = EventConsole::new(events)
        .run()
        .map_err(|err| eyre!("{err}"))?;

    let serialized = if cli.no_pretty {
        serde_json::to_string(&committed)?
    } else {
        serde_json::to_string_pretty(&committed)?
    };

    if cli.output == "-" {
        println!("{serialized}");
    } else {
        fs::write(&cli.output, serialized)
            .wrap_err_with(|| format!("failed to write {}", cli.output))?;
    }
    Ok(())
}

fn load_events(spec: Option<&str>) -> Result<Vec<EventRecord>> {
    let Some(spec) = spec else {
        return Ok(Vec::new());
    };
    let contents = if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read from stdin")?;
        buffer
    } else {
        fs::read_to_string(spec).wrap_err_with(|| format!("failed to read file {spec}"))?
    };
    serde_json::from_str(&contents).wrap_err("failed to parse event list")
}
