use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::Level;

use triangle_css::log_init::init_logger;
use triangle_css::{Config, DEFAULT_UNIT_PRECISION, Result, process};

/// Expand `triangle` declarations into CSS border triangles.
#[derive(Parser, Debug)]
#[command(name = "triangle-css", version)]
struct Cli {
    /// Stylesheet to read (stdin when omitted)
    input: Option<PathBuf>,

    /// Where to write the result (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Decimal places kept on computed lengths
    #[arg(long, default_value_t = DEFAULT_UNIT_PRECISION)]
    unit_precision: u32,

    /// Append debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.log_file {
        init_logger(path, Level::Debug)?;
    }

    let config = Config::new(cli.unit_precision)?;

    let source = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            source
        }
    };

    let css = process(&source, &config)?;

    match &cli.output {
        Some(path) => fs::write(path, css)?,
        None => io::stdout().write_all(css.as_bytes())?,
    }
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("triangle-css: {err}");
            ExitCode::FAILURE
        }
    }
}
