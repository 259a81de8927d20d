use std::{
    fs,
    io::{self, Read},
};

use clap::{Parser, error::ErrorKind};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use varcalc::{ERROR_OUTPUT, interpret};

/// varcalc interprets programs of integer assignments and prints the final
/// value of every variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells varcalc to treat the contents as a path instead of a program.
    #[arg(short, long)]
    file: bool,

    /// Increases log verbosity on stderr (-v info, -vv debug, -vvv trace).
    /// `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The program, or a path with `--file`. Read from stdin when absent.
    contents: Option<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();
}

fn read_source(args: &Args) -> io::Result<String> {
    match (&args.contents, args.file) {
        (Some(path), true) => fs::read_to_string(path),
        (Some(program), false) => Ok(program.clone()),
        (None, _) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        },
    }
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors still produce the single output line.
            let _ = e.print();
            println!("{ERROR_OUTPUT}");
            return;
        },
    };
    init_logging(args.verbose);

    let output = match read_source(&args) {
        Ok(source) => {
            info!(bytes = source.len(), "read program");
            interpret(&source)
        },
        Err(e) => {
            error!(error = %e, "failed to read the program");
            ERROR_OUTPUT.to_string()
        },
    };

    println!("{output}");
}
