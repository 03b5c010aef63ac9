use bfi::cli_util::{Stage, print_error, print_failure, use_color};
use bfi::theme::Palette;
use bfi::{Config, Program};
use clap::{ArgAction, Parser};
use log::{LevelFilter, warn};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "bfi", version, about = "Run a program written in the eight-instruction tape language")]
struct Cli {
    /// Program source file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Exit program when EOF is read from standard input (fallback BFI_EXIT_ON_EOF; default off)
    #[arg(short = 'e', long = "exit-on-eof")]
    exit_on_eof: bool,

    /// Raise log verbosity on stderr (-v debug, -vv trace); RUST_LOG applies otherwise
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}

/// Resolve the EOF policy: flag -> env -> default.
fn resolve_halt_on_eof(flag: bool) -> bool {
    if flag {
        return true;
    }
    let Ok(raw) = env::var("BFI_EXIT_ON_EOF") else {
        return false;
    };
    parse_bool(&raw).unwrap_or_else(|| {
        warn!("ignoring BFI_EXIT_ON_EOF={raw:?}: expected 1/0, true/false, yes/no or on/off");
        false
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let palette = Palette::new(use_color());
    let config = Config {
        halt_on_input_eof: resolve_halt_on_eof(cli.exit_on_eof),
    };
    log::debug!("source {}, {:?}", cli.file.display(), config);

    let code = match fs::read_to_string(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            print_failure("Cannot open file:", &format!("{}: {e}", cli.file.display()), &palette);
            return ExitCode::FAILURE;
        }
    };

    let program = match Program::build(code.as_str()) {
        Ok(p) => p,
        Err(err) => {
            print_error(Stage::Parsing, &code, &err, &palette);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = bfi::run(&program, config) {
        print_error(Stage::Runtime, &code, &err, &palette);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
