//! Cellpad - a small spreadsheet grid driven by line commands

mod config;
mod error;
mod render;
mod shell;

use anyhow::Context;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use shell::{Control, Shell};

fn print_usage() {
    eprintln!("Usage: cellpad [OPTIONS] [SCRIPT]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [SCRIPT]                  File of commands to run (default: read stdin)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <CMD>       Run a command (can be repeated)");
    eprintln!("  -o, --output <FILE>       Export the grid as JSON after running");
    eprintln!("  --config <FILE>           Load settings from FILE instead of config.toml");
    eprintln!("  -h, --help                Print help");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  set CELL [TEXT]   select CELL[:CELL]   press CELL   drag CELL   release");
    eprintln!("  addrow   addcol   copy   paste   bold   get CELL   print   export [FILE]   q");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run commands, stopping at the first failure. Used for `-c` and script files.
fn run_batch(shell: &mut Shell, commands: &[String]) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    tracing::debug!(commands = commands.len(), "running batch");
    for (idx, command) in commands.iter().enumerate() {
        let control = shell
            .execute_command(command, &mut out)
            .with_context(|| format!("command {} ({:?})", idx + 1, command.trim()))?;
        if control == Control::Quit {
            break;
        }
    }
    out.flush()?;
    Ok(())
}

/// Read commands from stdin, reporting failures and carrying on.
fn run_interactive(shell: &mut Shell) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match shell.execute_command(&line, &mut out) {
            Ok(Control::Quit) => break,
            Ok(Control::Continue) => {}
            Err(e) => eprintln!("Error: {}", e),
        }
        out.flush()?;
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut script_path: Option<PathBuf> = None;
    let mut commands: Vec<String> = Vec::new();
    let mut output_file: Option<PathBuf> = None;
    let mut config_file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-c" | "--command" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --command requires a value");
                    std::process::exit(1);
                }
                commands.push(args[i].clone());
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                output_file = Some(PathBuf::from(&args[i]));
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if script_path.is_none() {
                    script_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    init_tracing();

    let (config, warnings) = config::load_config(config_file.as_deref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let mut shell = Shell::new(&config);

    let result = (|| -> anyhow::Result<()> {
        if let Some(path) = &script_path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            commands.extend(content.lines().map(str::to_string));
        }

        if commands.is_empty() {
            run_interactive(&mut shell)?;
        } else {
            run_batch(&mut shell, &commands)?;
        }

        if let Some(path) = &output_file {
            shell
                .export(path)
                .with_context(|| format!("exporting to {}", path.display()))?;
            eprintln!("{}", shell.status_message);
        }
        Ok(())
    })();

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
