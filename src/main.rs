use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;

use mdtext::{Config, parse, render, terminal};

mod cli;
use cli::{Cli, Commands, OutputFormat};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(explicit: Option<&Path>, file: &Option<PathBuf>) -> io::Result<Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = mdtext::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }

    Ok(cfg)
}

/// Prints `out`, adding a final newline only when the text lacks one.
fn emit(out: &str) {
    if out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
}

fn rule_error(e: mdtext::RuleError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { file, format } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let units = render(&input, Some(cfg)).map_err(rule_error)?;

            match format {
                OutputFormat::Ansi => emit(&terminal::render_ansi(&units)),
                OutputFormat::Plain => emit(&terminal::render_plain(&units)),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&units)?;
                    println!("{json}");
                }
            }
            Ok(())
        }
        Commands::Parse { file } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            for line in parse(&input, Some(cfg)).map_err(rule_error)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}
