//! Greebler CLI - procedural greeble height and normal map generation
//!
//! This binary generates paneled, grooved surface textures and prints the
//! parameter schema used to configure them.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

use greebler_cli::commands;
use greebler_cli::commands::generate::GenerateOptions;

/// Greebler - Procedural Greeble Texture Generator
#[derive(Parser)]
#[command(name = "greebler")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a height map and normal map
    Generate {
        /// Width and height of the square output in pixels
        #[arg(short, long)]
        dim: Option<u32>,

        /// Smallest region or circle diameter that is subdivided further
        #[arg(short, long)]
        limit: Option<u32>,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Top-level tiles per side, each partitioned independently
        #[arg(short, long)]
        regions: Option<u32>,

        /// JSON params file; explicit flags override its values
        #[arg(short, long)]
        params: Option<String>,

        /// Height map output path (default: heightmap.png)
        #[arg(long)]
        height_out: Option<String>,

        /// Normal map output path (default: normalmap.png)
        #[arg(long)]
        normal_out: Option<String>,

        /// Output machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the default generation params as JSON
    Params {
        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    // RUST_LOG, when set, takes precedence over the -v level.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            dim,
            limit,
            seed,
            regions,
            params,
            height_out,
            normal_out,
            json,
        } => {
            let options = GenerateOptions {
                dim,
                limit,
                seed,
                regions,
                params_file: params,
                height_out,
                normal_out,
            };
            commands::generate::run(&options, json)
        }
        Commands::Params { pretty } => commands::params::run(pretty),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
