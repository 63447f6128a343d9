//! # Town Navigator CLI
//!
//! Play the navigation game in a terminal.
//!
//! Usage:
//!   town-navigator
//!   town-navigator --seed 42 --size 6
//!   town-navigator --config town.toml --map
//!   town-navigator --seed 42 --json
//!
//! Set `RUST_LOG=navigation_core=debug` to trace searches.

mod render;

use anyhow::{Context, Result};
use clap::Parser;
use navigation_core::{Command, CompilerConfig, InstructionCompiler, Session};
use std::io::{self, BufRead, Write};
use town_rules::{LandmarkCategory, TownConfig, TownGenerator};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "town-navigator")]
#[command(author, version, about = "Find your way to a landmark in a randomly generated town")]
struct Cli {
    /// TOML file with town settings
    #[arg(short, long)]
    config: Option<String>,

    /// Seed for a reproducible town
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of blocks along each side of the town
    #[arg(long)]
    size: Option<usize>,

    /// Kind of landmark to look for (e.g. "Restaurant", "Cafe", "P")
    #[arg(short, long)]
    target_category: Option<LandmarkCategory>,

    /// Print the town map before playing
    #[arg(short, long)]
    map: bool,

    /// Say exactly how many blocks to go straight
    #[arg(long)]
    exact: bool,

    /// Print the directions as JSON and exit
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(EnvFilter::from_default_env())
        .init();
}

fn load_config(cli: &Cli) -> Result<TownConfig> {
    let mut config = match &cli.config {
        Some(path) => TownConfig::load(path).with_context(|| format!("loading {path}"))?,
        None => TownConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(size) = cli.size {
        config.grid_size = size;
    }
    if let Some(category) = cli.target_category {
        config.target_category = category;
    }
    config.validate()?;
    Ok(config)
}

const HELP: &str = "Commands: 'f' (forward), 'l' (turn left), 'r' (turn right), \
'map', 'directions', 'new' (new town), 'help', 'quit'";

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::debug!(?config, "starting town navigator");
    let compiler = InstructionCompiler::new(CompilerConfig {
        exact_block_counts: cli.exact,
    });

    let mut generator = TownGenerator::new(config).context("creating town generator")?;
    let town = generator.generate().context("generating town")?;
    let mut session = Session::with_compiler(town, compiler.clone());

    if cli.json {
        let report = serde_json::json!({
            "target": session.target(),
            "start": session.pose(),
            "directions": session.directions(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if cli.map {
        println!("{}", render::town_map(session.grid()));
    }
    introduce(&session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut arrived = false;

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "help" | "h" | "?" => println!("{HELP}"),
            "map" => println!("{}", render::town_map(session.grid())),
            "directions" | "d" => println!("{}", session.directions().render()),
            "new" => {
                let town = generator.generate().context("generating town")?;
                session = Session::with_compiler(town, compiler.clone());
                arrived = false;
                introduce(&session);
            }
            input => match input.parse::<Command>() {
                Ok(command) => {
                    println!("{}", session.perform(command));
                    print!("{}", session.status());

                    let here = session.has_arrived();
                    if here && !arrived {
                        println!(
                            "\nCongratulations! You found the {} near your current position!",
                            session.target()
                        );
                        println!("Type 'new' to play again or 'quit' to leave.");
                    }
                    arrived = here;
                }
                Err(err) => println!("{err}. Type 'help' for the full list."),
            },
        }
    }

    Ok(())
}

fn introduce(session: &Session) {
    println!("Your mission: Find the {}.", session.target());
    println!("{}", session.directions().render());
    println!("{HELP}");
    print!("{}", session.status());
}
