use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, render, AiPlayer, AiStrategy, CliPlayer, Game, GameSession, JsonLinesSink,
    LogSink, ResultSink, SessionConfig, SinkConfig, DEFAULT_RESULTS_PATH, GRID_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Battleship against the computer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum Strategy {
    /// Uniformly random shots.
    #[default]
    Random,
    /// Shots drawn from a ship-placement heat map.
    Probability,
}

impl From<Strategy> for AiStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Random => AiStrategy::Random,
            Strategy::Probability => AiStrategy::Probability,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (the default).
    Play {
        /// Your name, as stored with the result. Prompted for when omitted.
        #[arg(long)]
        name: Option<String>,
        /// Grid side length.
        #[arg(long, default_value_t = GRID_SIZE as u8, value_parser = clap::value_parser!(u8).range(6..=10))]
        size: u8,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Strategy::Random)]
        ai: Strategy,
        #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
        results: PathBuf,
        /// Do not store the result, only log it.
        #[arg(long)]
        no_save: bool,
        /// Place your fleet randomly instead of ship by ship.
        #[arg(long)]
        random_placement: bool,
    },
    /// Let two computer players fight it out and print a JSON summary.
    Autoplay {
        /// Grid side length.
        #[arg(long, default_value_t = GRID_SIZE as u8, value_parser = clap::value_parser!(u8).range(6..=10))]
        size: u8,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Strategy::Random)]
        ai: Strategy,
    },
    /// Show stored game results.
    History {
        #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
        results: PathBuf,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn prompt_name() -> anyhow::Result<String> {
    print!("Enter your name: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let name = line.trim();
    Ok(if name.is_empty() { "Player".to_string() } else { name.to_string() })
}

fn play(
    name: Option<String>,
    size: usize,
    seed: Option<u64>,
    ai: Strategy,
    sink_config: Option<SinkConfig>,
    random_placement: bool,
) -> anyhow::Result<()> {
    println!("{}", render::welcome_banner());
    let config = SessionConfig {
        player_name: match name {
            Some(n) => n,
            None => prompt_name()?,
        },
        grid_size: size,
        strategy: ai.into(),
    };
    let sink: Box<dyn ResultSink> = match sink_config {
        Some(cfg) => match JsonLinesSink::open(cfg.clone()) {
            Ok(sink) => Box::new(sink),
            Err(e) => {
                log::warn!("results store unavailable ({}); will retry at game end", e);
                Box::new(JsonLinesSink::lazy(cfg))
            }
        },
        None => Box::new(LogSink),
    };

    let mut rng = make_rng(seed);
    let game = Game::new(config.player_name.clone(), config.grid_size)?;
    let mut session = GameSession::new(
        game,
        Box::new(CliPlayer::stdio(config.player_name.clone()).with_random_placement(random_placement)),
        Box::new(AiPlayer::new(config.strategy)),
        sink,
        Box::new(io::stdout()),
    );
    session.run(&mut rng)?;
    Ok(())
}

fn autoplay(size: usize, seed: Option<u64>, ai: Strategy) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let game = Game::new("AI-1", size)?;
    let mut session = GameSession::new(
        game,
        Box::new(AiPlayer::named("AI-1", ai.into())),
        Box::new(AiPlayer::named("AI-2", ai.into())),
        Box::new(LogSink),
        Box::new(io::sink()),
    );
    let report = session.run(&mut rng)?;
    let summary = serde_json::json!({
        "winner": match report.outcome {
            seabattle::Outcome::Win => "AI-1",
            seabattle::Outcome::Lose => "AI-2",
        },
        "player_moves": report.player_moves,
        "computer_moves": report.computer_moves,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn history(results: PathBuf) -> anyhow::Result<()> {
    let sink = JsonLinesSink::lazy(SinkConfig { path: results });
    let records = sink.records()?;
    if records.is_empty() {
        println!("No games recorded in {}", sink.path().display());
        return Ok(());
    }
    println!("{:>4}  {:<20} {:<6} {:>5}", "id", "player", "result", "moves");
    for r in records {
        println!(
            "{:>4}  {:<20} {:<6} {:>5}",
            r.id,
            r.player_name,
            r.outcome.to_string(),
            r.moves
        );
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None => play(
            None,
            GRID_SIZE,
            None,
            Strategy::Random,
            Some(SinkConfig::default()),
            false,
        ),
        Some(Commands::Play {
            name,
            size,
            seed,
            ai,
            results,
            no_save,
            random_placement,
        }) => {
            let sink = (!no_save).then_some(SinkConfig { path: results });
            play(name, usize::from(size), seed, ai, sink, random_placement)
        }
        Some(Commands::Autoplay { size, seed, ai }) => autoplay(usize::from(size), seed, ai),
        Some(Commands::History { results }) => history(results),
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("An unexpected error occurred: {}", e);
            ExitCode::FAILURE
        }
    }
}
