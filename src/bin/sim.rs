use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AiPlayer, AiStrategy, Game, GameSession, LogSink, Outcome, Player, GRID_SIZE};
use serde_json::json;

/// Pits the probability strategy against the random one, alternating which
/// side fires first.
fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u32 = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut probability_wins = 0u32;
    let mut random_wins = 0u32;
    let mut probability_first = 0u32;
    let mut total_moves = 0usize;

    for round in 0..games {
        // the session's first player always opens the game
        let probability_opens = round % 2 == 0;
        let probability = AiPlayer::named("probability", AiStrategy::Probability);
        let random = AiPlayer::named("random", AiStrategy::Random);
        let (first, second) = if probability_opens {
            probability_first += 1;
            (probability, random)
        } else {
            (random, probability)
        };
        let game = Game::new(first.name(), GRID_SIZE)?;
        let mut session = GameSession::new(
            game,
            Box::new(first),
            Box::new(second),
            Box::new(LogSink),
            Box::new(std::io::sink()),
        );
        let report = session.run(&mut rng)?;
        let first_won = report.outcome == Outcome::Win;
        if first_won == probability_opens {
            probability_wins += 1;
        } else {
            random_wins += 1;
        }
        total_moves += if probability_opens {
            report.player_moves
        } else {
            report.computer_moves
        };
    }

    let winner = if probability_wins > random_wins {
        Some("probability")
    } else if random_wins > probability_wins {
        Some("random")
    } else {
        None
    };
    let average_moves = if games == 0 {
        0.0
    } else {
        total_moves as f64 / f64::from(games)
    };

    let result = json!({
        "games": games,
        "probability_first": probability_first,
        "probability_wins": probability_wins,
        "random_wins": random_wins,
        "average_moves": average_moves,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
