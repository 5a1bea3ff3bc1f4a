use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    ai, AiPlayer, AiStrategy, Board, Coordinate, Game, GameSession, GameState, Outcome, Player,
    ResultSink, SinkError,
};

/// Sink that remembers what it was given, optionally failing every call.
#[derive(Clone, Default)]
struct MemorySink {
    calls: Rc<RefCell<Vec<(String, Outcome, usize)>>>,
    fail: bool,
}

impl ResultSink for MemorySink {
    fn record_result(
        &mut self,
        player_name: &str,
        outcome: Outcome,
        moves: usize,
    ) -> Result<(), SinkError> {
        self.calls
            .borrow_mut()
            .push((player_name.to_string(), outcome, moves));
        if self.fail {
            Err(SinkError::Io(std::io::Error::other("database unreachable")))
        } else {
            Ok(())
        }
    }
}

fn ai_session(seed_strategy: AiStrategy, sink: MemorySink) -> GameSession {
    let game = Game::new("Bot", 10).unwrap();
    GameSession::new(
        game,
        Box::new(AiPlayer::named("Bot", seed_strategy)),
        Box::new(AiPlayer::new(AiStrategy::Random)),
        Box::new(sink),
        Box::new(std::io::sink()),
    )
}

#[test]
fn test_ai_vs_ai_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut p1 = AiPlayer::new(AiStrategy::Probability);
    let mut p2 = AiPlayer::new(AiStrategy::Random);
    let mut game = Game::new("p1", 10).unwrap();
    p1.place_ships(&mut rng, game.player_board_mut().unwrap())
        .unwrap();
    p2.place_ships(&mut rng, game.computer_board_mut().unwrap())
        .unwrap();
    game.start().unwrap();

    let mut turns = 0;
    while !game.is_over() {
        turns += 1;
        let target = p1
            .select_target(&mut rng, &game.computer_board().target_view())
            .unwrap();
        game.player_guess(target).unwrap();
        if game.is_over() {
            break;
        }
        let target = p2
            .select_target(&mut rng, &game.player_board().target_view())
            .unwrap();
        game.computer_guess(target).unwrap();
        assert!(turns <= 100, "game took too many turns");
    }
    assert!(matches!(
        game.state(),
        GameState::PlayerWon | GameState::ComputerWon
    ));
    assert_eq!(game.player_moves(), turns);
}

#[test]
fn session_records_exactly_once() {
    let sink = MemorySink::default();
    let calls = sink.calls.clone();
    let mut session = ai_session(AiStrategy::Probability, sink);
    let mut rng = SmallRng::seed_from_u64(9);

    let report = session.run(&mut rng).unwrap();
    assert!(report.recorded);
    assert!(session.game().is_over());
    assert_eq!(session.game().outcome(), Some(report.outcome));
    assert!(report.player_moves >= 17 || report.outcome == Outcome::Lose);

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], ("Bot".to_string(), report.outcome, report.player_moves));
}

#[test]
fn sink_failure_does_not_change_the_outcome() {
    let ok_sink = MemorySink::default();
    let failing = MemorySink {
        fail: true,
        ..MemorySink::default()
    };
    let failing_calls = failing.calls.clone();

    let a = ai_session(AiStrategy::Random, ok_sink)
        .run(&mut SmallRng::seed_from_u64(77))
        .unwrap();
    let b = ai_session(AiStrategy::Random, failing)
        .run(&mut SmallRng::seed_from_u64(77))
        .unwrap();

    assert!(a.recorded);
    assert!(!b.recorded);
    assert_eq!(a.outcome, b.outcome);
    assert_eq!(a.player_moves, b.player_moves);
    assert_eq!(a.computer_moves, b.computer_moves);
    assert_eq!(failing_calls.borrow().len(), 1);
}

#[test]
fn random_strategy_never_repeats_a_guess() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut board = Board::new(10).unwrap();
    board.place_fleet_randomly(&mut rng).unwrap();
    let mut ai_player = AiPlayer::new(AiStrategy::Random);

    let mut fired: Vec<Coordinate> = Vec::new();
    while !board.all_sunk() {
        let target = ai_player
            .select_target(&mut rng, &board.target_view())
            .unwrap();
        assert!(!fired.contains(&target));
        fired.push(target);
        board.guess(target).unwrap();
    }
    assert!(fired.len() <= 100);
}

#[test]
fn probability_density_ignores_guessed_cells() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut board = Board::new(10).unwrap();
    board.place_fleet_randomly(&mut rng).unwrap();
    for coord in [Coordinate::new(0, 0), Coordinate::new(4, 4), Coordinate::new(9, 2)] {
        board.guess(coord).unwrap();
    }

    let view = board.target_view();
    let pdf = ai::calc_pdf(&view);
    assert_eq!(pdf.len(), 100);
    let total: f64 = pdf.iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
    for coord in [Coordinate::new(0, 0), Coordinate::new(4, 4), Coordinate::new(9, 2)] {
        assert_eq!(pdf[coord.row * 10 + coord.col], 0.0);
    }

    for _ in 0..50 {
        let pick = ai::calc_pdf_and_guess(&view, &mut rng).unwrap();
        assert!(!view.is_guessed(pick));
    }
}
