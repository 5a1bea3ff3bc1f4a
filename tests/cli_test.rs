#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::{
        parse_coord, parse_orientation, Board, Coordinate, GameError, GuessResult, Orientation,
        Player, ShipId,
    };

    fn scripted(lines: &[&str]) -> seabattle::CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        let mut input = lines.join("\n");
        input.push('\n');
        seabattle::CliPlayer::new("Tester", Cursor::new(input.into_bytes()), Vec::new())
    }

    #[test]
    fn test_parse_orientation() {
        assert_eq!(parse_orientation("H"), Ok(Orientation::Horizontal));
        assert_eq!(parse_orientation(" v "), Ok(Orientation::Vertical));
        assert!(parse_orientation("").is_err());
        assert!(parse_orientation("X").is_err());
        assert!(parse_orientation("HV").is_err());
    }

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A1", 10), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_coord("a5", 10), Ok(Coordinate::new(0, 4)));
        assert_eq!(parse_coord(" J10 ", 10), Ok(Coordinate::new(9, 9)));
        assert_eq!(parse_coord("C3", 10), Ok(Coordinate::new(2, 2)));

        for bad in ["", "A", "5A", "A0", "A11", "K1", "Ax", "-1"] {
            assert!(parse_coord(bad, 10).is_err(), "{:?} should be rejected", bad);
        }
        // bounds follow the grid size
        assert!(parse_coord("F1", 5).is_err());
        assert!(parse_coord("A6", 5).is_err());
        assert_eq!(parse_coord("E5", 5), Ok(Coordinate::new(4, 4)));
    }

    #[test]
    fn test_manual_fleet_placement_with_retries() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let mut board = Board::new(10).unwrap();
        let mut player = scripted(&[
            // Carrier: bad orientation, then out of bounds, then valid
            "Q", "H", "A7", "H", "A1",
            // Battleship: overlaps the carrier, then valid
            "V", "A2", "V", "B2",
            // Cruiser: malformed coordinate, then valid
            "H", "Z9", "H", "C3",
            // Submarine
            "V", "D4",
            // Destroyer: random placement
            "",
        ]);
        player.place_ships(&mut rng, &mut board).unwrap();

        assert!(board.fleet().all_placed());
        let carrier = board.ship(ShipId(0)).unwrap();
        assert_eq!(carrier.coordinates()[0], Coordinate::new(0, 0));
        assert_eq!(carrier.orientation(), Some(Orientation::Horizontal));
        let battleship = board.ship(ShipId(1)).unwrap();
        assert_eq!(battleship.coordinates()[0], Coordinate::new(1, 1));
        assert_eq!(battleship.orientation(), Some(Orientation::Vertical));
        assert_eq!(
            board.ship(ShipId(2)).unwrap().coordinates()[0],
            Coordinate::new(2, 2)
        );
        assert_eq!(
            board.ship(ShipId(3)).unwrap().coordinates()[0],
            Coordinate::new(3, 3)
        );

        let shown = String::from_utf8(player.into_output()).unwrap();
        assert!(shown.contains("Invalid orientation"));
        assert!(shown.contains("Invalid placement"));
        assert!(shown.contains("Invalid coordinates"));
        assert!(shown.contains("Destroyer randomly placed"));
    }

    #[test]
    fn test_placement_stops_when_input_ends() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut board = Board::new(10).unwrap();
        let mut player = scripted(&["H", "A1"]);
        assert_eq!(
            player.place_ships(&mut rng, &mut board).unwrap_err(),
            GameError::InputClosed
        );
        assert!(board.ship(ShipId(0)).unwrap().is_placed());
        assert!(!board.ship(ShipId(1)).unwrap().is_placed());
    }

    #[test]
    fn test_random_placement_reads_no_input() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut board = Board::new(10).unwrap();
        let mut player = scripted(&[]).with_random_placement(true);
        player.place_ships(&mut rng, &mut board).unwrap();
        assert!(board.fleet().all_placed());
        let shown = String::from_utf8(player.into_output()).unwrap();
        assert!(shown.contains("placed randomly"));
    }

    #[test]
    fn test_select_target_skips_repeats_and_garbage() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut board = Board::new(10).unwrap();
        board.place_fleet_randomly(&mut rng).unwrap();
        board.guess(Coordinate::new(1, 1)).unwrap();

        let mut player = scripted(&["hello", "B2", "C7"]);
        let target = player
            .select_target(&mut rng, &board.target_view())
            .unwrap();
        assert_eq!(target, Coordinate::new(2, 6));

        player.handle_guess_result(target, GuessResult::Sink("Cruiser"));
        let shown = String::from_utf8(player.into_output()).unwrap();
        assert!(shown.contains("Invalid coordinate"));
        assert!(shown.contains("already fired at B2"));
        assert!(shown.contains("destroyed the enemy's Cruiser"));
    }
}
