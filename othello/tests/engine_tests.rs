//! Fixed-scenario tests for the engine's move rules and turn cycle.

use othello::{Board, Cell, GameState, Location, Player, EDGE_LENGTH};

fn loc(row: u8, col: u8) -> Location {
    Location::from_coords(row, col).unwrap()
}

#[test]
fn initial_state() {
    let game = GameState::new();
    assert_eq!(game.current_player(), Player::Black);

    for row in 0..EDGE_LENGTH as u8 {
        for col in 0..EDGE_LENGTH as u8 {
            let expected = match (row, col) {
                (3, 3) | (4, 4) => Cell::White,
                (3, 4) | (4, 3) => Cell::Black,
                _ => Cell::Empty,
            };
            assert_eq!(game.board().get(loc(row, col)), expected);
        }
    }
}

#[test]
fn initial_valid_moves_in_row_major_order() {
    let moves: Vec<(u8, u8)> = GameState::new()
        .valid_moves()
        .iter()
        .map(|mv| mv.to_coords())
        .collect();
    assert_eq!(moves, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
}

#[test]
fn center_cells_rejected_for_both_players() {
    let board = Board::new();
    for &player in &[Player::Black, Player::White] {
        let game = GameState::from_parts(board, player);
        for &(row, col) in &[(3, 3), (3, 4), (4, 3), (4, 4)] {
            assert!(!game.is_valid_move(loc(row, col)));
        }
    }
}

#[test]
fn opening_move_flips_exactly_one_piece() {
    let mut game = GameState::new();
    assert!(game.make_move(loc(2, 3)));

    for row in 0..EDGE_LENGTH as u8 {
        for col in 0..EDGE_LENGTH as u8 {
            let expected = match (row, col) {
                (2, 3) => Cell::Black,         // placed
                (3, 3) => Cell::Black,         // flipped from White
                (3, 4) | (4, 3) => Cell::Black,
                (4, 4) => Cell::White,
                _ => Cell::Empty,
            };
            assert_eq!(game.board().get(loc(row, col)), expected);
        }
    }

    assert_eq!(game.count_pieces(), (4, 1));
    assert_eq!(game.current_player(), Player::White);
}

#[test]
fn invalid_move_is_a_complete_no_op() {
    let mut game = GameState::new();
    let before = game;

    assert!(!game.make_move(loc(0, 0)));
    assert!(!game.make_move(loc(3, 3)));
    assert_eq!(game, before);
}

#[test]
fn forced_pass_hands_turn_to_opponent_with_moves() {
    // White in the corner, Black beside it: Black has no capture anywhere,
    // but White captures by playing (0, 2) across the black piece.
    let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
    cells[0][0] = Cell::White;
    cells[0][1] = Cell::Black;
    let mut game = GameState::from_parts(Board::from_cells(cells), Player::Black);

    assert!(game.valid_moves().is_empty());
    let board_before = *game.board();

    game.pass();
    assert_eq!(*game.board(), board_before);
    assert_eq!(game.current_player(), Player::White);

    let moves: Vec<(u8, u8)> = game.valid_moves().iter().map(|mv| mv.to_coords()).collect();
    assert_eq!(moves, vec![(0, 2)]);
}

#[test]
fn game_over_when_neither_player_can_move() {
    // A board holding only black pieces: no opponent runs exist for either
    // side, so no placement is valid anywhere.
    let cells = [[Cell::Black; EDGE_LENGTH]; EDGE_LENGTH];
    let game = GameState::from_parts(Board::from_cells(cells), Player::Black);

    assert!(game.is_game_over());
    assert_eq!(game.count_pieces(), (64, 0));
    assert_eq!(game.winner(), Some(Player::Black));
}

#[test]
fn compat_termination_never_fires() {
    let mut game = GameState::new();
    assert!(!game.is_game_over_compat());

    game.make_move(loc(2, 3));
    assert!(!game.is_game_over_compat());

    // Even a finished position fails the fresh-game clause.
    let cells = [[Cell::White; EDGE_LENGTH]; EDGE_LENGTH];
    let finished = GameState::from_parts(Board::from_cells(cells), Player::Black);
    assert!(finished.is_game_over());
    assert!(!finished.is_game_over_compat());
}

#[test]
fn first_move_playout_reaches_game_over() {
    let mut game = GameState::new();

    // Always play the first listed move; far fewer than 200 turns exist.
    for _ in 0..200 {
        if game.is_game_over() {
            break;
        }
        let moves = game.valid_moves();
        match moves.iter().next() {
            Some(mv) => assert!(game.make_move(mv)),
            None => game.pass(),
        }

        let (black, white) = game.count_pieces();
        assert_eq!(
            black as usize + white as usize + game.board().count_empty() as usize,
            64
        );
    }

    assert!(game.is_game_over());
    assert!(game.valid_moves().is_empty());
}

#[test]
fn replaying_a_sequence_is_deterministic() {
    let sequence = [(2, 3), (2, 2), (3, 2), (4, 2)];

    let play = || {
        let mut game = GameState::new();
        for &(row, col) in &sequence {
            assert!(game.make_move(loc(row, col)));
        }
        game
    };

    assert_eq!(play(), play());
}
