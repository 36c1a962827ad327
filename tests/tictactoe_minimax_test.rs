//! Tests for the minimax search against exhaustive opponents.

use minimax_tictactoe::minimax::{self, COMPUTER_WIN, DRAW, HUMAN_WIN, Minimax};
use minimax_tictactoe::rules::{check_draw, check_win, classify};
use minimax_tictactoe::{Board, GameSession, GameStatus, Player, Position};
use std::collections::HashSet;

/// Tries every human reply at every human turn; the computer answers with
/// its best move. Panics on any line where the human wins.
fn assert_never_loses(board: Board, to_move: Player, search: &mut Minimax) {
    match classify(&board) {
        GameStatus::Won(Player::Human) => panic!("Human won on {}", board),
        GameStatus::Won(Player::Computer) | GameStatus::Draw => return,
        GameStatus::Ongoing => {}
    }

    match to_move {
        Player::Computer => {
            let pos = search
                .best_move_for(&board, Player::Computer)
                .expect("ongoing board has an empty cell");
            assert_never_loses(board.with_mark(pos, Player::Computer), Player::Human, search);
        }
        Player::Human => {
            for pos in Position::valid_moves(&board) {
                assert_never_loses(board.with_mark(pos, Player::Human), Player::Computer, search);
            }
        }
    }
}

#[test]
fn test_computer_never_loses_moving_second() {
    assert_never_loses(Board::new(), Player::Human, &mut Minimax::new());
}

#[test]
fn test_computer_never_loses_moving_first() {
    assert_never_loses(Board::new(), Player::Computer, &mut Minimax::new());
}

#[test]
fn test_center_opening_answered_in_corner() {
    let board = Board::new().with_mark(Position::Center, Player::Human);

    let scores = minimax::evaluate_moves(&board, Player::Computer);
    for (pos, score) in &scores {
        if pos.is_corner() {
            assert_eq!(*score, DRAW, "{} should hold the draw", pos);
        } else {
            assert_eq!(*score, HUMAN_WIN, "{} should lose", pos);
        }
    }

    assert_eq!(minimax::best_move(&board), Some(Position::TopLeft));
}

#[test]
fn test_ties_resolve_to_lowest_index() {
    // Every opening draws under perfect play
    assert_eq!(minimax::best_move(&Board::new()), Some(Position::TopLeft));
    assert_eq!(
        minimax::best_move_for(&Board::new(), Player::Human),
        Some(Position::TopLeft)
    );
}

#[test]
fn test_prefers_win_over_block() {
    // O O _ / X X _ / _ _ X - both sides threaten, computer to move
    let board: Board = "OO_ XX_ __X".parse().unwrap();
    let scores = minimax::evaluate_moves(&board, Player::Computer);

    assert!(scores.contains(&(Position::TopRight, COMPUTER_WIN)));
    assert_eq!(minimax::best_move(&board), Some(Position::TopRight));
}

#[test]
fn test_terminal_board_has_no_move() {
    let won: Board = "XXX OO_ ___".parse().unwrap();
    let drawn: Board = "XOX XOO OXX".parse().unwrap();

    assert_eq!(minimax::best_move(&won), None);
    assert_eq!(minimax::best_move(&drawn), None);
    assert!(minimax::evaluate_moves(&drawn, Player::Computer).is_empty());
}

#[test]
fn test_search_leaves_board_untouched() {
    let board: Board = "X__ _O_ __X".parse().unwrap();
    let copy = board;
    minimax::best_move(&board);
    assert_eq!(board, copy);
}

#[test]
fn test_perfect_selfplay_draws() {
    let mut session = GameSession::new();
    while session.is_active() {
        let player = session.to_move();
        let pos = minimax::best_move_for(session.board(), player).unwrap();
        session.apply_move(pos.to_index(), player).unwrap();
        session.swap_turn();
    }
    assert_eq!(session.status(), GameStatus::Draw);
}

fn collect_reachable(board: Board, to_move: Player, seen: &mut HashSet<Board>) {
    if !seen.insert(board) {
        return;
    }

    let human_won = check_win(&board, Player::Human);
    let computer_won = check_win(&board, Player::Computer);
    assert!(!(human_won && computer_won), "Both players won on {}", board);

    let status = classify(&board);
    match status {
        GameStatus::Won(player) => assert!(check_win(&board, player)),
        GameStatus::Draw => assert!(check_draw(&board) && !human_won && !computer_won),
        GameStatus::Ongoing => {
            assert!(!check_draw(&board) && !human_won && !computer_won);
            for pos in Position::valid_moves(&board) {
                collect_reachable(board.with_mark(pos, to_move), to_move.opponent(), seen);
            }
        }
    }
}

#[test]
fn test_every_reachable_board_has_one_status() {
    let mut seen = HashSet::new();
    collect_reachable(Board::new(), Player::Human, &mut seen);
    // Legal tic-tac-toe positions with X moving first, empty board included
    assert_eq!(seen.len(), 5478);
}
