//! Exhaustive minimax search.
//!
//! The full game tree from the empty board has fewer than 9! leaf paths, so
//! the search needs no pruning, depth limit, or memoization. Every branch is
//! evaluated on its own [`Board`] copy.
//!
//! Scores are always from the computer's point of view: the computer
//! maximizes, the human minimizes.

use super::rules::classify;
use super::{Board, GameStatus, Player, Position};
use tracing::{debug, instrument};

/// Minimax score of a position.
pub type Score = i32;

/// Score of a board the computer has won.
pub const COMPUTER_WIN: Score = 1;
/// Score of a board the human has won.
pub const HUMAN_WIN: Score = -1;
/// Score of a drawn board.
pub const DRAW: Score = 0;

/// Fixed score of a terminal status; `None` while the game is ongoing.
///
/// Depth does not shape the score: a quick win and a slow win are equal.
pub fn terminal_score(status: GameStatus) -> Option<Score> {
    match status {
        GameStatus::Ongoing => None,
        GameStatus::Won(Player::Computer) => Some(COMPUTER_WIN),
        GameStatus::Won(Player::Human) => Some(HUMAN_WIN),
        GameStatus::Draw => Some(DRAW),
    }
}

/// Full-depth minimax searcher.
///
/// Keeps a node counter for diagnostics; otherwise stateless.
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher with a zeroed node counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Optimal cell for `player` to claim on `board`.
    ///
    /// Ties go to the lowest index. Returns `None` when the board is already
    /// won or full; callers should guard with
    /// [`classify`](super::rules::classify).
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn best_move_for(&mut self, board: &Board, player: Player) -> Option<Position> {
        let scored = self.evaluate_moves(board, player);

        let mut best: Option<(Position, Score)> = None;
        for (pos, score) in scored {
            let better = match best {
                None => true,
                Some((_, best_score)) => match player {
                    Player::Computer => score > best_score,
                    Player::Human => score < best_score,
                },
            };
            if better {
                best = Some((pos, score));
            }
        }

        debug!(?player, best = ?best, nodes = self.nodes, "Search complete");
        best.map(|(pos, _)| pos)
    }

    /// Scores every empty cell for `player` in index order.
    ///
    /// Empty when the board is terminal.
    pub fn evaluate_moves(&mut self, board: &Board, player: Player) -> Vec<(Position, Score)> {
        self.nodes = 0;
        if classify(board).is_terminal() {
            return Vec::new();
        }

        Position::valid_moves(board)
            .into_iter()
            .map(|pos| {
                let next = board.with_mark(pos, player);
                (pos, self.minimax(&next, player.opponent()))
            })
            .collect()
    }

    /// Game-theoretic value of `board` with `to_move` about to play.
    pub fn minimax(&mut self, board: &Board, to_move: Player) -> Score {
        self.nodes += 1;

        if let Some(score) = terminal_score(classify(board)) {
            return score;
        }

        let replies = Position::valid_moves(board)
            .into_iter()
            .map(|pos| board.with_mark(pos, to_move));

        match to_move {
            Player::Computer => {
                let mut best = Score::MIN;
                for next in replies {
                    best = best.max(self.minimax(&next, Player::Human));
                }
                best
            }
            Player::Human => {
                let mut best = Score::MAX;
                for next in replies {
                    best = best.min(self.minimax(&next, Player::Computer));
                }
                best
            }
        }
    }
}

/// Optimal cell for the computer on `board`.
pub fn best_move(board: &Board) -> Option<Position> {
    Minimax::new().best_move_for(board, Player::Computer)
}

/// Optimal cell for `player` on `board`.
pub fn best_move_for(board: &Board, player: Player) -> Option<Position> {
    Minimax::new().best_move_for(board, player)
}

/// Every empty cell with its minimax score for `player`, in index order.
pub fn evaluate_moves(board: &Board, player: Player) -> Vec<(Position, Score)> {
    Minimax::new().evaluate_moves(board, player)
}
