use crate::boards::Board;
use crate::moves::Move;
use crate::pieces::Piece;
use std::cmp;

/// Score magnitude of a decided position: positive for a White win,
/// negative for a Black win. Strictly below INFTY.
const WINNING_VALUE: i32 = i32::MAX - 1;

/// A magnitude greater than any position value.
const INFTY: i32 = i32::MAX;

/// Hard ceiling on the dynamic search depth, bounding worst-case
/// latency late in the game.
const ABSOLUTE_MAX_DEPTH: i32 = 20;

/// Exponent of the dynamic depth formula; depth grows as the board
/// fills up and the branching factor narrows.
const DEPTH_GROWTH: f64 = 1.5;

/// Alpha-beta game tree search over a private scratch copy of the
/// board. Carries no state between searches apart from the move found
/// by the most recent top-level call.
pub struct AlphaBetaSearch {
    last_found_move: Option<Move>,
}

impl AlphaBetaSearch {
    pub fn new() -> Self {
        AlphaBetaSearch {
            last_found_move: None,
        }
    }

    /// Picks a move for the side to move on BOARD, or None if the game
    /// is already decided. The caller's board is never touched: the
    /// whole search runs on a deep copy.
    pub fn find_best_move(&mut self, board: &Board) -> Option<Move> {
        let mut scratch = board.clone();
        let depth = Self::max_depth(&scratch);
        let sense = if scratch.turn() == Piece::White { 1 } else { -1 };
        self.last_found_move = None;
        self.find_move(&mut scratch, depth, true, sense, -INFTY, INFTY);
        self.last_found_move.clone()
    }

    /// Searches position BOARD to DEPTH levels and returns a value for
    /// it, recording the best move found in `last_found_move` iff
    /// SAVE_MOVE. SENSE is +1 when the level maximizes for White, -1
    /// when it minimizes for Black; ALPHA and BETA bound the window. At
    /// depth 0, or on a decided position, no move is recorded and the
    /// static estimate is returned. Deeper levels return the static
    /// estimate of the position as it stands when the move loop exits;
    /// the chosen move travels only through `last_found_move`.
    fn find_move(
        &mut self,
        board: &mut Board,
        depth: i32,
        save_move: bool,
        sense: i32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if depth == 0 || board.winner().is_some() {
            return Self::static_score(board);
        }
        let moves: Vec<Move> = board.legal_moves().collect();
        for mv in moves {
            board.make_move(&mv);
            if sense == 1 {
                let val = self.find_move(board, depth - 1, false, -1, alpha, beta);
                if val > alpha {
                    alpha = val;
                    if save_move {
                        self.last_found_move = Some(mv.clone());
                    }
                }
                board.undo().unwrap();
                if beta <= alpha {
                    break;
                }
            } else {
                let val = self.find_move(board, depth - 1, false, 1, alpha, beta);
                if val < beta {
                    beta = val;
                    if save_move {
                        self.last_found_move = Some(mv.clone());
                    }
                }
                board.undo().unwrap();
                if beta <= alpha {
                    break;
                }
            }
        }
        Self::static_score(board)
    }

    /// Search depth for BOARD, deepening as the game progresses:
    /// floor((moves / 12 + 1) ^ 1.5), capped at ABSOLUTE_MAX_DEPTH.
    fn max_depth(board: &Board) -> i32 {
        let n = board.num_moves() as i32;
        let depth = f64::from(n / 12 + 1).powf(DEPTH_GROWTH) as i32;
        cmp::min(depth, ABSOLUTE_MAX_DEPTH)
    }

    /// Heuristic value of BOARD from White's perspective: a saturating
    /// extreme on a decided position, otherwise the difference in
    /// mobility between the two sides.
    fn static_score(board: &Board) -> i32 {
        match board.winner() {
            Some(Piece::White) => return WINNING_VALUE,
            Some(_) => return -WINNING_VALUE,
            None => {}
        }
        let turn = board.turn();
        let my_moves = board.legal_moves_for(turn).count() as i32;
        let opp_moves = board.legal_moves_for(turn.opponent()).count() as i32;
        if turn == Piece::White {
            my_moves - opp_moves
        } else {
            opp_moves - my_moves
        }
    }
}
