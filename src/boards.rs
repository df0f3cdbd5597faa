use crate::amazons_errors::*;
use crate::moves::Move;
use crate::pieces::Piece;
use crate::squares::{Square, SquareIter, SIZE};
use array_init::array_init;
use std::fmt::{self, Debug, Display};

// ---------------------------------------------
// Board
// ---------------------------------------------

const GRID_LEN: usize = (SIZE * SIZE) as usize;

/// Squares holding the White queens at the start of a game.
const INITIAL_WHITE: [Square; 4] = [
    Square::const_sq(0, 3),
    Square::const_sq(3, 0),
    Square::const_sq(6, 0),
    Square::const_sq(9, 3),
];

/// Squares holding the Black queens at the start of a game.
const INITIAL_BLACK: [Square; 4] = [
    Square::const_sq(0, 6),
    Square::const_sq(3, 9),
    Square::const_sq(6, 9),
    Square::const_sq(9, 6),
];

/// The state of an Amazons game: the piece grid, the side to move, the
/// cached winner and the history of moves made so far. Implements the
/// basic operations (one move forward, backwards, legal move
/// generation) the game loop and the search are built on.
#[derive(Clone, PartialEq)]
pub struct Board {
    grid: [Piece; GRID_LEN],
    turn: Piece,
    // Empty while nobody has won; queens are relocated, never taken.
    winner: Piece,
    history: Vec<Move>,
}

// Public interface
impl Board {
    /// A board set up in the initial position, White to move.
    pub fn new() -> Board {
        let mut board = Board {
            grid: array_init(|_| Piece::Empty),
            turn: Piece::White,
            winner: Piece::Empty,
            history: Vec::new(),
        };
        board.init();
        board
    }

    /// Resets this board to the initial position in place.
    pub fn init(&mut self) {
        self.grid = array_init(|_| Piece::Empty);
        for &s in INITIAL_WHITE.iter() {
            self.put(Piece::White, s);
        }
        for &s in INITIAL_BLACK.iter() {
            self.put(Piece::Black, s);
        }
        self.turn = Piece::White;
        self.winner = Piece::Empty;
        self.history.clear();
    }

    /// The side whose move it is.
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// Number of moves made on this board and not undone.
    pub fn num_moves(&self) -> usize {
        self.history.len()
    }

    /// The most recent move still on the history stack.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// The winner of the game, or None while it is undecided.
    pub fn winner(&self) -> Option<Piece> {
        if self.winner == Piece::Empty {
            None
        } else {
            Some(self.winner)
        }
    }

    /// The contents of square S.
    pub fn get(&self, s: Square) -> Piece {
        self.grid[s]
    }

    /// Raw placement of P on S, bypassing the move rules. Discards any
    /// cached winner.
    pub fn put(&mut self, p: Piece, s: Square) {
        self.grid[s] = p;
        self.winner = Piece::Empty;
    }
}

// Legality
impl Board {
    /// True iff FROM-TO is an unblocked queen move on the current
    /// board: every square after FROM, up to and including TO, must be
    /// empty. AS_EMPTY (if given) is treated as empty wherever the walk
    /// crosses it, so that a piece's vacated origin does not block its
    /// own spear throw.
    pub fn is_unblocked_move(&self, from: Square, to: Square, as_empty: Option<Square>) -> bool {
        if !from.is_queen_move(to) {
            return false;
        }
        let dir = from.direction(to);
        for steps in 1..=from.distance(to) {
            let cur = from
                .queen_move(dir, steps)
                .expect("walk towards an on-board square stays on the board");
            if self.get(cur) != Piece::Empty && Some(cur) != as_empty {
                return false;
            }
        }
        true
    }

    /// True iff FROM is a valid starting square for the side to move.
    pub fn is_legal_from(&self, from: Square) -> bool {
        self.grid[from] == self.turn
    }

    /// True iff FROM-TO is a valid first part of a move, ignoring the
    /// spear throw.
    pub fn is_legal_from_to(&self, from: Square, to: Square) -> bool {
        self.is_legal_from(from) && self.is_unblocked_move(from, to, None)
    }

    /// True iff MV is fully legal in the current position. The spear
    /// throw originates at the destination, with the vacated origin
    /// treated as empty.
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.is_legal_from_to(mv.from, mv.to) && self.is_unblocked_move(mv.to, mv.spear, Some(mv.from))
    }
}

// Moving impls
impl Board {
    /// Applies MV, which must be legal in the current position.
    pub fn make_move(&mut self, mv: &Move) {
        debug_assert!(self.is_legal(mv), "illegal move {}", mv);
        self.grid[mv.to] = self.turn;
        self.grid[mv.from] = Piece::Empty;
        self.grid[mv.spear] = Piece::Spear;
        self.history.push(mv.clone());
        self.winner = Piece::Empty;
        self.turn = self.turn.opponent();
        self.check_winner();
    }

    /// Records the opponent as winner if the side to move has no legal
    /// move left.
    pub fn check_winner(&mut self) {
        if self.legal_moves().next().is_none() {
            self.winner = self.turn.opponent();
        }
    }

    /// Takes back the most recent move. Fails on a board with an empty
    /// history.
    pub fn undo(&mut self) -> AmazonsResult<()> {
        let last = self
            .history
            .pop()
            .ok_or(AmazonsError::from("No move left to undo"))?;
        self.turn = self.turn.opponent();
        self.grid[last.from] = self.turn;
        self.grid[last.to] = Piece::Empty;
        // The spear square held no spear before the move: an occupied
        // square can never have been a legal destination.
        self.grid[last.spear] = Piece::Empty;
        self.winner = Piece::Empty;
        Ok(())
    }
}

// Move generation
impl Board {
    /// The squares reachable from FROM by one unblocked queen move,
    /// direction-major and distance-ascending, produced lazily.
    /// AS_EMPTY is passed through to `is_unblocked_move`.
    pub fn reachable_from(&self, from: Square, as_empty: Option<Square>) -> ReachableFrom<'_> {
        ReachableFrom {
            board: self,
            from: from,
            as_empty: as_empty,
            dir: 0,
            steps: 0,
        }
    }

    /// All legal moves for the side to move, produced lazily.
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        self.legal_moves_for(self.turn)
    }

    /// All legal moves for SIDE, regardless of whose turn it is.
    pub fn legal_moves_for(&self, side: Piece) -> LegalMoves<'_> {
        LegalMoves {
            board: self,
            side: side,
            starts: Square::all_squares(),
            start: None,
            dest: None,
            piece_moves: None,
            spear_throws: None,
        }
    }
}

/// Lazy walk over the squares one queen move away; see
/// `Board::reachable_from`.
pub struct ReachableFrom<'a> {
    board: &'a Board,
    from: Square,
    as_empty: Option<Square>,
    dir: usize,
    steps: u8,
}

impl<'a> Iterator for ReachableFrom<'a> {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        while self.dir < 8 {
            self.steps += 1;
            if let Some(to) = self.from.queen_move(self.dir, self.steps) {
                if self.board.is_unblocked_move(self.from, to, self.as_empty) {
                    return Some(to);
                }
            }
            // Off the board or blocked; farther steps this way stay so.
            self.dir += 1;
            self.steps = 0;
        }
        None
    }
}

/// Lazy enumeration of full moves: for every origin holding SIDE, every
/// reachable destination, and every spear throw from that destination
/// with the origin treated as empty. See `Board::legal_moves_for`.
pub struct LegalMoves<'a> {
    board: &'a Board,
    side: Piece,
    starts: SquareIter,
    start: Option<Square>,
    dest: Option<Square>,
    piece_moves: Option<ReachableFrom<'a>>,
    spear_throws: Option<ReachableFrom<'a>>,
}

impl<'a> Iterator for LegalMoves<'a> {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(throws) = self.spear_throws.as_mut() {
                if let Some(spear) = throws.next() {
                    let from = self.start.expect("spear throws imply a current origin");
                    let to = self.dest.expect("spear throws imply a current destination");
                    // Re-validate the throw before composing the move.
                    if self.board.is_unblocked_move(to, spear, Some(from)) {
                        return Some(Move::new(from, to, spear));
                    }
                    continue;
                }
            }
            if let Some(moves) = self.piece_moves.as_mut() {
                if let Some(to) = moves.next() {
                    self.dest = Some(to);
                    self.spear_throws = Some(self.board.reachable_from(to, self.start));
                    continue;
                }
            }
            loop {
                let start = self.starts.next()?;
                if self.board.grid[start] == self.side {
                    self.start = Some(start);
                    self.dest = None;
                    self.piece_moves = Some(self.board.reachable_from(start, None));
                    self.spear_throws = None;
                    break;
                }
            }
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE).rev() {
            write!(f, "  ")?;
            for col in 0..SIZE {
                write!(f, " {}", self.get(Square::sq(col, row)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Turn: {}  Moves: {}\n{}",
            self.turn.name(),
            self.num_moves(),
            self
        )
    }
}
