// Describing the moves that can be made on an Amazons board.
use crate::amazons_errors::*;
use crate::squares::*;
use std::fmt;
use std::str::FromStr;

/// Compass names of the eight direction codes, clockwise from straight
/// up, used by the relative spear grammar.
const DIR_NAMES: [&str; 8] = ["n", "ne", "e", "se", "s", "sw", "w", "nw"];

/// A full Amazons move: a queen move followed by a spear throw from the
/// destination square.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub spear: Square,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.from, self.to, self.spear)
    }
}

impl Move {
    pub fn new(from: Square, to: Square, spear: Square) -> Self {
        Move {
            from: from,
            to: to,
            spear: spear,
        }
    }
}

impl FromStr for Move {
    type Err = AmazonsError;

    /// Accepts the canonical form `d1-d7(g7)` and the relative form
    /// `d1-d7(n1)`, where the spear square is written as a compass
    /// direction and step count away from the destination. Both forms
    /// produce the same value; `Display` always prints the canonical
    /// form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err_closure = || -> AmazonsError { format!("Invalid move {}", s).into() };
        let s = s.trim();

        let (from_part, rest) = s.split_once('-').ok_or_else(err_closure)?;
        let (to_part, spear_part) = rest.split_once('(').ok_or_else(err_closure)?;
        let spear_part = spear_part.strip_suffix(')').ok_or_else(err_closure)?;

        let from: Square = from_part.parse()?;
        let to: Square = to_part.parse()?;
        let spear = match spear_part.parse::<Square>() {
            Ok(square) => square,
            Err(_) => relative_spear(to, spear_part).ok_or_else(err_closure)?,
        };
        Ok(Move::new(from, to, spear))
    }
}

/// Resolves a `<dir><steps>` spear description relative to TO. Returns
/// None for unknown directions, zero steps, or squares off the board.
fn relative_spear(to: Square, s: &str) -> Option<Square> {
    let digits_at = s.find(|c: char| c.is_ascii_digit())?;
    let (name, steps) = s.split_at(digits_at);
    let dir = DIR_NAMES.iter().position(|&n| n == name)?;
    let steps: u8 = steps.parse().ok()?;
    if steps == 0 {
        return None;
    }
    to.queen_move(dir, steps)
}
