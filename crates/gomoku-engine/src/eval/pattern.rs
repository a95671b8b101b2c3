//! Line patterns and shape classification.
//!
//! A pattern is the window of [`PATTERN_LEN`] cells starting at a stone and
//! running along one direction, seen from that stone's owner. Shapes are
//! recognized by scanning the window for any of a fixed set of signatures.

use std::fmt;

use gomoku_core::{Board, Pos, Side, WIN_LENGTH};

/// Cells per extracted pattern: a winning line plus one cell on each side.
pub const PATTERN_LEN: usize = WIN_LENGTH + 2;

/// One cell of a pattern, relative to the pattern's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    Empty = 0,
    Own = 1,
    /// An opponent stone or a cell off the board.
    Foreign = 2,
}

/// A fixed-length window of symbols.
pub type Pattern = [Symbol; PATTERN_LEN];

/// Recognized line shapes, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Five,
    OpenFour,
    Four,
    OpenThree,
    Three,
    OpenTwo,
    Two,
    One,
}

impl Shape {
    /// Total number of shapes.
    pub const COUNT: usize = 8;

    /// All shapes in classification order.
    pub const ALL: [Shape; 8] = [
        Shape::Five,
        Shape::OpenFour,
        Shape::Four,
        Shape::OpenThree,
        Shape::Three,
        Shape::OpenTwo,
        Shape::Two,
        Shape::One,
    ];

    /// Return the index in [`Shape::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Five => "five",
            Shape::OpenFour => "open four",
            Shape::Four => "four",
            Shape::OpenThree => "open three",
            Shape::Three => "three",
            Shape::OpenTwo => "open two",
            Shape::Two => "two",
            Shape::One => "one",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const E: Symbol = Symbol::Empty;
const S: Symbol = Symbol::Own;
const F: Symbol = Symbol::Foreign;

type Signatures = &'static [&'static [Symbol]];

// Some signatures overlap between rows (e.g. `.SS..` is listed as both a
// three and an open two); the earlier row wins.
const SIGNATURES: [(Shape, Signatures); 7] = [
    (Shape::Five, &[&[S, S, S, S, S]]),
    (Shape::OpenFour, &[&[E, S, S, S, S, E]]),
    (
        Shape::Four,
        &[
            &[E, S, S, S, S, F],
            &[F, S, S, S, S, E],
            &[E, S, S, S, E, S, E],
            &[E, S, E, S, S, S, E],
        ],
    ),
    (
        Shape::OpenThree,
        &[&[E, S, S, S, E], &[E, S, E, S, S, E], &[E, S, S, E, S, E]],
    ),
    (
        Shape::Three,
        &[
            &[E, E, S, S, S, F],
            &[F, S, S, S, E, E],
            &[E, S, E, S, S, F],
            &[F, S, S, E, S, E],
            &[E, E, S, S, E],
            &[E, S, S, E, E],
        ],
    ),
    (
        Shape::OpenTwo,
        &[
            &[E, E, S, S, E],
            &[E, S, S, E, E],
            &[E, S, E, S, E],
            &[E, S, E, E, S, E],
        ],
    ),
    (
        Shape::Two,
        &[
            &[E, E, S, S, F],
            &[F, S, S, E, E],
            &[S, E, E, E, S],
            &[E, E, S, E, S],
            &[S, E, S, E, E],
        ],
    ),
];

/// Return `true` if `signature` occurs anywhere in `pattern`.
#[inline]
fn contains(pattern: &Pattern, signature: &[Symbol]) -> bool {
    pattern.windows(signature.len()).any(|w| w == signature)
}

/// Classify a pattern; the first matching shape wins.
///
/// Returns `None` only for a pattern with no own stone.
pub fn classify(pattern: &Pattern) -> Option<Shape> {
    for (shape, signatures) in SIGNATURES {
        if signatures.iter().any(|sig| contains(pattern, sig)) {
            return Some(shape);
        }
    }
    if pattern.contains(&Symbol::Own) {
        Some(Shape::One)
    } else {
        None
    }
}

/// Extract the pattern starting at `pos` and running along `(dr, dc)`,
/// relative to `owner`. Cells off the board read as [`Symbol::Foreign`].
pub fn extract(board: &Board, pos: Pos, (dr, dc): (isize, isize), owner: Side) -> Pattern {
    let mut pattern = [Symbol::Foreign; PATTERN_LEN];
    for (step, slot) in pattern.iter_mut().enumerate() {
        let (r, c) = pos.offset(dr, dc, step as isize);
        *slot = match board.at(r, c) {
            Some(None) => Symbol::Empty,
            Some(Some(side)) if side == owner => Symbol::Own,
            _ => Symbol::Foreign,
        };
    }
    pattern
}
