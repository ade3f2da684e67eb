//! The closed vocabulary of push_swap moves.
//!
//! Every move has a fixed lowercase token (`sa`, `rrr`, ...) used when a move
//! log is rendered for other tools. The table never varies by locale or case.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the eleven primitives a [`PushSwap`](super::PushSwap) machine understands.
///
/// # Example
///
/// ```rust
/// use pushswap::core::Move;
///
/// assert_eq!(Move::Rra.token(), "rra");
/// assert_eq!("pb".parse::<Move>().unwrap(), Move::Pb);
/// assert_eq!(Move::Ra.inverse(), Move::Rra);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Swap the top two elements of A
    Sa,
    /// Swap the top two elements of B
    Sb,
    /// `sa` and `sb` at once
    Ss,
    /// Pop B, push onto A
    Pa,
    /// Pop A, push onto B
    Pb,
    /// Rotate A up: top becomes bottom
    Ra,
    /// Rotate B up
    Rb,
    /// `ra` and `rb` at once
    Rr,
    /// Rotate A down: bottom becomes top
    Rra,
    /// Rotate B down
    Rrb,
    /// `rra` and `rrb` at once
    Rrr,
}

/// Error returned when a token is not one of the eleven move tokens.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown move token {token:?}")]
pub struct ParseMoveError {
    pub token: String,
}

impl Move {
    /// All moves in declaration order.
    pub const ALL: [Move; 11] = [
        Move::Sa,
        Move::Sb,
        Move::Ss,
        Move::Pa,
        Move::Pb,
        Move::Ra,
        Move::Rb,
        Move::Rr,
        Move::Rra,
        Move::Rrb,
        Move::Rrr,
    ];

    /// Canonical lowercase token.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Sa => "sa",
            Self::Sb => "sb",
            Self::Ss => "ss",
            Self::Pa => "pa",
            Self::Pb => "pb",
            Self::Ra => "ra",
            Self::Rb => "rb",
            Self::Rr => "rr",
            Self::Rra => "rra",
            Self::Rrb => "rrb",
            Self::Rrr => "rrr",
        }
    }

    /// Whether the move reads or writes stack A.
    pub fn touches_a(&self) -> bool {
        !matches!(self, Self::Sb | Self::Rb | Self::Rrb)
    }

    /// Whether the move reads or writes stack B.
    pub fn touches_b(&self) -> bool {
        !matches!(self, Self::Sa | Self::Ra | Self::Rra)
    }

    /// The move that undoes this one.
    ///
    /// Swaps are their own inverse, rotations pair up with their reverse
    /// rotation and the two pushes undo each other. A push only round-trips
    /// when its source stack was non-empty.
    pub fn inverse(&self) -> Move {
        match self {
            Self::Sa => Self::Sa,
            Self::Sb => Self::Sb,
            Self::Ss => Self::Ss,
            Self::Pa => Self::Pb,
            Self::Pb => Self::Pa,
            Self::Ra => Self::Rra,
            Self::Rb => Self::Rrb,
            Self::Rr => Self::Rrr,
            Self::Rra => Self::Ra,
            Self::Rrb => Self::Rb,
            Self::Rrr => Self::Rr,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .iter()
            .copied()
            .find(|mv| mv.token() == s)
            .ok_or_else(|| ParseMoveError {
                token: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_lowercase_and_unique() {
        let tokens: Vec<&str> = Move::ALL.iter().map(Move::token).collect();
        assert_eq!(
            tokens,
            ["sa", "sb", "ss", "pa", "pb", "ra", "rb", "rr", "rra", "rrb", "rrr"]
        );
    }

    #[test]
    fn display_matches_token() {
        for mv in Move::ALL {
            assert_eq!(mv.to_string(), mv.token());
        }
    }

    #[test]
    fn parse_accepts_every_token() {
        for mv in Move::ALL {
            assert_eq!(mv.token().parse::<Move>(), Ok(mv));
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "SA".parse::<Move>().unwrap_err();
        assert_eq!(err.token, "SA");
        assert!(" sa".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn inverse_is_an_involution() {
        for mv in Move::ALL {
            assert_eq!(mv.inverse().inverse(), mv);
        }
    }

    #[test]
    fn touched_stacks() {
        assert!(Move::Sa.touches_a());
        assert!(!Move::Sa.touches_b());
        assert!(!Move::Rrb.touches_a());
        assert!(Move::Pa.touches_a() && Move::Pa.touches_b());
        assert!(Move::Rrr.touches_a() && Move::Rrr.touches_b());
    }

    #[test]
    fn move_serializes_as_token() {
        let json = serde_json::to_string(&Move::Rrb).unwrap();
        assert_eq!(json, "\"rrb\"");
        let back: Move = serde_json::from_str("\"ss\"").unwrap();
        assert_eq!(back, Move::Ss);
    }
}
