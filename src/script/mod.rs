//! Move scripts: the textual form of a move log.
//!
//! A script is a whitespace separated list of move tokens, usually one per
//! line, exactly as [`MoveLog::render`](crate::core::MoveLog::render)
//! produces it. This module parses scripts and replays them against an input
//! sequence to check whether they sort it.
//!
//! Parsing uses stillwater's `Validation` so that every bad token in a script
//! is reported in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use pushswap::script::{verify, Verdict};
//!
//! let verdict = verify(&[2, 1, 3], "sa\n").unwrap();
//! assert_eq!(verdict, Verdict::Sorted { moves: 1 });
//!
//! let err = verify(&[2, 1, 3], "sa\nswap\nRA\n").unwrap_err();
//! assert_eq!(err.invalid_tokens().len(), 2);
//! ```

pub mod error;

pub use error::{InvalidToken, ScriptError};

use crate::core::{Move, PushSwap};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Outcome of replaying a script against an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Stack B ended empty and stack A in ascending pop order
    Sorted { moves: usize },

    /// The script ran but left the stacks unsorted
    Unsorted { moves: usize },
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Sorted { .. })
    }

    pub fn moves(&self) -> usize {
        match self {
            Self::Sorted { moves } | Self::Unsorted { moves } => *moves,
        }
    }

    /// The classic checker answer: `OK` or `KO`.
    pub fn label(&self) -> &'static str {
        if self.is_ok() {
            "OK"
        } else {
            "KO"
        }
    }
}

/// Parse a script into moves, accumulating ALL invalid tokens.
///
/// Positions in the error are zero-based token indices.
pub fn parse_script(script: &str) -> Result<Vec<Move>, ScriptError> {
    let mut moves = Vec::new();
    let mut checks: Vec<Validation<(), NonEmptyVec<InvalidToken>>> = Vec::new();

    for (position, token) in script.split_whitespace().enumerate() {
        let check = match token.parse::<Move>() {
            Ok(mv) => {
                moves.push(mv);
                Validation::success(())
            }
            Err(err) => Validation::fail(InvalidToken {
                position,
                token: err.token,
            }),
        };
        checks.push(check);
    }

    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(()) => Ok(moves),
        Validation::Failure(errors) => {
            let errors: Vec<InvalidToken> = errors.iter().cloned().collect();
            debug!(invalid = errors.len(), "rejected move script");
            Err(ScriptError::InvalidTokens(errors))
        }
    }
}

/// Render moves as a script, one token per line.
pub fn render_script(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|mv| format!("{mv}\n"))
        .collect::<String>()
}

/// Replay `moves` on a fresh machine loaded with `initial`.
pub fn replay(initial: &[i32], moves: impl IntoIterator<Item = Move>) -> PushSwap {
    let mut machine = PushSwap::new(initial);
    machine.apply_all(moves);
    machine
}

/// Parse `script`, replay it on `initial` and report whether it sorts.
pub fn verify(initial: &[i32], script: &str) -> Result<Verdict, ScriptError> {
    let moves = parse_script(script)?;
    let machine = replay(initial, moves);
    let count = machine.move_count();

    let verdict = if machine.is_solved() {
        Verdict::Sorted { moves: count }
    } else {
        Verdict::Unsorted { moves: count }
    };
    debug!(verdict = verdict.label(), moves = count, "verified move script");
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_newline_separated_tokens() {
        let moves = parse_script("pb\nra\npa\n").unwrap();
        assert_eq!(moves, vec![Move::Pb, Move::Ra, Move::Pa]);
    }

    #[test]
    fn parse_accepts_any_whitespace() {
        let moves = parse_script("  sa rrr\t\nrb  ").unwrap();
        assert_eq!(moves, vec![Move::Sa, Move::Rrr, Move::Rb]);
    }

    #[test]
    fn empty_script_is_valid() {
        assert!(parse_script("").unwrap().is_empty());
        assert!(parse_script("\n\n").unwrap().is_empty());
    }

    #[test]
    fn parse_accumulates_all_invalid_tokens() {
        let err = parse_script("sa\nSA\npa\nrrrr\n").unwrap_err();

        let ScriptError::InvalidTokens(errors) = &err;
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            InvalidToken {
                position: 1,
                token: "SA".to_string()
            }
        );
        assert_eq!(errors[1].position, 3);
        assert_eq!(errors[1].token, "rrrr");
    }

    #[test]
    fn render_then_parse_preserves_moves() {
        let moves = vec![Move::Ss, Move::Rra, Move::Pb];
        let script = render_script(&moves);
        assert_eq!(script, "ss\nrra\npb\n");
        assert_eq!(parse_script(&script).unwrap(), moves);
    }

    #[test]
    fn rendered_log_matches_render_script() {
        let machine = replay(&[3, 2, 1], [Move::Ra, Move::Sa]);
        assert_eq!(machine.log().render(), render_script(&machine.moves()));
    }

    #[test]
    fn verify_reports_sorted() {
        let verdict = verify(&[3, 1, 2], "sa\nra\n").unwrap();
        assert_eq!(verdict, Verdict::Unsorted { moves: 2 });

        let verdict = verify(&[2, 1, 3], "sa\n").unwrap();
        assert!(verdict.is_ok());
        assert_eq!(verdict.label(), "OK");
        assert_eq!(verdict.moves(), 1);
    }

    #[test]
    fn verify_counts_noop_moves() {
        let verdict = verify(&[], "pa\nra\nrrb\n").unwrap();
        assert_eq!(verdict, Verdict::Sorted { moves: 3 });
    }

    #[test]
    fn verify_fails_when_b_is_left_non_empty() {
        let verdict = verify(&[1, 2, 3], "pb\n").unwrap();
        assert_eq!(verdict.label(), "KO");
    }
}
