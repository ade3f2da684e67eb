//! The two-stack machine.

use super::history::MoveLog;
use super::moves::Move;
use super::stack::Stack;
use tracing::trace;

/// Deterministic push_swap machine holding stacks A and B and a move log.
///
/// The machine never decides how to sort. A solver calls the primitives,
/// inspects [`stack_a`](Self::stack_a), [`stack_b`](Self::stack_b) and
/// [`is_solved`](Self::is_solved), and the log records what it did.
///
/// Every primitive logs itself before touching the stacks, so a move that
/// turns out to be a no-op (empty or singleton source) still counts.
///
/// # Example
///
/// ```rust
/// use pushswap::core::{Move, PushSwap};
///
/// let mut machine = PushSwap::new(&[2, 1, 3]);
/// assert_eq!(machine.stack_a(), vec![2, 1, 3]);
/// assert!(!machine.is_solved());
///
/// machine.sa();
/// assert_eq!(machine.stack_a(), vec![1, 2, 3]);
/// assert_eq!(machine.moves(), vec![Move::Sa]);
/// assert!(machine.is_solved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushSwap {
    a: Stack,
    b: Stack,
    log: MoveLog,
}

impl PushSwap {
    /// Load `initial` into A so that `initial[0]` ends on top. B starts empty.
    pub fn new(initial: &[i32]) -> Self {
        Self {
            a: Stack::from_top_first(initial.iter().copied()),
            b: Stack::new(),
            log: MoveLog::new(),
        }
    }

    /// Seed both stacks and the log directly. Values are top-first.
    pub(crate) fn from_parts(a: Stack, b: Stack, log: MoveLog) -> Self {
        Self { a, b, log }
    }

    /// Contents of A, top first.
    pub fn stack_a(&self) -> Vec<i32> {
        self.a.to_vec()
    }

    /// Contents of B, top first.
    pub fn stack_b(&self) -> Vec<i32> {
        self.b.to_vec()
    }

    /// Executed moves in chronological order.
    pub fn moves(&self) -> Vec<Move> {
        self.log.moves().to_vec()
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn move_count(&self) -> usize {
        self.log.len()
    }

    /// Total number of elements across both stacks. Fixed at construction.
    pub fn len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True iff B is empty and A pops in non-decreasing order.
    pub fn is_solved(&self) -> bool {
        self.b.is_empty() && self.a.is_ordered()
    }

    /// Record `mv`, then perform it.
    pub fn apply(&mut self, mv: Move) {
        self.log.record(mv);
        let changed = match mv {
            Move::Sa => self.a.swap_top(),
            Move::Sb => self.b.swap_top(),
            Move::Ss => either(self.a.swap_top(), self.b.swap_top()),
            Move::Pa => transfer(&mut self.b, &mut self.a),
            Move::Pb => transfer(&mut self.a, &mut self.b),
            Move::Ra => self.a.rotate_up(),
            Move::Rb => self.b.rotate_up(),
            Move::Rr => either(self.a.rotate_up(), self.b.rotate_up()),
            Move::Rra => self.a.rotate_down(),
            Move::Rrb => self.b.rotate_down(),
            Move::Rrr => either(self.a.rotate_down(), self.b.rotate_down()),
        };
        trace!(
            mv = %mv,
            changed,
            on_a = mv.touches_a(),
            on_b = mv.touches_b(),
            count = self.log.len(),
            "applied move"
        );
    }

    pub fn apply_all(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.apply(mv);
        }
    }

    pub fn sa(&mut self) {
        self.apply(Move::Sa);
    }

    pub fn sb(&mut self) {
        self.apply(Move::Sb);
    }

    pub fn ss(&mut self) {
        self.apply(Move::Ss);
    }

    pub fn pa(&mut self) {
        self.apply(Move::Pa);
    }

    pub fn pb(&mut self) {
        self.apply(Move::Pb);
    }

    pub fn ra(&mut self) {
        self.apply(Move::Ra);
    }

    pub fn rb(&mut self) {
        self.apply(Move::Rb);
    }

    pub fn rr(&mut self) {
        self.apply(Move::Rr);
    }

    pub fn rra(&mut self) {
        self.apply(Move::Rra);
    }

    pub fn rrb(&mut self) {
        self.apply(Move::Rrb);
    }

    pub fn rrr(&mut self) {
        self.apply(Move::Rrr);
    }
}

// Both halves are evaluated before this is called.
fn either(a_changed: bool, b_changed: bool) -> bool {
    a_changed || b_changed
}

fn transfer(from: &mut Stack, to: &mut Stack) -> bool {
    match from.pop() {
        Some(value) => {
            to.push(value);
            true
        }
        None => false,
    }
}

impl From<Vec<i32>> for PushSwap {
    fn from(initial: Vec<i32>) -> Self {
        Self::new(&initial)
    }
}

impl FromIterator<i32> for PushSwap {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            a: Stack::from_top_first(iter),
            b: Stack::new(),
            log: MoveLog::new(),
        }
    }
}
