//! A single integer stack.
//!
//! Backed by a `VecDeque` whose front is the top of the stack, so both
//! rotations are O(1). Every mutating operation reports whether it changed
//! anything; none of them panic on an empty or singleton stack.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Check whether a top-first sequence pops in ascending order.
///
/// Uses non-strict comparison, so equal neighbours are accepted. Sequences of
/// length 0 or 1 are always ordered.
///
/// # Example
///
/// ```rust
/// use pushswap::core::is_ordered;
///
/// assert!(is_ordered(&[]));
/// assert!(is_ordered(&[1, 2, 2, 3]));
/// assert!(!is_ordered(&[2, 1]));
/// ```
pub fn is_ordered(values: &[i32]) -> bool {
    pops_ascending(values.iter().copied())
}

fn pops_ascending(values: impl IntoIterator<Item = i32>) -> bool {
    let mut values = values.into_iter();
    let Some(mut upper) = values.next() else {
        return true;
    };
    for lower in values {
        if upper > lower {
            return false;
        }
        upper = lower;
    }
    true
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    items: VecDeque<i32>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from values listed top-first.
    pub fn from_top_first(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            items: values.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn peek(&self) -> Option<i32> {
        self.items.front().copied()
    }

    pub fn push(&mut self, value: i32) {
        self.items.push_front(value);
    }

    pub fn pop(&mut self) -> Option<i32> {
        self.items.pop_front()
    }

    /// Swap the two topmost elements.
    pub fn swap_top(&mut self) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        self.items.swap(0, 1);
        true
    }

    /// Move the top element to the bottom.
    pub fn rotate_up(&mut self) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        self.items.rotate_left(1);
        true
    }

    /// Move the bottom element to the top.
    pub fn rotate_down(&mut self) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        self.items.rotate_right(1);
        true
    }

    /// Independent copy of the contents, top first.
    pub fn to_vec(&self) -> Vec<i32> {
        self.items.iter().copied().collect()
    }

    pub fn is_ordered(&self) -> bool {
        pops_ascending(self.items.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_work_on_the_top() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.peek(), Some(2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn swap_top_needs_two_elements() {
        let mut empty = Stack::new();
        assert!(!empty.swap_top());

        let mut single = Stack::from_top_first([7]);
        assert!(!single.swap_top());
        assert_eq!(single.to_vec(), vec![7]);

        let mut stack = Stack::from_top_first([1, 2, 3]);
        assert!(stack.swap_top());
        assert_eq!(stack.to_vec(), vec![2, 1, 3]);
    }

    #[test]
    fn rotate_up_moves_top_to_bottom() {
        let mut stack = Stack::from_top_first([1, 2, 3]);
        assert!(stack.rotate_up());
        assert_eq!(stack.to_vec(), vec![2, 3, 1]);
    }

    #[test]
    fn rotate_down_moves_bottom_to_top() {
        let mut stack = Stack::from_top_first([1, 2, 3]);
        assert!(stack.rotate_down());
        assert_eq!(stack.to_vec(), vec![3, 1, 2]);
    }

    #[test]
    fn rotations_are_noops_below_two_elements() {
        let mut single = Stack::from_top_first([5]);
        assert!(!single.rotate_up());
        assert!(!single.rotate_down());
        assert_eq!(single.to_vec(), vec![5]);
    }

    #[test]
    fn ordering_is_non_strict() {
        assert!(Stack::new().is_ordered());
        assert!(Stack::from_top_first([42]).is_ordered());
        assert!(Stack::from_top_first([1, 1, 2]).is_ordered());
        assert!(!Stack::from_top_first([3, 2, 1]).is_ordered());
        assert!(is_ordered(&[-5, 0, 5]));
        assert!(!is_ordered(&[0, -1]));
    }

    #[test]
    fn method_and_free_function_agree() {
        let cases: [&[i32]; 6] = [&[], &[7], &[1, 1], &[2, 1], &[1, 3, 2], &[-4, 0, 0, 9]];
        for values in cases {
            let stack = Stack::from_top_first(values.iter().copied());
            assert_eq!(stack.is_ordered(), is_ordered(values), "{values:?}");
        }
    }

    #[test]
    fn rotated_stack_is_checked_in_pop_order() {
        // Rotation wraps the deque, so ordering must follow pop order, not storage.
        let mut stack = Stack::from_top_first([3, 1, 2]);
        stack.rotate_up();
        assert_eq!(stack.to_vec(), vec![1, 2, 3]);
        assert!(stack.is_ordered());
    }

    #[test]
    fn to_vec_is_a_copy() {
        let stack = Stack::from_top_first([1, 2]);
        let mut copy = stack.to_vec();
        copy.push(3);
        assert_eq!(stack.len(), 2);
    }
}
