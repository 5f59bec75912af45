//! Stack-based balance scanning.
//!
//! This is the readable reference implementation: it keeps every unmatched
//! opening brace's position on a [`BraceStack`](crate::stack::BraceStack) and
//! so uses auxiliary space proportional to the nesting depth. The
//! counter-based [`fast_balance`](crate::fast::fast_balance) produces
//! identical results in constant space.

use crate::stack::BraceStack;

/// Scans `input` and reports the first unbalanced curly brace.
///
/// Returns `None` when every `{` matches a later `}` and vice versa.
/// Otherwise returns the brace-position index of the offending brace: braces
/// are numbered left to right starting at zero, and non-brace characters do
/// not advance the numbering.
///
/// Unbalanced input takes one of two shapes. A closing brace with no open to
/// match ends the scan immediately at that brace's own index. Opening braces
/// still unmatched at end of input report the leftmost of them.
///
/// Runs in O(n) time over the input's code points and O(d) space where d is
/// the maximum nesting depth.
///
/// # Examples
///
/// ```
/// use brace_balance::balance;
///
/// assert_eq!(balance("{} balanced {{}}"), None);
/// assert_eq!(balance("{be}{an"), Some(2));
/// assert_eq!(balance("}But"), Some(0));
/// ```
pub fn balance(input: &str) -> Option<usize> {
    let mut stack = BraceStack::new();
    let mut brace_index = 0usize;

    for ch in input.chars() {
        match ch {
            '{' => {
                stack.push(brace_index);
                brace_index += 1;
            }
            '}' => {
                if stack.pop().is_none() {
                    // Orphan close: nothing left to match it.
                    return Some(brace_index);
                }
                brace_index += 1;
            }
            _ => {}
        }
    }

    // Empty stack means balanced (None); otherwise the bottom entry is the
    // leftmost open that never saw its close.
    stack.bottom()
}

// =============================================================================
// Tests
// =============================================================================
