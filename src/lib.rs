//! # brace-balance
//!
//! Curly-brace balance checking for templated text fragments.
//!
//! This crate answers one question about an input string: are its `{`/`}`
//! delimiters balanced, and if not, which brace broke the nesting first? It
//! is a small embeddable primitive for validating brace-delimited text
//! (templated strings, command fragments) before handing it to a real
//! parser.
//!
//! Two scanners implement the same contract and may be used interchangeably:
//!
//! - [`balance()`] - stack-based reference implementation, O(depth)
//!   auxiliary space
//! - [`fast_balance()`] - counter-based implementation, O(1) auxiliary space
//!   and allocation-free
//!
//! Both return the *brace-position index* of the first unbalanced brace, or
//! `None` when the input is balanced. The index counts braces only: each
//! `{` or `}` consumes one index position and every other character consumes
//! none, so the result is an ordinal among the input's braces, not a
//! character offset.
//!
//! ## Module Organization
//!
//! - [`mod@balance`] - stack-based scanning
//! - [`fast`] - counter-based scanning
//! - [`stack`] - the position stack used by the stack-based scanner
//!
//! ## Quick Start
//!
//! ```
//! use brace_balance::{balance, fast_balance};
//!
//! // Balanced input; non-brace characters are skipped
//! assert_eq!(balance("valid {} case"), None);
//!
//! // The `{` before "an" is brace #2 (zero-indexed, braces only) and is
//! // never closed
//! assert_eq!(balance("{be}{an"), Some(2));
//!
//! // A closing brace with nothing to match ends the scan at its own index
//! assert_eq!(balance("}But"), Some(0));
//!
//! // Both scanners agree on every input
//! assert_eq!(fast_balance("{be}{an"), balance("{be}{an"));
//! ```
//!
//! ## Features
//!
//! - `std` (default) - std library support. Disable for `no_std` builds;
//!   the stack-based scanner still requires `alloc`, the counter-based
//!   scanner requires neither.

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

// =============================================================================
// Core modules
// =============================================================================

/// Stack-based balance scanning.
pub mod balance;

/// Counter-based balance scanning in constant auxiliary space.
pub mod fast;

/// Position stack used by the stack-based scanner.
pub mod stack;

// =============================================================================
// Public re-exports
// =============================================================================

pub use balance::balance;
pub use fast::fast_balance;
pub use stack::BraceStack;
