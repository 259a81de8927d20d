/// Core evaluation logic and context management.
///
/// Contains the evaluation entry points, the runtime context holding the
/// variable environment and the assignment order, and the result type.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements prefix `+` and `-`.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Implements `+`, `-` and `*` on unbounded integers.
pub mod binary;

/// Utility functions for evaluation.
///
/// Variable binding and lookup, and the helpers that evaluate operator nodes.
pub mod utils;
