//! # Error Types
//!
//! Typed errors for cart-core.
//!
//! The error surface is deliberately tiny. Cart operations never fail:
//! "not found" is signaled with `bool`/`Option` returns or a silent
//! no-op, and numeric input is accepted as-is (no validation). The only
//! thing that can be rejected is a malformed selector, and that is
//! rejected at construction time so every [`Selector`](crate::Selector)
//! value in existence is well-formed.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to a user-facing message

use thiserror::Error;

/// Errors raised when building a [`Selector`](crate::Selector) from
/// optional parts.
///
/// A selector identifies a cart item by product id **or** by item uuid.
/// Callers must supply exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Both an id and a uuid were supplied; the lookup key is ambiguous.
    #[error("selector must use either an id or a uuid, not both")]
    Ambiguous,

    /// Neither an id nor a uuid was supplied.
    #[error("selector requires an id or a uuid")]
    Missing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SelectorError::Ambiguous.to_string(),
            "selector must use either an id or a uuid, not both"
        );
        assert_eq!(
            SelectorError::Missing.to_string(),
            "selector requires an id or a uuid"
        );
    }
}
