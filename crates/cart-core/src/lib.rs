//! # cart-core: Pure Business Logic for an Embeddable Shopping Cart
//!
//! This crate is an in-memory shopping cart intended to be embedded in
//! e-commerce front-ends and checkout flows. It contains pure business
//! logic with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Host Application                             │
//! │    Search UI ──► Cart UI ──► Checkout ──► Receipt               │
//! └───────────────────────────┬─────────────────────────────────────┘
//! │                           │ direct calls (no IPC, no server)
//! ┌───────────────────────────▼─────────────────────────────────────┐
//! │                 ★ cart-core (THIS CRATE) ★                      │
//! │                                                                 │
//! │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │
//! │   │   types   │  │   money   │  │   cart    │  │   idgen   │   │
//! │   │ CartItem  │  │   Money   │  │   Cart    │  │ UuidSource│   │
//! │   │ Selector  │  │  cents    │  │  add/rm   │  │  v1 UUIDs │   │
//! │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │
//! │                                                                 │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - The [`Cart`] container and its operations
//! - [`types`] - Data shapes (CartItemInput, CartItem, Selector, snapshot)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`idgen`] - The version-1 UUID generation capability
//! - [`error`] - Typed errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is synchronous and runs to
//!    completion; no locking, no await, no external handles
//! 2. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 3. **No Hidden Errors**: "not found" is signaled with `bool`/`Option`
//!    or a silent no-op, never a panic or error value
//! 4. **Single Owner**: a `Cart` is owned by one caller; `&mut self`
//!    enforces exclusive mutation at compile time
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{Cart, CartItemInput, Money, Selector};
//!
//! let mut cart = Cart::new();
//! cart.add(CartItemInput {
//!     id: 123,
//!     name: "Item 1".to_string(),
//!     quantity: 3,
//!     price: Money::from_cents(999), // $9.99
//! });
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total(), Money::from_cents(2997));
//! assert!(cart.has(&Selector::ById(123)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod idgen;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cart_core::Cart` instead of
// `use cart_core::cart::Cart`

pub use cart::Cart;
pub use error::SelectorError;
pub use idgen::{TimeUuidSource, UuidSource};
pub use money::Money;
pub use types::{CartItem, CartItemInput, CartSnapshot, Selector};
