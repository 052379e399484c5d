//! # Cart
//!
//! The shopping cart container and its operations.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                              │
//! │                                                                 │
//! │  Host Action              Operation           State Change      │
//! │  ───────────              ─────────           ────────────      │
//! │                                                                 │
//! │  Click Product ─────────► add(input) ───────► push / merge      │
//! │                                                                 │
//! │  Click Remove ──────────► remove(sel) ──────► delete (no-op     │
//! │                                               if absent)        │
//! │                                                                 │
//! │  View Cart ─────────────► all() ────────────► (read only)       │
//! │                                                                 │
//! │  Line Lookup ───────────► get(sel) / has(sel) (read only)       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! None needed: a `Cart` is a plain value with `&mut self` mutation.
//! Hosts that share one cart across concurrent callers wrap it
//! themselves (`Mutex<Cart>` or similar); the cart provides no internal
//! locking, no async, and never blocks.

use tracing::debug;

use crate::idgen::{TimeUuidSource, UuidSource};
use crate::money::Money;
use crate::types::{CartItem, CartItemInput, CartSnapshot, Selector};

/// The shopping cart.
///
/// An ordered collection of [`CartItem`], keyed logically by product
/// `id` (at most one live line per id), in insertion order.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same id merges quantities)
/// - Each item's `sub_total` always equals `price × quantity`
/// - Each item's `uuid` is assigned once and never reassigned
///
/// ## UUID Injection
/// The second type parameter is the uuid-minting capability; it defaults
/// to the production [`TimeUuidSource`], and tests inject a
/// deterministic source via [`Cart::with_uuid_source`].
#[derive(Debug, Clone)]
pub struct Cart<S: UuidSource = TimeUuidSource> {
    items: Vec<CartItem>,
    uuid_source: S,
}

impl Cart {
    /// Creates a new empty cart with the production uuid source.
    pub fn new() -> Self {
        Cart::with_uuid_source(TimeUuidSource::new())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

impl<S: UuidSource> Cart<S> {
    /// Creates a new empty cart minting item uuids from the given source.
    pub fn with_uuid_source(uuid_source: S) -> Self {
        Cart {
            items: Vec::new(),
            uuid_source,
        }
    }

    /// Adds an item to the cart, merging with an existing line.
    ///
    /// ## Behavior
    /// - Id not in cart: a new line is created with a fresh uuid and
    ///   `sub_total = price × quantity`, appended after existing lines
    /// - Id already in cart: the input's quantity accumulates into the
    ///   existing line and its sub-total is recomputed; the stored
    ///   `name`/`price` are kept, the input's are discarded
    ///
    /// No validation is performed: zero and negative quantities or
    /// prices are accepted and flow straight into the arithmetic.
    pub fn add(&mut self, input: CartItemInput) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == input.id) {
            item.merge_quantity(input.quantity);
            debug!(
                id = item.id,
                quantity = item.quantity,
                sub_total = %item.sub_total,
                "merged quantity into existing cart line"
            );
            return;
        }

        let item = CartItem::from_input(input, self.uuid_source.generate());
        debug!(id = item.id, uuid = %item.uuid, "added new cart line");
        self.items.push(item);
    }

    /// Removes the item matching the selector.
    ///
    /// A silent no-op when nothing matches; removal never raises.
    pub fn remove(&mut self, selector: &Selector) {
        let before = self.items.len();
        self.items.retain(|item| !selector.matches(item));

        if self.items.len() < before {
            debug!(?selector, "removed cart line");
        }
    }

    /// Returns the item matching the selector, or `None` when absent.
    pub fn get(&self, selector: &Selector) -> Option<&CartItem> {
        self.items.iter().find(|item| selector.matches(item))
    }

    /// Checks whether an item matching the selector exists.
    pub fn has(&self, selector: &Selector) -> bool {
        self.get(selector).is_some()
    }

    /// Returns the number of distinct lines currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Calculates the cart total: the sum of `price × quantity` over all
    /// lines. Recomputed on every call, never cached.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .map(|item| item.price.multiply_quantity(item.quantity))
            .sum()
    }

    /// Takes a consistent snapshot: every line in insertion order plus
    /// the total, computed together in one call.
    pub fn all(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total: self.total(),
        }
    }

    /// Drops every line from the cart.
    ///
    /// Used by checkout flows after a sale is finalized or cancelled.
    pub fn clear(&mut self) {
        debug!(lines = self.items.len(), "cleared cart");
        self.items.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
