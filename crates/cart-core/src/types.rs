//! # Data Shapes
//!
//! The data types exchanged between a host application and the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Cart Data Shapes                         │
//! │                                                                 │
//! │  ┌─────────────────┐      ┌─────────────────┐                   │
//! │  │  CartItemInput  │ add  │    CartItem     │                   │
//! │  │  ─────────────  │ ───► │  ─────────────  │                   │
//! │  │  id             │      │  id, name,      │                   │
//! │  │  name           │      │  price, qty     │                   │
//! │  │  price          │      │  + uuid (v1)    │                   │
//! │  │  quantity       │      │  + sub_total    │                   │
//! │  └─────────────────┘      └─────────────────┘                   │
//! │                                                                 │
//! │  ┌─────────────────┐      ┌─────────────────┐                   │
//! │  │    Selector     │      │  CartSnapshot   │                   │
//! │  │  ─────────────  │      │  ─────────────  │                   │
//! │  │  ById(i64)      │      │  items: Vec<_>  │                   │
//! │  │  ByUuid(Uuid)   │      │  total: Money   │                   │
//! │  └─────────────────┘      └─────────────────┘                   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every stored item has two keys:
//! - `id`: the caller-assigned product identifier; adds with the same
//!   `id` merge into one line
//! - `uuid`: a version-1 UUID minted by the cart at creation, immutable
//!   for the lifetime of the item, never reassigned by merges

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SelectorError;
use crate::money::Money;

// =============================================================================
// Inputs
// =============================================================================

/// The caller-supplied fields for an `add` operation.
///
/// No uuid, no sub-total: both are owned by the cart. The cart performs
/// no validation on these fields; zero or negative quantities and prices
/// flow straight into the arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemInput {
    /// Caller-assigned product identifier. Repeated adds with the same
    /// id merge quantities into the existing line.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Unit price in cents.
    pub price: Money,

    /// Quantity being added.
    pub quantity: i64,
}

// =============================================================================
// Stored Items
// =============================================================================

/// A line entry stored in the cart.
///
/// ## Merge Policy
/// When an `add` merges into an existing line, only `quantity` (and the
/// derived `sub_total`) change. The stored `name` and `price` are NOT
/// overwritten by the incoming input's values, so the price in effect is
/// the one from the first add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Caller-assigned product identifier (at most one live line per id).
    pub id: i64,

    /// Display name, frozen at first add.
    pub name: String,

    /// Unit price in cents, frozen at first add.
    pub price: Money,

    /// Accumulated quantity across merges.
    pub quantity: i64,

    /// Derived line total, kept equal to `price × quantity` at all times.
    /// Serialized as `subTotal`.
    pub sub_total: Money,

    /// Version-1 (time-ordered) UUID assigned once at creation.
    pub uuid: Uuid,
}

impl CartItem {
    /// Creates a stored item from caller input and a freshly minted uuid.
    pub(crate) fn from_input(input: CartItemInput, uuid: Uuid) -> Self {
        let sub_total = input.price.multiply_quantity(input.quantity);
        CartItem {
            id: input.id,
            name: input.name,
            price: input.price,
            quantity: input.quantity,
            sub_total,
            uuid,
        }
    }

    /// Accumulates quantity from a merged add and recomputes the
    /// sub-total from the stored price.
    pub(crate) fn merge_quantity(&mut self, quantity: i64) {
        self.quantity += quantity;
        self.sub_total = self.price.multiply_quantity(self.quantity);
    }
}

// =============================================================================
// Selectors
// =============================================================================

/// A lookup key for `get`/`has`/`remove`: by product id or by item uuid.
///
/// Modeled as a tagged union with exactly two variants instead of a pair
/// of optional arguments, so a malformed "both" or "neither" lookup is
/// unrepresentable once a value exists. Use [`Selector::from_parts`] at
/// boundaries that receive the two keys as optionals (e.g. deserialized
/// requests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Selector {
    /// Select the line with this caller-assigned product id.
    ById(i64),

    /// Select the line with this cart-assigned item uuid.
    ByUuid(Uuid),
}

impl Selector {
    /// Builds a selector from optional parts, rejecting ambiguous input.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Selector, SelectorError};
    ///
    /// assert_eq!(Selector::from_parts(Some(7), None), Ok(Selector::ById(7)));
    /// assert_eq!(Selector::from_parts(None, None), Err(SelectorError::Missing));
    /// ```
    ///
    /// ## Errors
    /// - [`SelectorError::Ambiguous`] if both parts are supplied
    /// - [`SelectorError::Missing`] if neither is
    pub fn from_parts(id: Option<i64>, uuid: Option<Uuid>) -> Result<Self, SelectorError> {
        match (id, uuid) {
            (Some(_), Some(_)) => Err(SelectorError::Ambiguous),
            (Some(id), None) => Ok(Selector::ById(id)),
            (None, Some(uuid)) => Ok(Selector::ByUuid(uuid)),
            (None, None) => Err(SelectorError::Missing),
        }
    }

    /// Checks whether this selector identifies the given item.
    pub fn matches(&self, item: &CartItem) -> bool {
        match self {
            Selector::ById(id) => item.id == *id,
            Selector::ByUuid(uuid) => item.uuid == *uuid,
        }
    }
}

// =============================================================================
// Snapshot View
// =============================================================================

/// A consistent view of the cart: items in insertion order plus the
/// aggregate total, computed together in one call.
///
/// This is the shape handed to host UIs for display (serialized with
/// camelCase field names, e.g. `subTotal` on each item).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Every currently held item, in the order first added.
    pub items: Vec<CartItem>,

    /// Sum of all items' sub-totals at the moment of the snapshot.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn input(id: i64, price_cents: i64, quantity: i64) -> CartItemInput {
        CartItemInput {
            id,
            name: format!("Item {}", id),
            price: Money::from_cents(price_cents),
            quantity,
        }
    }

    #[test]
    fn test_from_input_computes_sub_total() {
        let uuid = Uuid::now_v1(&[0, 1, 2, 3, 4, 5]);
        let item = CartItem::from_input(input(1, 999, 3), uuid);

        assert_eq!(item.sub_total, Money::from_cents(2997));
        assert_eq!(item.uuid, uuid);
    }

    #[test]
    fn test_merge_quantity_recomputes_sub_total() {
        let uuid = Uuid::now_v1(&[0, 1, 2, 3, 4, 5]);
        let mut item = CartItem::from_input(input(1, 1000, 1), uuid);

        item.merge_quantity(2);

        assert_eq!(item.quantity, 3);
        assert_eq!(item.sub_total, Money::from_cents(3000));
        assert_eq!(item.uuid, uuid); // merge never touches the uuid
    }

    #[test]
    fn test_selector_from_parts() {
        let uuid = Uuid::now_v1(&[0, 1, 2, 3, 4, 5]);

        assert_eq!(Selector::from_parts(Some(7), None), Ok(Selector::ById(7)));
        assert_eq!(
            Selector::from_parts(None, Some(uuid)),
            Ok(Selector::ByUuid(uuid))
        );
        assert_eq!(
            Selector::from_parts(Some(7), Some(uuid)),
            Err(SelectorError::Ambiguous)
        );
        assert_eq!(Selector::from_parts(None, None), Err(SelectorError::Missing));
    }

    #[test]
    fn test_selector_matches() {
        let uuid = Uuid::now_v1(&[0, 1, 2, 3, 4, 5]);
        let item = CartItem::from_input(input(42, 100, 1), uuid);

        assert!(Selector::ById(42).matches(&item));
        assert!(!Selector::ById(43).matches(&item));
        assert!(Selector::ByUuid(uuid).matches(&item));
        assert!(!Selector::ByUuid(Uuid::nil()).matches(&item));
    }

    #[test]
    fn test_item_serializes_camel_case() {
        let uuid = Uuid::nil();
        let item = CartItem::from_input(input(1, 999, 2), uuid);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["subTotal"], 1998);
        assert_eq!(json["price"], 999);
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["uuid"], "00000000-0000-0000-0000-000000000000");
    }
}
