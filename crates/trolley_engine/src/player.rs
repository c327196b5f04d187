//! The shopper.

use trolley_parser::ActionSet;

/// Session progress. Mutated only by the dispatcher.
///
/// `cart` and `shopping_list` hold the canonical names of items that still
/// live in the catalog's item registry; holding the name is owning the item.
#[derive(Clone, Debug)]
pub struct Player {
    /// Canonical name of the current location.
    pub current_location: String,
    /// The cart, once taken.
    pub cart: Option<String>,
    /// The shopping list, once taken.
    pub shopping_list: Option<String>,
    /// Set by a successful `pay`.
    pub has_receipt: bool,
    /// Verbs this player may use.
    pub actions: ActionSet,
}

impl Player {
    /// Creates an empty-handed player at the given location.
    #[must_use]
    pub fn new(current_location: impl Into<String>, actions: ActionSet) -> Self {
        Self {
            current_location: current_location.into(),
            cart: None,
            shopping_list: None,
            has_receipt: false,
            actions,
        }
    }

    /// Returns true once a cart has been taken.
    #[must_use]
    pub const fn has_cart(&self) -> bool {
        self.cart.is_some()
    }

    /// Returns true once the shopping list has been taken.
    #[must_use]
    pub const fn has_list(&self) -> bool {
        self.shopping_list.is_some()
    }
}
