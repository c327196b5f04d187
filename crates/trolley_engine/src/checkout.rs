//! Shopping list verification at the register.

use trolley_foundation::Result;
use trolley_world::Item;

/// Finds the first shopping-list entry the cart does not hold.
///
/// Stops at the first gap. Returns `None` when every entry is in the cart;
/// extra produce in the cart is fine.
///
/// # Errors
///
/// Returns an invariant violation if the cart's bookkeeping is corrupt.
pub fn first_missing<'a>(list: &'a Item, cart: &Item) -> Result<Option<&'a str>> {
    for wanted in list.contents() {
        if !cart.has(wanted)? {
            return Ok(Some(wanted.as_str()));
        }
    }
    Ok(None)
}
