//! Built-in store tests.

use trolley_world::{Catalog, ItemRole};

fn store() -> Catalog {
    Catalog::default_store().unwrap()
}

#[test]
fn store_starts_at_entrance() {
    assert_eq!(store().start(), "main entrance");
}

#[test]
fn every_exit_leads_somewhere_known() {
    let store = store();
    for location in store.locations().iter() {
        for exit in location.exits() {
            assert!(store.locations().exists(exit), "{exit} is missing");
        }
    }
}

#[test]
fn checkout_is_reachable_from_produce_aisle() {
    let store = store();
    let locations = store.locations();
    assert!(locations.is_adjacent("produce aisle", "checkout").unwrap());
    assert!(locations.is_adjacent("aisle", "lanes").unwrap());
    assert!(!locations.is_adjacent("bakery", "checkout").unwrap());
}

#[test]
fn all_produce_is_stocked_in_the_aisle() {
    let store = store();
    let aisle = store.locations().get("produce aisle").unwrap();
    for produce in store.produce().names() {
        assert!(aisle.has_item(produce), "{produce} is not stocked");
    }
}

#[test]
fn one_cart_one_list_one_register() {
    let store = store();
    assert_eq!(store.role_item(ItemRole::Cart).unwrap(), "small cart");
    assert_eq!(store.role_item(ItemRole::ShoppingList).unwrap(), "shopping list");
    let register = store.items().get("till").unwrap();
    assert_eq!(register.role(), ItemRole::Register);
    assert!(!register.is_takeable());
}

#[test]
fn lists_and_carts_start_empty() {
    let store = store();
    assert!(store.items().get("cart").unwrap().is_empty());
    assert!(store.items().get("list").unwrap().is_empty());
}

#[test]
fn unknown_names_are_not_found() {
    let store = store();
    assert!(store.items().get("unicorn").unwrap_err().is_not_found());
    assert!(store.locations().get("moon").unwrap_err().is_not_found());
    assert!(store.items().describe("unicorn").is_err());
    assert!(store.locations().describe_location("moon").is_err());
}
