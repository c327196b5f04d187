//! The built-in store.
//!
//! Used when no world file is configured. The layout:
//!
//! ```text
//! parking lot <-> main entrance -> produce aisle <-> bakery
//!                       ^              |
//!                       |              v
//!                       +---------- checkout
//! ```
//!
//! Shoppers cannot walk in through the checkout lanes, so the entrance does
//! not lead to the checkout directly.

/// Number of produce names in [`DEFAULT_STORE`].
pub const DEFAULT_PRODUCE_COUNT: usize = 12;

/// The default store, in seed TOML.
pub const DEFAULT_STORE: &str = r#"
start = "main entrance"

produce = [
    "apples",
    "bananas",
    "oranges",
    "grapes",
    "strawberries",
    "tomatoes",
    "lettuce",
    "carrots",
    "potatoes",
    "onions",
    "peppers",
    "cucumbers",
]

# Items

[[items]]
name = "small cart"
synonyms = ["cart", "shopping cart", "trolley", "carts"]
description = "A small shopping cart. One wheel squeaks and pulls to the left."
takeable = true
role = "cart"

[[items]]
name = "shopping list"
synonyms = ["list", "grocery list", "note"]
description = "A crumpled shopping list in handwriting you almost recognize."
takeable = true
role = "shopping-list"

[[items]]
name = "register"
synonyms = ["cash register", "till", "counter"]
description = "A register with a bored cashier behind it. It is bolted to the counter."
takeable = false
role = "register"

[[items]]
name = "welcome mat"
synonyms = ["mat", "doormat"]
description = "A rubber mat that says WELCOME in faded letters."

[[items]]
name = "sale sign"
synonyms = ["sign", "poster"]
description = "A hand-lettered sign: EVERYTHING FRESH, NOTHING ON SALE."

[[items]]
name = "free sample"
synonyms = ["sample", "samples"]
description = "A toothpick stuck in a cube of something that was once bread."
takeable = true

[[items]]
name = "shopping basket"
synonyms = ["basket", "baskets"]
description = "An abandoned basket with a broken handle."
takeable = true

# Locations

[[locations]]
name = "main entrance"
synonyms = ["entrance", "front door", "door", "doors", "front", "lobby"]
description = """
You are standing at the main entrance of the grocery store. Automatic doors \
hiss behind you. A row of small carts waits by the wall and someone has left \
a shopping list on top of them. The produce aisle is straight ahead and the \
parking lot is behind you."""
items = ["welcome mat", "small cart", "shopping list"]
exits = ["produce aisle", "parking lot"]

[[locations]]
name = "produce aisle"
synonyms = ["produce", "produce section", "aisle", "fruit", "vegetables", "veggies"]
description = """
Misters hiss over pyramids of fruit and vegetables. You see apples, bananas, \
oranges, grapes, strawberries, tomatoes, lettuce, carrots, potatoes, onions, \
peppers and cucumbers. The bakery smells wonderful to one side and the \
checkout lanes are further on."""
items = [
    "sale sign",
    "apples",
    "bananas",
    "oranges",
    "grapes",
    "strawberries",
    "tomatoes",
    "lettuce",
    "carrots",
    "potatoes",
    "onions",
    "peppers",
    "cucumbers",
]
exits = ["main entrance", "bakery", "checkout"]

[[locations]]
name = "bakery"
synonyms = ["bakery section", "bread"]
description = """
Shelves of bread line the wall. A tray of free samples sits on the counter, \
untouched for what looks like days. The produce aisle is back the way you came."""
items = ["free sample"]
exits = ["produce aisle"]

[[locations]]
name = "checkout"
synonyms = ["checkout lane", "checkout lanes", "checkout counter", "cashier", "lanes"]
description = """
A single register is open. The cashier looks up at you without much interest. \
You could pay here. The main entrance is past the lanes and the produce aisle \
is behind you."""
items = ["register"]
exits = ["produce aisle", "main entrance"]

[[locations]]
name = "parking lot"
synonyms = ["parking", "car park", "lot", "outside"]
description = """
Rows of cars bake in the sun. Someone has left a shopping basket next to a \
lamp post. The main entrance is back across the lot."""
items = ["shopping basket"]
exits = ["main entrance"]
"#;
