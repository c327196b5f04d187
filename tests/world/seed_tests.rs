//! Seed file tests.

use std::io::Write;

use trolley_world::{Catalog, SeedData};

const CORNER_SHOP: &str = r#"
start = "shop floor"
produce = ["figs", "kale", "leeks"]

[[items]]
name = "basket"
synonyms = ["cart"]
description = "A wire basket."
takeable = true
role = "cart"

[[items]]
name = "note"
synonyms = ["list"]
description = "A note in pencil."
takeable = true
role = "shopping-list"

[[items]]
name = "till"
description = "An old till."
role = "register"

[[locations]]
name = "shop floor"
synonyms = ["floor"]
description = "One room, three crates."
items = ["basket", "note", "till", "figs", "kale", "leeks"]
exits = []
"#;

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CORNER_SHOP.as_bytes()).unwrap();

    let seed = SeedData::from_file(file.path()).unwrap();
    let catalog = Catalog::from_seed(&seed).unwrap();
    assert_eq!(catalog.start(), "shop floor");
    assert_eq!(catalog.produce().len(), 3);
    assert_eq!(catalog.items().resolve("cart"), Some("basket"));
}

#[test]
fn missing_file_is_config_error() {
    let err = SeedData::from_file(std::path::Path::new("/nonexistent/shop.toml")).unwrap_err();
    assert!(!err.is_recoverable());
}

#[test]
fn malformed_toml_is_rejected() {
    assert!(SeedData::from_toml("start = ").is_err());
}

fn rejects(edit: impl FnOnce(&mut SeedData), needle: &str) {
    let mut seed = SeedData::from_toml(CORNER_SHOP).unwrap();
    edit(&mut seed);
    let err = Catalog::from_seed(&seed).unwrap_err();
    assert!(format!("{err}").contains(needle), "{err}");
}

#[test]
fn dangling_exit_is_rejected() {
    rejects(|s| s.locations[0].exits.push("attic".into()), "attic");
}

#[test]
fn unknown_stock_is_rejected() {
    rejects(|s| s.locations[0].items.push("durian".into()), "durian");
}

#[test]
fn unknown_start_is_rejected() {
    rejects(|s| s.start = "roof".into(), "roof");
}

#[test]
fn second_cart_is_rejected() {
    rejects(
        |s| {
            let mut trolley = s.items[0].clone();
            trolley.name = "trolley".into();
            trolley.synonyms.clear();
            s.items.push(trolley);
        },
        "exactly one",
    );
}

#[test]
fn item_named_like_produce_is_rejected() {
    rejects(|s| s.items[2].name = "kale".into(), "names both the item kale and produce");
}

#[test]
fn item_synonym_named_like_produce_is_rejected() {
    rejects(
        |s| s.items[2].synonyms.push("leeks".into()),
        "\"leeks\" names both the item till and produce",
    );
}

#[test]
fn colliding_synonyms_are_rejected() {
    rejects(|s| s.items[1].synonyms.push("cart".into()), "cart");
}
