//! Name resolution properties over the built-in store.

use proptest::prelude::*;
use trolley_world::Catalog;

/// Re-spaces and re-cases a name the way a player might type it.
fn mangle(name: &str, upper: &[bool], pad: usize) -> String {
    let cased: Vec<String> = name
        .split(' ')
        .zip(upper.iter().cycle())
        .map(|(word, up)| if *up { word.to_uppercase() } else { word.to_string() })
        .collect();
    format!("{}{}{}", " ".repeat(pad), cased.join(&" ".repeat(pad + 1)), " ".repeat(pad))
}

#[test]
fn canonical_names_resolve_to_themselves() {
    let store = Catalog::default_store().unwrap();
    for name in store.items().names().canonical_names() {
        assert_eq!(store.items().resolve(name), Some(name));
    }
    for name in store.locations().names().canonical_names() {
        assert_eq!(store.locations().resolve(name), Some(name));
    }
}

#[test]
fn item_and_location_synonyms_are_separate_namespaces() {
    let store = Catalog::default_store().unwrap();
    assert!(store.items().resolve("produce aisle").is_none());
    assert!(store.locations().resolve("small cart").is_none());
}

proptest! {
    #[test]
    fn item_spellings_survive_mangling(
        index in 0usize..64,
        upper in prop::collection::vec(any::<bool>(), 1..4),
        pad in 0usize..3,
    ) {
        let store = Catalog::default_store().unwrap();
        let spellings: Vec<&str> = store.items().names().spellings().collect();
        let spelling = spellings[index % spellings.len()];
        let expected = store.items().resolve(spelling);
        prop_assert!(expected.is_some());
        prop_assert_eq!(store.items().resolve(&mangle(spelling, &upper, pad)), expected);
    }

    #[test]
    fn location_spellings_survive_mangling(
        index in 0usize..64,
        upper in prop::collection::vec(any::<bool>(), 1..4),
        pad in 0usize..3,
    ) {
        let store = Catalog::default_store().unwrap();
        let spellings: Vec<&str> = store.locations().names().spellings().collect();
        let spelling = spellings[index % spellings.len()];
        let expected = store.locations().resolve(spelling);
        prop_assert!(expected.is_some());
        prop_assert_eq!(store.locations().resolve(&mangle(spelling, &upper, pad)), expected);
    }

    #[test]
    fn produce_membership_ignores_case(index in 0usize..12, upper in any::<bool>()) {
        let store = Catalog::default_store().unwrap();
        let name = &store.produce().names()[index];
        let typed = if upper { name.to_uppercase() } else { name.clone() };
        prop_assert_eq!(store.produce().resolve(&typed), Some(name.as_str()));
    }
}
