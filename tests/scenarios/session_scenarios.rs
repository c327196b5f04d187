//! Scripted trips against a session.

use trolley_engine::{Ending, Outcome};
use trolley_foundation::Refusal;
use trolley_runtime::{GameConfig, Session};

fn session(seed: u64) -> Session {
    Session::from_config(&GameConfig::default().with_seed(seed)).unwrap()
}

fn wanted(session: &Session) -> Vec<String> {
    session
        .state()
        .catalog()
        .items()
        .get("shopping list")
        .unwrap()
        .contents()
        .to_vec()
}

#[test]
fn first_moves_in_the_store() {
    let mut session = session(17);
    let opening = session.opening().unwrap();
    assert!(opening.starts_with("You are standing at the main entrance"));

    let moved = session.handle("go to produce aisle").unwrap();
    assert_eq!(session.state().player().current_location, "produce aisle");
    assert_eq!(moved.messages[0], "You make your way to the produce aisle.");

    let refused = session.handle("take tomatoes").unwrap();
    assert_eq!(refused.text(), Refusal::NeedCart.to_string());
    assert!(session.state().player().cart.is_none());
}

#[test]
fn honest_shopper_checks_out() {
    let mut session = session(17);
    for line in ["get the cart", "get cart", "take list", "go produce"] {
        session.handle(line).unwrap();
    }
    for produce in wanted(&session) {
        let turn = session.handle(&format!("take {produce}")).unwrap();
        assert_eq!(turn.text(), format!("You put the {produce} in your cart."));
    }
    session.handle("go to checkout").unwrap();

    let paid = session.handle("pay").unwrap();
    assert_eq!(paid.outcome, Outcome::Continue);
    assert!(session.state().player().has_receipt);

    let left = session.handle("leave").unwrap();
    assert_eq!(left.ending(), Some(Ending::Checkout));
    assert_eq!(Ending::Checkout.exit_code(), 0);
}

#[test]
fn impatient_shopper_walks_out() {
    let mut session = session(17);
    session.handle("take cart").unwrap();
    session.handle("take list").unwrap();
    session.handle("go to produce aisle").unwrap();
    session.handle("go to checkout").unwrap();

    let refused = session.handle("pay").unwrap();
    let first = wanted(&session)[0].clone();
    assert_eq!(
        refused.text(),
        Refusal::MissingFromCart { produce: first }.to_string()
    );

    let left = session.handle("leave").unwrap();
    assert_eq!(left.ending(), Some(Ending::Walkout));
    assert!(!session.state().player().has_receipt);
}

#[test]
fn custom_store_from_world_file() {
    use std::io::Write;

    let mut world = tempfile::NamedTempFile::new().unwrap();
    world
        .write_all(
            br#"
start = "kiosk"
produce = ["plums"]

[[items]]
name = "bag"
synonyms = ["cart"]
description = "A paper bag."
takeable = true
role = "cart"

[[items]]
name = "receipt roll"
synonyms = ["list"]
description = "Someone wrote on the back."
takeable = true
role = "shopping-list"

[[items]]
name = "cash box"
description = "A tin cash box."
role = "register"

[[locations]]
name = "kiosk"
description = "A kiosk with one crate of plums."
items = ["bag", "receipt roll", "cash box", "plums"]
"#,
        )
        .unwrap();

    let config = GameConfig {
        list_length: 1,
        ..GameConfig::default().with_seed(0).with_world(world.path())
    };
    let mut session = Session::from_config(&config).unwrap();
    for line in ["take cart", "take list", "take plums", "pay", "leave"] {
        session.handle(line).unwrap();
    }
    assert_eq!(session.state().ending(), Some(Ending::Checkout));
}

#[test]
fn list_longer_than_store_fails_to_start() {
    let config = GameConfig {
        list_length: 50,
        ..GameConfig::default()
    };
    assert!(Session::from_config(&config).is_err());
}
