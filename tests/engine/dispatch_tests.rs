//! Movement and acquisition rules.

use trolley_engine::{Dispatcher, GameOptions, GameState, Outcome, Turn};
use trolley_foundation::Refusal;
use trolley_parser::Command;
use trolley_world::Catalog;

fn game(seed: u64) -> (Dispatcher, GameState) {
    let catalog = Catalog::default_store().unwrap();
    let state = GameState::new(catalog, &GameOptions::default().with_seed(seed)).unwrap();
    (Dispatcher::new(), state)
}

fn run(d: &mut Dispatcher, state: &mut GameState, line: &str) -> Turn {
    d.run_line(state, line).unwrap()
}

fn cart_contents(state: &GameState) -> Vec<String> {
    state.cart().unwrap().map(|c| c.contents().to_vec()).unwrap_or_default()
}

#[test]
fn dispatch_takes_a_parsed_command() {
    let (mut d, mut state) = game(1);
    let turn = d.dispatch(&mut state, &Command::new("go to", "produce aisle")).unwrap();
    assert_eq!(turn.outcome, Outcome::Continue);
    assert_eq!(state.player().current_location, "produce aisle");
}

#[test]
fn moves_follow_exits_only() {
    let (mut d, mut state) = game(1);
    for (line, expected) in [
        ("go bakery", "main entrance"),
        ("go parking lot", "parking lot"),
        ("go produce aisle", "parking lot"),
        ("go to entrance", "main entrance"),
        ("go to produce", "produce aisle"),
        ("go to bakery", "bakery"),
        ("go to checkout", "bakery"),
    ] {
        run(&mut d, &mut state, line);
        assert_eq!(state.player().current_location, expected, "after {line}");
    }
}

#[test]
fn bare_go_asks_where() {
    let (mut d, mut state) = game(1);
    assert_eq!(run(&mut d, &mut state, "go").text(), "Go where?");
}

#[test]
fn produce_without_cart_never_touches_a_cart() {
    let (mut d, mut state) = game(1);
    run(&mut d, &mut state, "go to produce aisle");
    let turn = run(&mut d, &mut state, "take apples");
    assert_eq!(turn.text(), Refusal::NeedCart.to_string());
    assert!(!state.player().has_cart());
    assert!(state.catalog().items().get("cart").unwrap().is_empty());
}

#[test]
fn produce_is_appended_once_per_take() {
    let (mut d, mut state) = game(1);
    run(&mut d, &mut state, "get cart");
    run(&mut d, &mut state, "go to produce aisle");

    run(&mut d, &mut state, "take apples");
    assert_eq!(cart_contents(&state), ["apples"]);
    run(&mut d, &mut state, "TAKE Apples");
    assert_eq!(cart_contents(&state), ["apples", "apples"]);
    assert_eq!(state.cart().unwrap().unwrap().count("apples"), 2);
}

#[test]
fn produce_must_be_stocked_here() {
    let (mut d, mut state) = game(1);
    run(&mut d, &mut state, "take cart");
    let turn = run(&mut d, &mut state, "take apples");
    assert_eq!(
        turn.text(),
        Refusal::ProduceNotHere {
            produce: "apples".into()
        }
        .to_string()
    );
    assert!(cart_contents(&state).is_empty());
}

#[test]
fn taken_cart_follows_the_player() {
    let (mut d, mut state) = game(1);
    run(&mut d, &mut state, "take trolley");
    assert_eq!(state.player().cart.as_deref(), Some("small cart"));
    assert!(
        !state
            .catalog()
            .locations()
            .get("main entrance")
            .unwrap()
            .has_item("small cart")
    );

    run(&mut d, &mut state, "go to parking lot");
    assert!(state.is_item_present_at("parking lot", "cart").unwrap());
    let turn = run(&mut d, &mut state, "examine cart");
    assert_eq!(turn.text(), "Your cart is empty.");
}

#[test]
fn examine_before_taking_asks_to_take() {
    let (mut d, mut state) = game(1);
    assert_eq!(
        run(&mut d, &mut state, "examine list").text(),
        Refusal::NeedList.to_string()
    );
    assert_eq!(
        run(&mut d, &mut state, "examine cart").text(),
        Refusal::NeedCart.to_string()
    );
}

#[test]
fn fixtures_cannot_be_taken() {
    let (mut d, mut state) = game(1);
    run(&mut d, &mut state, "go produce aisle");
    run(&mut d, &mut state, "go checkout");
    let turn = run(&mut d, &mut state, "take register");
    assert!(turn.text().starts_with("You can't take the register."));
    assert!(turn.text().contains("bolted to the counter"));
}

#[test]
fn items_elsewhere_are_not_here() {
    let (mut d, mut state) = game(1);
    let turn = run(&mut d, &mut state, "examine sample");
    assert_eq!(
        turn.text(),
        Refusal::NotHere {
            item: "free sample".into()
        }
        .to_string()
    );
}

#[test]
fn takeable_clutter_is_put_back() {
    let (mut d, mut state) = game(1);
    run(&mut d, &mut state, "go parking lot");
    let turn = run(&mut d, &mut state, "take basket");
    assert!(turn.text().contains("put it back"));
    assert!(
        state
            .catalog()
            .locations()
            .get("parking lot")
            .unwrap()
            .has_item("shopping basket")
    );
}

#[test]
fn take_inventory_lists_the_cart() {
    let (mut d, mut state) = game(1);
    assert_eq!(
        run(&mut d, &mut state, "take inventory").text(),
        Refusal::NeedCart.to_string()
    );
    run(&mut d, &mut state, "take cart");
    assert_eq!(run(&mut d, &mut state, "take inventory").text(), "Your cart is empty.");
}

#[test]
fn inventory_verb_lists_everything() {
    let (mut d, mut state) = game(1);
    assert_eq!(run(&mut d, &mut state, "i").text(), "You aren't carrying anything.");
    run(&mut d, &mut state, "take cart");
    run(&mut d, &mut state, "take list");
    let turn = run(&mut d, &mut state, "inventory");
    assert!(turn.text().contains("an empty small cart"));
    assert!(turn.text().contains("a shopping list"));
}

#[test]
fn drop_is_refused_and_harmless() {
    let (mut d, mut state) = game(1);
    run(&mut d, &mut state, "take cart");
    let turn = run(&mut d, &mut state, "drop cart");
    assert_eq!(turn.text(), trolley_engine::dispatch::DROP_UNSUPPORTED);
    assert!(state.player().has_cart());
}

#[test]
fn unknown_targets_are_reported() {
    let (mut d, mut state) = game(1);
    assert!(run(&mut d, &mut state, "take unicorn").text().contains("\"unicorn\""));
    assert_eq!(
        run(&mut d, &mut state, "examine unicorn").text(),
        "You don't see anything like that here."
    );
}

#[test]
fn examine_produce_is_flavor_only() {
    let (mut d, mut state) = game(1);
    let turn = run(&mut d, &mut state, "examine grapes");
    assert!(turn.text().starts_with("The grapes look fresh"));
    assert_eq!(state.player().current_location, "main entrance");
}

#[test]
fn help_lists_every_verb() {
    let (mut d, mut state) = game(1);
    let text = run(&mut d, &mut state, "help").text();
    for verb in ["look", "go to", "examine", "take", "drop", "pay", "leave"] {
        assert!(text.contains(verb), "help is missing {verb}");
    }
}
