//! Command dispatch.
//!
//! The [`Dispatcher`] resolves one parsed [`Command`] against a
//! [`GameState`] and reports what happened as a [`Turn`]. Unknown names and
//! failed preconditions surface as [`Refusal`]s inside the handlers and are
//! turned into player messages here, at the boundary. An invariant violation
//! aborts the command and is returned to the caller.

use tracing::{debug, info, warn};
use trolley_foundation::{Error, ErrorContext, ErrorKind, Refusal, Result, normalize};
use trolley_parser::{Action, Command, INVENTORY_KEYWORD, parse};
use trolley_world::ItemRole;

use crate::checkout;
use crate::outcome::{Ending, Outcome, Turn};
use crate::state::GameState;

/// Reply to `drop`, which this store does not allow.
pub const DROP_UNSUPPORTED: &str =
    "Store policy: once it's in your cart, it stays in your cart. You can't put things back.";

/// Reply to any command after the trip has ended.
pub const TRIP_OVER: &str = "Your shopping trip is over.";

/// Executes commands against game state.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    /// Messages produced during execution
    messages: Vec<String>,
}

impl Dispatcher {
    /// Creates a new dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets messages produced so far by the current command.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Takes the messages, leaving an empty vec.
    pub fn take_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }

    fn say(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// The text shown before the first command is read.
    ///
    /// # Errors
    ///
    /// Returns an invariant violation if the player is nowhere.
    pub fn opening(state: &GameState) -> Result<String> {
        Ok(state.current_location()?.description().to_string())
    }

    /// Parses and dispatches one line of input.
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::dispatch`].
    pub fn run_line(&mut self, state: &mut GameState, line: &str) -> Result<Turn> {
        self.dispatch(state, &parse(line))
    }

    /// Dispatches one command.
    ///
    /// # Errors
    ///
    /// Returns an error only when game state is internally inconsistent.
    /// Everything the player can cause is reported in the returned turn.
    pub fn dispatch(&mut self, state: &mut GameState, command: &Command) -> Result<Turn> {
        self.messages.clear();

        if let Some(ending) = state.ending() {
            self.say(TRIP_OVER);
            return Ok(Turn::terminate(self.take_messages(), ending));
        }

        debug!(
            action = %command.action,
            target = %command.target,
            location = %state.player().current_location,
            "dispatching command"
        );

        let result = match state.player().actions.lookup(&command.action) {
            Some(action) => self.execute(action, &command.target, state),
            None => {
                self.unrecognized(&command.action, state);
                Ok(Outcome::Continue)
            }
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) if err.is_recoverable() => {
                debug!(%err, "command refused");
                self.say(player_message(&err));
                Outcome::Continue
            }
            Err(err) => {
                warn!(%err, %command, "aborting command");
                self.messages.clear();
                let context = ErrorContext::new()
                    .with_command(command.to_string())
                    .with_location(state.player().current_location.clone());
                return Err(err.with_context(context));
            }
        };

        if let Outcome::Terminate(ending) = outcome {
            state.end(ending);
            info!(%ending, "shopping trip ended");
        }

        Ok(Turn {
            messages: self.take_messages(),
            outcome,
        })
    }

    fn execute(&mut self, action: Action, target: &str, state: &mut GameState) -> Result<Outcome> {
        match action {
            Action::Look => self.look(state)?,
            Action::GoTo => self.go_to(target, state)?,
            Action::Examine => self.examine(target, state)?,
            Action::Take => self.take(target, state)?,
            Action::Drop => self.say(DROP_UNSUPPORTED),
            Action::Pay => self.pay(state)?,
            Action::Leave => return Ok(Outcome::Terminate(self.leave(state))),
            Action::Inventory => self.inventory(state)?,
            Action::Help => self.help(state),
        }
        Ok(Outcome::Continue)
    }

    fn look(&mut self, state: &GameState) -> Result<()> {
        self.say(state.current_location()?.description());
        Ok(())
    }

    fn go_to(&mut self, target: &str, state: &mut GameState) -> Result<()> {
        if target.is_empty() {
            self.say("Go where?");
            return Ok(());
        }

        let Some(destination) = state
            .catalog()
            .locations()
            .resolve(target)
            .map(str::to_string)
        else {
            return Err(Error::unknown_location(target));
        };

        let here = state.current_location()?;
        if !here.leads_to(&destination) {
            self.say(format!("You can't get to the {destination} from here."));
            return Ok(());
        }

        debug!(from = %here.name(), to = %destination, "player moved");
        state.player_mut().current_location.clone_from(&destination);
        self.say(format!("You make your way to the {destination}."));
        self.say(state.current_location()?.description());
        Ok(())
    }

    fn examine(&mut self, target: &str, state: &GameState) -> Result<()> {
        if target.is_empty() {
            self.say("Examine what?");
            return Ok(());
        }

        if let Some((name, role)) = lookup_item(state, target) {
            return match role {
                ItemRole::Cart => self.describe_cart(state),
                ItemRole::ShoppingList => self.describe_list(state),
                ItemRole::Register | ItemRole::Generic => {
                    let here = &state.player().current_location;
                    if !state.is_item_present_at(here, &name)? {
                        return Err(Error::refused(Refusal::NotHere { item: name }));
                    }
                    self.say(state.catalog().items().describe(&name)?);
                    Ok(())
                }
            };
        }

        if let Some(produce) = state.catalog().produce().resolve(target) {
            self.say(format!(
                "The {produce} look fresh enough. Someone has arranged them very carefully."
            ));
            return Ok(());
        }

        self.say("You don't see anything like that here.");
        Ok(())
    }

    fn take(&mut self, target: &str, state: &mut GameState) -> Result<()> {
        if target.is_empty() {
            self.say("Take what?");
            return Ok(());
        }

        if let Some((name, role)) = lookup_item(state, target) {
            return self.take_item(name, role, state);
        }

        if let Some(produce) = state
            .catalog()
            .produce()
            .resolve(target)
            .map(str::to_string)
        {
            return self.take_produce(&produce, state);
        }

        if normalize(target) == INVENTORY_KEYWORD {
            return self.describe_cart(state);
        }

        self.say(format!("You can't find \"{target}\" anywhere."));
        Ok(())
    }

    fn take_item(&mut self, name: String, role: ItemRole, state: &mut GameState) -> Result<()> {
        match role {
            ItemRole::ShoppingList if state.player().has_list() => {
                return self.describe_list(state);
            }
            ItemRole::Cart if state.player().has_cart() => return self.describe_cart(state),
            _ => {}
        }

        let here = state.player().current_location.clone();
        if !state.is_item_present_at(&here, &name)? {
            return Err(Error::refused(Refusal::NotHere { item: name }));
        }

        let item = state.catalog().items().get(&name)?;
        if !item.is_takeable() {
            let description = item.description().to_string();
            return Err(Error::refused(Refusal::NotTakeable {
                item: name,
                description,
            }));
        }

        // Nothing else can be carried yet.
        if !role.is_acquirable() {
            return Err(Error::refused(Refusal::NoUse { item: name }));
        }

        acquire(state, &here, &name)?;
        if role == ItemRole::Cart {
            self.say(format!(
                "You take the {name}. One wheel squeaks and pulls to the left."
            ));
            state.player_mut().cart = Some(name);
            Ok(())
        } else {
            state.player_mut().shopping_list = Some(name);
            self.say("You pick up the shopping list.");
            self.describe_list(state)
        }
    }

    fn take_produce(&mut self, produce: &str, state: &mut GameState) -> Result<()> {
        let Some(cart_name) = state.player().cart.clone() else {
            return Err(Error::refused(Refusal::NeedCart));
        };

        if !state.current_location()?.has_item(produce) {
            return Err(Error::refused(Refusal::ProduceNotHere {
                produce: produce.to_string(),
            }));
        }

        let cart = state
            .catalog_mut()
            .items_mut()
            .get_mut(&cart_name)
            .map_err(|_| Error::invariant(format!("held cart \"{cart_name}\" is not in the catalog")))?;
        cart.add(produce);
        if !cart.has(produce)? {
            return Err(Error::invariant(format!(
                "{produce} vanished from {cart_name} as it was added"
            )));
        }

        debug!(%produce, count = cart.count(produce), "added to cart");
        self.say(format!("You put the {produce} in your cart."));
        Ok(())
    }

    fn pay(&mut self, state: &mut GameState) -> Result<()> {
        if state.player().has_receipt {
            self.say("You've already paid. You can leave whenever you're ready.");
            return Ok(());
        }

        let missing = {
            let list = state
                .shopping_list()?
                .ok_or_else(|| Error::refused(Refusal::NeedList))?;
            let cart = state
                .cart()?
                .ok_or_else(|| Error::refused(Refusal::NeedCart))?;
            checkout::first_missing(list, cart)?.map(str::to_string)
        };

        if let Some(produce) = missing {
            return Err(Error::refused(Refusal::MissingFromCart { produce }));
        }

        state.player_mut().has_receipt = true;
        info!("checkout complete");
        self.say("The cashier scans everything on your list and hands you a receipt.");
        self.say("You're all set. You can leave whenever you're ready.");
        Ok(())
    }

    fn leave(&mut self, state: &GameState) -> Ending {
        if state.player().has_receipt {
            self.say("Thanks for shopping with us! Have a nice day.");
            Ending::Checkout
        } else {
            self.say("You walk out without paying. The cashier shouts after you.");
            self.say("That is no way to end a shopping trip.");
            Ending::Walkout
        }
    }

    fn inventory(&mut self, state: &GameState) -> Result<()> {
        let mut held = Vec::new();
        if let Some(cart) = state.cart()? {
            if cart.is_empty() {
                held.push(format!("an empty {}", cart.name()));
            } else {
                held.push(format!("a {} holding {}", cart.name(), cart.contents().join(", ")));
            }
        }
        if let Some(list) = state.shopping_list()? {
            held.push(format!("a {}", list.name()));
        }
        if state.player().has_receipt {
            held.push("a receipt".to_string());
        }

        if held.is_empty() {
            self.say("You aren't carrying anything.");
        } else {
            self.say(format!("You are carrying {}.", held.join(", ")));
        }
        Ok(())
    }

    fn help(&mut self, state: &GameState) {
        self.say("You can:");
        for action in state.player().actions.actions() {
            self.say(format!("  {}", action.usage()));
        }
    }

    fn unrecognized(&mut self, action: &str, state: &GameState) {
        if !action.is_empty() {
            self.say(format!("You don't know how to \"{action}\" here."));
        }
        self.help(state);
    }

    fn describe_cart(&mut self, state: &GameState) -> Result<()> {
        let cart = state.cart()?.ok_or_else(|| Error::refused(Refusal::NeedCart))?;
        if cart.is_empty() {
            self.say("Your cart is empty.");
        } else {
            self.say(format!("Your cart holds: {}.", cart.contents().join(", ")));
        }
        Ok(())
    }

    fn describe_list(&mut self, state: &GameState) -> Result<()> {
        let list = state
            .shopping_list()?
            .ok_or_else(|| Error::refused(Refusal::NeedList))?;
        if list.is_empty() {
            self.say("Your shopping list is blank.");
        } else {
            self.say(format!("Your shopping list reads: {}.", list.contents().join(", ")));
        }
        Ok(())
    }
}

/// Resolves a target to an item's canonical name and role.
fn lookup_item(state: &GameState, target: &str) -> Option<(String, ItemRole)> {
    let item = state.catalog().items().get(target).ok()?;
    Some((item.name().to_string(), item.role()))
}

/// Moves an item from a location to the player.
fn acquire(state: &mut GameState, location: &str, item: &str) -> Result<()> {
    let location = state.catalog_mut().locations_mut().get_mut(location)?;
    location.remove_item(item);
    debug!(%item, from = %location.name(), "item acquired");
    Ok(())
}

/// Wording for a recoverable error.
fn player_message(err: &Error) -> String {
    match &err.kind {
        ErrorKind::Refused(refusal) => refusal.to_string(),
        ErrorKind::UnknownLocation(name) => {
            format!("There's no place called \"{name}\" in this store.")
        }
        ErrorKind::UnknownItem(name) => format!("You don't see any \"{name}\" around here."),
        _ => err.to_string(),
    }
}
