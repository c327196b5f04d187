//! Recognized actions and the words that invoke them.

use std::collections::HashMap;
use std::fmt;

use trolley_foundation::normalize;

/// The target word that makes `take` list the cart instead of taking.
pub const INVENTORY_KEYWORD: &str = "inventory";

/// Something the player can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Describe the current location.
    Look,
    /// Move to an adjacent location.
    GoTo,
    /// Describe an item or list a container.
    Examine,
    /// Acquire an item or put produce in the cart.
    Take,
    /// Put something back. Not supported.
    Drop,
    /// Check out at the register.
    Pay,
    /// End the trip.
    Leave,
    /// List what the player is carrying.
    Inventory,
    /// Show the available actions.
    Help,
}

impl Action {
    /// Every action, in help-text order.
    pub const ALL: [Self; 9] = [
        Self::Look,
        Self::GoTo,
        Self::Examine,
        Self::Take,
        Self::Drop,
        Self::Pay,
        Self::Leave,
        Self::Inventory,
        Self::Help,
    ];

    /// The canonical verb for this action.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::GoTo => "go to",
            Self::Examine => "examine",
            Self::Take => "take",
            Self::Drop => "drop",
            Self::Pay => "pay",
            Self::Leave => "leave",
            Self::Inventory => "inventory",
            Self::Help => "help",
        }
    }

    /// Usage line shown in help.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Look => "look               describe where you are",
            Self::GoTo => "go to <place>      walk somewhere nearby",
            Self::Examine => "examine <thing>    take a closer look",
            Self::Take => "take <thing>       pick something up (also: get)",
            Self::Drop => "drop <thing>       put something back",
            Self::Pay => "pay                check out at the register",
            Self::Leave => "leave              end your shopping trip",
            Self::Inventory => "inventory          see what you are carrying",
            Self::Help => "help               show this list",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// The fixed set of verbs the player may use.
#[derive(Clone, Debug, Default)]
pub struct ActionSet {
    /// Verb or alias -> action
    words: HashMap<String, Action>,
}

impl ActionSet {
    /// Creates a new empty action set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The verbs every game understands.
    #[must_use]
    pub fn standard() -> Self {
        let mut set = Self::new();
        for action in Action::ALL {
            set.register(action, []);
        }
        set.register(Action::Take, ["get"]);
        set.register(Action::Inventory, ["i"]);
        set
    }

    /// Registers an action under its canonical verb and any aliases.
    pub fn register<'a>(&mut self, action: Action, aliases: impl IntoIterator<Item = &'a str>) {
        self.words.insert(action.verb().to_string(), action);
        for alias in aliases {
            self.words.insert(normalize(alias), action);
        }
    }

    /// Looks up a parsed action word.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<Action> {
        self.words.get(&normalize(word)).copied()
    }

    /// Returns true if the word is a recognized verb.
    #[must_use]
    pub fn recognizes(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// All recognized words, sorted.
    #[must_use]
    pub fn verbs(&self) -> Vec<&str> {
        let mut verbs: Vec<&str> = self.words.keys().map(String::as_str).collect();
        verbs.sort_unstable();
        verbs
    }

    /// Distinct actions, in help-text order.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        Action::ALL
            .into_iter()
            .filter(|action| self.words.values().any(|a| a == action))
            .collect()
    }
}
