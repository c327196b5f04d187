//! Parsing properties.

use proptest::prelude::*;
use trolley_parser::parse;

fn is_normalized(s: &str) -> bool {
    !s.starts_with(' ') && !s.ends_with(' ') && !s.contains("  ") && s == s.to_lowercase()
}

proptest! {
    #[test]
    fn parse_never_panics(input in "\\PC{0,60}") {
        let _ = parse(&input);
    }

    #[test]
    fn parse_output_is_normalized(input in "[a-zA-Z \t]{0,40}") {
        let command = parse(&input);
        prop_assert!(is_normalized(&command.action));
        prop_assert!(is_normalized(&command.target));
    }

    #[test]
    fn go_and_go_to_agree(target in "[a-z]{1,8}( [a-z]{1,8}){0,2}") {
        prop_assume!(!target.starts_with("to ") && target != "to");
        prop_assert_eq!(parse(&format!("go {target}")), parse(&format!("go to {target}")));
    }

    #[test]
    fn parse_is_idempotent_on_display(input in "[a-zA-Z ]{0,40}") {
        let once = parse(&input);
        prop_assume!(once.action != "go to");
        prop_assert_eq!(parse(&once.to_string()), once);
    }
}
