//! Parser — classified tokens → argument store.

use crate::classifier::{classify, TokenKind};
use crate::error::ArgError;
use crate::store::ArgStore;
use crate::value::Value;

/// Consume `tokens` left to right, populating `store`.
///
/// Spaced named forms consume two tokens; everything else consumes one.
/// Values always go through [`Value::infer`]. Name collisions between
/// flags and named arguments abort immediately.
pub(crate) fn parse_into(store: &mut ArgStore, tokens: &[String]) -> Result<(), ArgError> {
    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];
        match classify(tokens, index) {
            TokenKind::NamedSingleSticky => {
                // One-character name, the rest of the token is the value.
                let rest = &token[1..];
                let split = rest.chars().next().map_or(0, char::len_utf8);
                let (name, value) = rest.split_at(split);
                store.set_named(name, Value::infer(value), true)?;
            }
            kind @ (TokenKind::NamedSingleSpaced | TokenKind::NamedDoubleSpaced) => {
                let dashes = if kind == TokenKind::NamedDoubleSpaced { 2 } else { 1 };
                store.set_named(&token[dashes..], Value::infer(&tokens[index + 1]), true)?;
                index += 1; // the value token is consumed too
            }
            kind @ (TokenKind::NamedBareEquals
            | TokenKind::NamedSingleEquals
            | TokenKind::NamedDoubleEquals) => {
                let dashes = match kind {
                    TokenKind::NamedDoubleEquals => 2,
                    TokenKind::NamedSingleEquals => 1,
                    _ => 0,
                };
                let rest = &token[dashes..];
                let (name, value) = rest.split_once('=').unwrap_or((rest, ""));
                store.set_named(name, Value::infer(value), true)?;
            }
            TokenKind::Free => store.push_free(Value::infer(token)),
            TokenKind::FlagSingle => store.set_flag(&token[1..])?,
            TokenKind::FlagDouble => store.set_flag(&token[2..])?,
            TokenKind::OutOfRange => break,
        }
        index += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ArgStore, ArgError> {
        let tokens: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        ArgStore::from_tokens(&tokens)
    }

    #[test]
    fn sticky_splits_name_and_value() {
        let store = parse(&["-n10"]).unwrap();
        assert_eq!(store.get("n").unwrap(), &Value::Int(10));
    }

    #[test]
    fn spaced_forms_consume_the_next_token() {
        let store = parse(&["--mcs", "20", "-x", "0.5", "tail"]).unwrap();
        assert_eq!(store.get("mcs").unwrap(), &Value::Int(20));
        assert_eq!(store.get("x").unwrap(), &Value::Float(0.5));
        assert_eq!(store.free(0).unwrap(), &Value::Str("tail".to_string()));
        assert_eq!(store.free_len(), 1);
    }

    #[test]
    fn equals_forms_split_at_first_equals() {
        let store = parse(&["--type=sim", "-o=a=b", "plain=3"]).unwrap();
        assert_eq!(store.get("type").unwrap(), &Value::Str("sim".to_string()));
        assert_eq!(store.get("o").unwrap(), &Value::Str("a=b".to_string()));
        assert_eq!(store.get("plain").unwrap(), &Value::Int(3));
    }

    #[test]
    fn flags_strip_their_dashes() {
        let store = parse(&["--slow", "-v"]).unwrap();
        assert!(store.has_flag("slow"));
        assert!(store.has_flag("v"));
    }

    #[test]
    fn renaming_a_named_argument_overwrites() {
        let store = parse(&["--n", "1", "--n", "2"]).unwrap();
        assert_eq!(store.get("n").unwrap(), &Value::Int(2));
    }

    #[test]
    fn duplicate_flag_is_a_noop() {
        let store = parse(&["--slow", "--slow"]).unwrap();
        assert!(store.has_flag("slow"));
    }

    #[test]
    fn flag_then_named_with_same_name_collides() {
        assert!(matches!(
            parse(&["--x", "--x", "5"]),
            Err(ArgError::NameCollision { name }) if name == "x"
        ));
    }

    #[test]
    fn named_then_flag_with_same_name_collides() {
        assert!(matches!(
            parse(&["--x", "5", "--x"]),
            Err(ArgError::NameCollision { name }) if name == "x"
        ));
    }
}
