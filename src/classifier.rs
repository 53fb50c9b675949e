//! Token classifier — raw tokens → token kinds.
//!
//! Classification is per-position and schema-free: nothing is registered up
//! front, so whether `-x` is a flag or the name of a value can only be
//! decided by looking at the token after it. That lookahead is recursive —
//! the kind at `index` depends on the kind at `index + 1` for the spaced
//! forms — and terminates at end-of-input.

/// How a single token at a given position reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `-x` with no free token following.
    FlagSingle,
    /// `--x` with no free token following.
    FlagDouble,
    /// `-x value` — the next token carries the value.
    NamedSingleSpaced,
    /// `--x value` — the next token carries the value.
    NamedDoubleSpaced,
    /// `name=value` with no leading dash.
    NamedBareEquals,
    /// `-xvalue` — the value is stuck to the one-character name.
    NamedSingleSticky,
    /// `-x=value`.
    NamedSingleEquals,
    /// `--x=value`.
    NamedDoubleEquals,
    /// Positional token.
    Free,
    /// Index past the end of input.
    OutOfRange,
}

/// Classify the token at `index`.
///
/// Depends only on `tokens[index..]`, never on earlier tokens.
pub fn classify(tokens: &[String], index: usize) -> TokenKind {
    let Some(token) = tokens.get(index) else {
        return TokenKind::OutOfRange;
    };

    if !token.starts_with('-') {
        return if token.contains('=') {
            TokenKind::NamedBareEquals
        } else {
            TokenKind::Free
        };
    }

    if token.starts_with("--") {
        if token.contains('=') {
            return TokenKind::NamedDoubleEquals;
        }
        return if classify(tokens, index + 1) == TokenKind::Free {
            TokenKind::NamedDoubleSpaced
        } else {
            TokenKind::FlagDouble
        };
    }

    let mut chars = token.chars();
    chars.next(); // the dash
    match (chars.next(), chars.next()) {
        // A lone "-" matches no dashed form; treat it as the conventional
        // stdin placeholder, i.e. a free argument.
        (None, _) => TokenKind::Free,
        (Some(_), None) => {
            if classify(tokens, index + 1) == TokenKind::Free {
                TokenKind::NamedSingleSpaced
            } else {
                TokenKind::FlagSingle
            }
        }
        (Some(_), Some('=')) => TokenKind::NamedSingleEquals,
        (Some(_), Some(_)) => TokenKind::NamedSingleSticky,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classify_each_grammar_form() {
        let cases: &[(&[&str], TokenKind)] = &[
            (&["-x", "value"], TokenKind::NamedSingleSpaced),
            (&["-xvalue"], TokenKind::NamedSingleSticky),
            (&["-x=value"], TokenKind::NamedSingleEquals),
            (&["--x", "value"], TokenKind::NamedDoubleSpaced),
            (&["--x=value"], TokenKind::NamedDoubleEquals),
            (&["-x"], TokenKind::FlagSingle),
            (&["--x"], TokenKind::FlagDouble),
            (&["name=value"], TokenKind::NamedBareEquals),
            (&["anything"], TokenKind::Free),
        ];
        for (args, expected) in cases {
            assert_eq!(classify(&tokens(args), 0), *expected, "args: {args:?}");
        }
    }

    #[test]
    fn out_of_range_past_the_end() {
        assert_eq!(classify(&tokens(&["a"]), 1), TokenKind::OutOfRange);
        assert_eq!(classify(&[], 0), TokenKind::OutOfRange);
    }

    #[test]
    fn dash_followed_by_dash_token_is_a_flag() {
        // "-b 5" makes -b named, which makes -a a flag.
        let t = tokens(&["-a", "-b", "5"]);
        assert_eq!(classify(&t, 0), TokenKind::FlagSingle);
        assert_eq!(classify(&t, 1), TokenKind::NamedSingleSpaced);
    }

    #[test]
    fn lookahead_chain_terminates_at_end_of_input() {
        let t = tokens(&["-a", "-b", "-c"]);
        assert_eq!(classify(&t, 0), TokenKind::FlagSingle);
        assert_eq!(classify(&t, 1), TokenKind::FlagSingle);
        assert_eq!(classify(&t, 2), TokenKind::FlagSingle);
    }

    #[test]
    fn classification_ignores_earlier_tokens() {
        let long = tokens(&["free", "--x", "5"]);
        let short = tokens(&["--x", "5"]);
        assert_eq!(classify(&long, 1), classify(&short, 0));
    }

    #[test]
    fn sticky_value_may_itself_contain_equals() {
        // Third character decides: "-n=10" is equals, "-n1=0" is sticky.
        assert_eq!(classify(&tokens(&["-n=10"]), 0), TokenKind::NamedSingleEquals);
        assert_eq!(classify(&tokens(&["-n1=0"]), 0), TokenKind::NamedSingleSticky);
    }

    #[test]
    fn lone_dash_is_free() {
        assert_eq!(classify(&tokens(&["-"]), 0), TokenKind::Free);
        // ...which makes a preceding short dash token a named argument.
        assert_eq!(classify(&tokens(&["-x", "-"]), 0), TokenKind::NamedSingleSpaced);
    }

    #[test]
    fn equals_token_following_dash_is_not_free() {
        // "k=v" classifies as bare-equals, so "-x" stays a flag.
        assert_eq!(classify(&tokens(&["-x", "k=v"]), 0), TokenKind::FlagSingle);
    }
}
