//! Shell-quote-aware splitting of a raw command line.

/// Split a line into whitespace-separated tokens, honoring single and
/// double quotes and backslash escapes. Unterminated quotes swallow the
/// rest of the line rather than erroring; this is interactive input, not
/// a shell.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in line.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            in_token = true;
            continue;
        }
        match c {
            '\\' if quote != Some('\'') => {
                escaped = true;
                in_token = true;
            }
            '\'' | '"' => match quote {
                Some(q) if q == c => quote = None,
                Some(_) => current.push(c),
                None => {
                    quote = Some(c);
                    in_token = true;
                }
            },
            c if c.is_whitespace() && quote.is_none() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(tokenize("phone Ann"), ["phone", "Ann"]);
        assert_eq!(tokenize("  add-contact  "), ["add-contact"]);
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn double_quotes_group_words() {
        assert_eq!(tokenize(r#"delete-contact "Ann Smith""#), ["delete-contact", "Ann Smith"]);
    }

    #[test]
    fn single_quotes_group_words() {
        assert_eq!(tokenize("add-tag 'my note' urgent"), ["add-tag", "my note", "urgent"]);
    }

    #[test]
    fn backslash_escapes_next_char() {
        assert_eq!(tokenize(r"phone Ann\ Smith"), ["phone", "Ann Smith"]);
        assert_eq!(tokenize(r#"a \"b\" c"#), ["a", "\"b\"", "c"]);
    }

    #[test]
    fn empty_quoted_token_survives() {
        assert_eq!(tokenize(r#"add-email Ann """#), ["add-email", "Ann", ""]);
    }

    #[test]
    fn unterminated_quote_takes_the_rest() {
        assert_eq!(tokenize(r#"search-contacts "Ann Sm"#), ["search-contacts", "Ann Sm"]);
    }
}
