//! Zero-copy lexer for DIS-style keyword queries
//!
//! Behaves like a shell word splitter with a wider word alphabet: letters,
//! digits, `_` and `. - / :` all continue a word, so signed floats, dates,
//! dotted identifiers and paths come out as single tokens. There is no comment
//! character. Any other non-space character is a token of its own.

use crate::error::{ExpressionParseError, ParseResult};

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '/' | ':')
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Zero-copy lexer for keyword queries
///
/// Holds at most one pushed-back token, which is all the grammar ever needs.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    pushed_back: Option<&'a str>,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            pushed_back: None,
            done: false,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self, n: usize) {
        self.position += n;
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance(c.len_utf8());
            } else {
                break;
            }
        }
    }

    /// Read the next raw token, quotes still attached.
    fn read_raw(&mut self) -> ParseResult<Option<&'a str>> {
        if let Some(token) = self.pushed_back.take() {
            return Ok(Some(token));
        }

        self.skip_whitespace();
        let start = self.position;
        let c = match self.peek_char() {
            Some(c) => c,
            None => return Ok(None),
        };
        self.advance(c.len_utf8());

        if is_quote(c) {
            loop {
                match self.peek_char() {
                    Some(next) => {
                        self.advance(next.len_utf8());
                        if next == c {
                            break;
                        }
                    }
                    None => {
                        return Err(ExpressionParseError::UnterminatedQuote { position: start })
                    }
                }
            }
        } else if is_word_char(c) {
            // A quote inside a word does not open a string
            while let Some(next) = self.peek_char() {
                if is_word_char(next) || is_quote(next) {
                    self.advance(next.len_utf8());
                } else {
                    break;
                }
            }
        }

        Ok(Some(&self.input[start..self.position]))
    }

    /// Get the next token, or `None` at end of input.
    ///
    /// Quoted strings come back without their quotes. `<`, `>` and `!`
    /// followed by `=` are joined into one operator; a dangling `<`, `>` or
    /// `!` at end of input yields `None`.
    pub fn next_token(&mut self) -> ParseResult<Option<&'a str>> {
        let token = match self.read_raw()? {
            Some(token) => token,
            None => return Ok(None),
        };

        if token.starts_with(is_quote) {
            return Ok(Some(&token[1..token.len() - 1]));
        }

        let joined = match token {
            "<" => "<=",
            ">" => ">=",
            "!" => "!=",
            _ => return Ok(Some(token)),
        };

        match self.read_raw()? {
            None => Ok(None),
            Some("=") => Ok(Some(joined)),
            Some(next) => {
                self.pushed_back = Some(next);
                Ok(Some(token))
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = ParseResult<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.next_token().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_tokens(input: &str) -> Vec<&str> {
        Lexer::new(input)
            .collect::<ParseResult<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(collect_tokens("").is_empty());
        assert!(collect_tokens("   \t\n").is_empty());
    }

    #[test]
    fn test_simple_comparison() {
        assert_eq!(collect_tokens("x = 1"), vec!["x", "=", "1"]);
    }

    #[test]
    fn test_word_characters() {
        assert_eq!(
            collect_tokens("z != -3.96 start_time = 2006-02-06T13:12:13"),
            vec!["z", "!=", "-3.96", "start_time", "=", "2006-02-06T13:12:13"]
        );
        assert_eq!(
            collect_tokens("file = /usr/local/bin/poop"),
            vec!["file", "=", "/usr/local/bin/poop"]
        );
    }

    #[test]
    fn test_punctuation_is_single_char() {
        assert_eq!(
            collect_tokens("(x~y)&|"),
            vec!["(", "x", "~", "y", ")", "&", "|"]
        );
    }

    #[test]
    fn test_quoted_strings_are_stripped() {
        assert_eq!(
            collect_tokens(r#"x = "Fish Poop" and y = 'Monkey Poop'"#),
            vec!["x", "=", "Fish Poop", "and", "y", "=", "Monkey Poop"]
        );
        assert_eq!(collect_tokens(r#"x = """#), vec!["x", "=", ""]);
    }

    #[test]
    fn test_quote_inside_word_is_literal() {
        assert_eq!(collect_tokens(r#"it's"#), vec!["it's"]);
    }

    #[test]
    fn test_closing_quote_ends_token() {
        assert_eq!(collect_tokens(r#""a b"c"#), vec!["a b", "c"]);
    }

    #[test]
    fn test_unterminated_quote() {
        let result: ParseResult<Vec<_>> = Lexer::new("x = 'open").collect();
        assert_eq!(
            result,
            Err(ExpressionParseError::UnterminatedQuote { position: 4 })
        );
    }

    #[test]
    fn test_two_char_operators() {
        assert_eq!(collect_tokens("a<=1"), vec!["a", "<=", "1"]);
        assert_eq!(collect_tokens("a > = 1"), vec!["a", ">=", "1"]);
        assert_eq!(collect_tokens("a != 1"), vec!["a", "!=", "1"]);
    }

    #[test]
    fn test_push_back_single_operator() {
        assert_eq!(collect_tokens("x < 1"), vec!["x", "<", "1"]);
        assert_eq!(collect_tokens("! z"), vec!["!", "z"]);
        // The pushed-back token is itself joined when re-read
        assert_eq!(collect_tokens("< < ="), vec!["<", "<="]);
    }

    #[test]
    fn test_pushed_back_quote_is_stripped() {
        assert_eq!(collect_tokens("> 'a b'"), vec![">", "a b"]);
    }

    #[test]
    fn test_dangling_operator_ends_stream() {
        let mut lexer = Lexer::new("x <");
        assert_eq!(lexer.next_token(), Ok(Some("x")));
        assert_eq!(lexer.next_token(), Ok(None));
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(collect_tokens("ville = Montréal"), vec!["ville", "=", "Montréal"]);
    }
}
