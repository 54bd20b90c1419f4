use super::token::*;
use super::{Column, Error};

/// Split one command line into words.
///
/// The trailing comment is removed first. Comment detection is not
/// brace-aware so a `#` inside `{...}` still ends the line. Words are
/// separated by whitespace except inside balanced braces, which are kept
/// verbatim on the word. An unmatched `{` runs to the end of the line.
pub fn lex(s: &str) -> Vec<String> {
    ZeroLexer::new(strip_comment(s)).collect()
}

/// Remove a trailing `#` comment and surrounding whitespace.
pub fn strip_comment(s: &str) -> &str {
    match s.find('#') {
        Some(index) => s[..index].trim(),
        None => s.trim(),
    }
}

pub fn is_zero_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

struct ZeroLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> ZeroLexer<'a> {
    fn new(s: &'a str) -> ZeroLexer<'a> {
        ZeroLexer {
            chars: s.chars().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if !is_zero_whitespace(*pk) {
                break;
            }
            self.chars.next();
        }
    }
}

impl<'a> Iterator for ZeroLexer<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        self.chars.peek()?;
        let mut word = String::new();
        let mut depth: usize = 0;
        while let Some(&ch) = self.chars.peek() {
            if depth == 0 && is_zero_whitespace(ch) {
                break;
            }
            match ch {
                '{' => depth += 1,
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
            word.push(ch);
            self.chars.next();
        }
        Some(word)
    }
}

/// Split arithmetic text into tokens with their columns.
pub fn lex_arithmetic(s: &str) -> Result<Vec<(Column, Token)>, Error> {
    let mut lexer = ArithmeticLexer {
        chars: s.chars().peekable(),
        col: 0,
    };
    let mut tokens = vec![];
    while let Some(token) = lexer.token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

struct ArithmeticLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    col: usize,
}

impl<'a> ArithmeticLexer<'a> {
    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.col += 1;
        Some(ch)
    }

    fn token(&mut self) -> Result<Option<(Column, Token)>, Error> {
        while let Some(pk) = self.chars.peek() {
            if !pk.is_whitespace() {
                break;
            }
            self.bump();
        }
        let start = self.col;
        let pk = match self.chars.peek() {
            Some(pk) => *pk,
            None => return Ok(None),
        };
        let token = if pk.is_ascii_digit() || pk == '.' {
            self.number()?
        } else {
            self.bump();
            match pk {
                '(' => Token::LParen,
                ')' => Token::RParen,
                _ => match Operator::from_char(pk) {
                    Some(op) => Token::Operator(op),
                    None => return Err(error!(SyntaxError, ..&(start..self.col))),
                },
            }
        };
        Ok(Some((start..self.col, token)))
    }

    fn number(&mut self) -> Result<Token, Error> {
        let start = self.col;
        let mut s = String::new();
        let mut digits = 0;
        let mut decimal = false;
        let mut exp = false;
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                digits += 1;
            } else if ch == '.' && !decimal && !exp {
                decimal = true;
            } else if (ch == 'e' || ch == 'E') && digits > 0 && !exp {
                exp = true;
                s.push('E');
                self.bump();
                if let Some(&sign) = self.chars.peek() {
                    if sign == '+' || sign == '-' {
                        s.push(sign);
                        self.bump();
                    }
                }
                match self.chars.peek() {
                    Some(d) if d.is_ascii_digit() => continue,
                    _ => return Err(error!(SyntaxError, ..&(start..self.col))),
                }
            } else {
                break;
            }
            s.push(ch);
            self.bump();
        }
        if digits == 0 {
            return Err(error!(SyntaxError, ..&(start..self.col)));
        }
        if decimal || exp {
            Ok(Token::Literal(Literal::Decimal(s)))
        } else {
            Ok(Token::Literal(Literal::Integer(s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braces_hold_spaces() {
        let t = lex("if $a = {hello world} - print {hi}");
        assert_eq!(t, vec!["if", "$a", "=", "{hello world}", "-", "print", "{hi}"]);
    }

    #[test]
    fn test_nested_braces() {
        assert_eq!(lex("print {a {b c} d} e"), vec!["print", "{a {b c} d}", "e"]);
    }

    #[test]
    fn test_unmatched_brace_runs_to_end() {
        assert_eq!(lex("print {oops  x y"), vec!["print", "{oops  x y"]);
    }

    #[test]
    fn test_stray_close_brace() {
        assert_eq!(lex("print a} b"), vec!["print", "a}", "b"]);
    }

    #[test]
    fn test_comment_is_not_brace_aware() {
        assert_eq!(lex("print {a # b}"), vec!["print", "{a"]);
        assert_eq!(lex("# whole line"), Vec::<String>::new());
    }

    #[test]
    fn test_arithmetic() {
        let t: Vec<Token> = lex_arithmetic("(3 + 4.5)*2e1")
            .unwrap()
            .into_iter()
            .map(|(_, t)| t)
            .collect();
        assert_eq!(
            t,
            vec![
                Token::LParen,
                Token::Literal(Literal::Integer("3".to_string())),
                Token::Operator(Operator::Plus),
                Token::Literal(Literal::Decimal("4.5".to_string())),
                Token::RParen,
                Token::Operator(Operator::Multiply),
                Token::Literal(Literal::Decimal("2E1".to_string())),
            ]
        );
    }

    #[test]
    fn test_arithmetic_rejects_names() {
        let e = lex_arithmetic("1 + $a").unwrap_err();
        assert_eq!(e.column(), 4..5);
        assert!(lex_arithmetic("1 + .").is_err());
        assert!(lex_arithmetic("2e").is_err());
    }

    #[test]
    fn test_tabs_and_runs_of_space() {
        assert_eq!(lex("  wait\t 2  "), vec!["wait", "2"]);
    }
}
