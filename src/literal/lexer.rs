//! Value-literal lexer. Tokenizes the text of one GraphQL value.

use crate::{Error, Result};

/// A token from the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

/// Source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    Integer, Float, StringLiteral,

    // Names (true/false/null are resolved by the parser)
    Name,

    // Punctuation
    LBracket, RBracket, LBrace, RBrace,
    Colon, Dollar,

    Eof,
}

/// Tokenize the text of a value literal.
///
/// Commas, whitespace, the byte-order mark and `#` comments are insignificant.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        match ch {
            // Skip ignored tokens
            ' ' | '\t' | '\n' | '\r' | ',' | '\u{feff}' => { chars.next(); }

            // Skip comments
            '#' => {
                while chars.peek().is_some_and(|&(_, c)| c != '\n' && c != '\r') {
                    chars.next();
                }
            }

            // Block strings
            '"' if input[pos..].starts_with("\"\"\"") => {
                chars.next();
                chars.next();
                chars.next();
                let mut raw = String::new();
                loop {
                    match chars.next() {
                        Some((i, '\\')) if input[i..].starts_with("\\\"\"\"") => {
                            raw.push_str("\"\"\"");
                            chars.next();
                            chars.next();
                            chars.next();
                        }
                        Some((i, '"')) if input[i..].starts_with("\"\"\"") => {
                            chars.next();
                            chars.next();
                            tokens.push(Token {
                                kind: TokenKind::StringLiteral,
                                span: Span { start: pos, end: i + 3 },
                                text: block_string_value(&raw),
                            });
                            break;
                        }
                        Some((_, c)) => raw.push(c),
                        None => return Err(Error::SyntaxError {
                            position: pos,
                            message: "Unterminated block string".into(),
                        }),
                    }
                }
            }

            // String literals
            '"' => {
                chars.next(); // consume opening quote
                let start = pos;
                let mut s = String::new();
                loop {
                    match chars.next() {
                        Some((esc_pos, '\\')) => {
                            let escaped = match chars.next() {
                                Some((_, '"')) => '"',
                                Some((_, '\\')) => '\\',
                                Some((_, '/')) => '/',
                                Some((_, 'b')) => '\u{8}',
                                Some((_, 'f')) => '\u{c}',
                                Some((_, 'n')) => '\n',
                                Some((_, 'r')) => '\r',
                                Some((_, 't')) => '\t',
                                Some((_, 'u')) => {
                                    let mut hex = String::new();
                                    for _ in 0..4 {
                                        match chars.next() {
                                            Some((_, h)) if h.is_ascii_hexdigit() => hex.push(h),
                                            _ => return Err(Error::SyntaxError {
                                                position: esc_pos,
                                                message: "Invalid unicode escape".into(),
                                            }),
                                        }
                                    }
                                    u32::from_str_radix(&hex, 16)
                                        .ok()
                                        .and_then(char::from_u32)
                                        .ok_or_else(|| Error::SyntaxError {
                                            position: esc_pos,
                                            message: format!("Invalid unicode escape \\u{hex}"),
                                        })?
                                }
                                other => return Err(Error::SyntaxError {
                                    position: esc_pos,
                                    message: format!(
                                        "Invalid escape sequence \\{}",
                                        other.map(|(_, c)| c.to_string()).unwrap_or_default(),
                                    ),
                                }),
                            };
                            s.push(escaped);
                        }
                        Some((end, '"')) => {
                            tokens.push(Token {
                                kind: TokenKind::StringLiteral,
                                span: Span { start, end: end + 1 },
                                text: s,
                            });
                            break;
                        }
                        Some((_, '\n' | '\r')) | None => return Err(Error::SyntaxError {
                            position: start,
                            message: "Unterminated string literal".into(),
                        }),
                        Some((_, c)) => s.push(c),
                    }
                }
            }

            // Numbers: -?(0|[1-9][0-9]*)(.[0-9]+)?([eE][+-]?[0-9]+)?
            c if c == '-' || c.is_ascii_digit() => {
                let start = pos;
                let mut num = String::new();
                let mut is_float = false;

                if c == '-' {
                    num.push(c);
                    chars.next();
                }
                let int_start = num.len();
                take_digits(&mut chars, &mut num);
                let int_digits = &num[int_start..];
                if int_digits.is_empty() {
                    return Err(Error::SyntaxError { position: start, message: "Expected digit".into() });
                }
                if int_digits.len() > 1 && int_digits.starts_with('0') {
                    return Err(Error::SyntaxError {
                        position: start,
                        message: format!("Invalid number, unexpected digit after 0: '{num}'"),
                    });
                }

                if matches!(chars.peek(), Some(&(_, '.'))) {
                    is_float = true;
                    num.push('.');
                    chars.next();
                    if take_digits(&mut chars, &mut num) == 0 {
                        return Err(Error::SyntaxError {
                            position: start,
                            message: format!("Invalid number, expected digit after '.': '{num}'"),
                        });
                    }
                }
                if let Some(&(_, e @ ('e' | 'E'))) = chars.peek() {
                    is_float = true;
                    num.push(e);
                    chars.next();
                    if let Some(&(_, sign @ ('+' | '-'))) = chars.peek() {
                        num.push(sign);
                        chars.next();
                    }
                    if take_digits(&mut chars, &mut num) == 0 {
                        return Err(Error::SyntaxError {
                            position: start,
                            message: format!("Invalid number, expected digit in exponent: '{num}'"),
                        });
                    }
                }
                // A number must not run straight into a name
                if let Some(&(p, c)) = chars.peek() {
                    if c.is_ascii_alphabetic() || c == '_' || c == '.' {
                        return Err(Error::SyntaxError {
                            position: p,
                            message: format!("Invalid number, unexpected '{c}'"),
                        });
                    }
                }

                tokens.push(Token {
                    kind: if is_float { TokenKind::Float } else { TokenKind::Integer },
                    span: Span { start, end: start + num.len() },
                    text: num,
                });
            }

            // Names
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = pos;
                let mut ident = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' {
                        ident.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Name,
                    span: Span { start, end: start + ident.len() },
                    text: ident,
                });
            }

            // Punctuation
            '[' => { chars.next(); tokens.push(punct(TokenKind::LBracket, pos, "[")); }
            ']' => { chars.next(); tokens.push(punct(TokenKind::RBracket, pos, "]")); }
            '{' => { chars.next(); tokens.push(punct(TokenKind::LBrace, pos, "{")); }
            '}' => { chars.next(); tokens.push(punct(TokenKind::RBrace, pos, "}")); }
            ':' => { chars.next(); tokens.push(punct(TokenKind::Colon, pos, ":")); }
            '$' => { chars.next(); tokens.push(punct(TokenKind::Dollar, pos, "$")); }

            other => {
                return Err(Error::SyntaxError {
                    position: pos,
                    message: format!("Unexpected character: '{other}'"),
                });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span { start: input.len(), end: input.len() },
        text: String::new(),
    });

    Ok(tokens)
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>, out: &mut String) -> usize {
    let mut n = 0;
    while let Some(&(_, c)) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        out.push(c);
        chars.next();
        n += 1;
    }
    n
}

fn punct(kind: TokenKind, pos: usize, text: &str) -> Token {
    Token {
        kind,
        span: Span { start: pos, end: pos + text.len() },
        text: text.to_string(),
    }
}

/// Block string value: strip the common indentation of all lines but the
/// first, then drop leading and trailing blank lines.
fn block_string_value(raw: &str) -> String {
    let lines: Vec<&str> = raw.split("\r\n").flat_map(|l| l.split(['\n', '\r'])).collect();
    let is_blank = |l: &str| l.chars().all(|c| c == ' ' || c == '\t');

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|l| !is_blank(l))
        .map(|l| l.len() - l.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut out: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, l)| if i == 0 || l.len() < common_indent { *l } else { &l[common_indent..] })
        .collect();

    while out.first().is_some_and(|l| is_blank(l)) {
        out.remove(0);
    }
    while out.last().is_some_and(|l| is_blank(l)) {
        out.pop();
    }
    out.join("\n")
}
