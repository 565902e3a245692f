//! Value-literal recursive descent parser.
//!
//! Parses a token stream holding exactly one value:
//! - scalars: null, booleans, integers, floats, strings, enum names
//! - variables (`$name`)
//! - lists and objects, nested to any depth

use crate::{Error, Result};
use super::ast::{Literal, ObjectField};
use super::lexer::{Token, TokenKind};

/// Deepest list/object nesting accepted before the parser gives up.
pub const MAX_DEPTH: usize = 128;

/// Parser state: a token slice plus a cursor.
struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0, depth: 0 }
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(format!("Value nested deeper than {MAX_DEPTH} levels")));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn advance(&mut self) -> &Token {
        let tok = &self.tokens[self.pos.min(self.tokens.len() - 1)];
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, kind: TokenKind) -> Result<&Token> {
        let tok = self.peek();
        if tok.kind == kind {
            Ok(self.advance())
        } else {
            Err(self.error(format!("Expected {:?}, got {:?} '{}'", kind, tok.kind, tok.text)))
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error(&self, msg: String) -> Error {
        Error::SyntaxError {
            position: self.peek().span.start,
            message: msg,
        }
    }
}

/// Parse a complete value literal from tokens. Trailing tokens are an error.
pub fn parse_value_literal(tokens: &[Token]) -> Result<Literal> {
    if tokens.is_empty() {
        return Err(Error::SyntaxError { position: 0, message: "Empty token stream".into() });
    }
    let mut p = Parser::new(tokens);
    let value = parse_value(&mut p)?;
    if !p.at(TokenKind::Eof) {
        return Err(p.error(format!("Unexpected token after value: {:?}", p.peek_kind())));
    }
    Ok(value)
}

fn parse_value(p: &mut Parser) -> Result<Literal> {
    match p.peek_kind() {
        TokenKind::Dollar => {
            p.advance();
            let name = p.expect(TokenKind::Name)?.text.clone();
            Ok(Literal::Variable(name))
        }
        TokenKind::Integer => {
            let tok = p.advance();
            tok.text.parse::<i64>().map(Literal::Int).map_err(|_| Error::SyntaxError {
                position: tok.span.start,
                message: format!("Integer literal out of range: {}", tok.text),
            })
        }
        TokenKind::Float => {
            let tok = p.advance();
            tok.text.parse::<f64>().map(Literal::Float).map_err(|_| Error::SyntaxError {
                position: tok.span.start,
                message: format!("Invalid float literal: {}", tok.text),
            })
        }
        TokenKind::StringLiteral => Ok(Literal::String(p.advance().text.clone())),
        TokenKind::Name => {
            let name = p.advance().text.clone();
            Ok(match name.as_str() {
                "true" => Literal::Bool(true),
                "false" => Literal::Bool(false),
                "null" => Literal::Null,
                _ => Literal::Enum(name),
            })
        }
        TokenKind::LBracket => parse_list(p),
        TokenKind::LBrace => parse_object(p),
        kind => Err(p.error(format!("Unexpected token {:?} at start of value", kind))),
    }
}

fn parse_list(p: &mut Parser) -> Result<Literal> {
    p.enter()?;
    p.expect(TokenKind::LBracket)?;
    let mut items = Vec::new();
    while !p.eat(TokenKind::RBracket) {
        if p.at(TokenKind::Eof) {
            return Err(p.error("Unterminated list".into()));
        }
        items.push(parse_value(p)?);
    }
    p.leave();
    Ok(Literal::List(items))
}

fn parse_object(p: &mut Parser) -> Result<Literal> {
    p.enter()?;
    p.expect(TokenKind::LBrace)?;
    let mut fields: Vec<ObjectField> = Vec::new();
    while !p.eat(TokenKind::RBrace) {
        if p.at(TokenKind::Eof) {
            return Err(p.error("Unterminated object".into()));
        }
        let name_tok = p.expect(TokenKind::Name)?;
        let (name, position) = (name_tok.text.clone(), name_tok.span.start);
        p.expect(TokenKind::Colon)?;
        let value = parse_value(p)?;
        if fields.iter().any(|f| f.name == name) {
            return Err(Error::SyntaxError {
                position,
                message: format!("Duplicate object field '{name}'"),
            });
        }
        fields.push(ObjectField { name, value });
    }
    p.leave();
    Ok(Literal::Object(fields))
}
