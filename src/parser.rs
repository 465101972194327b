//! Declaration scanner for kysely-codegen output.
//!
//! The input is a TypeScript file, but only top-level `interface`
//! declarations matter here. A small lexer turns the source into a token
//! stream (identifiers, string literals, punctuation) so that declarations
//! wrapped across lines, comments and string contents never confuse the
//! scan. Everything that is not an interface declaration (imports, type
//! aliases, exported consts) is skipped; parsing itself never fails.

use crate::ast::{Interface, Member, Module, TypeExpr};

/// Keyword types that can appear where a type reference would; they are not
/// references to a declared interface.
const KEYWORD_TYPES: &[&str] = &[
    "string",
    "number",
    "boolean",
    "bigint",
    "symbol",
    "object",
    "any",
    "unknown",
    "never",
    "void",
    "null",
    "undefined",
    "true",
    "false",
];

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Str(String),
    Punct(char),
}

/// Parse source text into a `Module` of top-level interface declarations.
pub fn parse(input: &str) -> Module {
    let tokens = lex(input);
    let mut interfaces = Vec::new();

    let mut depth = 0usize;
    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i] {
            Token::Punct('{') => {
                depth += 1;
                i += 1;
            }
            Token::Punct('}') => {
                depth = depth.saturating_sub(1);
                i += 1;
            }
            Token::Ident(word) if depth == 0 && word == "interface" => {
                match parse_interface(&tokens, i + 1) {
                    Some((interface, next)) => {
                        interfaces.push(interface);
                        i = next;
                    }
                    None => i += 1,
                }
            }
            _ => i += 1,
        }
    }

    Module { interfaces }
}

/// Parse one interface declaration starting at its name token.
fn parse_interface(tokens: &[Token], mut i: usize) -> Option<(Interface, usize)> {
    let name = match tokens.get(i)? {
        Token::Ident(name) => name.clone(),
        _ => return None,
    };
    i += 1;

    // Skip generic parameters and any `extends` clause up to the body.
    while let Some(tok) = tokens.get(i) {
        if *tok == Token::Punct('{') {
            break;
        }
        i += 1;
    }
    if tokens.get(i) != Some(&Token::Punct('{')) {
        return None;
    }
    i += 1;

    let mut members = Vec::new();
    loop {
        match tokens.get(i) {
            None => break,
            Some(Token::Punct('}')) => {
                i += 1;
                break;
            }
            Some(Token::Punct(';')) | Some(Token::Punct(',')) => i += 1,
            Some(_) => {
                let (member, next) = parse_member(tokens, i);
                members.push(member);
                i = next;
            }
        }
    }

    Some((Interface { name, members }, i))
}

/// Parse one interface member starting at `i`; returns the member and the
/// position of its terminator (`;`, `,` or the closing `}`).
fn parse_member(tokens: &[Token], mut i: usize) -> (Member, usize) {
    // `readonly` ahead of an actual property name is just a modifier.
    if let Some(Token::Ident(word)) = tokens.get(i) {
        if word == "readonly"
            && matches!(tokens.get(i + 1), Some(Token::Ident(_) | Token::Str(_)))
        {
            i += 1;
        }
    }

    let name = match tokens.get(i) {
        Some(Token::Ident(name)) => name.clone(),
        Some(Token::Str(name)) => name.clone(),
        // Index signatures and anything else that does not start with a
        // property name.
        _ => return (Member::Other, skip_member(tokens, i)),
    };
    i += 1;

    if tokens.get(i) == Some(&Token::Punct('?')) {
        i += 1;
    }
    if tokens.get(i) != Some(&Token::Punct(':')) {
        // Method or call signature.
        return (Member::Other, skip_member(tokens, i));
    }
    i += 1;

    let (ty, next) = take_type(tokens, i);
    (Member::Property { name, ty: classify_type(&ty) }, next)
}

/// Collect the declared-type tokens up to the member terminator: `;` or `,`
/// at zero bracket depth, or the interface's closing `}`.
fn take_type(tokens: &[Token], mut i: usize) -> (Vec<Token>, usize) {
    let mut ty = Vec::new();
    let mut depth = 0usize;
    while let Some(tok) = tokens.get(i) {
        match tok {
            Token::Punct('<') | Token::Punct('(') | Token::Punct('[') | Token::Punct('{') => {
                depth += 1
            }
            // Saturating: the `>` of `=>` in function types has no opener.
            Token::Punct('>') | Token::Punct(')') | Token::Punct(']') => {
                depth = depth.saturating_sub(1)
            }
            Token::Punct('}') => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Token::Punct(';') | Token::Punct(',') if depth == 0 => break,
            _ => {}
        }
        ty.push(tok.clone());
        i += 1;
    }
    (ty, i)
}

fn skip_member(tokens: &[Token], i: usize) -> usize {
    take_type(tokens, i).1
}

/// A type is a named reference when it is a single identifier, optionally
/// with a type-argument list spanning the rest of the tokens.
fn classify_type(ty: &[Token]) -> TypeExpr {
    let Some(Token::Ident(head)) = ty.first() else {
        return TypeExpr::Other;
    };
    if KEYWORD_TYPES.contains(&head.as_str()) {
        return TypeExpr::Other;
    }
    if ty.len() == 1 {
        return TypeExpr::Reference(head.clone());
    }
    if ty.get(1) == Some(&Token::Punct('<')) {
        let mut depth = 0usize;
        for (idx, tok) in ty.iter().enumerate().skip(1) {
            match tok {
                Token::Punct('<') => depth += 1,
                Token::Punct('>') => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return if idx == ty.len() - 1 {
                            TypeExpr::Reference(head.clone())
                        } else {
                            TypeExpr::Other
                        };
                    }
                }
                _ => {}
            }
        }
    }
    TypeExpr::Other
}

fn lex(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '/' {
            chars.next();
            match chars.peek() {
                Some('/') => {
                    for ch in chars.by_ref() {
                        if ch == '\n' {
                            break;
                        }
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for ch in chars.by_ref() {
                        if prev == '*' && ch == '/' {
                            break;
                        }
                        prev = ch;
                    }
                }
                _ => tokens.push(Token::Punct('/')),
            }
            continue;
        }

        if c == '\'' || c == '"' || c == '`' {
            chars.next();
            let mut text = String::new();
            while let Some(ch) = chars.next() {
                if ch == '\\' {
                    if let Some(escaped) = chars.next() {
                        text.push(escaped);
                    }
                    continue;
                }
                if ch == c {
                    break;
                }
                text.push(ch);
            }
            tokens.push(Token::Str(text));
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' || c == '$' {
            let mut word = String::new();
            while let Some(&ch) = chars.peek() {
                if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' {
                    word.push(ch);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push(Token::Ident(word));
            continue;
        }

        chars.next();
        tokens.push(Token::Punct(c));
    }

    tokens
}
