//! Minimal S-expression reader for the script input format.
//!
//! The grammar is deliberately tiny: lists, integers, double-quoted strings
//! (with `\"`-style escapes, `\n` for newline), and bare symbols. `;` starts
//! a comment that runs to end of line.

use crate::foundation::error::{BoardcastError, BoardcastResult};

/// One node of a parsed script tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// A bare atom that parsed as an integer.
    Int(i64),
    /// Any other bare atom.
    Symbol(String),
    /// A double-quoted string.
    Str(String),
    /// A parenthesized list.
    List(Vec<Value>),
}

impl Value {
    /// The list elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// The symbol text, if this is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// The string contents, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Name-like text: accepts both `Symbol` and `Str` (scripts are loose
    /// about quoting player and space names).
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) | Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// True if this is the symbol `name`.
    pub fn is_symbol(&self, name: &str) -> bool {
        self.as_symbol() == Some(name)
    }
}

/// Parse exactly one S-expression; trailing input is an error.
pub fn parse(input: &str) -> BoardcastResult<Value> {
    let mut reader = Reader::new(input);
    let value = reader.read_value()?;
    reader.skip_whitespace();
    if !reader.is_eof() {
        return Err(BoardcastError::syntax("expected end of input", reader.pos));
    }
    Ok(value)
}

/// Parse a whole file as a sequence of top-level S-expressions.
pub fn parse_many(input: &str) -> BoardcastResult<Vec<Value>> {
    let mut reader = Reader::new(input);
    let values = reader.read_list_contents()?;
    reader.skip_whitespace();
    if !reader.is_eof() {
        return Err(BoardcastError::syntax("expected end of input", reader.pos));
    }
    Ok(values)
}

/// Parse a `(head :key value :key value ...)` form into its head symbol and
/// normalized key/value pairs. Keys must be `:`-prefixed symbols; a leading
/// colon is stripped and dashes become underscores. Duplicate keys are
/// rejected.
pub fn parse_plist(value: &Value) -> BoardcastResult<(String, Vec<(String, Value)>)> {
    let items = value
        .as_list()
        .ok_or_else(|| BoardcastError::malformed("expected a list for a keyword form"))?;
    let Some((head, rest)) = items.split_first() else {
        return Err(BoardcastError::malformed(
            "expected a non-empty keyword form",
        ));
    };
    let head = head
        .as_symbol()
        .ok_or_else(|| BoardcastError::malformed("expected a symbol head in keyword form"))?;
    if !rest.len().is_multiple_of(2) {
        return Err(BoardcastError::malformed(format!(
            "({head} ...) form has a key without a value"
        )));
    }

    let mut pairs: Vec<(String, Value)> = Vec::with_capacity(rest.len() / 2);
    for kv in rest.chunks_exact(2) {
        let key = kv[0].as_symbol().ok_or_else(|| {
            BoardcastError::malformed(format!("expected a :keyword in ({head} ...) form"))
        })?;
        let key = key.strip_prefix(':').unwrap_or(key).replace('-', "_");
        if pairs.iter().any(|(k, _)| *k == key) {
            return Err(BoardcastError::malformed(format!(
                "duplicate key '{key}' in ({head} ...) form"
            )));
        }
        pairs.push((key, kv[1].clone()));
    }
    Ok((head.to_string(), pairs))
}

struct Reader<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> BoardcastResult<char> {
        let c = self
            .peek()
            .ok_or_else(|| BoardcastError::syntax("unexpected end of input", self.pos))?;
        self.pos += c.len_utf8();
        Ok(c)
    }

    fn read_value(&mut self) -> BoardcastResult<Value> {
        self.skip_whitespace();
        match self.peek() {
            Some('(') => self.read_list(),
            Some('"') => self.read_string(),
            Some(_) => self.read_atom(),
            None => Err(BoardcastError::syntax("unexpected end of input", self.pos)),
        }
    }

    fn read_list(&mut self) -> BoardcastResult<Value> {
        self.bump()?; // opening parenthesis
        let items = self.read_list_contents()?;
        self.skip_whitespace();
        match self.peek() {
            Some(')') => {
                self.bump()?;
                Ok(Value::List(items))
            }
            _ => Err(BoardcastError::syntax("expected ')'", self.pos)),
        }
    }

    fn read_list_contents(&mut self) -> BoardcastResult<Vec<Value>> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None | Some(')') => break,
                Some(_) => items.push(self.read_value()?),
            }
        }
        Ok(items)
    }

    fn read_string(&mut self) -> BoardcastResult<Value> {
        self.bump()?; // opening quote
        let mut out = String::new();
        loop {
            match self.bump()? {
                '"' => return Ok(Value::Str(out)),
                '\\' => match self.bump()? {
                    'n' => out.push('\n'),
                    c => out.push(c),
                },
                c => out.push(c),
            }
        }
    }

    fn read_atom(&mut self) -> BoardcastResult<Value> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '(' || c == ')' || c == ';' || c == '"' {
                break;
            }
            self.bump()?;
        }
        let atom = &self.input[start..self.pos];
        if atom.is_empty() {
            return Err(BoardcastError::syntax("expected an atom", start));
        }
        match atom.parse::<i64>() {
            Ok(v) => Ok(Value::Int(v)),
            Err(_) => Ok(Value::Symbol(atom.to_string())),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c == ';' {
                while let Some(c) = self.peek() {
                    self.pos += c.len_utf8();
                    if c == '\n' {
                        break;
                    }
                }
            } else if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/sexpr.rs"]
mod tests;
