// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{self, Display, Formatter};

use super::{TermMap, FALSE_ATOM, TRUE_ATOM, UNDEFINED_ATOM};

/// Scalar payloads carried by a [`Term`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    /// Raw bytes. Text travels as a UTF-8 binary.
    Binary(Vec<u8>),
}

/// A host-native value.
///
/// The variants mirror the constructs the bridge understands natively:
/// atoms, scalars (integers, floats, binaries), lists, tuples and maps.
///
/// # Example
/// ```
/// use faxe_processors::term::{Term, TermMap};
///
/// let mut data = TermMap::new();
/// data.set("val", Term::integer(3));
///
/// let mut point = TermMap::new();
/// point.set("data", Term::Map(data));
/// point.set("id", Term::binary("a"));
///
/// assert_eq!(Term::Map(point).to_string(), r#"#{<<"data">> => #{<<"val">> => 3}, <<"id">> => <<"a">>}"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Atom(String),
    Scalar(Scalar),
    List(Vec<Term>),
    Tuple(Vec<Term>),
    Map(TermMap),
}

impl Term {
    pub fn atom(name: impl Into<String>) -> Self {
        Term::Atom(name.into())
    }

    pub fn integer(value: i64) -> Self {
        Term::Scalar(Scalar::Integer(value))
    }

    pub fn float(value: f64) -> Self {
        Term::Scalar(Scalar::Float(value))
    }

    /// A UTF-8 binary holding `text`.
    pub fn binary(text: impl Into<String>) -> Self {
        Term::Scalar(Scalar::Binary(text.into().into_bytes()))
    }

    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Term::Scalar(Scalar::Binary(bytes.into()))
    }

    pub fn boolean(value: bool) -> Self {
        Term::atom(if value { TRUE_ATOM } else { FALSE_ATOM })
    }

    pub fn undefined() -> Self {
        Term::atom(UNDEFINED_ATOM)
    }

    pub fn list(items: impl IntoIterator<Item = Term>) -> Self {
        Term::List(items.into_iter().collect())
    }

    pub fn tuple(items: impl IntoIterator<Item = Term>) -> Self {
        Term::Tuple(items.into_iter().collect())
    }

    /// Short name of the variant, used in type-mismatch reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Term::Atom(_) => "atom",
            Term::Scalar(Scalar::Integer(_)) => "integer",
            Term::Scalar(Scalar::Float(_)) => "float",
            Term::Scalar(Scalar::Binary(_)) => "binary",
            Term::List(_) => "list",
            Term::Tuple(_) => "tuple",
            Term::Map(_) => "map",
        }
    }

    /// Text of an atom or a UTF-8 binary.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Term::Atom(name) => Some(name),
            Term::Scalar(Scalar::Binary(bytes)) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    /// Text of a UTF-8 binary. Atoms are not accepted.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Term::Scalar(Scalar::Binary(bytes)) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Term::Scalar(Scalar::Integer(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Term::Scalar(Scalar::Float(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Term::Atom(name) if name == TRUE_ATOM => Some(true),
            Term::Atom(name) if name == FALSE_ATOM => Some(false),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Term]> {
        match self {
            Term::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&TermMap> {
        match self {
            Term::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut TermMap> {
        match self {
            Term::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Term::Atom(name) if name == UNDEFINED_ATOM)
    }

    /// True when this term is an atom or a binary spelling `name`.
    ///
    /// Host maps are keyed by atoms or binaries depending on where they were
    /// built, so lookups by name accept either.
    pub fn is_named(&self, name: &str) -> bool {
        match self {
            Term::Atom(atom) => atom == name,
            Term::Scalar(Scalar::Binary(bytes)) => bytes.as_slice() == name.as_bytes(),
            _ => false,
        }
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::integer(value)
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::float(value)
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::boolean(value)
    }
}

impl From<&str> for Term {
    fn from(text: &str) -> Self {
        Term::binary(text)
    }
}

impl From<String> for Term {
    fn from(text: String) -> Self {
        Term::binary(text)
    }
}

impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        Term::List(items)
    }
}

impl From<TermMap> for Term {
    fn from(map: TermMap) -> Self {
        Term::Map(map)
    }
}

fn write_joined(f: &mut Formatter<'_>, items: &[Term]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn is_bare_atom(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '@')
        }
        _ => false,
    }
}

/// Renders terms in host notation for log output.
impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(name) if is_bare_atom(name) => write!(f, "{}", name),
            Term::Atom(name) => write!(f, "'{}'", name.escape_default()),
            Term::Scalar(Scalar::Integer(value)) => write!(f, "{}", value),
            Term::Scalar(Scalar::Float(value)) => write!(f, "{:?}", value),
            Term::Scalar(Scalar::Binary(bytes)) => match std::str::from_utf8(bytes) {
                Ok(text) => write!(f, "<<\"{}\">>", text.escape_default()),
                Err(_) => {
                    write!(f, "<<")?;
                    for (i, byte) in bytes.iter().enumerate() {
                        if i > 0 {
                            write!(f, ",")?;
                        }
                        write!(f, "{}", byte)?;
                    }
                    write!(f, ">>")
                }
            },
            Term::List(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            Term::Tuple(items) => {
                write!(f, "{{")?;
                write_joined(f, items)?;
                write!(f, "}}")
            }
            Term::Map(map) => write!(f, "{}", map),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        let cases = vec![
            (Term::atom("ok"), "atom"),
            (Term::integer(1), "integer"),
            (Term::float(1.5), "float"),
            (Term::binary("x"), "binary"),
            (Term::list(vec![]), "list"),
            (Term::tuple(vec![]), "tuple"),
            (Term::Map(TermMap::new()), "map"),
        ];

        for (term, expected) in cases {
            assert_eq!(term.kind(), expected, "kind of {}", term);
        }
    }

    #[test]
    fn test_is_named_matches_atoms_and_binaries() {
        assert!(Term::atom("foo").is_named("foo"));
        assert!(Term::binary("foo").is_named("foo"));
        assert!(!Term::binary("foo").is_named("bar"));
        assert!(!Term::integer(1).is_named("1"));
    }

    #[test]
    fn test_as_text_rejects_atoms_and_invalid_utf8() {
        assert_eq!(Term::binary("abc").as_text(), Some("abc"));
        assert_eq!(Term::atom("abc").as_text(), None);
        assert_eq!(Term::bytes(vec![0xff, 0xfe]).as_text(), None);
        assert_eq!(Term::atom("abc").as_str(), Some("abc"));
    }

    #[test]
    fn test_booleans_are_atoms() {
        assert_eq!(Term::boolean(true), Term::atom("true"));
        assert_eq!(Term::atom("false").as_bool(), Some(false));
        assert_eq!(Term::atom("maybe").as_bool(), None);
        assert!(Term::undefined().is_undefined());
    }

    #[test]
    fn test_display_uses_host_notation() {
        let term = Term::list(vec![
            Term::tuple(vec![Term::atom("foo"), Term::atom("string")]),
            Term::atom("Quoted Atom"),
            Term::float(2.0),
            Term::bytes(vec![1, 2, 255]),
        ]);

        assert_eq!(term.to_string(), "[{foo, string}, 'Quoted Atom', 2.0, <<1,2,255>>]");
    }
}
