// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{self, Display, Formatter};

use super::Term;

/// Insertion-ordered map of terms.
///
/// Host maps are small, so entries are kept in a vector and looked up
/// linearly. Replacing an existing key keeps its position, which means a
/// transform that rewrites one field leaves the layout of every other field
/// untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TermMap(Vec<(Term, Term)>);

impl TermMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Term, &Term)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Term> {
        self.0.iter().map(|(k, _)| k)
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &Term) -> Option<&Term> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Lookup by name, matching either an atom or a binary key.
    pub fn get_named(&self, name: &str) -> Option<&Term> {
        self.0.iter().find(|(k, _)| k.is_named(name)).map(|(_, v)| v)
    }

    pub fn get_named_mut(&mut self, name: &str) -> Option<&mut Term> {
        self.0
            .iter_mut()
            .find(|(k, _)| k.is_named(name))
            .map(|(_, v)| v)
    }

    pub fn contains_named(&self, name: &str) -> bool {
        self.get_named(name).is_some()
    }

    /// Exact-key insert. Returns the previous value if the key was present.
    pub fn insert(&mut self, key: Term, value: Term) -> Option<Term> {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    /// Insert by name. An existing atom or binary key spelling `name` is
    /// reused; otherwise a binary key is appended.
    pub fn set(&mut self, name: &str, value: Term) -> Option<Term> {
        match self.get_named_mut(name) {
            Some(slot) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((Term::binary(name), value));
                None
            }
        }
    }

    pub fn remove_named(&mut self, name: &str) -> Option<Term> {
        let index = self.0.iter().position(|(k, _)| k.is_named(name))?;
        Some(self.0.remove(index).1)
    }
}

impl FromIterator<(Term, Term)> for TermMap {
    fn from_iter<I: IntoIterator<Item = (Term, Term)>>(iter: I) -> Self {
        let mut map = TermMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for TermMap {
    type Item = (Term, Term);
    type IntoIter = std::vec::IntoIter<(Term, Term)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for TermMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} => {}", key, value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut map = TermMap::new();
        map.set("a", Term::integer(1));
        map.set("b", Term::integer(2));
        map.set("c", Term::integer(3));

        let previous = map.set("b", Term::integer(20));

        assert_eq!(previous, Some(Term::integer(2)));
        let keys: Vec<_> = map.keys().filter_map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(map.get_named("b"), Some(&Term::integer(20)));
    }

    #[test]
    fn test_set_reuses_atom_key() {
        let mut map = TermMap::new();
        map.insert(Term::atom("field"), Term::binary("val"));

        map.set("field", Term::binary("other"));

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&Term::atom("field")), Some(&Term::binary("other")));
    }

    #[test]
    fn test_exact_lookup_distinguishes_atom_from_binary() {
        let mut map = TermMap::new();
        map.insert(Term::atom("k"), Term::integer(1));

        assert_eq!(map.get(&Term::binary("k")), None);
        assert_eq!(map.get_named("k"), Some(&Term::integer(1)));
    }

    #[test]
    fn test_from_iter_collapses_duplicates() {
        let map: TermMap = vec![
            (Term::binary("x"), Term::integer(1)),
            (Term::binary("x"), Term::integer(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get_named("x"), Some(&Term::integer(2)));
    }

    #[test]
    fn test_remove_named() {
        let mut map = TermMap::new();
        map.set("gone", Term::atom("ok"));

        assert_eq!(map.remove_named("gone"), Some(Term::atom("ok")));
        assert!(map.is_empty());
        assert_eq!(map.remove_named("gone"), None);
    }
}
