// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{Term, TermMap};

/// A single data point: a map of field name to value.
///
/// Points carry their payload under the reserved [`Record::DATA_KEY`] map.
/// A `Record` is owned for the duration of one call and then handed back to
/// the host as a [`Term`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(TermMap);

impl Record {
    /// Reserved key of the nested payload map.
    pub const DATA_KEY: &'static str = "data";

    pub fn new(fields: TermMap) -> Self {
        Self(fields)
    }

    pub fn get(&self, name: &str) -> Option<&Term> {
        self.0.get_named(name)
    }

    pub fn set(&mut self, name: &str, value: Term) -> Option<Term> {
        self.0.set(name, value)
    }

    /// The nested payload map, if present and map-shaped.
    pub fn data(&self) -> Option<&TermMap> {
        self.get(Self::DATA_KEY).and_then(Term::as_map)
    }

    pub fn fields(&self) -> &TermMap {
        &self.0
    }

    pub fn into_fields(self) -> TermMap {
        self.0
    }
}

/// Only map terms are records; anything else is handed back untouched.
impl TryFrom<Term> for Record {
    type Error = Term;

    fn try_from(term: Term) -> Result<Self, Self::Error> {
        match term {
            Term::Map(map) => Ok(Record(map)),
            other => Err(other),
        }
    }
}

impl From<Record> for Term {
    fn from(record: Record) -> Self {
        Term::Map(record.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_rejects_non_maps() {
        let term = Term::list(vec![Term::integer(1)]);
        let rejected = Record::try_from(term.clone()).unwrap_err();
        assert_eq!(rejected, term);
    }

    #[test]
    fn test_data_requires_map() {
        let mut fields = TermMap::new();
        fields.set("data", Term::integer(4));
        let record = Record::new(fields);

        assert!(record.get("data").is_some());
        assert!(record.data().is_none());
    }

    #[test]
    fn test_into_term_keeps_fields() {
        let mut data = TermMap::new();
        data.set("val", Term::integer(3));
        let mut fields = TermMap::new();
        fields.set("data", Term::Map(data.clone()));

        let mut record = Record::new(fields);
        record.set("doubled", Term::integer(6));

        let term: Term = record.into();
        let map = term.as_map().unwrap();
        assert_eq!(map.get_named("data"), Some(&Term::Map(data)));
        assert_eq!(map.get_named("doubled"), Some(&Term::integer(6)));
    }
}
