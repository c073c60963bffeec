//! Wrap-around navigation over a result set.

use crate::results::poem::PoemRecord;

/// Cursor over the current search results.
///
/// Always holds at least one record: an empty result set is replaced by
/// the placeholder poem, so `current()` never fails. Next/previous wrap
/// around at the ends and tolerate arbitrarily rapid calls — the only
/// state is the index.
#[derive(Debug, Clone)]
pub struct Navigator {
    records: Vec<PoemRecord>,
    index: usize,
}

impl Navigator {
    pub fn new(records: Vec<PoemRecord>) -> Self {
        let records = if records.is_empty() {
            vec![PoemRecord::placeholder()]
        } else {
            records
        };
        Self { records, index: 0 }
    }

    pub fn current(&self) -> &PoemRecord {
        &self.records[self.index]
    }

    pub fn next(&mut self) -> &PoemRecord {
        self.index = (self.index + 1) % self.records.len();
        self.current()
    }

    pub fn prev(&mut self) -> &PoemRecord {
        self.index = (self.index + self.records.len() - 1) % self.records.len();
        self.current()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        false // always at least the placeholder
    }
}
