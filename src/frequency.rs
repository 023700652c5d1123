use std::collections::{hash_map, HashMap};

/// Occurrence counts for each distinct symbol in a sample.
///
/// Empty-string symbols are treated as padding and never counted, so every
/// symbol present has a count of at least 1. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `symbol`.
    pub fn record(&mut self, symbol: &str) {
        if symbol.is_empty() {
            return;
        }
        match self.counts.get_mut(symbol) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(symbol.to_owned(), 1);
            }
        }
    }

    pub fn get(&self, symbol: &str) -> Option<usize> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(symbol, &count)| (symbol.as_str(), count))
    }

    /// Inserts a count directly, replacing any previous one. Zero counts are
    /// ignored, like empty symbols.
    pub(crate) fn insert(&mut self, symbol: String, count: usize) {
        if count != 0 && !symbol.is_empty() {
            self.counts.insert(symbol, count);
        }
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, symbols: I) {
        for symbol in symbols {
            self.record(symbol.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(symbols: I) -> Self {
        let mut table = Self::new();
        table.extend(symbols);
        table
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, usize);
    type IntoIter = hash_map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_symbol() {
        let table: FrequencyTable = ["a", "b", "a", "c", "a", "b"].into_iter().collect();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get("a"), Some(3));
        assert_eq!(table.get("b"), Some(2));
        assert_eq!(table.get("c"), Some(1));
        assert_eq!(table.get("d"), None);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn skips_empty_symbols() {
        let table: FrequencyTable = ["", "x", "", "x"].into_iter().collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(""), None);
        assert_eq!(table.get("x"), Some(2));
    }

    #[test]
    fn only_empty_symbols_is_empty() {
        let table: FrequencyTable = vec![String::new(); 4].into_iter().collect();
        assert!(table.is_empty());
    }

    #[test]
    fn extend_accumulates() {
        let mut table = FrequencyTable::new();
        table.extend(["ab", "cd"]);
        table.extend(vec!["ab".to_string()]);
        assert_eq!(table.get("ab"), Some(2));
        assert_eq!(table.get("cd"), Some(1));
    }
}
