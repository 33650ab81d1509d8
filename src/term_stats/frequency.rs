use std::collections::HashMap;

/// A term and how often it was counted.
pub type TermCount = (String, usize);

/// Occurrence count of every term across a set of term lists.
///
/// Remembers the order in which terms were first seen so rankings break ties
/// the same way on every run.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, term: &str) {
        if let Some(count) = self.counts.get_mut(term) {
            *count += 1;
        } else {
            self.counts.insert(term.to_string(), 1);
            self.first_seen.push(term.to_string());
        }
    }

    pub fn update<'a, I>(&mut self, terms: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for term in terms {
            self.add(term);
        }
    }

    pub fn get(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Terms with their counts, in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.first_seen
            .iter()
            .map(|term| (term.as_str(), self.get(term)))
    }

    /// The `n` highest counts, descending; equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<TermCount> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(n)
            .map(|(term, count)| (term.to_string(), count))
            .collect()
    }
}

impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for FrequencyTable {}

/// Counts every term of every list and returns the table together with its
/// `n` most common terms.
pub fn calculate_term_frequencies<'a, I>(
    term_lists: I,
    n: usize,
) -> (FrequencyTable, Vec<TermCount>)
where
    I: IntoIterator<Item = &'a Vec<String>>,
{
    let mut table = FrequencyTable::new();
    for term_list in term_lists {
        table.update(term_list);
    }

    let most_common = table.most_common(n);

    (table, most_common)
}

/// Counts the terms of every list that contains `keyword`, the keyword
/// included, and returns the `n` most common.
pub fn search_word_co_occurrences<'a, I>(keyword: &str, term_lists: I, n: usize) -> Vec<TermCount>
where
    I: IntoIterator<Item = &'a Vec<String>>,
{
    let mut table = FrequencyTable::new();
    for term_list in term_lists {
        if term_list.iter().any(|term| term == keyword) {
            table.update(term_list);
        }
    }

    table.most_common(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(lists: &[&[&str]]) -> Vec<Vec<String>> {
        lists
            .iter()
            .map(|list| list.iter().map(|term| (*term).to_string()).collect())
            .collect()
    }

    #[test]
    fn counts() {
        let term_lists = lists(&[&["a", "b"], &["a", "c"], &["b", "c"]]);

        let (table, most_common) = calculate_term_frequencies(&term_lists, 10);

        assert_eq!(table.get("a"), 2);
        assert_eq!(table.get("b"), 2);
        assert_eq!(table.get("c"), 2);
        assert_eq!(table.get("d"), 0);
        assert_eq!(table.len(), 3);
        assert_eq!(
            most_common,
            vec![
                ("a".to_string(), 2),
                ("b".to_string(), 2),
                ("c".to_string(), 2)
            ]
        );
    }

    #[test]
    fn most_common_ties_keep_first_seen_order() {
        let term_lists = lists(&[&["x", "y", "z", "z"], &["w", "y"]]);

        let (_, most_common) = calculate_term_frequencies(&term_lists, 3);

        assert_eq!(
            most_common,
            vec![
                ("y".to_string(), 2),
                ("z".to_string(), 2),
                ("x".to_string(), 1)
            ]
        );
    }

    #[test]
    fn order_independent() {
        let mut term_lists = lists(&[&["a", "b", "a"], &["c"], &["b", "d", "a"]]);

        let (forward, _) = calculate_term_frequencies(&term_lists, 0);
        term_lists.reverse();
        let (backward, _) = calculate_term_frequencies(&term_lists, 0);

        assert_eq!(forward, backward);
        assert_eq!(forward.get("a"), 3);
    }

    #[test]
    fn empty() {
        let (table, most_common) = calculate_term_frequencies(&Vec::<Vec<String>>::new(), 5);

        assert!(table.is_empty());
        assert!(most_common.is_empty());
    }

    #[test]
    fn keyword_co_occurrences() {
        let term_lists = lists(&[&["a", "b"], &["a", "c"], &["c", "d"]]);

        let found = search_word_co_occurrences("a", &term_lists, 2);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0], ("a".to_string(), 2));
        assert_eq!(found[1].1, 1);
        assert!(found[1].0 == "b" || found[1].0 == "c");
    }

    #[test]
    fn keyword_not_found() {
        let term_lists = lists(&[&["a", "b"]]);

        assert!(search_word_co_occurrences("z", &term_lists, 3).is_empty());
    }
}
