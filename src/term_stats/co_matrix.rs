use std::collections::BTreeMap;

/// A pair of terms and how many times they appeared together.
pub type PairCount = ((String, String), usize);

/// Symmetric co-occurrence counts, stored once per unordered pair under the
/// lexicographically smaller term. Pairs of a term with itself are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoMatrix {
    rows: BTreeMap<String, BTreeMap<String, usize>>,
}

impl CoMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one co-occurrence of `a` and `b`, in either order.
    pub fn increment(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };

        *self
            .rows
            .entry(low.to_string())
            .or_default()
            .entry(high.to_string())
            .or_insert(0) += 1;
    }

    /// Count for the pair, looked up the same way for `(a, b)` and `(b, a)`.
    /// Pairs that were never seen count 0.
    pub fn get(&self, a: &str, b: &str) -> usize {
        let (low, high) = if a < b { (a, b) } else { (b, a) };

        self.rows
            .get(low)
            .and_then(|row| row.get(high))
            .copied()
            .unwrap_or(0)
    }

    /// Every stored pair `(low, high, count)` in lexicographic order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, usize)> + '_ {
        self.rows.iter().flat_map(|(low, row)| {
            row.iter()
                .map(move |(high, count)| (low.as_str(), high.as_str(), *count))
        })
    }

    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Counts, for every term list, each pair of positions `i < j` holding
/// different terms. A term repeated within one list adds one count per
/// position it pairs with.
pub fn generate_co_matrix<'a, I>(term_lists: I) -> CoMatrix
where
    I: IntoIterator<Item = &'a Vec<String>>,
{
    let mut matrix = CoMatrix::new();

    for term_list in term_lists {
        for (i, a) in term_list.iter().enumerate() {
            for b in &term_list[i + 1..] {
                matrix.increment(a, b);
            }
        }
    }

    matrix
}

/// The `n` most frequent pairs. Each left-hand term first contributes at most
/// its own `n` best partners, then all of those are ranked together. Equal
/// counts rank by left-hand term, then partner.
pub fn co_occurrent_terms(matrix: &CoMatrix, n: usize) -> Vec<PairCount> {
    let mut candidates = Vec::new();

    for (low, row) in &matrix.rows {
        let mut partners: Vec<_> = row.iter().collect();
        partners.sort_by(|a, b| b.1.cmp(a.1));

        candidates.extend(
            partners
                .into_iter()
                .take(n)
                .map(|(high, count)| ((low.clone(), high.clone()), *count)),
        );
    }

    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    candidates.truncate(n);

    candidates
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

    fn pair(a: &str, b: &str, count: usize) -> PairCount {
        ((a.to_string(), b.to_string()), count)
    }

    #[test]
    fn scenario() {
        let matrix = generate_co_matrix(&lists(&[&["a", "b"], &["a", "c"], &["b", "c"]]));

        assert_eq!(
            matrix.pairs().collect::<Vec<_>>(),
            vec![("a", "b", 1), ("a", "c", 1), ("b", "c", 1)]
        );
        assert_eq!(matrix.len(), 3);
    }

    #[test]
    fn symmetric_lookup() {
        let matrix = generate_co_matrix(&lists(&[&["zebra", "apple"]]));

        assert_eq!(matrix.get("apple", "zebra"), 1);
        assert_eq!(matrix.get("zebra", "apple"), 1);
        assert_eq!(matrix.get("apple", "pear"), 0);
        assert_eq!(
            matrix.pairs().collect::<Vec<_>>(),
            vec![("apple", "zebra", 1)]
        );
    }

    #[test]
    fn no_self_pairs() {
        let matrix = generate_co_matrix(&lists(&[&["a", "a"], &["b"]]));

        assert!(matrix.is_empty());
        assert_eq!(matrix.get("a", "a"), 0);
    }

    #[test]
    fn repeats_inflate_counts() {
        let matrix = generate_co_matrix(&lists(&[&["a", "b", "a"]]));

        assert_eq!(matrix.get("a", "b"), 2);
    }

    #[test]
    fn ranked_pairs() {
        let matrix = generate_co_matrix(&lists(&[
            &["a", "b", "c"],
            &["a", "b"],
            &["a", "b", "d"],
            &["c", "d"],
            &["c", "d"],
        ]));

        assert_eq!(
            co_occurrent_terms(&matrix, 2),
            vec![pair("a", "b", 3), pair("c", "d", 2)]
        );
    }

    #[test]
    fn ties_follow_term_order() {
        let matrix = generate_co_matrix(&lists(&[
            &["a", "b", "c", "x", "y"],
            &["a", "b", "c"],
            &["a", "b", "c"],
            &["x", "y"],
        ]));

        let ranked = co_occurrent_terms(&matrix, 1);
        assert_eq!(ranked, vec![pair("a", "b", 3)]);

        let ranked = co_occurrent_terms(&matrix, 2);
        assert_eq!(ranked, vec![pair("a", "b", 3), pair("a", "c", 3)]);

        let ranked = co_occurrent_terms(&matrix, 3);
        assert_eq!(
            ranked,
            vec![pair("a", "b", 3), pair("a", "c", 3), pair("b", "c", 3)]
        );
    }

    #[test]
    fn deterministic() {
        let term_lists = lists(&[&["d", "c", "b", "a"], &["a", "d"], &["c", "b"]]);

        let first = co_occurrent_terms(&generate_co_matrix(&term_lists), 4);
        let second = co_occurrent_terms(&generate_co_matrix(&term_lists), 4);

        assert_eq!(first, second);
    }
}
