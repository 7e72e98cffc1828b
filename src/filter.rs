//! Substring filtering of candidate lists.
//!
//! Matching is a case-insensitive substring test against each candidate's
//! [`Candidate::filter_value`]. Results keep the order of the input list and
//! an empty query matches everything. Nothing matching is not an error; the
//! result is simply empty.

/// Something that can be offered as a suggestion.
pub trait Candidate {
    /// The text matched against the query, usually the display name.
    fn filter_value(&self) -> &str;
}

impl Candidate for String {
    fn filter_value(&self) -> &str {
        self
    }
}

impl Candidate for &str {
    fn filter_value(&self) -> &str {
        self
    }
}

/// Returns the indices of the candidates whose filter value contains `query`,
/// ignoring case, in their original order.
///
/// ```rust
/// use people_autocomplete::filter::filter_indices;
///
/// let names = ["Alice", "Bob", "Malik"];
/// assert_eq!(filter_indices(&names, "AL"), vec![0, 2]);
/// assert_eq!(filter_indices(&names, ""), vec![0, 1, 2]);
/// assert!(filter_indices(&names, "zed").is_empty());
/// ```
pub fn filter_indices<C: Candidate>(candidates: &[C], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..candidates.len()).collect();
    }

    let needle = query.to_lowercase();
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.filter_value().to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// Returns clones of the matching candidates in their original order.
pub fn filter<C: Candidate + Clone>(candidates: &[C], query: &str) -> Vec<C> {
    filter_indices(candidates, query)
        .into_iter()
        .map(|i| candidates[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names() -> Vec<String> {
        ["Carolus Haverbeke", "Emma de Milliano", "Maria de Rycke", "Jan van Brussel"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_empty_query_matches_everything_in_order() {
        let c = names();
        assert_eq!(filter(&c, ""), c);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let c = names();
        assert_eq!(
            filter(&c, "DE"),
            vec!["Emma de Milliano".to_string(), "Maria de Rycke".to_string()]
        );
        assert_eq!(filter(&c, "russ"), vec!["Jan van Brussel".to_string()]);
    }

    #[test]
    fn test_preserves_original_order() {
        let c = names();
        // "a" appears in every name; order must not change.
        assert_eq!(filter_indices(&c, "a"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let c = names();
        assert!(filter(&c, "xyz").is_empty());
        assert!(filter_indices::<String>(&[], "a").is_empty());
    }

    #[test]
    fn test_whitespace_is_significant() {
        let c = names();
        assert_eq!(filter_indices(&c, "de m"), vec![1]);
        assert!(filter_indices(&c, "  ").is_empty());
    }

    #[test]
    fn test_matches_exactly_the_lowercased_containment_set() {
        let c = names();
        for q in ["a", "e", "van", "Ma", "ke", "q"] {
            let expected: Vec<usize> = c
                .iter()
                .enumerate()
                .filter(|(_, n)| n.to_lowercase().contains(&q.to_lowercase()))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(filter_indices(&c, q), expected, "query {q:?}");
        }
    }

    proptest! {
        #[test]
        fn test_matches_are_the_ordered_containment_set(
            candidates in prop::collection::vec("[a-zA-Z ]{0,12}", 0..20),
            query in "[a-zA-Z ]{0,3}",
        ) {
            let q = query.to_lowercase();
            let expected: Vec<usize> = candidates
                .iter()
                .enumerate()
                .filter(|(_, c)| c.to_lowercase().contains(&q))
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(filter_indices(&candidates, &query), expected);
        }

        #[test]
        fn test_empty_query_keeps_every_index(
            candidates in prop::collection::vec(".{0,12}", 0..20),
        ) {
            let all: Vec<usize> = (0..candidates.len()).collect();
            prop_assert_eq!(filter_indices(&candidates, ""), all);
        }
    }
}
