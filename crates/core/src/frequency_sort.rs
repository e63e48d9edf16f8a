//! Sorting a word list by rank in a canonical frequency-ordered word list,
//! for producing a priority-ordered dictionary source file.

use std::collections::HashMap;

/// Rank `words` by their position in `canonical_order` (lower index = more
/// frequent = sorts first). Words absent from `canonical_order` sort after
/// every ranked word, ties broken by the (possibly case-folded) word itself.
/// Consecutive duplicates in the sorted output are dropped.
pub fn sort_words(words: &[String], canonical_order: &[String], ignore_case: bool) -> Vec<String> {
    let fold = |w: &str| if ignore_case { w.to_lowercase() } else { w.to_string() };

    let frequency_dict: HashMap<String, usize> =
        canonical_order.iter().enumerate().map(|(rank, w)| (fold(w), rank)).collect();
    let not_found_rank = frequency_dict.len();

    let mut ranked: Vec<(usize, String, String)> = words
        .iter()
        .map(|word| {
            let key = fold(word);
            let rank = match frequency_dict.get(&key) {
                Some(rank) => *rank,
                None => {
                    log::warn!("Not found in canonical order: `{word}`");
                    not_found_rank
                }
            };
            (rank, key, word.clone())
        })
        .collect();

    ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    let mut result = Vec::with_capacity(ranked.len());
    let mut prev_key: Option<String> = None;
    for (_, key, word) in ranked {
        if prev_key.as_deref() != Some(key.as_str()) {
            result.push(word);
        }
        prev_key = Some(key);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_canonical_rank() {
        let words = vec!["dog".to_string(), "cat".to_string()];
        let canonical = vec!["cat".to_string(), "dog".to_string()];
        assert_eq!(sort_words(&words, &canonical, false), vec!["cat", "dog"]);
    }

    #[test]
    fn unranked_words_sort_last() {
        let words = vec!["zyzzyva".to_string(), "cat".to_string()];
        let canonical = vec!["cat".to_string()];
        assert_eq!(sort_words(&words, &canonical, false), vec!["cat", "zyzzyva"]);
    }

    #[test]
    fn drops_consecutive_duplicates() {
        let words = vec!["cat".to_string(), "cat".to_string(), "dog".to_string()];
        let canonical = vec!["cat".to_string(), "dog".to_string()];
        assert_eq!(sort_words(&words, &canonical, false), vec!["cat", "dog"]);
    }

    #[test]
    fn ignore_case_folds_rank_lookup() {
        let words = vec!["CAT".to_string()];
        let canonical = vec!["cat".to_string()];
        assert_eq!(sort_words(&words, &canonical, true), vec!["CAT"]);
    }
}
