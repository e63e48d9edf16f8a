//! Merging several dictionary JSON files into one, matching directory-walk
//! order by a natural sort (so `file2.json` sorts before `file10.json`).

use std::cmp::Ordering;

use serde_json::{Map, Value};

/// A natural-sort key: alternating runs of digits (compared numerically)
/// and non-digit text (compared lexicographically), e.g. `"file10"` →
/// `[Text("file"), Num(10)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKeyPart {
    Text(String),
    Num(u64),
}

impl PartialOrd for SortKeyPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKeyPart {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKeyPart::Text(a), SortKeyPart::Text(b)) => a.cmp(b),
            (SortKeyPart::Num(a), SortKeyPart::Num(b)) => a.cmp(b),
            (SortKeyPart::Text(_), SortKeyPart::Num(_)) => Ordering::Less,
            (SortKeyPart::Num(_), SortKeyPart::Text(_)) => Ordering::Greater,
        }
    }
}

pub fn natural_sort_key(s: &str) -> Vec<SortKeyPart> {
    let mut parts = Vec::new();
    let mut chars = s.chars().peekable();

    while chars.peek().is_some() {
        if chars.peek().unwrap().is_ascii_digit() {
            let mut digits = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_digit() {
                    digits.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            parts.push(SortKeyPart::Num(digits.parse().unwrap_or(u64::MAX)));
        } else {
            let mut text = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_digit() {
                    break;
                }
                text.push(c);
                chars.next();
            }
            parts.push(SortKeyPart::Text(text));
        }
    }

    parts
}

/// Merge JSON objects loaded from files, in the given order. The first file
/// to define a key wins; later files that redefine a key with a different
/// value are logged as a warning (same value: debug), matching the directory
/// merge's "first file has highest priority" rule.
pub fn merge_json_objects(files: Vec<(String, Map<String, Value>)>) -> Map<String, Value> {
    let mut combined: Map<String, Value> = Map::new();

    for (filename, contents) in files {
        for (key, value) in contents {
            match combined.get(&key) {
                None => {
                    combined.insert(key, value);
                }
                Some(existing) if existing == &value => {
                    log::debug!("`{filename}` rule `{key}: {value}` duplicates the kept value");
                }
                Some(existing) => {
                    log::warn!(
                        "Ignoring `{filename}` rule `{key}: {value}`; `{key}: {existing}` has higher priority"
                    );
                }
            }
        }
    }

    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_sort_orders_numbers_numerically() {
        let mut files = vec!["file10.json".to_string(), "file2.json".to_string()];
        files.sort_by_key(|f| natural_sort_key(f));
        assert_eq!(files, vec!["file2.json".to_string(), "file10.json".to_string()]);
    }

    #[test]
    fn first_file_wins_on_conflict() {
        let mut a = Map::new();
        a.insert("KAT".to_string(), Value::String("cat".to_string()));
        let mut b = Map::new();
        b.insert("KAT".to_string(), Value::String("catalog".to_string()));

        let merged = merge_json_objects(vec![("a.json".to_string(), a), ("b.json".to_string(), b)]);
        assert_eq!(merged.get("KAT"), Some(&Value::String("cat".to_string())));
    }

    #[test]
    fn disjoint_keys_all_survive() {
        let mut a = Map::new();
        a.insert("KAT".to_string(), Value::String("cat".to_string()));
        let mut b = Map::new();
        b.insert("TKOG".to_string(), Value::String("dog".to_string()));

        let merged = merge_json_objects(vec![("a.json".to_string(), a), ("b.json".to_string(), b)]);
        assert_eq!(merged.len(), 2);
    }
}
