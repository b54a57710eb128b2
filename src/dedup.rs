//! Deduplication helpers for name-keyed collections.
//!
//! Entities keep indices and file imports in insertion order while treating
//! them as sets keyed by name: the first insertion wins and later attempts
//! with the same key are no-ops.

/// Push `item` unless an existing element has the same key. Returns whether it was pushed.
///
/// # Example
/// ```ignore
/// let mut names = vec!["a".to_string()];
/// assert!(!push_unique_by(&mut names, "a".to_string(), |s| s.clone()));
/// assert!(push_unique_by(&mut names, "b".to_string(), |s| s.clone()));
/// ```
pub fn push_unique_by<T, F, K>(items: &mut Vec<T>, item: T, key_fn: F) -> bool
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    let key = key_fn(&item);
    if items.iter().any(|existing| key_fn(existing) == key) {
        return false;
    }
    items.push(item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_unique_by_first_wins() {
        let mut items = vec![("a", 1)];
        assert!(!push_unique_by(&mut items, ("a", 2), |(k, _)| *k));
        assert!(push_unique_by(&mut items, ("b", 3), |(k, _)| *k));
        assert_eq!(items, vec![("a", 1), ("b", 3)]);
    }

    #[test]
    fn test_push_unique_by_preserves_order() {
        let mut items: Vec<String> = Vec::new();
        for name in ["z", "a", "z", "m", "a"] {
            push_unique_by(&mut items, name.to_string(), |s| s.clone());
        }
        assert_eq!(items, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_push_unique_by_empty() {
        let mut items: Vec<i32> = Vec::new();
        assert!(push_unique_by(&mut items, 7, |i| *i));
        assert_eq!(items, vec![7]);
    }
}
