use std::collections::HashMap;

/// Returns the `n` largest entries, highest value first.
///
/// A name seen twice keeps its first position and its last value. Ties keep
/// their input order and non-finite values are dropped.
pub fn top_n<I, S>(entries: I, n: usize) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = (S, f64)>,
    S: Into<String>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut ranked: Vec<(String, f64)> = Vec::new();

    for (name, value) in entries {
        let name = name.into();
        if let Some(&i) = positions.get(&name) {
            ranked[i].1 = value;
        } else {
            positions.insert(name.clone(), ranked.len());
            ranked.push((name, value));
        }
    }

    ranked.retain(|(_, value)| value.is_finite());
    // sort_by is stable
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_sorted_and_truncated() {
        let entries = [
            ("Tron", 8.0),
            ("Ethereum", 25.0),
            ("BSC", 5.0),
            ("Arbitrum", 2.5),
            ("Polygon", 1.0),
        ];
        let top = top_n(entries, 3);
        assert_eq!(
            top,
            vec![
                ("Ethereum".to_string(), 25.0),
                ("Tron".to_string(), 8.0),
                ("BSC".to_string(), 5.0),
            ]
        );
    }

    #[test]
    fn test_top_n_fewer_entries_than_n() {
        let top = top_n([("Ethereum", 1.0), ("Base", 2.0)], 10);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "Base");
        assert!(top_n([("Ethereum", 1.0)], 0).is_empty());
        assert!(top_n(Vec::<(String, f64)>::new(), 5).is_empty());
    }

    #[test]
    fn test_top_n_ties_keep_input_order() {
        let top = top_n([("b", 1.0), ("a", 1.0), ("c", 2.0), ("d", 1.0)], 4);
        let names: Vec<_> = top.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["c", "b", "a", "d"]);
    }

    #[test]
    fn test_top_n_duplicates_and_nan() {
        let top = top_n(
            [("a", 1.0), ("b", f64::NAN), ("c", 3.0), ("a", 5.0), ("d", -1.0)],
            10,
        );
        assert_eq!(
            top,
            vec![
                ("a".to_string(), 5.0),
                ("c".to_string(), 3.0),
                ("d".to_string(), -1.0),
            ]
        );
    }
}
