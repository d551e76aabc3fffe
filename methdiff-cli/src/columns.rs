//! Column-list specification parsing.
//!
//! A spec is a comma-separated list where each item is a single zero-based
//! index (`"4"`) or an inclusive range (`"2-5"`). Order is preserved and
//! duplicates are allowed; foreground and background lists pair up by
//! position, not by value.

use methdiff_core::{MethdiffError, Result};

/// Parse a column spec like `"1,3,5-8"` into explicit indices.
pub fn parse_column_spec(spec: &str) -> Result<Vec<usize>> {
    let mut indices = Vec::new();
    for item in spec.split(',') {
        let item = item.trim();
        if item.is_empty() {
            return Err(MethdiffError::Parse(format!(
                "column spec {spec:?}: empty item",
            )));
        }
        // A '-' past the first character separates a range; a leading '-'
        // would be a negative index, which parse_index rejects.
        let dash = item
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i);
        match dash {
            Some(pos) => {
                let (lo, hi) = item.split_at(pos);
                let lo = parse_index(lo, spec)?;
                let hi = parse_index(&hi[1..], spec)?;
                if lo > hi {
                    return Err(MethdiffError::Parse(format!(
                        "column spec {spec:?}: descending range {item:?}",
                    )));
                }
                indices.extend(lo..=hi);
            }
            None => indices.push(parse_index(item, spec)?),
        }
    }
    Ok(indices)
}

fn parse_index(s: &str, spec: &str) -> Result<usize> {
    s.parse().map_err(|_| {
        MethdiffError::Parse(format!("column spec {spec:?}: bad index {s:?}"))
    })
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_indices() {
        assert_eq!(parse_column_spec("3").unwrap(), vec![3]);
        assert_eq!(parse_column_spec("0,2,7").unwrap(), vec![0, 2, 7]);
    }

    #[test]
    fn ranges() {
        assert_eq!(parse_column_spec("2-5").unwrap(), vec![2, 3, 4, 5]);
        assert_eq!(parse_column_spec("1,4-6,9").unwrap(), vec![1, 4, 5, 6, 9]);
    }

    #[test]
    fn single_element_range() {
        assert_eq!(parse_column_spec("4-4").unwrap(), vec![4]);
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(parse_column_spec("7,2,5").unwrap(), vec![7, 2, 5]);
    }

    #[test]
    fn whitespace_tolerated() {
        assert_eq!(parse_column_spec("1, 3 ,5").unwrap(), vec![1, 3, 5]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_column_spec("").is_err());
        assert!(parse_column_spec("1,,3").is_err());
        assert!(parse_column_spec("a").is_err());
        assert!(parse_column_spec("1-b").is_err());
        assert!(parse_column_spec("-2").is_err());
    }

    #[test]
    fn rejects_descending_range() {
        assert!(parse_column_spec("5-2").is_err());
    }
}
