use crate::rates::Share;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Largest percentage first, equal percentages by name (byte-wise, case-sensitive).
pub fn by_share_desc_then_name(a: &Share, b: &Share) -> Ordering {
    OrderedFloat(b.percentage)
        .cmp(&OrderedFloat(a.percentage))
        .then_with(|| a.name.as_bytes().cmp(b.name.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(name: &str, percentage: f64) -> Share {
        Share {
            name: name.to_string(),
            percentage,
        }
    }

    #[test]
    fn larger_share_first() {
        assert_eq!(
            by_share_desc_then_name(&share("z", 60.0), &share("a", 40.0)),
            Ordering::Less
        );
    }

    #[test]
    fn tie_broken_by_name() {
        assert_eq!(
            by_share_desc_then_name(&share("B", 50.0), &share("A", 50.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn names_are_case_sensitive() {
        // uppercase sorts before lowercase
        assert_eq!(
            by_share_desc_then_name(&share("a", 50.0), &share("B", 50.0)),
            Ordering::Greater
        );
    }
}
