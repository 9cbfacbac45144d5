/// Label shown for any priority outside the known table.
pub const NO_PRIORITY: &str = "No priority";

const PRIORITY_LABELS: [&str; 5] = [NO_PRIORITY, "Low", "Medium", "High", "Urgent"];

/// Display label for a numeric priority level.
///
/// `4 → Urgent`, `3 → High`, `2 → Medium`, `1 → Low`, `0 → No priority`.
/// Negative or out-of-range values also read as "No priority".
#[must_use]
pub fn label(priority: i64) -> &'static str {
    usize::try_from(priority)
        .ok()
        .and_then(|idx| PRIORITY_LABELS.get(idx))
        .copied()
        .unwrap_or(NO_PRIORITY)
}

#[cfg(test)]
mod tests {
    use super::{NO_PRIORITY, label};

    #[test]
    fn known_levels() {
        assert_eq!(label(4), "Urgent");
        assert_eq!(label(3), "High");
        assert_eq!(label(2), "Medium");
        assert_eq!(label(1), "Low");
        assert_eq!(label(0), "No priority");
    }

    #[test]
    fn out_of_range_falls_back() {
        assert_eq!(label(-1), NO_PRIORITY);
        assert_eq!(label(5), NO_PRIORITY);
        assert_eq!(label(99), NO_PRIORITY);
        assert_eq!(label(i64::MIN), NO_PRIORITY);
        assert_eq!(label(i64::MAX), NO_PRIORITY);
    }
}
