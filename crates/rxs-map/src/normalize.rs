//! Header key normalization.

/// Canonical matching key for a column header.
///
/// Lowercases, trims, and drops whitespace, hyphens and underscores entirely,
/// so `"Tot Spndng"`, `"Tot_Spndng"` and `"TotSpndng"` share one key.
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|ch| !(ch.is_whitespace() || *ch == '-' || *ch == '_'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_are_removed_not_replaced() {
        assert_eq!(normalize_key("Tot_Spndng"), "totspndng");
        assert_eq!(normalize_key("Tot Spndng"), "totspndng");
        assert_eq!(normalize_key("TotSpndng"), "totspndng");
        assert_eq!(normalize_key("  Tot -_ Spndng_2022 "), "totspndng2022");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key(" _- "), "");
    }
}
