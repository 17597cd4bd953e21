//! Display metadata keyed by category name.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryMeta {
    /// Hex color, e.g. `#3b82f6`.
    pub color: &'static str,
    /// Icon identifier understood by the front end.
    pub icon: &'static str,
}

pub const FALLBACK_CATEGORY: &str = "Other";

const FALLBACK_META: CategoryMeta = CategoryMeta { color: "#64748b", icon: "Hash" };

const CATEGORY_META: [(&str, CategoryMeta); 7] = [
    ("Technology", CategoryMeta { color: "#3b82f6", icon: "Cpu" }),
    ("Politics", CategoryMeta { color: "#ef4444", icon: "Landmark" }),
    ("Entertainment", CategoryMeta { color: "#8b5cf6", icon: "Film" }),
    ("Sports", CategoryMeta { color: "#f59e0b", icon: "Trophy" }),
    ("Business", CategoryMeta { color: "#10b981", icon: "TrendingUp" }),
    ("Health", CategoryMeta { color: "#ec4899", icon: "Heart" }),
    (FALLBACK_CATEGORY, FALLBACK_META),
];

/// Look up metadata for a category name, falling back to the `Other` entry.
///
/// Matching is exact, as the pipeline emits canonical names.
#[must_use]
pub fn category_meta(name: &str) -> CategoryMeta {
    CATEGORY_META
        .iter()
        .find(|(key, _)| *key == name)
        .map_or(FALLBACK_META, |(_, meta)| *meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(category_meta("Technology").icon, "Cpu");
        assert_eq!(category_meta("Sports").color, "#f59e0b");
        assert_eq!(category_meta("Health").icon, "Heart");
    }

    #[test]
    fn test_unknown_category_uses_fallback() {
        let other = category_meta(FALLBACK_CATEGORY);
        assert_eq!(category_meta("Gardening"), other);
        assert_eq!(category_meta(""), other);
        // Case matters
        assert_eq!(category_meta("technology"), other);
    }
}
