use std::fmt;

use serde::Serialize;

/// Fixed classification attached to every probed domain.
///
/// The declaration order is the order categories are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    General,
    #[serde(rename = "Ad-server")]
    AdServer,
    Other,
    Adult,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::AdServer,
        Category::Other,
        Category::Adult,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::AdServer => "Ad-server",
            Category::Other => "Other",
            Category::Adult => "Adult",
        }
    }

    /// Lenient, case-insensitive lookup used for list files.
    ///
    /// Unknown labels fall back to [`Category::Other`].
    pub fn from_label(label: &str) -> Category {
        match label.to_ascii_lowercase().as_str() {
            "general" => Category::General,
            "ad-server" | "adserver" => Category::AdServer,
            "adult" => Category::Adult,
            _ => Category::Other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainEntry {
    pub domain: String,
    pub category: Category,
}

impl DomainEntry {
    pub fn new(domain: impl Into<String>, category: Category) -> Self {
        Self {
            domain: domain.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_matched_case_insensitively() {
        assert_eq!(Category::from_label("GENERAL"), Category::General);
        assert_eq!(Category::from_label("Ad-Server"), Category::AdServer);
        assert_eq!(Category::from_label("adserver"), Category::AdServer);
        assert_eq!(Category::from_label("adult"), Category::Adult);
        assert_eq!(Category::from_label("other"), Category::Other);
    }

    #[test]
    fn unknown_labels_fall_back_to_other() {
        assert_eq!(Category::from_label("streaming"), Category::Other);
        assert_eq!(Category::from_label(""), Category::Other);
    }

    #[test]
    fn ordering_follows_report_order() {
        let mut shuffled = vec![
            Category::Adult,
            Category::General,
            Category::Other,
            Category::AdServer,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Category::ALL);
    }
}
