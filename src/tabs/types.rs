//! Tab strip entries

use egui_phosphor::regular as icons;

/// A labeled tab with its phosphor icon glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabItem {
    pub label: &'static str,
    pub icon: &'static str,
}

impl TabItem {
    pub const fn new(label: &'static str, icon: &'static str) -> Self {
        Self { label, icon }
    }

    /// Icon and label as a single button caption
    pub fn caption(&self) -> String {
        format!("{} {}", self.icon, self.label)
    }
}

pub static STORE_TABS: [TabItem; 4] = [
    TabItem::new("Products", icons::HOUSE),
    TabItem::new("Newest", icons::SPARKLE),
    TabItem::new("Popular", icons::FIRE),
    TabItem::new("Category", icons::SQUARES_FOUR),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_labels() {
        let labels: Vec<&str> = STORE_TABS.iter().map(|t| t.label).collect();
        assert_eq!(labels, ["Products", "Newest", "Popular", "Category"]);
    }

    #[test]
    fn tab_icons_are_distinct() {
        for (i, a) in STORE_TABS.iter().enumerate() {
            for b in &STORE_TABS[i + 1..] {
                assert_ne!(a.icon, b.icon, "{} and {} share an icon", a.label, b.label);
            }
        }
    }
}
