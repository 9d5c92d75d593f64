use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Page sections reachable from the navigation menu
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Section {
    Testimonials,
    Faq,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Testimonials => "Testimonials",
            Section::Faq => "FAQ",
        }
    }

    /// Menu order
    pub fn all() -> Vec<Section> {
        Section::iter().collect()
    }

    pub fn from_menu_index(index: usize) -> Option<Section> {
        Section::iter().nth(index)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_menu_order() {
        assert_eq!(Section::all(), vec![Section::Testimonials, Section::Faq]);
        assert_eq!(Section::from_menu_index(1), Some(Section::Faq));
        assert_eq!(Section::from_menu_index(2), None);
    }
}
