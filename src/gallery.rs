//! Portfolio Filter & Lightbox
//!
//! Category filtering over the portfolio cards and wrap-around stepping
//! through them in the lightbox.

use crate::models::FilterButton;
use crate::settings::FILTER_ALL;

// ========================
// Filter
// ========================

/// Visibility marker on a portfolio card; exactly one applies once filtered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemMarker {
    Show,
    Hide,
}

impl ItemMarker {
    pub fn as_class(self) -> &'static str {
        match self {
            ItemMarker::Show => "show",
            ItemMarker::Hide => "hide",
        }
    }
}

/// Current filter selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioFilter {
    /// Button carrying the `active` marker
    highlighted: Option<String>,
    /// Filter applied to the cards; `None` until the first click
    applied: Option<String>,
}

impl PortfolioFilter {
    /// Highlight the filter configured as active; cards start unmarked
    pub fn new(filters: &[FilterButton]) -> Self {
        Self {
            highlighted: filters.iter().find(|f| f.active).map(|f| f.id.clone()),
            applied: None,
        }
    }

    pub fn select(&mut self, filter_id: &str) {
        self.highlighted = Some(filter_id.to_string());
        self.applied = Some(filter_id.to_string());
    }

    pub fn is_highlighted(&self, filter_id: &str) -> bool {
        self.highlighted.as_deref() == Some(filter_id)
    }

    /// Marker for a card of `category`; `None` before any filter is applied
    pub fn marker(&self, category: &str) -> Option<ItemMarker> {
        self.applied.as_deref().map(|filter| {
            if matches(filter, category) {
                ItemMarker::Show
            } else {
                ItemMarker::Hide
            }
        })
    }
}

/// A card is visible when the filter names its category or is `all`
pub fn matches(filter_id: &str, category: &str) -> bool {
    filter_id == FILTER_ALL || filter_id == category
}

// ========================
// Lightbox
// ========================

/// `(index + 1) mod len`; `None` when there are no items
pub fn next_index(index: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| (index + 1) % len)
}

/// `(index - 1 + len) mod len`; `None` when there are no items
pub fn previous_index(index: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| (index % len + len - 1) % len)
}

/// Lightbox over all portfolio cards (filtering does not change the set)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lightbox {
    len: usize,
    index: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Open on the clicked card; out-of-range indices are ignored
    pub fn open_at(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.open = true;
        true
    }

    pub fn next(&mut self) {
        if let Some(index) = next_index(self.index, self.len) {
            self.index = index;
        }
    }

    pub fn previous(&mut self) {
        if let Some(index) = previous_index(self.index, self.len) {
            self.index = index;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// 1-based caption counter, e.g. `2 of 5`
    pub fn counter(&self) -> String {
        format!("{} of {}", self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(id: &str, active: bool) -> FilterButton {
        FilterButton { id: id.to_string(), label: id.to_string(), active }
    }

    #[test]
    fn test_initial_filter_from_config() {
        let filter = PortfolioFilter::new(&[button("all", false), button("web", true)]);
        assert!(filter.is_highlighted("web"));
        assert!(!filter.is_highlighted("all"));
        assert_eq!(filter.marker("ml"), None);
    }

    #[test]
    fn test_filter_sequence_visible_sets() {
        let categories = ["web", "ml", "web", "design"];
        let mut filter = PortfolioFilter::default();

        for (id, expected) in [
            ("web", vec![0, 2]),
            ("all", vec![0, 1, 2, 3]),
            ("ml", vec![1]),
            ("nothing", vec![]),
            ("design", vec![3]),
        ] {
            filter.select(id);
            // every card carries exactly one of show/hide
            let visible: Vec<usize> = categories
                .iter()
                .enumerate()
                .filter(|(_, category)| filter.marker(category).unwrap() == ItemMarker::Show)
                .map(|(index, _)| index)
                .collect();
            assert_eq!(visible, expected, "filter {}", id);
        }
    }

    #[test]
    fn test_select_moves_highlight() {
        let mut filter = PortfolioFilter::new(&[button("all", true), button("web", false)]);
        filter.select("web");
        assert!(filter.is_highlighted("web"));
        assert!(!filter.is_highlighted("all"));
    }

    #[test]
    fn test_index_wrapping() {
        for len in 1..6 {
            for i in 0..len {
                assert_eq!(next_index(i, len), Some((i + 1) % len));
                assert_eq!(previous_index(i, len), Some((i + len - 1) % len));
            }
        }
        assert_eq!(next_index(0, 0), None);
        assert_eq!(previous_index(0, 0), None);
    }

    #[test]
    fn test_lightbox_navigation() {
        let mut lightbox = Lightbox::new(3);
        assert!(lightbox.open_at(0));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.counter(), "1 of 3");

        lightbox.previous();
        assert_eq!(lightbox.index(), 2);
        assert_eq!(lightbox.counter(), "3 of 3");

        lightbox.next();
        assert_eq!(lightbox.index(), 0);

        lightbox.close();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_lightbox_without_items() {
        let mut lightbox = Lightbox::new(0);
        assert!(!lightbox.open_at(0));
        lightbox.next();
        lightbox.previous();
        assert_eq!(lightbox.index(), 0);
        assert!(!lightbox.is_open());
    }
}
