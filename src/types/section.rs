use serde::{Deserialize, Serialize};

/// A single story section: its rendered height and its active marking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Rendered height in CSS pixels
    pub height: f64,
    /// Whether the section currently carries the active marking
    pub active: bool,
}

impl Section {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            active: false,
        }
    }
}

/// Ordered sections of a story page.
///
/// The sequence is fixed once built; only heights and active markings change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    items: Vec<Section>,
}

impl Sections {
    /// Build unmarked sections from their rendered heights, in page order.
    pub fn from_heights<I>(heights: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        Self {
            items: heights.into_iter().map(Section::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.items.iter()
    }

    /// Heights in page order.
    pub fn heights(&self) -> impl Iterator<Item = f64> + '_ {
        self.items.iter().map(|s| s.height)
    }

    /// Record a new rendered height (e.g. after a reflow).
    ///
    /// Returns `false` if `index` is out of range.
    pub fn set_height(&mut self, index: usize, height: f64) -> bool {
        match self.items.get_mut(index) {
            Some(section) => {
                section.height = height;
                true
            }
            None => false,
        }
    }

    pub(crate) fn mark(&mut self, index: usize, active: bool) {
        if let Some(section) = self.items.get_mut(index) {
            section.active = active;
        }
    }

    /// Index of the first section carrying the active marking.
    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|s| s.active)
    }

    /// Number of sections carrying the active marking.
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|s| s.active).count()
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_from_heights_starts_unmarked() {
        let sections = Sections::from_heights([100.0, 200.0]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections.active_count(), 0);
        assert_eq!(sections.active_index(), None);
    }

    #[test]
    fn test_set_height_out_of_range() {
        let mut sections = Sections::from_heights([100.0]);
        assert!(sections.set_height(0, 80.0));
        assert!(!sections.set_height(1, 80.0));
        assert_eq!(sections.get(0).unwrap().height, 80.0);
    }
}
