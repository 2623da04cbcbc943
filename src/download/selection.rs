//! User selection of post items.

use std::collections::BTreeSet;

use crate::config::IndexSelection;
use crate::error::{Error, Result};
use crate::media::PostMediaSet;

/// Indices chosen by the user, always valid for the set it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    available: BTreeSet<usize>,
    selected: BTreeSet<usize>,
}

impl SelectionSet {
    /// Create an empty selection for a media set.
    pub fn for_media(media: &PostMediaSet) -> Self {
        Self {
            available: media.iter().map(|item| item.index).collect(),
            selected: BTreeSet::new(),
        }
    }

    /// Build a selection from a parsed request.
    pub fn from_request(media: &PostMediaSet, request: &IndexSelection) -> Result<Self> {
        let mut selection = Self::for_media(media);
        match request {
            IndexSelection::All => selection.select_all(),
            IndexSelection::Indices(indices) => {
                for &index in indices {
                    selection.select(index)?;
                }
            }
        }
        Ok(selection)
    }

    pub fn select(&mut self, index: usize) -> Result<()> {
        if !self.available.contains(&index) {
            return Err(Error::InvalidSelection {
                index,
                len: self.available.len(),
            });
        }
        self.selected.insert(index);
        Ok(())
    }

    /// Remove an index. Returns whether it was selected.
    pub fn deselect(&mut self, index: usize) -> bool {
        self.selected.remove(&index)
    }

    /// Flip an index. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        if self.deselect(index) {
            return Ok(false);
        }
        self.select(index)?;
        Ok(true)
    }

    pub fn select_all(&mut self) {
        self.selected = self.available.clone();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaDescriptor;

    fn three_items() -> PostMediaSet {
        PostMediaSet::new(
            "Cabc",
            vec![
                MediaDescriptor::image(0, "a"),
                MediaDescriptor::video(1, "b", None),
                MediaDescriptor::image(2, "c"),
            ],
        )
    }

    #[test]
    fn test_select_and_toggle() {
        let mut selection = SelectionSet::for_media(&three_items());
        assert!(selection.is_empty());

        selection.select(0).unwrap();
        selection.select(2).unwrap();
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![0, 2]);

        assert!(!selection.toggle(2).unwrap());
        assert!(selection.toggle(1).unwrap());
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut selection = SelectionSet::for_media(&three_items());
        let err = selection.select(3).unwrap_err();
        assert!(matches!(err, Error::InvalidSelection { index: 3, len: 3 }));
        assert!(selection.toggle(7).is_err());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut selection = SelectionSet::for_media(&three_items());
        selection.select_all();
        assert_eq!(selection.len(), 3);

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_from_request() {
        let media = three_items();

        let all = SelectionSet::from_request(&media, &IndexSelection::All).unwrap();
        assert_eq!(all.len(), 3);

        let some =
            SelectionSet::from_request(&media, &IndexSelection::Indices(vec![2, 0, 2])).unwrap();
        assert_eq!(some.iter().collect::<Vec<_>>(), vec![0, 2]);

        assert!(SelectionSet::from_request(&media, &IndexSelection::Indices(vec![5])).is_err());
    }

    #[test]
    fn test_empty_media_selects_nothing() {
        let mut selection = SelectionSet::for_media(&PostMediaSet::default());
        selection.select_all();
        assert!(selection.is_empty());
        assert!(selection.select(0).is_err());
    }
}
