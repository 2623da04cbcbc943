//! Request-scoped session state and download statistics.

use crate::config::IndexSelection;
use crate::download::selection::SelectionSet;
use crate::error::Result;
use crate::media::{MediaKind, PostMediaSet};

/// State of one user session, owned by the front end.
///
/// Every transition consumes the session and returns the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    post_url: String,
    media: PostMediaSet,
    selection: SelectionSet,
    download_completed: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the loaded post. Clears the selection and completion flag.
    pub fn load(self, post_url: impl Into<String>, media: PostMediaSet) -> Self {
        let selection = SelectionSet::for_media(&media);
        Self {
            post_url: post_url.into(),
            media,
            selection,
            download_completed: false,
        }
    }

    pub fn select(mut self, index: usize) -> Result<Self> {
        self.selection.select(index)?;
        Ok(self)
    }

    pub fn deselect(mut self, index: usize) -> Self {
        self.selection.deselect(index);
        self
    }

    pub fn select_all(mut self) -> Self {
        self.selection.select_all();
        self
    }

    pub fn clear_selection(mut self) -> Self {
        self.selection.clear();
        self
    }

    /// Replace the selection with a parsed request.
    pub fn apply_selection(mut self, request: &IndexSelection) -> Result<Self> {
        self.selection = SelectionSet::from_request(&self.media, request)?;
        Ok(self)
    }

    pub fn mark_completed(mut self) -> Self {
        self.download_completed = true;
        self
    }

    /// Drop everything and start over.
    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn post_url(&self) -> &str {
        &self.post_url
    }

    pub fn media(&self) -> &PostMediaSet {
        &self.media
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_completed(&self) -> bool {
        self.download_completed
    }
}

/// Counts of what ended up in an archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadStats {
    pub image_count: u64,
    pub video_count: u64,
    pub total_bytes: u64,
}

impl DownloadStats {
    /// Record one successfully fetched item.
    pub fn record(&mut self, kind: MediaKind, bytes: usize) {
        match kind {
            MediaKind::Image => self.image_count += 1,
            MediaKind::Video => self.video_count += 1,
        }
        self.total_bytes += bytes as u64;
    }

    pub fn total_items(&self) -> u64 {
        self.image_count + self.video_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaDescriptor;

    fn media(shortcode: &str, count: usize) -> PostMediaSet {
        PostMediaSet::new(
            shortcode,
            (0..count)
                .map(|i| MediaDescriptor::image(i, format!("https://cdn/{}.jpg", i)))
                .collect(),
        )
    }

    #[test]
    fn test_load_clears_selection_and_completion() {
        let session = Session::new()
            .load("https://www.instagram.com/p/A/", media("A", 3))
            .select_all()
            .mark_completed();
        assert_eq!(session.selection().len(), 3);
        assert!(session.is_completed());

        let session = session.load("https://www.instagram.com/p/B/", media("B", 2));
        assert!(session.selection().is_empty());
        assert!(!session.is_completed());
        assert_eq!(session.media().shortcode, "B");
        assert_eq!(session.post_url(), "https://www.instagram.com/p/B/");
    }

    #[test]
    fn test_selection_transitions() {
        let session = Session::new()
            .load("url", media("A", 3))
            .select(0)
            .unwrap()
            .select(2)
            .unwrap()
            .deselect(0);
        assert_eq!(session.selection().iter().collect::<Vec<_>>(), vec![2]);

        assert!(session.clone().select(3).is_err());
        assert!(session.clear_selection().selection().is_empty());
    }

    #[test]
    fn test_apply_selection() {
        let session = Session::new()
            .load("url", media("A", 3))
            .apply_selection(&IndexSelection::Indices(vec![1]))
            .unwrap();
        assert!(session.selection().contains(1));

        let session = session.apply_selection(&IndexSelection::All).unwrap();
        assert_eq!(session.selection().len(), 3);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let session = Session::new()
            .load("url", media("A", 2))
            .select_all()
            .mark_completed()
            .reset();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_stats_record() {
        let mut stats = DownloadStats::default();
        stats.record(MediaKind::Image, 10);
        stats.record(MediaKind::Video, 90);
        stats.record(MediaKind::Image, 5);

        assert_eq!(stats.image_count, 2);
        assert_eq!(stats.video_count, 1);
        assert_eq!(stats.total_bytes, 105);
        assert_eq!(stats.total_items(), 3);
    }
}
