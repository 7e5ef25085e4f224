// SPDX-License-Identifier: MPL-2.0
//! Presentation state for the album list and the gallery overlay.
//!
//! Two independent pieces live here:
//!
//! - [`Overlay`]: whether a gallery is shown on top of the list, and which
//!   image of the selected album is current.
//! - [`ListScreen`] / [`FooterStatus`]: what the list area should show for a
//!   given [`ListSnapshot`]. These are pure functions of the snapshot so the
//!   view never needs to reason about pagination flags directly.

use crate::application::pagination::ListSnapshot;
use crate::domain::Album;
use crate::error::Error;

/// Image pages of one album, with a cursor on the visible image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    album_name: String,
    images: Vec<String>,
    current: usize,
}

impl Gallery {
    /// Builds a gallery positioned on the first image.
    #[must_use]
    pub fn from_album(album: &Album) -> Self {
        Self {
            album_name: album.name.clone(),
            images: album
                .images
                .iter()
                .map(|image| image.content_url.clone())
                .collect(),
            current: 0,
        }
    }

    #[must_use]
    pub fn album_name(&self) -> &str {
        &self.album_name
    }

    /// Image URLs in album order.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Zero-based index of the visible image. Always 0 for an empty album.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True when the album has no images and the overlay shows a placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.images.len()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    /// Moves to the next image. Returns false at the last image.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous image. Returns false at the first image.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `index`, clamped to the valid range.
    pub fn go_to(&mut self, index: usize) {
        self.current = index.min(self.images.len().saturating_sub(1));
    }
}

/// Gallery overlay shown above the album list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    Open(Gallery),
}

impl Overlay {
    /// Opens the gallery for `album`, replacing any gallery already shown.
    pub fn select(&mut self, album: &Album) {
        *self = Overlay::Open(Gallery::from_album(album));
    }

    /// Hides the overlay. Closing an already closed overlay is a no-op.
    pub fn close(&mut self) {
        *self = Overlay::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open(_))
    }

    #[must_use]
    pub fn gallery(&self) -> Option<&Gallery> {
        match self {
            Overlay::Open(gallery) => Some(gallery),
            Overlay::Closed => None,
        }
    }

    pub fn gallery_mut(&mut self) -> Option<&mut Gallery> {
        match self {
            Overlay::Open(gallery) => Some(gallery),
            Overlay::Closed => None,
        }
    }
}

/// Status line rendered below the last album row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterStatus {
    Hidden,
    Loading,
    EndOfList,
    Error(Error),
}

impl FooterStatus {
    #[must_use]
    pub fn from_snapshot(snapshot: &ListSnapshot<'_>) -> Self {
        if snapshot.fetch_in_flight {
            FooterStatus::Loading
        } else if snapshot.end_of_list {
            FooterStatus::EndOfList
        } else if let Some(err) = snapshot.last_error {
            FooterStatus::Error(err.clone())
        } else {
            FooterStatus::Hidden
        }
    }
}

/// What the list area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListScreen {
    /// The first page has not arrived yet.
    Loading,
    /// The first page failed; offer a retry.
    Failed(Error),
    /// The source reported the end before any album arrived.
    Empty,
    /// At least one page is displayed.
    List { footer: FooterStatus },
}

impl ListScreen {
    #[must_use]
    pub fn from_snapshot(snapshot: &ListSnapshot<'_>) -> Self {
        if snapshot.ready {
            return ListScreen::List {
                footer: FooterStatus::from_snapshot(snapshot),
            };
        }
        if snapshot.end_of_list {
            return ListScreen::Empty;
        }
        match snapshot.last_error {
            Some(err) if !snapshot.fetch_in_flight => ListScreen::Failed(err.clone()),
            _ => ListScreen::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::album;

    fn snapshot<'a>(items: &'a [Album]) -> ListSnapshot<'a> {
        ListSnapshot {
            items,
            page_number: 1,
            page_size: 10,
            end_of_list: false,
            fetch_in_flight: false,
            loading: false,
            ready: false,
            last_error: None,
        }
    }

    #[test]
    fn selecting_an_album_opens_its_images() {
        let mut overlay = Overlay::default();
        overlay.select(&album("B").with_images(["img1", "img2"]));

        let gallery = overlay.gallery().expect("overlay should be open");
        assert_eq!(gallery.album_name(), "B");
        assert_eq!(gallery.images(), ["img1", "img2"]);
        assert_eq!(gallery.current_image(), Some("img1"));

        overlay.close();
        assert_eq!(overlay, Overlay::Closed);
    }

    #[test]
    fn selecting_again_replaces_the_open_gallery() {
        let mut overlay = Overlay::default();
        overlay.select(&album("A").with_images(["a1", "a2"]));
        if let Some(gallery) = overlay.gallery_mut() {
            gallery.next();
        }

        overlay.select(&album("B").with_images(["b1"]));

        let gallery = overlay.gallery().expect("overlay should be open");
        assert_eq!(gallery.album_name(), "B");
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn close_is_idempotent() {
        let mut overlay = Overlay::Closed;
        overlay.close();
        assert!(!overlay.is_open());
    }

    #[test]
    fn navigation_is_clamped_to_album_bounds() {
        let mut gallery = Gallery::from_album(&album("A").with_images(["1", "2", "3"]));

        assert!(!gallery.previous());
        assert!(gallery.next());
        assert!(gallery.next());
        assert!(!gallery.next());
        assert_eq!(gallery.current_image(), Some("3"));

        gallery.go_to(0);
        assert_eq!(gallery.current(), 0);
        gallery.go_to(99);
        assert_eq!(gallery.current(), 2);
    }

    #[test]
    fn empty_album_opens_a_placeholder_gallery() {
        let mut overlay = Overlay::default();
        overlay.select(&album("empty"));

        let gallery = overlay.gallery_mut().expect("overlay should be open");
        assert!(gallery.is_empty());
        assert_eq!(gallery.current_image(), None);
        assert!(!gallery.next());
        gallery.go_to(5);
        assert_eq!(gallery.current(), 0);
    }

    #[test]
    fn first_load_shows_loading_screen() {
        let mut snap = snapshot(&[]);
        snap.fetch_in_flight = true;
        snap.loading = true;
        assert_eq!(ListScreen::from_snapshot(&snap), ListScreen::Loading);
    }

    #[test]
    fn first_page_failure_shows_retry_screen() {
        let err = Error::Api(vec!["boom".into()]);
        let mut snap = snapshot(&[]);
        snap.last_error = Some(&err);
        assert_eq!(ListScreen::from_snapshot(&snap), ListScreen::Failed(err.clone()));
    }

    #[test]
    fn end_before_any_album_shows_empty_screen() {
        let mut snap = snapshot(&[]);
        snap.end_of_list = true;
        snap.loading = true;
        assert_eq!(ListScreen::from_snapshot(&snap), ListScreen::Empty);
    }

    #[test]
    fn footer_follows_fetch_state() {
        let items = [album("A")];
        let err = Error::Http("timeout".into());
        let mut snap = snapshot(&items);
        snap.ready = true;

        assert_eq!(
            ListScreen::from_snapshot(&snap),
            ListScreen::List {
                footer: FooterStatus::Hidden
            }
        );

        snap.fetch_in_flight = true;
        assert_eq!(FooterStatus::from_snapshot(&snap), FooterStatus::Loading);

        snap.fetch_in_flight = false;
        snap.last_error = Some(&err);
        assert_eq!(
            FooterStatus::from_snapshot(&snap),
            FooterStatus::Error(err.clone())
        );

        snap.last_error = None;
        snap.end_of_list = true;
        assert_eq!(FooterStatus::from_snapshot(&snap), FooterStatus::EndOfList);
    }
}
