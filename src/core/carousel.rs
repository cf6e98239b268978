use crate::domain::model::{MediaItem, MediaSequence};
use crate::utils::error::{Result, ShowcaseError};

/// Current position in one subject's media.
///
/// The controller knows nothing about which subject it belongs to. Whoever
/// switches subjects must call [`load`](Self::load) (or [`reset`](Self::reset))
/// before presenting the new subject; reusing a controller across subjects
/// without that is a caller bug.
#[derive(Debug, Clone, Default)]
pub struct CarouselController {
    media: MediaSequence,
    current_index: usize,
}

impl CarouselController {
    pub fn new(media: MediaSequence) -> Self {
        Self {
            media,
            current_index: 0,
        }
    }

    /// Switch to another subject's media, starting from the first item.
    pub fn load(&mut self, media: MediaSequence) {
        self.media = media;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
    }

    pub fn len(&self) -> usize {
        self.media.len()
    }

    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    pub fn media(&self) -> &MediaSequence {
        &self.media
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// No-op on an empty sequence.
    pub fn advance(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
        tracing::debug!(index = self.current_index, len, "carousel advanced");
    }

    /// No-op on an empty sequence.
    pub fn retreat(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + len - 1) % len;
        tracing::debug!(index = self.current_index, len, "carousel retreated");
    }

    /// Out-of-range indices are rejected and leave the position unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(ShowcaseError::InvalidIndex { index, len });
        }
        self.current_index = index;
        tracing::debug!(index, len, "carousel jumped");
        Ok(())
    }

    /// `None` when the sequence is empty.
    pub fn current(&self) -> Option<&MediaItem> {
        self.media.get(self.current_index)
    }

    /// Whether navigation controls are worth rendering at all.
    pub fn has_multiple(&self) -> bool {
        self.len() > 1
    }

    /// For indicator dots and thumbnail highlighting.
    pub fn is_current(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(len: usize) -> MediaSequence {
        (0..len)
            .map(|i| MediaItem::new(format!("@/assets/{}.png", i)))
            .collect()
    }

    #[test]
    fn advance_wraps_around() {
        let mut carousel = CarouselController::new(sequence(3));
        let urls: Vec<String> = (0..4)
            .map(|_| {
                carousel.advance();
                carousel.current().unwrap().url.clone()
            })
            .collect();
        assert_eq!(
            urls,
            vec!["@/assets/1.png", "@/assets/2.png", "@/assets/0.png", "@/assets/1.png"]
        );
    }

    #[test]
    fn retreat_from_zero_goes_to_last() {
        let mut carousel = CarouselController::new(sequence(4));
        carousel.retreat();
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn empty_sequence_is_inert() {
        let mut carousel = CarouselController::default();
        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.current().is_none());
        assert!(!carousel.has_multiple());
        assert!(!carousel.is_current(0));
        assert!(matches!(
            carousel.jump_to(0),
            Err(ShowcaseError::InvalidIndex { index: 0, len: 0 })
        ));
    }

    #[test]
    fn jump_out_of_range_keeps_position() {
        let mut carousel = CarouselController::new(sequence(3));
        carousel.jump_to(2).unwrap();
        assert!(carousel.jump_to(3).is_err());
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn load_resets_to_first_item() {
        let mut carousel = CarouselController::new(sequence(5));
        carousel.jump_to(4).unwrap();
        carousel.load(sequence(2));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.len(), 2);
    }

    #[test]
    fn single_item_has_no_navigation() {
        let mut carousel = CarouselController::new(sequence(1));
        assert!(!carousel.has_multiple());
        carousel.advance();
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_current(0));
    }
}
