//! Image carousel state for the project detail modal.
//!
//! [`Carousel`] tracks which image of one item's gallery is showing.
//! [`SwipeTracker`] turns a horizontal touch or mouse drag into a navigation step.

/// Minimum horizontal travel, in CSS pixels, for a drag to count as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Index into the gallery of a single item.
///
/// The index stays within `0..len` while `len > 0` and is 0 otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    item_id: String,
    index: usize,
    len: usize,
}

impl Carousel {
    /// Start at the first image. An empty gallery has nothing to show and yields `None`.
    pub fn open(item_id: impl Into<String>, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            item_id: item_id.into(),
            index: 0,
            len,
        })
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Prev/next buttons and swipes are only offered with more than one image.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        if self.len == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump straight to an image, e.g. from a dot. Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Point the carousel at `item_id`'s gallery of `len` images.
    ///
    /// A different item always starts over at the first image. The same item
    /// keeps its position unless the gallery shrank underneath it.
    pub fn show(&mut self, item_id: &str, len: usize) {
        if self.item_id != item_id {
            self.item_id = item_id.to_string();
            self.index = 0;
        } else if len == 0 {
            self.index = 0;
        } else if self.index >= len {
            self.index = len - 1;
        }
        self.len = len;
    }

    pub fn apply_swipe(&mut self, direction: SwipeDirection) {
        match direction {
            SwipeDirection::Forward => self.next(),
            SwipeDirection::Backward => self.previous(),
        }
    }

    /// The image at the current index.
    pub fn current<'a>(&self, images: &'a [String]) -> Option<&'a str> {
        images.get(self.index).map(String::as_str)
    }

    /// One `(index, is_current)` pair per image, for the dot indicator.
    pub fn dots(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.len).map(move |i| (i, i == self.index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left: show the next image
    Forward,
    /// Finger moved left-to-right: show the previous image
    Backward,
}

/// Start and latest x-coordinate of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start: Option<f64>,
    end: Option<f64>,
    threshold: f64,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            start: None,
            end: None,
            threshold,
        }
    }

    /// A drag is in progress.
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Touch start / mouse down. Discards any coordinate left from a previous drag.
    pub fn begin(&mut self, x: f64) {
        self.start = Some(x);
        self.end = None;
    }

    /// Touch move / mouse move. Ignored unless a drag has begun.
    pub fn track(&mut self, x: f64) {
        if self.start.is_some() {
            self.end = Some(x);
        }
    }

    /// Touch end / mouse up. Resets the tracker and reports a swipe if the
    /// drag travelled strictly further than the threshold.
    pub fn finish(&mut self) -> Option<SwipeDirection> {
        let start = self.start.take();
        let end = self.end.take();
        let distance = start? - end?;
        if distance > self.threshold {
            Some(SwipeDirection::Forward)
        } else if distance < -self.threshold {
            Some(SwipeDirection::Backward)
        } else {
            None
        }
    }

    /// Drop a drag without evaluating it, e.g. when the pointer leaves the image.
    pub fn cancel(&mut self) {
        self.start = None;
        self.end = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(from: f64, to: f64) -> Option<SwipeDirection> {
        let mut tracker = SwipeTracker::new();
        tracker.begin(from);
        tracker.track(to);
        tracker.finish()
    }

    #[test]
    fn test_empty_gallery_does_not_open() {
        assert!(Carousel::open("a", 0).is_none());
    }

    #[test]
    fn test_wraparound() {
        let mut c = Carousel::open("a", 3).unwrap();
        c.go_to(2);
        c.next();
        assert_eq!(c.index(), 0);
        c.previous();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_round_trip_for_every_position() {
        for len in 1..=6 {
            for start in 0..len {
                let mut c = Carousel::open("a", len).unwrap();
                c.go_to(start);
                c.next();
                c.previous();
                assert_eq!(c.index(), start, "next/previous len={len} start={start}");
                c.previous();
                c.next();
                assert_eq!(c.index(), start, "previous/next len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_single_image_has_no_controls_but_stays_put() {
        let mut c = Carousel::open("a", 1).unwrap();
        assert!(!c.has_controls());
        c.next();
        assert_eq!(c.index(), 0);
        c.previous();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_new_item_resets_index() {
        let mut c = Carousel::open("A", 3).unwrap();
        c.next();
        c.next();
        assert_eq!(c.index(), 2);

        c.show("B", 2);
        assert_eq!(c.item_id(), "B");
        assert_eq!(c.index(), 0);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_same_item_keeps_position() {
        let mut c = Carousel::open("A", 3).unwrap();
        c.next();
        c.show("A", 3);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_gallery_shrinking_to_empty_is_harmless() {
        let mut c = Carousel::open("A", 3).unwrap();
        c.go_to(2);
        c.show("A", 0);
        assert_eq!(c.index(), 0);
        assert!(c.is_empty());
        assert!(!c.has_controls());
        c.next();
        c.previous();
        assert_eq!(c.index(), 0);
        assert_eq!(c.current(&[]), None);
    }

    #[test]
    fn test_gallery_shrinking_clamps_index() {
        let mut c = Carousel::open("A", 4).unwrap();
        c.go_to(3);
        c.show("A", 2);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut c = Carousel::open("A", 2).unwrap();
        c.go_to(5);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_current_and_dots() {
        let images = vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()];
        let mut c = Carousel::open("A", images.len()).unwrap();
        c.next();
        assert_eq!(c.current(&images), Some("b.jpg"));
        let dots: Vec<(usize, bool)> = c.dots().collect();
        assert_eq!(dots, vec![(0, false), (1, true), (2, false)]);
    }

    #[test]
    fn test_swipe_threshold_is_strict() {
        assert_eq!(swipe(200.0, 150.0), None);
        assert_eq!(swipe(150.0, 200.0), None);
        assert_eq!(swipe(200.0, 149.0), Some(SwipeDirection::Forward));
        assert_eq!(swipe(149.0, 200.0), Some(SwipeDirection::Backward));
    }

    #[test]
    fn test_swipe_without_end_is_noop() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn test_swipe_without_start_is_noop() {
        let mut tracker = SwipeTracker::new();
        tracker.track(10.0);
        assert!(!tracker.is_active());
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn test_tracker_resets_after_every_finish() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.track(100.0);
        assert_eq!(tracker.finish(), Some(SwipeDirection::Forward));
        // a second end event without a new drag must not replay the swipe
        assert_eq!(tracker.finish(), None);

        tracker.begin(100.0);
        tracker.track(120.0);
        assert_eq!(tracker.finish(), None);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_begin_discards_stale_end() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.track(100.0);
        tracker.begin(300.0);
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn test_swipe_drives_carousel() {
        let mut c = Carousel::open("A", 3).unwrap();
        c.apply_swipe(SwipeDirection::Backward);
        assert_eq!(c.index(), 2);
        c.apply_swipe(SwipeDirection::Forward);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_custom_threshold() {
        let mut tracker = SwipeTracker::with_threshold(10.0);
        tracker.begin(0.0);
        tracker.track(-11.0);
        assert_eq!(tracker.finish(), Some(SwipeDirection::Forward));
    }
}
