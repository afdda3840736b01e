//! Carousel controller implementation

use std::time::{Duration, Instant};

use super::{HoverReveal, NavDirection, Slide, DEFAULT_REVEAL_DECAY};

/// The state machine behind the carousel widget.
///
/// Owns the current slide index, the last-measured container width and the
/// hover-reveal state. All transitions happen on discrete input events
/// delivered by the UI event loop; operations that touch the decay timer
/// take an explicit `now` so callers control the clock.
#[derive(Debug, Clone)]
pub struct CarouselController {
    slides: Vec<Slide>,
    current: usize,
    container_width: f32,
    hover: HoverReveal,
}

impl CarouselController {
    /// Create a controller over an ordered slide set.
    ///
    /// The set is fixed for the controller's lifetime; an empty set yields a
    /// controller on which every operation is a harmless no-op.
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            current: 0,
            container_width: 0.0,
            hover: HoverReveal::new(DEFAULT_REVEAL_DECAY),
        }
    }

    /// Override the indicator decay delay
    pub fn set_reveal_decay(&mut self, delay: Duration) {
        self.hover = HoverReveal::new(delay);
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Index of the slide currently shown, `None` when the set is empty
    pub fn current_index(&self) -> Option<usize> {
        if self.slides.is_empty() {
            None
        } else {
            Some(self.current)
        }
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current_index() == Some(index)
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// Record the rendered container's current width.
    ///
    /// Called on mount and whenever the ambient viewport width changes; the
    /// width only feeds the translation and tile geometry, it is not
    /// persisted anywhere else.
    pub fn measure(&mut self, width: f32) {
        self.container_width = width.max(0.0);
    }

    /// Horizontal translation of the slide strip: `current * container_width`
    pub fn strip_translation(&self) -> f32 {
        self.current as f32 * self.container_width
    }

    /// Bounds of the activation region for `index` as `(left, width)` in
    /// container coordinates. Regions split the container evenly.
    pub fn tile_bounds(&self, index: usize) -> Option<(f32, f32)> {
        if index >= self.slides.len() {
            return None;
        }
        let tile_width = self.container_width / self.slides.len() as f32;
        Some((index as f32 * tile_width, tile_width))
    }

    /// Move forward one slide, wrapping to the first after the last
    pub fn advance(&mut self, now: Instant) {
        if self.slides.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.slides.len();
        self.hover.touch(now);
    }

    /// Move back one slide, wrapping to the last before the first
    pub fn retreat(&mut self, now: Instant) {
        if self.slides.is_empty() {
            return;
        }
        self.current = (self.current + self.slides.len() - 1) % self.slides.len();
        self.hover.touch(now);
    }

    /// Jump directly to `index`.
    ///
    /// Out-of-range requests are ignored: the index stays where it was and
    /// the indicator row is not revealed.
    pub fn jump_to(&mut self, now: Instant, index: usize) {
        if index >= self.slides.len() {
            return;
        }
        self.current = index;
        self.hover.touch(now);
    }

    /// Pointer entered the activation region belonging to `index`.
    ///
    /// Always reveals the indicator row (the pointer did enter the
    /// component); the shown slide only changes for a valid index.
    pub fn enter_tile(&mut self, now: Instant, index: usize) {
        if self.slides.is_empty() {
            return;
        }
        if index < self.slides.len() {
            self.current = index;
        }
        self.hover.touch(now);
    }

    /// Directional key input; both binding schemes resolve to this
    pub fn on_key(&mut self, now: Instant, direction: NavDirection) {
        match direction {
            NavDirection::Previous => self.retreat(now),
            NavDirection::Next => self.advance(now),
        }
    }

    /// Pointer left the component region: hide the indicator row immediately
    pub fn pointer_left(&mut self) {
        self.hover.clear();
    }

    /// Advance the decay clock to `now`
    pub fn tick(&mut self, now: Instant) {
        self.hover.tick(now);
    }

    pub fn hover_reveal_active(&self) -> bool {
        self.hover.is_active()
    }

    /// Time left before the indicator row hides, if a decay is pending
    pub fn reveal_remaining(&self, now: Instant) -> Option<Duration> {
        self.hover.remaining(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECAY: Duration = Duration::from_millis(600);

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("https://img.example/{i}.jpg"), format!("slide {i}")))
            .collect()
    }

    fn controller(n: usize) -> CarouselController {
        CarouselController::new(slides(n))
    }

    #[test]
    fn test_advance_wraps_around() {
        let now = Instant::now();
        let mut c = controller(3);
        assert_eq!(c.current_index(), Some(0));

        let mut seen = vec![0];
        for _ in 0..3 {
            c.advance(now);
            seen.push(c.current_index().unwrap());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        let now = Instant::now();
        let mut c = controller(3);
        c.retreat(now);
        assert_eq!(c.current_index(), Some(2));
        c.retreat(now);
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn test_single_slide_navigation_is_noop_but_reveals() {
        let now = Instant::now();
        let mut c = controller(1);

        c.retreat(now);
        assert_eq!(c.current_index(), Some(0));
        c.advance(now);
        assert_eq!(c.current_index(), Some(0));
        assert!(c.hover_reveal_active());
    }

    #[test]
    fn test_empty_carousel_ignores_all_input() {
        let now = Instant::now();
        let mut c = controller(0);

        c.advance(now);
        c.retreat(now);
        c.jump_to(now, 0);
        c.enter_tile(now, 0);
        c.on_key(now, NavDirection::Next);

        assert_eq!(c.current_index(), None);
        assert!(!c.hover_reveal_active());
        assert_eq!(c.strip_translation(), 0.0);
        assert_eq!(c.tile_bounds(0), None);
    }

    #[test]
    fn test_jump_to_valid_index() {
        let now = Instant::now();
        let mut c = controller(5);
        c.jump_to(now, 3);
        assert_eq!(c.current_index(), Some(3));
        assert!(c.hover_reveal_active());
    }

    #[test]
    fn test_jump_to_out_of_range_is_ignored() {
        let now = Instant::now();
        let mut c = controller(3);
        c.jump_to(now, 1);

        // Repeated out-of-range requests never move the index or reveal state
        for _ in 0..3 {
            c.jump_to(now + DECAY * 2, 3);
            c.jump_to(now + DECAY * 2, usize::MAX);
            assert_eq!(c.current_index(), Some(1));
        }
    }

    #[test]
    fn test_strip_translation_tracks_index_and_width() {
        let now = Instant::now();
        let mut c = controller(4);
        c.measure(800.0);
        assert_eq!(c.strip_translation(), 0.0);

        c.jump_to(now, 2);
        assert_eq!(c.strip_translation(), 1600.0);

        // Remeasure after a resize: translation follows the new width
        c.measure(400.0);
        assert_eq!(c.strip_translation(), 800.0);
    }

    #[test]
    fn test_tile_bounds_split_container_evenly() {
        let mut c = controller(4);
        c.measure(800.0);

        assert_eq!(c.tile_bounds(0), Some((0.0, 200.0)));
        assert_eq!(c.tile_bounds(1), Some((200.0, 200.0)));
        assert_eq!(c.tile_bounds(3), Some((600.0, 200.0)));
        assert_eq!(c.tile_bounds(4), None);
    }

    #[test]
    fn test_hover_reveal_decays_after_quiet_period() {
        let start = Instant::now();
        let mut c = controller(3);

        c.advance(start);
        assert!(c.hover_reveal_active());

        c.tick(start + DECAY - Duration::from_millis(1));
        assert!(c.hover_reveal_active());

        c.tick(start + DECAY);
        assert!(!c.hover_reveal_active());
    }

    #[test]
    fn test_new_event_restarts_decay() {
        let start = Instant::now();
        let mut c = controller(3);

        c.advance(start);
        c.advance(start + Duration::from_millis(400));

        // Still revealed past the first event's deadline
        c.tick(start + Duration::from_millis(700));
        assert!(c.hover_reveal_active());

        c.tick(start + Duration::from_millis(1000));
        assert!(!c.hover_reveal_active());
    }

    #[test]
    fn test_pointer_leave_clears_reveal_immediately() {
        let start = Instant::now();
        let mut c = controller(3);

        c.advance(start);
        c.pointer_left();
        assert!(!c.hover_reveal_active());

        // The pending decay was cancelled along with the reveal
        assert_eq!(c.reveal_remaining(start), None);
        c.tick(start + DECAY * 2);
        assert!(!c.hover_reveal_active());
    }

    #[test]
    fn test_enter_tile_scrubs_to_slide() {
        let now = Instant::now();
        let mut c = controller(4);

        c.enter_tile(now, 2);
        assert_eq!(c.current_index(), Some(2));
        assert!(c.hover_reveal_active());

        // A stale index still reveals but keeps the slide
        c.pointer_left();
        c.enter_tile(now, 9);
        assert_eq!(c.current_index(), Some(2));
        assert!(c.hover_reveal_active());
    }

    #[test]
    fn test_key_input_matches_direct_calls() {
        let now = Instant::now();
        let mut via_keys = controller(3);
        let mut direct = controller(3);

        via_keys.on_key(now, NavDirection::Next);
        direct.advance(now);
        assert_eq!(via_keys.current_index(), direct.current_index());

        via_keys.on_key(now, NavDirection::Previous);
        direct.retreat(now);
        assert_eq!(via_keys.current_index(), direct.current_index());
    }

    #[test]
    fn test_measure_rejects_negative_width() {
        let mut c = controller(2);
        c.measure(-50.0);
        assert_eq!(c.container_width(), 0.0);
        assert_eq!(c.strip_translation(), 0.0);
    }
}
