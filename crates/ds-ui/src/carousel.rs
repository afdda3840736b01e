//! Photo carousel widget
//!
//! Shows one slide at a time from an ordered image list. Clicking advances,
//! arrow or vim keys navigate, and sweeping the pointer across the strip
//! scrubs between slides. A row of position indicators appears during
//! interaction and hides again after a quiet period.

use std::time::{Duration, Instant};

use egui::{Align2, Color32, FontId, Pos2, Rect, Response, Rounding, Sense, Ui, Vec2};

use ds_core::carousel::{CarouselController, NavDirection, Slide};

/// Where the carousel listens for key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardScope {
    /// React to key presses anywhere in the window. With several mounted
    /// carousels they would all respond to the same press, so prefer
    /// `Hovered` unless the carousel is the page's only interactive element.
    Global,
    /// React only while the pointer is over the carousel
    Hovered,
}

/// Key bindings: arrow keys plus the vim keys, both mapped onto the same
/// two logical directions
pub const NAV_KEYS: &[(egui::Key, NavDirection)] = &[
    (egui::Key::ArrowLeft, NavDirection::Previous),
    (egui::Key::ArrowUp, NavDirection::Previous),
    (egui::Key::H, NavDirection::Previous),
    (egui::Key::K, NavDirection::Previous),
    (egui::Key::ArrowRight, NavDirection::Next),
    (egui::Key::ArrowDown, NavDirection::Next),
    (egui::Key::J, NavDirection::Next),
    (egui::Key::L, NavDirection::Next),
];

/// Resolve a key press to a navigation direction
pub fn map_nav_key(key: egui::Key) -> Option<NavDirection> {
    NAV_KEYS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, direction)| *direction)
}

/// Carousel visual configuration
#[derive(Debug, Clone)]
pub struct CarouselStyle {
    /// Display height applied uniformly to every slide
    pub height: f32,
    pub keyboard_scope: KeyboardScope,
    /// Background behind slides that have not loaded yet
    pub placeholder_fill: Color32,
    pub placeholder_text: Color32,
    /// Indicator bar for the current slide
    pub indicator_current: Color32,
    /// Indicator bars for the remaining slides
    pub indicator_rest: Color32,
    /// Backdrop behind the indicator row
    pub indicator_backdrop: Color32,
    pub rounding: Rounding,
}

impl Default for CarouselStyle {
    fn default() -> Self {
        Self {
            height: 320.0,
            keyboard_scope: KeyboardScope::Hovered,
            placeholder_fill: Color32::from_gray(229),
            placeholder_text: Color32::from_gray(120),
            indicator_current: Color32::WHITE,
            indicator_rest: Color32::from_white_alpha(128),
            indicator_backdrop: Color32::from_black_alpha(64),
            rounding: Rounding::same(8.0),
        }
    }
}

/// Embeddable photo carousel.
///
/// Owns its controller for the lifetime of the mount; build one per image
/// list and call [`Carousel::ui`] every frame. Dropping the widget drops the
/// controller and any pending decay with it.
pub struct Carousel {
    controller: CarouselController,
    style: CarouselStyle,
    on_activate: Option<Box<dyn FnMut() + Send>>,
    was_hovered: bool,
    last_tile: Option<usize>,
}

/// What the carousel did this frame
pub struct CarouselResponse {
    pub response: Response,
    /// Index of the slide now shown, `None` for an empty carousel
    pub current: Option<usize>,
    /// Whether the shown slide changed this frame
    pub changed: bool,
}

impl Carousel {
    pub fn new(images: Vec<Slide>) -> Self {
        Self {
            controller: CarouselController::new(images),
            style: CarouselStyle::default(),
            on_activate: None,
            was_hovered: false,
            last_tile: None,
        }
    }

    pub fn with_style(mut self, style: CarouselStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.style.height = height;
        self
    }

    pub fn with_keyboard_scope(mut self, scope: KeyboardScope) -> Self {
        self.style.keyboard_scope = scope;
        self
    }

    pub fn with_reveal_decay(mut self, delay: Duration) -> Self {
        self.controller.set_reveal_decay(delay);
        self
    }

    /// Replace the default advance-on-click behavior entirely
    pub fn on_activate(mut self, handler: impl FnMut() + Send + 'static) -> Self {
        self.on_activate = Some(Box::new(handler));
        self
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    /// Show the carousel, filling the available width
    pub fn ui(&mut self, ui: &mut Ui) -> CarouselResponse {
        let now = Instant::now();
        self.controller.tick(now);
        let before = self.controller.current_index();

        // An empty slide set renders nothing and takes no height
        if self.controller.is_empty() {
            let (_, response) =
                ui.allocate_exact_size(Vec2::new(ui.available_width(), 0.0), Sense::hover());
            return CarouselResponse {
                response,
                current: None,
                changed: false,
            };
        }

        let width = ui.available_width();
        self.controller.measure(width);
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(width, self.style.height), Sense::click());

        self.handle_input(ui, &response, rect, now);

        if ui.is_rect_visible(rect) {
            self.draw_slides(ui, rect);
            if self.controller.hover_reveal_active() {
                self.draw_indicators(ui, rect);
            }
        }

        // Keep repainting while a decay deadline is pending so the indicator
        // row hides on time without further input
        if let Some(remaining) = self.controller.reveal_remaining(now) {
            ui.ctx().request_repaint_after(remaining);
        }

        let current = self.controller.current_index();
        CarouselResponse {
            response,
            current,
            changed: current != before,
        }
    }

    fn handle_input(&mut self, ui: &Ui, response: &Response, rect: Rect, now: Instant) {
        let keys_active = match self.style.keyboard_scope {
            KeyboardScope::Global => true,
            KeyboardScope::Hovered => response.hovered(),
        };
        if keys_active {
            let pressed: Vec<NavDirection> = ui.input(|input| {
                NAV_KEYS
                    .iter()
                    .filter(|(key, _)| input.key_pressed(*key))
                    .map(|(_, direction)| *direction)
                    .collect()
            });
            for direction in pressed {
                self.controller.on_key(now, direction);
            }
        }

        // Scrub across the activation tiles; a tile fires when entered, not
        // on every frame the pointer rests in it
        if let Some(pos) = response.hover_pos() {
            self.was_hovered = true;
            let tile = self.tile_at(pos.x - rect.left());
            if tile != self.last_tile {
                if let Some(index) = tile {
                    self.controller.enter_tile(now, index);
                }
                self.last_tile = tile;
            }
        } else if self.was_hovered {
            self.was_hovered = false;
            self.last_tile = None;
            self.controller.pointer_left();
        }

        // A caller-supplied activation handler replaces the default advance
        if response.clicked() {
            if let Some(on_activate) = &mut self.on_activate {
                on_activate();
            } else {
                self.controller.advance(now);
            }
        }
    }

    /// Index of the activation tile at `x`, relative to the left edge
    fn tile_at(&self, x: f32) -> Option<usize> {
        let count = self.controller.len();
        let width = self.controller.container_width();
        if count == 0 || width <= 0.0 || x < 0.0 || x >= width {
            return None;
        }
        let tile_width = width / count as f32;
        Some(((x / tile_width) as usize).min(count - 1))
    }

    fn draw_slides(&self, ui: &mut Ui, rect: Rect) {
        let translation = self.controller.strip_translation();
        let width = self.controller.container_width();
        let painter = ui.painter_at(rect);

        for (index, slide) in self.controller.slides().iter().enumerate() {
            let left = rect.left() - translation + index as f32 * width;
            let slide_rect =
                Rect::from_min_size(Pos2::new(left, rect.top()), Vec2::new(width, rect.height()));
            if !slide_rect.intersects(rect) {
                continue;
            }

            // Placeholder first; the image covers it once loaded
            painter.rect_filled(slide_rect, self.style.rounding, self.style.placeholder_fill);
            painter.text(
                slide_rect.center(),
                Align2::CENTER_CENTER,
                &slide.title,
                FontId::proportional(14.0),
                self.style.placeholder_text,
            );
            egui::Image::from_uri(slide.url.clone())
                .rounding(self.style.rounding)
                .paint_at(ui, slide_rect);
        }
    }

    fn draw_indicators(&self, ui: &mut Ui, rect: Rect) {
        let painter = ui.painter_at(rect);

        let row_height = 10.0;
        let row_rect = Rect::from_min_max(
            Pos2::new(rect.left(), rect.bottom() - row_height),
            rect.max,
        );
        painter.rect_filled(row_rect, Rounding::ZERO, self.style.indicator_backdrop);

        for index in 0..self.controller.len() {
            let Some((left, tile_width)) = self.controller.tile_bounds(index) else {
                continue;
            };
            let bar_rect = Rect::from_min_size(
                Pos2::new(rect.left() + left + 4.0, row_rect.center().y - 1.0),
                Vec2::new((tile_width - 8.0).max(1.0), 2.0),
            );
            let color = if self.controller.is_current(index) {
                self.style.indicator_current
            } else {
                self.style.indicator_rest
            };
            painter.rect_filled(bar_rect, Rounding::same(1.0), color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("https://img.example/{i}.jpg"), format!("slide {i}")))
            .collect()
    }

    #[test]
    fn test_both_binding_schemes_map_identically() {
        assert_eq!(map_nav_key(egui::Key::ArrowRight), Some(NavDirection::Next));
        assert_eq!(map_nav_key(egui::Key::L), Some(NavDirection::Next));
        assert_eq!(map_nav_key(egui::Key::J), Some(NavDirection::Next));
        assert_eq!(
            map_nav_key(egui::Key::ArrowLeft),
            Some(NavDirection::Previous)
        );
        assert_eq!(map_nav_key(egui::Key::H), Some(NavDirection::Previous));
        assert_eq!(map_nav_key(egui::Key::K), Some(NavDirection::Previous));
        assert_eq!(map_nav_key(egui::Key::Space), None);
    }

    #[test]
    fn test_key_input_matches_direct_advance() {
        let now = Instant::now();
        let mut via_arrow = CarouselController::new(slides(3));
        let mut via_letter = CarouselController::new(slides(3));
        let mut direct = CarouselController::new(slides(3));

        via_arrow.on_key(now, map_nav_key(egui::Key::ArrowRight).unwrap());
        via_letter.on_key(now, map_nav_key(egui::Key::L).unwrap());
        direct.advance(now);

        assert_eq!(via_arrow.current_index(), direct.current_index());
        assert_eq!(via_letter.current_index(), direct.current_index());
    }

    #[test]
    fn test_tile_at_maps_pointer_to_slide() {
        let mut carousel = Carousel::new(slides(4));
        carousel.controller.measure(800.0);

        assert_eq!(carousel.tile_at(0.0), Some(0));
        assert_eq!(carousel.tile_at(199.0), Some(0));
        assert_eq!(carousel.tile_at(200.0), Some(1));
        assert_eq!(carousel.tile_at(799.0), Some(3));
        assert_eq!(carousel.tile_at(800.0), None);
        assert_eq!(carousel.tile_at(-1.0), None);
    }

    #[test]
    fn test_tile_at_empty_or_unmeasured() {
        let empty = Carousel::new(Vec::new());
        assert_eq!(empty.tile_at(10.0), None);

        let unmeasured = Carousel::new(slides(3));
        assert_eq!(unmeasured.tile_at(10.0), None);
    }
}
