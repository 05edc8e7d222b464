// SPDX-License-Identifier: MPL-2.0
//! Decorative starfield background.
//!
//! Pure visual flourish: a handful of dim stars drawn on a canvas behind the
//! page content. The module has no coupling to localization or the gallery
//! and is excluded from correctness testing beyond construction.

use iced::widget::canvas::{self, Canvas, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

/// One star, positioned as fractions of the canvas bounds.
#[derive(Debug, Clone, Copy)]
struct Star {
    x: f32,
    y: f32,
    radius: f32,
}

/// The star layout plus the cached geometry.
pub struct Starfield {
    stars: Vec<Star>,
    cache: canvas::Cache,
}

impl Starfield {
    /// Lays out `count` stars. Placement is a fixed linear-congruential
    /// sequence, so the field is identical on every run and redraw.
    #[must_use]
    pub fn new(count: usize) -> Self {
        let mut seed: u32 = 0x2545_f491;
        let mut next = move || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 8) as f32 / (1u32 << 24) as f32
        };

        let stars = (0..count)
            .map(|_| Star {
                x: next(),
                y: next(),
                radius: 1.0 + next(),
            })
            .collect();

        Self {
            stars,
            cache: canvas::Cache::default(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

impl<Message> canvas::Program<Message> for Starfield {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);
            for star in &self.stars {
                let center = Point::new(star.x * frame.width(), star.y * frame.height());
                frame.fill(&Path::circle(center, star.radius), color);
            }
        });
        vec![geometry]
    }
}

/// Renders the starfield as a full-size background layer.
pub fn view<Message: 'static>(starfield: &Starfield) -> Element<'_, Message> {
    Canvas::new(starfield)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starfield_places_requested_star_count() {
        let field = Starfield::new(10);
        assert_eq!(field.len(), 10);
    }

    #[test]
    fn star_positions_stay_within_unit_bounds() {
        let field = Starfield::new(50);
        for star in &field.stars {
            assert!((0.0..=1.0).contains(&star.x));
            assert!((0.0..=1.0).contains(&star.y));
            assert!(star.radius >= 1.0);
        }
    }

    #[test]
    fn layout_is_deterministic_across_constructions() {
        let a = Starfield::new(10);
        let b = Starfield::new(10);
        for (left, right) in a.stars.iter().zip(&b.stars) {
            assert_eq!(left.x, right.x);
            assert_eq!(left.y, right.y);
        }
    }
}
