// SPDX-License-Identifier: MPL-2.0
//! Stroked line icons drawn on a canvas.
//!
//! Shapes are defined on a 24x24 grid and scaled to the widget size.

use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

const GRID: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    ChevronUp,
    ChevronDown,
    ChevronRight,
    ArrowLeft,
    Close,
}

impl GlyphKind {
    /// Polylines in grid coordinates.
    fn strokes(self) -> &'static [&'static [(f32, f32)]] {
        match self {
            GlyphKind::ChevronUp => &[&[(5.0, 15.0), (12.0, 8.0), (19.0, 15.0)]],
            GlyphKind::ChevronDown => &[&[(19.0, 9.0), (12.0, 16.0), (5.0, 9.0)]],
            GlyphKind::ChevronRight => &[&[(9.0, 5.0), (16.0, 12.0), (9.0, 19.0)]],
            GlyphKind::ArrowLeft => &[
                &[(10.0, 19.0), (3.0, 12.0), (10.0, 5.0)],
                &[(3.0, 12.0), (21.0, 12.0)],
            ],
            GlyphKind::Close => &[&[(4.0, 4.0), (20.0, 20.0)], &[(20.0, 4.0), (4.0, 20.0)]],
        }
    }
}

pub struct Glyph {
    kind: GlyphKind,
    color: Color,
    size: f32,
    stroke_width: f32,
}

impl Glyph {
    #[must_use]
    pub fn new(kind: GlyphKind, color: Color, size: f32) -> Self {
        Self {
            kind,
            color,
            size,
            stroke_width: 1.5,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Glyph {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let scale = bounds.width.min(bounds.height) / GRID;
        let width = self.stroke_width * scale.max(1.0);

        for polyline in self.kind.strokes() {
            let path = Path::new(|builder| {
                let mut points = polyline
                    .iter()
                    .map(|&(x, y)| Point::new(x * scale, y * scale));
                if let Some(first) = points.next() {
                    builder.move_to(first);
                }
                for point in points {
                    builder.line_to(point);
                }
            });
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(width)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round)
                    .with_line_join(canvas::LineJoin::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_stays_on_the_grid() {
        for kind in [
            GlyphKind::ChevronUp,
            GlyphKind::ChevronDown,
            GlyphKind::ChevronRight,
            GlyphKind::ArrowLeft,
            GlyphKind::Close,
        ] {
            for polyline in kind.strokes() {
                assert!(polyline.len() >= 2);
                assert!(polyline
                    .iter()
                    .all(|&(x, y)| (0.0..=GRID).contains(&x) && (0.0..=GRID).contains(&y)));
            }
        }
    }
}
