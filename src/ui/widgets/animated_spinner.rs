// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown while an artwork image loads.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path::Arc, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::time::Duration;

/// Time for one full turn.
const REVOLUTION: Duration = Duration::from_millis(1200);

const STROKE_WIDTH: f32 = 2.0;

/// Half-ring spinner whose angle is derived from the app clock.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            cache: Cache::default(),
            rotation: 0.0,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Sets the angle for `elapsed` time since loading started.
    #[must_use]
    pub fn at(mut self, elapsed: Duration) -> Self {
        self.rotation = rotation_at(elapsed);
        self.cache.clear();
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Angle in radians, in `[0, TAU)`.
#[must_use]
pub fn rotation_at(elapsed: Duration) -> f32 {
    let period = REVOLUTION.as_millis();
    let phase = (elapsed.as_millis() % period) as f32 / period as f32;
    phase * TAU
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH * 2.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(Color { a: 0.2, ..self.color }),
                );

                // Half ring starting at twelve o'clock.
                let start = self.rotation - FRAC_PI_2;
                let arc = Path::new(|builder| {
                    builder.arc(Arc {
                        center,
                        radius,
                        start_angle: Radians(start),
                        end_angle: Radians(start + PI),
                    });
                });
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
