// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod glyph;

pub use animated_spinner::AnimatedSpinner;
pub use glyph::{Glyph, GlyphKind};
