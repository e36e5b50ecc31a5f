// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the gallery, grouped the way the W3C Design Tokens
format groups them.

## Organization

- **Palette**: Stone neutrals, amber accents, translucent whites
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use iced_gallery::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Muted caption text
let caption = Color {
    a: opacity::TEXT_FAINT,
    ..palette::WHITE
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Stone neutrals
    pub const STONE_950: Color = Color::from_rgb(0.047, 0.039, 0.035);
    pub const STONE_900: Color = Color::from_rgb(0.110, 0.098, 0.090);
    pub const STONE_800: Color = Color::from_rgb(0.161, 0.145, 0.141);
    pub const STONE_600: Color = Color::from_rgb(0.341, 0.325, 0.306);
    pub const STONE_400: Color = Color::from_rgb(0.659, 0.635, 0.620);

    // Amber accents
    pub const AMBER_200: Color = Color::from_rgb(0.992, 0.902, 0.541);
    pub const AMBER_400: Color = Color::from_rgb(0.984, 0.749, 0.141);
    pub const AMBER_500: Color = Color::from_rgb(0.961, 0.620, 0.043);
    pub const AMBER_600: Color = Color::from_rgb(0.851, 0.467, 0.024);

    pub const ERROR_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SURFACE_SUBTLE: f32 = 0.1;
    pub const SURFACE_HOVER: f32 = 0.2;

    pub const TEXT_FAINT: f32 = 0.3;
    pub const TEXT_DIM: f32 = 0.4;
    pub const TEXT_MUTED: f32 = 0.6;
    pub const TEXT_STRONG: f32 = 0.8;

    /// Inactive slide indicators.
    pub const INDICATOR_IDLE: f32 = 0.2;

    /// Info panel while a slide change is in flight.
    pub const DIMMED: f32 = 0.0;

    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 56.0; // 7 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_XS: f32 = 14.0;
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_NAV: f32 = 20.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    /// Round arrow and close buttons.
    pub const ROUND_BUTTON: f32 = 48.0;

    // Slide indicators
    pub const INDICATOR_WIDTH: f32 = 4.0;
    pub const INDICATOR_HEIGHT: f32 = 16.0;
    pub const INDICATOR_ACTIVE_HEIGHT: f32 = 40.0;

    /// Horizontal travel of the info panel during a slide change.
    pub const SLIDE_OFFSET: f32 = 32.0;

    /// Maximum width of the slider info column.
    pub const INFO_PANEL_WIDTH: f32 = 480.0;

    /// Maximum width of the detail info column.
    pub const DETAIL_INFO_WIDTH: f32 = 448.0;

    /// Width of the label column in the detail rows.
    pub const DETAIL_LABEL_WIDTH: f32 = 120.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes for the gallery's text hierarchy.

    /// Artwork title on the detail view.
    pub const DISPLAY: f32 = 48.0;

    /// Artwork title on the slider.
    pub const TITLE_LG: f32 = 40.0;

    /// Artist line, header.
    pub const TITLE_SM: f32 = 20.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;

    /// Badges, buttons, labels.
    pub const CAPTION: f32 = 12.0;

    /// Uppercase field labels and footer.
    pub const MICRO: f32 = 10.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TEXT_FAINT < opacity::TEXT_MUTED);
    assert!(opacity::TEXT_MUTED < opacity::TEXT_STRONG);

    assert!(sizing::INDICATOR_ACTIVE_HEIGHT > sizing::INDICATOR_HEIGHT);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
    assert!(typography::CAPTION > typography::MICRO);
};
