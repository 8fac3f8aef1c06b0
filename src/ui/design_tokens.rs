// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the banner's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Default banner colors
- **Dimensions**: Fixed banner geometry constants
- **Typography**: Title font sizing
- **Animation**: Loader animation timing

## Examples

```
use iced_whisper::ui::design_tokens::{dimensions, typography};

// Width available to the title once side insets are reserved
let label_width = 375.0 - dimensions::LABEL_TOTAL_MARGINS;
assert_eq!(label_width, 315.0);

// Coarse per-line height used to derive the wrapped line count
let lines = (31.0_f32 / typography::LINE_APPROX).floor();
assert_eq!(lines, 2.0);
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on the layout pass
2. Maintain ratios (e.g., IMAGE_SIZE fits inside LINE_HEIGHT)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);

    /// Default title text color.
    pub const TEXT: Color = WHITE;

    /// Default banner background color.
    pub const BACKGROUND: Color = GRAY_900;
}

// ============================================================================
// Dimensions
// ============================================================================

pub mod dimensions {
    /// Height of a single banner line; the banner's total height is always a
    /// multiple of this unit.
    pub const LINE_HEIGHT: f32 = 24.0;

    /// Side length of the square loader/complement image.
    pub const IMAGE_SIZE: f32 = 14.0;

    /// Gap between the loader image and the title.
    pub const LOADER_TITLE_OFFSET: f32 = 5.0;

    /// Total horizontal inset reserved around the title label.
    pub const LABEL_TOTAL_MARGINS: f32 = 60.0;

    /// Rightward shift applied to the centered title when an icon is shown.
    pub const CENTER_SHIFT_WITH_ICON: f32 = 20.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Title font size.
    pub const TITLE: f32 = 13.0;

    /// Coarse per-line pixel height tied to the title font, used to derive
    /// the wrapped line count from a measured bounding box.
    pub const LINE_APPROX: f32 = 15.0;
}

// ============================================================================
// Animation
// ============================================================================

pub mod animation {
    /// Duration of one full cycle through the loader image sequence, in seconds.
    pub const CYCLE_SECONDS: f32 = 0.7;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Dimension validation
    assert!(dimensions::LINE_HEIGHT > 0.0);
    assert!(dimensions::IMAGE_SIZE > 0.0);
    assert!(dimensions::IMAGE_SIZE < dimensions::LINE_HEIGHT);
    assert!(dimensions::LOADER_TITLE_OFFSET >= 0.0);
    assert!(dimensions::LABEL_TOTAL_MARGINS > 0.0);
    assert!(dimensions::CENTER_SHIFT_WITH_ICON >= 0.0);

    // Typography validation
    assert!(typography::TITLE > 0.0);
    assert!(typography::LINE_APPROX > 0.0);

    // Animation validation
    assert!(animation::CYCLE_SECONDS > 0.0);

    // Color validation
    assert!(palette::TEXT.r >= 0.0 && palette::TEXT.r <= 1.0);
};
