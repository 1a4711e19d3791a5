//! Default tooltip colors
//!
//! Applied when a descriptor leaves `color` / `text_color` unset.

use supertips_core::Color;

pub const TOOLTIP_BACKGROUND: Color = Color::rgb(0x2D, 0x2D, 0x31);
pub const TOOLTIP_TEXT: Color = Color::WHITE;
pub const TOOLTIP_SHADOW: Color = Color::rgba(0x00, 0x00, 0x00, 0x55);
