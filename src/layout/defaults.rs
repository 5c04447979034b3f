//! Default settings for the layout engine.

use crate::types::Color;

/// Stroke color used when no polygon-specific color applies.
pub const STROKE_COLOR: Color = Color::BLACK;

/// Number of discrete buckets per component for random colors.
pub const COLOR_BUCKETS: u32 = 256;
