//! Box layout math for labels
//!
//! All positions here are local to the label transform: the anchor sits at
//! the origin, the box top edge at y = 0 and the box extends downwards.

use crate::types::{Padding, TextAlign};
use glam::Vec2;
use labelnode_text::TextExtent;

/// Box size from the text extent, padding and optional fixed overrides
pub fn box_size(
    extent: TextExtent,
    padding: Padding,
    fixed_width: Option<f32>,
    fixed_height: Option<f32>,
) -> Vec2 {
    Vec2::new(
        fixed_width.unwrap_or(extent.width + padding.horizontal()),
        fixed_height.unwrap_or(extent.height + padding.vertical()),
    )
}

/// X offset of the box left edge from the anchor
pub fn box_offset(align: TextAlign, width: f32) -> f32 {
    match align {
        TextAlign::Left => 0.0,
        TextAlign::Center => -width * 0.5,
        TextAlign::Right => -width,
    }
}

/// Top-left corner of the text block inside a box starting at `box_left`
pub fn text_origin(
    align: TextAlign,
    box_left: f32,
    box_width: f32,
    padding: Padding,
    text_width: f32,
) -> Vec2 {
    let x = match align {
        TextAlign::Left => box_left + padding.left,
        TextAlign::Center => {
            let content = box_width - padding.horizontal();
            box_left + padding.left + (content - text_width) * 0.5
        }
        TextAlign::Right => box_left + box_width - padding.right - text_width,
    };
    Vec2::new(x, -padding.top)
}
