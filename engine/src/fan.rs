//! Static fan geometry for the card hand.
//!
//! Purely cosmetic: depends on a card's index and the hand size, never on
//! selection state.

use serde::Serialize;

/// Degrees of rotation between neighbouring cards.
pub const FAN_ANGLE_STEP_DEG: f32 = 4.0;
/// Vertical drop (px) per card of distance from the middle of the hand.
pub const FAN_OFFSET_STEP_PX: f32 = 2.0;

pub const Z_INDEX_BASE: u16 = 10;
pub const Z_INDEX_DRAGGING: u16 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FanPose {
    pub angle_deg: f32,
    pub offset_px: f32,
}

#[must_use]
pub fn fan_pose(index: usize, total: usize) -> FanPose {
    let middle = total.saturating_sub(1) as f32 / 2.0;
    let index = index as f32;
    FanPose {
        angle_deg: (index - middle) * FAN_ANGLE_STEP_DEG,
        offset_px: (middle - index).abs() * FAN_OFFSET_STEP_PX,
    }
}

/// Stacking order: later cards sit above earlier ones, the dragged card above all.
#[must_use]
pub fn z_index(index: usize, dragging: bool) -> u16 {
    if dragging {
        Z_INDEX_DRAGGING
    } else {
        Z_INDEX_BASE.saturating_add(u16::try_from(index).unwrap_or(u16::MAX))
    }
}
