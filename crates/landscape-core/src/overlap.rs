use crate::constants::LANDMARK_BORDER_PX;

/// Pixel box of a rendered label.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether two labels are close enough to collide, allowing `border`
    /// pixels of slack on each axis.
    #[inline]
    pub fn crowds(&self, other: &BoundingBox, border: f32) -> bool {
        (self.left - other.left).abs() - border <= self.width.max(other.width)
            && (self.top - other.top).abs() - border <= self.height.max(other.height)
    }
}

/// Greedy first-come suppression: `true` for boxes that stay visible.
///
/// A box is hidden when it crowds any box already kept; hidden boxes are not
/// compared against later ones.
pub fn visible_mask(boxes: &[BoundingBox]) -> Vec<bool> {
    let mut kept: Vec<BoundingBox> = Vec::with_capacity(boxes.len());
    boxes
        .iter()
        .map(|candidate| {
            let hidden = kept
                .iter()
                .any(|k| candidate.crowds(k, LANDMARK_BORDER_PX));
            if !hidden {
                kept.push(*candidate);
            }
            !hidden
        })
        .collect()
}
