//! Plain-value pixel geometry shared by the scroll engine and its callers.

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const ZERO: Size = Size { w: 0.0, h: 0.0 };

    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

/// An axis-aligned rectangle in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// One scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Which axes a viewport may scroll on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisPolicy {
    Horizontal,
    #[default]
    Vertical,
    Both,
}

impl AxisPolicy {
    /// True if this policy permits scrolling on `axis`.
    pub fn allows(self, axis: Axis) -> bool {
        match (self, axis) {
            (AxisPolicy::Both, _) => true,
            (AxisPolicy::Horizontal, Axis::Horizontal) => true,
            (AxisPolicy::Vertical, Axis::Vertical) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_gates_each_axis() {
        assert!(AxisPolicy::Both.allows(Axis::Horizontal));
        assert!(AxisPolicy::Both.allows(Axis::Vertical));
        assert!(AxisPolicy::Vertical.allows(Axis::Vertical));
        assert!(!AxisPolicy::Vertical.allows(Axis::Horizontal));
        assert!(AxisPolicy::Horizontal.allows(Axis::Horizontal));
        assert!(!AxisPolicy::Horizontal.allows(Axis::Vertical));
    }
}
