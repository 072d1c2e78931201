//! Basic geometry types for widget layout and painting.
//!
//! This module provides the fundamental types used throughout the kit, plus
//! the rectangle operations the labelled-field cell is built on: splitting a
//! rectangle into a caption slice and a remainder, and snapping geometry to
//! the device pixel grid so hairlines stay crisp.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A vertical edge of a rectangle.
///
/// Used by [`Rect::divided_at`] to pick which side a slice is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RectEdge {
    /// The minimum-x (left) edge.
    Left,
    /// The maximum-x (right) edge.
    Right,
}

/// Layout direction of a control.
///
/// The caption region of a labelled field always sits at the layout
/// direction's start edge: left in LTR, right in RTL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// Left-to-right layout (default).
    #[default]
    LeftToRight,
    /// Right-to-left layout (mirrored geometry).
    RightToLeft,
}

impl LayoutDirection {
    /// Check if this is right-to-left layout.
    #[inline]
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }

    /// The edge where content starts in this direction.
    #[inline]
    pub fn start_edge(self) -> RectEdge {
        match self {
            Self::LeftToRight => RectEdge::Left,
            Self::RightToLeft => RectEdge::Right,
        }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width / 2.0,
            y: self.origin.y + self.size.height / 2.0,
        }
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Return the rectangle shrunk by `dx` on the left/right and `dy` on the
    /// top/bottom. Negative values grow the rectangle.
    #[inline]
    pub fn inset_by(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width - dx * 2.0,
            self.size.height - dy * 2.0,
        )
    }

    /// Split the rectangle at `distance` from the given edge.
    ///
    /// Returns `(slice, remainder)` where `slice` spans the first `distance`
    /// units measured from `edge`. A distance larger than the width yields
    /// the whole rectangle as the slice and an empty remainder at the
    /// opposite edge.
    pub fn divided_at(&self, distance: f32, edge: RectEdge) -> (Self, Self) {
        let distance = distance.max(0.0).min(self.size.width.max(0.0));
        match edge {
            RectEdge::Left => {
                let slice = Self::new(self.left(), self.top(), distance, self.height());
                let remainder = Self::new(
                    self.left() + distance,
                    self.top(),
                    self.width() - distance,
                    self.height(),
                );
                (slice, remainder)
            }
            RectEdge::Right => {
                let slice = Self::new(
                    self.right() - distance,
                    self.top(),
                    distance,
                    self.height(),
                );
                let remainder = Self::new(
                    self.left(),
                    self.top(),
                    self.width() - distance,
                    self.height(),
                );
                (slice, remainder)
            }
        }
    }

    /// Reflect the rectangle horizontally within `container`.
    ///
    /// The result has the same size; its distance from the container's left
    /// edge equals the original's distance from the right edge. Used to
    /// mirror geometry for right-to-left layout.
    #[inline]
    pub fn mirrored_in(&self, container: &Rect) -> Self {
        Self::new(
            container.left() + (container.right() - self.right()),
            self.top(),
            self.width(),
            self.height(),
        )
    }

    /// Snap all four edges to the device pixel grid at the given scale
    /// factor.
    ///
    /// Edges round to the nearest pixel boundary, so adjacent snapped
    /// rectangles still tile without gaps.
    pub fn snapped_to_grid(&self, scale_factor: f32) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        let left = (self.left() * scale).round() / scale;
        let top = (self.top() * scale).round() / scale;
        let right = (self.right() * scale).round() / scale;
        let bottom = (self.bottom() * scale).round() / scale;
        Self::new(left, top, right - left, bottom - top)
    }
}

/// Snap an x coordinate to the nearest pixel center at the given scale.
///
/// A 1px-wide vertical line stroked at a pixel center covers exactly one
/// column of device pixels; stroked on a boundary it smears across two.
pub fn snap_to_pixel_center(x: f32, scale_factor: f32) -> f32 {
    let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
    let snapped = (x * scale).round();
    let centered = if snapped < 0.0 {
        snapped + 0.5
    } else {
        snapped - 0.5
    };
    centered / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let inset = rect.inset_by(1.0, 1.0);
        assert_eq!(inset, Rect::new(1.0, 1.0, 98.0, 48.0));
    }

    #[test]
    fn test_divided_at_left() {
        let rect = Rect::new(0.0, 0.0, 100.0, 30.0);
        let (slice, remainder) = rect.divided_at(40.0, RectEdge::Left);
        assert_eq!(slice, Rect::new(0.0, 0.0, 40.0, 30.0));
        assert_eq!(remainder, Rect::new(40.0, 0.0, 60.0, 30.0));
    }

    #[test]
    fn test_divided_at_right() {
        let rect = Rect::new(0.0, 0.0, 100.0, 30.0);
        let (slice, remainder) = rect.divided_at(40.0, RectEdge::Right);
        assert_eq!(slice, Rect::new(60.0, 0.0, 40.0, 30.0));
        assert_eq!(remainder, Rect::new(0.0, 0.0, 60.0, 30.0));
    }

    #[test]
    fn test_divided_at_zero_distance() {
        let rect = Rect::new(5.0, 0.0, 100.0, 30.0);
        let (slice, remainder) = rect.divided_at(0.0, RectEdge::Left);
        assert!(slice.is_empty());
        assert_eq!(slice.left(), rect.left());
        assert_eq!(remainder, rect);
    }

    #[test]
    fn test_divided_at_clamps_oversized_distance() {
        let rect = Rect::new(0.0, 0.0, 50.0, 30.0);
        let (slice, remainder) = rect.divided_at(200.0, RectEdge::Left);
        assert_eq!(slice, rect);
        assert!(remainder.is_empty());
    }

    #[test]
    fn test_mirrored_in() {
        let container = Rect::new(0.0, 0.0, 100.0, 30.0);
        let rect = Rect::new(20.0, 5.0, 30.0, 20.0);
        let mirrored = rect.mirrored_in(&container);
        assert_eq!(mirrored, Rect::new(50.0, 5.0, 30.0, 20.0));
        // Mirroring twice is the identity.
        assert_eq!(mirrored.mirrored_in(&container), rect);
    }

    #[test]
    fn test_snap_to_grid_identity_on_integers() {
        let rect = Rect::new(2.0, 3.0, 10.0, 20.0);
        assert_eq!(rect.snapped_to_grid(1.0), rect);
        assert_eq!(rect.snapped_to_grid(2.0), rect);
    }

    #[test]
    fn test_snap_to_grid_fractional() {
        let rect = Rect::new(0.3, 0.6, 10.2, 19.9);
        let snapped = rect.snapped_to_grid(1.0);
        assert_eq!(snapped, Rect::new(0.0, 1.0, 11.0, 20.0));

        // At 2x, half-pixel positions are legal grid positions.
        let snapped2 = rect.snapped_to_grid(2.0);
        assert_eq!(snapped2.left(), 0.5);
        assert_eq!(snapped2.top(), 0.5);
    }

    #[test]
    fn test_snap_to_pixel_center() {
        assert_eq!(snap_to_pixel_center(20.0, 1.0), 19.5);
        assert_eq!(snap_to_pixel_center(20.3, 1.0), 19.5);
        assert_eq!(snap_to_pixel_center(20.0, 2.0), 19.75);
    }

    #[test]
    fn test_layout_direction_start_edge() {
        assert_eq!(LayoutDirection::LeftToRight.start_edge(), RectEdge::Left);
        assert_eq!(LayoutDirection::RightToLeft.start_edge(), RectEdge::Right);
        assert!(!LayoutDirection::LeftToRight.is_rtl());
        assert!(LayoutDirection::RightToLeft.is_rtl());
    }
}
