//! Node placement for the stepper.
//!
//! The row is split into one equal-width slot per label. Each indicator sits
//! at the horizontal middle of its slot, lifted above the vertical midline by
//! the indicator radius so the label below it stays centered in the view.
//!
//! ```rust
//! use bubbletea_stepper::geometry::{layout, Size};
//!
//! let geometry = layout(Size::new(400.0, 100.0), 4, 5.0);
//! assert_eq!(geometry.slot_width, 100.0);
//! assert_eq!(geometry.centers[0].x, 50.0);
//! assert_eq!(geometry.centers[3].x, 350.0);
//! assert_eq!(geometry.centers[0].y, 45.0);
//! ```

/// Vertical gap between an indicator center and the top of its label.
pub const LABEL_OFFSET: f64 = 10.0;

/// Height of a label frame.
pub const LABEL_HEIGHT: f64 = 18.0;

/// A point in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position, growing downward.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of the view's allocated rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// An empty rectangle.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent from the origin.
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle.
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }
}

/// A straight path between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Where the stroke begins.
    pub start: Point,
    /// Where the stroke ends.
    pub end: Point,
}

impl Segment {
    /// Returns the point `fraction` of the way along the segment.
    pub fn point_at(&self, fraction: f64) -> Point {
        let t = fraction.clamp(0.0, 1.0);
        Point::new(
            self.start.x + (self.end.x - self.start.x) * t,
            self.start.y + (self.end.y - self.start.y) * t,
        )
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.y - self.start.y)
    }
}

/// Indicator centers for one layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeGeometry {
    /// One center per label, left to right.
    pub centers: Vec<Point>,
    /// Width of each label's slot.
    pub slot_width: f64,
}

impl NodeGeometry {
    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// True when there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Path the tracks follow, from the first center to the last.
    ///
    /// A single node yields a zero-length segment.
    pub fn track(&self) -> Option<Segment> {
        let start = *self.centers.first()?;
        let end = *self.centers.last()?;
        Some(Segment { start, end })
    }

    /// Frame of the label under node `index`: the full slot width, starting
    /// just below the indicator.
    pub fn label_frame(&self, index: usize) -> Option<Rect> {
        let center = self.centers.get(index)?;
        Some(Rect::new(
            Point::new(center.x - self.slot_width / 2.0, center.y + LABEL_OFFSET),
            Size::new(self.slot_width, LABEL_HEIGHT),
        ))
    }
}

/// Places `count` indicators across `bounds`.
///
/// Node `i` lands at `((W / N) * (i + 0.5), H / 2 - radius)`. A count of zero
/// returns empty geometry; callers reject empty label sets before getting
/// here.
pub fn layout(bounds: Size, count: usize, indicator_radius: f64) -> NodeGeometry {
    if count == 0 {
        return NodeGeometry::default();
    }

    let slot_width = bounds.width / count as f64;
    let first = Point::new(slot_width / 2.0, bounds.height / 2.0 - indicator_radius);

    let centers = (0..count)
        .map(|i| Point::new(first.x + i as f64 * slot_width, first.y))
        .collect();

    NodeGeometry {
        centers,
        slot_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_slot_formula() {
        for count in 1..=7 {
            let geometry = layout(Size::new(333.0, 90.0), count, 4.0);
            let slot = 333.0 / count as f64;
            assert_eq!(geometry.len(), count);
            assert!((geometry.slot_width - slot).abs() < 1e-9);
            for (i, center) in geometry.centers.iter().enumerate() {
                assert!((center.x - slot * (i as f64 + 0.5)).abs() < 1e-9);
                assert_eq!(center.y, 41.0);
            }
        }
    }

    #[test]
    fn test_layout_empty() {
        let geometry = layout(Size::new(100.0, 10.0), 0, 5.0);
        assert!(geometry.is_empty());
        assert!(geometry.track().is_none());
        assert!(geometry.label_frame(0).is_none());
    }

    #[test]
    fn test_single_node_track_is_degenerate() {
        let geometry = layout(Size::new(100.0, 40.0), 1, 5.0);
        let track = geometry.track().unwrap();
        assert_eq!(track.start, track.end);
        assert_eq!(track.length(), 0.0);
        assert_eq!(track.start, Point::new(50.0, 15.0));
    }

    #[test]
    fn test_label_frame_sits_under_node() {
        let geometry = layout(Size::new(400.0, 100.0), 4, 5.0);
        let frame = geometry.label_frame(2).unwrap();
        assert_eq!(frame.origin, Point::new(200.0, 55.0));
        assert_eq!(frame.size, Size::new(100.0, LABEL_HEIGHT));
        assert_eq!(frame.max_x(), 300.0);
    }

    #[test]
    fn test_segment_point_at_clamps() {
        let segment = Segment {
            start: Point::new(0.0, 0.0),
            end: Point::new(10.0, 0.0),
        };
        assert_eq!(segment.point_at(0.5), Point::new(5.0, 0.0));
        assert_eq!(segment.point_at(2.0), Point::new(10.0, 0.0));
        assert_eq!(segment.point_at(-1.0), Point::new(0.0, 0.0));
    }
}
