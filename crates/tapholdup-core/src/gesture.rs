//! Hit testing for the circular button.

use kurbo::{Point, Size};

/// Whether `point` (in the button's local coordinates) lands on the button.
///
/// The hit region is the circle centered in the bounding box whose radius is
/// half the width, regardless of the ring's drawn radius. Points exactly on
/// the boundary are inside.
pub fn hit_test(size: Size, point: Point) -> bool {
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    center.distance(point) <= size.width / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_inside() {
        assert!(hit_test(Size::new(100.0, 100.0), Point::new(50.0, 50.0)));
    }

    #[test]
    fn test_boundary_is_inside() {
        let size = Size::new(100.0, 100.0);
        assert!(hit_test(size, Point::new(100.0, 50.0)));
        assert!(hit_test(size, Point::new(50.0, 0.0)));
        assert!(!hit_test(size, Point::new(100.0 + 1e-6, 50.0)));
    }

    #[test]
    fn test_corners_are_outside() {
        let size = Size::new(100.0, 100.0);
        assert!(!hit_test(size, Point::new(0.0, 0.0)));
        assert!(!hit_test(size, Point::new(95.0, 95.0)));
    }

    #[test]
    fn test_radius_follows_width() {
        // Tall box: radius is half the width even though the height is larger.
        let size = Size::new(60.0, 200.0);
        assert!(hit_test(size, Point::new(30.0, 70.0)));
        assert!(!hit_test(size, Point::new(30.0, 69.0)));
    }
}
