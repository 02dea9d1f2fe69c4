//! Axis-aligned rectangles in logical canvas units (y grows downward).

/// A point on the logical canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box. Edges are half-open: `[x, x + width) × [y, y + height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `2 * radius` centered on `center`.
    pub fn centered_square(center: Point, radius: f64) -> Self {
        Self::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when both projections overlap. Boxes that only touch do not
    /// intersect, and a zero-area box intersects nothing.
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn translate_x(&mut self, dx: f64) {
        self.x += dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let player = Aabb::new(90.0, 90.0, 40.0, 40.0);
        let terrain = Aabb::new(100.0, 0.0, 10.0, 120.0);
        assert!(player.intersects(&terrain));
        assert!(terrain.intersects(&player));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Aabb::new(10.0, 0.0, 10.0, 10.0))); // right edge
        assert!(!a.intersects(&Aabb::new(-10.0, 0.0, 10.0, 10.0))); // left edge
        assert!(!a.intersects(&Aabb::new(0.0, 10.0, 10.0, 10.0))); // bottom edge
        assert!(!a.intersects(&Aabb::new(0.0, -10.0, 10.0, 10.0))); // top edge
    }

    #[test]
    fn test_single_axis_overlap_is_not_enough() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Aabb::new(5.0, 50.0, 10.0, 10.0)));
        assert!(!a.intersects(&Aabb::new(50.0, 5.0, 10.0, 10.0)));
    }

    #[test]
    fn test_zero_area_never_intersects() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&Aabb::new(5.0, 0.0, 10.0, 0.0)));
        assert!(!a.intersects(&Aabb::new(5.0, 0.0, 0.0, 10.0)));
    }

    #[test]
    fn test_centered_square() {
        let b = Aabb::centered_square(Point::new(100.0, 300.0), 20.0);
        assert_eq!(b, Aabb::new(80.0, 280.0, 40.0, 40.0));
    }

    #[test]
    fn test_contains_is_half_open() {
        let b = Aabb::new(350.0, 250.0, 300.0, 60.0);
        assert!(b.contains(Point::new(350.0, 250.0)));
        assert!(b.contains(Point::new(649.9, 309.9)));
        assert!(!b.contains(Point::new(650.0, 260.0)));
        assert!(!b.contains(Point::new(400.0, 310.0)));
    }
}
