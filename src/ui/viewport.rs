//! Mapping between the logical canvas and terminal cells.

use crate::geometry::{Aabb, Point};
use ratatui::layout::Rect;

/// The terminal area the logical canvas was last drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    pub logical_width: f64,
    pub logical_height: f64,
}

impl Viewport {
    pub fn new(area: Rect, logical_width: f64, logical_height: f64) -> Self {
        Self {
            area,
            logical_width,
            logical_height,
        }
    }

    fn x_to_cols(&self, x: f64) -> f64 {
        x * self.area.width as f64 / self.logical_width
    }

    fn y_to_rows(&self, y: f64) -> f64 {
        y * self.area.height as f64 / self.logical_height
    }

    /// Logical point at the center of a terminal cell, `None` outside the area.
    pub fn to_logical(&self, column: u16, row: u16) -> Option<Point> {
        let area = self.area;
        if area.width == 0
            || area.height == 0
            || column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }
        let col = (column - area.x) as f64 + 0.5;
        let row = (row - area.y) as f64 + 0.5;
        Some(Point::new(
            col * self.logical_width / area.width as f64,
            row * self.logical_height / area.height as f64,
        ))
    }

    /// Cell containing a logical point, clamped to the area.
    pub fn to_cell(&self, point: Point) -> (u16, u16) {
        let area = self.area;
        let col = self.x_to_cols(point.x).floor();
        let row = self.y_to_rows(point.y).floor();
        let max_col = area.width.saturating_sub(1) as f64;
        let max_row = area.height.saturating_sub(1) as f64;
        (
            area.x + col.clamp(0.0, max_col) as u16,
            area.y + row.clamp(0.0, max_row) as u16,
        )
    }

    /// Cells covered by a logical rectangle, clipped to the area.
    pub fn rect_to_cells(&self, rect: &Aabb) -> Rect {
        let area = self.area;
        let clip_x = |v: f64| self.x_to_cols(v).clamp(0.0, area.width as f64);
        let clip_y = |v: f64| self.y_to_rows(v).clamp(0.0, area.height as f64);

        let x0 = clip_x(rect.x).floor() as u16;
        let x1 = clip_x(rect.right()).ceil() as u16;
        let y0 = clip_y(rect.y).floor() as u16;
        let y1 = clip_y(rect.bottom()).ceil() as u16;

        Rect::new(
            area.x + x0,
            area.y + y0,
            x1.saturating_sub(x0),
            y1.saturating_sub(y0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        // 100 x 30 cells: 10 logical units per column, 20 per row.
        Viewport::new(Rect::new(1, 1, 100, 30), 1000.0, 600.0)
    }

    #[test]
    fn test_to_logical_cell_center() {
        let vp = viewport();
        assert_eq!(vp.to_logical(1, 1), Some(Point::new(5.0, 10.0)));
        assert_eq!(vp.to_logical(51, 13), Some(Point::new(505.0, 250.0)));
    }

    #[test]
    fn test_to_logical_outside_area() {
        let vp = viewport();
        assert_eq!(vp.to_logical(0, 5), None);
        assert_eq!(vp.to_logical(101, 5), None);
        assert_eq!(vp.to_logical(5, 31), None);
    }

    #[test]
    fn test_to_cell_round_trips_cell_centers() {
        let vp = viewport();
        let point = vp.to_logical(40, 20).expect("inside");
        assert_eq!(vp.to_cell(point), (40, 20));
    }

    #[test]
    fn test_to_cell_clamps() {
        let vp = viewport();
        assert_eq!(vp.to_cell(Point::new(-50.0, 10_000.0)), (1, 30));
    }

    #[test]
    fn test_rect_to_cells() {
        let vp = viewport();
        let cells = vp.rect_to_cells(&Aabb::new(350.0, 250.0, 300.0, 60.0));
        assert_eq!(cells, Rect::new(36, 13, 30, 4));
    }

    #[test]
    fn test_rect_to_cells_clips() {
        let vp = viewport();
        let cells = vp.rect_to_cells(&Aabb::new(-100.0, 500.0, 200.0, 600.0));
        assert_eq!(cells, Rect::new(1, 26, 10, 5));
    }

    #[test]
    fn test_empty_area() {
        let vp = Viewport::new(Rect::new(0, 0, 0, 0), 1000.0, 600.0);
        assert_eq!(vp.to_logical(0, 0), None);
    }
}
