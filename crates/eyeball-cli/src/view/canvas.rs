use eyeball_engine::ChartViewport;
use ratatui::layout::{Position, Rect};

/// Canvas pixels per terminal column.
///
/// The engine measures hit tolerance in pixels; at this scale a marker can
/// be grabbed from its own column or either neighbour.
pub const CELL_PX: f64 = 8.0;

/// Blank columns on each side of the plotted value range.
pub const PADDING_COLUMNS: u16 = 2;

/// Maps terminal cells of the plot area to the engine's canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartCanvas {
    area: Rect,
}

impl ChartCanvas {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Chart placement whose value range runs from the centre of the first
    /// data column to the centre of the last one, leaving
    /// [`PADDING_COLUMNS`] blank columns on either side.
    pub fn viewport(&self) -> ChartViewport {
        let origin = (f64::from(PADDING_COLUMNS) + 0.5) * CELL_PX;
        let data_columns = f64::from(self.area.width) - f64::from(PADDING_COLUMNS) * 2.0;
        ChartViewport::new(origin, (data_columns - 1.0) * CELL_PX, 1.0)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Canvas x of the centre of terminal `column`.
    ///
    /// Columns left or right of the area map outside the chart.
    pub fn column_to_x(&self, column: u16) -> f64 {
        (f64::from(column) - f64::from(self.area.x) + 0.5) * CELL_PX
    }

    /// Terminal column containing canvas `x`, if it is inside the area.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn x_to_column(&self, x: f64) -> Option<u16> {
        let offset = (x / CELL_PX).floor();
        if !(0.0..f64::from(self.area.width)).contains(&offset) {
            return None;
        }
        Some(self.area.x + offset as u16)
    }

    /// Clamps `column` into the area.
    pub fn clamp_column(&self, column: u16) -> u16 {
        let last = self.area.right().saturating_sub(1).max(self.area.x);
        column.clamp(self.area.x, last)
    }

    pub fn center_column(&self) -> u16 {
        self.area.x + self.area.width / 2
    }
}

#[cfg(test)]
mod tests {
    use eyeball_engine::ChartScale;

    use super::*;

    fn canvas() -> ChartCanvas {
        ChartCanvas::new(Rect::new(10, 5, 100, 20))
    }

    #[test]
    fn test_viewport_leaves_padding() {
        let viewport = canvas().viewport();
        assert_eq!(viewport.origin, 20.0);
        assert_eq!(viewport.width, 760.0);
        assert_eq!(viewport.hit_tolerance(), 12.0);
    }

    #[test]
    fn test_column_mapping() {
        let canvas = canvas();
        assert_eq!(canvas.column_to_x(10), 4.0);
        assert_eq!(canvas.x_to_column(4.0), Some(10));
        assert_eq!(canvas.x_to_column(799.9), Some(109));
        assert_eq!(canvas.x_to_column(-0.1), None);
        assert_eq!(canvas.x_to_column(800.0), None);
        for column in 10..110 {
            assert_eq!(canvas.x_to_column(canvas.column_to_x(column)), Some(column));
        }
    }

    #[test]
    fn test_value_range_is_inside_area() {
        let canvas = canvas();
        let viewport = canvas.viewport();
        let scale = ChartScale::new(0.0, 150.0);
        assert_eq!(canvas.x_to_column(scale.to_canvas_x(0.0, &viewport)), Some(12));
        assert_eq!(canvas.x_to_column(scale.to_canvas_x(150.0, &viewport)), Some(107));
        // Both ends sit on column centres, two blank columns from the edge.
        assert_eq!(scale.to_canvas_x(0.0, &viewport), canvas.column_to_x(12));
        assert_eq!(scale.to_canvas_x(150.0, &viewport), canvas.column_to_x(107));
        assert_eq!(scale.from_canvas_x(canvas.column_to_x(12), &viewport), 0.0);
        assert_eq!(scale.from_canvas_x(canvas.column_to_x(107), &viewport), 150.0);
    }

    #[test]
    fn test_clamp_column() {
        let canvas = canvas();
        assert_eq!(canvas.clamp_column(0), 10);
        assert_eq!(canvas.clamp_column(50), 50);
        assert_eq!(canvas.clamp_column(500), 109);
        assert_eq!(canvas.center_column(), 60);
    }
}
