/// Pointer hit-test half-width around a guess marker, in CSS pixels.
///
/// Multiplied by [`ChartViewport::pixel_ratio`] to get canvas pixels.
pub const HIT_TOLERANCE_PX: f64 = 12.0;

/// Value range of a sample.
///
/// `range` is `max - min`, or `1.0` when every value is identical so that
/// mapping and scoring never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub min: f64,
    pub max: f64,
    pub range: f64,
}

impl ChartScale {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        let range = max - min;
        let range = if range == 0.0 { 1.0 } else { range };
        Self { min, max, range }
    }

    /// Computes the scale of a sample.
    ///
    /// Returns `None` for an empty sample.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (min, max) = values.iter().copied().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
        })?;
        Some(Self::new(min, max))
    }

    /// Maps a data value to a canvas x coordinate.
    ///
    /// Values outside `[min, max]` map outside the chart; no clamping happens
    /// in this direction.
    ///
    /// # Example
    ///
    /// ```
    /// use eyeball_engine::{ChartScale, ChartViewport};
    ///
    /// let scale = ChartScale::new(0.0, 100.0);
    /// let viewport = ChartViewport::new(50.0, 200.0, 1.0);
    /// assert_eq!(scale.to_canvas_x(25.0, &viewport), 100.0);
    /// ```
    #[must_use]
    pub fn to_canvas_x(&self, value: f64, viewport: &ChartViewport) -> f64 {
        viewport.origin + ((value - self.min) / self.range) * viewport.width
    }

    /// Maps a canvas x coordinate back to a data value.
    ///
    /// The position is clamped to the chart before mapping, so the result is
    /// always within `[min, max]` even for pointers outside the chart.
    ///
    /// # Example
    ///
    /// ```
    /// use eyeball_engine::{ChartScale, ChartViewport};
    ///
    /// let scale = ChartScale::new(0.0, 100.0);
    /// let viewport = ChartViewport::new(50.0, 200.0, 1.0);
    /// assert_eq!(scale.from_canvas_x(100.0, &viewport), 25.0);
    /// assert_eq!(scale.from_canvas_x(-500.0, &viewport), 0.0);
    /// assert_eq!(scale.from_canvas_x(9000.0, &viewport), 100.0);
    /// ```
    #[must_use]
    pub fn from_canvas_x(&self, x: f64, viewport: &ChartViewport) -> f64 {
        let fraction = ((x - viewport.origin) / viewport.width).clamp(0.0, 1.0);
        // Degenerate scales have `range == 1` while `max == min`.
        (self.min + fraction * self.range).min(self.max)
    }
}

/// Horizontal placement of the chart on the drawing surface.
///
/// `origin` and `width` are in canvas pixels. `pixel_ratio` is the number of
/// canvas pixels per CSS pixel and only affects hit-testing tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartViewport {
    pub origin: f64,
    pub width: f64,
    pub pixel_ratio: f64,
}

impl Default for ChartViewport {
    fn default() -> Self {
        Self::from_canvas(800.0, 50.0, 1.0)
    }
}

impl ChartViewport {
    /// Smallest chart width; keeps the mapping invertible on tiny surfaces.
    pub const MIN_WIDTH: f64 = 10.0;

    #[must_use]
    pub fn new(origin: f64, width: f64, pixel_ratio: f64) -> Self {
        Self {
            origin,
            width: width.max(Self::MIN_WIDTH),
            pixel_ratio,
        }
    }

    /// Viewport for a canvas of `canvas_width` with `padding` on both sides.
    #[must_use]
    pub fn from_canvas(canvas_width: f64, padding: f64, pixel_ratio: f64) -> Self {
        Self::new(padding, canvas_width - 2.0 * padding, pixel_ratio)
    }

    /// Hit-test half-width in canvas pixels.
    #[must_use]
    pub fn hit_tolerance(&self) -> f64 {
        HIT_TOLERANCE_PX * self.pixel_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_range_is_one() {
        let scale = ChartScale::from_values(&[4.0, 4.0, 4.0]).unwrap();
        assert_eq!(scale.min, 4.0);
        assert_eq!(scale.max, 4.0);
        assert_eq!(scale.range, 1.0);

        let viewport = ChartViewport::default();
        assert!(scale.to_canvas_x(4.0, &viewport).is_finite());
        assert_eq!(scale.from_canvas_x(10_000.0, &viewport), 4.0);
    }

    #[test]
    fn test_from_values() {
        let scale = ChartScale::from_values(&[3.0, -1.0, 7.0]).unwrap();
        assert_eq!((scale.min, scale.max, scale.range), (-1.0, 7.0, 8.0));
        assert!(ChartScale::from_values(&[]).is_none());
    }

    #[test]
    fn test_round_trip() {
        let scale = ChartScale::new(12.5, 140.0);
        let viewport = ChartViewport::from_canvas(640.0, 50.0, 2.0);
        for i in 0..=50 {
            let value = scale.min + scale.range * f64::from(i) / 50.0;
            let x = scale.to_canvas_x(value, &viewport);
            assert!((scale.from_canvas_x(x, &viewport) - value).abs() < 1e-9);
        }
    }

    #[test]
    fn test_inverse_never_leaves_range() {
        let scale = ChartScale::new(-3.0, 9.0);
        let viewport = ChartViewport::new(50.0, 300.0, 1.0);
        for x in [-1e9, -100.0, 0.0, 49.9, 50.0, 200.0, 350.0, 350.1, 1e9] {
            let value = scale.from_canvas_x(x, &viewport);
            assert!((scale.min..=scale.max).contains(&value), "{x} -> {value}");
        }
    }

    #[test]
    fn test_viewport_minimum_width() {
        let viewport = ChartViewport::from_canvas(60.0, 50.0, 1.0);
        assert_eq!(viewport.width, ChartViewport::MIN_WIDTH);
        assert_eq!(viewport.origin, 50.0);
    }

    #[test]
    fn test_hit_tolerance_scales_with_pixel_ratio() {
        assert_eq!(ChartViewport::new(0.0, 100.0, 1.0).hit_tolerance(), 12.0);
        assert_eq!(ChartViewport::new(0.0, 100.0, 2.0).hit_tolerance(), 24.0);
    }
}
