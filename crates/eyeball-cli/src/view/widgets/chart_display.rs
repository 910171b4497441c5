use eyeball_engine::{BoxPlot, ChartScale, ChartViewport, RoundState};
use eyeball_stats::histogram::Histogram;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::{
    canvas::ChartCanvas,
    widgets::{measure_style, style},
};

const HISTOGRAM_BINS: usize = 20;
const SCATTER_ROWS: u16 = 3;
const BAR_SYMBOLS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

const GUESS_SYMBOL: &str = "╎";
const HELD_GUESS_SYMBOL: &str = "┃";
const ACTUAL_SYMBOL: &str = "│";
const CURSOR_SYMBOL: &str = "┊";

/// Histogram, scatter strip and markers of the current round.
///
/// The widget lays itself out on the same [`ChartCanvas`] the input handler
/// derives from the chart area, so a marker drawn in a column is the marker
/// a click in that column hits.
pub struct ChartDisplay<'a> {
    round: &'a RoundState,
    jitter: &'a [f64],
    cursor: Option<u16>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ChartDisplay<'a> {
    pub fn new(round: &'a RoundState, jitter: &'a [f64]) -> Self {
        Self {
            round,
            jitter,
            cursor: None,
            block: None,
        }
    }

    /// Column of the pointer, used for the hover highlight and the label of
    /// the next measure to place.
    pub fn cursor(self, cursor: Option<u16>) -> Self {
        Self { cursor, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }
}

fn label_rows(round: &RoundState) -> u16 {
    u16::try_from(round.slots().len()).unwrap_or(u16::MAX)
}

struct Bands {
    labels: Rect,
    plot: Rect,
    scatter: Rect,
    hint: Rect,
    axis: Rect,
}

impl Bands {
    fn new(area: Rect, label_rows: u16) -> Self {
        let [labels, plot, scatter, hint, axis] = Layout::vertical([
            Constraint::Length(label_rows),
            Constraint::Fill(1),
            Constraint::Length(SCATTER_ROWS),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Self {
            labels,
            plot,
            scatter,
            hint,
            axis,
        }
    }

    fn markers(&self) -> Rect {
        self.plot.union(self.scatter)
    }
}

#[derive(Debug, Clone, Copy)]
struct Geometry {
    canvas: ChartCanvas,
    viewport: ChartViewport,
    scale: ChartScale,
}

impl Geometry {
    fn column_of(&self, value: f64) -> Option<u16> {
        self.canvas
            .x_to_column(self.scale.to_canvas_x(value, &self.viewport))
    }

    /// Position of a column's centre along the value axis, in `[0, 1]`.
    fn fraction_at(&self, column: u16) -> Option<f64> {
        let x = self.canvas.column_to_x(column);
        let fraction = (x - self.viewport.origin) / self.viewport.width;
        (0.0..=1.0).contains(&fraction).then_some(fraction)
    }
}

impl Widget for ChartDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        if area.is_empty() {
            return;
        }

        let round = self.round;
        let canvas = ChartCanvas::new(area);
        let geometry = Geometry {
            canvas,
            viewport: canvas.viewport(),
            scale: round.scale(),
        };
        let bands = Bands::new(area, label_rows(round));

        render_histogram(&geometry, round.sample().values(), bands.plot, buf);
        render_scatter(&geometry, round.sample().values(), self.jitter, bands.scatter, buf);
        if round.hint_taken() {
            render_box_plot(&geometry, &round.sample().box_plot(), bands.hint, buf);
        }
        render_axis(&geometry, bands.axis, buf);

        let cursor = self.cursor.filter(|column| area.x <= *column && *column < area.right());
        let mut held = round.drag().map(|drag| drag.guess_index);
        if !round.is_submitted()
            && let Some(column) = cursor
        {
            held = held.or_else(|| round.guess_at(canvas.column_to_x(column), &geometry.viewport));
            render_cursor(column, bands.markers(), buf);
            if let Some(measure) = round.next_pending_measure() {
                let row = label_row(&bands, round.guesses().len());
                let text = measure.to_string();
                let start = column
                    .saturating_add(2)
                    .min(area.right().saturating_sub(text_width(&text)));
                put_str(buf, area, start, row, &text, measure_style(measure));
            }
        }

        for (i, guess) in round.guesses().iter().enumerate() {
            let (symbol, style) = if held == Some(i) {
                (HELD_GUESS_SYMBOL, measure_style(guess.measure).add_modifier(Modifier::BOLD))
            } else {
                (GUESS_SYMBOL, measure_style(guess.measure))
            };
            let Some(column) = geometry.column_of(guess.value) else {
                continue;
            };
            render_marker(column, symbol, style, bands.markers(), buf);
            let text = format!("Your {}", guess.measure);
            put_label(buf, area, column, label_row(&bands, i), &text, style);
        }

        if round.is_submitted() {
            for (i, actual) in round.actuals().iter().enumerate() {
                let Some(column) = geometry.column_of(actual.value) else {
                    continue;
                };
                let style = measure_style(actual.measure).add_modifier(Modifier::BOLD);
                render_marker(column, ACTUAL_SYMBOL, style, bands.markers(), buf);
                let text = actual.measure.to_string();
                put_label(buf, area, column, label_row(&bands, i), &text, style);
            }
        }
    }
}

fn label_row(bands: &Bands, index: usize) -> u16 {
    let offset = u16::try_from(index).unwrap_or(u16::MAX);
    bands
        .labels
        .y
        .saturating_add(offset)
        .min(bands.labels.bottom().saturating_sub(1))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn render_histogram(geometry: &Geometry, values: &[f64], area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let histogram = Histogram::equal_width(values, HISTOGRAM_BINS, geometry.scale.min, geometry.scale.max);
    let max_count = histogram.max_count().max(1);
    let full = u64::from(area.height) * 8;

    for column in area.left()..area.right() {
        let Some(fraction) = geometry.fraction_at(column) else {
            continue;
        };
        let bin = ((fraction * HISTOGRAM_BINS as f64) as usize).min(HISTOGRAM_BINS - 1);
        let eighths = (histogram.bins[bin].count * full + max_count / 2) / max_count;
        for (level, row) in (area.top()..area.bottom()).rev().enumerate() {
            let filled = eighths.saturating_sub(level as u64 * 8).min(8);
            if filled == 0 {
                break;
            }
            if let Some(cell) = buf.cell_mut((column, row)) {
                cell.set_symbol(BAR_SYMBOLS[filled as usize]).set_style(style::BAR);
            }
        }
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_scatter(geometry: &Geometry, values: &[f64], jitter: &[f64], area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let rows = f64::from(area.height);
    for (i, value) in values.iter().copied().enumerate() {
        let Some(column) = geometry.column_of(value) else {
            continue;
        };
        let offset = jitter.get(i).copied().unwrap_or(0.0) + 0.5;
        let offset = ((offset * rows).floor().max(0.0) as u16).min(area.height - 1);
        if let Some(cell) = buf.cell_mut((column, area.y + offset)) {
            cell.set_symbol("•").set_style(style::POINT);
        }
    }
}

fn render_box_plot(geometry: &Geometry, box_plot: &BoxPlot, area: Rect, buf: &mut Buffer) {
    let columns = [box_plot.min, box_plot.q1, box_plot.median, box_plot.q3, box_plot.max]
        .map(|value| geometry.column_of(value));
    let [Some(min), Some(q1), Some(median), Some(q3), Some(max)] = columns else {
        return;
    };
    for column in min..=max {
        let symbol = if column == median {
            "┃"
        } else if column == min {
            "├"
        } else if column == max {
            "┤"
        } else if (q1..=q3).contains(&column) {
            "▒"
        } else {
            "─"
        };
        if let Some(cell) = buf.cell_mut((column, area.y)) {
            cell.set_symbol(symbol).set_style(style::HINT);
        }
    }
}

fn render_axis(geometry: &Geometry, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let scale = geometry.scale;
    let (Some(first), Some(last)) = (geometry.column_of(scale.min), geometry.column_of(scale.max)) else {
        return;
    };
    for column in first..=last {
        if let Some(cell) = buf.cell_mut((column, area.y)) {
            cell.set_symbol("─").set_style(style::AXIS);
        }
    }
    let min_label = format!("{:.1}", scale.min);
    let max_label = format!("{:.1}", scale.max);
    put_str(buf, area, first, area.y, &min_label, style::AXIS);
    let start = last.saturating_add(1).saturating_sub(text_width(&max_label));
    if start > first.saturating_add(text_width(&min_label)) {
        put_str(buf, area, start, area.y, &max_label, style::AXIS);
    }
}

fn render_cursor(column: u16, area: Rect, buf: &mut Buffer) {
    for row in area.top()..area.bottom() {
        if let Some(cell) = buf.cell_mut((column, row))
            && cell.symbol() == " "
        {
            cell.set_symbol(CURSOR_SYMBOL).set_style(style::CURSOR);
        }
    }
}

fn render_marker(column: u16, symbol: &str, style: Style, area: Rect, buf: &mut Buffer) {
    for row in area.top()..area.bottom() {
        if let Some(cell) = buf.cell_mut((column, row)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

/// Writes a label starting at `column`, shifted left to stay inside `area`.
fn put_label(buf: &mut Buffer, area: Rect, column: u16, row: u16, text: &str, style: Style) {
    let start = column
        .min(area.right().saturating_sub(text_width(text)))
        .max(area.x);
    put_str(buf, area, start, row, text, style);
}

fn put_str(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    if x < area.x || x >= area.right() || y < area.y || y >= area.bottom() {
        return;
    }
    buf.set_stringn(x, y, text, usize::from(area.right() - x), style);
}

#[cfg(test)]
mod tests {
    use eyeball_engine::{Measure, PointerId, Sample};

    use super::*;

    fn round() -> RoundState {
        let values = (0..=100).map(f64::from).collect();
        RoundState::new(
            Sample::new("uniform", "flat", values),
            0,
            0,
            vec![Measure::Mean, Measure::Median],
        )
    }

    fn render(round: &RoundState, area: Rect) -> Buffer {
        let mut buf = Buffer::empty(area);
        let jitter = vec![0.0; round.sample().len()];
        ChartDisplay::new(round, &jitter)
            .cursor(Some(area.x + 20))
            .render(area, &mut buf);
        buf
    }

    fn column_text(buf: &Buffer, column: u16, rows: std::ops::Range<u16>) -> String {
        rows.map(|row| buf[(column, row)].symbol().to_owned()).collect()
    }

    #[test]
    fn test_guess_marker_is_drawn_where_it_is_hit() {
        let area = Rect::new(0, 0, 60, 14);
        let canvas = ChartCanvas::new(area);
        let mut round = round();
        let column = 30;
        let x = canvas.column_to_x(column);
        round.pointer_down(x, PointerId(0), &canvas.viewport()).unwrap();

        let buf = render(&round, area);
        // Label band is two rows tall; the plot starts right below it.
        assert_eq!(buf[(column, 2)].symbol(), GUESS_SYMBOL);
        assert!(column_text(&buf, column, 0..1).contains('Y'));
        assert_eq!(round.guess_at(canvas.column_to_x(column), &canvas.viewport()), Some(0));
    }

    #[test]
    fn test_actual_markers_only_after_submit() {
        let area = Rect::new(0, 0, 60, 14);
        let canvas = ChartCanvas::new(area);
        let viewport = canvas.viewport();
        let mut round = round();
        round.pointer_down(canvas.column_to_x(10), PointerId(0), &viewport).unwrap();
        round.pointer_up(PointerId(0));
        round.pointer_down(canvas.column_to_x(50), PointerId(0), &viewport).unwrap();
        round.pointer_up(PointerId(0));

        let geometry = Geometry {
            canvas,
            viewport,
            scale: round.scale(),
        };
        let mean_column = geometry.column_of(50.0).unwrap();

        let before = render(&round, area);
        assert_ne!(before[(mean_column, 3)].symbol(), ACTUAL_SYMBOL);

        round.submit(0).unwrap();
        let after = render(&round, area);
        assert_eq!(after[(mean_column, 3)].symbol(), ACTUAL_SYMBOL);
    }

    #[test]
    fn test_axis_labels_show_range() {
        let area = Rect::new(0, 0, 60, 14);
        let buf = render(&round(), area);
        let axis: String = (0..60).map(|column| buf[(column, 13)].symbol().to_owned()).collect();
        assert!(axis.contains("0.0"), "{axis}");
        assert!(axis.contains("100.0"), "{axis}");
    }

    #[test]
    fn test_box_plot_only_with_hint() {
        let area = Rect::new(0, 0, 60, 14);
        let mut round = round();
        let hint_row = |buf: &Buffer| -> String {
            (0..60).map(|column| buf[(column, 12)].symbol().to_owned()).collect()
        };
        assert!(!hint_row(&render(&round, area)).contains('▒'));
        round.take_hint().unwrap();
        assert!(hint_row(&render(&round, area)).contains('▒'));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let round = round();
        for (width, height) in [(0, 0), (1, 1), (3, 2), (10, 4)] {
            _ = render(&round, Rect::new(0, 0, width, height));
        }
    }
}
