//! Text chart of scores over time.
//!
//! The y axis is fixed at 0-100 with gridlines every 25 points; sessions are
//! placed on the x axis in proportion to when they were recorded.

use burns_domain::{TrendPoint, MAX_SCORE};

/// Score covered by one chart row.
const ROW_STEP: u8 = 5;

/// Gridline spacing on the score axis.
const GRID_STEP: u8 = 25;

const MARKER: char = '●';
const GRID: char = '·';

/// Width of the score labels plus the axis line.
const GUTTER: usize = 5;

/// Render `points` (any order) into a chart `width` columns wide.
pub fn render(points: &[TrendPoint], width: usize) -> String {
    let width = width.max(2);
    let rows = usize::from(MAX_SCORE / ROW_STEP) + 1;

    let mut grid: Vec<Vec<char>> = (0..rows)
        .map(|row| {
            let fill = if row_value(row) % GRID_STEP == 0 { GRID } else { ' ' };
            vec![fill; width]
        })
        .collect();

    if let (Some(t_min), Some(t_max)) = (
        points.iter().map(|p| p.recorded_at.timestamp()).min(),
        points.iter().map(|p| p.recorded_at.timestamp()).max(),
    ) {
        let span = i128::from(t_max - t_min);
        for point in points {
            let col = if span == 0 {
                width / 2
            } else {
                let offset = i128::from(point.recorded_at.timestamp() - t_min);
                usize::try_from(offset * (width as i128 - 1) / span).unwrap_or(0)
            };
            let row = usize::from((MAX_SCORE - point.score.value() + ROW_STEP / 2) / ROW_STEP);
            grid[row.min(rows - 1)][col.min(width - 1)] = MARKER;
        }
    }

    let mut lines: Vec<String> = grid
        .into_iter()
        .enumerate()
        .map(|(row, cells)| {
            let value = row_value(row);
            let label = if value % GRID_STEP == 0 {
                format!("{:>3} ┤", value)
            } else {
                "    │".to_string()
            };
            let body: String = cells.into_iter().collect();
            format!("{}{}", label, body)
        })
        .collect();

    lines.push(format!("    └{}", "─".repeat(width)));
    lines.push(date_axis(points, width));
    lines.join("\n")
}

/// Score at the given row, top row first.
fn row_value(row: usize) -> u8 {
    MAX_SCORE.saturating_sub(u8::try_from(row).unwrap_or(u8::MAX).saturating_mul(ROW_STEP))
}

/// First and last session dates under the x axis.
fn date_axis(points: &[TrendPoint], width: usize) -> String {
    let first = points.iter().map(|p| p.recorded_at).min();
    let last = points.iter().map(|p| p.recorded_at).max();

    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return " ".repeat(GUTTER),
    };

    let first_date = first.as_naive().date().to_string();
    let last_date = last.as_naive().date().to_string();
    if first_date == last_date {
        return format!("{}{}", " ".repeat(GUTTER), first_date);
    }

    let gap = width.saturating_sub(first_date.len() + last_date.len()).max(1);
    format!("{}{}{}{}", " ".repeat(GUTTER), first_date, " ".repeat(gap), last_date)
}
