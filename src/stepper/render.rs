//! Terminal rendering of a stepper scene.
//!
//! The scene lives in view coordinates; rendering scales it horizontally
//! onto `columns` terminal cells. The first line carries the tracks with
//! the indicators on top, the second the labels centered under their nodes.

use crate::geometry::Size;
use crate::layers::LayerModel;
use lipgloss_extras::lipgloss::{Color, Style};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const HEAVY_TRACK: char = '━';
const LIGHT_TRACK: char = '─';
const INDICATOR: char = '●';

type Cell<'a> = (char, Option<&'a str>);

/// Renders `layers` laid out in `bounds` into `columns` cells.
///
/// Returns an empty string when there is nothing to draw.
pub fn render(layers: &LayerModel, bounds: Size, columns: usize) -> String {
    if layers.node_count() == 0 || columns == 0 || bounds.width <= 0.0 {
        return String::new();
    }

    let scale = columns as f64 / bounds.width;
    let to_col = |x: f64| ((x * scale).floor().max(0.0) as usize).min(columns - 1);

    let mut row: Vec<Cell> = vec![(' ', None); columns];
    for track in layers.tracks() {
        let Some(path) = track.path else { continue };
        let fraction = track.presented_stroke_end();
        if track.line_width <= 0.0 || fraction <= 0.0 {
            continue;
        }
        let glyph = if track.line_width >= 2.0 {
            HEAVY_TRACK
        } else {
            LIGHT_TRACK
        };
        let start = to_col(path.start.x);
        let end = to_col(path.point_at(fraction).x);
        for cell in &mut row[start..=end.max(start)] {
            *cell = (glyph, Some(track.stroke_color.as_str()));
        }
    }
    for node in layers.indicators() {
        row[to_col(node.center.x)] = (INDICATOR, Some(node.fill_color.as_str()));
    }

    let mut labels = String::new();
    let mut cursor = 0;
    for label in layers.labels() {
        let start = to_col(label.frame.origin.x).max(cursor);
        let end = ((label.frame.max_x() * scale).floor().max(0.0) as usize).min(columns);
        if end <= start {
            continue;
        }
        labels.push_str(&" ".repeat(start - cursor));
        labels.push_str(&paint(
            &center(&label.text, end - start),
            Some(label.foreground_color.as_str()),
        ));
        cursor = end;
    }
    labels.push_str(&" ".repeat(columns - cursor));

    format!("{}\n{}", paint_cells(&row), labels)
}

fn paint(text: &str, color: Option<&str>) -> String {
    match color {
        Some(color) if !color.is_empty() => Style::new()
            .foreground(Color::from(color))
            .render(text),
        _ => text.to_string(),
    }
}

// Styles runs of equally colored cells together.
fn paint_cells(cells: &[Cell]) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut run_color: Option<&str> = None;

    for &(ch, color) in cells {
        if color != run_color && !run.is_empty() {
            out.push_str(&paint(&run, run_color));
            run.clear();
        }
        run_color = color;
        run.push(ch);
    }
    out.push_str(&paint(&run, run_color));
    out
}

/// Truncates `text` to `width` display columns and pads it evenly on both
/// sides.
fn center(text: &str, width: usize) -> String {
    let mut fitted = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > width {
            break;
        }
        fitted.push_str(grapheme);
        used += w;
    }

    let left = (width - used) / 2;
    let right = width - used - left;
    format!("{}{}{}", " ".repeat(left), fitted, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::layout;
    use crate::theme::ThemeConfig;
    use lipgloss_extras::lipgloss;

    fn scene(names: &[&str], bounds: Size) -> LayerModel {
        let theme = ThemeConfig::default();
        let geometry = layout(bounds, names.len(), theme.indicator_radius);
        let labels: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        let mut layers = LayerModel::new();
        layers.rebuild_all(&geometry, &theme, &labels, 1.0);
        layers
    }

    #[test]
    fn test_center_pads_and_truncates() {
        assert_eq!(center("How", 10), "   How    ");
        assert_eq!(center("Hello", 10), "  Hello   ");
        assert_eq!(center("Address", 4), "Addr");
        assert_eq!(center("日本語", 5), "日本 ");
        assert_eq!(center("", 2), "  ");
    }

    #[test]
    fn test_render_empty_scene() {
        assert_eq!(render(&LayerModel::new(), Size::new(40.0, 3.0), 40), "");
        let layers = scene(&["a"], Size::new(40.0, 3.0));
        assert_eq!(render(&layers, Size::ZERO, 40), "");
        assert_eq!(render(&layers, Size::new(40.0, 3.0), 0), "");
    }

    #[test]
    fn test_render_inactive_track_and_labels() {
        let layers = scene(&["Hello", "How", "Are", "YOU"], Size::new(40.0, 3.0));
        let view = render(&layers, Size::new(40.0, 3.0), 40);
        let plain = lipgloss::strip_ansi(&view);
        let lines: Vec<&str> = plain.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "     ●━━━━━━━━━●━━━━━━━━━●━━━━━━━━━●    "
        );
        assert_eq!(lines[1], "  Hello      How       Are       YOU    ");
        assert_eq!(lipgloss::width_visible(view.lines().next().unwrap_or("")), 40);
    }

    #[test]
    fn test_render_scales_to_columns() {
        let layers = scene(&["a", "b"], Size::new(400.0, 100.0));
        let plain = lipgloss::strip_ansi(&render(&layers, Size::new(400.0, 100.0), 20));
        let first = plain.lines().next().unwrap_or("");
        assert_eq!(first.chars().count(), 20);
        assert_eq!(first.chars().nth(5), Some(INDICATOR));
        assert_eq!(first.chars().nth(15), Some(INDICATOR));
    }

    #[test]
    fn test_thin_and_hidden_tracks() {
        let bounds = Size::new(20.0, 3.0);
        let labels = vec!["a".to_string(), "b".to_string()];

        let thin = ThemeConfig::default().with_line_width(1.0);
        let geometry = layout(bounds, 2, thin.indicator_radius);
        let mut layers = LayerModel::new();
        layers.rebuild_all(&geometry, &thin, &labels, 1.0);
        let plain = lipgloss::strip_ansi(&render(&layers, bounds, 20));
        assert!(plain.contains(LIGHT_TRACK));

        let hidden = ThemeConfig::default().with_line_width(0.0);
        layers.rebuild_all(&geometry, &hidden, &labels, 1.0);
        let plain = lipgloss::strip_ansi(&render(&layers, bounds, 20));
        assert!(!plain.contains(LIGHT_TRACK));
        assert!(!plain.contains(HEAVY_TRACK));
        assert_eq!(plain.matches(INDICATOR).count(), 2);
    }
}
