//! PNG chart of fold growth
//!
//! Four panels on a 2×2 grid:
//! - thickness vs folds, linear scale, with the first target as a dashed line
//! - thickness vs folds, log scale, same reference line
//! - required sheet length vs folds, log scale
//! - fold counts per target as labelled bars
//!
//! Each panel carries a title, axis labels and tick labels. Text comes from
//! the `font8x8` bitmap glyphs, so rendering needs no system fonts.

use std::fmt;
use std::path::Path;

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{ImageError, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use paper_fold_core::{
    growth_series, length_series, FoldError, FoldTarget, MaterialProperties, Meters,
    ScenarioOutcome,
};

const WIDTH: u32 = 1500;
const HEIGHT: u32 = 1000;

const MARGIN_LEFT: i32 = 70;
const MARGIN_TOP: i32 = 44;
const MARGIN_RIGHT: i32 = 24;
const MARGIN_BOTTOM: i32 = 48;

/// Glyph edge in pixels at scale 1
const GLYPH_SIZE: i32 = 8;
const TITLE_SCALE: u32 = 2;
const LABEL_SCALE: u32 = 1;
const TICK_LENGTH: f32 = 4.0;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const TEXT: Rgb<u8> = Rgb([20, 20, 20]);
const AXIS: Rgb<u8> = Rgb([40, 40, 40]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);
const REFERENCE: Rgb<u8> = Rgb([214, 39, 40]);
const THICKNESS_LINEAR: Rgb<u8> = Rgb([31, 119, 180]);
const THICKNESS_LOG: Rgb<u8> = Rgb([44, 160, 44]);
const LENGTH: Rgb<u8> = Rgb([128, 0, 128]);
const BAR_COLORS: [Rgb<u8>; 3] = [Rgb([31, 119, 180]), Rgb([44, 160, 44]), Rgb([214, 39, 40])];

/// Errors that can occur while rendering the chart
#[derive(Debug)]
pub(crate) enum ChartError {
    /// A series value could not be computed
    Model(FoldError),
    /// Nothing to plot
    EmptySeries(&'static str),
    /// Failed to encode or write the image
    Image(ImageError),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Model(e) => write!(f, "Failed to compute chart data: {e}"),
            ChartError::EmptySeries(name) => write!(f, "Chart series '{name}' is empty"),
            ChartError::Image(e) => write!(f, "Failed to save chart: {e}"),
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChartError::Model(e) => Some(e),
            ChartError::Image(e) => Some(e),
            ChartError::EmptySeries(_) => None,
        }
    }
}

impl From<FoldError> for ChartError {
    fn from(e: FoldError) -> Self {
        ChartError::Model(e)
    }
}

impl From<ImageError> for ChartError {
    fn from(e: ImageError) -> Self {
        ChartError::Image(e)
    }
}

#[derive(Debug, Clone, Copy)]
enum Scale {
    Linear { max: f64 },
    Log10 { min_decade: f64, max_decade: f64 },
}

impl Scale {
    fn linear(values: impl Iterator<Item = f64>) -> Self {
        let max = values.fold(0.0_f64, f64::max);
        Scale::Linear {
            max: if max > 0.0 { max * 1.05 } else { 1.0 },
        }
    }

    fn log10(values: impl Iterator<Item = f64>) -> Self {
        let (min, max) = values
            .filter(|v| *v > 0.0)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if !min.is_finite() || !max.is_finite() {
            return Scale::Log10 {
                min_decade: 0.0,
                max_decade: 1.0,
            };
        }
        let min_decade = min.log10().floor();
        let max_decade = max.log10().ceil().max(min_decade + 1.0);
        Scale::Log10 {
            min_decade,
            max_decade,
        }
    }

    /// Map a value to 0.0 (bottom) ..= 1.0 (top), clamped
    fn fraction(self, value: f64) -> f64 {
        let fraction = match self {
            Scale::Linear { max } => value / max,
            Scale::Log10 {
                min_decade,
                max_decade,
            } => {
                if value <= 0.0 {
                    0.0
                } else {
                    (value.log10() - min_decade) / (max_decade - min_decade)
                }
            }
        };
        fraction.clamp(0.0, 1.0)
    }

    /// Values at which horizontal grid lines are drawn
    fn grid_values(self) -> Vec<f64> {
        match self {
            Scale::Linear { max } => (1..=5_i32).map(|i| max * f64::from(i) / 5.0).collect(),
            Scale::Log10 {
                min_decade,
                max_decade,
            } => {
                let decades = (max_decade - min_decade) as i32;
                (0..=decades)
                    .map(|d| 10f64.powf(min_decade + f64::from(d)))
                    .collect()
            }
        }
    }

    fn tick_label(self, value: f64) -> String {
        match self {
            Scale::Linear { max } if max < 1000.0 => format!("{value:.0}"),
            Scale::Linear { .. } => format!("{value:.1e}"),
            Scale::Log10 { .. } => format!("1e{}", value.log10().round() as i32),
        }
    }
}

/// Width in pixels of `text` at `scale`
fn text_width(text: &str, scale: u32) -> i32 {
    text.chars().count() as i32 * GLYPH_SIZE * scale as i32
}

/// Draw `text` with its top-left corner at `origin`. Characters outside
/// basic Latin are left blank.
fn draw_text(img: &mut RgbImage, text: &str, origin: (i32, i32), scale: u32, color: Rgb<u8>) {
    let pixel = scale as i32;
    for (i, ch) in text.chars().enumerate() {
        let glyph = BASIC_FONTS.get(ch).unwrap_or([0; 8]);
        let left = origin.0 + i as i32 * GLYPH_SIZE * pixel;
        for (row, bits) in glyph.iter().enumerate() {
            for column in 0..GLYPH_SIZE {
                if *bits & (1_u8 << column) != 0 {
                    let x = left + column * pixel;
                    let y = origin.1 + row as i32 * pixel;
                    draw_filled_rect_mut(img, Rect::at(x, y).of_size(scale, scale), color);
                }
            }
        }
    }
}

fn draw_text_centered(img: &mut RgbImage, text: &str, center_x: i32, top: i32, scale: u32) {
    draw_text(img, text, (center_x - text_width(text, scale) / 2, top), scale, TEXT);
}

/// Pixel rectangle for one panel's plot area
#[derive(Debug, Clone, Copy)]
struct Panel {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl Panel {
    fn grid_cell(column: i32, row: i32) -> Self {
        let cell_width = WIDTH as i32 / 2;
        let cell_height = HEIGHT as i32 / 2;
        Panel {
            left: column * cell_width + MARGIN_LEFT,
            top: row * cell_height + MARGIN_TOP,
            width: cell_width - MARGIN_LEFT - MARGIN_RIGHT,
            height: cell_height - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }

    fn bottom(&self) -> i32 {
        self.top + self.height
    }

    fn point(&self, x_fraction: f64, y_fraction: f64) -> (f32, f32) {
        let x = f64::from(self.left) + x_fraction * f64::from(self.width);
        let y = f64::from(self.bottom()) - y_fraction * f64::from(self.height);
        (x as f32, y as f32)
    }

    /// Title above the plot, unit label over the y axis, x label underneath
    fn draw_labels(&self, img: &mut RgbImage, title: &str, x_label: &str, y_label: &str) {
        let center = self.left + self.width / 2;
        draw_text_centered(img, title, center, self.top - MARGIN_TOP + 4, TITLE_SCALE);
        draw_text(img, y_label, (self.left - GLYPH_SIZE, self.top - 14), LABEL_SCALE, TEXT);
        draw_text_centered(img, x_label, center, self.bottom() + 28, LABEL_SCALE);
    }

    fn draw_frame(&self, img: &mut RgbImage, scale: Scale) {
        let (left, right) = (self.left as f32, (self.left + self.width) as f32);
        for value in scale.grid_values() {
            let (_, y) = self.point(0.0, scale.fraction(value));
            draw_line_segment_mut(img, (left, y), (right, y), GRID);

            let label = scale.tick_label(value);
            let x = self.left - 6 - text_width(&label, LABEL_SCALE);
            draw_text(img, &label, (x, y as i32 - GLYPH_SIZE / 2), LABEL_SCALE, TEXT);
        }
        let bottom = self.bottom() as f32;
        draw_line_segment_mut(img, (left, bottom), (right, bottom), AXIS);
        draw_line_segment_mut(img, (left, self.top as f32), (left, bottom), AXIS);
    }

    /// Tick marks and fold-count labels along the x axis
    fn draw_x_ticks(&self, img: &mut RgbImage, max_x: u32) {
        let max_x = max_x.max(1);
        let step = max_x.div_ceil(6).max(1);
        let bottom = self.bottom() as f32;
        for n in (0..=max_x).step_by(step as usize) {
            let (x, _) = self.point(f64::from(n) / f64::from(max_x), 0.0);
            draw_line_segment_mut(img, (x, bottom), (x, bottom + TICK_LENGTH), AXIS);
            draw_text_centered(img, &n.to_string(), x as i32, self.bottom() + 8, LABEL_SCALE);
        }
    }

    fn draw_series(&self, img: &mut RgbImage, series: &[(u32, Meters)], max_x: u32, scale: Scale, color: Rgb<u8>) {
        let max_x = f64::from(max_x.max(1));
        let points: Vec<(f32, f32)> = series
            .iter()
            .map(|(n, value)| self.point(f64::from(*n) / max_x, scale.fraction(**value)))
            .collect();

        for pair in points.windows(2) {
            draw_line_segment_mut(img, pair[0], pair[1], color);
        }
        for &(x, y) in &points {
            draw_filled_rect_mut(img, Rect::at(x as i32 - 2, y as i32 - 2).of_size(5, 5), color);
        }
    }

    fn draw_reference(&self, img: &mut RgbImage, value: Meters, scale: Scale) {
        let (_, y) = self.point(0.0, scale.fraction(*value));
        let right = self.left + self.width;
        let mut x = self.left;
        while x < right {
            let end = (x + 8).min(right);
            draw_line_segment_mut(img, (x as f32, y), (end as f32, y), REFERENCE);
            x += 14;
        }
    }

    /// Legend entry for the dashed reference line, top-left inside the plot
    fn draw_legend(&self, img: &mut RgbImage, target: &FoldTarget) {
        let y = (self.top + 16) as f32;
        for start in [12, 26] {
            let x = (self.left + start) as f32;
            draw_line_segment_mut(img, (x, y), (x + 8.0, y), REFERENCE);
        }
        let label = format!("{} ({:.0} m)", target.name, *target.distance);
        draw_text(img, &label, (self.left + 42, self.top + 12), LABEL_SCALE, TEXT);
    }

    /// Horizontal extent and top edge of bar `index` out of `count`
    fn bar(&self, index: usize, count: usize, scale: Scale, value: f64) -> (i32, i32, i32) {
        let slot = f64::from(self.width) / count as f64;
        let left = self.left + (slot * (index as f64 + 0.2)).round() as i32;
        let right = self.left + (slot * (index as f64 + 0.8)).round() as i32;
        let top = self.point(0.0, scale.fraction(value)).1.round() as i32;
        (left, right, top)
    }

    /// One bar per outcome, fold count above it and target name below
    fn draw_fold_bars(&self, img: &mut RgbImage, outcomes: &[ScenarioOutcome], scale: Scale) {
        for (i, outcome) in outcomes.iter().enumerate() {
            let folds = outcome.result.fold_count;
            let (left, right, top) = self.bar(i, outcomes.len(), scale, f64::from(folds));
            let height = self.bottom() - top;
            if height > 0 {
                let rect = Rect::at(left, top).of_size((right - left + 1) as u32, height as u32);
                draw_filled_rect_mut(img, rect, BAR_COLORS[i % BAR_COLORS.len()]);
            }

            let center = (left + right) / 2;
            draw_text_centered(img, &folds.to_string(), center, top - 20, TITLE_SCALE);
            draw_text_centered(img, &outcome.target.name, center, self.bottom() + 8, LABEL_SCALE);
        }
    }
}

/// Draw the four-panel growth chart into an image buffer.
///
/// # Errors
/// [`ChartError::Model`] if a series overflows, [`ChartError::EmptySeries`]
/// if `max_folds` is zero or there are no outcomes.
fn draw_chart(
    outcomes: &[ScenarioOutcome],
    material: &MaterialProperties,
    max_folds: u32,
) -> Result<RgbImage, ChartError> {
    let thickness = growth_series(max_folds, material)?;
    let lengths = length_series(max_folds, material)?;
    if lengths.is_empty() {
        return Err(ChartError::EmptySeries("required length"));
    }
    if outcomes.is_empty() {
        return Err(ChartError::EmptySeries("fold counts"));
    }
    let reference = &outcomes[0].target;

    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    // Thickness, linear
    let panel = Panel::grid_cell(0, 0);
    let scale = Scale::linear(thickness.iter().map(|(_, t)| **t).chain([*reference.distance]));
    panel.draw_frame(&mut img, scale);
    panel.draw_x_ticks(&mut img, max_folds);
    panel.draw_reference(&mut img, reference.distance, scale);
    panel.draw_series(&mut img, &thickness, max_folds, scale, THICKNESS_LINEAR);
    panel.draw_legend(&mut img, reference);
    panel.draw_labels(&mut img, "Thickness vs folds (linear)", "folds", "thickness (m)");

    // Thickness, log
    let panel = Panel::grid_cell(1, 0);
    let scale = Scale::log10(thickness.iter().map(|(_, t)| **t).chain([*reference.distance]));
    panel.draw_frame(&mut img, scale);
    panel.draw_x_ticks(&mut img, max_folds);
    panel.draw_reference(&mut img, reference.distance, scale);
    panel.draw_series(&mut img, &thickness, max_folds, scale, THICKNESS_LOG);
    panel.draw_legend(&mut img, reference);
    panel.draw_labels(&mut img, "Thickness vs folds (log scale)", "folds", "thickness (m)");

    // Required length, log
    let panel = Panel::grid_cell(0, 1);
    let scale = Scale::log10(lengths.iter().map(|(_, l)| **l));
    panel.draw_frame(&mut img, scale);
    panel.draw_x_ticks(&mut img, max_folds);
    panel.draw_series(&mut img, &lengths, max_folds, scale, LENGTH);
    panel.draw_labels(&mut img, "Paper length required (log scale)", "folds", "length (m)");

    // Fold counts per target
    let panel = Panel::grid_cell(1, 1);
    let scale = Scale::linear(outcomes.iter().map(|o| f64::from(o.result.fold_count)));
    panel.draw_frame(&mut img, scale);
    panel.draw_fold_bars(&mut img, outcomes, scale);
    panel.draw_labels(&mut img, "Folds needed per target", "target", "folds");

    Ok(img)
}

/// Render the chart and write it to `path` (format chosen by extension).
///
/// # Errors
/// See [`draw_chart`]; [`ChartError::Image`] if the file cannot be written.
pub(crate) fn render_chart(
    outcomes: &[ScenarioOutcome],
    material: &MaterialProperties,
    max_folds: u32,
    path: &Path,
) -> Result<(), ChartError> {
    let img = draw_chart(outcomes, material, max_folds)?;
    img.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::Range;

    use paper_fold_core::{run_scenarios, standard_targets};

    fn standard_outcomes() -> (Vec<ScenarioOutcome>, MaterialProperties) {
        let paper = MaterialProperties::standard_paper();
        let outcomes = run_scenarios(&standard_targets(), &paper).unwrap();
        (outcomes, paper)
    }

    fn contains_color(img: &RgbImage, xs: Range<i32>, ys: Range<i32>, color: Rgb<u8>) -> bool {
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .any(|(x, y)| *img.get_pixel(x as u32, y as u32) == color)
    }

    #[test]
    fn test_log_scale_spans_whole_decades() {
        let scale = Scale::log10([0.00008, 85_899.0].into_iter());
        assert!(scale.fraction(1e-5) < 1e-9);
        assert!(scale.fraction(1e5) > 1.0 - 1e-9);
        assert_eq!(scale.grid_values().len(), 11);
        assert_eq!(scale.tick_label(1e-5), "1e-5");
        assert_eq!(scale.tick_label(1e5), "1e5");
    }

    #[test]
    fn test_linear_scale_clamps() {
        let scale = Scale::linear([10.0, 20.0].into_iter());
        assert_eq!(scale.fraction(-5.0), 0.0);
        assert_eq!(scale.fraction(1000.0), 1.0);
        assert!(scale.fraction(20.0) < 1.0);
        assert_eq!(scale.tick_label(10.5), "10");
    }

    #[test]
    fn test_text_rendering() {
        assert_eq!(text_width("Fuji", 2), 64);

        let mut img = RgbImage::from_pixel(40, 10, BACKGROUND);
        draw_text(&mut img, "é", (0, 0), 1, TEXT);
        assert!(!contains_color(&img, 0..40, 0..10, TEXT));

        draw_text(&mut img, "A", (0, 0), 1, TEXT);
        assert!(contains_color(&img, 0..8, 0..8, TEXT));
        assert!(!contains_color(&img, 8..40, 0..10, TEXT));
    }

    #[test]
    fn test_draw_chart_dimensions_and_bars() {
        let (outcomes, paper) = standard_outcomes();
        let img = draw_chart(&outcomes, &paper, 30).unwrap();
        assert_eq!(img.dimensions(), (WIDTH, HEIGHT));

        // Centre of the first bar, just above the axis
        let panel = Panel::grid_cell(1, 1);
        let scale = Scale::linear(outcomes.iter().map(|o| f64::from(o.result.fold_count)));
        let (left, right, _) = panel.bar(0, outcomes.len(), scale, 26.0);
        let x = (left + right) / 2;
        let y = panel.bottom() - 3;
        assert_eq!(*img.get_pixel(x as u32, y as u32), BAR_COLORS[0]);
    }

    #[test]
    fn test_chart_is_labelled() {
        let (outcomes, paper) = standard_outcomes();
        let img = draw_chart(&outcomes, &paper, 30).unwrap();

        // Title band above every panel
        for (column, row) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            let panel = Panel::grid_cell(column, row);
            let band = panel.top - MARGIN_TOP..panel.top - 20;
            assert!(
                contains_color(&img, panel.left..panel.left + panel.width, band, TEXT),
                "panel ({column}, {row}) has no title"
            );
        }

        // Legend next to the dashed reference swatch
        let panel = Panel::grid_cell(0, 0);
        let legend_x = panel.left + 42..panel.left + 200;
        assert!(contains_color(&img, legend_x, panel.top + 12..panel.top + 20, TEXT));
        assert!(contains_color(&img, panel.left + 12..panel.left + 20, panel.top + 15..panel.top + 18, REFERENCE));

        // Fold count printed above each bar
        let panel = Panel::grid_cell(1, 1);
        let scale = Scale::linear(outcomes.iter().map(|o| f64::from(o.result.fold_count)));
        for (i, outcome) in outcomes.iter().enumerate() {
            let (left, right, top) = panel.bar(i, outcomes.len(), scale, f64::from(outcome.result.fold_count));
            let center = (left + right) / 2;
            assert!(
                contains_color(&img, center - 16..center + 16, top - 20..top - 4, TEXT),
                "no label above bar {i}"
            );
        }
    }

    #[test]
    fn test_empty_inputs_are_errors() {
        let (outcomes, paper) = standard_outcomes();
        assert!(matches!(
            draw_chart(&outcomes, &paper, 0),
            Err(ChartError::EmptySeries(_))
        ));
        assert!(matches!(
            draw_chart(&[], &paper, 30),
            Err(ChartError::EmptySeries(_))
        ));
    }

    #[test]
    fn test_overflowing_range_is_reported() {
        let (outcomes, paper) = standard_outcomes();
        assert!(matches!(
            draw_chart(&outcomes, &paper, 600),
            Err(ChartError::Model(_))
        ));
    }

    #[test]
    fn test_unwritable_path_fails_without_panicking() {
        let (outcomes, paper) = standard_outcomes();
        let path = Path::new("/nonexistent-dir/for/chart.png");
        assert!(matches!(
            render_chart(&outcomes, &paper, 30, path),
            Err(ChartError::Image(_))
        ));
    }
}
