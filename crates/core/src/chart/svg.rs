//! Server-side SVG rendering of dashboard figures.
//!
//! Output is a standalone `<svg>` element that can be inlined into a page or
//! swapped in by the dashboard script. All labels go through
//! [`crate::html::escape`].

use std::f64::consts::PI;
use std::fmt::Write;

use super::{BarFigure, PieFigure};
use crate::html::escape;

const PIE_WIDTH: f64 = 520.0;
const PIE_HEIGHT: f64 = 360.0;
const PIE_RADIUS: f64 = 130.0;
const PIE_CX: f64 = 190.0;
const PIE_CY: f64 = 200.0;

const BAR_WIDTH: f64 = 720.0;
const BAR_HEIGHT: f64 = 420.0;
const BAR_MARGIN_LEFT: f64 = 70.0;
const BAR_MARGIN_RIGHT: f64 = 170.0;
const BAR_MARGIN_TOP: f64 = 60.0;
const BAR_MARGIN_BOTTOM: f64 = 80.0;

const FONT: &str = "font-family=\"sans-serif\"";

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

/// Render a pie chart with a legend on the right. Slices start at twelve
/// o'clock and run clockwise.
pub fn render_pie(figure: &PieFigure) -> String {
    let mut out = open_svg(PIE_WIDTH, PIE_HEIGHT, "promises-chart");
    title(&mut out, &figure.title, PIE_WIDTH);

    if figure.is_blank() {
        note(&mut out, "No promises recorded", PIE_CX, PIE_CY);
    } else {
        let mut start = -PI / 2.0;
        for slice in figure.slices.iter().filter(|s| s.fraction > 0.0) {
            let sweep = slice.fraction * 2.0 * PI;
            let color = escape(&slice.color);
            if slice.fraction >= 1.0 {
                let _ = write!(
                    out,
                    r#"<circle cx="{PIE_CX}" cy="{PIE_CY}" r="{PIE_RADIUS}" fill="{color}" stroke="white"/>"#
                );
            } else {
                let end = start + sweep;
                let (x1, y1) = polar(start, PIE_RADIUS);
                let (x2, y2) = polar(end, PIE_RADIUS);
                let large = u8::from(sweep > PI);
                let _ = write!(
                    out,
                    r#"<path d="M {PIE_CX} {PIE_CY} L {x1:.2} {y1:.2} A {PIE_RADIUS} {PIE_RADIUS} 0 {large} 1 {x2:.2} {y2:.2} Z" fill="{color}" stroke="white"/>"#
                );
            }

            let (lx, ly) = polar(start + sweep / 2.0, PIE_RADIUS * 0.62);
            let _ = write!(
                out,
                r#"<text x="{lx:.2}" y="{ly:.2}" text-anchor="middle" dominant-baseline="middle" font-size="13" fill="white" {FONT}>{:.1}%</text>"#,
                slice.fraction * 100.0
            );
            start += sweep;
        }
    }

    let legend_x = PIE_CX + PIE_RADIUS + 40.0;
    for (i, slice) in figure.slices.iter().enumerate() {
        let y = PIE_CY - 40.0 + i as f64 * 24.0;
        legend_row(
            &mut out,
            legend_x,
            y,
            &slice.color,
            &format!("{} ({})", slice.label, slice.value),
        );
    }

    out.push_str("</svg>");
    out
}

fn polar(angle: f64, radius: f64) -> (f64, f64) {
    (PIE_CX + radius * angle.cos(), PIE_CY + radius * angle.sin())
}

// ---------------------------------------------------------------------------
// Bar
// ---------------------------------------------------------------------------

/// Render a vertical bar chart with a value axis, one category per bar and a
/// legend of the color groups.
pub fn render_bar(figure: &BarFigure) -> String {
    let mut out = open_svg(BAR_WIDTH, BAR_HEIGHT, "projects-chart");
    title(&mut out, &figure.title, BAR_WIDTH);

    let plot_w = BAR_WIDTH - BAR_MARGIN_LEFT - BAR_MARGIN_RIGHT;
    let plot_h = BAR_HEIGHT - BAR_MARGIN_TOP - BAR_MARGIN_BOTTOM;
    let bottom = BAR_MARGIN_TOP + plot_h;

    let axis = ValueAxis::fit(figure.bars.iter().map(|b| b.value));
    let to_y = |v: f64| bottom - axis.position(v) * plot_h;

    // Grid and tick labels.
    for tick in axis.ticks() {
        let y = to_y(tick);
        let _ = write!(
            out,
            r##"<line x1="{BAR_MARGIN_LEFT}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="#e5e5e5"/>"##,
            BAR_MARGIN_LEFT + plot_w
        );
        let _ = write!(
            out,
            r#"<text x="{:.2}" y="{y:.2}" text-anchor="end" dominant-baseline="middle" font-size="11" {FONT}>{}</text>"#,
            BAR_MARGIN_LEFT - 6.0,
            format_tick(tick)
        );
    }

    // Bars.
    if !figure.bars.is_empty() {
        let band = plot_w / figure.bars.len() as f64;
        let zero_y = to_y(0.0);
        for (i, bar) in figure.bars.iter().enumerate() {
            let x = BAR_MARGIN_LEFT + i as f64 * band + band * 0.1;
            let value_y = to_y(bar.value);
            let (top, height) = if value_y <= zero_y {
                (value_y, zero_y - value_y)
            } else {
                (zero_y, value_y - zero_y)
            };
            let _ = write!(
                out,
                r#"<rect x="{x:.2}" y="{top:.2}" width="{:.2}" height="{height:.2}" fill="{}"><title>{}: {}</title></rect>"#,
                band * 0.8,
                escape(&bar.color),
                escape(&bar.label),
                bar.value
            );
            let _ = write!(
                out,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="11" {FONT}>{}</text>"#,
                x + band * 0.4,
                bottom + 16.0,
                escape(&bar.label)
            );
        }
    }

    // Axes and axis titles.
    let _ = write!(
        out,
        r#"<line x1="{BAR_MARGIN_LEFT}" y1="{BAR_MARGIN_TOP}" x2="{BAR_MARGIN_LEFT}" y2="{bottom}" stroke="black"/>"#
    );
    let _ = write!(
        out,
        r#"<line x1="{BAR_MARGIN_LEFT}" y1="{bottom}" x2="{:.2}" y2="{bottom}" stroke="black"/>"#,
        BAR_MARGIN_LEFT + plot_w
    );
    let _ = write!(
        out,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="13" {FONT}>{}</text>"#,
        BAR_MARGIN_LEFT + plot_w / 2.0,
        BAR_HEIGHT - 20.0,
        escape(&figure.x_label)
    );
    let _ = write!(
        out,
        r#"<text transform="translate(18 {:.2}) rotate(-90)" text-anchor="middle" font-size="13" {FONT}>{}</text>"#,
        BAR_MARGIN_TOP + plot_h / 2.0,
        escape(&figure.y_label)
    );

    let legend_x = BAR_MARGIN_LEFT + plot_w + 24.0;
    if !figure.legend.is_empty() {
        let _ = write!(
            out,
            r#"<text x="{legend_x}" y="{BAR_MARGIN_TOP}" font-size="13" font-weight="bold" {FONT}>Status</text>"#
        );
    }
    for (i, entry) in figure.legend.iter().enumerate() {
        let y = BAR_MARGIN_TOP + 24.0 + i as f64 * 24.0;
        legend_row(&mut out, legend_x, y, &entry.color, &entry.group);
    }

    out.push_str("</svg>");
    out
}

/// Upper bound on the number of gridlines drawn on a value axis.
const MAX_TICKS: usize = 50;

/// Linear value axis spanning zero and every plotted value, widened to
/// whole multiples of a "nice" tick step where that stays finite.
///
/// Values may be anywhere in the finite `f64` range, so spans are computed
/// from halved bounds and never as `hi - lo` directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueAxis {
    pub lo: f64,
    pub hi: f64,
    pub step: f64,
}

impl ValueAxis {
    pub fn fit<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let (mut lo, mut hi) = (0.0_f64, 0.0_f64);
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        // lo <= 0 <= hi, so a flat range only happens near zero.
        if hi - lo <= f64::EPSILON {
            hi = lo + 1.0;
        }
        let step = nice_step(hi / 5.0 - lo / 5.0);
        let round_out = |bound: f64, rounded: f64| if rounded.is_finite() { rounded } else { bound };
        Self {
            lo: round_out(lo, (lo / step).floor() * step),
            hi: round_out(hi, (hi / step).ceil() * step),
            step,
        }
    }

    /// Position of `value` along the axis, 0.0 at `lo` and 1.0 at `hi`.
    pub fn position(&self, value: f64) -> f64 {
        (value / 2.0 - self.lo / 2.0) / (self.hi / 2.0 - self.lo / 2.0)
    }

    /// Gridline values: every multiple of `step` inside `[lo, hi]`, at most
    /// [`MAX_TICKS`] of them.
    pub fn ticks(&self) -> Vec<f64> {
        let first = (self.lo / self.step).ceil();
        let last = (self.hi / self.step).floor();
        if !(first.is_finite() && last.is_finite()) || last < first {
            return vec![self.lo, self.hi];
        }
        let count = ((last - first) as usize).min(MAX_TICKS - 1);
        (0..=count)
            .map(|i| (first + i as f64) * self.step)
            .filter(|t| t.is_finite())
            .collect()
    }
}

/// Round `raw` up to 1, 2 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 1e15 {
        return format!("{value:e}");
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{rounded:.3}");
        s.trim_end_matches('0').to_string()
    }
}

// ---------------------------------------------------------------------------
// Placeholder and shared pieces
// ---------------------------------------------------------------------------

/// Render an empty chart area carrying a short message. Used when there is
/// nothing to plot, e.g. no politician is selected.
pub fn render_placeholder(message: &str) -> String {
    let mut out = open_svg(PIE_WIDTH, PIE_HEIGHT, "placeholder-chart");
    let _ = write!(
        out,
        r##"<rect x="1" y="1" width="{:.0}" height="{:.0}" fill="#fafafa" stroke="#dddddd"/>"##,
        PIE_WIDTH - 2.0,
        PIE_HEIGHT - 2.0
    );
    note(&mut out, message, PIE_WIDTH / 2.0, PIE_HEIGHT / 2.0);
    out.push_str("</svg>");
    out
}

fn open_svg(width: f64, height: f64, class: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="{class}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )
}

fn title(out: &mut String, text: &str, width: f64) {
    let _ = write!(
        out,
        r#"<text x="{:.1}" y="28" text-anchor="middle" font-size="17" {FONT}>{}</text>"#,
        width / 2.0,
        escape(text)
    );
}

fn note(out: &mut String, text: &str, x: f64, y: f64) {
    let _ = write!(
        out,
        r##"<text x="{x}" y="{y}" text-anchor="middle" font-size="14" fill="#888888" {FONT}>{}</text>"##,
        escape(text)
    );
}

fn legend_row(out: &mut String, x: f64, y: f64, color: &str, label: &str) {
    let _ = write!(
        out,
        r#"<rect x="{x}" y="{:.2}" width="12" height="12" fill="{}"/><text x="{:.2}" y="{y:.2}" font-size="12" {FONT}>{}</text>"#,
        y - 10.0,
        escape(color),
        x + 18.0,
        escape(label)
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
