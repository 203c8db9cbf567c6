//! Chart figures for the dashboard.
//!
//! A figure is the plain data behind one chart: labels, weights, colors and
//! a title. Figures are built here from already-loaded values, serialized as
//! JSON for the dashboard's update endpoints, and drawn by [`svg`].

pub mod svg;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Qualitative palette used for both charts, in assignment order.
pub const PALETTE: &[&str] = &[
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

pub const PROJECTS_TITLE: &str = "Project Success Rates (1 year after completion)";

pub const FULFILLED: &str = "Fulfilled";
pub const IN_PROGRESS: &str = "In Progress";
pub const DONT_CARE: &str = "Don't Care";

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// The three promise sub-counts shown on the pie chart.
///
/// `promises_made` is not charted; the sub-counts need not add up to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromiseCounts {
    pub fulfilled: i64,
    pub in_progress: i64,
    pub dont_care: i64,
}

/// One project as seen by the bar chart.
#[derive(Debug, Clone, Copy)]
pub struct ProjectOutcome<'a> {
    pub name: &'a str,
    pub status: &'a str,
    pub success_rate: f64,
}

// ---------------------------------------------------------------------------
// Figures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    /// Raw count as stored.
    pub value: i64,
    /// Share of the pie in `[0, 1]`. Negative counts carry no weight.
    pub fraction: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    /// Sum of the raw slice counts, widened so stored extremes cannot
    /// overflow.
    pub fn total(&self) -> i128 {
        self.slices.iter().map(|s| i128::from(s.value)).sum()
    }

    /// True when no slice has positive weight, so there is nothing to draw.
    pub fn is_blank(&self) -> bool {
        self.slices.iter().all(|s| s.fraction == 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Status label the bar is grouped and colored by.
    pub group: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub group: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
    pub legend: Vec<LegendEntry>,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Hands out palette colors to group labels in first-appearance order,
/// cycling once the palette is exhausted.
#[derive(Debug, Default)]
pub struct ColorAssigner {
    assigned: Vec<(String, &'static str)>,
}

impl ColorAssigner {
    pub fn color_for(&mut self, group: &str) -> &'static str {
        if let Some(color) = self
            .assigned
            .iter()
            .find(|(g, _)| g == group)
            .map(|(_, c)| *c)
        {
            return color;
        }
        let color = PALETTE[self.assigned.len() % PALETTE.len()];
        self.assigned.push((group.to_string(), color));
        color
    }

    pub fn into_legend(self) -> Vec<LegendEntry> {
        self.assigned
            .into_iter()
            .map(|(group, color)| LegendEntry {
                group,
                color: color.to_string(),
            })
            .collect()
    }
}

/// Build the promise-fulfillment pie for one politician.
///
/// Slices are always Fulfilled, In Progress, Don't Care in that order, each
/// weighted by its raw count.
pub fn promises_figure(politician_name: &str, counts: PromiseCounts) -> PieFigure {
    let raw = [
        (FULFILLED, counts.fulfilled),
        (IN_PROGRESS, counts.in_progress),
        (DONT_CARE, counts.dont_care),
    ];
    let weight_total: i128 = raw.iter().map(|(_, v)| i128::from((*v).max(0))).sum();

    let slices = raw
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let fraction = if weight_total > 0 {
                (*value).max(0) as f64 / weight_total as f64
            } else {
                0.0
            };
            PieSlice {
                label: (*label).to_string(),
                value: *value,
                fraction,
                color: PALETTE[i].to_string(),
            }
        })
        .collect();

    PieFigure {
        title: format!("Promises by {politician_name}"),
        slices,
    }
}

/// Build the project success-rate bar chart: one bar per project, in the
/// order given, colored by status.
pub fn projects_figure<'a, I>(projects: I) -> BarFigure
where
    I: IntoIterator<Item = ProjectOutcome<'a>>,
{
    let mut colors = ColorAssigner::default();
    let bars = projects
        .into_iter()
        .map(|p| Bar {
            label: p.name.to_string(),
            value: p.success_rate,
            group: p.status.to_string(),
            color: colors.color_for(p.status).to_string(),
        })
        .collect();

    BarFigure {
        title: PROJECTS_TITLE.to_string(),
        x_label: "Project".to_string(),
        y_label: "Success Rate".to_string(),
        bars,
        legend: colors.into_legend(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
