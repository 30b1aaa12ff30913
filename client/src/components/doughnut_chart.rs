//! SVG doughnut chart with a count legend.
//!
//! DESIGN
//! ======
//! The ring is a circle of circumference 100 drawn once per segment with a
//! stroke dash covering the segment's share. Dash offsets start at 12
//! o'clock and run clockwise.

#[cfg(test)]
#[path = "doughnut_chart_test.rs"]
mod doughnut_chart_test;

use leptos::prelude::*;

/// Radius giving a circumference of exactly 100 user units.
const RING_RADIUS: &str = "15.91549430918954";
/// Quarter turn, so the first segment starts at the top.
const START_OFFSET: f64 = 25.0;

const PALETTE: [&str; 8] = ["#4f46e5", "#0ea5e9", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#64748b"];

/// One arc of the ring.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: usize,
    /// Share of the total in `0.0..=1.0`.
    pub fraction: f64,
    /// Sum of the fractions of all preceding segments.
    pub offset: f64,
    pub color: &'static str,
}

impl Segment {
    pub fn dasharray(&self) -> String {
        let length = self.fraction * 100.0;
        format!("{length:.3} {:.3}", 100.0 - length)
    }

    pub fn dashoffset(&self) -> String {
        format!("{:.3}", START_OFFSET - self.offset * 100.0)
    }
}

/// Build ring segments from parallel label/value series.
///
/// Zero-valued entries are skipped. Returns nothing when the total is zero.
pub fn doughnut_segments(labels: &[String], values: &[usize]) -> Vec<Segment> {
    let total: usize = values.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut offset = 0.0;
    let mut segments = Vec::new();
    for (index, (label, &value)) in labels.iter().zip(values).enumerate() {
        if value == 0 {
            continue;
        }
        let fraction = ratio(value, total);
        segments.push(Segment {
            label: label.clone(),
            value,
            fraction,
            offset,
            color: PALETTE[index % PALETTE.len()],
        });
        offset += fraction;
    }
    segments
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, total: usize) -> f64 {
    part as f64 / total as f64
}

#[component]
pub fn DoughnutChart(labels: Vec<String>, values: Vec<usize>) -> impl IntoView {
    let segments = doughnut_segments(&labels, &values);
    let total: usize = segments.iter().map(|s| s.value).sum();

    if segments.is_empty() {
        return view! {
            <div class="doughnut doughnut--empty">
                <svg class="doughnut__ring" viewBox="0 0 42 42" aria-hidden="true">
                    <circle class="doughnut__track" cx="21" cy="21" r=RING_RADIUS fill="transparent" stroke-width="6"></circle>
                </svg>
                <p class="doughnut__empty">"Gösterilecek veri yok."</p>
            </div>
        }
        .into_any();
    }

    let legend = segments
        .iter()
        .map(|segment| {
            view! {
                <li class="doughnut__legend-item">
                    <span class="doughnut__swatch" style=format!("background-color: {}", segment.color)></span>
                    <span class="doughnut__legend-label">{segment.label.clone()}</span>
                    <span class="doughnut__legend-count">{segment.value}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let arcs = segments
        .into_iter()
        .map(|segment| {
            view! {
                <circle
                    class="doughnut__segment"
                    cx="21"
                    cy="21"
                    r=RING_RADIUS
                    fill="transparent"
                    stroke=segment.color
                    stroke-width="6"
                    stroke-dasharray=segment.dasharray()
                    stroke-dashoffset=segment.dashoffset()
                ></circle>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="doughnut">
            <svg class="doughnut__ring" viewBox="0 0 42 42" role="img" aria-label="Kategori dağılımı">
                <circle class="doughnut__track" cx="21" cy="21" r=RING_RADIUS fill="transparent" stroke-width="6"></circle>
                {arcs}
                <text class="doughnut__total" x="21" y="21" text-anchor="middle" dominant-baseline="central">
                    {total}
                </text>
            </svg>
            <ul class="doughnut__legend">{legend}</ul>
        </div>
    }
    .into_any()
}
