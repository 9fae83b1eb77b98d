use contracts::dashboards::d100_sales_overview::ChartData;
use leptos::prelude::*;

use super::scale::{format_tick, label_stride, linear, nice_max, ticks, truncate_label};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 42.0;

/// Time-series line chart with point markers. Points without a value split
/// the line into separate segments instead of plotting zero.
#[component]
pub fn LineChart(data: ChartData) -> impl IntoView {
    let points = data.points;
    let n = points.len().max(1);
    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let y_max = nice_max(
        points
            .iter()
            .filter_map(|p| p.y)
            .fold(0.0f64, f64::max),
    );
    let y_min = points
        .iter()
        .filter_map(|p| p.y)
        .fold(0.0f64, f64::min);
    let to_y = |v: f64| linear(v, (y_min, y_max), (MARGIN_TOP + plot_h, MARGIN_TOP));

    let slot = plot_w / n as f64;
    let to_x = |i: usize| MARGIN_LEFT + (i as f64 + 0.5) * slot;

    // Consecutive runs of present values become polyline segments
    let mut segments: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for (i, point) in points.iter().enumerate() {
        match point.y {
            Some(value) => current.push((to_x(i), to_y(value))),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    let grid = ticks(y_min, y_max, 5)
        .into_iter()
        .map(|tick| {
            let y = to_y(tick);
            view! {
                <g>
                    <line
                        x1=MARGIN_LEFT.to_string()
                        y1=format!("{y:.1}")
                        x2=(WIDTH - MARGIN_RIGHT).to_string()
                        y2=format!("{y:.1}")
                        stroke="#e5e5e5"
                        stroke-width="1"
                    />
                    <text
                        x=(MARGIN_LEFT - 6.0).to_string()
                        y=format!("{:.1}", y + 3.0)
                        text-anchor="end"
                        font-size="10"
                        fill="#888"
                    >
                        {format_tick(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let lines = segments
        .iter()
        .map(|segment| {
            let path = segment
                .iter()
                .map(|(x, y)| format!("{x:.1},{y:.1}"))
                .collect::<Vec<_>>()
                .join(" ");
            view! {
                <polyline points=path fill="none" stroke="#636efa" stroke-width="2" />
            }
        })
        .collect_view();

    let markers = points
        .iter()
        .enumerate()
        .filter_map(|(i, point)| {
            let value = point.y?;
            let tooltip = format!("{}: {}", point.x, format_tick(value));
            Some(view! {
                <circle
                    cx=format!("{:.1}", to_x(i))
                    cy=format!("{:.1}", to_y(value))
                    r="3"
                    fill="#636efa"
                >
                    <title>{tooltip}</title>
                </circle>
            })
        })
        .collect_view();

    let stride = label_stride(points.len(), 10);
    let labels = points
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(i, point)| {
            view! {
                <text
                    x=format!("{:.1}", to_x(i))
                    y=(HEIGHT - MARGIN_BOTTOM + 16.0).to_string()
                    text-anchor="middle"
                    font-size="10"
                    fill="#555"
                >
                    {truncate_label(&point.x, 10)}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg
            viewBox=format!("0 0 {WIDTH} {HEIGHT}")
            width="100%"
            preserveAspectRatio="xMidYMid meet"
        >
            {grid}
            {lines}
            {markers}
            {labels}
        </svg>
    }
}
