use contracts::dashboards::d100_sales_overview::ChartData;
use leptos::prelude::*;

use super::scale::{format_tick, label_stride, linear, nice_max, ticks, truncate_label};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 52.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 42.0;

/// Category bar chart. `dense` removes the inter-bar gaps (histogram mode).
/// A point without a value keeps its axis slot but draws no bar.
#[component]
pub fn BarChart(data: ChartData, #[prop(optional)] dense: bool) -> impl IntoView {
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
    let baseline = to_y(0.0);

    let slot = plot_w / n as f64;
    let gap = if dense { 1.0 } else { (slot * 0.25).min(16.0) };

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

    let bars = points
        .iter()
        .enumerate()
        .filter_map(|(i, point)| {
            let value = point.y?;
            let x = MARGIN_LEFT + i as f64 * slot + gap / 2.0;
            let width = (slot - gap).max(1.0);
            let scaled = to_y(value);
            let top = scaled.min(baseline);
            let height = (scaled - baseline).abs().max(0.5);
            let tooltip = format!("{}: {}", point.x, format_tick(value));
            Some(view! {
                <rect
                    x=format!("{x:.1}")
                    y=format!("{top:.1}")
                    width=format!("{width:.1}")
                    height=format!("{height:.1}")
                    fill="#636efa"
                    rx="2"
                >
                    <title>{tooltip}</title>
                </rect>
            })
        })
        .collect_view();

    let stride = label_stride(points.len(), 12);
    let labels = points
        .iter()
        .enumerate()
        .filter(|(i, _)| i % stride == 0)
        .map(|(i, point)| {
            let x = MARGIN_LEFT + i as f64 * slot + slot / 2.0;
            view! {
                <text
                    x=format!("{x:.1}")
                    y=(HEIGHT - MARGIN_BOTTOM + 16.0).to_string()
                    text-anchor="middle"
                    font-size="10"
                    fill="#555"
                >
                    {truncate_label(&point.x, 12)}
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
            {bars}
            <line
                x1=MARGIN_LEFT.to_string()
                y1=format!("{baseline:.1}")
                x2=(WIDTH - MARGIN_RIGHT).to_string()
                y2=format!("{baseline:.1}")
                stroke="#bbb"
                stroke-width="1"
            />
            {labels}
        </svg>
    }
}
