use contracts::dashboards::d100_sales_overview::{ChartKind, ChartSpec};
use leptos::prelude::*;

use super::bar_chart::BarChart;
use super::line_chart::LineChart;

/// Renders one declarative chart spec inside a titled card. A spec without
/// data shows a centered annotation under the same title, so the dashboard
/// keeps its shape for all-excluding selections.
#[component]
pub fn ChartView(spec: ChartSpec) -> impl IntoView {
    let ChartSpec {
        kind,
        title,
        x_label,
        y_label,
        data,
        ..
    } = spec;

    let body = match data {
        None => view! {
            <div style="display:flex;align-items:center;justify-content:center;height:280px;color:gray;font-size:14px;">
                "No data for the selected filters"
            </div>
        }
        .into_any(),
        Some(data) => {
            let figure = match kind {
                ChartKind::Line => view! { <LineChart data=data /> }.into_any(),
                ChartKind::Histogram => view! { <BarChart data=data dense=true /> }.into_any(),
                ChartKind::Bar => view! { <BarChart data=data /> }.into_any(),
            };
            view! {
                <div style="display:flex;align-items:stretch;gap:4px;">
                    <div style="writing-mode:vertical-rl;transform:rotate(180deg);display:flex;align-items:center;color:#999;font-size:11px;">
                        {y_label}
                    </div>
                    <div style="flex:1;min-width:0;">
                        {figure}
                        <div style="text-align:center;color:#999;font-size:11px;margin-top:2px;">
                            {x_label}
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div style="background:#fff;border:1px solid #ececec;border-radius:12px;padding:14px 18px;margin-bottom:18px;box-shadow:0 1px 2px rgba(0,0,0,0.05);">
            <h3 style="margin:0 0 10px 0;font-size:1.05rem;color:#333;">{title}</h3>
            {body}
        </div>
    }
}
