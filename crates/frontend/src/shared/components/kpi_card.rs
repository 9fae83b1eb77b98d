use contracts::dashboards::d100_sales_overview::KpiCard;
use leptos::prelude::*;

/// One KPI card: title on top, the preformatted value below.
#[component]
pub fn KpiCardView(card: KpiCard) -> impl IntoView {
    view! {
        <div style="background:#f6f6f6;padding:14px;border-radius:12px;text-align:center;box-shadow:0 1px 2px rgba(0,0,0,0.05);">
            <div style="font-size:12px;color:#666;margin-bottom:4px;">{card.title}</div>
            <div style="font-size:26px;font-weight:700;">{card.value}</div>
        </div>
    }
}
