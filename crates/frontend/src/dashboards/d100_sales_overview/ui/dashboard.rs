use contracts::dashboards::d100_sales_overview::{SalesOverviewRequest, SalesOverviewResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d100_sales_overview::api;
use crate::shared::components::charts::ChartView;
use crate::shared::components::kpi_card::KpiCardView;
use crate::shared::components::multi_select::MultiSelect;
use crate::shared::components::year_select::YearSelect;

/// Sales Overview Dashboard component.
///
/// Holds the whole interaction state: three filter inputs drive one
/// recompute request, and all seven outputs (KPI cards plus charts) are
/// republished together from the single response.
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    // Filter options, loaded once on mount
    let (channel_options, set_channel_options) = signal(Vec::<String>::new());
    let (product_options, set_product_options) = signal(Vec::<String>::new());
    let (year_options, set_year_options) = signal(Vec::<i32>::new());
    let (options_ready, set_options_ready) = signal(false);

    // Current selection; seeded with "everything" once the options arrive
    let (selected_channels, set_selected_channels) = signal(Vec::<String>::new());
    let (selected_products, set_selected_products) = signal(Vec::<String>::new());
    let (selected_year, set_selected_year) = signal(None::<i32>);

    // Data state
    let (data, set_data) = signal(None::<SalesOverviewResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Stale responses of superseded requests are dropped; only the latest
    // selection ever publishes
    let request_seq = StoredValue::new(0u64);

    // Load filter options on mount and seed the default selection
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_filter_options().await {
                Ok(options) => {
                    set_selected_channels.set(options.channels.clone());
                    set_selected_products.set(options.products.clone());
                    set_selected_year.set(options.default_year);
                    set_channel_options.set(options.channels);
                    set_product_options.set(options.products);
                    set_year_options.set(options.years);
                    set_options_ready.set(true);
                }
                Err(err) => {
                    log::error!("Failed to load filter options: {}", err);
                    set_error.set(Some(err));
                }
            }
        });
    });

    // Recompute on every selection change
    Effect::new(move |_| {
        if !options_ready.get() {
            return;
        }
        let request = SalesOverviewRequest {
            channels: selected_channels.get(),
            products: selected_products.get(),
            year: selected_year.get(),
        };
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        set_loading.set(true);

        spawn_local(async move {
            let result = api::compute_overview(&request).await;
            if request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(response) => {
                    set_data.set(Some(response));
                    set_error.set(None);
                    set_loading.set(false);
                }
                Err(err) => {
                    set_error.set(Some(err));
                    set_loading.set(false);
                }
            }
        });
    });

    view! {
        <div style="font-family:system-ui, 'Segoe UI', Roboto, Arial, sans-serif;padding:12px 18px;max-width:1100px;margin:0 auto;">
            <h1 style="margin-bottom:0;">"Sales Dashboard"</h1>
            <p style="margin-top:4px;color:#666;">"Interactive filters + KPIs + 6 charts"</p>

            // Filters
            <div style="display:grid;grid-template-columns:1fr 2fr 0.6fr;gap:12px;margin:8px 0 14px;">
                <MultiSelect
                    label="Channel".to_string()
                    options=channel_options
                    selected=selected_channels
                    on_change=Callback::new(move |channels| set_selected_channels.set(channels))
                />
                <MultiSelect
                    label="Product".to_string()
                    options=product_options
                    selected=selected_products
                    on_change=Callback::new(move |products| set_selected_products.set(products))
                />
                <YearSelect
                    label="Year".to_string()
                    years=year_options
                    selected=selected_year
                    on_change=Callback::new(move |year| set_selected_year.set(Some(year)))
                />
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div style="color:#666;font-size:0.875rem;margin:6px 0;">
                            "Recomputing..."
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div style="background:#fdecea;color:#b71c1c;border-radius:8px;padding:10px 14px;margin:6px 0;">
                            <strong>"Error: "</strong>
                            {err}
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                data.get().map(|response| {
                    view! {
                        // KPI cards
                        <div style="display:grid;grid-template-columns:1fr 1fr 1fr;gap:16px;margin:6px 0 18px;">
                            {response
                                .kpis
                                .into_iter()
                                .map(|card| view! { <KpiCardView card=card /> })
                                .collect_view()}
                        </div>
                        // Charts
                        <div>
                            {response
                                .charts
                                .into_iter()
                                .map(|spec| view! { <ChartView spec=spec /> })
                                .collect_view()}
                        </div>
                    }
                })
            }}
        </div>
    }
}
