use leptos::prelude::*;

/// Single-select dropdown for the year filter.
#[component]
pub fn YearSelect(
    /// Label above the control
    label: String,
    /// Selectable years, ascending
    #[prop(into)]
    years: Signal<Vec<i32>>,
    /// Currently selected year
    #[prop(into)]
    selected: Signal<Option<i32>>,
    /// Change event handler
    on_change: Callback<i32>,
) -> impl IntoView {
    view! {
        <div>
            <label style="display:block;margin-bottom:4px;font-size:0.875rem;color:#666;">
                {label}
            </label>
            <select
                style="width:100%;padding:8px;border:1px solid #ced4da;border-radius:4px;font-size:0.875rem;background:#fff;"
                on:change=move |ev| {
                    if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                        on_change.run(year);
                    }
                }
            >
                <For
                    each=move || years.get()
                    key=|year| *year
                    children=move |year| {
                        let is_selected = move || selected.get() == Some(year);
                        view! {
                            <option value=year.to_string() selected=is_selected>
                                {year.to_string()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
