use leptos::prelude::*;

/// Multi-select dropdown backed by a checkbox list, with all/none shortcuts.
/// Clearing every option is a legal state; the dashboard renders it as
/// "no data" rather than treating it as "all".
#[component]
pub fn MultiSelect(
    /// Label above the control
    label: String,
    /// Selectable values, in canonical order
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Currently selected values
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Called with the full new selection on every toggle
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    let summary = move || {
        let total = options.get().len();
        let picked = selected.get().len();
        if total > 0 && picked == total {
            "All".to_string()
        } else {
            format!("{} of {}", picked, total)
        }
    };

    let toggle = move |value: String| {
        let mut current = selected.get();
        if let Some(pos) = current.iter().position(|v| v == &value) {
            current.remove(pos);
        } else {
            current.push(value);
            // Keep the canonical option order so selections compare stably
            let order = options.get();
            current.sort_by_key(|v| order.iter().position(|o| o == v));
        }
        on_change.run(current);
    };

    let button_style = "width:100%;display:flex;justify-content:space-between;align-items:center;gap:8px;padding:8px 10px;border:1px solid #ced4da;border-radius:4px;background:#fff;color:#495057;font-size:0.875rem;cursor:pointer;";

    view! {
        <div style="position:relative;">
            <label style="display:block;margin-bottom:4px;font-size:0.875rem;color:#666;">
                {label}
            </label>
            <button on:click=move |_| set_open.update(|o| *o = !*o) style=button_style>
                <span>{summary}</span>
                <span>"▾"</span>
            </button>

            {move || {
                if open.get() {
                    view! {
                        <div style="position:absolute;top:100%;left:0;right:0;z-index:100;background:#fff;border:1px solid #ced4da;border-radius:4px;box-shadow:0 4px 12px rgba(0,0,0,0.15);margin-top:4px;max-height:260px;overflow-y:auto;padding:6px;">
                            <div style="display:flex;gap:6px;margin-bottom:6px;">
                                <button
                                    on:click=move |_| on_change.run(options.get())
                                    style="flex:1;padding:4px;border:1px solid #ced4da;border-radius:4px;background:#fff;font-size:0.75rem;cursor:pointer;"
                                >
                                    "All"
                                </button>
                                <button
                                    on:click=move |_| on_change.run(Vec::new())
                                    style="flex:1;padding:4px;border:1px solid #ced4da;border-radius:4px;background:#fff;font-size:0.75rem;cursor:pointer;"
                                >
                                    "None"
                                </button>
                            </div>
                            <For
                                each=move || options.get()
                                key=|option| option.clone()
                                children=move |option| {
                                    let check_value = option.clone();
                                    let toggle_value = option.clone();
                                    let checked = move || selected.get().contains(&check_value);
                                    view! {
                                        <label style="display:flex;align-items:center;gap:6px;padding:3px 4px;font-size:0.875rem;cursor:pointer;">
                                            <input
                                                type="checkbox"
                                                checked=checked
                                                on:change=move |_| toggle(toggle_value.clone())
                                            />
                                            <span>{option}</span>
                                        </label>
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
