// web_app/components/common.rs - Reusable UI components
//
// Small stateless building blocks that receive all data via props.

use leptos::prelude::*;

use crate::web_app::view_model::SelectOption;

/// Labelled select dropdown
///
/// Renders whatever `options` currently holds. Until options arrive the
/// select stays empty.
#[component]
pub fn SelectControl(
    /// Element id the markup and styles refer to
    id: &'static str,
    /// Label text
    label: &'static str,
    /// Available options
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Currently selected value
    value: RwSignal<String>,
    /// Called with the new value after every change
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label for=id class="form-label">{label}</label>
            <select
                id=id
                class="form-select"
                on:change=move |ev| {
                    let new_value = event_target_value(&ev);
                    value.set(new_value.clone());
                    on_change.run(new_value);
                }
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let option_value = option.value.clone();
                            view! {
                                <option
                                    value=option.value
                                    selected=move || value.get() == option_value
                                >
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Results header ("N products found")
#[component]
pub fn ResultsSummary(
    /// Text to show; nothing is rendered while `None`
    #[prop(into)]
    summary: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || summary.get().map(|text| view! {
            <p class="text-muted results-summary">{text}</p>
        })}
    }
}
