// web_app/components/filters.rs - Catalog filter controls
//
// - PriceRangeFilter: range input plus its "$0 - $N" label
// - CatalogFilters: category, material, price and page-size controls
//
// The controls only report raw values; parsing and state transitions
// happen in the catalog page.

use leptos::prelude::*;

use super::common::SelectControl;
use crate::web_app::config::PriceRangeConfig;
use crate::web_app::view_model::SelectOption;

/// Price ceiling range input
#[component]
pub fn PriceRangeFilter(
    /// Bounds of the range input
    range: PriceRangeConfig,
    /// Raw control value
    value: RwSignal<String>,
    /// Label shown next to the input
    #[prop(into)]
    label: Signal<String>,
    /// Called with the raw value on every input event
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="mb-3">
            <label for="priceRange" class="form-label">"Price"</label>
            <input
                type="range"
                id="priceRange"
                class="form-range"
                min=range.min.to_string()
                max=range.max.to_string()
                step=range.step.to_string()
                prop:value=move || value.get()
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    value.set(raw.clone());
                    on_input.run(raw);
                }
            />
            <span id="priceRangeValue">{move || label.get()}</span>
        </div>
    }
}

/// Filter sidebar for the catalog section
#[component]
pub fn CatalogFilters(
    #[prop(into)] category_options: Signal<Vec<SelectOption>>,
    category: RwSignal<String>,
    on_category: Callback<String>,
    #[prop(into)] material_options: Signal<Vec<SelectOption>>,
    material: RwSignal<String>,
    on_material: Callback<String>,
    price_range: PriceRangeConfig,
    price: RwSignal<String>,
    #[prop(into)] price_label: Signal<String>,
    on_price: Callback<String>,
    page_size_options: Vec<SelectOption>,
    page_size: RwSignal<String>,
    on_page_size: Callback<String>,
) -> impl IntoView {
    view! {
        <aside class="catalog-filters">
            <SelectControl
                id="categories"
                label="Category"
                options=category_options
                value=category
                on_change=on_category
            />
            <SelectControl
                id="materials"
                label="Material"
                options=material_options
                value=material
                on_change=on_material
            />
            <PriceRangeFilter
                range=price_range
                value=price
                label=price_label
                on_input=on_price
            />
            <SelectControl
                id="pageSize"
                label="Per page"
                options=Signal::derive(move || page_size_options.clone())
                value=page_size
                on_change=on_page_size
            />
        </aside>
    }
}
