// web_app/pages/catalog.rs - Catalog page component
//
// Owns the filter session and the rendered catalog data. Control events
// produce the next FilterState and run a filter pass against a freshly
// fetched product collection. Passes may finish out of order; the session
// only lets the latest one through.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::{loader, HttpSource};
use crate::web_app::components::*;
use crate::web_app::config::CatalogConfig;
use crate::web_app::engine::{page_count, parse_page_size, FilterSession, FilterState};
use crate::web_app::model::{PriceCeiling, Product, Selection, ALL};
use crate::web_app::view_model::{
    category_options, material_options, page_size_options, pagination_links, price_range_label,
    results_summary, PageLink, SelectOption,
};

/// Catalog section: filters, product grid and pagination
///
/// Every change of `load_requests` (after the first render) reloads the
/// categories and products and runs a fresh filter pass from page 1.
#[component]
pub fn CatalogPage(
    /// Where the documents come from
    source: StoredValue<HttpSource>,
    config: CatalogConfig,
    /// Bumped by navigation each time the section is activated
    #[prop(into)]
    load_requests: Signal<u32>,
) -> impl IntoView {
    let initial = FilterState::new(&config);
    let ceiling = RwSignal::new(initial.price_ceiling());
    let session = StoredValue::new(FilterSession::new(initial));
    let current = move || session.with_value(|session| session.state().clone());

    // Raw control values
    let category = RwSignal::new(ALL.to_string());
    let material = RwSignal::new(ALL.to_string());
    let price = RwSignal::new(config.price_range.default_ceiling.to_string());
    let page_size = RwSignal::new(config.default_page_size.to_string());

    // Rendered data; empty until the first successful load
    let category_choices = RwSignal::new(Vec::<SelectOption>::new());
    let material_choices = RwSignal::new(Vec::<SelectOption>::new());
    let visible = RwSignal::new(Vec::<Product>::new());
    let links = RwSignal::new(Vec::<PageLink>::new());
    let summary = RwSignal::new(None::<String>);

    let price_label = Signal::derive(move || price_range_label(ceiling.get()));

    let refilter = move |next: FilterState| {
        ceiling.set(next.price_ceiling());
        let mut generation = 0;
        session.update_value(|session| generation = session.begin(next.clone()));
        let source = source.get_value();
        spawn_local(async move {
            // Failures are already logged by the loader
            let Ok(outcome) = loader::filter_products(&source, next).await else {
                return;
            };
            let mut shown = None;
            session.update_value(|session| shown = session.complete(generation, outcome));
            if let Some(page) = shown {
                links.set(pagination_links(page.page_count, page.number));
                summary.set(Some(results_summary(page.total)));
                visible.set(page.items);
            }
        });
    };

    let on_category = Callback::new(move |value: String| {
        refilter(current().with_category(Selection::from_control(&value)));
    });

    let on_material = Callback::new(move |value: String| {
        refilter(current().with_material(Selection::from_control(&value)));
    });

    let on_price = Callback::new(move |raw: String| match raw.parse::<PriceCeiling>() {
        Ok(ceiling) => refilter(current().with_price_ceiling(ceiling)),
        Err(error) => tracing::warn!(%error, "ignoring price range value"),
    });

    let on_page_size = Callback::new(move |raw: String| match parse_page_size(&raw) {
        Ok(size) => refilter(current().with_page_size(size)),
        Err(error) => tracing::warn!(%error, "ignoring page size value"),
    });

    let on_page = Callback::new(move |page: usize| {
        refilter(current().with_page(page));
    });

    Effect::new(move |_| {
        if load_requests.get() == 0 {
            return;
        }
        let source = source.get_value();
        spawn_local(async move {
            if let Ok(data) = loader::load_catalog_data(&source).await {
                category_choices.set(category_options(&data.categories));
                material_choices.set(material_options(&data.products));

                // Pagination starts out against the unfiltered collection
                let state = current();
                let size = state.page_size();
                links.set(pagination_links(page_count(data.products.len(), size), 1));

                refilter(state.with_page_size(size));
            }
        });
    });

    let size_choices = page_size_options(&config.page_size_options);

    view! {
        <div class="row">
            <div class="col-md-3">
                <CatalogFilters
                    category_options=category_choices
                    category=category
                    on_category=on_category
                    material_options=material_choices
                    material=material
                    on_material=on_material
                    price_range=config.price_range.clone()
                    price=price
                    price_label=price_label
                    on_price=on_price
                    page_size_options=size_choices
                    page_size=page_size
                    on_page_size=on_page_size
                />
            </div>
            <div class="col-md-9">
                <ResultsSummary summary=summary />
                <ProductGrid container_id="productList" products=visible />
                <Pagination links=links on_select=on_page />
            </div>
        </div>
    }
}
