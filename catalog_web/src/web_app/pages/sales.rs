// web_app/pages/sales.rs - Sales page component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::api::{loader, HttpSource};
use crate::web_app::components::ProductGrid;
use crate::web_app::model::Product;

/// On-sale products, unpaginated
#[component]
pub fn SalesPage(
    source: StoredValue<HttpSource>,
    /// Bumped by navigation each time the section is activated
    #[prop(into)]
    load_requests: Signal<u32>,
) -> impl IntoView {
    let products = RwSignal::new(Vec::<Product>::new());

    Effect::new(move |_| {
        if load_requests.get() == 0 {
            return;
        }
        let source = source.get_value();
        spawn_local(async move {
            if let Ok(on_sale) = loader::load_sales_data(&source).await {
                products.set(on_sale);
            }
        });
    });

    view! {
        <h2 class="mb-3">"On Sale"</h2>
        <ProductGrid container_id="salesProductList" products=products />
    }
}
