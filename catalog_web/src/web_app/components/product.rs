// web_app/components/product.rs - Product display components
//
// - ProductCard: one product with its "Add to Cart" control
// - ProductGrid: keyed grid of cards for the catalog and sales sections

use leptos::prelude::*;

use crate::web_app::diagnostics::report_add_to_cart;
use crate::web_app::model::Product;
use crate::web_app::view_model::ProductCardView;

/// Product card
///
/// "Add to Cart" is tagged with the product id and only reports it to the
/// diagnostic channel.
#[component]
pub fn ProductCard(
    /// Display data for the product
    card: ProductCardView,
) -> impl IntoView {
    let product_id = card.id;

    view! {
        <div class="card m-2 col-sm-6 col-md-4 col-lg-3 position-relative">
            <img src=card.image_src class="card-img-top" alt=card.image_alt />
            <div class="card-body d-flex flex-column">
                <h5 class="card-title">{card.name}</h5>
                <p class="card-text">{card.material}</p>
                <p class="card-description flex-grow-1">{card.description}</p>
                <div class="mt-auto">
                    <p class="card-text card-price">{card.price_label}</p>
                    <button
                        type="button"
                        class="btn btn-primary add-to-cart-btn mt-3"
                        data-product-id=product_id.to_string()
                        on:click=move |_| report_add_to_cart(product_id)
                    >
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Grid of product cards
///
/// The container is cleared and refilled whenever `products` changes.
#[component]
pub fn ProductGrid(
    /// Element id of the grid container
    container_id: &'static str,
    /// Products to show, already sliced to the visible page
    #[prop(into)]
    products: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <div id=container_id class="row product-grid">
            <For
                each=move || products.get()
                key=|product| product.id
                children=move |product| {
                    view! { <ProductCard card=ProductCardView::from(&product) /> }
                }
            />
        </div>
    }
}
