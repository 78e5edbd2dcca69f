// tests/loader_tests.rs - Catalog data loading against in-memory documents
//
// Covers:
// - Concurrent category + product load, all-or-nothing
// - Retrieval and parse failures reported without panicking
// - Sales selection
// - Filter passes re-fetching the full product collection

mod common;

use catalog_web::web_app::api::{filter_products, load_catalog_data, load_sales_data, LoadError};
use catalog_web::web_app::engine::FilterState;
use catalog_web::web_app::model::Selection;
use common::{catalog, categories_document, config_with_page_size, Document, FixtureSource};

#[tokio::test]
async fn test_catalog_load_returns_both_documents() {
    let products = catalog(30);
    let source = FixtureSource::serving(&products);

    let data = load_catalog_data(&source).await.unwrap();

    assert_eq!(data.categories, categories_document().categories);
    assert_eq!(data.products, products);
    assert_eq!(source.category_fetches(), 1);
    assert_eq!(source.product_fetches(), 1);
}

#[tokio::test]
async fn test_categories_failure_aborts_catalog_load() {
    let source = FixtureSource::new(Document::Status(404), Document::json(&catalog(5)));

    let error = load_catalog_data(&source).await.unwrap_err();
    assert!(matches!(error, LoadError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_products_failure_aborts_catalog_load() {
    let source = FixtureSource::new(Document::json(&categories_document()), Document::Unreachable);

    let error = load_catalog_data(&source).await.unwrap_err();
    assert!(matches!(error, LoadError::Request { .. }));
}

#[tokio::test]
async fn test_malformed_products_document_is_a_parse_failure() {
    let source = FixtureSource::new(
        Document::json(&categories_document()),
        Document::Body(r#"{"products": "#.to_string()),
    );

    let error = load_catalog_data(&source).await.unwrap_err();
    assert!(error.is_parse());
    assert!(error.to_string().contains("data/products.json"));
}

#[tokio::test]
async fn test_structurally_compatible_document_is_accepted() {
    let body = r#"[
        {"id": 1, "name": "Odd", "category": "Rings", "material": "Gold", "price": -5, "onSale": true},
        {"id": 2}
    ]"#;
    let source = FixtureSource::new(Document::json(&categories_document()), Document::Body(body.to_string()));

    let data = load_catalog_data(&source).await.unwrap();
    assert_eq!(data.products.len(), 2);
    assert!(data.products[0].price.is_sign_negative());
    assert_eq!(data.products[1].name, "");
    assert!(!data.products[1].on_sale);
}

#[tokio::test]
async fn test_sales_view_keeps_on_sale_products() {
    let body = r#"[{"id": 1, "onSale": true}, {"id": 2, "onSale": false}]"#;
    let source = FixtureSource::new(Document::Unreachable, Document::Body(body.to_string()));

    let sale = load_sales_data(&source).await.unwrap();

    let ids: Vec<u64> = sale.iter().map(|product| product.id).collect();
    assert_eq!(ids, vec![1]);
    // The categories document is never requested for the sales view
    assert_eq!(source.category_fetches(), 0);
}

#[tokio::test]
async fn test_sales_failure_is_returned() {
    let source = FixtureSource::new(Document::Unreachable, Document::Status(500));

    let error = load_sales_data(&source).await.unwrap_err();
    assert!(matches!(error, LoadError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_every_filter_pass_refetches_products() {
    let products = catalog(30);
    let source = FixtureSource::serving(&products);
    let state = FilterState::new(&config_with_page_size(24));

    let first = filter_products(&source, state.clone()).await.unwrap();
    assert_eq!(first.page.items.len(), 24);

    let second = filter_products(&source, first.state.with_page(2)).await.unwrap();
    assert_eq!(second.page.items.len(), 6);

    let third = filter_products(&source, second.state.with_category(Selection::from_control("Rings")))
        .await
        .unwrap();
    assert_eq!(third.page.total, 10);
    assert_eq!(third.state.page().get(), 1);

    assert_eq!(source.product_fetches(), 3);
    assert_eq!(source.category_fetches(), 0);
}

#[tokio::test]
async fn test_filter_pass_failure_is_returned() {
    let source = FixtureSource::new(Document::Unreachable, Document::Unreachable);
    let state = FilterState::new(&config_with_page_size(12));

    assert!(filter_products(&source, state).await.is_err());
}

#[tokio::test]
async fn test_bundled_sample_documents_load() {
    let source = FixtureSource::new(
        Document::Body(include_str!("../public/data/categories.json").to_string()),
        Document::Body(include_str!("../public/data/products.json").to_string()),
    );

    let data = load_catalog_data(&source).await.unwrap();
    assert_eq!(data.categories.len(), 4);
    assert_eq!(data.products.len(), 30);
    assert!(data.products.iter().any(|product| product.on_sale));
}
