// web_app/app.rs - Root application component
//
// Renders the navigation bar and the three page sections. Exactly one
// section is visible at a time; activating the catalog or sales section
// bumps that section's load counter, which the page watches to reload
// its data.

use leptos::prelude::*;
use leptos_meta::*;

use crate::web_app::api::HttpSource;
use crate::web_app::config::CatalogConfig;
use crate::web_app::navigation::{DataLoad, Navigation, Section};
use crate::web_app::pages::{CatalogPage, HomePage, SalesPage};

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Navigation state and per-section load counters
/// - The home, catalog and sales sections
#[component]
pub fn App(source: HttpSource, config: CatalogConfig) -> impl IntoView {
    provide_meta_context();

    let source = StoredValue::new(source);
    let navigation = RwSignal::new(Navigation::new());
    let catalog_loads = RwSignal::new(0_u32);
    let sales_loads = RwSignal::new(0_u32);

    let navigate = move |target: &str| {
        let mut nav = navigation.get_untracked();
        match nav.navigate(target) {
            Ok(load) => {
                navigation.set(nav);
                match load {
                    Some(DataLoad::Catalog) => catalog_loads.update(|n| *n += 1),
                    Some(DataLoad::Sales) => sales_loads.update(|n| *n += 1),
                    None => {}
                }
            }
            Err(error) => tracing::warn!(%error, "ignoring navigation request"),
        }
    };

    let section_class = move |section: Section| {
        if navigation.get().is_active(section) {
            "page-section active"
        } else {
            "page-section"
        }
    };

    let nav_links = Section::ALL
        .into_iter()
        .map(|section| {
            let target = section.target_id();
            view! {
                <li class="nav-item">
                    <a
                        href="#"
                        class=move || {
                            if navigation.get().is_active(section) { "nav-link active" } else { "nav-link" }
                        }
                        data-target=target
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigate(target);
                        }
                    >
                        {section.title()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <Title text="Product Catalog" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <nav class="navbar navbar-expand navbar-light bg-light mb-4">
            <div class="container">
                <span class="navbar-brand">"Catalog"</span>
                <ul class="navbar-nav">{nav_links}</ul>
            </div>
        </nav>

        <main class="container">
            <section id=Section::Home.target_id() class=move || section_class(Section::Home)>
                <HomePage />
            </section>
            <section id=Section::Catalog.target_id() class=move || section_class(Section::Catalog)>
                <CatalogPage source=source config=config load_requests=catalog_loads />
            </section>
            <section id=Section::Sales.target_id() class=move || section_class(Section::Sales)>
                <SalesPage source=source load_requests=sales_loads />
            </section>
        </main>
    }
}
