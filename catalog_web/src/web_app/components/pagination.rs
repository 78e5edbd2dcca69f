// web_app/components/pagination.rs - Page links

use leptos::prelude::*;

use crate::web_app::view_model::PageLink;

/// One link per page, 1-indexed
#[component]
pub fn Pagination(
    /// Links to render
    #[prop(into)]
    links: Signal<Vec<PageLink>>,
    /// Called with the 1-based page number of the clicked link
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav aria-label="Product pages">
            <ul id="pagination" class="pagination">
                {move || {
                    links
                        .get()
                        .into_iter()
                        .map(|link| {
                            let number = link.number;
                            let class = if link.active { "page-item active" } else { "page-item" };
                            view! {
                                <li class=class>
                                    <a
                                        class="page-link"
                                        href="#"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            on_select.run(number);
                                        }
                                    >
                                        {number}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </nav>
    }
}
