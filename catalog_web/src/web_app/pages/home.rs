// web_app/pages/home.rs - Landing section

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="py-5 text-center">
            <h1 class="display-5">"Welcome"</h1>
            <p class="lead">"Browse the full catalog or see what is on sale this week."</p>
        </div>
    }
}
