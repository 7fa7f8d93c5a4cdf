//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <nav class="footer__links">
                <A href="/">"Catalog"</A>
                <A href="/bulk-order">"Bulk orders"</A>
                <A href="/company/register">"Register your company"</A>
            </nav>
            <p class="footer__note">"Prices in USD. Enterprise orders are invoiced to the registered company."</p>
        </footer>
    }
}
