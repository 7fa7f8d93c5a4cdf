//! Top navigation with cart/wishlist counters and theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::cart::CartStore;
use crate::state::company::CompanyState;
use crate::state::ui::UiState;
use crate::state::wishlist::WishlistStore;
use crate::util::storage::BrowserStorage;
use crate::util::theme::{self, Theme};

#[component]
pub fn Navbar() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();
    let wishlist = expect_context::<RwSignal<WishlistStore>>();
    let company = expect_context::<RwSignal<CompanyState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_theme = move |_| {
        let next = theme::toggle(&BrowserStorage, ui.with_untracked(|u| u.theme));
        ui.update(|u| u.theme = next);
    };

    let company_label = move || {
        company.with(|c| c.company.as_ref().map_or_else(|| "Company".to_owned(), |c| c.name.clone()))
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"HardwareHub"</A>
            <button
                class="btn navbar__menu"
                type="button"
                aria-label="Menu"
                on:click=move |_| ui.update(|u| u.menu_open = !u.menu_open)
            >
                "Menu"
            </button>
            <div
                class=move || if ui.with(|u| u.menu_open) { "navbar__links navbar__links--open" } else { "navbar__links" }
                on:click=move |_| ui.update(|u| u.menu_open = false)
            >
                <A href="/bulk-order">"Bulk order"</A>
                <A href="/company">{company_label}</A>
                <A href="/wishlist">
                    "Wishlist "
                    <span class="navbar__badge">{move || wishlist.with(|w| w.count())}</span>
                </A>
                <A href="/cart">
                    "Cart "
                    <span class="navbar__badge">{move || cart.with(|c| c.count())}</span>
                </A>
                <button class="btn navbar__theme" on:click=on_theme title="Toggle theme">
                    {move || match ui.with(|u| u.theme) {
                        Theme::Light => "Dark mode",
                        Theme::Dark => "Light mode",
                    }}
                </button>
            </div>
        </nav>
    }
}
