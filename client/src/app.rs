//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::net::api::{HttpApi, StorefrontApi};
use crate::pages::{
    bulk_order::BulkOrderPage, cart::CartPage, checkout::CheckoutPage, company_dashboard::CompanyDashboardPage,
    company_register::CompanyRegisterPage, home::HomePage, product::ProductPage, wishlist::WishlistPage,
};
use crate::state::cart::{CartStore, cart_store};
use crate::state::catalog::CatalogState;
use crate::state::company::CompanyState;
use crate::state::ui::UiState;
use crate::state::wishlist::{WishlistStore, wishlist_store};
use crate::util::storage::BrowserStorage;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared stores as contexts, hydrates the persisted ones once
/// in the browser, loads the catalog, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart: RwSignal<CartStore> = RwSignal::new(cart_store(BrowserStorage));
    let wishlist: RwSignal<WishlistStore> = RwSignal::new(wishlist_store(BrowserStorage));
    let company = RwSignal::new(CompanyState::new(BrowserStorage));
    let ui = RwSignal::new(UiState::default());
    let catalog = RwSignal::new(CatalogState { loading: true, ..CatalogState::default() });

    provide_context(cart);
    provide_context(wishlist);
    provide_context(company);
    provide_context(ui);
    provide_context(catalog);

    // Effects only run in the browser, after the server-rendered markup is live.
    Effect::new(move || {
        cart.update(|store| {
            store.hydrate();
        });
        wishlist.update(|store| {
            store.hydrate();
        });
        company.update(|state| {
            state.hydrate();
        });
        let preference = theme::read_preference(&BrowserStorage);
        theme::apply(preference);
        ui.update(|u| u.theme = preference);
    });

    let products = LocalResource::new(|| async { HttpApi::default().list_products().await });
    Effect::new(move || {
        if let Some(result) = products.get() {
            catalog.update(|c| match result {
                Ok(list) => c.set_products(list),
                Err(e) => {
                    leptos::logging::warn!("catalog load failed: {e}");
                    c.loading = false;
                    c.error = Some(e.display_message());
                }
            });
        }
    });

    view! {
        <Title text="HardwareHub"/>

        <Router>
            <Navbar/>
            <main class="storefront-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("wishlist") view=WishlistPage/>
                    <Route path=StaticSegment("checkout") view=CheckoutPage/>
                    <Route path=StaticSegment("bulk-order") view=BulkOrderPage/>
                    <Route path=(StaticSegment("company"), StaticSegment("register")) view=CompanyRegisterPage/>
                    <Route path=StaticSegment("company") view=CompanyDashboardPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
