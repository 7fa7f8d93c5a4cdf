//! Catalog page with category filter and search.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::product_card::ProductCard;
use crate::net::types::Product;
use crate::state::catalog::CatalogState;

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    view! {
        <section class="catalog">
            <header class="catalog__header">
                <h1>"Hardware Catalog"</h1>
                <input
                    class="catalog__search"
                    type="search"
                    placeholder="Search products"
                    prop:value=move || catalog.with(|c| c.query.clone())
                    on:input=move |ev| catalog.update(|c| c.query = event_target_value(&ev))
                />
                <select
                    class="catalog__category"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        catalog.update(|c| c.category = (!value.is_empty()).then_some(value));
                    }
                >
                    <option value="">"All categories"</option>
                    {move || {
                        catalog
                            .with(CatalogState::categories)
                            .into_iter()
                            .map(|c| {
                                let label = c.clone();
                                view! { <option value=c>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </header>

            <ErrorBanner message=Signal::derive(move || catalog.with(|c| c.error.clone()))/>

            <Show
                when=move || !catalog.with(|c| c.loading)
                fallback=|| view! { <p class="catalog__loading">"Loading products..."</p> }
            >
                <div class="catalog__grid">
                    <For
                        each=move || catalog.with(CatalogState::visible_products)
                        key=|p: &Product| p.id.clone()
                        children=move |product: Product| view! { <ProductCard product=product/> }
                    />
                </div>
                <Show when=move || catalog.with(|c| c.visible_products().is_empty())>
                    <p class="catalog__empty">"No products match your search."</p>
                </Show>
            </Show>
        </section>
    }
}
