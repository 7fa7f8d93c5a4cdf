//! Product detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::Product;
use crate::state::cart::{CartItem, CartStore};
use crate::state::catalog::CatalogState;
use crate::state::wishlist::{WishlistItem, WishlistStore};
use crate::util::format::format_price;

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let product = move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        catalog.with(|c| c.find(&id).cloned())
    };

    view! {
        <section class="product-detail">
            {move || match product() {
                Some(p) => view! { <ProductDetail product=p/> }.into_any(),
                None if catalog.with(|c| c.loading) => view! { <p>"Loading product..."</p> }.into_any(),
                None => view! { <p>"Product not found."</p> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();
    let wishlist = expect_context::<RwSignal<WishlistStore>>();
    let quantity = RwSignal::new(1_u32);

    let cart_item = CartItem::from_product(&product);
    let wish_item = WishlistItem::from_product(&product);
    let id = product.id.clone();
    let listed = move || wishlist.with(|w| w.contains(&id));

    let on_add = move |_| {
        let item = CartItem { quantity: quantity.get_untracked(), ..cart_item.clone() };
        cart.update(|store| store.update(|c| c.add(item)));
    };
    let on_wish = move |_| {
        let item = wish_item.clone();
        wishlist.update(|store| {
            store.update(|w| w.add(item));
        });
    };

    let stock = product.stock.map(|s| if s == 0 { "Out of stock".to_owned() } else { format!("{s} in stock") });

    view! {
        <img class="product-detail__image" src=product.image.clone() alt=product.name.clone()/>
        <div class="product-detail__info">
            <h1>{product.name.clone()}</h1>
            <span class="product-detail__category">{product.category.clone()}</span>
            <p class="product-detail__price">{format_price(product.price)}</p>
            {stock.map(|s| view! { <p class="product-detail__stock">{s}</p> })}
            <p class="product-detail__description">{product.description.clone()}</p>
            <label class="product-detail__quantity">
                "Quantity"
                <input
                    type="number"
                    min="1"
                    prop:value=move || quantity.get().to_string()
                    on:input=move |ev| {
                        let parsed = event_target_value(&ev).trim().parse::<u32>().unwrap_or(1);
                        quantity.set(parsed.max(1));
                    }
                />
            </label>
            <div class="product-detail__actions">
                <button class="btn btn--primary" on:click=on_add>"Add to cart"</button>
                <button class="btn" on:click=on_wish disabled=listed>
                    "Add to wishlist"
                </button>
            </div>
        </div>
    }
}
