//! Catalog tile with add-to-cart and wishlist toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Product;
use crate::state::cart::{CartItem, CartStore};
use crate::state::wishlist::{WishlistItem, WishlistStore};
use crate::util::format::format_price;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();
    let wishlist = expect_context::<RwSignal<WishlistStore>>();

    let cart_item = CartItem::from_product(&product);
    let wish_item = WishlistItem::from_product(&product);
    let id = product.id.clone();
    let listed = move || wishlist.with(|w| w.contains(&id));

    let on_add = move |_| {
        let item = cart_item.clone();
        cart.update(|store| store.update(|c| c.add(item)));
    };
    let on_wish = move |_| {
        let item = wish_item.clone();
        wishlist.update(|store| {
            store.update(|w| w.toggle(item));
        });
    };

    view! {
        <article class="product-card">
            <A href=format!("/product/{}", product.id) attr:class="product-card__link">
                <img class="product-card__image" src=product.image.clone() alt=product.name.clone()/>
                <h3 class="product-card__name">{product.name.clone()}</h3>
            </A>
            <span class="product-card__category">{product.category.clone()}</span>
            <span class="product-card__price">{format_price(product.price)}</span>
            <div class="product-card__actions">
                <button class="btn btn--primary" on:click=on_add>"Add to cart"</button>
                <button class="btn product-card__wish" on:click=on_wish>
                    {move || if listed() { "Saved" } else { "Save" }}
                </button>
            </div>
        </article>
    }
}
