//! Wishlist page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::cart::{CartItem, CartStore};
use crate::state::wishlist::{WishlistItem, WishlistStore};
use crate::util::format::format_price;

#[component]
pub fn WishlistPage() -> impl IntoView {
    let wishlist = expect_context::<RwSignal<WishlistStore>>();

    view! {
        <section class="wishlist-page">
            <h1>"Wishlist"</h1>
            <Show
                when=move || !wishlist.with(|w| w.is_empty())
                fallback=|| {
                    view! {
                        <p class="wishlist-page__empty">
                            "Nothing saved yet. " <A href="/">"Browse the catalog"</A>
                        </p>
                    }
                }
            >
                <ul class="wishlist-grid">
                    <For
                        each=move || wishlist.with(|w| w.items().to_vec())
                        key=|item: &WishlistItem| item.id.clone()
                        children=move |item: WishlistItem| view! { <WishlistEntry item=item/> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn WishlistEntry(item: WishlistItem) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();
    let wishlist = expect_context::<RwSignal<WishlistStore>>();

    let cart_item = CartItem {
        id: item.id.clone(),
        quantity: 1,
        price: item.price,
        name: item.name.clone(),
        image: item.image.clone(),
        category: item.category.clone(),
    };
    let remove_id = item.id.clone();

    let on_add = move |_| {
        let line = cart_item.clone();
        cart.update(|store| store.update(|c| c.add(line)));
    };
    let on_remove = move |_| wishlist.update(|store| store.update(|w| w.remove(&remove_id)));

    view! {
        <li class="wishlist-entry">
            <A href=format!("/product/{}", item.id)>
                <img class="wishlist-entry__image" src=item.image.clone() alt=item.name.clone()/>
                <span class="wishlist-entry__name">{item.name.clone()}</span>
            </A>
            <span class="wishlist-entry__price">{format_price(item.price)}</span>
            <button class="btn btn--primary" on:click=on_add>"Add to cart"</button>
            <button class="btn btn--link" on:click=on_remove>"Remove"</button>
        </li>
    }
}
