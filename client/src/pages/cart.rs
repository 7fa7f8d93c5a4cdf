//! Cart page: line quantities, totals, and the way to checkout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::cart::{Cart, CartItem, CartStore};
use crate::util::format::format_price;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();

    let on_clear = move |_| cart.update(|store| store.update(Cart::clear));

    view! {
        <section class="cart-page">
            <h1>"Your cart"</h1>
            <Show
                when=move || !cart.with(|c| c.is_empty())
                fallback=|| {
                    view! {
                        <p class="cart-page__empty">
                            "Your cart is empty. " <A href="/">"Browse the catalog"</A>
                        </p>
                    }
                }
            >
                <table class="cart-table">
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th>"Price"</th>
                            <th>"Quantity"</th>
                            <th>"Subtotal"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || cart.with(|c| c.items().to_vec())
                            key=|line: &CartItem| (line.id.clone(), line.quantity)
                            children=move |line: CartItem| view! { <CartLine line=line/> }
                        />
                    </tbody>
                </table>
                <div class="cart-page__summary">
                    <span>{move || format!("{} items", cart.with(|c| c.count()))}</span>
                    <strong>{move || format_price(cart.with(|c| c.total()))}</strong>
                </div>
                <div class="cart-page__actions">
                    <button class="btn" on:click=on_clear>"Empty cart"</button>
                    <A href="/checkout" attr:class="btn btn--primary">"Enterprise checkout"</A>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn CartLine(line: CartItem) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();
    let quantity = line.quantity;
    let subtotal = format_price(line.subtotal());

    let dec_id = line.id.clone();
    let inc_id = line.id.clone();
    let remove_id = line.id.clone();
    let on_dec = move |_| cart.update(|store| store.update(|c| c.set_quantity(&dec_id, quantity.saturating_sub(1))));
    let on_inc = move |_| cart.update(|store| store.update(|c| c.set_quantity(&inc_id, quantity.saturating_add(1))));
    let on_remove = move |_| cart.update(|store| store.update(|c| c.remove(&remove_id)));

    view! {
        <tr class="cart-line">
            <td class="cart-line__name">
                <img class="cart-line__image" src=line.image.clone() alt=""/>
                {line.name.clone()}
            </td>
            <td>{format_price(line.price)}</td>
            <td class="cart-line__quantity">
                <button class="btn btn--small" on:click=on_dec title="Decrease">"-"</button>
                <span>{quantity}</span>
                <button class="btn btn--small" on:click=on_inc title="Increase">"+"</button>
            </td>
            <td>{subtotal}</td>
            <td>
                <button class="btn btn--link" on:click=on_remove>"Remove"</button>
            </td>
        </tr>
    }
}
