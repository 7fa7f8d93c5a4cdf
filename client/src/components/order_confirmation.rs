//! Confirmation view shown after a successful order.

use leptos::prelude::*;

use crate::forms::submit::REDIRECT_DELAY;
use crate::net::types::OrderConfirmation;
use crate::util::format::format_price;

#[component]
pub fn OrderConfirmationView(confirmation: OrderConfirmation) -> impl IntoView {
    let status = confirmation.status.clone().unwrap_or_else(|| "received".to_owned());
    let total = confirmation.total.map(format_price);

    view! {
        <div class="order-confirmation">
            <h2>"Order placed"</h2>
            <p>"Order number: " <strong>{confirmation.order_id.clone()}</strong></p>
            <p>"Status: " {status}</p>
            {total.map(|t| view! { <p>"Total: " {t}</p> })}
            <p class="order-confirmation__redirect">
                {format!("Returning to the catalog in {} seconds...", REDIRECT_DELAY.as_secs())}
            </p>
        </div>
    }
}
