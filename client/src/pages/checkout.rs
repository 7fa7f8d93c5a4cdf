//! Enterprise checkout: company billing data plus the current cart.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::form_field::{FieldMessage, TextField};
use crate::components::order_confirmation::OrderConfirmationView;
use crate::forms::checkout::CheckoutForm;
use crate::forms::submit::{SubmitError, SubmitGuard, place_order, redirect_after_delay};
use crate::forms::validation::FieldError;
use crate::net::api::HttpApi;
use crate::net::types::OrderConfirmation;
use crate::state::cart::{Cart, CartStore};
use crate::state::company::CompanyState;
use crate::util::format::format_price;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();
    let company = expect_context::<RwSignal<CompanyState>>();
    let navigate = use_navigate();

    let company_name = RwSignal::new(String::new());
    let ruc = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let contact_name = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let company_id = RwSignal::new(None::<String>);

    let field_error = RwSignal::new(None::<FieldError>);
    let banner = RwSignal::new(None::<String>);
    let guard = RwSignal::new(SubmitGuard::default());
    let confirmation = RwSignal::new(None::<OrderConfirmation>);

    // Prefill once from the selected company, without overwriting typed input.
    Effect::new(move || {
        let Some(selected) = company.with(|c| c.company.clone()) else {
            return;
        };
        if company_id.get_untracked().is_some() || !company_name.get_untracked().is_empty() {
            return;
        }
        let form = CheckoutForm::from_company(&selected);
        company_name.set(form.company_name);
        ruc.set(form.ruc);
        email.set(form.email);
        phone.set(form.phone);
        address.set(form.address);
        city.set(form.city);
        contact_name.set(form.contact_name);
        company_id.set(form.company_id);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !guard.try_update(SubmitGuard::try_begin).unwrap_or(false) {
            return;
        }
        field_error.set(None);
        banner.set(None);

        let form = CheckoutForm {
            company_name: company_name.get_untracked(),
            ruc: ruc.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            city: city.get_untracked(),
            contact_name: contact_name.get_untracked(),
            notes: notes.get_untracked(),
            company_id: company_id.get_untracked(),
        };
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            let snapshot = cart.with_untracked(|store| Cart::clone(store));
            match place_order(&HttpApi::default(), &form, &snapshot).await {
                Ok(done) => {
                    cart.update(|store| store.update(Cart::clear));
                    confirmation.set(Some(done));
                    redirect_after_delay(navigate, "/");
                }
                Err(SubmitError::Validation(e)) => field_error.set(Some(e)),
                Err(e) => {
                    leptos::logging::warn!("checkout failed: {e}");
                    banner.set(Some(e.banner_message()));
                }
            }
            guard.update(SubmitGuard::finish);
        });
    };

    view! {
        <section class="checkout-page">
            <h1>"Enterprise checkout"</h1>
            {move || match confirmation.get() {
                Some(done) => view! { <OrderConfirmationView confirmation=done/> }.into_any(),
                None => {
                    view! {
                        <ErrorBanner message=banner/>
                        <div class="checkout-page__layout">
                            <form class="checkout-form" on:submit=on_submit.clone() novalidate=true>
                                <TextField label="Company name" name="company_name" value=company_name error=field_error required=true/>
                                <TextField label="RUC" name="ruc" value=ruc error=field_error required=true/>
                                <TextField label="Email" name="email" value=email error=field_error input_type="email" required=true/>
                                <TextField label="Phone" name="phone" value=phone error=field_error input_type="tel" required=true/>
                                <TextField label="Address" name="address" value=address error=field_error required=true/>
                                <TextField label="City" name="city" value=city error=field_error/>
                                <TextField label="Contact name" name="contact_name" value=contact_name error=field_error required=true/>
                                <label class="form-field">
                                    <span class="form-field__label">"Notes"</span>
                                    <textarea
                                        class="form-field__input"
                                        name="notes"
                                        prop:value=move || notes.get()
                                        on:input=move |ev| notes.set(event_target_value(&ev))
                                    ></textarea>
                                </label>
                                <button class="btn btn--primary" type="submit" disabled=move || guard.with(SubmitGuard::is_busy)>
                                    {move || if guard.with(SubmitGuard::is_busy) { "Placing order..." } else { "Place order" }}
                                </button>
                            </form>
                            <CheckoutSummary cart=cart field_error=field_error/>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn CheckoutSummary(cart: RwSignal<CartStore>, field_error: RwSignal<Option<FieldError>>) -> impl IntoView {
    view! {
        <aside class="checkout-summary">
            <h2>"Order summary"</h2>
            <ul class="checkout-summary__lines">
                {move || {
                    cart.with(|c| {
                        c.items()
                            .iter()
                            .map(|line| {
                                let label = format!("{} x{}", line.name, line.quantity);
                                let subtotal = format_price(line.subtotal());
                                view! {
                                    <li>
                                        <span>{label}</span>
                                        <span>{subtotal}</span>
                                    </li>
                                }
                            })
                            .collect_view()
                    })
                }}
            </ul>
            <p class="checkout-summary__total">
                "Total: " <strong>{move || format_price(cart.with(|c| c.total()))}</strong>
            </p>
            <FieldMessage field="cart" error=field_error/>
            <A href="/cart">"Edit cart"</A>
        </aside>
    }
}
