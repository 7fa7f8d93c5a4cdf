//! Bulk order page: quantity orders entered by product id.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::form_field::{FieldMessage, TextField};
use crate::components::order_confirmation::OrderConfirmationView;
use crate::forms::bulk_order::{BulkLine, BulkOrderForm, row_indices};
use crate::forms::submit::{SubmitError, SubmitGuard, redirect_after_delay, submit_bulk_order};
use crate::forms::validation::FieldError;
use crate::net::api::HttpApi;
use crate::net::types::OrderConfirmation;
use crate::state::company::CompanyState;

#[component]
pub fn BulkOrderPage() -> impl IntoView {
    let company = expect_context::<RwSignal<CompanyState>>();
    let navigate = use_navigate();

    let company_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let company_id = RwSignal::new(None::<String>);
    let lines = RwSignal::new(BulkOrderForm::default().lines);

    let field_error = RwSignal::new(None::<FieldError>);
    let banner = RwSignal::new(None::<String>);
    let guard = RwSignal::new(SubmitGuard::default());
    let confirmation = RwSignal::new(None::<OrderConfirmation>);

    Effect::new(move || {
        let Some(selected) = company.with(|c| c.company.clone()) else {
            return;
        };
        if company_id.get_untracked().is_none() && company_name.get_untracked().is_empty() {
            company_name.set(selected.name);
            email.set(selected.email);
            company_id.set(Some(selected.id));
        }
    });

    let on_add_line = move |_| lines.update(|l| l.push(BulkLine::default()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !guard.try_update(SubmitGuard::try_begin).unwrap_or(false) {
            return;
        }
        field_error.set(None);
        banner.set(None);

        let form = BulkOrderForm {
            company_name: company_name.get_untracked(),
            email: email.get_untracked(),
            company_id: company_id.get_untracked(),
            lines: lines.get_untracked(),
            notes: notes.get_untracked(),
        };
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            match submit_bulk_order(&HttpApi::default(), &form).await {
                Ok(done) => {
                    confirmation.set(Some(done));
                    redirect_after_delay(navigate, "/");
                }
                Err(SubmitError::Validation(e)) => field_error.set(Some(e)),
                Err(e) => {
                    leptos::logging::warn!("bulk order failed: {e}");
                    banner.set(Some(e.banner_message()));
                }
            }
            guard.update(SubmitGuard::finish);
        });
    };

    view! {
        <section class="bulk-order-page">
            <h1>"Bulk order"</h1>
            {move || match confirmation.get() {
                Some(done) => view! { <OrderConfirmationView confirmation=done/> }.into_any(),
                None => {
                    view! {
                        <ErrorBanner message=banner/>
                        <form class="bulk-order-form" on:submit=on_submit.clone() novalidate=true>
                            <TextField label="Company name" name="company_name" value=company_name error=field_error required=true/>
                            <TextField label="Email" name="email" value=email error=field_error input_type="email" required=true/>
                            <fieldset class="bulk-order-form__lines">
                                <legend>"Products"</legend>
                                <For
                                    each={move || lines.with(|l| row_indices(l))}
                                    key=|index: &usize| *index
                                    children=move |index: usize| view! { <BulkLineRow index=index lines=lines/> }
                                />
                                <button class="btn" type="button" on:click=on_add_line>"Add product"</button>
                                <FieldMessage field="lines" error=field_error/>
                            </fieldset>
                            <label class="form-field">
                                <span class="form-field__label">"Notes"</span>
                                <textarea
                                    class="form-field__input"
                                    prop:value=move || notes.get()
                                    on:input=move |ev| notes.set(event_target_value(&ev))
                                ></textarea>
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=move || guard.with(SubmitGuard::is_busy)>
                                {move || if guard.with(SubmitGuard::is_busy) { "Sending..." } else { "Send bulk order" }}
                            </button>
                        </form>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn BulkLineRow(index: usize, lines: RwSignal<Vec<BulkLine>>) -> impl IntoView {
    let product_id = move || lines.with(|l| l.get(index).map(|line| line.product_id.clone()).unwrap_or_default());
    let quantity = move || lines.with(|l| l.get(index).map(|line| line.quantity.clone()).unwrap_or_default());

    let on_remove = move |_| {
        lines.update(|l| {
            let mut form = BulkOrderForm { lines: std::mem::take(l), ..BulkOrderForm::default() };
            form.remove_line(index);
            *l = form.lines;
        });
    };

    view! {
        <div class="bulk-line">
            <input
                class="bulk-line__product"
                type="text"
                placeholder="Product id"
                prop:value=product_id
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    lines.update(|l| {
                        if let Some(line) = l.get_mut(index) {
                            line.product_id = value;
                        }
                    });
                }
            />
            <input
                class="bulk-line__quantity"
                type="number"
                min="1"
                placeholder="Qty"
                prop:value=quantity
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    lines.update(|l| {
                        if let Some(line) = l.get_mut(index) {
                            line.quantity = value;
                        }
                    });
                }
            />
            <button class="btn btn--link" type="button" on:click=on_remove>"Remove"</button>
        </div>
    }
}
