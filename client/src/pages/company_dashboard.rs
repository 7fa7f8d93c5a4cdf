//! Company dashboard: selected company details and its order history.
//!
//! The dashboard is fetched whenever the selected company id changes. With
//! no company selected the page offers a lookup by id (`GET /companies/{id}`)
//! and a link to registration.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::error_banner::ErrorBanner;
use crate::forms::submit::SubmitGuard;
use crate::net::api::{HttpApi, StorefrontApi};
use crate::net::types::{Company, OrderSummary};
use crate::state::company::CompanyState;
use crate::util::format::format_price;

#[component]
pub fn CompanyDashboardPage() -> impl IntoView {
    let company = expect_context::<RwSignal<CompanyState>>();

    // Memo so caching the fetched record does not refetch.
    let company_id = Memo::new(move |_| company.with(|c| c.company_id().map(str::to_owned)));
    let orders = RwSignal::new(Vec::<OrderSummary>::new());

    let dashboard = LocalResource::new(move || {
        let id = company_id.get();
        async move {
            match id {
                Some(id) => Some(HttpApi::default().fetch_dashboard(&id).await),
                None => None,
            }
        }
    });

    Effect::new(move || {
        if company_id.get().is_some() {
            company.update(|c| c.loading = true);
        }
    });

    Effect::new(move || {
        let Some(Some(result)) = dashboard.get() else {
            return;
        };
        match result {
            Ok(loaded) => {
                orders.set(loaded.orders);
                company.update(|c| c.set_company(loaded.company));
            }
            Err(e) => {
                leptos::logging::warn!("dashboard load failed: {e}");
                orders.set(Vec::new());
                company.update(|c| c.set_error(e.display_message()));
            }
        }
    });

    let error = Signal::derive(move || company.with(|c| c.error.clone()));
    let on_switch = move |_| {
        orders.set(Vec::new());
        company.update(CompanyState::forget);
    };

    view! {
        <section class="company-dashboard-page">
            <h1>"Company dashboard"</h1>
            <ErrorBanner message=error/>
            {move || {
                if company_id.with(Option::is_none) {
                    return view! { <CompanyLookup company=company/> }.into_any();
                }
                if company.with(|c| c.loading) {
                    return view! { <p class="loading">"Loading company..."</p> }.into_any();
                }
                match company.with(|c| c.company.clone()) {
                    Some(current) => {
                        view! {
                            <CompanyDetails company=current/>
                            <OrderHistory orders=orders/>
                            <div class="company-dashboard__actions">
                                <A href="/checkout" attr:class="btn btn--primary">"New order"</A>
                                <A href="/bulk-order" attr:class="btn">"Bulk order"</A>
                                <button class="btn btn--link" on:click=on_switch>"Switch company"</button>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! { <button class="btn btn--link" on:click=on_switch>"Switch company"</button> }
                            .into_any()
                    }
                }
            }}
        </section>
    }
}

#[component]
fn CompanyDetails(company: Company) -> impl IntoView {
    let location = [company.city.as_str(), company.country.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <dl class="company-details">
            <dt>"Company"</dt>
            <dd>{company.name.clone()}</dd>
            <dt>"RUC"</dt>
            <dd>{company.ruc.clone()}</dd>
            <dt>"Email"</dt>
            <dd>{company.email.clone()}</dd>
            <dt>"Phone"</dt>
            <dd>{company.phone.clone()}</dd>
            <dt>"Address"</dt>
            <dd>{company.address.clone()}</dd>
            <dt>"Location"</dt>
            <dd>{location}</dd>
            <dt>"Contact"</dt>
            <dd>{company.contact_name.clone()}</dd>
        </dl>
    }
}

#[component]
fn OrderHistory(orders: RwSignal<Vec<OrderSummary>>) -> impl IntoView {
    view! {
        <h2>"Orders"</h2>
        <Show
            when=move || orders.with(|o| !o.is_empty())
            fallback=|| view! { <p class="empty">"No orders yet."</p> }
        >
            <table class="orders-table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Date"</th>
                        <th>"Status"</th>
                        <th>"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || orders.get()
                        key=|order| order.id.clone()
                        children=|order: OrderSummary| {
                            view! {
                                <tr>
                                    <td>{order.id}</td>
                                    <td>{order.created_at.unwrap_or_default()}</td>
                                    <td>{order.status}</td>
                                    <td>{order.total.map(format_price).unwrap_or_default()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}

/// Look up an existing company by id and select it.
#[component]
fn CompanyLookup(company: RwSignal<CompanyState>) -> impl IntoView {
    let lookup = RwSignal::new(String::new());
    let guard = RwSignal::new(SubmitGuard::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = lookup.get_untracked().trim().to_owned();
        if id.is_empty() {
            company.update(|c| c.set_error("Enter your company ID.".to_owned()));
            return;
        }
        if !guard.try_update(SubmitGuard::try_begin).unwrap_or(false) {
            return;
        }
        company.update(|c| {
            c.error = None;
            c.loading = true;
        });

        leptos::task::spawn_local(async move {
            match HttpApi::default().fetch_company(&id).await {
                Ok(found) => company.update(|c| c.set_company(found)),
                Err(e) => {
                    leptos::logging::warn!("company lookup failed: {e}");
                    company.update(|c| c.set_error(e.display_message()));
                }
            }
            guard.update(SubmitGuard::finish);
        });
    };

    view! {
        <p>"No company selected."</p>
        <form class="company-lookup" on:submit=on_submit>
            <label class="form-field">
                <span class="form-field__label">"Company ID"</span>
                <input
                    class="form-field__input"
                    type="text"
                    prop:value=move || lookup.get()
                    on:input=move |ev| lookup.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || guard.with(SubmitGuard::is_busy)>
                {move || if guard.with(SubmitGuard::is_busy) { "Looking up..." } else { "Open dashboard" }}
            </button>
        </form>
        <p>"New customer? " <A href="/company/register">"Register your company"</A></p>
    }
}
