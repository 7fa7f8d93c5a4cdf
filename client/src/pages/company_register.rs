//! Company registration page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::error_banner::ErrorBanner;
use crate::components::form_field::TextField;
use crate::forms::registration::RegistrationForm;
use crate::forms::submit::{REDIRECT_DELAY, SubmitError, SubmitGuard, redirect_after_delay, submit_registration};
use crate::forms::validation::FieldError;
use crate::net::api::HttpApi;
use crate::net::types::Company;
use crate::state::company::CompanyState;

#[component]
pub fn CompanyRegisterPage() -> impl IntoView {
    let company = expect_context::<RwSignal<CompanyState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let ruc = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let contact_name = RwSignal::new(String::new());

    let field_error = RwSignal::new(None::<FieldError>);
    let banner = RwSignal::new(None::<String>);
    let guard = RwSignal::new(SubmitGuard::default());
    let registered = RwSignal::new(None::<Company>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !guard.try_update(SubmitGuard::try_begin).unwrap_or(false) {
            return;
        }
        field_error.set(None);
        banner.set(None);

        let form = RegistrationForm {
            name: name.get_untracked(),
            ruc: ruc.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            city: city.get_untracked(),
            country: country.get_untracked(),
            contact_name: contact_name.get_untracked(),
        };
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            match submit_registration(&HttpApi::default(), &form).await {
                Ok(created) => {
                    company.update(|c| c.set_company(created.clone()));
                    registered.set(Some(created));
                    redirect_after_delay(navigate, "/company");
                }
                Err(SubmitError::Validation(e)) => field_error.set(Some(e)),
                Err(e) => {
                    leptos::logging::warn!("company registration failed: {e}");
                    banner.set(Some(e.banner_message()));
                }
            }
            guard.update(SubmitGuard::finish);
        });
    };

    view! {
        <section class="company-register-page">
            <h1>"Register your company"</h1>
            {move || match registered.get() {
                Some(created) => {
                    view! {
                        <div class="order-confirmation">
                            <h2>"Company registered"</h2>
                            <p><strong>{created.name}</strong> " (ID " {created.id} ")"</p>
                            <p class="order-confirmation__redirect">
                                {format!("Opening the company dashboard in {} seconds...", REDIRECT_DELAY.as_secs())}
                            </p>
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <ErrorBanner message=banner/>
                        <form class="company-form" on:submit=on_submit.clone() novalidate=true>
                            <TextField label="Company name" name="name" value=name error=field_error required=true/>
                            <TextField label="RUC" name="ruc" value=ruc error=field_error required=true/>
                            <TextField label="Email" name="email" value=email error=field_error input_type="email" required=true/>
                            <TextField label="Phone" name="phone" value=phone error=field_error input_type="tel" required=true/>
                            <TextField label="Address" name="address" value=address error=field_error required=true/>
                            <TextField label="City" name="city" value=city error=field_error/>
                            <TextField label="Country" name="country" value=country error=field_error/>
                            <TextField label="Contact name" name="contact_name" value=contact_name error=field_error required=true/>
                            <button class="btn btn--primary" type="submit" disabled=move || guard.with(SubmitGuard::is_busy)>
                                {move || if guard.with(SubmitGuard::is_busy) { "Registering..." } else { "Register" }}
                            </button>
                        </form>
                        <p>"Already registered? " <A href="/company">"Open your dashboard"</A></p>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
