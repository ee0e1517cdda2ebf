//! Authenticated page frame, dashboard and fallback page

use super::ChatWidget;
use crate::routes::Route;
use crate::services::use_services;
use crate::session::{SessionAction, use_session};
use broker_core::{Clock, SystemClock};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShellProps {
    pub children: Children,
}

#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    let services = use_services();
    let session = use_session();
    let navigator = use_navigator();

    let on_logout = Callback::from(move |_: MouseEvent| {
        services.logout();
        session.dispatch(SessionAction::SignedOut);
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <div>
            <nav>
                <Link<Route> to={Route::Dashboard}>{"Dashboard"}</Link<Route>>
                <Link<Route> to={Route::RealEstate}>{"Real estate"}</Link<Route>>
                <Link<Route> to={Route::Rentals}>{"Rentals"}</Link<Route>>
                <Link<Route> to={Route::Mortgages}>{"Mortgages"}</Link<Route>>
                <Link<Route> to={Route::Profile}>{"Profile"}</Link<Route>>
                <button onclick={on_logout}>{"Log out"}</button>
            </nav>
            <main>
                {props.children.clone()}
            </main>
            <ChatWidget />
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let services = use_services();
    let caches = &services.caches;

    let remaining = services
        .tokens
        .expires_at()
        .map(|expires_at| (expires_at - SystemClock.now_millis()).max(0) / 60_000);

    let count = |loaded: bool, len: usize| {
        if loaded {
            len.to_string()
        } else {
            "not loaded".to_string()
        }
    };
    let real_estate = caches.real_estate.borrow();
    let rentals = caches.rentals.borrow();
    let mortgages = caches.mortgages.borrow();

    html! {
        <section>
            <h1>{"Dashboard"}</h1>
            if let Some(minutes) = remaining {
                <p>{format!("Session ends in {minutes} min")}</p>
            }
            <ul>
                <li>{format!("Properties for sale: {}", count(real_estate.is_loaded(), real_estate.len()))}</li>
                <li>{format!("Rentals: {}", count(rentals.is_loaded(), rentals.len()))}</li>
                <li>{format!("Mortgage products: {}", count(mortgages.is_loaded(), mortgages.len()))}</li>
            </ul>
        </section>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main>
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>{"Back to start"}</Link<Route>>
        </main>
    }
}
