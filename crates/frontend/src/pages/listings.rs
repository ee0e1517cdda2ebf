//! Real estate, rental and mortgage lists with client-side filters

use super::user_message;
use super::widgets::{SelectField, TextField, non_blank, parse_count, parse_decimal};
use crate::services::{AppServices, ListCaches, use_services};
use broker_core::{ListStore, MortgageFilter, PropertyKind, RealEstateFilter, RentalFilter};
use broker_http::ClientError;
use std::cell::RefCell;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum Load {
    Loading,
    Ready,
    Failed(String),
}

/// Fetch a list once per session and keep it in the shared cache
#[hook]
fn use_cached_list<T, F, Fut>(
    select: fn(&ListCaches) -> &RefCell<ListStore<T>>,
    fetch: F,
) -> UseStateHandle<Load>
where
    T: 'static,
    F: FnOnce(AppServices) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ClientError>> + 'static,
{
    let services = use_services();
    let load = {
        let loaded = select(&services.caches).borrow().is_loaded();
        use_state(move || if loaded { Load::Ready } else { Load::Loading })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            if *load == Load::Loading {
                let caches = services.caches.clone();
                spawn_local(async move {
                    match fetch(services).await {
                        Ok(items) => {
                            tracing::debug!(count = items.len(), "List fetched");
                            select(&caches).borrow_mut().replace(items);
                            load.set(Load::Ready);
                        }
                        Err(e) => {
                            tracing::warn!("Failed to fetch list: {e}");
                            load.set(Load::Failed(user_message(&e)));
                        }
                    }
                });
            }
        });
    }

    load
}

/// Callback that edits one field of a filter held in state
fn edit<F: Clone + 'static>(state: &UseStateHandle<F>, apply: fn(&mut F, String)) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value: String| {
        let mut next = (*state).clone();
        apply(&mut next, value);
        state.set(next);
    })
}

fn status(load: &Load, shown: usize, total: usize) -> Html {
    match load {
        Load::Loading => html! { <p>{"Loading..."}</p> },
        Load::Failed(message) => html! { <p>{message.clone()}</p> },
        Load::Ready => html! { <p>{format!("{shown} of {total}")}</p> },
    }
}

#[function_component(RealEstateList)]
pub fn real_estate_list() -> Html {
    let services = use_services();
    let load = use_cached_list(|c| &c.real_estate, |s| async move { s.listings.real_estate().await });
    let filter = use_state(RealEstateFilter::default);

    let cache = services.caches.real_estate.borrow();
    let rows = cache.filtered(&*filter);
    let kinds = PropertyKind::ALL
        .iter()
        .map(|k| (AttrValue::Static(k.as_str()), AttrValue::Static(k.as_str())))
        .collect::<Vec<_>>();

    html! {
        <section>
            <h1>{"Real estate"}</h1>
            <div>
                <TextField label="Search" value={filter.search.clone().unwrap_or_default()}
                    on_change={edit(&filter, |f, v| f.search = non_blank(v))} />
                <TextField label="Min price" on_change={edit(&filter, |f, v| f.min_price = parse_decimal(&v))}
                    value={filter.min_price.map(|p| p.to_string()).unwrap_or_default()} />
                <TextField label="Max price" on_change={edit(&filter, |f, v| f.max_price = parse_decimal(&v))}
                    value={filter.max_price.map(|p| p.to_string()).unwrap_or_default()} />
                <SelectField label="Type" options={kinds}
                    on_change={edit(&filter, |f, v| f.kind = PropertyKind::ALL.into_iter().find(|k| k.as_str() == v))} />
                <TextField label="Min bedrooms" on_change={edit(&filter, |f, v| f.min_bedrooms = parse_count(&v))}
                    value={filter.min_bedrooms.map(|b| b.to_string()).unwrap_or_default()} />
            </div>
            {status(&load, rows.len(), cache.len())}
            <table>
                <thead>
                    <tr><th>{"Title"}</th><th>{"City"}</th><th>{"Type"}</th><th>{"Bedrooms"}</th><th>{"Price"}</th></tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|item| html! {
                        <tr key={item.id}>
                            <td>{item.title.clone()}<br /><small>{item.address.clone()}</small></td>
                            <td>{item.city.clone()}</td>
                            <td>{item.kind.as_str()}</td>
                            <td>{item.bedrooms}</td>
                            <td>{item.price.to_string()}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </section>
    }
}

#[function_component(RentalList)]
pub fn rental_list() -> Html {
    let services = use_services();
    let load = use_cached_list(|c| &c.rentals, |s| async move { s.listings.rentals().await });
    let filter = use_state(RentalFilter::default);

    let cache = services.caches.rentals.borrow();
    let rows = cache.filtered(&*filter);
    let furnished = vec![
        (AttrValue::Static("yes"), AttrValue::Static("Furnished")),
        (AttrValue::Static("no"), AttrValue::Static("Unfurnished")),
    ];

    html! {
        <section>
            <h1>{"Rentals"}</h1>
            <div>
                <TextField label="Search" value={filter.search.clone().unwrap_or_default()}
                    on_change={edit(&filter, |f, v| f.search = non_blank(v))} />
                <TextField label="Max rent" on_change={edit(&filter, |f, v| f.max_monthly_rent = parse_decimal(&v))}
                    value={filter.max_monthly_rent.map(|p| p.to_string()).unwrap_or_default()} />
                <TextField label="Min bedrooms" on_change={edit(&filter, |f, v| f.min_bedrooms = parse_count(&v))}
                    value={filter.min_bedrooms.map(|b| b.to_string()).unwrap_or_default()} />
                <SelectField label="Furnishing" options={furnished}
                    on_change={edit(&filter, |f, v| f.furnished = match v.as_str() {
                        "yes" => Some(true),
                        "no" => Some(false),
                        _ => None,
                    })} />
            </div>
            {status(&load, rows.len(), cache.len())}
            <table>
                <thead>
                    <tr><th>{"Title"}</th><th>{"City"}</th><th>{"Bedrooms"}</th><th>{"Furnished"}</th><th>{"Monthly rent"}</th></tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|item| html! {
                        <tr key={item.id}>
                            <td>{item.title.clone()}<br /><small>{item.address.clone()}</small></td>
                            <td>{item.city.clone()}</td>
                            <td>{item.bedrooms}</td>
                            <td>{if item.furnished { "yes" } else { "no" }}</td>
                            <td>{item.monthly_rent.to_string()}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </section>
    }
}

#[function_component(MortgageList)]
pub fn mortgage_list() -> Html {
    let services = use_services();
    let load = use_cached_list(|c| &c.mortgages, |s| async move { s.listings.mortgages().await });
    let filter = use_state(MortgageFilter::default);

    let cache = services.caches.mortgages.borrow();
    let rows = cache.filtered(&*filter);

    html! {
        <section>
            <h1>{"Mortgages"}</h1>
            <div>
                <TextField label="Search" value={filter.search.clone().unwrap_or_default()}
                    on_change={edit(&filter, |f, v| f.search = non_blank(v))} />
                <TextField label="Max rate %" on_change={edit(&filter, |f, v| f.max_interest_rate = parse_decimal(&v))}
                    value={filter.max_interest_rate.map(|r| r.to_string()).unwrap_or_default()} />
                <TextField label="Min term" on_change={edit(&filter, |f, v| f.min_term_years = parse_count(&v))}
                    value={filter.min_term_years.map(|t| t.to_string()).unwrap_or_default()} />
                <TextField label="Max term" on_change={edit(&filter, |f, v| f.max_term_years = parse_count(&v))}
                    value={filter.max_term_years.map(|t| t.to_string()).unwrap_or_default()} />
                <TextField label="Loan amount" on_change={edit(&filter, |f, v| f.loan_amount = parse_decimal(&v))}
                    value={filter.loan_amount.map(|a| a.to_string()).unwrap_or_default()} />
            </div>
            {status(&load, rows.len(), cache.len())}
            <table>
                <thead>
                    <tr><th>{"Product"}</th><th>{"Lender"}</th><th>{"Rate"}</th><th>{"Term"}</th><th>{"Up to"}</th></tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|item| html! {
                        <tr key={item.id}>
                            <td>{item.name.clone()}</td>
                            <td>{item.lender.clone()}</td>
                            <td>{format!("{}%", item.interest_rate)}</td>
                            <td>{format!("{} years", item.term_years)}</td>
                            <td>{item.max_amount.to_string()}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </section>
    }
}
