//! Login and registration forms

use super::user_message;
use super::widgets::TextField;
use crate::routes::Route;
use crate::services::use_services;
use crate::session::{SessionAction, use_session};
use broker_http::types::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

fn bind(state: &UseStateHandle<String>) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |value| state.set(value))
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let services = use_services();
    let session = use_session();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let session = session.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let auth = services.auth.clone();
            let landing = Route::for_path(&services.guard.routes().landing);
            let (email, password) = ((*email).clone(), (*password).clone());
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);
                match auth.login(&email, &password).await {
                    Ok(_) => {
                        error.set(None);
                        session.dispatch(SessionAction::SignedIn);
                        if let Some(navigator) = navigator {
                            navigator.push(&landing);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Login failed: {e}");
                        error.set(Some(user_message(&e)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <main>
            <h1>{"Sign in"}</h1>
            if let Some(notice) = &session.notice {
                <p>{notice.clone()}</p>
            }
            <form onsubmit={on_submit}>
                <TextField label="Email" input_type="email" value={(*email).clone()} on_change={bind(&email)} />
                <TextField label="Password" input_type="password" value={(*password).clone()} on_change={bind(&password)} />
                if let Some(error) = &*error {
                    <p>{error.clone()}</p>
                }
                <button type="submit" disabled={*submitting}>{"Sign in"}</button>
            </form>
            <Link<Route> to={Route::Register}>{"Create an account"}</Link<Route>>
        </main>
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let services = use_services();
    let session = use_session();
    let navigator = use_navigator();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
                error.set(Some("All fields are required".to_string()));
                return;
            }

            let auth = services.auth.clone();
            let landing = Route::for_path(&services.guard.routes().landing);
            let request = RegisterRequest {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                submitting.set(true);
                match auth.register(&request).await {
                    Ok(_) => {
                        error.set(None);
                        session.dispatch(SessionAction::SignedIn);
                        if let Some(navigator) = navigator {
                            navigator.push(&landing);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Registration failed: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <main>
            <h1>{"Create an account"}</h1>
            <form onsubmit={on_submit}>
                <TextField label="Name" value={(*name).clone()} on_change={bind(&name)} />
                <TextField label="Email" input_type="email" value={(*email).clone()} on_change={bind(&email)} />
                <TextField label="Password" input_type="password" value={(*password).clone()} on_change={bind(&password)} />
                if let Some(error) = &*error {
                    <p>{error.clone()}</p>
                }
                <button type="submit" disabled={*submitting}>{"Register"}</button>
            </form>
            <Link<Route> to={Route::Login}>{"Already registered? Sign in"}</Link<Route>>
        </main>
    }
}
