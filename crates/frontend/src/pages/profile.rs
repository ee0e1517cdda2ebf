//! Signed-in user profile page

use super::user_message;
use crate::services::use_services;
use broker_core::UserProfile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let services = use_services();
    let profile = use_state(|| None::<UserProfile>);
    let error = use_state(|| None::<String>);

    {
        let profile = profile.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match services.profile.me().await {
                    Ok(me) => profile.set(Some(me)),
                    Err(e) => {
                        tracing::warn!("Failed to load profile: {e}");
                        error.set(Some(user_message(&e)));
                    }
                }
            });
        });
    }

    let body = match (&*profile, &*error) {
        (Some(me), _) => html! {
            <dl>
                <dt>{"Name"}</dt><dd>{me.name.clone()}</dd>
                <dt>{"Email"}</dt><dd>{me.email.clone()}</dd>
                if let Some(role) = &me.role {
                    <dt>{"Role"}</dt><dd>{role.clone()}</dd>
                }
                if let Some(phone) = &me.phone {
                    <dt>{"Phone"}</dt><dd>{phone.clone()}</dd>
                }
                if let Some(created) = me.created_at {
                    <dt>{"Member since"}</dt><dd>{created.format("%Y-%m-%d").to_string()}</dd>
                }
            </dl>
        },
        (None, Some(message)) => html! { <p>{message.clone()}</p> },
        (None, None) => html! { <p>{"Loading..."}</p> },
    };

    html! {
        <section>
            <h1>{"Profile"}</h1>
            {body}
        </section>
    }
}
