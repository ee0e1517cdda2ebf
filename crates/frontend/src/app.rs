use crate::config::AppConfig;
use crate::routes::{Route, UnauthorizedRedirect, switch};
use crate::services::AppServices;
use crate::session::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let services = use_memo((), |_| AppServices::new(AppConfig::load()));

    match &*services {
        Ok(services) => html! {
            <ContextProvider<AppServices> context={services.clone()}>
                <BrowserRouter>
                    <SessionProvider>
                        <UnauthorizedRedirect />
                        <Switch<Route> render={switch} />
                    </SessionProvider>
                </BrowserRouter>
            </ContextProvider<AppServices>>
        },
        Err(e) => {
            tracing::error!("Failed to start the client: {e}");
            html! {
                <p>{format!("The admin client could not start: {e}")}</p>
            }
        }
    }
}
