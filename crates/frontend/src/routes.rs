//! Routes and the navigation guard

use crate::pages::{
    Dashboard, LoginPage, MortgageList, NotFound, ProfilePage, RealEstateList, RegisterPage,
    RentalList, Shell,
};
use crate::services::use_services;
use crate::session::{SessionAction, use_session};
use broker_core::{Credentials, Decision, SessionGuard};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/app/dashboard")]
    Dashboard,
    #[at("/app/real-estate")]
    RealEstate,
    #[at("/app/rentals")]
    Rentals,
    #[at("/app/mortgages")]
    Mortgages,
    #[at("/app/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Exhaustive so that a new variant has to pick a side
    pub fn is_protected(&self) -> bool {
        match self {
            Self::Dashboard | Self::RealEstate | Self::Rentals | Self::Mortgages | Self::Profile => {
                true
            }
            Self::Home | Self::Login | Self::Register | Self::NotFound => false,
        }
    }

    /// Route for a path produced by the guard
    pub fn for_path(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::NotFound)
    }
}

pub fn switch(route: Route) -> Html {
    html! { <Guarded {route} /> }
}

#[derive(Properties, PartialEq)]
struct GuardedProps {
    route: Route,
}

/// Evaluates the guard for every render of a route
#[function_component(Guarded)]
fn guarded(props: &GuardedProps) -> Html {
    let services = use_services();
    // Subscribe so that a session change re-runs the guard
    let _session = use_session();

    match decide(&props.route, &services.guard) {
        Decision::Redirect(target) => html! { <Redirect<Route> to={Route::for_path(&target)} /> },
        Decision::Proceed(_) => render(&props.route),
    }
}

/// Guard decision for entering `route`. `/` always redirects, to the landing
/// route when signed in and to login otherwise.
pub fn decide<T: Credentials>(route: &Route, guard: &SessionGuard<T>) -> Decision {
    match route {
        Route::Home => match guard.guard_protected_route(&guard.routes().landing) {
            Decision::Proceed(landing) => Decision::Redirect(landing),
            redirect => redirect,
        },
        route if route.is_protected() => guard.guard_protected_route(&route.to_path()),
        route => guard.guard_public_only_route(&route.to_path()),
    }
}

fn render(route: &Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::Dashboard => html! { <Shell><Dashboard /></Shell> },
        Route::RealEstate => html! { <Shell><RealEstateList /></Shell> },
        Route::Rentals => html! { <Shell><RentalList /></Shell> },
        Route::Mortgages => html! { <Shell><MortgageList /></Shell> },
        Route::Profile => html! { <Shell><ProfilePage /></Shell> },
        Route::Home | Route::NotFound => html! { <NotFound /> },
    }
}

/// Installs the reaction to backend authorization failures
#[function_component(UnauthorizedRedirect)]
pub fn unauthorized_redirect() -> Html {
    let services = use_services();
    let session = use_session();
    let navigator = use_navigator();

    use_effect_with((), move |_| {
        let handler = {
            let services = services.clone();
            Callback::from(move |_| {
                let current = web_sys::window()
                    .and_then(|w| w.location().pathname().ok())
                    .unwrap_or_default();

                services.caches.clear();
                let decision = services.guard.on_authorization_failure(&current);
                session.dispatch(SessionAction::Ended);

                if let (Decision::Redirect(target), Some(navigator)) = (decision, &navigator) {
                    navigator.push(&Route::for_path(&target));
                }
            })
        };
        services.set_unauthorized_handler(Some(handler));

        move || services.set_unauthorized_handler(None)
    });

    Html::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use broker_core::{ManualClock, MemoryStore, TokenStore};
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    type Store = TokenStore<MemoryStore, ManualClock>;

    const PROTECTED: [Route; 5] = [
        Route::Dashboard,
        Route::RealEstate,
        Route::Rentals,
        Route::Mortgages,
        Route::Profile,
    ];

    fn guard() -> (SessionGuard<Rc<Store>>, Rc<Store>) {
        let store = Rc::new(TokenStore::with_clock(
            MemoryStore::new(),
            ManualClock::new(1_700_000_000_000),
        ));
        (SessionGuard::new(Rc::clone(&store)), store)
    }

    #[wasm_bindgen_test]
    fn test_protected_routes_redirect_anonymous_to_login() {
        let (guard, _) = guard();
        for route in PROTECTED {
            assert!(route.is_protected(), "{route:?}");
            assert_eq!(
                decide(&route, &guard),
                Decision::Redirect("/login".to_string()),
                "{route:?}"
            );
        }
    }

    #[wasm_bindgen_test]
    fn test_protected_routes_proceed_when_signed_in() {
        let (guard, store) = guard();
        store.set("tok", 60).unwrap();
        for route in PROTECTED {
            assert_eq!(decide(&route, &guard), Decision::Proceed(route.to_path()));
        }
    }

    #[wasm_bindgen_test]
    fn test_home_resolves_to_landing_or_login() {
        let (guard, store) = guard();
        assert_eq!(
            decide(&Route::Home, &guard),
            Decision::Redirect("/login".to_string())
        );

        store.set("tok", 60).unwrap();
        assert_eq!(
            decide(&Route::Home, &guard),
            Decision::Redirect("/app/dashboard".to_string())
        );
        assert_eq!(Route::for_path("/app/dashboard"), Route::Dashboard);
    }

    #[wasm_bindgen_test]
    fn test_public_only_routes_bounce_signed_in_users() {
        let (guard, store) = guard();
        assert_eq!(
            decide(&Route::Login, &guard),
            Decision::Proceed("/login".to_string())
        );
        assert_eq!(
            decide(&Route::Register, &guard),
            Decision::Proceed("/register".to_string())
        );

        store.set("tok", 60).unwrap();
        for route in [Route::Login, Route::Register] {
            assert!(!route.is_protected());
            assert_eq!(
                decide(&route, &guard),
                Decision::Redirect("/app/dashboard".to_string())
            );
        }
        // Not public-only, so reachable either way
        assert_eq!(
            decide(&Route::NotFound, &guard),
            Decision::Proceed("/404".to_string())
        );
    }
}
