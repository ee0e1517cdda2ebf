//! Application services, constructed once and shared through context

use crate::config::AppConfig;
use crate::storage::LocalStorage;
use broker_core::{
    ListStore, Mortgage, RealEstate, Rental, SessionGuard, SystemClock, TokenStore,
};
use broker_http::{AuthApi, ChatApi, ClientBuilder, ClientError, ListingApi, ProfileApi};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

pub type BrowserTokenStore = TokenStore<LocalStorage, SystemClock>;
pub type BrowserGuard = SessionGuard<Rc<BrowserTokenStore>>;

/// Lists fetched during this session
#[derive(Default)]
pub struct ListCaches {
    pub real_estate: RefCell<ListStore<RealEstate>>,
    pub rentals: RefCell<ListStore<Rental>>,
    pub mortgages: RefCell<ListStore<Mortgage>>,
}

impl ListCaches {
    pub fn clear(&self) {
        self.real_estate.borrow_mut().clear();
        self.rentals.borrow_mut().clear();
        self.mortgages.borrow_mut().clear();
    }
}

#[derive(Clone)]
pub struct AppServices {
    pub config: Rc<AppConfig>,
    pub tokens: Rc<BrowserTokenStore>,
    pub guard: Rc<BrowserGuard>,
    pub auth: AuthApi,
    pub listings: ListingApi,
    pub profile: ProfileApi,
    pub chat: ChatApi,
    pub caches: Rc<ListCaches>,
    on_unauthorized: Rc<RefCell<Option<Callback<()>>>>,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tokens, &other.tokens)
    }
}

impl AppServices {
    pub fn new(config: AppConfig) -> Result<Self, ClientError> {
        let tokens = Rc::new(TokenStore::with_config(
            LocalStorage,
            SystemClock,
            config.session.clone(),
        ));
        let guard = Rc::new(SessionGuard::with_routes(
            Rc::clone(&tokens),
            config.routes.clone(),
        ));

        let public = ClientBuilder::new()
            .base_url(config.api_base_url.clone())
            .build_public()?;

        // Filled in by the router once a navigator exists
        let on_unauthorized = Rc::new(RefCell::new(None::<Callback<()>>));
        let slot = Rc::clone(&on_unauthorized);
        let authenticated = public
            .authenticate(tokens.clone())
            .with_unauthorized_hook(Rc::new(move || {
                let handler = slot.borrow().clone();
                if let Some(handler) = handler {
                    handler.emit(());
                }
            }));

        Ok(Self {
            auth: AuthApi::new(public, tokens.clone())
                .with_default_ttl(config.session.default_ttl_secs),
            listings: ListingApi::new(authenticated.clone()),
            profile: ProfileApi::new(authenticated.clone()),
            chat: ChatApi::new(authenticated),
            caches: Rc::new(ListCaches::default()),
            config: Rc::new(config),
            tokens,
            guard,
            on_unauthorized,
        })
    }

    pub fn set_unauthorized_handler(&self, handler: Option<Callback<()>>) {
        *self.on_unauthorized.borrow_mut() = handler;
    }

    /// End the session and drop everything fetched under it
    pub fn logout(&self) {
        self.auth.logout();
        self.caches.clear();
    }
}

/// Hook to access application services
#[hook]
pub fn use_services() -> AppServices {
    use_context::<AppServices>()
        .expect("AppServices not found. Make sure to wrap your component with the services provider")
}
