//! Session context and provider

use crate::config::AppConfig;
use crate::services::use_services;
use broker_core::SessionState;
use gloo::timers::callback::Interval;
use std::rc::Rc;
use yew::prelude::*;

/// Session context data
#[derive(Clone, Debug, PartialEq)]
pub struct SessionContextData {
    pub state: SessionState,
    pub notice: Option<String>,
}

/// Session context actions
pub enum SessionAction {
    SignedIn,
    SignedOut,
    /// The credential expired or the backend rejected it
    Ended,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionContextData>;

impl Reducible for SessionContextData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::SignedIn => Rc::new(Self {
                state: SessionState::Authenticated,
                notice: None,
            }),
            SessionAction::SignedOut => Rc::new(Self {
                state: SessionState::Anonymous,
                notice: None,
            }),
            SessionAction::Ended => {
                if self.state == SessionState::Anonymous {
                    return self;
                }
                Rc::new(Self {
                    state: SessionState::Anonymous,
                    notice: Some("Session expired. Please login again.".to_string()),
                })
            }
        }
    }
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let services = use_services();

    // Seed from storage once at startup
    let session = {
        let guard = services.guard.clone();
        use_reducer(move || SessionContextData {
            state: guard.state(),
            notice: None,
        })
    };

    // Notice expiry while idle on a page, not only on navigation
    {
        let session = session.clone();
        let guard = services.guard.clone();
        use_effect_with(session.state, move |state| {
            let interval = (*state == SessionState::Authenticated).then(move || {
                Interval::new(AppConfig::SESSION_CHECK_INTERVAL_MS, move || {
                    if !guard.is_authenticated() {
                        tracing::info!("Session expired while idle");
                        session.dispatch(SessionAction::Ended);
                    }
                })
            });
            move || drop(interval)
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}
