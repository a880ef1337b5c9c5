//! Session context for the component tree
//!
//! Wraps the core [`SessionStore`]. Its state is a signal, so components
//! reading it through the context re-render on every transition:
//! - starts in `Initializing` on both server and client (no hydration mismatch)
//! - bootstraps from localStorage once hydrated
//! - exposes the store for gateway calls and logout

use leptos::prelude::*;

use crate::core::api::Api;
use crate::core::models::Profile;
use crate::core::session::{Session, SessionStatus, SessionStore};

#[cfg(feature = "hydrate")]
pub type ClientTransport = crate::core::transport::FetchTransport;

#[cfg(not(feature = "hydrate"))]
pub type ClientTransport = offline::OfflineTransport;

/// Session store as used by the UI
pub type AppSession = SessionStore<ClientTransport>;

#[cfg(not(feature = "hydrate"))]
mod offline {
    use crate::core::error::TransportError;
    use crate::core::transport::{HttpRequest, HttpResponse, Transport};

    /// Server-side render never talks to the backend
    #[derive(Debug, Clone, Copy, Default)]
    pub struct OfflineTransport;

    impl Transport for OfflineTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            Err(TransportError(format!(
                "{} {} is not available during server rendering",
                request.method, request.path
            )))
        }
    }
}

#[cfg(feature = "hydrate")]
fn build_store() -> AppSession {
    use crate::core::config::client_api_base_url;
    use crate::core::storage::BrowserTokenStore;
    use crate::core::transport::FetchTransport;

    let base_url = client_api_base_url();
    leptos::logging::log!("API origin: {}", base_url);
    SessionStore::new(Api::new(FetchTransport::new(base_url)), BrowserTokenStore)
}

#[cfg(not(feature = "hydrate"))]
fn build_store() -> AppSession {
    use crate::core::storage::MemoryTokenStore;

    SessionStore::new(Api::new(offline::OfflineTransport), MemoryTokenStore::new())
}

/// Session context shared by the guard, the navbar and the pages
#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<AppSession>,
}

impl SessionContext {
    pub fn store(&self) -> AppSession {
        self.store.get_value()
    }

    /// Tracked status
    pub fn status(&self) -> SessionStatus {
        self.store.with_value(|store| store.watch(Session::status))
    }

    /// Tracked profile (if authenticated)
    pub fn profile(&self) -> Option<Profile> {
        self.store.with_value(|store| store.watch(|s| s.profile().cloned()))
    }

    pub fn logout(&self) {
        self.store.with_value(|store| store.logout());
    }
}

/// Provide the session context to the component tree
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext {
        store: StoredValue::new(build_store()),
    };

    // Restore the stored token once hydrated (client-side only)
    #[cfg(feature = "hydrate")]
    {
        use leptos::task::spawn_local;

        Effect::new(move |_| {
            let store = ctx.store();
            spawn_local(async move {
                let status = store.bootstrap().await;
                leptos::logging::log!("session bootstrap finished: {}", status);
            });
        });
    }

    provide_context(ctx);
    ctx
}

/// Get the session context from the component tree
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
