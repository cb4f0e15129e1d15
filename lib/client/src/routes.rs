//! Route table and navigation guard.
//!
//! The console's routes are a static table defined at process start.
//! The guard is a pure decision evaluated before every transition:
//! it reads credential presence from the [`Session`] and never performs
//! I/O, calls the API client, or mutates the session.

use tracing::info;

use crate::session::Session;

/// The public login page.
pub const LOGIN_PATH: &str = "/login";

/// The dashboard.
pub const HOME_PATH: &str = "/";

/// Host-environment navigation strategy. The gateway client uses it
/// for forced navigation (401, logout); the hosting application
/// decides what a path change actually does.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// Navigator that only records intent in the log. Suits hosts without
/// a page concept (CLI, batch jobs).
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn current_path(&self) -> String {
        String::new()
    }

    fn navigate(&self, path: &str) {
        info!("navigation requested: {path}");
    }
}

/// A console route.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

/// Guard verdict for a route transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Static route table, immutable after construction.
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// The admin console's routes. Everything except the login page
    /// requires a credential.
    pub fn console() -> Self {
        Self {
            routes: vec![
                Route { path: LOGIN_PATH, name: "login", requires_auth: false },
                Route { path: HOME_PATH, name: "dashboard", requires_auth: true },
                Route { path: "/config", name: "config", requires_auth: true },
                Route { path: "/messages", name: "messages", requires_auth: true },
                Route { path: "/commands", name: "commands", requires_auth: true },
            ],
        }
    }

    pub fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Decide a transition to `target`. Unknown paths require auth.
    pub fn check(&self, target: &str, session: &Session) -> GuardDecision {
        let requires_auth = self.find(target).map_or(true, |r| r.requires_auth);
        let authenticated = session.is_authenticated();

        if requires_auth && !authenticated {
            GuardDecision::Redirect(LOGIN_PATH)
        } else if target == LOGIN_PATH && authenticated {
            GuardDecision::Redirect(HOME_PATH)
        } else {
            GuardDecision::Proceed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::session::{Credential, MemoryStore};

    fn session(authenticated: bool) -> Session {
        let session = Session::new(Arc::new(MemoryStore::new()));
        if authenticated {
            session
                .set(Credential {
                    access_token: "tok".into(),
                    token_type: "bearer".into(),
                })
                .unwrap();
        }
        session
    }

    #[test]
    fn protected_route_without_credential_redirects_to_login() {
        let table = RouteTable::console();
        let session = session(false);
        for path in ["/", "/config", "/messages", "/commands"] {
            assert_eq!(
                table.check(path, &session),
                GuardDecision::Redirect(LOGIN_PATH),
                "path {path}"
            );
        }
    }

    #[test]
    fn protected_route_with_credential_proceeds() {
        let table = RouteTable::console();
        let session = session(true);
        for path in ["/", "/config", "/messages", "/commands"] {
            assert_eq!(table.check(path, &session), GuardDecision::Proceed, "path {path}");
        }
    }

    #[test]
    fn login_with_credential_redirects_home() {
        let table = RouteTable::console();
        assert_eq!(
            table.check(LOGIN_PATH, &session(true)),
            GuardDecision::Redirect(HOME_PATH)
        );
    }

    #[test]
    fn login_without_credential_proceeds() {
        let table = RouteTable::console();
        assert_eq!(table.check(LOGIN_PATH, &session(false)), GuardDecision::Proceed);
    }

    #[test]
    fn unknown_path_requires_auth() {
        let table = RouteTable::console();
        assert_eq!(
            table.check("/unknown", &session(false)),
            GuardDecision::Redirect(LOGIN_PATH)
        );
        assert_eq!(table.check("/unknown", &session(true)), GuardDecision::Proceed);
    }

    #[test]
    fn console_table_shape() {
        let table = RouteTable::console();
        assert_eq!(table.routes().len(), 5);
        assert!(!table.find(LOGIN_PATH).unwrap().requires_auth);
        assert!(table.find("/messages").unwrap().requires_auth);
    }
}
