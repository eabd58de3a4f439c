//! Admin session plumbing for the web adapter.
//!
//! Sessions live in process memory and are keyed by a random id carried in a
//! browser-session cookie, so they end when the browser session does.
//! Password checks use constant-time comparison to mitigate timing attacks.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use subtle::ConstantTimeEq;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::admin::AdminSession;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "wedding_admin_session";

/// Path the session cookie is scoped to.
const SESSION_COOKIE_PATH: &str = "/admin";

struct SessionEntry {
    session: AdminSession,
    last_seen: Instant,
}

/// In-memory map of live admin sessions. Entries idle longer than
/// `idle_timeout` are treated as logged out and swept on the next write.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
    idle_timeout: Duration,
}

/// Session looked up for one request.
pub struct LoadedSession {
    pub id: Option<Uuid>,
    pub session: AdminSession,
    /// The id already referred to a logged-in session when loaded.
    authenticated: bool,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Look up the session referenced by the request cookies.
    pub async fn load(&self, jar: &CookieJar) -> LoadedSession {
        let id = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

        let session = match id {
            Some(id) => self
                .sessions
                .read()
                .await
                .get(&id)
                .filter(|entry| entry.last_seen.elapsed() < self.idle_timeout)
                .map(|entry| entry.session.clone())
                .unwrap_or_default(),
            None => AdminSession::default(),
        };

        LoadedSession {
            id,
            authenticated: session.is_logged_in(),
            session,
        }
    }

    /// Persist the state a command left the session in.
    ///
    /// A logged-in session is stored and its cookie (re)issued. Logging in
    /// always mints a new id, so an id planted before login is never
    /// promoted. A logged-out session is evicted and its cookie removed.
    pub async fn save(&self, jar: CookieJar, loaded: LoadedSession) -> CookieJar {
        let LoadedSession {
            id,
            session,
            authenticated,
        } = loaded;

        if session.is_logged_in() {
            let mut sessions = self.sessions.write().await;
            let id = match id {
                Some(id) if authenticated => id,
                previous => {
                    if let Some(previous) = previous {
                        sessions.remove(&previous);
                    }
                    Uuid::new_v4()
                }
            };

            sessions.retain(|_, entry| entry.last_seen.elapsed() < self.idle_timeout);
            sessions.insert(
                id,
                SessionEntry {
                    session,
                    last_seen: Instant::now(),
                },
            );
            tracing::debug!("{} admin session(s) live", sessions.len());

            jar.add(session_cookie(id.to_string()))
        } else {
            if let Some(id) = id {
                self.sessions.write().await.remove(&id);
            }
            jar.remove(session_cookie(String::new()))
        }
    }
}

fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path(SESSION_COOKIE_PATH)
        .http_only(true)
        .same_site(SameSite::Strict)
        .build()
}

/// Perform constant-time string comparison.
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    a_bytes.ct_eq(b_bytes).into()
}
