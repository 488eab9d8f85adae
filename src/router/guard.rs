// ============================================================================
// GUARD - runs before every navigation
// ============================================================================

use crate::router::routes::{RouteMeta, DASHBOARD_PATH, LOGIN_PATH, UNAUTHORIZED_PATH};
use crate::services::{ApiClient, Transport};
use crate::state::{AuthSession, AuthState};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NavigationDecision {
    Allow,
    Redirect(String),
}

/// `/login?redirect=<full path>`
pub fn login_redirect(full_path: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("redirect", full_path)
        .finish();
    format!("{}?{}", LOGIN_PATH, query)
}

/// The three access rules, checked in order against an initialized session
pub fn check(meta: &RouteMeta, full_path: &str, session: &AuthSession) -> NavigationDecision {
    if meta.requires_auth && !session.is_authenticated() {
        return NavigationDecision::Redirect(login_redirect(full_path));
    }

    if let Some(role) = meta.role {
        if session.user_type != Some(role) {
            return NavigationDecision::Redirect(UNAUTHORIZED_PATH.to_string());
        }
    }

    if meta.guest_only && session.is_authenticated() {
        return NavigationDecision::Redirect(DASHBOARD_PATH.to_string());
    }

    NavigationDecision::Allow
}

/// Initializes the auth state on first use, then applies [`check`]
pub async fn before_each<T: Transport>(
    meta: &RouteMeta,
    full_path: &str,
    auth: &AuthState,
    client: &ApiClient<T>,
) -> NavigationDecision {
    if !auth.is_initialized() {
        auth.initialize(client).await;
    }

    let decision = check(meta, full_path, &auth.snapshot());
    if let NavigationDecision::Redirect(to) = &decision {
        log::info!("🚧 [ROUTER] {} -> {}", full_path, to);
    }
    decision
}
