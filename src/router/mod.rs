// ============================================================================
// ROUTER - path -> page resolution + guarded navigation
// ============================================================================

pub mod guard;
pub mod routes;

pub use guard::{before_each, check, login_redirect, NavigationDecision};
pub use routes::{Page, RouteMeta, RouteTarget, DASHBOARD_PATH, LOGIN_PATH, UNAUTHORIZED_PATH};

use crate::models::UserType;
use crate::services::{ApiClient, Transport};
use crate::state::AuthState;
use routes::{flatten, path_segments, Route, RouteDef, ROUTES};

/// Redirect chains longer than this are treated as a loop
const MAX_REDIRECTS: usize = 8;

/// Where to go after signing in: `redirect` when it stays on this origin,
/// the dashboard otherwise. Browsers read `/\host` like `//host`.
pub fn post_login_target(redirect: Option<String>) -> String {
    redirect
        .filter(|path| {
            path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
        })
        .unwrap_or_else(|| DASHBOARD_PATH.to_string())
}

/// `pathname` + `search`, split
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Location {
    pub fn parse(full_path: &str) -> Self {
        let (path, search) = match full_path.split_once('?') {
            Some((path, search)) => (path, search),
            None => (full_path, ""),
        };
        let path = path.split('#').next().unwrap_or_default();
        let search = search.split('#').next().unwrap_or_default();

        let segments = path_segments(path);
        let path = if segments.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", segments.join("/"))
        };

        let query = url::form_urlencoded::parse(search.as_bytes())
            .into_owned()
            .collect();

        Self { path, query }
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Normalized path with the query re-encoded
    pub fn full_path(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let search = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        format!("{}?{}", self.path, search)
    }
}

/// A location bound to the page it renders
#[derive(Clone, PartialEq, Debug)]
pub struct ResolvedRoute {
    pub page: Page,
    pub meta: RouteMeta,
    pub params: Vec<(String, String)>,
    pub location: Location,
}

impl ResolvedRoute {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn full_path(&self) -> String {
        self.location.full_path()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Resolution {
    Matched(ResolvedRoute),
    Redirect(String),
}

/// Outcome of a guarded navigation
#[derive(Clone, PartialEq, Debug)]
pub struct Navigation {
    pub route: ResolvedRoute,
    /// The URL bar must be replaced with `route.full_path()`
    pub redirected: bool,
}

pub struct Router {
    routes: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self::with_routes(ROUTES)
    }

    pub fn with_routes(defs: &[RouteDef]) -> Self {
        Self {
            routes: flatten(defs),
        }
    }

    /// Most specific matching route; unknown paths render `NotFound`.
    /// Redirect routes (`/`, `/dashboard`) resolve before any guard runs.
    pub fn resolve(&self, full_path: &str, user_type: Option<UserType>) -> Resolution {
        let location = Location::parse(full_path);
        let segments = path_segments(&location.path);

        let best = self
            .routes
            .iter()
            .filter_map(|route| route.matches(&segments).map(|params| (route, params)))
            .max_by(|(a, _), (b, _)| {
                // ties keep the first declared route
                a.specificity().cmp(&b.specificity()).then(std::cmp::Ordering::Greater)
            });

        match best {
            Some((route, params)) => match route.target {
                RouteTarget::Redirect(target) => Resolution::Redirect(target.resolve(user_type)),
                RouteTarget::Page(page) => Resolution::Matched(ResolvedRoute {
                    page,
                    meta: route.meta,
                    params,
                    location,
                }),
            },
            None => Resolution::Matched(ResolvedRoute {
                page: Page::NotFound,
                meta: RouteMeta::default(),
                params: Vec::new(),
                location,
            }),
        }
    }

    /// Resolve and guard `full_path`, following redirects until a page is
    /// allowed to render.
    pub async fn navigate<T: Transport>(
        &self,
        full_path: &str,
        auth: &AuthState,
        client: &ApiClient<T>,
    ) -> Navigation {
        let mut target = full_path.to_string();
        let mut redirected = false;

        for _ in 0..MAX_REDIRECTS {
            let route = match self.resolve(&target, auth.current_user_type()) {
                Resolution::Redirect(to) => {
                    target = to;
                    redirected = true;
                    continue;
                }
                Resolution::Matched(route) => route,
            };

            match before_each(&route.meta, &route.full_path(), auth, client).await {
                NavigationDecision::Allow => {
                    log::debug!("🧭 [ROUTER] {} -> {}", route.full_path(), route.page);
                    return Navigation { route, redirected };
                }
                NavigationDecision::Redirect(to) => {
                    target = to;
                    redirected = true;
                }
            }
        }

        log::error!("❌ [ROUTER] Redirect loop starting at {}", full_path);
        Navigation {
            route: ResolvedRoute {
                page: Page::NotFound,
                meta: RouteMeta::default(),
                params: Vec::new(),
                location: Location::parse(&target),
            },
            redirected: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::client_with_storage;
    use routes::RedirectTarget;
    use crate::utils::MemoryStore;
    use serde_json::json;
    use std::rc::Rc;

    fn matched(resolution: Resolution) -> ResolvedRoute {
        match resolution {
            Resolution::Matched(route) => route,
            Resolution::Redirect(to) => panic!("unexpected redirect to {}", to),
        }
    }

    #[test]
    fn location_normalizes_path_and_decodes_query() {
        let location = Location::parse("/dashboard/worker/?redirect=%2Fx&page=2#top");
        assert_eq!(location.path, "/dashboard/worker");
        assert_eq!(location.query_value("redirect"), Some("/x"));
        assert_eq!(location.query_value("page"), Some("2"));
        assert_eq!(location.full_path(), "/dashboard/worker?redirect=%2Fx&page=2");
        assert_eq!(Location::parse("").path, "/");
    }

    #[test]
    fn post_login_target_stays_on_this_origin() {
        assert_eq!(post_login_target(None), "/dashboard");
        for foreign in ["//evil.com", "/\\evil.com", "https://x", "dashboard", ""] {
            assert_eq!(post_login_target(Some(foreign.to_string())), "/dashboard", "{}", foreign);
        }
        assert_eq!(
            post_login_target(Some("/dashboard/customer/cars?page=2".to_string())),
            "/dashboard/customer/cars?page=2"
        );
    }

    #[test]
    fn static_segments_win_over_params() {
        let router = Router::new();

        let add = matched(router.resolve("/dashboard/customer/cars/add", None));
        assert_eq!(add.page, Page::CustomerCarAdd);
        assert!(add.params.is_empty());

        let detail = matched(router.resolve("/dashboard/customer/cars/ABC123", None));
        assert_eq!(detail.page, Page::CustomerCarDetail);
        assert_eq!(detail.param("id"), Some("ABC123"));

        let pending = matched(router.resolve("/dashboard/worker/orders/pending", None));
        assert_eq!(pending.page, Page::WorkerPendingOrders);
    }

    #[test]
    fn nested_params_are_extracted() {
        let router = Router::new();
        let route = matched(router.resolve("/dashboard/customer/cars/c-9/maintenance-history?page=3", None));
        assert_eq!(route.page, Page::CustomerCarMaintenance);
        assert_eq!(route.param("id"), Some("c-9"));
        assert_eq!(route.location.query_value("page"), Some("3"));
        assert_eq!(route.meta.role, Some(UserType::Customer));
    }

    #[test]
    fn unknown_paths_render_not_found() {
        let router = Router::new();
        for path in ["/nope", "/dashboard/customer/cars/a/b/c", "/dashboard/pilot"] {
            let route = matched(router.resolve(path, Some(UserType::Customer)));
            assert_eq!(route.page, Page::NotFound, "{}", path);
            assert_eq!(route.meta, RouteMeta::default());
        }
    }

    #[test]
    fn root_and_dashboard_redirect() {
        let router = Router::new();
        assert_eq!(router.resolve("/", None), Resolution::Redirect("/login".to_string()));
        assert_eq!(
            router.resolve("/dashboard", Some(UserType::Administrator)),
            Resolution::Redirect("/dashboard/admin".to_string())
        );
        assert_eq!(
            router.resolve("/dashboard/", Some(UserType::Customer)),
            Resolution::Redirect("/dashboard/customer".to_string())
        );
        assert_eq!(router.resolve("/dashboard", None), Resolution::Redirect("/unauthorized".to_string()));
    }

    fn signed_in(user_type: &str) -> (AuthState, ApiClient<crate::services::testing::MockTransport>) {
        let storage = Rc::new(MemoryStore::with_entries([("token", "t"), ("userType", user_type)]));
        let auth = AuthState::new(storage.clone());
        let client = client_with_storage(storage);
        client.transport().respond(200, json!({"user_type": user_type}));
        (auth, client)
    }

    #[tokio::test]
    async fn anonymous_navigation_lands_on_login_with_redirect() {
        let storage = Rc::new(MemoryStore::new());
        let auth = AuthState::new(storage.clone());
        let client = client_with_storage(storage);

        let nav = Router::new().navigate("/dashboard/worker/logs", &auth, &client).await;

        assert!(nav.redirected);
        assert_eq!(nav.route.page, Page::Login);
        assert_eq!(nav.route.location.query_value("redirect"), Some("/dashboard/worker/logs"));
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn signed_in_user_visiting_login_reaches_own_dashboard() {
        let (auth, client) = signed_in("worker");

        let nav = Router::new().navigate("/login", &auth, &client).await;

        assert!(nav.redirected);
        assert_eq!(nav.route.page, Page::WorkerHome);
        assert_eq!(nav.route.full_path(), "/dashboard/worker");
    }

    #[tokio::test]
    async fn other_roles_pages_are_unauthorized() {
        let (auth, client) = signed_in("customer");

        let nav = Router::new().navigate("/dashboard/admin/wages", &auth, &client).await;

        assert_eq!(nav.route.page, Page::Unauthorized);
        assert!(nav.redirected);
    }

    #[tokio::test]
    async fn allowed_page_is_not_redirected() {
        let (auth, client) = signed_in("administrator");

        let nav = Router::new().navigate("/register/worker", &auth, &client).await;

        assert!(!nav.redirected);
        assert_eq!(nav.route.page, Page::RegisterWorker);
    }

    const OPEN: RouteMeta = RouteMeta {
        requires_auth: false,
        role: None,
        guest_only: false,
    };

    const PING_PONG: &[RouteDef] = &[
        RouteDef {
            path: "/ping",
            page: None,
            redirect: Some(RedirectTarget::Path("/pong")),
            meta: OPEN,
            children: &[],
        },
        RouteDef {
            path: "/pong",
            page: None,
            redirect: Some(RedirectTarget::Path("/ping")),
            meta: OPEN,
            children: &[],
        },
    ];

    #[tokio::test]
    async fn redirect_loops_stop_at_not_found() {
        let storage = Rc::new(MemoryStore::new());
        let auth = AuthState::new(storage.clone());
        let client = client_with_storage(storage);

        let nav = Router::with_routes(PING_PONG).navigate("/ping", &auth, &client).await;

        assert!(nav.redirected);
        assert_eq!(nav.route.page, Page::NotFound);
        assert_eq!(nav.route.meta, RouteMeta::default());
        assert_eq!(nav.route.full_path(), "/ping");
        assert!(client.transport().calls().is_empty());
    }
}
