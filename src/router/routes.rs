// ============================================================================
// ROUTES - client-side route table
// ============================================================================
// Declared as a tree so children inherit their parent's meta, then
// flattened once into match patterns.
// ============================================================================

use std::fmt;

use crate::models::UserType;

/// Every screen the shell can render
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Page {
    Login,
    RegisterCustomer,
    RegisterWorker,
    RegisterAdmin,

    CustomerHome,
    CustomerCars,
    CustomerCarAdd,
    CustomerCarDetail,
    CustomerCarMaintenance,
    CustomerOrderCreate,
    CustomerOrders,
    CustomerOrderProcedures,

    WorkerHome,
    WorkerOrders,
    WorkerPendingOrders,
    WorkerOrderProcedures,
    WorkerEarnings,
    WorkerMonthlyEarnings,
    WorkerLogs,

    AdminHome,
    AdminUsers,
    AdminWages,
    AdminCarStatistics,

    Unauthorized,
    NotFound,
}

impl Page {
    /// Stable identifier, used as the outlet's `data-page`
    pub fn name(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::RegisterCustomer => "register-customer",
            Page::RegisterWorker => "register-worker",
            Page::RegisterAdmin => "register-admin",
            Page::CustomerHome => "customer-home",
            Page::CustomerCars => "customer-cars",
            Page::CustomerCarAdd => "customer-car-add",
            Page::CustomerCarDetail => "customer-car-detail",
            Page::CustomerCarMaintenance => "customer-car-maintenance",
            Page::CustomerOrderCreate => "customer-order-create",
            Page::CustomerOrders => "customer-orders",
            Page::CustomerOrderProcedures => "customer-order-procedures",
            Page::WorkerHome => "worker-home",
            Page::WorkerOrders => "worker-orders",
            Page::WorkerPendingOrders => "worker-pending-orders",
            Page::WorkerOrderProcedures => "worker-order-procedures",
            Page::WorkerEarnings => "worker-earnings",
            Page::WorkerMonthlyEarnings => "worker-monthly-earnings",
            Page::WorkerLogs => "worker-logs",
            Page::AdminHome => "admin-home",
            Page::AdminUsers => "admin-users",
            Page::AdminWages => "admin-wages",
            Page::AdminCarStatistics => "admin-car-statistics",
            Page::Unauthorized => "unauthorized",
            Page::NotFound => "not-found",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Sign in",
            Page::RegisterCustomer => "Create a customer account",
            Page::RegisterWorker => "Register a worker",
            Page::RegisterAdmin => "Register an administrator",
            Page::CustomerHome => "Welcome",
            Page::CustomerCars => "My cars",
            Page::CustomerCarAdd => "Add a car",
            Page::CustomerCarDetail => "Car details",
            Page::CustomerCarMaintenance => "Maintenance history",
            Page::CustomerOrderCreate => "New repair order",
            Page::CustomerOrders => "My orders",
            Page::CustomerOrderProcedures | Page::WorkerOrderProcedures => "Order procedures",
            Page::WorkerHome => "Workbench",
            Page::WorkerOrders => "My orders",
            Page::WorkerPendingOrders => "Pending orders",
            Page::WorkerEarnings => "Earnings history",
            Page::WorkerMonthlyEarnings => "Monthly earnings",
            Page::WorkerLogs => "Work logs",
            Page::AdminHome => "Administration",
            Page::AdminUsers => "Users",
            Page::AdminWages => "Wages",
            Page::AdminCarStatistics => "Car statistics",
            Page::Unauthorized => "Access denied",
            Page::NotFound => "Page not found",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Navigation requirements attached to a route
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub role: Option<UserType>,
    pub guest_only: bool,
}

impl RouteMeta {
    const NONE: RouteMeta = RouteMeta {
        requires_auth: false,
        role: None,
        guest_only: false,
    };

    const fn authenticated() -> Self {
        RouteMeta {
            requires_auth: true,
            ..Self::NONE
        }
    }

    const fn guest() -> Self {
        RouteMeta {
            guest_only: true,
            ..Self::NONE
        }
    }

    const fn role(role: UserType) -> Self {
        RouteMeta {
            role: Some(role),
            ..Self::NONE
        }
    }

    /// `self` is the parent; flags accumulate, the innermost role wins
    pub fn merge(self, child: RouteMeta) -> RouteMeta {
        RouteMeta {
            requires_auth: self.requires_auth || child.requires_auth,
            role: child.role.or(self.role),
            guest_only: self.guest_only || child.guest_only,
        }
    }
}

/// Where a redirect-only route sends the user
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RedirectTarget {
    Path(&'static str),
    /// Landing page of the stored role, `/unauthorized` when there is none
    RoleDashboard,
}

impl RedirectTarget {
    pub fn resolve(&self, user_type: Option<UserType>) -> String {
        match self {
            RedirectTarget::Path(path) => path.to_string(),
            RedirectTarget::RoleDashboard => user_type
                .map(|role| role.dashboard_path())
                .unwrap_or(UNAUTHORIZED_PATH)
                .to_string(),
        }
    }
}

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

pub struct RouteDef {
    pub path: &'static str,
    pub page: Option<Page>,
    pub redirect: Option<RedirectTarget>,
    pub meta: RouteMeta,
    pub children: &'static [RouteDef],
}

const fn page(path: &'static str, page: Page) -> RouteDef {
    RouteDef {
        path,
        page: Some(page),
        redirect: None,
        meta: RouteMeta::NONE,
        children: &[],
    }
}

const CUSTOMER_ROUTES: &[RouteDef] = &[
    page("", Page::CustomerHome),
    page("cars", Page::CustomerCars),
    page("cars/add", Page::CustomerCarAdd),
    page("cars/:id", Page::CustomerCarDetail),
    page("cars/:id/maintenance-history", Page::CustomerCarMaintenance),
    page("orders/create", Page::CustomerOrderCreate),
    page("orders", Page::CustomerOrders),
    page("orders/:order_id/procedures", Page::CustomerOrderProcedures),
];

const WORKER_ROUTES: &[RouteDef] = &[
    page("", Page::WorkerHome),
    page("orders", Page::WorkerOrders),
    page("orders/pending", Page::WorkerPendingOrders),
    page("orders/:order_id/procedures", Page::WorkerOrderProcedures),
    page("earnings", Page::WorkerEarnings),
    page("earnings/monthly", Page::WorkerMonthlyEarnings),
    page("logs", Page::WorkerLogs),
];

const ADMIN_ROUTES: &[RouteDef] = &[
    page("", Page::AdminHome),
    page("users", Page::AdminUsers),
    page("wages", Page::AdminWages),
    page("stats/cars", Page::AdminCarStatistics),
];

const DASHBOARD_ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "",
        page: None,
        redirect: Some(RedirectTarget::RoleDashboard),
        meta: RouteMeta::NONE,
        children: &[],
    },
    RouteDef {
        path: "customer",
        page: None,
        redirect: None,
        meta: RouteMeta::role(UserType::Customer),
        children: CUSTOMER_ROUTES,
    },
    RouteDef {
        path: "worker",
        page: None,
        redirect: None,
        meta: RouteMeta::role(UserType::Worker),
        children: WORKER_ROUTES,
    },
    RouteDef {
        path: "admin",
        page: None,
        redirect: None,
        meta: RouteMeta::role(UserType::Administrator),
        children: ADMIN_ROUTES,
    },
];

/// Worker and admin accounts can only be created by an administrator
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/",
        page: None,
        redirect: Some(RedirectTarget::Path(LOGIN_PATH)),
        meta: RouteMeta::NONE,
        children: &[],
    },
    RouteDef {
        meta: RouteMeta::guest(),
        ..page("/login", Page::Login)
    },
    RouteDef {
        meta: RouteMeta::guest(),
        ..page("/register/customer", Page::RegisterCustomer)
    },
    RouteDef {
        meta: RouteMeta {
            requires_auth: true,
            role: Some(UserType::Administrator),
            guest_only: false,
        },
        ..page("/register/worker", Page::RegisterWorker)
    },
    RouteDef {
        meta: RouteMeta {
            requires_auth: true,
            role: Some(UserType::Administrator),
            guest_only: false,
        },
        ..page("/register/admin", Page::RegisterAdmin)
    },
    RouteDef {
        path: "/dashboard",
        page: None,
        redirect: None,
        meta: RouteMeta::authenticated(),
        children: DASHBOARD_ROUTES,
    },
    page("/unauthorized", Page::Unauthorized),
];

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// A leaf of the route tree with its full pattern and merged meta
#[derive(Clone, PartialEq, Debug)]
pub struct Route {
    pub pattern: Vec<Segment>,
    pub target: RouteTarget,
    pub meta: RouteMeta,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RouteTarget {
    Page(Page),
    Redirect(RedirectTarget),
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn parse_pattern(path: &str) -> Vec<Segment> {
    split_path(path)
        .map(|s| match s.strip_prefix(':') {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Static(s.to_string()),
        })
        .collect()
}

/// Depth-first, keeping declaration order
pub fn flatten(defs: &[RouteDef]) -> Vec<Route> {
    let mut routes = Vec::new();
    collect(defs, &[], RouteMeta::NONE, &mut routes);
    routes
}

fn collect(defs: &[RouteDef], prefix: &[Segment], parent: RouteMeta, out: &mut Vec<Route>) {
    for def in defs {
        let mut pattern = prefix.to_vec();
        pattern.extend(parse_pattern(def.path));
        let meta = parent.merge(def.meta);

        let target = match (def.redirect, def.page) {
            (Some(redirect), _) => Some(RouteTarget::Redirect(redirect)),
            (None, Some(page)) => Some(RouteTarget::Page(page)),
            (None, None) => None,
        };
        if let Some(target) = target {
            out.push(Route {
                pattern: pattern.clone(),
                target,
                meta,
            });
        }

        collect(def.children, &pattern, meta, out);
    }
}

impl Route {
    /// Captured params when every segment matches
    pub fn matches(&self, segments: &[&str]) -> Option<Vec<(String, String)>> {
        if segments.len() != self.pattern.len() {
            return None;
        }
        let mut params = Vec::new();
        for (expected, actual) in self.pattern.iter().zip(segments) {
            match expected {
                Segment::Static(s) if s == actual => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => params.push((name.clone(), actual.to_string())),
            }
        }
        Some(params)
    }

    /// Static segments outrank params, position by position
    pub fn specificity(&self) -> Vec<u8> {
        self.pattern
            .iter()
            .map(|s| match s {
                Segment::Static(_) => 1,
                Segment::Param(_) => 0,
            })
            .collect()
    }
}

pub fn path_segments(path: &str) -> Vec<&str> {
    split_path(path).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(routes: &[Route], page: Page) -> &Route {
        routes
            .iter()
            .find(|r| r.target == RouteTarget::Page(page))
            .unwrap()
    }

    #[test]
    fn children_inherit_auth_and_role() {
        let routes = flatten(ROUTES);

        let cars = find(&routes, Page::CustomerCarDetail);
        assert_eq!(
            cars.meta,
            RouteMeta { requires_auth: true, role: Some(UserType::Customer), guest_only: false }
        );
        let stats = find(&routes, Page::AdminCarStatistics);
        assert_eq!(stats.meta.role, Some(UserType::Administrator));
        assert!(stats.meta.requires_auth);

        let login = find(&routes, Page::Login);
        assert_eq!(login.meta, RouteMeta::guest());
        assert_eq!(find(&routes, Page::Unauthorized).meta, RouteMeta::default());
    }

    #[test]
    fn merge_prefers_innermost_role() {
        let parent = RouteMeta { requires_auth: true, role: Some(UserType::Worker), guest_only: false };
        let merged = parent.merge(RouteMeta::role(UserType::Customer));
        assert_eq!(merged.role, Some(UserType::Customer));
        assert!(merged.requires_auth);
        assert_eq!(parent.merge(RouteMeta::NONE), parent);
    }

    #[test]
    fn patterns_join_parent_paths() {
        let routes = flatten(ROUTES);
        let procedures = find(&routes, Page::WorkerOrderProcedures);
        assert_eq!(
            procedures.pattern,
            vec![
                Segment::Static("dashboard".into()),
                Segment::Static("worker".into()),
                Segment::Static("orders".into()),
                Segment::Param("order_id".into()),
                Segment::Static("procedures".into()),
            ]
        );
        assert_eq!(
            procedures.matches(&["dashboard", "worker", "orders", "o-7", "procedures"]),
            Some(vec![("order_id".to_string(), "o-7".to_string())])
        );
        assert_eq!(procedures.matches(&["dashboard", "worker", "orders"]), None);
    }

    #[test]
    fn role_dashboard_redirect() {
        assert_eq!(RedirectTarget::RoleDashboard.resolve(Some(UserType::Worker)), "/dashboard/worker");
        assert_eq!(RedirectTarget::RoleDashboard.resolve(None), "/unauthorized");
        assert_eq!(RedirectTarget::Path("/login").resolve(Some(UserType::Customer)), "/login");
    }

    #[test]
    fn page_names_are_unique() {
        let routes = flatten(ROUTES);
        let mut names: Vec<_> = routes
            .iter()
            .filter_map(|r| match r.target {
                RouteTarget::Page(page) => Some(page.name()),
                RouteTarget::Redirect(_) => None,
            })
            .collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
