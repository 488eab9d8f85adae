// ============================================================================
// LAYOUT - header, notice and page outlet
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::app::App;
use crate::dom::{on_click, ElementBuilder};
use crate::models::UserType;
use crate::router::{Page, ResolvedRoute, DASHBOARD_PATH, LOGIN_PATH};
use crate::views::auth::{render_login_form, render_register_form};

const CUSTOMER_NAV: &[(&str, &str)] = &[
    ("Home", "/dashboard/customer"),
    ("My cars", "/dashboard/customer/cars"),
    ("My orders", "/dashboard/customer/orders"),
    ("New order", "/dashboard/customer/orders/create"),
];

const WORKER_NAV: &[(&str, &str)] = &[
    ("Home", "/dashboard/worker"),
    ("My orders", "/dashboard/worker/orders"),
    ("Pending", "/dashboard/worker/orders/pending"),
    ("Earnings", "/dashboard/worker/earnings"),
    ("Work logs", "/dashboard/worker/logs"),
];

const ADMIN_NAV: &[(&str, &str)] = &[
    ("Home", "/dashboard/admin"),
    ("Users", "/dashboard/admin/users"),
    ("Wages", "/dashboard/admin/wages"),
    ("Car statistics", "/dashboard/admin/stats/cars"),
    ("New worker", "/register/worker"),
    ("New administrator", "/register/admin"),
];

fn nav_entries(user_type: Option<UserType>) -> &'static [(&'static str, &'static str)] {
    match user_type {
        Some(UserType::Customer) => CUSTOMER_NAV,
        Some(UserType::Worker) => WORKER_NAV,
        Some(UserType::Administrator) => ADMIN_NAV,
        None => &[],
    }
}

/// `<a>` that navigates through the router instead of reloading
pub fn link(app: &Rc<App>, label: &str, href: &str) -> Result<Element, JsValue> {
    let anchor = ElementBuilder::new("a")?
        .class("nav-link")
        .attr("href", href)?
        .text(label)
        .build();

    let app = app.clone();
    let target = href.to_string();
    on_click(&anchor, move |e: MouseEvent| {
        e.prevent_default();
        app.navigate(&target);
    })?;
    Ok(anchor)
}

fn render_header(app: &Rc<App>) -> Result<Element, JsValue> {
    let session = app.auth().snapshot();

    let brand = ElementBuilder::new("span")?
        .class("brand")
        .text("🔧 Garage Desk")
        .build();

    let nav = ElementBuilder::new("nav")?
        .class("main-nav")
        .children(
            nav_entries(session.user_type)
                .iter()
                .map(|(label, href)| link(app, label, href))
                .collect::<Result<Vec<_>, _>>()?,
        )?
        .build();

    let mut header = ElementBuilder::new("header")?
        .class("app-header")
        .child(brand)?
        .child(nav)?;

    if session.is_authenticated() {
        let logout = ElementBuilder::new("button")?
            .class("btn-logout")
            .attr("type", "button")?
            .text("Log out")
            .build();
        let app = app.clone();
        on_click(&logout, move |_| app.logout())?;
        header = header.child(logout)?;
    }

    Ok(header.build())
}

fn render_notice(app: &App) -> Result<Option<Element>, JsValue> {
    let Some(notice) = app.notice() else {
        return Ok(None);
    };
    let class = if notice.is_error { "notice notice-error" } else { "notice notice-info" };
    Ok(Some(
        ElementBuilder::new("p")?
            .class(class)
            .attr("role", "status")?
            .text(&notice.text)
            .build(),
    ))
}

fn render_outlet(app: &Rc<App>, route: &ResolvedRoute) -> Result<Element, JsValue> {
    let mut outlet = ElementBuilder::new("main")?
        .class("page")
        .data("page", route.page.name())?;
    for (name, value) in &route.params {
        outlet = outlet.data(name, value)?;
    }

    let title = ElementBuilder::new("h1")?.text(route.page.title()).build();
    outlet = outlet.child(title)?;

    let body = match route.page {
        Page::Login => render_login_form(app, route.location.query_value("redirect"))?,
        Page::RegisterCustomer => render_register_form(app, UserType::Customer)?,
        Page::RegisterWorker => render_register_form(app, UserType::Worker)?,
        Page::RegisterAdmin => render_register_form(app, UserType::Administrator)?,
        Page::Unauthorized => ElementBuilder::new("section")?
            .child(
                ElementBuilder::new("p")?
                    .text("Your account is not allowed to open this page.")
                    .build(),
            )?
            .child(link(app, "Back to my dashboard", DASHBOARD_PATH)?)?
            .build(),
        Page::NotFound => ElementBuilder::new("section")?
            .child(
                ElementBuilder::new("p")?
                    .text("There is nothing at this address.")
                    .build(),
            )?
            .child(link(app, "Go to sign in", LOGIN_PATH)?)?
            .build(),
        _ => ElementBuilder::new("section")?
            .class("page-body")
            .attr("id", "page-body")?
            .build(),
    };

    Ok(outlet.child(body)?.build())
}

pub fn render_page(app: &Rc<App>, route: &ResolvedRoute) -> Result<Element, JsValue> {
    let mut shell = ElementBuilder::new("div")?
        .class("app-shell")
        .child(render_header(app)?)?;
    if let Some(notice) = render_notice(app)? {
        shell = shell.child(notice)?;
    }
    Ok(shell.child(render_outlet(app, route)?)?.build())
}
