// ============================================================================
// APP - shell: history <-> router <-> auth <-> outlet
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, current_path, get_element_by_id, on_popstate, push_history, replace_history,
    set_inner_html,
};
use crate::models::{Credentials, UserType};
use crate::router::{post_login_target, ResolvedRoute, Router, LOGIN_PATH};
use crate::services::ApiClient;
use crate::state::AuthState;
use crate::utils::{LocalStorage, APP_ROOT_ID};
use crate::views::render_page;

const LOGIN_FAILED: &str = "Login failed, please check your credentials";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum HistoryMode {
    /// New entry (links, programmatic navigation)
    Push,
    /// Initial load and back/forward: only rewrite the entry on redirects
    Replace,
}

/// One-shot message shown above the outlet until the next navigation
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

const WORKER_TYPE_INVALID: &str = "Worker type must be a number";

/// Account to create; only workers carry a worker type
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AccountKind {
    Customer,
    Worker { worker_type: i32 },
    Administrator,
}

impl AccountKind {
    pub fn user_type(&self) -> UserType {
        match self {
            AccountKind::Customer => UserType::Customer,
            AccountKind::Worker { .. } => UserType::Worker,
            AccountKind::Administrator => UserType::Administrator,
        }
    }
}

/// Registration form values
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RegistrationForm {
    pub kind: AccountKind,
    pub user_name: String,
    pub user_pwd: String,
}

impl RegistrationForm {
    /// Build from raw input text. `worker_type` is read only for workers and
    /// must be an integer.
    pub fn from_inputs(
        user_type: UserType,
        user_name: String,
        user_pwd: String,
        worker_type: &str,
    ) -> Result<Self, &'static str> {
        let kind = match user_type {
            UserType::Customer => AccountKind::Customer,
            UserType::Worker => AccountKind::Worker {
                worker_type: worker_type.trim().parse().map_err(|_| WORKER_TYPE_INVALID)?,
            },
            UserType::Administrator => AccountKind::Administrator,
        };
        Ok(Self { kind, user_name, user_pwd })
    }
}

pub struct App {
    auth: AuthState,
    client: ApiClient,
    router: Router,
    root: Element,
    current: RefCell<Option<ResolvedRoute>>,
    notice: RefCell<Option<Notice>>,
}

impl App {
    pub fn new() -> Result<Rc<Self>, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        Ok(Rc::new(Self {
            auth: AuthState::new(Rc::new(LocalStorage)),
            client: ApiClient::new(),
            router: Router::new(),
            root,
            current: RefCell::new(None),
            notice: RefCell::new(None),
        }))
    }

    /// Hook up listeners and resolve the URL the page was loaded with
    pub fn start(self: &Rc<Self>) -> Result<(), JsValue> {
        let weak: Weak<Self> = Rc::downgrade(self);
        self.auth.subscribe(move || {
            let weak = weak.clone();
            // batch the several updates of one login/logout into one render
            Timeout::new(0, move || {
                if let Some(app) = weak.upgrade() {
                    app.rerender();
                }
            })
            .forget();
        });

        let app = self.clone();
        on_popstate(move |_| match current_path() {
            Ok(path) => app.go(path, HistoryMode::Replace),
            Err(e) => log::error!("❌ [ROUTER] Cannot read location: {:?}", e),
        })?;

        self.go(current_path()?, HistoryMode::Replace);
        Ok(())
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn current_route(&self) -> Option<ResolvedRoute> {
        self.current.borrow().clone()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice.borrow().clone()
    }

    pub fn navigate(self: &Rc<Self>, path: &str) {
        self.go(path.to_string(), HistoryMode::Push);
    }

    fn go(self: &Rc<Self>, path: String, mode: HistoryMode) {
        let app = self.clone();
        spawn_local(async move {
            let navigation = app.router.navigate(&path, &app.auth, &app.client).await;
            let full_path = navigation.route.full_path();

            let history = match mode {
                HistoryMode::Push => push_history(&full_path),
                HistoryMode::Replace if navigation.redirected => replace_history(&full_path),
                HistoryMode::Replace => Ok(()),
            };
            if let Err(e) = history {
                log::warn!("⚠️ [ROUTER] History update failed: {:?}", e);
            }

            *app.current.borrow_mut() = Some(navigation.route);
            app.rerender();
            app.notice.borrow_mut().take();
        });
    }

    fn show_notice(self: &Rc<Self>, text: String, is_error: bool) {
        *self.notice.borrow_mut() = Some(Notice { text, is_error });
        self.rerender();
    }

    /// Sign in, then continue to `redirect` (a local path) or the dashboard
    pub fn login(self: &Rc<Self>, credentials: Credentials, redirect: Option<String>) {
        let app = self.clone();
        spawn_local(async move {
            match app.auth.login(&app.client, &credentials).await {
                Ok(_) => app.navigate(&post_login_target(redirect)),
                Err(e) => app.show_notice(e.display_message(LOGIN_FAILED), true),
            }
        });
    }

    /// Validate the raw form first; an invalid form never reaches the API
    pub fn submit_registration(
        self: &Rc<Self>,
        user_type: UserType,
        user_name: String,
        user_pwd: String,
        worker_type: &str,
    ) {
        match RegistrationForm::from_inputs(user_type, user_name, user_pwd, worker_type) {
            Ok(form) => self.register(form),
            Err(message) => self.show_notice(message.to_string(), true),
        }
    }

    pub fn register(self: &Rc<Self>, form: RegistrationForm) {
        log::info!("📝 [AUTH] Registering {} {}", form.kind.user_type(), form.user_name);
        let app = self.clone();
        spawn_local(async move {
            let (auth, client) = (&app.auth, &app.client);
            let result = match form.kind {
                AccountKind::Customer => {
                    auth.register_customer(client, &form.user_name, &form.user_pwd)
                        .await
                }
                AccountKind::Worker { worker_type } => {
                    auth.register_worker(client, &form.user_name, &form.user_pwd, worker_type)
                        .await
                }
                AccountKind::Administrator => {
                    auth.register_admin(client, &form.user_name, &form.user_pwd)
                        .await
                }
            };

            match result {
                Ok(user) if form.kind.user_type() == UserType::Customer => {
                    log::info!("✅ [AUTH] Account {} created", user.user_name);
                    app.navigate(LOGIN_PATH);
                }
                Ok(user) => app.show_notice(format!("Account {} created", user.user_name), false),
                Err(message) => app.show_notice(message, true),
            }
        });
    }

    pub fn logout(self: &Rc<Self>) {
        self.auth.logout();
        self.navigate(LOGIN_PATH);
    }

    fn rerender(self: &Rc<Self>) {
        if let Err(e) = self.render() {
            log::error!("❌ [APP] Render failed: {:?}", e);
        }
    }

    /// Full re-render of the current route
    pub fn render(self: &Rc<Self>) -> Result<(), JsValue> {
        let Some(route) = self.current_route() else {
            return Ok(());
        };

        set_inner_html(&self.root, "");
        let view = render_page(self, &route)?;
        append_child(&self.root, &view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(user_type: UserType, worker_type: &str) -> Result<RegistrationForm, &'static str> {
        RegistrationForm::from_inputs(user_type, "jo".to_string(), "pw".to_string(), worker_type)
    }

    #[test]
    fn worker_form_requires_a_numeric_worker_type() {
        assert_eq!(form(UserType::Worker, "").unwrap_err(), WORKER_TYPE_INVALID);
        assert_eq!(form(UserType::Worker, "senior").unwrap_err(), WORKER_TYPE_INVALID);
        assert_eq!(form(UserType::Worker, "1.5").unwrap_err(), WORKER_TYPE_INVALID);

        let worker = form(UserType::Worker, " 2 ").unwrap();
        assert_eq!(worker.kind, AccountKind::Worker { worker_type: 2 });
        assert_eq!(worker.kind.user_type(), UserType::Worker);
    }

    #[test]
    fn other_forms_ignore_the_worker_type_field() {
        let customer = form(UserType::Customer, "").unwrap();
        assert_eq!(customer.kind, AccountKind::Customer);
        assert_eq!(customer.user_name, "jo");

        let admin = form(UserType::Administrator, "x").unwrap();
        assert_eq!(admin.kind.user_type(), UserType::Administrator);
    }
}
