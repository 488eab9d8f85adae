// ============================================================================
// AUTH STATE - token + role, mirrored in localStorage
// ============================================================================
// `token` and `userType` are the only persisted strings. The in-memory copy
// is reactive so the shell can re-render on login/logout.
// ============================================================================

use std::rc::Rc;

use crate::models::{Credentials, User, UserType};
use crate::services::{registration_error_message, ApiClient, ApiError, Transport};
use crate::state::ReactiveState;
use crate::utils::{KeyValueStore, TOKEN_STORAGE_KEY, USER_TYPE_STORAGE_KEY};

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AuthSession {
    pub token: Option<String>,
    pub user_type: Option<UserType>,
    /// Set once the stored token has been checked against `/auth/verify`
    pub initialized: bool,
}

impl AuthSession {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Clone)]
pub struct AuthState {
    session: Rc<ReactiveState<AuthSession>>,
    storage: Rc<dyn KeyValueStore>,
}

impl AuthState {
    /// Picks up whatever a previous page load left in `storage`
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let token = storage.get(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty());
        let user_type = storage
            .get(USER_TYPE_STORAGE_KEY)
            .and_then(|raw| raw.parse::<UserType>().ok());

        Self {
            session: Rc::new(ReactiveState::new(AuthSession {
                token,
                user_type,
                initialized: false,
            })),
            storage,
        }
    }

    pub fn snapshot(&self) -> AuthSession {
        self.session.with(Clone::clone)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(AuthSession::is_authenticated)
    }

    pub fn current_user_type(&self) -> Option<UserType> {
        self.session.with(|s| s.user_type)
    }

    pub fn is_initialized(&self) -> bool {
        self.session.with(|s| s.initialized)
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.session.subscribe(callback);
    }

    /// Re-validate a stored token. Any verification failure logs out.
    pub async fn initialize<T: Transport>(&self, client: &ApiClient<T>) {
        if let Some(token) = self.storage.get(TOKEN_STORAGE_KEY).filter(|t| !t.is_empty()) {
            match client.verify_token(&token).await {
                Ok(verified) => {
                    log::info!("🔐 [AUTH] Session restored as {}", verified.user_type);
                    self.persist(USER_TYPE_STORAGE_KEY, verified.user_type.as_str());
                    self.session.update(|s| {
                        s.token = Some(token);
                        s.user_type = Some(verified.user_type);
                    });
                }
                Err(e) if e.is_unauthorized() => {
                    log::info!("🔐 [AUTH] Stored token expired: {}", e);
                    self.logout();
                }
                Err(e) => {
                    log::warn!("⚠️ [AUTH] Could not verify stored token: {}", e);
                    self.logout();
                }
            }
        }

        self.session.update(|s| s.initialized = true);
    }

    /// Exchange credentials for a token, then resolve the role through
    /// `/auth/verify`. On failure nothing stays persisted.
    pub async fn login<T: Transport>(
        &self,
        client: &ApiClient<T>,
        credentials: &Credentials,
    ) -> Result<UserType, ApiError> {
        log::info!("🔐 [AUTH] Login attempt for {}", credentials.username);

        match self.try_login(client, credentials).await {
            Ok(user_type) => {
                log::info!("✅ [AUTH] Logged in as {}", user_type);
                Ok(user_type)
            }
            Err(e) => {
                log::error!("❌ [AUTH] Login failed: {}", e);
                self.logout();
                Err(e)
            }
        }
    }

    async fn try_login<T: Transport>(
        &self,
        client: &ApiClient<T>,
        credentials: &Credentials,
    ) -> Result<UserType, ApiError> {
        let token = client.login(credentials).await?.access_token;
        self.persist(TOKEN_STORAGE_KEY, &token);
        self.session.update(|s| s.token = Some(token.clone()));

        let user_type = client.verify_token(&token).await?.user_type;
        self.persist(USER_TYPE_STORAGE_KEY, user_type.as_str());
        self.session.update(|s| s.user_type = Some(user_type));

        Ok(user_type)
    }

    /// Registration does not log in. Errors come back as UI text.
    pub async fn register_customer<T: Transport>(
        &self,
        client: &ApiClient<T>,
        user_name: &str,
        user_pwd: &str,
    ) -> Result<User, String> {
        client
            .register_customer(user_name, user_pwd)
            .await
            .map_err(|e| registration_failure(&e))
    }

    pub async fn register_worker<T: Transport>(
        &self,
        client: &ApiClient<T>,
        user_name: &str,
        user_pwd: &str,
        worker_type: i32,
    ) -> Result<User, String> {
        client
            .register_worker(user_name, user_pwd, worker_type)
            .await
            .map_err(|e| registration_failure(&e))
    }

    pub async fn register_admin<T: Transport>(
        &self,
        client: &ApiClient<T>,
        user_name: &str,
        user_pwd: &str,
    ) -> Result<User, String> {
        client
            .register_admin(user_name, user_pwd)
            .await
            .map_err(|e| registration_failure(&e))
    }

    pub fn logout(&self) {
        for key in [TOKEN_STORAGE_KEY, USER_TYPE_STORAGE_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("⚠️ [AUTH] {}", e);
            }
        }
        self.session.update(|s| {
            s.token = None;
            s.user_type = None;
        });
        log::info!("👋 [AUTH] Logged out");
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            log::warn!("⚠️ [AUTH] {}", e);
        }
    }
}

fn registration_failure(error: &ApiError) -> String {
    log::error!("❌ [AUTH] Registration failed: {}", error);
    registration_error_message(error)
}
