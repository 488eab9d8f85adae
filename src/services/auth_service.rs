use crate::models::{Credentials, LoginRequest, RegisterRequest, TokenResponse, User, UserType, UserUpdate, VerifyResponse};
use crate::services::api_client::{ApiClient, ApiRequest, Transport};
use crate::services::error::ApiError;

/// Shown when the backend gives no usable reason for a failed registration
pub const REGISTRATION_FAILED: &str = "Registration failed, please check the form";

/// Login, token verification, registration and the current user's profile
impl<T: Transport> ApiClient<T> {
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        log::info!("🔐 [AUTH] Logging in as {}", credentials.username);
        let request = ApiRequest::post("/auth/login").json(&LoginRequest::from(credentials))?;
        self.execute(request).await
    }

    /// Check `token` explicitly instead of whatever is stored
    pub async fn verify_token(&self, token: &str) -> Result<VerifyResponse, ApiError> {
        self.execute(ApiRequest::get("/auth/verify").bearer(token)).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        log::info!("📝 [AUTH] Registering {} as {}", request.user_name, request.user_type);
        self.execute(ApiRequest::post("/users/register").json(request)?).await
    }

    pub async fn register_customer(&self, user_name: &str, user_pwd: &str) -> Result<User, ApiError> {
        self.register(&RegisterRequest {
            user_name: user_name.to_string(),
            user_pwd: user_pwd.to_string(),
            user_type: UserType::Customer,
            worker_type: None,
        })
        .await
    }

    pub async fn register_worker(
        &self,
        user_name: &str,
        user_pwd: &str,
        worker_type: i32,
    ) -> Result<User, ApiError> {
        self.register(&RegisterRequest {
            user_name: user_name.to_string(),
            user_pwd: user_pwd.to_string(),
            user_type: UserType::Worker,
            worker_type: Some(worker_type),
        })
        .await
    }

    pub async fn register_admin(&self, user_name: &str, user_pwd: &str) -> Result<User, ApiError> {
        self.register(&RegisterRequest {
            user_name: user_name.to_string(),
            user_pwd: user_pwd.to_string(),
            user_type: UserType::Administrator,
            worker_type: None,
        })
        .await
    }

    pub async fn get_me(&self) -> Result<User, ApiError> {
        self.execute(ApiRequest::get("/users/me")).await
    }

    pub async fn update_me(&self, update: &UserUpdate) -> Result<User, ApiError> {
        self.execute(ApiRequest::put("/users/me").json(update)?).await
    }
}

/// UI text for a failed registration
pub fn registration_error_message(error: &ApiError) -> String {
    error.display_message(REGISTRATION_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::Method;
    use crate::services::testing::client_with_token;
    use serde_json::json;

    fn user_json(user_type: &str) -> serde_json::Value {
        json!({"user_id": "u-1", "user_name": "ana", "user_type": user_type, "worker_type": null})
    }

    #[tokio::test]
    async fn login_posts_backend_field_names() {
        let client = client_with_token(None);
        client
            .transport()
            .respond(200, json!({"access_token": "jwt", "token_type": "bearer"}));

        let token = client
            .login(&Credentials { username: "ana".into(), password: "pw".into() })
            .await
            .unwrap();

        assert_eq!(token.access_token, "jwt");
        let call = client.transport().last_call();
        assert_eq!(call.request.method, Method::Post);
        assert_eq!(call.request.path, "/auth/login");
        assert_eq!(call.request.body, Some(json!({"user_name": "ana", "user_pwd": "pw"})));
    }

    #[tokio::test]
    async fn verify_uses_the_given_token() {
        let client = client_with_token(Some("old"));
        client.transport().respond(200, json!({"user_type": "administrator"}));

        let verified = client.verify_token("new").await.unwrap();

        assert_eq!(verified.user_type, UserType::Administrator);
        let call = client.transport().last_call();
        assert_eq!(call.request.method, Method::Get);
        assert_eq!(call.request.path, "/auth/verify");
        assert_eq!(call.bearer.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn registration_is_discriminated_by_user_type() {
        let client = client_with_token(None);
        client.transport().respond(200, user_json("customer"));
        client.transport().respond(200, user_json("worker"));
        client.transport().respond(200, user_json("administrator"));

        client.register_customer("c", "pw").await.unwrap();
        client.register_worker("w", "pw", 2).await.unwrap();
        client.register_admin("a", "pw").await.unwrap();

        let bodies: Vec<_> = client
            .transport()
            .calls()
            .into_iter()
            .map(|c| {
                assert_eq!(c.request.path, "/users/register");
                c.request.body.unwrap()
            })
            .collect();
        assert_eq!(bodies[0], json!({"user_name": "c", "user_pwd": "pw", "user_type": "customer"}));
        assert_eq!(
            bodies[1],
            json!({"user_name": "w", "user_pwd": "pw", "user_type": "worker", "worker_type": 2})
        );
        assert_eq!(bodies[2]["user_type"], json!("administrator"));
    }

    #[tokio::test]
    async fn registration_errors_use_backend_detail() {
        let client = client_with_token(None);
        client.transport().respond(
            422,
            json!({"detail": [{"msg": "user_name too short"}, {"msg": "user_pwd required"}]}),
        );

        let err = client.register_customer("x", "").await.unwrap_err();
        assert_eq!(registration_error_message(&err), "user_name too short, user_pwd required");

        let err = ApiError::Network("offline".into());
        assert_eq!(registration_error_message(&err), REGISTRATION_FAILED);
    }

    #[tokio::test]
    async fn profile_read_and_update() {
        let client = client_with_token(Some("tok"));
        client.transport().respond(200, user_json("worker"));
        client.transport().respond(200, user_json("worker"));

        let me = client.get_me().await.unwrap();
        assert_eq!(me.user_type, UserType::Worker);

        client
            .update_me(&UserUpdate { user_pwd: Some("new-pw".into()), ..UserUpdate::default() })
            .await
            .unwrap();

        let calls = client.transport().calls();
        assert_eq!((calls[0].request.method, calls[0].request.path.as_str()), (Method::Get, "/users/me"));
        assert_eq!((calls[1].request.method, calls[1].request.path.as_str()), (Method::Put, "/users/me"));
        assert_eq!(calls[1].request.body, Some(json!({"user_pwd": "new-pw"})));
        assert!(calls.iter().all(|c| c.bearer.as_deref() == Some("tok")));
    }
}
