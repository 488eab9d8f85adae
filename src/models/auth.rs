use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role label stored in localStorage and returned by `/auth/verify`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Customer,
    Worker,
    Administrator,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Customer => "customer",
            UserType::Worker => "worker",
            UserType::Administrator => "administrator",
        }
    }

    /// Landing page of each role under `/dashboard`
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            UserType::Customer => "/dashboard/customer",
            UserType::Worker => "/dashboard/worker",
            UserType::Administrator => "/dashboard/admin",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(UserType::Customer),
            "worker" => Ok(UserType::Worker),
            "administrator" => Ok(UserType::Administrator),
            other => Err(format!("unknown user type '{}'", other)),
        }
    }
}

/// Login form values
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub user_name: String,
    pub user_pwd: String,
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            user_name: credentials.username.clone(),
            user_pwd: credentials.password.clone(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct VerifyResponse {
    #[serde(default)]
    pub user_id: Option<String>,
    pub user_type: UserType,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Body of `POST /users/register`; `user_type` picks the role
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub user_name: String,
    pub user_pwd: String,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<i32>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub user_id: String,
    pub user_name: String,
    pub user_type: UserType,
    #[serde(default)]
    pub worker_type: Option<i32>,
}

/// Partial update for `PUT /users/me`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_pwd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_type: Option<i32>,
}
