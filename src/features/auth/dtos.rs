use serde::Deserialize;

/// Login form body (application/x-www-form-urlencoded)
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
