//! Static informational endpoints.

/// Body of `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to Budget Tracker Application ";

/// Body of `GET /api/info`.
pub const INFO_MESSAGE: &str = "Spring Boot Budget Tracker API is running! ";

/// `GET /`
pub async fn home_handler() -> &'static str {
    WELCOME_MESSAGE
}

/// `GET /api/info`
pub async fn info_handler() -> &'static str {
    INFO_MESSAGE
}
