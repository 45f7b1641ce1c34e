/// Name of the admin session cookie
pub const SESSION_COOKIE: &str = "session";

/// Path the admin surface lives under
pub const ADMIN_PREFIX: &str = "/admin";

/// Where unauthenticated admin requests are redirected
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";
