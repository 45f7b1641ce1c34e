use serde::Serialize;

/// Row counts shown on the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCounts {
    pub companies: i64,
    pub products: i64,
    pub categories: i64,
    pub brands: i64,
    pub news: i64,
    pub certificates: i64,
    pub subscribers: i64,
    pub users: i64,
}
