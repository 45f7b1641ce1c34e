use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::DashboardCounts;

/// Service for dashboard queries
pub struct DashboardService {
    pool: SqlitePool,
}

impl DashboardService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Row count per entity type shown on the admin index.
    pub async fn counts(&self) -> Result<DashboardCounts> {
        Ok(DashboardCounts {
            companies: self.count_table("companies").await?,
            products: self.count_table("products").await?,
            categories: self.count_table("product_categories").await?,
            brands: self.count_table("brands").await?,
            news: self.count_table("news").await?,
            certificates: self.count_table("certificates").await?,
            subscribers: self.count_table("newsletter_subscribers").await?,
            users: self.count_table("admin_users").await?,
        })
    }

    async fn count_table(&self, table: &str) -> Result<i64> {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count {}: {:?}", table, e);
                AppError::Database(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{seed_brand, seed_category, seed_company, test_pool};

    #[tokio::test]
    async fn counts_reflect_seeded_rows() {
        let pool = test_pool().await;
        let company_id = seed_company(&pool).await;
        seed_category(&pool, "tools").await;
        seed_brand(&pool, "bolt", company_id).await;
        seed_brand(&pool, "nut", company_id).await;

        let counts = DashboardService::new(pool).counts().await.unwrap();
        assert_eq!(counts.companies, 1);
        assert_eq!(counts.categories, 1);
        assert_eq!(counts.brands, 2);
        assert_eq!(counts.products, 0);
        assert_eq!(counts.users, 0);
    }
}
