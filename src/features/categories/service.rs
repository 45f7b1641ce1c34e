use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CreateProductCategoryDto, UpdateProductCategoryDto};
use crate::features::categories::model::ProductCategory;

const COLUMNS: &str = "id, name, slug, parent_category_id";

/// Service for product category operations
pub struct CategoryService {
    pool: SqlitePool,
}

impl CategoryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<ProductCategory>> {
        sqlx::query_as::<_, ProductCategory>(&format!(
            "SELECT {} FROM product_categories ORDER BY id",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn get(&self, id: i64) -> Result<ProductCategory> {
        sqlx::query_as::<_, ProductCategory>(&format!(
            "SELECT {} FROM product_categories WHERE id = ?",
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category {}: {:?}", id, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::not_found("ProductCategory", id))
    }

    pub async fn create(&self, dto: CreateProductCategoryDto) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO product_categories (name, slug, parent_category_id) VALUES (?, ?, ?)",
        )
        .bind(&dto.name)
        .bind(&dto.slug)
        .bind(dto.parent_category_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert category: {:?}", e);
            AppError::Database(e)
        })?;

        let id = result.last_insert_rowid();
        tracing::info!("Category created: id={}, slug={}", id, dto.slug);
        Ok(id)
    }

    pub async fn update(&self, id: i64, dto: UpdateProductCategoryDto) -> Result<()> {
        let current = self.get(id).await?;

        sqlx::query(
            "UPDATE product_categories SET name = ?, slug = ?, parent_category_id = ? WHERE id = ?",
        )
        .bind(dto.name.unwrap_or(current.name))
        .bind(dto.slug.unwrap_or(current.slug))
        .bind(dto.parent_category_id.or(current.parent_category_id))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM product_categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("ProductCategory", id));
        }
        Ok(())
    }
}
