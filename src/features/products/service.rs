use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{CreateProductDto, UpdateProductDto};
use crate::features::products::model::Product;

const COLUMNS: &str = "id, name, slug, description, image, images, category_id, brand_id";

/// Service for product operations
pub struct ProductService {
    pool: SqlitePool,
}

impl ProductService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        sqlx::query_as::<_, Product>(&format!("SELECT {} FROM products ORDER BY id", COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list products: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get(&self, id: i64) -> Result<Product> {
        sqlx::query_as::<_, Product>(&format!("SELECT {} FROM products WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get product {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::not_found("Product", id))
    }

    pub async fn create(&self, dto: CreateProductDto) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO products (name, slug, description, image, images, category_id, brand_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&dto.name)
        .bind(&dto.slug)
        .bind(&dto.description)
        .bind(&dto.image)
        .bind(Json(dto.images.clone().unwrap_or_default()))
        .bind(dto.category_id)
        .bind(dto.brand_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert product: {:?}", e);
            AppError::Database(e)
        })?;

        let id = result.last_insert_rowid();
        tracing::info!("Product created: id={}, slug={}", id, dto.slug);
        Ok(id)
    }

    pub async fn update(&self, id: i64, dto: UpdateProductDto) -> Result<()> {
        let current = self.get(id).await?;

        let images = match dto.images {
            Some(list) => Json(list),
            None => current.images,
        };

        sqlx::query(
            "UPDATE products SET name = ?, slug = ?, description = ?, image = ?, images = ?, \
             category_id = ?, brand_id = ? WHERE id = ?",
        )
        .bind(dto.name.unwrap_or(current.name))
        .bind(dto.slug.unwrap_or(current.slug))
        .bind(dto.description.or(current.description))
        .bind(dto.image.or(current.image))
        .bind(images)
        .bind(dto.category_id.unwrap_or(current.category_id))
        .bind(dto.brand_id.unwrap_or(current.brand_id))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update product {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete product {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Product", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{seed_brand, seed_category, seed_company, test_pool};

    #[tokio::test]
    async fn gallery_round_trips_in_order() {
        let pool = test_pool().await;
        let company_id = seed_company(&pool).await;
        let category_id = seed_category(&pool, "tools").await;
        let brand_id = seed_brand(&pool, "bolt", company_id).await;
        let service = ProductService::new(pool);

        let id = service
            .create(CreateProductDto {
                name: "Drill".to_string(),
                slug: "drill".to_string(),
                description: None,
                image: Some("products/main.png".to_string()),
                images: Some(vec![
                    "products/a.png".to_string(),
                    "products/b.png".to_string(),
                ]),
                category_id,
                brand_id,
            })
            .await
            .unwrap();

        let product = service.get(id).await.unwrap();
        assert_eq!(product.image.as_deref(), Some("products/main.png"));
        assert_eq!(product.images.0, vec!["products/a.png", "products/b.png"]);

        // gallery untouched by an unrelated partial update
        service
            .update(
                id,
                UpdateProductDto {
                    name: Some("Hammer Drill".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let product = service.get(id).await.unwrap();
        assert_eq!(product.name, "Hammer Drill");
        assert_eq!(product.images.0.len(), 2);

        // a supplied gallery replaces wholesale
        service
            .update(
                id,
                UpdateProductDto {
                    images: Some(vec!["products/c.png".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let product = service.get(id).await.unwrap();
        assert_eq!(product.images.0, vec!["products/c.png"]);
    }
}
