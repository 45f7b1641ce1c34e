use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::companies::dtos::{CreateCompanyDto, UpdateCompanyDto};
use crate::features::companies::model::Company;

const COLUMNS: &str = "id, name, mission, vision, phone, email, address, map_coordinates";

/// Service for company operations
pub struct CompanyService {
    pool: SqlitePool,
}

impl CompanyService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Company>> {
        sqlx::query_as::<_, Company>(&format!(
            "SELECT {} FROM companies ORDER BY id",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list companies: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn get(&self, id: i64) -> Result<Company> {
        sqlx::query_as::<_, Company>(&format!("SELECT {} FROM companies WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get company {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::not_found("Company", id))
    }

    pub async fn create(&self, dto: CreateCompanyDto) -> Result<i64> {
        let result = sqlx::query(
            "INSERT INTO companies (name, mission, vision, phone, email, address, map_coordinates) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&dto.name)
        .bind(&dto.mission)
        .bind(&dto.vision)
        .bind(&dto.phone)
        .bind(&dto.email)
        .bind(&dto.address)
        .bind(&dto.map_coordinates)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert company: {:?}", e);
            AppError::Database(e)
        })?;

        let id = result.last_insert_rowid();
        tracing::info!("Company created: id={}", id);
        Ok(id)
    }

    /// Overwrite only the supplied fields on the existing row.
    pub async fn update(&self, id: i64, dto: UpdateCompanyDto) -> Result<()> {
        let current = self.get(id).await?;

        sqlx::query(
            "UPDATE companies SET name = ?, mission = ?, vision = ?, phone = ?, email = ?, \
             address = ?, map_coordinates = ? WHERE id = ?",
        )
        .bind(dto.name.unwrap_or(current.name))
        .bind(dto.mission.or(current.mission))
        .bind(dto.vision.or(current.vision))
        .bind(dto.phone.or(current.phone))
        .bind(dto.email.or(current.email))
        .bind(dto.address.or(current.address))
        .bind(dto.map_coordinates.or(current.map_coordinates))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update company {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete company {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Company", id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::test_pool;

    #[tokio::test]
    async fn partial_update_leaves_other_fields_alone() {
        let service = CompanyService::new(test_pool().await);

        let id = service
            .create(CreateCompanyDto {
                name: "Acme".to_string(),
                mission: Some("build things".to_string()),
                vision: None,
                phone: Some("123".to_string()),
                email: None,
                address: None,
                map_coordinates: None,
            })
            .await
            .unwrap();

        let dto = UpdateCompanyDto {
            phone: Some("456".to_string()),
            ..Default::default()
        };
        service.update(id, dto.clone()).await.unwrap();
        // applying the same partial update twice yields the same state
        service.update(id, dto).await.unwrap();

        let company = service.get(id).await.unwrap();
        assert_eq!(company.name, "Acme");
        assert_eq!(company.mission.as_deref(), Some("build things"));
        assert_eq!(company.phone.as_deref(), Some("456"));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = CompanyService::new(test_pool().await);

        let id = service
            .create(CreateCompanyDto {
                name: "Acme".to_string(),
                mission: None,
                vision: None,
                phone: None,
                email: None,
                address: None,
                map_coordinates: None,
            })
            .await
            .unwrap();

        service.delete(id).await.unwrap();

        let err = service.get(id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Company with id {} not found", id));

        let err = service.delete(id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Company with id {} not found", id));
    }
}
