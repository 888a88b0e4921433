use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Inquiry, ValuationRequest};
use crate::utils::errors::AppError;

/// Escritura de leads (consultas y solicitudes de tasación)
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn save_inquiry(&self, inquiry: &Inquiry) -> Result<(), AppError>;

    async fn save_valuation_request(&self, request: &ValuationRequest) -> Result<(), AppError>;
}

pub struct PgLeadRepository {
    pool: PgPool,
}

impl PgLeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadRepository for PgLeadRepository {
    async fn save_inquiry(&self, inquiry: &Inquiry) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO inquiries (id, enquiry_type, name, email, phone, message, vehicle_id,
                                   vehicle_make, vehicle_model, vehicle_year, vehicle_condition,
                                   budget, preferred_location, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(inquiry.id)
        .bind(inquiry.enquiry_type.as_str())
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.phone)
        .bind(&inquiry.message)
        .bind(inquiry.vehicle_id)
        .bind(&inquiry.vehicle_make)
        .bind(&inquiry.vehicle_model)
        .bind(&inquiry.vehicle_year)
        .bind(&inquiry.vehicle_condition)
        .bind(&inquiry.budget)
        .bind(&inquiry.preferred_location)
        .bind(inquiry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save_valuation_request(&self, request: &ValuationRequest) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO valuation_requests (id, request_id, make, model, year, variant, odometer,
                                            condition, location, contact_name, contact_email,
                                            contact_phone, source, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(request.id)
        .bind(&request.request_id)
        .bind(&request.make)
        .bind(&request.model)
        .bind(&request.year)
        .bind(&request.variant)
        .bind(&request.odometer)
        .bind(&request.condition)
        .bind(&request.location)
        .bind(&request.contact_name)
        .bind(&request.contact_email)
        .bind(&request.contact_phone)
        .bind(&request.source)
        .bind(request.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    const INIT_MIGRATION: &str = include_str!("../../migrations/20250101000000_init.sql");

    fn table_definition(table: &str) -> &'static str {
        let start = INIT_MIGRATION
            .find(&format!("CREATE TABLE IF NOT EXISTS {} (", table))
            .unwrap();
        let end = start + INIT_MIGRATION[start..].find(");").unwrap();
        &INIT_MIGRATION[start..end]
    }

    #[test]
    fn test_valuation_reference_is_not_a_key() {
        let valuations = table_definition("valuation_requests");
        assert!(valuations.contains("id             UUID PRIMARY KEY"));
        assert!(valuations.contains("request_id     TEXT NOT NULL,"));
        assert!(!valuations.contains("request_id     TEXT PRIMARY KEY"));
        assert!(!valuations.contains("UNIQUE"));
    }
}
