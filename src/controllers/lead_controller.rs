use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::lead_dto::{InquiryRequest, InquiryResponse, ValuationRequestDto, ValuationResponse};
use crate::models::{EnquiryType, Inquiry, ValuationRequest};
use crate::repositories::LeadRepository;
use crate::utils::errors::AppError;

pub const VALUATION_TURNAROUND: &str = "24-48 hours";

pub struct LeadController {
    repository: Arc<dyn LeadRepository>,
}

impl LeadController {
    pub fn new(repository: Arc<dyn LeadRepository>) -> Self {
        Self { repository }
    }

    pub async fn submit_inquiry(&self, request: InquiryRequest) -> Result<InquiryResponse, AppError> {
        request.validate()?;

        let enquiry_type: EnquiryType = request
            .enquiry_type
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(AppError::BadRequest)?;
        let inquiry = Inquiry {
            id: Uuid::new_v4(),
            enquiry_type,
            name: request.name,
            email: request.email,
            phone: non_empty(request.phone),
            message: request.message,
            vehicle_id: request.vehicle_id,
            vehicle_make: non_empty(request.vehicle_make),
            vehicle_model: non_empty(request.vehicle_model),
            vehicle_year: non_empty(request.vehicle_year),
            vehicle_condition: non_empty(request.vehicle_condition),
            budget: non_empty(request.budget),
            preferred_location: non_empty(request.preferred_location),
            created_at: Utc::now(),
        };

        self.repository.save_inquiry(&inquiry).await?;
        info!(
            "📨 Consulta recibida: {} ({}) de {}",
            enquiry_type.title(),
            enquiry_type.as_str(),
            inquiry.email
        );

        Ok(InquiryResponse {
            success: true,
            message: "Thank you for your enquiry. We'll be in touch shortly.".to_string(),
            inquiry_id: inquiry.id.to_string(),
        })
    }

    pub async fn submit_valuation(&self, request: ValuationRequestDto) -> Result<ValuationResponse, AppError> {
        request.validate()?;

        let now = Utc::now();
        let valuation = ValuationRequest {
            id: Uuid::new_v4(),
            request_id: format!("VAL-{}", now.timestamp_millis()),
            make: request.make,
            model: request.model,
            year: request.year,
            variant: non_empty(request.variant),
            odometer: request.odometer,
            condition: request.condition,
            location: request.location,
            contact_name: request.contact_info.name,
            contact_email: request.contact_info.email,
            contact_phone: request.contact_info.phone,
            source: non_empty(request.source),
            created_at: now,
        };

        self.repository.save_valuation_request(&valuation).await?;
        info!(
            "💰 Solicitud de tasación {}: {} {} {} ({})",
            valuation.request_id, valuation.make, valuation.model, valuation.year, valuation.location
        );

        Ok(ValuationResponse {
            success: true,
            message: "Valuation request submitted successfully".to_string(),
            request_id: valuation.request_id,
            estimated_completion: VALUATION_TURNAROUND.to_string(),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::lead_dto::ContactInfo;
    use crate::repositories::InMemoryLeadRepository;

    fn inquiry(enquiry_type: Option<&str>) -> InquiryRequest {
        InquiryRequest {
            enquiry_type: enquiry_type.map(str::to_string),
            name: "Jordan Lee".to_string(),
            email: "jordan@example.com".to_string(),
            phone: Some("".to_string()),
            message: "Is the Ranger still available?".to_string(),
            vehicle_id: Some(4),
            vehicle_make: None,
            vehicle_model: None,
            vehicle_year: None,
            vehicle_condition: None,
            budget: None,
            preferred_location: None,
        }
    }

    fn valuation() -> ValuationRequestDto {
        ValuationRequestDto {
            make: "Toyota".to_string(),
            model: "Hilux".to_string(),
            year: "2016".to_string(),
            variant: Some("SR5".to_string()),
            odometer: "145000".to_string(),
            condition: "poor".to_string(),
            location: "QLD".to_string(),
            contact_info: ContactInfo {
                name: "Sam Taylor".to_string(),
                email: "sam@example.com".to_string(),
                phone: "0400 000 000".to_string(),
            },
            source: Some("redbook".to_string()),
            timestamp: None,
        }
    }

    #[tokio::test]
    async fn test_inquiry_defaults_to_general_and_is_stored() {
        let repo = InMemoryLeadRepository::new();
        let controller = LeadController::new(Arc::new(repo.clone()));

        let response = controller.submit_inquiry(inquiry(None)).await.unwrap();
        assert!(response.success);

        let stored = repo.inquiries().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].enquiry_type, EnquiryType::General);
        assert_eq!(stored[0].vehicle_id, Some(4));
        assert_eq!(stored[0].phone, None);
        assert_eq!(stored[0].id.to_string(), response.inquiry_id);
    }

    #[tokio::test]
    async fn test_blank_enquiry_type_is_general() {
        let repo = InMemoryLeadRepository::new();
        let controller = LeadController::new(Arc::new(repo.clone()));

        controller.submit_inquiry(inquiry(Some(""))).await.unwrap();
        assert_eq!(repo.inquiries().await[0].enquiry_type, EnquiryType::General);
    }

    #[tokio::test]
    async fn test_inquiry_with_sell_details() {
        let repo = InMemoryLeadRepository::new();
        let controller = LeadController::new(Arc::new(repo.clone()));
        let request = InquiryRequest {
            vehicle_make: Some("Holden".to_string()),
            vehicle_model: Some("Commodore".to_string()),
            ..inquiry(Some("sell"))
        };

        controller.submit_inquiry(request).await.unwrap();
        let stored = repo.inquiries().await;
        assert_eq!(stored[0].enquiry_type, EnquiryType::Sell);
        assert_eq!(stored[0].vehicle_make.as_deref(), Some("Holden"));
    }

    #[tokio::test]
    async fn test_inquiry_rejects_bad_fields() {
        let controller = LeadController::new(Arc::new(InMemoryLeadRepository::new()));

        let bad_type = controller.submit_inquiry(inquiry(Some("complaint"))).await;
        assert!(matches!(bad_type, Err(AppError::Validation(_))));

        let bad_email = InquiryRequest { email: "not-an-email".to_string(), ..inquiry(None) };
        assert!(matches!(controller.submit_inquiry(bad_email).await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_valuation_returns_request_id() {
        let repo = InMemoryLeadRepository::new();
        let controller = LeadController::new(Arc::new(repo.clone()));

        let response = controller.submit_valuation(valuation()).await.unwrap();
        assert!(response.request_id.starts_with("VAL-"));
        assert_eq!(response.estimated_completion, "24-48 hours");

        let stored = repo.valuation_requests().await;
        assert_eq!(stored[0].request_id, response.request_id);
        assert_eq!(stored[0].contact_email, "sam@example.com");
    }

    #[tokio::test]
    async fn test_repeated_valuation_reference_keeps_both_leads() {
        let repo = InMemoryLeadRepository::new();
        let controller = LeadController::new(Arc::new(repo.clone()));

        controller.submit_valuation(valuation()).await.unwrap();
        controller.submit_valuation(valuation()).await.unwrap();

        let stored = repo.valuation_requests().await;
        assert_eq!(stored.len(), 2);
        assert_ne!(stored[0].id, stored[1].id);
        assert!(stored.iter().all(|v| v.request_id.starts_with("VAL-")));
    }

    #[tokio::test]
    async fn test_valuation_validates_nested_contact() {
        let controller = LeadController::new(Arc::new(InMemoryLeadRepository::new()));
        let mut request = valuation();
        request.contact_info.phone = "12345".to_string();

        match controller.submit_valuation(request).await {
            Err(AppError::Validation(errors)) => {
                assert!(errors.errors().contains_key("contact_info"));
            }
            other => panic!("expected validation error, got {:?}", other.map(|r| r.request_id)),
        }
    }
}
