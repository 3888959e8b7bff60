//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors expose stable error codes
//! - Error responses are properly formatted
//! - Error conversions work correctly
//! - Error matching allows callers to handle specific cases

use obitflow::prelude::*;

// =============================================================================
// Error Code Tests
// =============================================================================

mod error_code_tests {
    use super::*;

    #[test]
    fn test_order_error_codes() {
        assert_eq!(
            OrderError::NotFound { id: Uuid::nil() }.error_code(),
            "ORDER_NOT_FOUND"
        );
    }

    #[test]
    fn test_ad_error_codes() {
        assert_eq!(
            AdError::NotFound { id: Uuid::nil() }.error_code(),
            "AD_NOT_FOUND"
        );
        assert_eq!(AdError::CommentRequired.error_code(), "COMMENT_REQUIRED");
        assert_eq!(
            AdError::InvalidTransition {
                from: AdStatus::Approved,
                to: AdStatus::SentForApproval,
            }
            .error_code(),
            "INVALID_TRANSITION"
        );
    }

    #[test]
    fn test_top_level_codes() {
        assert_eq!(
            ObitError::Validation(ValidationError::MissingFields(vec!["fornavn".into()]))
                .error_code(),
            "VALIDATION_FAILED"
        );
        assert_eq!(
            ObitError::Internal("lock poisoned".to_string()).error_code(),
            "INTERNAL_ERROR"
        );
    }
}

// =============================================================================
// Error Response Tests
// =============================================================================

mod error_response_tests {
    use super::*;

    #[test]
    fn test_not_found_response_carries_id() {
        let id = Uuid::new_v4();
        let response = ObitError::Advertisement(AdError::NotFound { id }).to_response();

        assert_eq!(response.code, "AD_NOT_FOUND");
        assert!(response.message.contains(&id.to_string()));
        assert_eq!(response.details.unwrap()["id"], id.to_string());
    }

    #[test]
    fn test_invalid_transition_response_carries_labels() {
        let response = ObitError::Advertisement(AdError::InvalidTransition {
            from: AdStatus::Approved,
            to: AdStatus::SentForApproval,
        })
        .to_response();

        let details = response.details.unwrap();
        assert_eq!(details["from"], "Godkjent");
        assert_eq!(details["to"], "Sendt til godkjenning");
    }

    #[test]
    fn test_response_serializes_without_empty_details() {
        let response = ObitError::Advertisement(AdError::CommentRequired).to_response();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("details").is_none());
    }
}

// =============================================================================
// Error Matching Tests
// =============================================================================

mod error_matching_tests {
    use super::*;

    #[tokio::test]
    async fn test_caller_can_match_specific_errors() {
        let orders = InMemoryOrderStore::new();

        let result = orders.create(NewOrder::default()).await;
        match result {
            Err(ObitError::Validation(ValidationError::MissingFields(fields))) => {
                assert_eq!(fields, vec!["fornavn", "etternavn", "seremonitype"]);
            }
            other => panic!("expected MissingFields, got {:?}", other.map(|o| o.id)),
        }
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;

        let err = ObitError::Order(OrderError::NotFound { id: Uuid::nil() });
        assert!(err.source().is_some());

        let err = ObitError::Internal("oops".to_string());
        assert!(err.source().is_none());
    }
}
