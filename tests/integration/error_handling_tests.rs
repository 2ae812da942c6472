//! Error handling integration tests
//!
//! Verifies the HTTP mapping and JSON shape of service errors.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use roster_ingest::RosterError;
    use roster_ingest::utils::error::ErrorResponse;

    async fn body_of(error: &RosterError) -> ErrorResponse {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ==================== Aborting Upload Errors ====================

    #[test]
    fn test_upload_errors_are_bad_requests() {
        let errors = [
            RosterError::unsupported_format("roster.xlsx"),
            RosterError::decode("invalid utf-8"),
            RosterError::schema(["Email"]),
            RosterError::EmptyInput,
            RosterError::division_not_found("FY-Z"),
        ];
        for error in errors {
            assert_eq!(error.status_code(), StatusCode::BAD_REQUEST, "{}", error);
            assert!(error.is_aborting());
        }
    }

    #[test]
    fn test_file_too_large_status() {
        let error = RosterError::FileTooLarge {
            size: 2048,
            limit: 1024,
        };
        assert_eq!(error.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_batch_planning_is_server_error() {
        let error = RosterError::batch_planning("batch B2: connection reset");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.is_aborting());
    }

    // ==================== Generic Errors ====================

    #[test]
    fn test_generic_status_codes() {
        assert_eq!(
            RosterError::not_found("batch 7").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RosterError::conflict("division exists").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            RosterError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert!(!RosterError::not_found("batch 7").is_aborting());
    }

    // ==================== Response Body ====================

    #[actix_web::test]
    async fn test_schema_error_body() {
        let body = body_of(&RosterError::schema(["PRN Number", "Email"])).await;
        assert_eq!(body.error.code, "SCHEMA_ERROR");
        assert_eq!(
            body.error.message,
            "Missing required columns: PRN Number, Email"
        );
        assert!(body.error.timestamp > 0);
    }

    #[actix_web::test]
    async fn test_database_error_is_masked() {
        let error = RosterError::Database(sea_orm::DbErr::Custom("password=secret".to_string()));
        let body = body_of(&error).await;
        assert_eq!(body.error.code, "DATABASE_ERROR");
        assert!(!body.error.message.contains("secret"));
    }
}
