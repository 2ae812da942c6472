//! Upload route integration tests
//!
//! Drives `POST /divisions/{division_id}/students/upload` through the full
//! actix application with hand-built multipart bodies.

#[cfg(test)]
mod tests {
    use crate::common::{MultipartBody, RosterFactory};
    use actix_web::http::{StatusCode, header};
    use actix_web::{test, web};
    use roster_ingest::config::{Config, DatabaseConfig};
    use roster_ingest::core::models::Division;
    use roster_ingest::server::{AppState, HttpServer};
    use roster_ingest::storage::database::Database;

    async fn state_with(config: Config) -> web::Data<AppState> {
        let database = Database::new(&config.storage().database)
            .await
            .expect("Failed to create database");
        database.migrate().await.expect("Migration failed");
        database
            .create_division(&Division::new("FY-A", "First Year A"))
            .await
            .expect("Failed to seed division");
        web::Data::new(AppState::new(config, database))
    }

    fn test_config() -> Config {
        let mut config = Config::default();
        config.app.storage.database = DatabaseConfig::in_memory();
        config
    }

    fn upload_request(division_id: &str, body: MultipartBody) -> test::TestRequest {
        let (content_type, payload) = body.finish();
        test::TestRequest::post()
            .uri(&format!("/divisions/{}/students/upload", division_id))
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(payload)
    }

    fn csv_file(rows: usize) -> MultipartBody {
        MultipartBody::new().file(
            "file",
            "roster.csv",
            "text/csv",
            RosterFactory::csv(rows).as_bytes(),
        )
    }

    #[actix_web::test]
    async fn test_upload_success() {
        let state = state_with(test_config()).await;
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        let req = upload_request("FY-A", csv_file(65)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["success"], 65);
        assert_eq!(body["data"]["failed"], 0);
        assert_eq!(body["data"]["errors"].as_array().map(Vec::len), Some(0));
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains("2 batches (2 created, 0 reused)")
        );

        assert_eq!(state.database.count_students("FY-A").await.unwrap(), 65);
    }

    #[actix_web::test]
    async fn test_upload_partial_failure_is_ok() {
        let state = state_with(test_config()).await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        let csv = RosterFactory::csv_with_blank_emails(5, &[2]);
        let body = MultipartBody::new()
            .text("note", "spring intake")
            .file("file", "roster.csv", "text/csv", csv.as_bytes());
        let req = upload_request("FY-A", body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["success"], 4);
        assert_eq!(body["data"]["failed"], 1);
        assert!(
            body["data"]["errors"][0]
                .as_str()
                .unwrap()
                .starts_with("Row 2: missing data")
        );
    }

    #[actix_web::test]
    async fn test_upload_missing_column() {
        let state = state_with(test_config()).await;
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        let body = MultipartBody::new().file(
            "file",
            "roster.csv",
            "text/csv",
            b"Student Name,Email\nAda,ada@example.edu\n",
        );
        let req = upload_request("FY-A", body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "SCHEMA_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("PRN Number"));
        assert!(state.database.list_batches("FY-A").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_upload_unsupported_file() {
        let state = state_with(test_config()).await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        let body = MultipartBody::new().file(
            "file",
            "roster.xlsx",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            b"PK\x03\x04",
        );
        let req = upload_request("FY-A", body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNSUPPORTED_FORMAT");
    }

    #[actix_web::test]
    async fn test_upload_unknown_division() {
        let state = state_with(test_config()).await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = upload_request("FY-Z", csv_file(3)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "DIVISION_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_upload_without_file_field() {
        let state = state_with(test_config()).await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        let body = MultipartBody::new().text("note", "no roster attached");
        let req = upload_request("FY-A", body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }

    #[actix_web::test]
    async fn test_upload_too_large() {
        let mut config = test_config();
        config.app.ingestion.max_file_size = 64;
        let state = state_with(config).await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = upload_request("FY-A", csv_file(20)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[actix_web::test]
    async fn test_upload_body_limit_covers_extra_parts() {
        let mut config = test_config();
        config.app.server.max_body_size = 4096;
        config.app.ingestion.max_file_size = 4096;
        config.validate().expect("limits should validate");
        let state = state_with(config).await;
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        let notes = "x".repeat(200 * 1024);
        let body = MultipartBody::new().text("notes", &notes).file(
            "file",
            "roster.csv",
            "text/csv",
            RosterFactory::csv(10).as_bytes(),
        );
        let req = upload_request("FY-A", body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
        assert_eq!(state.database.count_students("FY-A").await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_upload_body_limit_counts_trailing_parts() {
        let mut config = test_config();
        config.app.server.max_body_size = 4096;
        config.app.ingestion.max_file_size = 4096;
        let state = state_with(config).await;
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        let notes = "x".repeat(200 * 1024);
        let (content_type, payload) = csv_file(10).text("notes", &notes).finish();
        // No Content-Length, so only the streamed byte count can catch it
        let mut req = test::TestRequest::post()
            .uri("/divisions/FY-A/students/upload")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(payload)
            .to_request();
        req.headers_mut().remove(header::CONTENT_LENGTH);
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(state.database.count_students("FY-A").await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_upload_small_extra_part_within_body_limit() {
        let mut config = test_config();
        config.app.server.max_body_size = 4096;
        config.app.ingestion.max_file_size = 4096;
        let state = state_with(config).await;
        let app = test::init_service(HttpServer::create_app(state)).await;

        let body = MultipartBody::new()
            .text("notes", "spring intake")
            .file("file", "roster.csv", "text/csv", RosterFactory::csv(10).as_bytes());
        let req = upload_request("FY-A", body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_reupload_over_http_is_idempotent() {
        let state = state_with(test_config()).await;
        let app = test::init_service(HttpServer::create_app(state.clone())).await;

        for _ in 0..2 {
            let req = upload_request("FY-A", csv_file(30)).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        assert_eq!(state.database.count_students("FY-A").await.unwrap(), 30);
        assert_eq!(state.database.list_batches("FY-A").await.unwrap().len(), 2);
    }
}
