//! Ingestion pipeline integration tests
//!
//! Runs whole uploads against an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::{RosterFactory, TestDatabase};
    use crate::{assert_err, assert_ok};
    use roster_ingest::RosterError;
    use roster_ingest::config::IngestionConfig;
    use roster_ingest::core::ingestion::RosterIngestor;

    fn ingestor(db: &TestDatabase) -> RosterIngestor {
        RosterIngestor::new(db.db_arc(), IngestionConfig::default())
    }

    /// 65 rows: two batches of quota 38, rows 1-33 in B1 and 34-65 in B2
    #[tokio::test]
    async fn test_65_rows_two_batches() {
        let db = TestDatabase::with_division("FY-A").await;

        let report = assert_ok!(ingestor(&db).ingest("FY-A", &RosterFactory::upload(65)).await);
        assert_eq!(report.result.success, 65);
        assert_eq!(report.result.failed, 0);
        assert_eq!(report.batches.created, 2);

        let batches = db.db().list_batches("FY-A").await.unwrap();
        let codes: Vec<&str> = batches.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, vec!["B1", "B2"]);
        assert!(batches.iter().all(|b| b.capacity == 38 && b.is_active));

        let students = db.db().list_students("FY-A").await.unwrap();
        let rolls: Vec<u32> = students.iter().map(|s| s.roll_number).collect();
        assert_eq!(rolls, (1..=65).collect::<Vec<u32>>());

        let b1 = batches[0].id.unwrap();
        let b2 = batches[1].id.unwrap();
        assert!(students[..33].iter().all(|s| s.batch_id == b1));
        assert!(students[33..].iter().all(|s| s.batch_id == b2));
        assert_eq!(students[0].prn, "PRN0001");
        assert_eq!(students[64].prn, "PRN0065");
    }

    /// 70 rows is the smallest roster with three batches
    #[tokio::test]
    async fn test_70_rows_three_batches() {
        let db = TestDatabase::with_division("FY-A").await;

        let report = assert_ok!(ingestor(&db).ingest("FY-A", &RosterFactory::upload(70)).await);
        assert_eq!(report.batches.total, 3);

        let batches = db.db().list_batches("FY-A").await.unwrap();
        assert_eq!(batches.len(), 3);
        // ceil(70 / 3) + 5
        assert!(batches.iter().all(|b| b.capacity == 29));
    }

    /// Uploading the same file twice leaves N students and reuses the batches
    #[tokio::test]
    async fn test_reupload_is_idempotent() {
        let db = TestDatabase::with_division("FY-A").await;
        let ingestor = ingestor(&db);

        assert_ok!(ingestor.ingest("FY-A", &RosterFactory::upload(40)).await);
        let second = assert_ok!(ingestor.ingest("FY-A", &RosterFactory::upload(40)).await);

        assert_eq!(second.result.success, 40);
        assert_eq!(second.batches.created, 0);
        assert_eq!(second.batches.reused, 2);
        assert_eq!(db.db().count_students("FY-A").await.unwrap(), 40);
        assert_eq!(db.db().list_batches("FY-A").await.unwrap().len(), 2);
    }

    /// Quotas are recomputed from the latest roster, not accumulated
    #[tokio::test]
    async fn test_quota_recomputed_on_growth() {
        let db = TestDatabase::with_division("FY-A").await;
        let ingestor = ingestor(&db);

        assert_ok!(ingestor.ingest("FY-A", &RosterFactory::upload(65)).await);
        let grown = assert_ok!(ingestor.ingest("FY-A", &RosterFactory::upload(80)).await);

        assert_eq!(grown.batches.reused, 2);
        assert_eq!(grown.batches.created, 1);

        let batches = db.db().list_batches("FY-A").await.unwrap();
        // ceil(80 / 3) + 5
        assert!(batches.iter().all(|b| b.capacity == 32));
        assert_eq!(db.db().count_students("FY-A").await.unwrap(), 80);

        let last = db
            .db()
            .find_student_by_prn("PRN0080")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(last.batch_id, batches[2].id.unwrap());
    }

    /// A row without email fails alone; its roll slot is not reused
    #[tokio::test]
    async fn test_missing_email_row() {
        let db = TestDatabase::with_division("FY-A").await;
        let upload = RosterFactory::upload_text(RosterFactory::csv_with_blank_emails(10, &[4]));

        let report = assert_ok!(ingestor(&db).ingest("FY-A", &upload).await);
        assert_eq!(report.result.success, 9);
        assert_eq!(report.result.failed, 1);
        assert!(report.result.errors[0].starts_with("Row 4: missing data"));
        assert!(report.result.errors[0].contains("PRN0004"));

        let fifth = db
            .db()
            .find_student_by_prn("PRN0005")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fifth.roll_number, 5);
        assert!(db.db().find_student_by_prn("PRN0004").await.unwrap().is_none());
    }

    /// A PRN repeated within one file updates the same student
    #[tokio::test]
    async fn test_duplicate_prn_in_file_updates_in_place() {
        let db = TestDatabase::with_division("FY-A").await;
        let text = "Student Name,PRN Number,Email\n\
                    Ada,PRN1,ada@example.edu\n\
                    Bob,PRN2,bob@example.edu\n\
                    Ada L,PRN1,ada.l@example.edu\n";
        let ingestor = RosterIngestor::new(db.db_arc(), IngestionConfig::sequential());

        let report = assert_ok!(ingestor.ingest("FY-A", &RosterFactory::upload_text(text)).await);
        assert_eq!(report.result.success, 3);
        assert_eq!(db.db().count_students("FY-A").await.unwrap(), 2);

        let ada = db.db().find_student_by_prn("PRN1").await.unwrap().unwrap();
        assert_eq!(ada.name, "Ada L");
        assert_eq!(ada.roll_number, 3);
    }

    /// Unknown division aborts before any write
    #[tokio::test]
    async fn test_unknown_division_writes_nothing() {
        let db = TestDatabase::with_division("FY-A").await;

        let err = assert_err!(ingestor(&db).ingest("FY-Z", &RosterFactory::upload(5)).await);
        assert!(matches!(err, RosterError::DivisionNotFound(_)));
        assert!(db.db().list_batches("FY-Z").await.unwrap().is_empty());
        assert_eq!(db.db().count_students("FY-Z").await.unwrap(), 0);
    }

    /// Missing PRN column aborts with a schema error and no writes
    #[tokio::test]
    async fn test_missing_prn_column_writes_nothing() {
        let db = TestDatabase::with_division("FY-A").await;
        let upload = RosterFactory::upload_text("Student Name,Email\nAda,ada@example.edu\n");

        let err = assert_err!(ingestor(&db).ingest("FY-A", &upload).await);
        assert_eq!(err.to_string(), "Missing required columns: PRN Number");
        assert!(db.db().list_batches("FY-A").await.unwrap().is_empty());
        assert_eq!(db.db().count_students("FY-A").await.unwrap(), 0);
    }
}
