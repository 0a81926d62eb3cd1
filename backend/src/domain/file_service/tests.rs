//! Tests for the file record use cases.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use uuid::Uuid;

use super::*;
use crate::domain::ports::MockFileRepository;
use crate::domain::{AsDomainError, DomainError};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn service(repo: MockFileRepository, now: DateTime<Utc>) -> FileService<MockFileRepository> {
    FileService::new(Arc::new(repo), Arc::new(FixedClock(now)))
}

#[rstest]
#[tokio::test]
async fn upload_stamps_creation_time(now: DateTime<Utc>) {
    let mut repo = MockFileRepository::new();
    repo.expect_store()
        .withf(move |record| record.created == Some(now) && record.id.is_none())
        .times(1)
        .return_once(|record| {
            Ok(FileRecord {
                id: Some(Uuid::new_v4().to_string()),
                ..record
            })
        });

    let stored = service(repo, now)
        .upload(FileRecord {
            name: Some("notes.txt".to_owned()),
            owner: Some("Jane Doe".to_owned()),
            ..FileRecord::default()
        })
        .await
        .expect("upload succeeds");

    assert!(stored.id.is_some());
    assert_eq!(stored.created, Some(now));
    assert_eq!(stored.name.as_deref(), Some("notes.txt"));
}

#[rstest]
#[tokio::test]
async fn retrieve_rejects_malformed_identifier(now: DateTime<Utc>) {
    let mut repo = MockFileRepository::new();
    repo.expect_get().never();

    let err = service(repo, now)
        .retrieve("nope")
        .await
        .expect_err("invalid id");

    assert_eq!(err.domain_error(), Some(DomainError::InvalidIdentifier(Resource::File)));
}

#[rstest]
#[tokio::test]
async fn retrieve_translates_absence_into_not_found(now: DateTime<Utc>) {
    let mut repo = MockFileRepository::new();
    repo.expect_get()
        .return_once(|id| Err(FileRepositoryError::not_found(id)));

    let err = service(repo, now)
        .retrieve(&Uuid::new_v4().to_string())
        .await
        .expect_err("absent file");

    assert_eq!(err.to_string(), "file not found");
}

#[rstest]
#[tokio::test]
async fn delete_returns_removed_record(now: DateTime<Utc>) {
    let id = Uuid::new_v4();
    let mut repo = MockFileRepository::new();
    repo.expect_delete()
        .withf(move |requested| *requested == id)
        .return_once(|requested| {
            Ok(FileRecord {
                name: Some("notes.txt".to_owned()),
                ..FileRecord::with_id(requested.to_string())
            })
        });

    let removed = service(repo, now)
        .delete(&id.to_string())
        .await
        .expect("delete succeeds");

    assert_eq!(removed.id, Some(id.to_string()));
    assert_eq!(removed.name.as_deref(), Some("notes.txt"));
}

#[rstest]
#[tokio::test]
async fn delete_treats_absence_as_success(now: DateTime<Utc>) {
    let id = Uuid::new_v4().to_string();
    let mut repo = MockFileRepository::new();
    repo.expect_delete()
        .return_once(|requested| Err(FileRepositoryError::not_found(requested)));

    let removed = service(repo, now).delete(&id).await.expect("idempotent");

    assert_eq!(removed, FileRecord::with_id(id));
}

#[rstest]
#[tokio::test]
async fn delete_passes_store_failures_through(now: DateTime<Utc>) {
    let mut repo = MockFileRepository::new();
    repo.expect_delete()
        .return_once(|_| Err(FileRepositoryError::store("unreachable")));

    let err = service(repo, now)
        .delete(&Uuid::new_v4().to_string())
        .await
        .expect_err("store failure");

    assert_eq!(err, Error::from(FileRepositoryError::store("unreachable")));
}
