//! External representation of file records.

use crate::domain::FileRecord;

/// Redacting transforms applied to file records before they leave the
/// service.
#[cfg_attr(test, mockall::automock)]
pub trait FilePresenter: Send + Sync {
    /// Replace every non-space character of the owner with `x`.
    fn anonymize_owner(&self, record: FileRecord) -> FileRecord;

    /// Drop the record identifier.
    fn remove_identifier(&self, record: FileRecord) -> FileRecord;
}

/// Default [`FilePresenter`].
///
/// # Examples
/// ```
/// use bookshop::domain::FileRecord;
/// use bookshop::inbound::http::file_presenter::{FilePresenter, MaskingFilePresenter};
///
/// let record = FileRecord {
///     owner: Some("Jane Doe".to_owned()),
///     ..FileRecord::default()
/// };
/// let masked = MaskingFilePresenter.anonymize_owner(record);
/// assert_eq!(masked.owner.as_deref(), Some("xxxx xxx"));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MaskingFilePresenter;

impl FilePresenter for MaskingFilePresenter {
    fn anonymize_owner(&self, mut record: FileRecord) -> FileRecord {
        record.owner = record
            .owner
            .map(|owner| owner.chars().map(|c| if c == ' ' { ' ' } else { 'x' }).collect());
        record
    }

    fn remove_identifier(&self, mut record: FileRecord) -> FileRecord {
        record.id = None;
        record
    }
}
