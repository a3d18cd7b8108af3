use crate::db::UserStore;
use crate::error::AppError;
use crate::models::{Submission, UserRecord};

use super::guard;
use super::sanitize;
use super::validate;

/// Guard, sanitize, validate, build, persist. Returns the stored record.
pub async fn run(
    store: &dyn UserStore,
    submission: Option<&Submission>,
) -> Result<UserRecord, AppError> {
    let submission = guard::require_fields(submission).inspect_err(|_| {
        tracing::debug!("Submission rejected: missing fields");
    })?;

    let fields = sanitize::sanitize_submission(submission);

    let violations = validate::validate(&fields);
    if !violations.is_empty() {
        tracing::debug!("Submission rejected: {:?}", violations);
        return Err(AppError::Validation(violations));
    }

    let record = UserRecord::build(fields);

    let created = store.create(&record).await?;

    tracing::info!("Created item with id: {}", created.id);
    Ok(created)
}
