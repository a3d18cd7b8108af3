use crate::error::AppError;
use crate::models::Submission;

/// Reject a submission unless all three fields are present and non-empty.
/// The submission itself is passed through untouched.
pub fn require_fields(submission: Option<&Submission>) -> Result<&Submission, AppError> {
    let Some(submission) = submission else {
        return Err(AppError::MissingField);
    };

    let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());

    if present(&submission.first_name)
        && present(&submission.last_name)
        && present(&submission.email)
    {
        Ok(submission)
    } else {
        Err(AppError::MissingField)
    }
}
