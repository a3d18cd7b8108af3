pub mod submission;
pub mod user;

pub use submission::{SanitizedFields, Submission};
pub use user::UserRecord;
