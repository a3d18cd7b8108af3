pub mod guard;
pub mod metadata;
pub mod parser;
pub mod pipeline;
pub mod sanitize;
pub mod validate;
