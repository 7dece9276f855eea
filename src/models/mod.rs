pub mod artifact;
pub mod media_type;
pub mod report;
pub mod upload;
