pub mod authorized;
pub mod record_id;
pub mod validated_json;

pub use authorized::Authorized;
pub use record_id::RecordId;
pub use validated_json::ValidatedJson;
