pub mod round_id;
pub mod validated_json;

pub use round_id::RoundId;
pub use validated_json::ValidatedJson;
