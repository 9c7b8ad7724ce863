use thiserror::Error;

#[derive(Error, Debug)]
pub enum PitchsideError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },

    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl PitchsideError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PitchsideError>;
