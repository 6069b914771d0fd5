use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown CBC field: {0}")]
    UnknownField(String),

    #[error("invalid value for {field}: '{value}' is not a number")]
    InvalidValue { field: String, value: String },

    #[error("invalid test date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: jiff::Error,
    },
}
