/*!
Errors and field reason codes.
*/
use serde::{Deserialize, Serialize};

pub use reqwest::Error as Http;
pub use serde_json::Error as Json;

/// Why a field slot is invalid.
///
/// Reasons are stable identifiers handed to the internationalization layer.
/// They are stored in [`AddressFieldState`](crate::AddressFieldState) and
/// never raised as failures.
#[derive(thiserror::Error, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// A required field is empty.
    #[error("required field is empty")]
    MissingRequired,

    /// The value is not one of the field's options.
    #[error("value is not one of the field options")]
    InvalidOption,

    /// The value does not match the field's pattern.
    #[error("value does not match the field pattern")]
    PatternMismatch,

    /// The lookup service does not know the postal code.
    #[error("postal code not found")]
    PostalCodeNotFound,

    /// The lookup service did not answer in time.
    #[error("postal code lookup timed out")]
    PostalCodeLookupTimeout,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        use Reason::*;
        match *self {
            MissingRequired => "MISSING_REQUIRED",
            InvalidOption => "INVALID_OPTION",
            PatternMismatch => "PATTERN_MISMATCH",
            PostalCodeNotFound => "POSTAL_CODE_NOT_FOUND",
            PostalCodeLookupTimeout => "POSTAL_CODE_LOOKUP_TIMEOUT",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Http(#[from] Http),
    #[error("{0}")]
    Json(#[from] Json),
    #[error("{0}")]
    Url(#[from] url::ParseError),
    #[error("Url must use TLS: '{0}'")]
    Insecure(url::Url),
    #[error("Url: Path segments is cannot-be-a-base")]
    CannotBeABase,
    #[error("Lookup service answered with status {0}")]
    UnexpectedStatus(u16),
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Invalid field definition: {0}")]
    InvalidField(#[from] validator::ValidationErrors),
    #[error("Field '{0}' is defined more than once")]
    DuplicateField(String),
    #[error("Fields '{0}' and '{1}' both trigger the postal code lookup")]
    MultipleLookupFields(String, String),
    #[error("Lookup field '{0}' cannot be filled by its own lookup")]
    LookupFieldFilledByLookup(String),
    #[error("Country '{0}' is registered more than once")]
    DuplicateCountry(String),
    #[error("No field named '{0}' in this form")]
    UnknownField(String),
    #[error("Field '{0}' cannot be marked as not applicable")]
    NotOmittable(String),
}
