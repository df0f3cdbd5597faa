use std::error::Error;
use std::fmt;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------
#[derive(Debug, Clone)]
pub struct AmazonsError(String);

pub type AmazonsResult<T> = std::result::Result<T, AmazonsError>;

impl From<String> for AmazonsError {
    fn from(s: String) -> AmazonsError {
        AmazonsError(s)
    }
}

impl From<&str> for AmazonsError {
    fn from(s: &str) -> AmazonsError {
        AmazonsError(s.to_string())
    }
}

impl Error for AmazonsError {}

impl fmt::Display for AmazonsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {}", self.0)
    }
}
