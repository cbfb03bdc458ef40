use std::fmt::{Debug, Display, Formatter};

///
/// An error returned when a severity value or name does not match
/// any of the six known levels
///
pub struct UnknownLevel {
    message: String
}

impl Debug for UnknownLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Display for UnknownLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UnknownLevel {}

impl UnknownLevel {
    pub(crate) fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}
