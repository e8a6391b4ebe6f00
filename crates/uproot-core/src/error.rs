use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Not a stable API; intended for internal use and may change without notice.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl InternalError {
    #[must_use]
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// TargetError
/// Errors raised while validating the record under preview.
///

#[derive(Debug, ThisError)]
pub enum TargetError {
    #[error("cannot preview deletion of an unsaved {entity} value; pass a persisted instance")]
    Unsaved { entity: &'static str },
}

impl TargetError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::Unsaved { .. } => ErrorClass::InvariantViolation,
        }
    }
}

impl From<TargetError> for InternalError {
    fn from(err: TargetError) -> Self {
        Self::new(err.class(), ErrorOrigin::Target, err.to_string())
    }
}

///
/// PageError
/// Errors related to interpreting the paginated view.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum PageError {
    #[error("page {number} is out of range (1..={pages})")]
    OutOfRange { number: u32, pages: u32 },
}

impl PageError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::OutOfRange { .. } => ErrorClass::NotFound,
        }
    }
}

impl From<PageError> for InternalError {
    fn from(err: PageError) -> Self {
        Self::new(err.class(), ErrorOrigin::Page, err.to_string())
    }
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    NotFound,
    Conflict,
    Unsupported,
    InvariantViolation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Unsupported => "unsupported",
            Self::InvariantViolation => "invariant_violation",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Target,
    Collector,
    Page,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Target => "target",
            Self::Collector => "collector",
            Self::Page => "page",
        };
        write!(f, "{label}")
    }
}
