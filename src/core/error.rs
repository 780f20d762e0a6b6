use thiserror::Error;

/// Errors that can occur while building products or filling an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// A caller-supplied argument was rejected. Nothing was mutated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl InvoiceError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}
