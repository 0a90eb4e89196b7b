#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid direction convention `{0}` (expected `M` or `V`)")]
    InvalidConvention(String),
    #[error("{operation} is undefined: {reason}")]
    Domain {
        operation: &'static str,
        reason: &'static str,
    },
    #[error("wavelength did not converge after {iterations} iterations (residual {residual:.4}m)")]
    NotConverged { iterations: u32, residual: f64 },
    #[error("invalid constants: {0}")]
    InvalidConstants(&'static str),
    #[error("failed to read constants file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse constants file: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) fn domain(operation: &'static str, reason: &'static str) -> Error {
    tracing::debug!(operation, reason, "rejected input");
    Error::Domain { operation, reason }
}
