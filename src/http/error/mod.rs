use error_stack::{Context, Report};
use tracing_error::SpanTrace;

use crate::types;

mod impls;

/// Service-layer error: the wire-visible [`types::Error`] plus the full
/// report and span trace, which stay server-side.
pub struct Error {
    error_type: types::Error,
    report: Option<Report<Box<dyn Context>>>,
    trace: SpanTrace,
}

impl Error {
    #[must_use]
    pub fn new(error_type: types::Error) -> Self {
        Self {
            error_type,
            report: None,
            trace: SpanTrace::capture(),
        }
    }

    #[must_use]
    pub fn from_report(error_type: types::Error, report: Report<impl Context>) -> Self {
        Self {
            error_type,
            report: Some(cast_to_any_report(report)),
            trace: SpanTrace::capture(),
        }
    }

    #[must_use]
    pub fn unauthorized() -> Self {
        Self::new(types::Error::Unauthorized)
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::new(types::Error::NotFound)
    }

    #[must_use]
    pub fn invalid_request(message: impl Into<std::borrow::Cow<'static, str>>) -> Self {
        Self::new(types::Error::InvalidRequest {
            message: message.into(),
        })
    }
}

impl Error {
    #[must_use]
    pub fn as_type(&self) -> &types::Error {
        &self.error_type
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Error")
            .field("type", &self.error_type)
            .field("report", &self.report)
            .field("trace", &self.trace)
            .finish()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.error_type)?;
        if let Some(report) = &self.report {
            writeln!(f)?;
            writeln!(f, "{report:?}")?;
        }
        std::fmt::Display::fmt(&self.trace, f)
    }
}

fn cast_to_any_report(report: Report<impl Context>) -> Report<Box<dyn Context>> {
    // SAFETY: `Report`'s context generic is a marker for the current
    // context type; the underlying frame storage is identical.
    unsafe { std::mem::transmute::<_, Report<Box<dyn Context>>>(report) }
}
