//! Per-request observability handle.
//!
//! Carries the correlation id and the parent span explicitly through the
//! service layer instead of relying on task-local state.

use tonic::metadata::MetadataMap;
use tracing::Span;
use uuid::Uuid;

/// Header (and gRPC metadata key) holding the correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: String,
    span: Span,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>, span: Span) -> Self {
        Self {
            request_id: request_id.into(),
            span,
        }
    }

    /// Fresh correlation id in UUID simple format.
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().simple().to_string(), Span::current())
    }

    /// Reuse an incoming correlation id, or generate one when absent or empty.
    pub fn from_request_id(request_id: Option<&str>) -> Self {
        match request_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => Self::new(id, Span::current()),
            None => Self::generate(),
        }
    }

    pub fn from_metadata(metadata: &MetadataMap) -> Self {
        let request_id = metadata
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok());
        Self::from_request_id(request_id)
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// No-op handle: all-zero correlation id and a disabled span.
impl Default for RequestContext {
    fn default() -> Self {
        Self::new(Uuid::nil().simple().to_string(), Span::none())
    }
}
