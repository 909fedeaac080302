//! Server-side request interceptor.

use common::{RequestContext, REQUEST_ID_HEADER};
use tonic::{metadata::MetadataValue, Request, Status};

/// Make sure every call carries an `x-request-id`, generating one if the
/// client did not send it.
pub fn request_id_interceptor(mut request: Request<()>) -> Result<Request<()>, Status> {
    let ctx = RequestContext::from_metadata(request.metadata());
    let value = MetadataValue::try_from(ctx.request_id())
        .map_err(|_| Status::internal("Failed to create request ID"))?;
    request.metadata_mut().insert(REQUEST_ID_HEADER, value);

    tracing::debug!(request_id = %ctx.request_id(), "Incoming gRPC request");
    Ok(request)
}
