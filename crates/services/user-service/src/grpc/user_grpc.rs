//! gRPC implementation for UsersService.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{info_span, Instrument};
use validator::Validate;

use common::{AppError, AppResult, RequestContext};
use domain::NewUser;
use proto::users::v1::{
    users_service_server::UsersService, CreateUserRequest, CreateUserResponse, DeleteUserRequest,
    DeleteUserResponse,
};

use crate::service::UserService;

/// gRPC service wrapper for UserService.
pub struct UserGrpcService {
    service: Arc<dyn UserService>,
}

impl UserGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn UserService>) -> Self {
        Self { service }
    }
}

/// Run the rules declared on the wire message.
fn validate_message<T: Validate>(message: &T) -> AppResult<()> {
    message
        .validate()
        .map_err(|e| AppError::Validation(proto::validation::violations(&e)))
}

#[tonic::async_trait]
impl UsersService for UserGrpcService {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let ctx = RequestContext::from_metadata(request.metadata());
        let span = info_span!("grpc.create_user", request_id = %ctx.request_id());
        let ctx = ctx.with_span(span.clone());

        let req = request.into_inner();
        validate_message(&req).map_err(|e| e.into_status(&ctx))?;

        let user = self
            .service
            .create(&ctx, NewUser::new(req.username, req.password))
            .instrument(span)
            .await
            .map_err(|e| e.into_status(&ctx))?;

        Ok(Response::new(CreateUserResponse {
            user: Some(user.into()),
        }))
    }

    async fn delete_user(
        &self,
        _request: Request<DeleteUserRequest>,
    ) -> Result<Response<DeleteUserResponse>, Status> {
        Err(Status::unimplemented("method DeleteUser not implemented"))
    }
}
