//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::resources::{
    AppInfo, ComponentHealth, GitInfo, HealthComponents, HealthResource, InfoResource,
    PageMetadata, UserPageResource, UserResource,
};
use common::{FieldProblem, ProblemDetails};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "web-layout", description = "User management over REST and gRPC"),
    paths(
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::get_users,
        crate::handlers::actuator_handler::health,
        crate::handlers::actuator_handler::info,
    ),
    components(
        schemas(
            UserResource,
            UserPageResource,
            PageMetadata,
            ProblemDetails,
            FieldProblem,
            HealthResource,
            HealthComponents,
            ComponentHealth,
            InfoResource,
            AppInfo,
            GitInfo,
        )
    ),
    tags(
        (name = "Users", description = "User read endpoints"),
        (name = "Actuators", description = "Health and build information"),
    )
)]
pub struct ApiDoc;
