//! gRPC adapter.

mod interceptor;
mod user_grpc;

pub use interceptor::request_id_interceptor;
pub use user_grpc::UserGrpcService;
