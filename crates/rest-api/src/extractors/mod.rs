//! Request extractors that reject with problem documents.

mod page_query;
mod request_context;
mod uuid_path;

pub use page_query::PageQuery;
pub use request_context::Ctx;
pub use uuid_path::{UserIdPath, USER_ID_PARAM};
