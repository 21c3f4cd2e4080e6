pub mod middleware;
pub mod shutdown;

pub use middleware::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use shutdown::shutdown_signal;
