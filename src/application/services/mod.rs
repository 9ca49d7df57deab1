mod query_router;

pub use query_router::{QueryRouter, RoutingError};
