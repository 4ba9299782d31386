pub mod middleware;
pub mod router;
pub mod sla;

pub use middleware::*;
pub use router::{build_router, AppState};
