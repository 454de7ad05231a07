pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod nav;
pub mod session;
pub mod telemetry;

pub use api::{AdminClient, AuthClient, ProductClient};
pub use config::{load_client_config, ClientConfig};
pub use error::{ApiError, ApiResult};
pub use guard::AdminGuard;
pub use nav::Navigator;
pub use session::{Session, ADMIN_DASHBOARD_PATH, LOGIN_PATH};
pub use telemetry::init_tracing;
