pub mod config;
pub mod http;
pub mod session;

pub use config::{app_config, load_config};
pub use http::ApiClient;
pub use session::{MemoryStorage, Session, SessionState, SessionStorage};
