pub mod error;

// Wire models shared by the API client and the UI
pub mod blood;
pub mod blood_request;
pub mod config;
pub mod donor;
pub mod inventory;
pub mod models;

pub use error::*;

pub use blood::*;
pub use blood_request::*;
pub use config::*;
pub use donor::*;
pub use inventory::*;
pub use models::*;
