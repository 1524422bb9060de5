// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod textarea;

// Primitive wrappers
pub mod alert_dialog;
pub mod progress;
pub mod toast;

pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use progress::*;
pub use textarea::*;
pub use toast::*;
