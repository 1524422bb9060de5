pub mod filter_bar;
pub mod notice;
pub mod request_card;
pub mod stock_meter;
pub mod widget;

pub use filter_bar::RequestFilterBar;
pub use notice::{ConfirmDialog, Notice, NoticeDialog};
pub use request_card::{RequestCard, RequestHeading};
pub use stock_meter::{StockBadge, StockMeter};
pub use widget::{Widget, WidgetStat};
