mod traits;
mod types;

pub use traits::{NotificationSink, RecordingSink};
pub use types::{filter_active, Notification, NotificationKind};
