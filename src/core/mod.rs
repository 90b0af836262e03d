pub mod backup;
pub mod clock;
pub mod export;
pub mod highlight;
pub mod import;
pub mod log;
pub mod notify;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use highlight::HighlightIndex;
pub use notify::{EventListener, ListenerError, ListenerFailure, SubscriptionId};
pub use store::EventStore;
