pub mod change;
pub mod event;

pub use change::StoreChange;
pub use event::Event;
