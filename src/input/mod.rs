pub mod debounce;
pub mod events;
pub mod search;

// Re-export the essential types
pub use debounce::Debouncer;
pub use events::{EventHandled, InputEvent, KeyModifiers, MapEvent};
pub use search::{SearchBox, SearchError, SearchField, SearchJump};
