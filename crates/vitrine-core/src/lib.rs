// vitrine-core: rotation state machine and player lifecycle between
// vitrine-api and consumers (the signage binary, future render layers).

pub mod cache;
pub mod convert;
pub mod error;
pub mod model;
pub mod player;
pub mod ports;
pub mod store;
pub mod trigger;

// ── Primary re-exports ──────────────────────────────────────────────
pub use cache::{FileCache, MemoryCache};
pub use error::{CacheError, CoreError, DirectoryError, PreloadError};
pub use model::{Configuration, Property};
pub use player::Player;
pub use ports::{ContentCache, DirectoryService, ImagePreloader, CONFIG_KEY, PROPERTIES_KEY};
pub use store::{apply, RotationEvent, RotationState, RotationStore};
pub use trigger::RefreshTrigger;
