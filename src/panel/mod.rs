pub mod compose;
pub mod config;
pub mod fonts;
pub mod layout;
pub mod store;

pub use compose::{resolve_frame, PanelFrame};
pub use config::{PanelConfiguration, PanelDraft, PanelPatch};
pub use fonts::FontFamily;
pub use layout::ViewMode;
pub use store::{JsonFileStore, MemoryStore, PanelStore};
