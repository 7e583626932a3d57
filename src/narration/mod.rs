//! Narration
//!
//! Turns classifier flags into at most one announcement per user action.
//!
//! # Architecture
//!
//! ```text
//! narration/
//! ├── strings.rs        ← Injected templates and region labels
//! ├── lifecycle.rs      ← Idle → Focused → Dragging per control
//! └── orchestrator.rs   ← Decides whether and what to announce
//! ```
//!
//! Strings are passed to the orchestrator explicitly; nothing reads a global table.

pub mod lifecycle;
pub mod orchestrator;
pub mod strings;

pub use lifecycle::{Control, SliderLifecycle, SliderState};
pub use orchestrator::AlertOrchestrator;
pub use strings::{NarrationStrings, fill_in};
