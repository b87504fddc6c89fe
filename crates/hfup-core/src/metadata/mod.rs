//! Documentation metadata tables.
//!
//! Typed equivalents of the doc site's static lookup tables: downstream
//! libraries (with usage-snippet templates) and task records. Lookup by key
//! only; snippet generation is string templating plus conditional dispatch
//! on a model's tags, nothing deeper.

mod libraries;
mod tasks;
mod types;

pub use libraries::{find_library, libraries};
pub use tasks::{find_task, tasks};
pub use types::{Library, ModelInfo, Task};
