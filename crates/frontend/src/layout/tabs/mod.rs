//! Tab management module
//!
//! Contains:
//! - `registry` - open tabs, active pointer and content registry
//! - `page` - TabPage component wrapping the body of a tab

pub mod page;
pub mod registry;

pub use page::TabPage;
pub use registry::{Tab, TabRegistry};
