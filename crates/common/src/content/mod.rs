//! Content items and their local representation
//!
//! - **[`ContentItem`]**: one record of the remote listing (`id`, `type`, `length`)
//! - **[`ContentKind`]**: the classification of an item's content type, shared by
//!   the transfer client (which remote variant to request) and the path mapper
//!   (which extension to write)
//! - **[`ContentPaths`]**: the pure mapping from an item to its file under the
//!   content root
//!
//! ```text
//! {id: "header/logo", type: "image/png"}  ->  data/header/logo.png
//! {id: "config",      type: "application/json"}  ->  data/config.json
//! {id: "favicon",     type: "image/x-icon"}  ->  data/favicon
//! ```

mod item;
mod kind;
mod paths;

pub use item::ContentItem;
pub use kind::ContentKind;
pub use paths::{ContentPaths, DEFAULT_CONTENT_ROOT};
