//! Document model types for HTML part trees.
//!
//! A document is a tree of [`Node`] values built by the caller and handed to
//! the renderer once. Rendering only reads the tree.

pub(crate) mod alignment;
mod element;
mod list;
mod node;
mod resource;
mod table;

pub use alignment::{to_horizontal_token, to_vertical_token, HorizontalAlignment, VerticalAlignment};
pub use element::{ClosedTag, Image, Link, Tag};
pub use list::{List, ListItem};
pub use node::Node;
pub use resource::{InlineResource, LinkedResource};
pub use table::{RowItem, Table, TableRow};
