//! The document node tree.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{ClosedTag, Image, Link, List, ListItem, RowItem, Table, TableRow, Tag};

/// One element of an HTML part tree.
///
/// The set of variants is closed; the renderer matches on it exhaustively.
/// [`Node::Empty`] stands for absent or unrecognized content and renders to
/// nothing, so partially populated trees still produce a body.
///
/// In JSON the variant is named by a `type` field. Objects without one, and
/// unknown `type` values, load as [`Node::Empty`].
// `remote = "Self"` turns the derived impls into inherent functions, wrapped
// by the trait impls below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// A table of rows
    Table(Table),

    /// A single table row
    Row(TableRow),

    /// A single table cell
    RowItem(RowItem),

    /// A hyperlink with a literal label
    Link(Link),

    /// An inline image, embedded as a linked resource
    Image(Image),

    /// An element wrapping one child
    Tag(Tag),

    /// A self-closing element
    ClosedTag(ClosedTag),

    /// Children rendered one after another, without wrapping markup
    PartCollection {
        /// Child nodes in document order
        #[serde(default, deserialize_with = "nulls_as_empty")]
        parts: Vec<Node>,
    },

    /// Literal markup content, emitted unescaped
    Text {
        /// The literal value
        #[serde(default)]
        value: String,
    },

    /// A bulleted list
    UnorderedList(List),

    /// A numbered list
    OrderedList(List),

    /// A single list item
    ListItem(ListItem),

    /// Absent or unrecognized content
    #[default]
    #[serde(other)]
    Empty,
}

impl Node {
    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Create a collection node from parts.
    pub fn parts(parts: impl IntoIterator<Item = Node>) -> Self {
        Node::PartCollection {
            parts: parts.into_iter().collect(),
        }
    }

    /// Create an unordered list node.
    pub fn unordered_list(list: List) -> Self {
        Node::UnorderedList(list)
    }

    /// Create an ordered list node.
    pub fn ordered_list(list: List) -> Self {
        Node::OrderedList(list)
    }

    /// Check if this node renders nothing by construction.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Empty => true,
            Node::PartCollection { parts } => parts.iter().all(Node::is_empty),
            Node::Text { value } => value.is_empty(),
            _ => false,
        }
    }

    /// Number of image nodes in this subtree.
    pub fn image_count(&self) -> usize {
        match self {
            Node::Image(_) => 1,
            Node::Table(table) => table
                .rows
                .iter()
                .flat_map(|r| &r.items)
                .map(|i| i.content.image_count())
                .sum(),
            Node::Row(row) => row.items.iter().map(|i| i.content.image_count()).sum(),
            Node::RowItem(item) => item.content.image_count(),
            Node::Tag(tag) => tag.content.image_count(),
            Node::PartCollection { parts } => parts.iter().map(Node::image_count).sum(),
            Node::UnorderedList(list) | Node::OrderedList(list) => {
                list.items.iter().map(|i| i.content.image_count()).sum()
            }
            Node::ListItem(item) => item.content.image_count(),
            Node::Link(_) | Node::ClosedTag(_) | Node::Text { .. } | Node::Empty => 0,
        }
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Node::Table(table)
    }
}

impl From<TableRow> for Node {
    fn from(row: TableRow) -> Self {
        Node::Row(row)
    }
}

impl From<RowItem> for Node {
    fn from(item: RowItem) -> Self {
        Node::RowItem(item)
    }
}

impl From<Link> for Node {
    fn from(link: Link) -> Self {
        Node::Link(link)
    }
}

impl From<Image> for Node {
    fn from(image: Image) -> Self {
        Node::Image(image)
    }
}

impl From<Tag> for Node {
    fn from(tag: Tag) -> Self {
        Node::Tag(tag)
    }
}

impl From<ClosedTag> for Node {
    fn from(tag: ClosedTag) -> Self {
        Node::ClosedTag(tag)
    }
}

impl From<ListItem> for Node {
    fn from(item: ListItem) -> Self {
        Node::ListItem(item)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::text(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::text(value)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Node::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::Null => Ok(Node::Empty),
            Value::Object(fields) if matches!(fields.get("type"), None | Some(Value::Null)) => {
                Ok(Node::Empty)
            }
            _ => Node::deserialize(value).map_err(de::Error::custom),
        }
    }
}

/// Deserialize a single child, mapping `null` to [`Node::Empty`].
pub(crate) fn null_as_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Box<Node>, D::Error> {
    let node = Option::<Node>::deserialize(deserializer)?;
    Ok(Box::new(node.unwrap_or_default()))
}

/// Deserialize a child list, mapping `null` entries to [`Node::Empty`].
fn nulls_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Node>, D::Error> {
    let nodes = Option::<Vec<Option<Node>>>::deserialize(deserializer)?;
    Ok(nodes
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
