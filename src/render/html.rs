//! HTML rendering for HTML part trees.
//!
//! The renderer walks the tree depth-first, pre-order, appending each node's
//! markup to one output buffer. Every [`Node::Image`] is registered with a
//! per-call resource registry and referenced as `cid:<id>`, so the
//! returned resource list lines up 1:1, in order, with the image references
//! in the markup.

use crate::error::Result;
use crate::model::{
    to_horizontal_token, to_vertical_token, Image, Link, List, ListItem, Node, RowItem, Table,
    TableRow,
};
use crate::style::{StyleComposer, StyleSet};

use super::registry::ResourceRegistry;
use super::{RenderOptions, RenderStats, RenderedBody};

/// Declaration placed ahead of every link's own style.
const LINK_DEFAULT_STYLE: &str = "text-decoration:none;";

/// Render a node tree to markup plus linked resources.
pub fn render(root: &Node, options: &RenderOptions) -> Result<RenderedBody> {
    HtmlRenderer::new(options.clone()).render(root)
}

/// HTML renderer.
///
/// Holds configuration only; each [`render`](HtmlRenderer::render) call
/// starts from an empty resource registry, so one renderer can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Get the renderer options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render a node tree.
    pub fn render(&self, root: &Node) -> Result<RenderedBody> {
        let mut ctx = RenderContext {
            composer: self.options.composer.as_ref(),
            registry: ResourceRegistry::new(&self.options),
            stats: RenderStats::new(),
            collect_stats: self.options.collect_stats,
        };
        let mut out = String::new();

        render_node(&mut out, root, &mut ctx);

        log::debug!(
            "rendered {} bytes of markup with {} linked resources",
            out.len(),
            ctx.registry.entries().len()
        );

        Ok(RenderedBody::new(
            out,
            ctx.registry.into_entries(),
            ctx.stats,
        ))
    }
}

/// State threaded through one render call.
struct RenderContext<'a> {
    composer: &'a dyn StyleComposer,
    registry: ResourceRegistry<'a>,
    stats: RenderStats,
    collect_stats: bool,
}

impl RenderContext<'_> {
    fn style(&self, styles: &StyleSet) -> String {
        self.composer.compose(styles)
    }

    fn record(&mut self, update: impl FnOnce(&mut RenderStats)) {
        if self.collect_stats {
            update(&mut self.stats);
        }
    }
}

fn render_node(out: &mut String, node: &Node, ctx: &mut RenderContext) {
    match node {
        Node::Table(table) => render_table(out, table, ctx),
        Node::Row(row) => render_row(out, row, ctx),
        Node::RowItem(item) => render_row_item(out, item, ctx),
        Node::Link(link) => render_link(out, link, ctx),
        Node::Image(image) => render_image(out, image, ctx),
        Node::Tag(tag) if tag.tag_name.is_empty() => skip(ctx, "unnamed tag"),
        Node::Tag(tag) => {
            ctx.record(|s| s.tag_count += 1);
            out.push_str(&format!(
                "<{} style=\"{}\">",
                tag.tag_name,
                ctx.style(&tag.style)
            ));
            render_node(out, &tag.content, ctx);
            out.push_str(&format!("</{}>", tag.tag_name));
        }
        Node::ClosedTag(tag) if tag.tag_name.is_empty() => skip(ctx, "unnamed closed tag"),
        Node::ClosedTag(tag) => {
            ctx.record(|s| s.tag_count += 1);
            out.push_str(&format!(
                "<{} style=\"{}\" />",
                tag.tag_name,
                ctx.style(&tag.style)
            ));
        }
        Node::PartCollection { parts } => {
            for part in parts {
                render_node(out, part, ctx);
            }
        }
        Node::Text { value } => {
            ctx.record(|s| {
                s.text_count += 1;
                s.count_text(value);
            });
            out.push_str(value);
        }
        Node::UnorderedList(list) => render_list(out, "ul", list, ctx),
        Node::OrderedList(list) => render_list(out, "ol", list, ctx),
        Node::ListItem(item) => render_list_item(out, item, ctx),
        // Absent or unrecognized content degrades to nothing.
        Node::Empty => skip(ctx, "empty node"),
    }
}

fn skip(ctx: &mut RenderContext, what: &str) {
    log::debug!("skipping {}", what);
    ctx.record(|s| s.empty_count += 1);
}

fn render_table(out: &mut String, table: &Table, ctx: &mut RenderContext) {
    ctx.record(|s| s.table_count += 1);
    out.push_str(&format!(
        "<table style=\"{}\" cellspacing=\"{}\">",
        ctx.style(&table.style),
        table.cell_spacing
    ));
    for row in &table.rows {
        render_row(out, row, ctx);
    }
    out.push_str("</table>");
}

fn render_row(out: &mut String, row: &TableRow, ctx: &mut RenderContext) {
    ctx.record(|s| s.row_count += 1);
    out.push_str(&format!("<tr style=\"{}\">", ctx.style(&row.style)));
    for item in &row.items {
        render_row_item(out, item, ctx);
    }
    out.push_str("</tr>");
}

fn render_row_item(out: &mut String, item: &RowItem, ctx: &mut RenderContext) {
    ctx.record(|s| s.cell_count += 1);
    out.push_str(&format!(
        "<td align=\"{}\" valign=\"{}\" style=\"{}\">",
        to_horizontal_token(item.horizontal_align),
        to_vertical_token(item.vertical_align),
        ctx.style(&item.style)
    ));
    render_node(out, &item.content, ctx);
    out.push_str("</td>");
}

fn render_link(out: &mut String, link: &Link, ctx: &mut RenderContext) {
    ctx.record(|s| {
        s.link_count += 1;
        s.count_text(&link.label);
    });
    out.push_str(&format!(
        "<a href=\"{}\" style=\"{}{}\">{}</a>",
        link.action_url,
        LINK_DEFAULT_STYLE,
        ctx.style(&link.style),
        link.label
    ));
}

fn render_image(out: &mut String, image: &Image, ctx: &mut RenderContext) {
    ctx.record(|s| s.image_count += 1);
    let content_id = ctx.registry.register(&image.source_path);
    out.push_str(&format!(
        "<img src=\"cid:{}\" width=\"{}\" height=\"{}\" />",
        content_id, image.width, image.height
    ));
}

fn render_list(out: &mut String, tag: &str, list: &List, ctx: &mut RenderContext) {
    ctx.record(|s| s.list_count += 1);
    out.push_str(&format!("<{} style=\"{}\">", tag, ctx.style(&list.style)));
    for item in &list.items {
        render_list_item(out, item, ctx);
    }
    out.push_str(&format!("</{}>", tag));
}

/// An item without content renders nothing, not an empty `<li>`.
fn render_list_item(out: &mut String, item: &ListItem, ctx: &mut RenderContext) {
    if matches!(*item.content, Node::Empty) {
        return skip(ctx, "list item without content");
    }
    ctx.record(|s| s.list_item_count += 1);
    out.push_str(&format!("<li style=\"{}\">", ctx.style(&item.style)));
    render_node(out, &item.content, ctx);
    out.push_str("</li>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClosedTag, Tag};

    fn render_default(node: &Node) -> RenderedBody {
        render(node, &RenderOptions::default()).unwrap()
    }

    #[test]
    fn test_render_text() {
        let body = render_default(&Node::text("x"));
        assert_eq!(body.markup, "x");
        assert!(body.resources.is_empty());
    }

    #[test]
    fn test_render_empty_collection() {
        let body = render_default(&Node::parts([]));
        assert_eq!(body.markup, "");
        assert!(body.resources.is_empty());
    }

    #[test]
    fn test_render_empty_node() {
        let body = render_default(&Node::Empty);
        assert_eq!(body.markup, "");
    }

    #[test]
    fn test_render_zero_row_table() {
        let body = render_default(&Table::new().into());
        assert_eq!(body.markup, "<table style=\"\" cellspacing=\"0\"></table>");
    }

    #[test]
    fn test_render_link_prepends_default_style() {
        let link = Link::new("https://example.com/a?b=1", "Open")
            .styled(StyleSet::new().with("color", "#336699"));
        let body = render_default(&link.into());
        assert_eq!(
            body.markup,
            "<a href=\"https://example.com/a?b=1\" style=\"text-decoration:none;color:#336699\">Open</a>"
        );

        let body = render_default(&Link::new("/x", "X").into());
        assert_eq!(
            body.markup,
            "<a href=\"/x\" style=\"text-decoration:none;\">X</a>"
        );
    }

    #[test]
    fn test_render_tags() {
        let tag = Tag::new("p", Node::parts([Node::text("a"), ClosedTag::new("br").into()]))
            .styled(StyleSet::new().with("margin", "0"));
        let body = render_default(&tag.into());
        assert_eq!(
            body.markup,
            "<p style=\"margin:0\">a<br style=\"\" /></p>"
        );
    }

    #[test]
    fn test_render_lists() {
        let list = List::from_strings(["a", "b"]);
        let body = render_default(&Node::unordered_list(list.clone()));
        assert_eq!(
            body.markup,
            "<ul style=\"\"><li style=\"\">a</li><li style=\"\">b</li></ul>"
        );

        let body = render_default(&Node::ordered_list(list));
        assert!(body.markup.starts_with("<ol style=\"\">"));
        assert!(body.markup.ends_with("</ol>"));
    }

    #[test]
    fn test_render_standalone_list_item_and_row() {
        let item = ListItem::new("x").styled(StyleSet::new().with("color", "red"));
        assert_eq!(
            render_default(&item.into()).markup,
            "<li style=\"color:red\">x</li>"
        );

        let row = TableRow::from_strings(["a"]);
        assert_eq!(
            render_default(&row.into()).markup,
            "<tr style=\"\"><td align=\"left\" valign=\"top\" style=\"\">a</td></tr>"
        );
    }

    #[test]
    fn test_render_image_registers_resource() {
        let body = render_default(&Image::new("logo.png", 120, 40).into());
        assert_eq!(
            body.markup,
            "<img src=\"cid:image1\" width=\"120\" height=\"40\" />"
        );
        assert_eq!(body.resources.len(), 1);
        assert_eq!(body.resources[0].content_id, "image1");
        assert_eq!(body.resources[0].source_path, "logo.png");
    }

    #[test]
    fn test_unnamed_tags_render_nothing() {
        let tree = Node::parts([
            Node::text("a"),
            Tag::new("", Image::new("hidden.png", 1, 1)).into(),
            ClosedTag::new("").into(),
            Node::text("b"),
        ]);
        let body = render(&tree, &RenderOptions::new().with_stats(true)).unwrap();
        assert_eq!(body.markup, "ab");
        assert!(body.resources.is_empty());
        assert_eq!(body.stats.empty_count, 2);
    }

    #[test]
    fn test_list_item_without_content_is_dropped() {
        let list = List::new()
            .item(ListItem::new(Node::Empty))
            .item(ListItem::new("x"));
        assert_eq!(
            render_default(&Node::unordered_list(list)).markup,
            "<ul style=\"\"><li style=\"\">x</li></ul>"
        );
        assert_eq!(render_default(&ListItem::new(Node::Empty).into()).markup, "");

        // Other containers keep their markup around absent content.
        let item = RowItem::new(Node::Empty);
        assert_eq!(
            render_default(&item.into()).markup,
            "<td align=\"left\" valign=\"top\" style=\"\"></td>"
        );
    }

    #[test]
    fn test_stats_collected_only_when_enabled() {
        let tree = Node::parts([
            Table::with_cell_spacing(1)
                .row(TableRow::from_strings(["a", "b"]))
                .into(),
            Image::new("x.png", 1, 1).into(),
            Node::Empty,
        ]);

        let body = render_default(&tree);
        assert_eq!(body.stats, RenderStats::default());

        let body = render(&tree, &RenderOptions::new().with_stats(true)).unwrap();
        assert_eq!(body.stats.table_count, 1);
        assert_eq!(body.stats.row_count, 1);
        assert_eq!(body.stats.cell_count, 2);
        assert_eq!(body.stats.text_count, 2);
        assert_eq!(body.stats.image_count, 1);
        assert_eq!(body.stats.empty_count, 1);
        assert_eq!(body.stats.char_count, 2);
    }
}
