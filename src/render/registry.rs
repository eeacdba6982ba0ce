//! Per-render registry of linked resources.

use crate::model::LinkedResource;

use super::RenderOptions;

/// Append-only list of resources discovered during one render call.
///
/// Identifiers are `{prefix}{n}` (optionally `@{domain}`) with `n` counting
/// from 1 in registration order, so they are unique within the call and
/// never derived from content.
pub(crate) struct ResourceRegistry<'a> {
    prefix: &'a str,
    domain: Option<&'a str>,
    entries: Vec<LinkedResource>,
}

impl<'a> ResourceRegistry<'a> {
    pub(crate) fn new(options: &'a RenderOptions) -> Self {
        Self {
            prefix: &options.content_id_prefix,
            domain: options.content_id_domain.as_deref(),
            entries: Vec::new(),
        }
    }

    /// Append a resource and return its assigned identifier.
    pub(crate) fn register(&mut self, source_path: &str) -> &str {
        let sequence = self.entries.len() + 1;
        let content_id = match self.domain {
            Some(domain) => format!("{}{}@{}", self.prefix, sequence, domain),
            None => format!("{}{}", self.prefix, sequence),
        };
        log::trace!("registered {} as cid:{}", source_path, content_id);

        self.entries
            .push(LinkedResource::new(content_id, source_path));
        &self.entries[sequence - 1].content_id
    }

    /// Snapshot of the registered entries, in registration order.
    pub(crate) fn entries(&self) -> &[LinkedResource] {
        &self.entries
    }

    pub(crate) fn into_entries(self) -> Vec<LinkedResource> {
        self.entries
    }
}
