//! ListPagesHandler - The sidebar navigation entries.

use serde::Serialize;

use crate::domain::foundation::Page;

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub page: Page,
    pub name: &'static str,
    pub path: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ListPagesHandler;

impl ListPagesHandler {
    pub fn handle(&self) -> Vec<PageSummary> {
        Page::all()
            .iter()
            .map(|page| PageSummary {
                page: *page,
                name: page.display_name(),
                path: page.path(),
            })
            .collect()
    }
}
