use serde::{Deserialize, Serialize};

/// A content page linked to a module.
///
/// The table these entries live in is built outside this crate (typically
/// from the page tree) and loaded as read-only data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRoute {
    /// Module the page is linked to (e.g. "news").
    pub module: String,

    /// Public path of the page (e.g. "/en/news").
    pub path: String,

    #[serde(default)]
    pub title: Option<String>,
}

/// Read-only lookup table of pages linked to modules.
#[derive(Debug, Clone, Default)]
pub struct PageTable {
    routes: Vec<PageRoute>,
}

impl PageTable {
    pub fn new(routes: Vec<PageRoute>) -> Self {
        Self { routes }
    }

    /// All pages linked to `module`, in table order.
    ///
    /// Module names match case-insensitively.
    pub fn pages_for_module(&self, module: &str) -> Vec<&PageRoute> {
        let module = module.to_lowercase();
        self.routes
            .iter()
            .filter(|page| page.module.to_lowercase() == module)
            .collect()
    }

    /// First page linked to `module`, if any.
    pub fn page_for_module(&self, module: &str) -> Option<&PageRoute> {
        self.pages_for_module(module).into_iter().next()
    }
}
