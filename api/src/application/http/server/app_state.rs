use std::sync::Arc;

use grocerykit_core::application::GroceryKitService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: GroceryKitService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: GroceryKitService) -> Self {
        Self { args, service }
    }

    /// Prefixes `path` with the configured root path.
    pub fn route_path(&self, path: &str) -> String {
        format!("{}{}", self.args.server.root_path, path)
    }
}
