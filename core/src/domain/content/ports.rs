use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, content::entities::ContentTypes};

pub trait ContentService: Send + Sync {
    fn get_content_types(&self) -> ContentTypes;

    /// Form plus empty result container, as placed by the selection shortcode.
    fn render_selection_block(&self) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn render_content(
        &self,
        content: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
