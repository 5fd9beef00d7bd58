pub mod get_client_script;
pub mod get_content_types;
pub mod get_index_page;
pub mod get_selection_block;
pub mod render_content;
