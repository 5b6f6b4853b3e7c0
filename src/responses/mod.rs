pub mod html;
pub mod json;
pub mod text;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::html_response;
pub use json::json_response;
pub use text::text_response;
