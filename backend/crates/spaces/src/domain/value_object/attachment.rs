//! Attachment Value Object
//!
//! Media reference attached to a post. Upload and storage of the bytes
//! belong to an external file service; posts only carry the pointer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub url: String,
    pub content_type: String,
    pub file_name: String,
}
