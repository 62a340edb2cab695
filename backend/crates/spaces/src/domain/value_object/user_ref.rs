//! UserRef Value Object
//!
//! Public projection of a user for embedding in read models and archive
//! snapshots. Carries only what a participant list or byline needs; auth
//! data never passes through here.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub user_id: UserId,
    pub display_name: String,
}

impl UserRef {
    pub fn new(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
        }
    }
}
