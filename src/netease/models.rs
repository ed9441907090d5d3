use serde::{Deserialize, Serialize};

/// One entry of an artist's hot-song list. Id and display name are paired
/// at extraction time, so they can never shift against each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// NetEase song id, the `id` query parameter of `/song`.
    pub id: String,
    pub name: String,
}
