use serde::{Deserialize, Serialize};

/// A harvested page. `id` is assigned at ingestion time, monotonically
/// increasing, and stable for the lifetime of a corpus snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub text: String,
}
