//! Creation timestamps as they come out of the booking store.
//!
//! Store exports write `createdAt` either as plain unix seconds or as a
//! timestamp object `{"seconds": .., "nanoseconds": ..}`. Both read back as
//! unix seconds; sub-second precision is dropped.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTimestamp {
    Seconds(i64),
    Object {
        #[serde(alias = "_seconds")]
        seconds: i64,
    },
}

impl StoredTimestamp {
    fn seconds(self) -> i64 {
        match self {
            StoredTimestamp::Seconds(s) | StoredTimestamp::Object { seconds: s } => s,
        }
    }
}

/// `deserialize_with` helper for optional `createdAt` fields.
pub(crate) fn deserialize_created_at<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StoredTimestamp>::deserialize(deserializer)?.map(StoredTimestamp::seconds))
}
