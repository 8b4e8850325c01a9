use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A saved piece of generated content. Flat document: no relations, no
/// invariants beyond belonging to its user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ArtifactRow {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Which flow produced it, e.g. "youtube-script", "trending-reels".
    pub kind: String,
    pub title: String,
    pub content: Value,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_row_serde_roundtrip() {
        let row = ArtifactRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind: "youtube-script".to_string(),
            title: "Ancient Rome in 10 minutes".to_string(),
            content: serde_json::json!({"script": "HOOK: ..."}),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&row).unwrap();
        let recovered: ArtifactRow = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.id, row.id);
        assert_eq!(recovered.kind, "youtube-script");
        assert_eq!(recovered.content["script"], "HOOK: ...");
    }
}
