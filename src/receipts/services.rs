use anyhow::Context;
use bytes::Bytes;
use uuid::Uuid;

use crate::state::AppState;

#[derive(Debug)]
pub struct StoredReceipt {
    pub key: String,
    pub url: String,
}

/// Put the uploaded image into the receipts bucket and hand back a
/// time-limited URL for it. Parsing the stored receipt into pantry rows is
/// a downstream collaborator's job.
pub async fn store_receipt(
    st: &AppState,
    user_id: Uuid,
    body: Bytes,
    content_type: &str,
) -> anyhow::Result<StoredReceipt> {
    anyhow::ensure!(!body.is_empty(), "empty file");

    let ext = ext_from_mime(content_type).unwrap_or("bin");
    let key = format!("receipts/{}/{}.{}", user_id, Uuid::new_v4(), ext);

    st.storage
        .put_object(&key, body, content_type)
        .await
        .with_context(|| format!("put_object {}", key))?;

    const TTL_SECS: u64 = 30 * 60;
    let url = st
        .storage
        .presign_get(&key, TTL_SECS)
        .await
        .with_context(|| format!("presign url for {}", key))?;

    Ok(StoredReceipt { key, url })
}

fn ext_from_mime(ct: &str) -> Option<&'static str> {
    match ct {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/heic" => Some("heic"),
        "application/pdf" => Some("pdf"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ext_from_mime() {
        assert_eq!(ext_from_mime("image/jpeg"), Some("jpg"));
        assert_eq!(ext_from_mime("image/png"), Some("png"));
        assert_eq!(ext_from_mime("application/pdf"), Some("pdf"));
        assert_eq!(ext_from_mime("application/octet-stream"), None);
        assert_eq!(ext_from_mime("whatever/else"), None);
    }

    #[tokio::test]
    async fn stores_under_user_scoped_key_and_presigns() {
        let state = AppState::fake();
        let user_id = Uuid::new_v4();

        let stored = store_receipt(&state, user_id, Bytes::from_static(b"img"), "image/png")
            .await
            .unwrap();
        assert!(stored.key.starts_with(&format!("receipts/{}/", user_id)));
        assert!(stored.key.ends_with(".png"));
        assert!(stored.url.contains(&stored.key));
    }

    #[tokio::test]
    async fn rejects_empty_upload() {
        let state = AppState::fake();
        let err = store_receipt(&state, Uuid::new_v4(), Bytes::new(), "image/png")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("empty file"));
    }
}
