use reqwest::Method;
use serde::Deserialize;

use super::{
    AckRule,
    ApiClient,
    WriteAck,
};
use crate::core::{
    models::{
        Post,
        PostDraft,
    },
    ApiError,
};

/// Single post responses are either wrapped in `data` or bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum PostEnvelope {
    Wrapped { data: Post },
    Bare(Post),
}

impl ApiClient {
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_collection("posts", &[]).await
    }

    pub async fn search_posts(&self, title: &str) -> Result<Vec<Post>, ApiError> {
        self.get_collection("posts", &[("title", title)]).await
    }

    pub async fn fetch_post(&self, post_id: u64) -> Result<Post, ApiError> {
        let envelope: PostEnvelope = self.get_json(&format!("post/{post_id}"), &[]).await?;
        Ok(match envelope {
            PostEnvelope::Wrapped { data } => data,
            PostEnvelope::Bare(post) => post,
        })
    }

    /// Post writes only count when acknowledged with `S-1`.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<WriteAck, ApiError> {
        self.write(Method::POST, "post", Some(draft), AckRule::Code).await
    }

    pub async fn update_post(&self, post_id: u64, draft: &PostDraft) -> Result<WriteAck, ApiError> {
        self.write(Method::PUT, &format!("post/{post_id}"), Some(draft), AckRule::Code).await
    }

    pub async fn delete_post(&self, post_id: u64) -> Result<WriteAck, ApiError> {
        self.write::<()>(Method::DELETE, &format!("post/{post_id}"), None, AckRule::Status).await
    }
}
