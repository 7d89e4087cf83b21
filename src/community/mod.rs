//! Community board: post list, title search, write, edit and delete.

use chrono::{
    DateTime,
    SecondsFormat,
    Utc,
};
use tracing::{
    info,
    warn,
};

use crate::core::{
    models::PostDraft,
    ApiError,
    FormError,
    Post,
    RequestId,
    RequestSeq,
};

/// Title and body buffers of the write/edit screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

impl PostForm {
    pub fn from_post(post: &Post) -> Self {
        Self { title: post.title.clone(), content: post.content.clone() }
    }

    /// Builds the request body, stamped with `now` in RFC 3339.
    pub fn compose(&self, now: DateTime<Utc>) -> Result<PostDraft, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::Missing("Title"));
        }
        if self.content.trim().is_empty() {
            return Err(FormError::Missing("Content"));
        }

        Ok(PostDraft {
            post_title: self.title.trim().to_string(),
            post_content: self.content.clone(),
            post_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// Blank query: results were cleared and nothing needs to be sent.
    Skip,
    Send { id: RequestId, title: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteTarget {
    New,
    Existing(u64),
}

#[derive(Debug, Default)]
pub struct BoardState {
    posts: Vec<Post>,
    list_seq: RequestSeq,
    loading: bool,
    search_results: Vec<Post>,
    search_seq: RequestSeq,
    searched: bool,
    error: Option<ApiError>,
    pub form: PostForm,
    editing: Option<u64>,
    write_seq: RequestSeq,
    writing: bool,
    deleting: Option<u64>,
    notice: Option<String>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn search_results(&self) -> &[Post] {
        &self.search_results
    }

    /// Whether the last search was actually sent, as opposed to never run or blank.
    pub fn has_searched(&self) -> bool {
        self.searched
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_writing(&self) -> bool {
        self.writing
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn begin_list(&mut self) -> RequestId {
        self.loading = true;
        self.list_seq.issue()
    }

    pub fn finish_list(&mut self, id: RequestId, result: Result<Vec<Post>, ApiError>) -> bool {
        if !self.list_seq.is_current(id) {
            return false;
        }
        self.loading = false;

        match result {
            Ok(posts) => {
                info!("Loaded {} posts", posts.len());
                self.posts = posts;
                self.error = None;
            }
            Err(e) => {
                warn!("Failed to load posts: {e}");
                self.error = Some(e);
            }
        }
        true
    }

    pub fn search(&mut self, query: &str) -> SearchRequest {
        let title = query.trim();
        if title.is_empty() {
            self.search_results.clear();
            self.searched = false;
            // Invalidate any search still in flight
            self.search_seq.issue();
            return SearchRequest::Skip;
        }
        SearchRequest::Send { id: self.search_seq.issue(), title: title.to_string() }
    }

    pub fn finish_search(&mut self, id: RequestId, result: Result<Vec<Post>, ApiError>) -> bool {
        if !self.search_seq.is_current(id) {
            return false;
        }

        match result {
            Ok(posts) => {
                self.search_results = posts;
                self.searched = true;
            }
            Err(e) => {
                warn!("Post search failed: {e}");
                self.error = Some(e);
            }
        }
        true
    }

    pub fn start_new_post(&mut self) {
        self.editing = None;
        self.form.clear();
        self.notice = None;
    }

    pub fn start_edit(&mut self, post: &Post) {
        self.editing = Some(post.id);
        self.form = PostForm::from_post(post);
        self.notice = None;
    }

    pub fn target(&self) -> WriteTarget {
        match self.editing {
            Some(id) => WriteTarget::Existing(id),
            None => WriteTarget::New,
        }
    }

    /// Validates the form. Nothing is marked in flight when validation fails.
    pub fn begin_write(&mut self, now: DateTime<Utc>) -> Result<(RequestId, WriteTarget, PostDraft), FormError> {
        let draft = self.form.compose(now)?;
        self.writing = true;
        self.notice = None;
        Ok((self.write_seq.issue(), self.target(), draft))
    }

    /// Returns `true` when the post was stored; the caller refreshes the list.
    pub fn finish_write(&mut self, id: RequestId, result: Result<(), ApiError>) -> bool {
        if !self.write_seq.is_current(id) {
            return false;
        }
        self.writing = false;

        match result {
            Ok(()) => {
                let verb = if self.editing.is_some() { "updated" } else { "published" };
                self.notice = Some(format!("Post {verb}"));
                self.form.clear();
                self.editing = None;
                true
            }
            Err(e) => {
                warn!("Post write failed: {e}");
                self.notice = Some(format!("Could not save the post: {e}"));
                false
            }
        }
    }

    pub fn request_delete(&mut self, post_id: u64) -> Option<u64> {
        if self.deleting.is_some() {
            return None;
        }
        self.deleting = Some(post_id);
        Some(post_id)
    }

    pub fn finish_delete(&mut self, post_id: u64, result: Result<(), ApiError>) -> bool {
        if self.deleting != Some(post_id) {
            return false;
        }
        self.deleting = None;

        match result {
            Ok(()) => {
                self.posts.retain(|p| p.id != post_id);
                self.search_results.retain(|p| p.id != post_id);
                if self.editing == Some(post_id) {
                    self.start_new_post();
                }
                true
            }
            Err(e) => {
                warn!("Failed to delete post {post_id}: {e}");
                self.error = Some(e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn post(id: u64, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: "body".to_string(),
            date: None,
            author: None,
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_blank_search_sends_nothing() {
        let mut board = BoardState::new();
        assert_eq!(board.search("   "), SearchRequest::Skip);
        assert!(board.search_results().is_empty());
        assert!(!board.has_searched());
    }

    #[test]
    fn test_search_results_and_supersede() {
        let mut board = BoardState::new();
        let SearchRequest::Send { id: first, title } = board.search(" bibimbap ") else {
            panic!("expected a request");
        };
        assert_eq!(title, "bibimbap");

        // Clearing the box invalidates the pending search
        assert_eq!(board.search(""), SearchRequest::Skip);
        assert!(!board.finish_search(first, Ok(vec![post(1, "bibimbap")])));
        assert!(board.search_results().is_empty());

        let SearchRequest::Send { id, .. } = board.search("ramen") else {
            panic!("expected a request");
        };
        assert!(board.finish_search(id, Ok(vec![post(2, "ramen spots")])));
        assert_eq!(board.search_results().len(), 1);
        assert!(board.has_searched());
    }

    #[test]
    fn test_compose_requires_title_and_content() {
        let mut form = PostForm::default();
        assert_eq!(form.compose(noon()), Err(FormError::Missing("Title")));

        form.title = "Late night food".to_string();
        assert_eq!(form.compose(noon()), Err(FormError::Missing("Content")));

        form.content = "Anything open after 2am?".to_string();
        let draft = form.compose(noon()).unwrap();
        assert_eq!(draft.post_date, "2024-11-02T12:00:00.000Z");
        assert_eq!(draft.post_title, "Late night food");
    }

    #[test]
    fn test_write_lifecycle() {
        let mut board = BoardState::new();
        assert!(board.begin_write(noon()).is_err());
        assert!(!board.is_writing());

        board.form.title = "Hello".to_string();
        board.form.content = "First post".to_string();
        let (id, target, _) = board.begin_write(noon()).unwrap();
        assert_eq!(target, WriteTarget::New);
        assert!(board.is_writing());

        let rejected = ApiError::Rejected { result_code: "F-1".to_string(), message: None };
        assert!(!board.finish_write(id, Err(rejected)));
        assert_eq!(board.form.title, "Hello");

        let (id, _, _) = board.begin_write(noon()).unwrap();
        assert!(board.finish_write(id, Ok(())));
        assert!(board.form.title.is_empty());
        assert_eq!(board.notice(), Some("Post published"));
    }

    #[test]
    fn test_edit_targets_existing_post() {
        let mut board = BoardState::new();
        board.start_edit(&post(5, "Old title"));
        assert_eq!(board.form.title, "Old title");

        let (_, target, draft) = board.begin_write(noon()).unwrap();
        assert_eq!(target, WriteTarget::Existing(5));
        assert_eq!(draft.post_content, "body");
    }

    #[test]
    fn test_delete_removes_post() {
        let mut board = BoardState::new();
        let id = board.begin_list();
        board.finish_list(id, Ok(vec![post(1, "a"), post(2, "b")]));

        assert_eq!(board.request_delete(2), Some(2));
        assert_eq!(board.request_delete(1), None);
        assert!(board.finish_delete(2, Ok(())));
        assert_eq!(board.posts().len(), 1);
    }
}
