use std::{
    future::Future,
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use eframe::egui;
use tokio::runtime::Runtime;
use tracing::{
    debug,
    warn,
};

use super::TaskResult;
use crate::{
    api::{
        ApiClient,
        WriteAck,
    },
    core::{
        models::{
            Credentials,
            PostDraft,
        },
        ApiError,
        RequestId,
        RestaurantId,
        TasteMapError,
    },
    reviews::Submission,
};

fn acked(result: Result<WriteAck, ApiError>) -> Result<(), ApiError> {
    result.map(|_| ())
}

/// Runs backend calls off the UI thread and hands their results back through
/// a channel drained once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    client: ApiClient,
    repaint: Option<egui::Context>,
}

impl TaskManager {
    pub fn new(client: ApiClient) -> Result<Self, TasteMapError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender, client, repaint: None })
    }

    /// Wakes the UI whenever a result arrives instead of waiting for input.
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn spawn<F, Fut>(&self, job: F)
    where
        F: FnOnce(ApiClient) -> Fut + Send + 'static,
        Fut: Future<Output = Vec<TaskResult>>,
    {
        let sender = self.sender.clone();
        let runtime = self.runtime.clone();
        let client = self.client.clone();
        let repaint = self.repaint.clone();

        thread::spawn(move || {
            let results = runtime.block_on(job(client));

            for result in results {
                debug!("Task finished: {}", result.task_type());
                if let Some(e) = result.error() {
                    warn!("Task {} failed: {e}", result.task_type());
                }
                if sender.send(result).is_err() {
                    // UI is gone, nothing left to deliver to
                    return;
                }
            }

            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    /// Session check and the restaurant list for matching, fetched together.
    pub fn startup(&self, session_id: RequestId, restaurants_id: RequestId) {
        self.spawn(move |client| async move {
            let (session, restaurants) =
                futures::join!(client.check_session(), client.fetch_restaurants());
            vec![
                TaskResult::SessionChecked { id: session_id, result: session },
                TaskResult::RestaurantsLoaded { id: restaurants_id, result: restaurants },
            ]
        });
    }

    pub fn check_session(&self, id: RequestId) {
        self.spawn(move |client| async move {
            vec![TaskResult::SessionChecked { id, result: client.check_session().await }]
        });
    }

    pub fn login(&self, id: RequestId, credentials: Credentials) {
        self.spawn(move |client| async move {
            vec![TaskResult::LoggedIn { id, result: client.login(&credentials).await }]
        });
    }

    pub fn logout(&self, id: RequestId) {
        self.spawn(move |client| async move {
            vec![TaskResult::LoggedOut { id, result: client.logout().await }]
        });
    }

    pub fn load_restaurants(&self, id: RequestId) {
        self.spawn(move |client| async move {
            vec![TaskResult::RestaurantsLoaded { id, result: client.fetch_restaurants().await }]
        });
    }

    pub fn save_likes(&self, id: RequestId, ids: Vec<RestaurantId>) {
        self.spawn(move |client| async move {
            let result = acked(client.save_liked_restaurants(&ids).await);
            vec![TaskResult::LikesSaved { id, result }]
        });
    }

    pub fn load_liked(&self, id: RequestId) {
        self.spawn(move |client| async move {
            vec![TaskResult::LikedLoaded { id, result: client.fetch_liked_restaurants().await }]
        });
    }

    pub fn search_restaurants(&self, id: RequestId, title: String) {
        self.spawn(move |client| async move {
            vec![TaskResult::RestaurantSearch { id, result: client.search_restaurants(&title).await }]
        });
    }

    pub fn load_category(&self, id: RequestId, category: String) {
        self.spawn(move |client| async move {
            let result = client.fetch_restaurants_by_category(&category).await;
            vec![TaskResult::CategoryLoaded { id, result }]
        });
    }

    pub fn load_reviews(&self, id: RequestId, restaurant_id: RestaurantId) {
        self.spawn(move |client| async move {
            vec![TaskResult::ReviewsLoaded { id, result: client.fetch_reviews(restaurant_id).await }]
        });
    }

    pub fn submit_review(&self, submission: Submission) {
        self.spawn(move |client| async move {
            let result = acked(client.create_review(&submission.review).await);
            vec![TaskResult::ReviewSubmitted { submission, result }]
        });
    }

    pub fn delete_review(&self, review_id: u64) {
        self.spawn(move |client| async move {
            let result = acked(client.delete_review(review_id).await);
            vec![TaskResult::ReviewDeleted { review_id, result }]
        });
    }

    pub fn load_posts(&self, id: RequestId) {
        self.spawn(move |client| async move {
            vec![TaskResult::PostsLoaded { id, result: client.fetch_posts().await }]
        });
    }

    pub fn search_posts(&self, id: RequestId, title: String) {
        self.spawn(move |client| async move {
            vec![TaskResult::PostSearch { id, result: client.search_posts(&title).await }]
        });
    }

    pub fn load_post(&self, post_id: u64) {
        self.spawn(move |client| async move {
            vec![TaskResult::PostLoaded { post_id, result: client.fetch_post(post_id).await }]
        });
    }

    /// Creates a post, or updates `post_id` when given.
    pub fn write_post(&self, id: RequestId, post_id: Option<u64>, draft: PostDraft) {
        self.spawn(move |client| async move {
            let result = match post_id {
                Some(post_id) => client.update_post(post_id, &draft).await,
                None => client.create_post(&draft).await,
            };
            vec![TaskResult::PostWritten { id, result: acked(result) }]
        });
    }

    pub fn delete_post(&self, post_id: u64) {
        self.spawn(move |client| async move {
            let result = acked(client.delete_post(post_id).await);
            vec![TaskResult::PostDeleted { post_id, result }]
        });
    }
}
