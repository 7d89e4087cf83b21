mod forms;

use chrono::Utc;
use eframe::egui;
pub use forms::Forms;
use tracing::{
    error,
    info,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    error_modal::ErrorModal,
    message_overlay::{
        BusyReason,
        MessageOverlay,
    },
    theme::{
        apply_preference,
        set_theme,
        Theme,
    },
    top_bar::TopBar,
    views,
};
use crate::{
    api::ApiClient,
    community::{
        BoardState,
        SearchRequest,
        WriteTarget,
    },
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        Restaurant,
        RestaurantId,
        Settings,
        TasteMapError,
    },
    favorites::FavoritesState,
    listing::ListingState,
    reviews::ReviewDetailState,
    route::{
        Navigator,
        Route,
    },
    session::SessionState,
    survey::{
        PreferenceStore,
        SurveyOutcome,
        SurveyState,
    },
};

pub struct TasteMapApp {
    // Configuration
    pub settings: Settings,

    // Screens
    pub navigator: Navigator,
    pub store: PreferenceStore,
    pub survey: SurveyState,
    pub listing: ListingState,
    pub reviews: ReviewDetailState,
    pub board: BoardState,
    pub session: SessionState,
    pub favorites: FavoritesState,
    pub forms: Forms,

    // UI State
    pub theme: Theme,
    pub message_overlay: MessageOverlay,
    pub error_modal: ErrorModal,

    // Where to continue after a sign-in that was asked for by a protected screen
    after_login: Option<Route>,
    task_manager: TaskManager,
}

impl TasteMapApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Result<Self, TasteMapError> {
        let client = ApiClient::from_settings(&settings)?;
        info!("Using backend at {}", client.base_url());

        let mut task_manager = TaskManager::new(client)?;
        task_manager.set_repaint_context(cc.egui_ctx.clone());

        let theme = Theme::default();
        set_theme(&cc.egui_ctx, &theme);
        apply_preference(&cc.egui_ctx, settings.dark_mode);

        let mut forms = Forms::default();
        forms.review.author = settings.review_author.clone();
        forms.review.rating = 5;

        let mut app = Self {
            settings,
            navigator: Navigator::new(Route::Home),
            store: PreferenceStore::new(),
            survey: SurveyState::new(),
            listing: ListingState::new(),
            reviews: ReviewDetailState::new(),
            board: BoardState::new(),
            session: SessionState::new(),
            favorites: FavoritesState::new(),
            forms,
            theme,
            message_overlay: MessageOverlay::new(),
            error_modal: ErrorModal::new(),
            after_login: None,
            task_manager,
        };

        let session_id = app.session.begin();
        let restaurants_id = app.survey.begin_load();
        app.task_manager.startup(session_id, restaurants_id);

        Ok(app)
    }

    /// Restaurant details known locally, from whichever screen fetched them last.
    pub fn find_restaurant(&self, id: RestaurantId) -> Option<Restaurant> {
        let snapshot = self.store.snapshot();
        let found = [
            self.listing.items(),
            self.favorites.liked(),
            self.favorites.results(),
            snapshot.restaurants(),
        ]
        .into_iter()
        .find_map(|restaurants| restaurants.iter().find(|r| r.id == id))
        .cloned();
        found
    }

    fn navigate(&mut self, route: Route) {
        if route.requires_session() && !self.session.is_authenticated() {
            info!("{route} needs a session, asking to sign in first");
            self.after_login = Some(route);
            self.navigator.go(Route::Login);
            return;
        }

        self.navigator.go(route.clone());
        self.enter(route);
    }

    /// Starts whatever the screen needs when it becomes visible.
    fn enter(&mut self, route: Route) {
        match route {
            Route::Home => self.reload_liked(),
            Route::Survey => {
                if self.store.snapshot().restaurants().is_empty() && !self.survey.is_loading() {
                    let id = self.survey.begin_load();
                    self.task_manager.load_restaurants(id);
                }
            }
            Route::Category(name) => {
                let id = self.listing.select_category(name.clone());
                self.task_manager.load_category(id, name);
            }
            Route::Restaurant(restaurant_id) => {
                let id = self.reviews.open(restaurant_id);
                self.forms.review_error = None;
                self.task_manager.load_reviews(id, restaurant_id);
            }
            Route::Community => {
                let id = self.board.begin_list();
                self.task_manager.load_posts(id);
            }
            Route::WritePost => {
                self.board.start_new_post();
                self.forms.post_error = None;
            }
            Route::EditPost(post_id) => {
                self.forms.post_error = None;
                match self.board.posts().iter().find(|p| p.id == post_id).cloned() {
                    Some(post) => self.board.start_edit(&post),
                    None => self.task_manager.load_post(post_id),
                }
            }
            Route::Login => {}
        }
    }

    fn reload_liked(&mut self) {
        if self.session.is_authenticated() {
            let id = self.favorites.begin_load();
            self.task_manager.load_liked(id);
        }
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings.save() {
            error!("Failed to save settings: {e}");
        }
    }
}

impl eframe::App for TasteMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();

        for result in task_results {
            self.handle_task_result(result);
        }

        let mut actions = ActionQueue::new();

        TopBar::show(
            ctx,
            &self.theme,
            &self.navigator,
            &self.session,
            self.settings.dark_mode,
            &mut actions,
        );
        views::central_panel(ctx, self, &mut actions);

        self.message_overlay.show(ctx, &self.theme);
        self.error_modal.show(ctx);

        let had_actions = !actions.is_empty();
        for action in actions.drain() {
            self.apply_action(action, ctx);
        }
        if had_actions {
            ctx.request_repaint();
        }
    }
}

impl TasteMapApp {
    fn apply_action(&mut self, action: UiAction, ctx: &egui::Context) {
        match action {
            UiAction::Navigate(route) => self.navigate(route),
            UiAction::Back => {
                if let Some(route) = self.navigator.back().cloned() {
                    self.enter(route);
                }
            }

            UiAction::Answer { question, value } => {
                self.survey.answer(&mut self.store, question, &value);
            }
            UiAction::SubmitSurvey => self.submit_survey(),
            UiAction::ReloadRestaurants => {
                let id = self.survey.begin_load();
                self.task_manager.load_restaurants(id);
            }

            UiAction::SetSort(key) => self.listing.set_sort(key),
            UiAction::NextPage => {
                if self.listing.has_next() {
                    self.listing.next_page();
                }
            }
            UiAction::PreviousPage => self.listing.previous_page(),
            UiAction::RetryCategory => {
                let id = self.listing.refetch();
                self.task_manager.load_category(id, self.listing.category().to_string());
            }

            UiAction::ToggleReviewPanel => self.reviews.toggle_write_panel(),
            UiAction::SubmitReview => match self.reviews.submit(&self.forms.review) {
                Ok(submission) => {
                    self.forms.review_error = None;
                    if self.settings.review_author != submission.review.username {
                        self.settings.review_author = submission.review.username.clone();
                        self.save_settings();
                    }
                    self.task_manager.submit_review(submission);
                }
                Err(e) => self.forms.review_error = Some(e),
            },
            UiAction::DiscardReview(local_id) => {
                self.reviews.discard_failed(local_id);
            }
            UiAction::DeleteReview(review_id) => {
                if let Some(id) = self.reviews.request_delete(review_id) {
                    self.task_manager.delete_review(id);
                }
            }
            UiAction::ReloadReviews => {
                if let Some(restaurant_id) = self.reviews.restaurant_id() {
                    let id = self.reviews.begin_fetch();
                    self.task_manager.load_reviews(id, restaurant_id);
                }
            }

            UiAction::ReloadPosts => {
                let id = self.board.begin_list();
                self.task_manager.load_posts(id);
            }
            UiAction::SearchPosts => match self.board.search(&self.forms.post_search) {
                SearchRequest::Skip => {}
                SearchRequest::Send { id, title } => self.task_manager.search_posts(id, title),
            },
            UiAction::SavePost => match self.board.begin_write(Utc::now()) {
                Ok((id, target, draft)) => {
                    self.forms.post_error = None;
                    let post_id = match target {
                        WriteTarget::New => None,
                        WriteTarget::Existing(post_id) => Some(post_id),
                    };
                    self.task_manager.write_post(id, post_id, draft);
                }
                Err(e) => self.forms.post_error = Some(e),
            },
            UiAction::DeletePost(post_id) => {
                if let Some(id) = self.board.request_delete(post_id) {
                    self.task_manager.delete_post(id);
                }
            }

            UiAction::ReloadLiked => self.reload_liked(),
            UiAction::SearchRestaurants => {
                if let Some((id, title)) = self.favorites.begin_search() {
                    self.task_manager.search_restaurants(id, title);
                }
            }

            UiAction::Login => match self.session.form.credentials() {
                Ok(credentials) => {
                    self.forms.login_error = None;
                    let id = self.session.begin();
                    self.task_manager.login(id, credentials);
                }
                Err(e) => self.forms.login_error = Some(e),
            },
            UiAction::Logout => {
                let id = self.session.begin();
                self.task_manager.logout(id);
            }

            UiAction::SetDarkMode(dark_mode) => {
                self.settings.dark_mode = dark_mode;
                apply_preference(ctx, dark_mode);
                self.save_settings();
            }
        }
    }

    fn submit_survey(&mut self) {
        if !self.survey.can_submit(&self.store) {
            return;
        }

        match self.survey.submit(&mut self.store) {
            SurveyOutcome::NoMatch => {
                self.error_modal.show_info(
                    "No matching restaurants",
                    "No restaurant fits these preferences. Try loosening a few answers.",
                );
            }
            SurveyOutcome::Matched(ids) => {
                info!("Saving {} matched restaurants as liked", ids.len());
                let id = self.survey.begin_save_likes();
                self.message_overlay.begin(BusyReason::SavingMatches);
                self.task_manager.save_likes(id, ids);
            }
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::SessionChecked { id, result } => {
                if self.session.finish_check(id, result)
                    && self.session.is_authenticated()
                    && self.navigator.current() == &Route::Home
                {
                    self.reload_liked();
                }
            }
            TaskResult::LoggedIn { id, result } => {
                if self.session.finish_login(id, result) {
                    let next = self.after_login.take().unwrap_or(Route::Home);
                    self.navigate(next);
                }
            }
            TaskResult::LoggedOut { id, result } => {
                if let Err(e) = &result {
                    self.error_modal.show_api_error("Sign out failed", e);
                }
                if self.session.finish_logout(id, result) {
                    self.favorites = FavoritesState::new();
                    self.navigate(Route::Home);
                }
            }

            TaskResult::RestaurantsLoaded { id, result } => {
                self.message_overlay.end(BusyReason::Connecting);
                self.survey.finish_load(&mut self.store, id, result);
            }
            TaskResult::LikesSaved { id, result } => {
                self.message_overlay.end(BusyReason::SavingMatches);
                let failure = result.as_ref().err().cloned();
                if self.survey.finish_save_likes(id, result) {
                    self.navigate(Route::Home);
                } else if let Some(e) = failure {
                    self.error_modal.show_api_error("Could not save your matches", &e);
                }
            }
            TaskResult::LikedLoaded { id, result } => {
                self.favorites.finish_load(id, result);
            }
            TaskResult::RestaurantSearch { id, result } => {
                self.favorites.finish_search(id, result);
            }
            TaskResult::CategoryLoaded { id, result } => {
                self.listing.finish_fetch(id, result);
            }

            TaskResult::ReviewsLoaded { id, result } => {
                self.reviews.finish_fetch(id, result);
            }
            TaskResult::ReviewSubmitted { submission, result } => {
                let restaurant_id = submission.review.restaurant_id;
                if let Some(id) = self.reviews.finish_submit(&submission, result) {
                    self.forms.review.content.clear();
                    self.forms.review.hashtags.clear();
                    self.task_manager.load_reviews(id, restaurant_id);
                }
            }
            TaskResult::ReviewDeleted { review_id, result } => {
                if let Some(id) = self.reviews.finish_delete(review_id, result) {
                    if let Some(restaurant_id) = self.reviews.restaurant_id() {
                        self.task_manager.load_reviews(id, restaurant_id);
                    }
                }
            }

            TaskResult::PostsLoaded { id, result } => {
                self.board.finish_list(id, result);
            }
            TaskResult::PostSearch { id, result } => {
                self.board.finish_search(id, result);
            }
            TaskResult::PostLoaded { post_id, result } => {
                if self.navigator.current() != &Route::EditPost(post_id) {
                    return;
                }
                match result {
                    Ok(post) => self.board.start_edit(&post),
                    Err(e) => self.error_modal.show_api_error("Could not open the post", &e),
                }
            }
            TaskResult::PostWritten { id, result } => {
                if self.board.finish_write(id, result) {
                    self.navigate(Route::Community);
                }
            }
            TaskResult::PostDeleted { post_id, result } => {
                if let Err(e) = &result {
                    self.error_modal.show_api_error("Could not delete the post", e);
                }
                if self.board.finish_delete(post_id, result)
                    && self.navigator.current() == &Route::EditPost(post_id)
                {
                    self.navigate(Route::Community);
                }
            }
        }
    }
}
