//! Backend client integration tests.
//!
//! Starts an axum stand-in for the restaurant backend on a free port and
//! drives it through `ApiClient` and the screen state that consumes it.

use std::{
    sync::{
        Arc,
        Mutex,
    },
    time::Duration,
};

use axum::{
    extract::{
        Path,
        Query,
        State,
    },
    http::{
        header,
        HeaderMap,
        StatusCode,
    },
    response::{
        IntoResponse,
        Response,
    },
    routing::{
        get,
        post,
    },
    Json,
    Router,
};
use serde_json::{
    json,
    Value,
};
use tastemap::{
    core::{
        http::http_client,
        models::{
            Credentials,
            PostDraft,
        },
        ApiError,
        ApiErrorKind,
        RestaurantId,
        ReviewId,
        ReviewStatus,
    },
    reviews::{
        ReviewDetailState,
        ReviewDraft,
    },
    ApiClient,
};

#[derive(Default)]
struct Backend {
    reviews: Vec<Value>,
    next_review: u64,
    fail_next_review: bool,
    liked: Vec<Value>,
    posts_written: Vec<Value>,
}

type Shared = Arc<Mutex<Backend>>;

const SESSION_COOKIE: &str = "sid=stub-session";

async fn restaurants(Query(query): Query<Vec<(String, String)>>) -> Json<Value> {
    let all = vec![
        json!({"restaurants_id": 1, "name": "Gogi House", "food_type": "Korean", "category": "Korean"}),
        json!({"id": "2", "name": "Pasta Bar", "food_type": "Western", "category": "Western"}),
        json!({"restaurant_id": 3, "name": "Noodle Spot", "food_type": "Chinese", "category": "Chinese"}),
    ];
    let category = query.iter().find(|(k, _)| k == "category").map(|(_, v)| v.clone());
    let data: Vec<Value> = match category {
        Some(category) => all.into_iter().filter(|r| r["category"] == category.as_str()).collect(),
        None => all,
    };
    Json(json!({ "data": data }))
}

async fn save_likes(State(state): State<Shared>, Json(body): Json<Value>) -> Json<Value> {
    let mut backend = state.lock().unwrap();
    backend.liked = body["restaurantIds"].as_array().cloned().unwrap_or_default();
    Json(json!({"resultCode": "S-1", "msg": "saved"}))
}

async fn fetch_reviews(State(state): State<Shared>, Path(restaurant): Path<u64>) -> Json<Value> {
    let backend = state.lock().unwrap();
    let reviews: Vec<Value> = backend
        .reviews
        .iter()
        .filter(|r| r["restaurant_id"] == restaurant)
        .cloned()
        .collect();
    Json(json!({ "reviews": reviews }))
}

async fn create_review(State(state): State<Shared>, Json(mut body): Json<Value>) -> impl IntoResponse {
    let mut backend = state.lock().unwrap();
    if backend.fail_next_review {
        backend.fail_next_review = false;
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"msg": "database down"})));
    }
    backend.next_review += 1;
    body["review_id"] = json!(backend.next_review);
    backend.reviews.push(body);
    (StatusCode::OK, Json(json!({"resultCode": "S-1", "msg": "created"})))
}

async fn delete_review(State(state): State<Shared>, Path(review): Path<u64>) -> StatusCode {
    let mut backend = state.lock().unwrap();
    backend.reviews.retain(|r| r["review_id"] != review);
    StatusCode::NO_CONTENT
}

async fn check_session(headers: HeaderMap) -> Json<Value> {
    let authenticated = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|cookies| cookies.contains(SESSION_COOKIE));
    Json(json!({ "isAuthenticated": authenticated }))
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["password"] != "hunter2" {
        return (
            HeaderMap::new(),
            Json(json!({"resultCode": "F-2", "msg": "wrong password"})),
        );
    }
    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/").parse().unwrap());
    (
        headers,
        Json(json!({"resultCode": "S-1", "user": {"username": "mina"}})),
    )
}

async fn posts(Query(query): Query<Vec<(String, String)>>) -> Json<Value> {
    let all = vec![
        json!({"post_id": 1, "post_title": "Best bibimbap in town", "post_content": "...", "post_date": "2024-11-02T10:00:00.000Z"}),
        json!({"post_id": 2, "post_title": "Pasta night", "post_content": "..."}),
    ];
    let title = query.iter().find(|(k, _)| k == "title").map(|(_, v)| v.to_lowercase());
    let data: Vec<Value> = match title {
        Some(title) => all
            .into_iter()
            .filter(|p| p["post_title"].as_str().unwrap_or_default().to_lowercase().contains(&title))
            .collect(),
        None => all,
    };
    Json(json!({ "data": data }))
}

async fn create_post(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let title = body["post_title"].as_str().unwrap_or_default().to_string();
    match title.as_str() {
        "" => Json(json!({"resultCode": "F-1", "msg": {"field": "post_title"}})).into_response(),
        "no code" => Json(json!({"msg": "stored, probably"})).into_response(),
        "plain text" => "saved!".into_response(),
        _ => {
            state.lock().unwrap().posts_written.push(body);
            Json(json!({"resultCode": "S-1", "msg": "posted"})).into_response()
        }
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/api/v1/restaurants", get(restaurants))
        .route("/api/v1/restaurants/likes", post(save_likes))
        .route("/api/v1/reviews", post(create_review))
        .route("/api/v1/reviews/:id", get(fetch_reviews).delete(delete_review))
        .route("/api/v1/check-session", get(check_session))
        .route("/api/v1/login", post(login))
        .route("/api/v1/posts", get(posts))
        .route("/api/v1/post", post(create_post))
        .with_state(state)
}

/// Bind to port 0 and return a client pointed at the actual address.
async fn start_backend(state: Shared) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    let http = http_client(Duration::from_secs(5)).unwrap();
    ApiClient::new(format!("http://{addr}/api/v1"), http)
}

fn post_draft(title: &str) -> PostDraft {
    PostDraft {
        post_title: title.to_string(),
        post_content: "Anyone been lately?".to_string(),
        post_date: "2024-11-02T10:00:00.000Z".to_string(),
    }
}

fn draft(author: &str, content: &str, rating: u8) -> ReviewDraft {
    ReviewDraft {
        author: author.to_string(),
        content: content.to_string(),
        hashtags: "#spicy #cozy".to_string(),
        rating,
    }
}

#[tokio::test]
async fn restaurants_are_normalized_from_mixed_ids() {
    let client = start_backend(Shared::default()).await;

    let restaurants = client.fetch_restaurants().await.unwrap();
    let ids: Vec<u64> = restaurants.iter().map(|r| r.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(restaurants[1].name, "Pasta Bar");

    let korean = client.fetch_restaurants_by_category("Korean").await.unwrap();
    assert_eq!(korean.len(), 1);
    assert_eq!(korean[0].cuisine(), "Korean");
}

#[tokio::test]
async fn liked_restaurants_are_sent_as_ids() {
    let state = Shared::default();
    let client = start_backend(state.clone()).await;

    let ack = client.save_liked_restaurants(&[RestaurantId(1), RestaurantId(3)]).await.unwrap();
    assert_eq!(ack.result_code.as_deref(), Some("S-1"));
    assert_eq!(state.lock().unwrap().liked, vec![json!(1), json!(3)]);
}

#[tokio::test]
async fn review_create_and_delete_round_trip() {
    let client = start_backend(Shared::default()).await;
    let restaurant = RestaurantId(1);

    assert!(client.fetch_reviews(restaurant).await.unwrap().is_empty());

    let review = draft("mina", "Great galbi", 5).validate(restaurant).unwrap();
    client.create_review(&review).await.unwrap();

    let reviews = client.fetch_reviews(restaurant).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].author, "mina");
    assert_eq!(reviews[0].hashtags, vec!["spicy", "cozy"]);
    assert_eq!(reviews[0].status, ReviewStatus::Confirmed);

    let ReviewId::Server(id) = reviews[0].id else {
        panic!("fetched reviews carry server ids");
    };
    client.delete_review(id).await.unwrap();
    assert!(client.fetch_reviews(restaurant).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_review_submission_is_marked_then_replaced_by_refetch() {
    let state = Shared::default();
    state.lock().unwrap().fail_next_review = true;
    let client = start_backend(state).await;
    let restaurant = RestaurantId(1);

    let mut detail = ReviewDetailState::new();
    let fetch = detail.open(restaurant);
    assert!(detail.finish_fetch(fetch, client.fetch_reviews(restaurant).await));

    // First attempt hits the 500 and stays on screen as failed.
    let first = detail.submit(&draft("mina", "Great galbi", 5)).unwrap();
    let result = client.create_review(&first.review).await.map(|_| ());
    assert_eq!(result.as_ref().map_err(ApiError::kind), Err(ApiErrorKind::Status));
    assert!(detail.finish_submit(&first, result).is_none());
    assert_eq!(detail.failed_count(), 1);

    // The retry succeeds and the authoritative list replaces the local entries.
    let second = detail.submit(&draft("mina", "Great galbi", 5)).unwrap();
    let result = client.create_review(&second.review).await.map(|_| ());
    let refetch = detail.finish_submit(&second, result).unwrap();
    assert!(!detail.is_write_open());
    assert!(detail.finish_fetch(refetch, client.fetch_reviews(restaurant).await));

    assert_eq!(detail.reviews().len(), 1);
    assert!(detail.reviews().iter().all(|r| !r.is_local()));
    assert_eq!(detail.failed_count(), 0);
}

#[tokio::test]
async fn login_cookie_authenticates_later_checks() {
    let client = start_backend(Shared::default()).await;

    assert!(!client.check_session().await.unwrap());

    let refused = client
        .login(&Credentials { email: "mina@example.com".to_string(), password: "nope".to_string() })
        .await;
    assert_eq!(refused.map_err(|e| e.kind()), Err(ApiErrorKind::Rejected));
    assert!(!client.check_session().await.unwrap());

    let user = client
        .login(&Credentials { email: "mina@example.com".to_string(), password: "hunter2".to_string() })
        .await
        .unwrap();
    assert_eq!(user.username, "mina");
    assert_eq!(user.email, "mina@example.com");
    assert!(client.check_session().await.unwrap());
}

#[tokio::test]
async fn post_search_and_rejected_write() {
    let state = Shared::default();
    let client = start_backend(state.clone()).await;

    let all = client.fetch_posts().await.unwrap();
    assert_eq!(all.len(), 2);

    let found = client.search_posts("bibimbap").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);
    assert_eq!(found[0].date.as_deref(), Some("2024-11-02T10:00:00.000Z"));

    let rejected = client.create_post(&post_draft("")).await;
    assert_eq!(
        rejected,
        Err(ApiError::Rejected {
            result_code: "F-1".to_string(),
            message: Some(r#"{"field":"post_title"}"#.to_string()),
        })
    );
    assert!(state.lock().unwrap().posts_written.is_empty());
}

#[tokio::test]
async fn post_writes_need_an_explicit_success_code() {
    let state = Shared::default();
    let client = start_backend(state.clone()).await;

    let ack = client.create_post(&post_draft("Pasta night, again")).await.unwrap();
    assert_eq!(ack.result_code.as_deref(), Some("S-1"));

    let silent = client.create_post(&post_draft("no code")).await;
    assert_eq!(silent.map_err(|e| e.kind()), Err(ApiErrorKind::Decode));

    let garbled = client.create_post(&post_draft("plain text")).await;
    assert_eq!(garbled.map_err(|e| e.kind()), Err(ApiErrorKind::Decode));

    assert_eq!(state.lock().unwrap().posts_written.len(), 1);
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let http = http_client(Duration::from_secs(2)).unwrap();
    let client = ApiClient::new(format!("http://{addr}/api/v1"), http);
    let err = client.fetch_restaurants().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Transport);
}
