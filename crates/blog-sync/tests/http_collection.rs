//! HTTP integration tests for HttpCollection.
//!
//! An axum stub of the collection API runs on a random port; the client and
//! the controller are driven against it with reqwest.

use std::cell::RefCell;
use std::net::SocketAddr;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use blog_sync::{
    ClientConfig, ClientError, CollectionApi, Controller, Draft, HttpCollection, Outcome, Prompt,
    Record, RecordId, SharedState, ViewState,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Default)]
struct Stub {
    records: Vec<Record>,
    last_id: u32,
}

type Db = Arc<Mutex<Stub>>;

// Mongo-style payloads: ids come back as `_id`
async fn list(State(db): State<Db>) -> Json<Vec<Value>> {
    let stub = db.lock().unwrap();
    Json(
        stub.records
            .iter()
            .map(|r| {
                json!({
                    "_id": r.id,
                    "title": r.title,
                    "author": r.author,
                    "url": r.url,
                    "likes": r.likes,
                })
            })
            .collect(),
    )
}

async fn create(State(db): State<Db>, Json(draft): Json<Draft>) -> (StatusCode, Json<Record>) {
    let mut stub = db.lock().unwrap();
    stub.last_id += 1;
    let record = Record {
        id: RecordId::new(format!("srv-{}", stub.last_id)),
        title: draft.title,
        author: draft.author,
        url: draft.url,
        likes: 0,
    };
    stub.records.push(record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn update(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(record): Json<Record>,
) -> Result<Json<Record>, StatusCode> {
    let mut stub = db.lock().unwrap();
    let stored = stub
        .records
        .iter_mut()
        .find(|r| r.id.as_str() == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *stored = Record {
        id: RecordId::new(id),
        ..record
    };
    Ok(Json(stored.clone()))
}

async fn remove(State(db): State<Db>, Path(id): Path<String>) -> StatusCode {
    let mut stub = db.lock().unwrap();
    let before = stub.records.len();
    stub.records.retain(|r| r.id.as_str() != id);
    if stub.records.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn spawn_stub() -> SocketAddr {
    let app = Router::new()
        .route("/api/blogs", get(list).post(create))
        .route("/api/blogs/:id", put(update).delete(remove))
        .with_state(Db::default());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn collection(addr: SocketAddr) -> HttpCollection {
    HttpCollection::new(&ClientConfig::default().with_base_url(format!("http://{}", addr)))
}

#[tokio::test]
async fn crud_roundtrip() {
    let addr = spawn_stub().await;
    let api = collection(addr);

    assert!(api.list_all().await.unwrap().is_empty());

    let created = api.create(&Draft::new("A", "X", "u1")).await.unwrap();
    assert_eq!(created.id.as_str(), "srv-1");
    assert_eq!(created.likes, 0);

    let listed = api.list_all().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let liked = Record {
        likes: 1,
        ..created.clone()
    };
    let updated = api.update(&created.id, &liked).await.unwrap();
    assert_eq!(updated.likes, 1);

    api.remove(&created.id).await.unwrap();
    assert!(api.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_id_maps_to_not_found() {
    let addr = spawn_stub().await;
    let api = collection(addr);
    let ghost = RecordId::new("ghost");
    let record = Record {
        id: ghost.clone(),
        title: "T".into(),
        author: "A".into(),
        url: "u".into(),
        likes: 0,
    };

    assert_eq!(
        api.update(&ghost, &record).await.unwrap_err(),
        ClientError::NotFound(ghost.clone())
    );
    assert_eq!(api.remove(&ghost).await.unwrap_err(), ClientError::NotFound(ghost));
}

#[tokio::test]
async fn wrong_collection_path_is_network_error() {
    let addr = spawn_stub().await;
    let config = ClientConfig::default()
        .with_base_url(format!("http://{}", addr))
        .with_collection_path("/api/nothing");
    let api = HttpCollection::new(&config);
    assert_eq!(api.endpoint(), format!("http://{}/api/nothing", addr));

    let err = api.list_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(ref msg) if msg.contains("404")));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = collection(addr).list_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn controller_over_http() {
    let addr = spawn_stub().await;
    let api = collection(addr);
    let state: SharedState = Rc::new(RefCell::new(ViewState::new()));
    let controller = Controller::new(api.clone(), |_: &Prompt| true, state.clone());

    assert_eq!(controller.load().await, Outcome::Completed);
    assert_eq!(controller.add(Draft::new("A", "X", "u1")).await, Outcome::Completed);
    let id = state.borrow().records()[0].id.clone();

    assert_eq!(controller.like(&id).await, Outcome::Completed);
    assert_eq!(controller.add(Draft::new("A2", "Y", "u1")).await, Outcome::Completed);
    let remote = api.list_all().await.unwrap();
    assert_eq!(state.borrow().records(), remote.as_slice());
    assert_eq!(state.borrow().records()[0].likes, 1);
    assert_eq!(state.borrow().records()[0].title, "A2");

    assert_eq!(controller.delete(&id).await, Outcome::Completed);
    assert!(state.borrow().records().is_empty());
    assert!(api.list_all().await.unwrap().is_empty());
}
