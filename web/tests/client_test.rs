use serde_json::json;
use web_client::{ClientError, NewTodo, Todo, TodoApiService};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_todo(id: i64, name: &str, is_completed: bool) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "isCompleted": is_completed,
        "createdAt": "2026-08-23T10:00:00+00:00",
    })
}

#[tokio::test]
async fn get_all_decodes_the_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ToDos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            sample_todo(2, "Walk the dog", false),
            sample_todo(1, "Buy milk", true),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let service = TodoApiService::new(&server.uri());
    let todos = service.get_all().await.expect("get_all failed");

    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].id, 2);
    assert_eq!(todos[1].name, "Buy milk");
    assert!(todos[1].is_completed);
}

#[tokio::test]
async fn get_by_id_returns_none_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ToDos/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let service = TodoApiService::new(&server.uri());
    let todo = service.get_by_id(42).await.expect("get_by_id failed");

    assert!(todo.is_none());
}

#[tokio::test]
async fn get_by_id_decodes_the_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ToDos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_todo(1, "Buy milk", false)))
        .mount(&server)
        .await;

    let service = TodoApiService::new(&server.uri());
    let todo = service.get_by_id(1).await.unwrap().expect("expected a todo");

    assert_eq!(todo.id, 1);
    assert_eq!(todo.name, "Buy milk");
}

#[tokio::test]
async fn search_hits_the_search_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ToDos/search/milk"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([sample_todo(1, "Buy milk", false)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = TodoApiService::new(&server.uri());
    let todos = service.search("milk").await.expect("search failed");

    assert_eq!(todos.len(), 1);
}

#[tokio::test]
async fn create_posts_the_payload_and_decodes_the_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ToDos"))
        .and(body_json(json!({"name": "Buy milk", "isCompleted": false})))
        .respond_with(ResponseTemplate::new(201).set_body_json(sample_todo(1, "Buy milk", false)))
        .expect(1)
        .mount(&server)
        .await;

    let service = TodoApiService::new(&server.uri());
    let created = service
        .create(&NewTodo {
            name: "Buy milk".to_string(),
            is_completed: false,
        })
        .await
        .expect("create failed");

    assert_eq!(created.id, 1);
    assert!(!created.created_at.is_empty());
}

#[tokio::test]
async fn update_puts_the_full_record() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/ToDos/1"))
        .and(body_json(json!({
            "id": 1,
            "name": "Buy milk",
            "isCompleted": true,
            "createdAt": "2026-08-23T10:00:00+00:00",
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let service = TodoApiService::new(&server.uri());
    let todo = Todo {
        id: 1,
        name: "Buy milk".to_string(),
        is_completed: true,
        created_at: "2026-08-23T10:00:00+00:00".to_string(),
    };

    service.update(1, &todo).await.expect("update failed");
}

#[tokio::test]
async fn delete_issues_a_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/ToDos/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let service = TodoApiService::new(&server.uri());
    service.delete(1).await.expect("delete failed");
}

#[tokio::test]
async fn non_success_status_becomes_a_recoverable_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ToDos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let service = TodoApiService::new(&server.uri());
    let err = service.get_all().await.unwrap_err();

    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn update_failure_carries_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/ToDos/1"))
        .respond_with(ResponseTemplate::new(400).set_body_string("id mismatch"))
        .mount(&server)
        .await;

    let service = TodoApiService::new(&server.uri());
    let todo = Todo {
        id: 2,
        name: "Buy milk".to_string(),
        is_completed: false,
        created_at: "2026-08-23T10:00:00+00:00".to_string(),
    };
    let err = service.update(1, &todo).await.unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 400, .. }));
    // Display gives the presentation layer a human-readable message.
    assert!(err.to_string().contains("id mismatch"));
}
