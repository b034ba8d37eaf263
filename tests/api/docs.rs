use serde_json::Value;

use crate::helpers::spawn_app;

#[tokio::test]
async fn welcome_points_to_swagger() {
    let app = spawn_app().await;

    let response = app.client.get(app.url("/")).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["message"],
        "Welcome to the Book API. Visit /swagger/index.html for docs."
    );
}

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;

    let response = app.client.get(app.url("/health")).send().await.unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 2);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/api-docs/openapi.json"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["info"]["title"], "Book API");
    assert!(body["paths"]["/books/{id}"]["put"].is_object());
    assert!(body["components"]["schemas"]["Book"].is_object());
}

#[tokio::test]
async fn swagger_ui_is_served() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/swagger/index.html"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response.text().await.unwrap().contains("swagger"));
}
