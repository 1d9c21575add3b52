//! HTTP handlers and route configuration.

mod health;
mod index;
mod posts;

use actix_web::web;

use crate::middleware::error::configure_extractors;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    cfg.route("/", web::get().to(index::help))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::list))
                .route(web::post().to(posts::create)),
        )
        // Registered before `/posts/{id}` so "search" is not taken as an id
        .service(web::resource("/posts/search").route(web::get().to(posts::search)))
        .service(
            web::resource("/posts/{id}")
                .route(web::get().to(posts::get))
                .route(web::put().to(posts::update))
                .route(web::delete().to(posts::delete)),
        );
}

#[cfg(test)]
mod tests {
    use actix_web::http::{StatusCode, header::ContentType};
    use actix_web::{App, test, web};
    use blog_core::domain::Post;
    use blog_shared::ErrorResponse;
    use serde_json::json;

    use super::configure_routes;
    use crate::state::AppState;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::new()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn create_request(title: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({"title": title, "content": "body", "author": "ana"}))
    }

    #[actix_web::test]
    async fn test_index_lists_endpoints() {
        let app = app!();
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.starts_with("Welcome to the Blog API!"));
        assert!(text.contains("DELETE /posts/{id}"));
    }

    #[actix_web::test]
    async fn test_list_empty() {
        let app = app!();
        let posts: Vec<Post> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/posts").to_request(),
        )
        .await;

        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn test_create_returns_201_with_assigned_fields() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({"id": 77, "title": "Hello", "content": "World", "author": "ana"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let post: Post = test::read_body_json(resp).await;
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.created_at, post.updated_at);
    }

    #[actix_web::test]
    async fn test_create_without_content_type_is_decoded() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/posts")
            .set_payload(r#"{"title":"plain"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_create_malformed_body_returns_400() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header(ContentType::json())
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.status, 400);
        assert!(error.detail.is_some());
    }

    #[actix_web::test]
    async fn test_invalid_id_returns_400() {
        let app = app!();
        for req in [
            test::TestRequest::get().uri("/posts/abc").to_request(),
            test::TestRequest::delete().uri("/posts/1.5").to_request(),
            test::TestRequest::put()
                .uri("/posts/x")
                .set_json(json!({"title": "t"}))
                .to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[actix_web::test]
    async fn test_negative_id_returns_404() {
        let app = app!();
        for req in [
            test::TestRequest::get().uri("/posts/-1").to_request(),
            test::TestRequest::put()
                .uri("/posts/-1")
                .set_json(json!({"title": "t"}))
                .to_request(),
            test::TestRequest::delete().uri("/posts/-1").to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
            let error: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(error.detail.as_deref(), Some("Post not found"));
        }
    }

    #[actix_web::test]
    async fn test_update_malformed_body_leaves_post_unchanged() {
        let app = app!();
        let resp = test::call_service(&app, create_request("Original").to_request()).await;
        let created: Post = test::read_body_json(resp).await;
        let uri = format!("/posts/{}", created.id);

        let req = test::TestRequest::put()
            .uri(&uri)
            .insert_header(ContentType::json())
            .set_payload(r#"{"title": 5}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.title, "Bad Request");
        assert!(error.detail.is_some());

        let fetched: Post =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri(&uri).to_request())
                .await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_missing_post_returns_404() {
        let app = app!();
        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/posts/9999").to_request())
                .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.detail.as_deref(), Some("Post not found"));
    }

    #[actix_web::test]
    async fn test_update_missing_returns_404() {
        let app = app!();
        let req = test::TestRequest::put()
            .uri("/posts/9999")
            .set_json(json!({"title": "nope"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_search_matches_keyword() {
        let app = app!();
        test::call_service(&app, create_request("Rust ownership").to_request()).await;
        test::call_service(&app, create_request("Gardening").to_request()).await;

        let posts: Vec<Post> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/posts/search?q=rust").to_request(),
        )
        .await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Rust ownership");

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/posts/search").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_health_reports_post_count() {
        let app = app!();
        test::call_service(&app, create_request("one").to_request()).await;

        let body: serde_json::Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/health").to_request(),
        )
        .await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["posts"], 1);
    }

    #[actix_web::test]
    async fn test_crud_lifecycle() {
        let app = app!();

        // create
        let resp = test::call_service(&app, create_request("Walk dog").to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Post = test::read_body_json(resp).await;
        let uri = format!("/posts/{}", created.id);

        // get
        let fetched: Post =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri(&uri).to_request())
                .await;
        assert_eq!(fetched, created);

        // update replaces every editable field
        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&uri)
                .set_json(json!({"title": "Walk cat"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Post = test::read_body_json(resp).await;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "Walk cat");
        assert_eq!(updated.content, "");
        assert_eq!(updated.author, "");

        // delete
        let resp =
            test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());

        // get after delete
        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // ids are not reused
        let resp = test::call_service(&app, create_request("Again").to_request()).await;
        let again: Post = test::read_body_json(resp).await;
        assert_eq!(again.id, created.id + 1);

        let posts: Vec<Post> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/posts").to_request(),
        )
        .await;
        assert_eq!(posts, vec![again]);
    }
}
