use actix_web::HttpResponse;

const HELP_TEXT: &str = "Welcome to the Blog API!

Available endpoints:
POST   /posts             - Create a new post
GET    /posts             - Get all posts
GET    /posts/search?q=   - Search posts by keyword
GET    /posts/{id}        - Get a specific post
PUT    /posts/{id}        - Update a post
DELETE /posts/{id}        - Delete a post
GET    /health            - Server status
";

/// GET /
pub async fn help() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(HELP_TEXT)
}
