//! OpenAPI documentation
//!
//! [`ApiDoc`] collects the `#[utoipa::path]` descriptions of every handler
//! and the request/response schemas. The router serves the document at
//! `/api-docs/openapi.json` and Swagger UI at `/docs`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, SignupRequest};
use crate::backend::error::ErrorBody;
use crate::shared::{Book, BookPage, CreateBookRequest, FieldError, UpdateBookRequest};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/docs";

/// Registers the JWT bearer scheme referenced by the book routes
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token returned by POST /auth/signup or POST /auth/login"))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Books API",
        description = "Book catalog with JWT authentication."
    ),
    paths(
        crate::backend::routes::router::health,
        crate::backend::auth::handlers::signup::signup,
        crate::backend::auth::handlers::login::login,
        crate::backend::books::handlers::create_book,
        crate::backend::books::handlers::list_books,
        crate::backend::books::handlers::get_book,
        crate::backend::books::handlers::update_book,
        crate::backend::books::handlers::delete_book,
    ),
    components(schemas(
        Book,
        BookPage,
        CreateBookRequest,
        UpdateBookRequest,
        SignupRequest,
        LoginRequest,
        AuthResponse,
        ErrorBody,
        FieldError,
    )),
    tags(
        (name = "auth", description = "Signup and login"),
        (name = "books", description = "Book catalog; every route needs a bearer token"),
        (name = "health", description = "Liveness check")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn document() -> Value {
        serde_json::to_value(ApiDoc::openapi()).unwrap()
    }

    #[test]
    fn test_lists_every_operation() {
        let doc = document();
        let operations = [
            ("/auth/signup", "post", "signup"),
            ("/auth/login", "post", "login"),
            ("/books", "post", "create_book"),
            ("/books", "get", "list_books"),
            ("/books/{id}", "get", "get_book"),
            ("/books/{id}", "patch", "update_book"),
            ("/books/{id}", "delete", "delete_book"),
        ];

        for (path, method, operation_id) in operations {
            let operation = &doc["paths"][path][method];
            assert_eq!(
                operation["operationId"], operation_id,
                "{method} {path} missing from the document"
            );
        }
    }

    #[test]
    fn test_book_routes_require_bearer_token() {
        let doc = document();
        assert_eq!(doc["components"]["securitySchemes"]["bearer_auth"]["scheme"], "bearer");

        for (path, method) in [("/books", "post"), ("/books", "get"), ("/books/{id}", "delete")] {
            let security = doc["paths"][path][method]["security"].to_string();
            assert!(security.contains("bearer_auth"), "{method} {path}: {security}");
        }
        assert!(doc["paths"]["/auth/login"]["post"]["security"].is_null());
    }

    #[test]
    fn test_request_schemas_use_wire_names() {
        let doc = document();
        let create = &doc["components"]["schemas"]["CreateBookRequest"];
        assert!(create["properties"]["publishedDate"].is_object());
        assert_eq!(create["properties"]["title"]["example"], "The Great Gatsby");

        let page = &doc["components"]["schemas"]["BookPage"];
        assert!(page["properties"]["books"].is_object());
    }
}
