use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use service::catalog::{CreateServiceRequest, Service, REQUIRED_FIELDS_MSG};
use service::errors::ServiceError;

use crate::errors::JsonApiError;
use crate::metrics;
use crate::routes::AppState;

pub const DELETED_MSG: &str = "Service deleted successfully";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteServiceResponse {
    pub message: String,
    pub service: Service,
}

/// List every service in insertion order.
#[utoipa::path(get, path = "/api/services", tag = "services", responses((status = 200, description = "All services", body = [Service])))]
pub async fn list_services(State(state): State<AppState>) -> Json<Vec<Service>> {
    let services = state.store.list().await;
    info!(count = services.len(), "GET /api/services - Returning all services");
    metrics::record("list", "ok");
    Json(services)
}

/// Add a service. Malformed or incomplete bodies are answered the same way
/// as a missing field.
#[utoipa::path(
    post,
    path = "/api/services",
    tag = "services",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Created", body = Service),
        (status = 400, description = "Missing field", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn create_service(
    State(state): State<AppState>,
    payload: Result<Json<CreateServiceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Service>), JsonApiError> {
    let validated = match payload {
        Ok(Json(req)) => req.validate().map_err(|e| {
            warn!("POST /api/services - Missing required fields");
            e
        }),
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "POST /api/services - Unreadable body");
            Err(ServiceError::Validation(REQUIRED_FIELDS_MSG.into()))
        }
    };
    let input = validated.map_err(|e| {
        metrics::record("create", "invalid");
        JsonApiError::from(e)
    })?;

    let created = state.store.insert(input).await;
    info!(id = created.id, name = %created.name, "POST /api/services - Added new service");
    metrics::record("create", "ok");
    metrics::SERVICES_CREATED_TOTAL.inc();
    Ok((StatusCode::CREATED, Json(created)))
}

/// Read the id the way a lenient integer parse does: skip leading
/// whitespace, accept an optional sign, take the leading decimal digits and
/// ignore the rest (`"1abc"` and `"1.0"` are both 1). `None` when there are
/// no digits or the value cannot name a record (negative or past `u64`).
pub fn parse_id_prefix(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = s[..digits].parse::<u64>().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

/// Remove a service by id. Only the leading integer of the path segment
/// counts; segments without one cannot match any record and get the same 404.
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = "services",
    params(("id" = u64, Path, description = "Service id")),
    responses(
        (status = 200, description = "Deleted", body = DeleteServiceResponse),
        (status = 404, description = "Unknown id", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteServiceResponse>, JsonApiError> {
    let removed = match parse_id_prefix(&raw_id) {
        Some(id) => state.store.remove(id).await,
        None => Err(ServiceError::not_found("service")),
    };

    match removed {
        Ok(service) => {
            info!(id = service.id, name = %service.name, "DELETE /api/services/{} - Removed service", raw_id);
            metrics::record("delete", "ok");
            metrics::SERVICES_DELETED_TOTAL.inc();
            Ok(Json(DeleteServiceResponse { message: DELETED_MSG.into(), service }))
        }
        Err(e) => {
            warn!("DELETE /api/services/{} - Service not found", raw_id);
            metrics::record("delete", "not_found");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, Router};
    use service::catalog::ServiceStore;
    use tower::ServiceExt;

    fn app() -> (Router, std::sync::Arc<ServiceStore>) {
        let store = ServiceStore::seeded();
        let router = crate::routes::api_router(AppState::new(store.clone()));
        (router, store)
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::post("/api/services")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn list_returns_seed_in_order() {
        let (app, _) = app();
        let resp = app
            .oneshot(Request::get("/api/services").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        let ids: Vec<u64> = json.as_array().unwrap().iter().map(|s| s["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn create_with_empty_name_is_rejected_without_mutation() {
        let (app, store) = app();
        let resp = app
            .oneshot(post_json(r#"{"name":"","icon":"🔍","description":"x"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({"error": "Name, icon, and description are required"})
        );
        assert_eq!(store.len().await, 6);
    }

    #[tokio::test]
    async fn create_with_non_string_or_garbage_body_is_rejected() {
        for body in [r#"{"name":1,"icon":"a","description":"b"}"#, "not json", "{}"] {
            let (app, store) = app();
            let resp = app.oneshot(post_json(body)).await.unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(body_json(resp).await["error"], REQUIRED_FIELDS_MSG);
            assert_eq!(store.len().await, 6);
        }
    }

    #[tokio::test]
    async fn create_without_content_type_is_rejected() {
        let (app, _) = app();
        let req = Request::post("/api/services")
            .body(Body::from(r#"{"name":"a","icon":"b","description":"c"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_returns_201_with_new_id() {
        let (app, store) = app();
        let resp = app
            .oneshot(post_json(r#"{"name":"Test","icon":"🧪","description":"A test service"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = body_json(resp).await;
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "name": "Test", "icon": "🧪", "description": "A test service"})
        );
        assert_eq!(store.list().await.last().unwrap().id, 7);
    }

    #[tokio::test]
    async fn delete_unknown_id_is_404() {
        let (app, _) = app();
        let resp = app
            .oneshot(Request::delete("/api/services/9999").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await, serde_json::json!({"error": "Service not found"}));
    }

    #[tokio::test]
    async fn delete_non_numeric_id_is_404() {
        let (app, store) = app();
        let resp = app
            .oneshot(Request::delete("/api/services/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(store.len().await, 6);
    }

    #[tokio::test]
    async fn delete_with_trailing_garbage_parses_prefix() {
        for (raw, id) in [("1abc", 1), ("2.0", 2), ("%203", 3)] {
            let (app, store) = app();
            let resp = app
                .oneshot(Request::delete(format!("/api/services/{raw}")).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK, "path segment {raw}");
            assert_eq!(body_json(resp).await["service"]["id"], id);
            assert_eq!(store.len().await, 5);
            assert!(store.list().await.iter().all(|s| s.id != id));
        }
    }

    #[test]
    fn id_prefix_parsing() {
        assert_eq!(parse_id_prefix("42"), Some(42));
        assert_eq!(parse_id_prefix("  7xyz"), Some(7));
        assert_eq!(parse_id_prefix("+5"), Some(5));
        assert_eq!(parse_id_prefix("1.9"), Some(1));
        assert_eq!(parse_id_prefix("-0"), Some(0));
        assert_eq!(parse_id_prefix("-3"), None);
        assert_eq!(parse_id_prefix("abc"), None);
        assert_eq!(parse_id_prefix(""), None);
        assert_eq!(parse_id_prefix("99999999999999999999999"), None);
    }

    #[tokio::test]
    async fn delete_existing_returns_removed_record() {
        let (app, store) = app();
        let resp = app
            .oneshot(Request::delete("/api/services/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["message"], DELETED_MSG);
        assert_eq!(json["service"]["id"], 1);
        assert_eq!(json["service"]["name"], "SEO Optimization");
        assert_eq!(json["service"]["icon"], "🔍");
        assert!(store.list().await.iter().all(|s| s.id != 1));
    }
}
