use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::{
    application::usecases::parcels::{ParcelDto, ParcelUseCase},
    domain::{
        repositories::parcels::ParcelRepository,
        value_objects::parcels::{CreateParcelModel, ReceiveParcelModel},
    },
    infrastructure::{
        axum_http::{error_responses::AppError, json_body::JsonBody},
        sqlite::{repositories::parcels::ParcelSqlite, sqlite_connection::SqlitePoolSquad},
    },
};

#[derive(Debug, Serialize)]
pub struct DeleteParcelResponse {
    pub changes: usize,
}

pub fn routes(db_pool: Arc<SqlitePoolSquad>) -> Router {
    let parcel_repository = ParcelSqlite::new(Arc::clone(&db_pool));
    let parcel_usecase = ParcelUseCase::new(Arc::new(parcel_repository));

    Router::new()
        .route("/", get(get_all).post(create))
        .route("/:barcode", get(get_one).put(receive).delete(delete))
        .with_state(Arc::new(parcel_usecase))
}

pub async fn get_all<R>(
    State(parcel_usecase): State<Arc<ParcelUseCase<R>>>,
) -> Result<Json<Vec<ParcelDto>>, AppError>
where
    R: ParcelRepository + Send + Sync + 'static,
{
    let parcels = parcel_usecase.get_all().await?;
    Ok(Json(parcels))
}

/// Unknown barcodes answer 200 with an empty object.
pub async fn get_one<R>(
    State(parcel_usecase): State<Arc<ParcelUseCase<R>>>,
    Path(barcode): Path<String>,
) -> Result<Response, AppError>
where
    R: ParcelRepository + Send + Sync + 'static,
{
    let response = match parcel_usecase.get_one(&barcode).await? {
        Some(parcel) => Json(parcel).into_response(),
        None => {
            info!(%barcode, "parcels: no parcel for barcode");
            Json(json!({})).into_response()
        }
    };

    Ok(response)
}

pub async fn create<R>(
    State(parcel_usecase): State<Arc<ParcelUseCase<R>>>,
    JsonBody(create_parcel_model): JsonBody<CreateParcelModel>,
) -> Result<Json<String>, AppError>
where
    R: ParcelRepository + Send + Sync + 'static,
{
    let barcode = parcel_usecase.create(create_parcel_model).await?;
    Ok(Json(barcode))
}

pub async fn receive<R>(
    State(parcel_usecase): State<Arc<ParcelUseCase<R>>>,
    Path(barcode): Path<String>,
    JsonBody(receive_parcel_model): JsonBody<ReceiveParcelModel>,
) -> Result<Json<usize>, AppError>
where
    R: ParcelRepository + Send + Sync + 'static,
{
    let affected = parcel_usecase
        .receive(&barcode, receive_parcel_model)
        .await?;
    Ok(Json(affected))
}

pub async fn delete<R>(
    State(parcel_usecase): State<Arc<ParcelUseCase<R>>>,
    Path(barcode): Path<String>,
) -> Result<Json<DeleteParcelResponse>, AppError>
where
    R: ParcelRepository + Send + Sync + 'static,
{
    let changes = parcel_usecase.delete(&barcode).await?;
    Ok(Json(DeleteParcelResponse { changes }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sqlite_pool;
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header::CONTENT_TYPE},
    };
    use serde_json::Value;
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        send_request(app, request).await
    }

    async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    fn parcels_app() -> (tempfile::TempDir, Router) {
        let (dir, pool) = sqlite_pool();
        let app = Router::new().nest("/api/v1/parcels", routes(pool));
        (dir, app)
    }

    fn intake_payload() -> Value {
        json!({
            "user_id": "A",
            "file_id": "F-17",
            "attn_name": "Jane Doe",
            "attn_phone": "604-555-0100",
            "attn_organization": "Acme",
            "street_address": "1 Main St",
            "city": "X",
            "state_or_province": "BC",
            "country": "Canada",
            "postal_code": "V5K 0A1",
            "shipment_type": "parcel",
            "shipment_locale": "national",
            "shipment_speed": "two"
        })
    }

    async fn create_parcel(app: &Router) -> String {
        let payload = Some(intake_payload());
        let (status, body) = send(app, Method::POST, "/api/v1/parcels", payload).await;
        assert_eq!(status, StatusCode::OK);
        body.as_str().unwrap().to_string()
    }

    async fn parcel_count(app: &Router) -> usize {
        let (status, body) = send(app, Method::GET, "/api/v1/parcels", None).await;
        assert_eq!(status, StatusCode::OK);
        body.as_array().unwrap().len()
    }

    #[tokio::test]
    async fn list_is_an_empty_array_on_a_fresh_store() {
        let (_dir, app) = parcels_app();

        let (status, body) = send(&app, Method::GET, "/api/v1/parcels", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn create_returns_uuid_and_stores_submitted_fields() {
        let (_dir, app) = parcels_app();
        let mut payload = intake_payload();
        payload["shipment_status"] = json!("Received");
        payload["creation_date"] = json!("1999-01-01T00:00:00");
        payload["barcode"] = json!("client-chosen");

        let (status, body) = send(&app, Method::POST, "/api/v1/parcels", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        let barcode = body.as_str().unwrap().to_string();
        assert!(Uuid::parse_str(&barcode).is_ok());

        let (status, parcel) =
            send(&app, Method::GET, &format!("/api/v1/parcels/{barcode}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parcel["barcode"], json!(barcode));
        assert_eq!(parcel["shipment_status"], json!("created"));
        assert_ne!(parcel["creation_date"], json!("1999-01-01T00:00:00"));
        assert!(!parcel["creation_date"].as_str().unwrap().is_empty());
        assert_eq!(parcel["received_date"], Value::Null);

        let submitted = intake_payload();
        for (field, value) in submitted.as_object().unwrap() {
            assert_eq!(&parcel[field], value, "field {field}");
        }
    }

    #[tokio::test]
    async fn list_grows_on_create_and_shrinks_on_delete() {
        let (_dir, app) = parcels_app();

        let first = create_parcel(&app).await;
        assert_eq!(parcel_count(&app).await, 1);
        create_parcel(&app).await;
        assert_eq!(parcel_count(&app).await, 2);

        let (status, body) =
            send(&app, Method::DELETE, &format!("/api/v1/parcels/{first}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "changes": 1 }));
        assert_eq!(parcel_count(&app).await, 1);
    }

    #[tokio::test]
    async fn receive_stamps_received_date_and_returns_affected_count() {
        let (_dir, app) = parcels_app();
        let barcode = create_parcel(&app).await;
        let uri = format!("/api/v1/parcels/{barcode}");

        let (status, body) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({
                "shipment_weight": "1",
                "shipment_length": 2,
                "shipment_width": "3",
                "shipment_height": "4",
                "shipping_method": "Expedited",
                "shipment_status": "Received",
                "street_address": "ignored"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(1));

        let (_, parcel) = send(&app, Method::GET, &uri, None).await;
        assert!(parcel["received_date"].is_string());
        assert_eq!(parcel["shipment_status"], json!("Received"));
        assert_eq!(parcel["shipment_weight"], json!("1"));
        assert_eq!(parcel["shipment_length"], json!("2"));
        assert_eq!(parcel["shipping_method"], json!("Expedited"));
        assert_eq!(parcel["street_address"], json!("1 Main St"));
    }

    #[tokio::test]
    async fn receive_unknown_barcode_returns_zero() {
        let (_dir, app) = parcels_app();

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/parcels/f34c6658-818b-11e8-adc0-fa7ae01bbebc",
            Some(json!({ "shipment_weight": "1" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(0));
    }

    #[tokio::test]
    async fn deleting_twice_reports_zero_the_second_time() {
        let (_dir, app) = parcels_app();
        let barcode = create_parcel(&app).await;
        let uri = format!("/api/v1/parcels/{barcode}");

        let (_, first) = send(&app, Method::DELETE, &uri, None).await;
        let (status, second) = send(&app, Method::DELETE, &uri, None).await;

        assert_eq!(first, json!({ "changes": 1 }));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second, json!({ "changes": 0 }));
    }

    #[tokio::test]
    async fn unknown_barcode_reads_as_empty_object() {
        let (_dir, app) = parcels_app();

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/v1/parcels/f34c6658-818b-11e8-adc0-fa7ae01bbebc",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn missing_required_address_is_a_storage_error() {
        let (_dir, app) = parcels_app();
        let mut payload = intake_payload();
        payload.as_object_mut().unwrap().remove("street_address");

        let (status, body) = send(&app, Method::POST, "/api/v1/parcels", Some(payload)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "code": 500, "message": "Internal server error" }));
        assert_eq!(parcel_count(&app).await, 0);
    }

    #[tokio::test]
    async fn create_read_delete_scenario() {
        let (_dir, app) = parcels_app();

        let barcode = create_parcel(&app).await;
        let uri = format!("/api/v1/parcels/{barcode}");

        let (status, parcel) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parcel["street_address"], json!("1 Main St"));
        assert_eq!(parcel["barcode"], json!(barcode));

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, parcel) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parcel, json!({}));
    }

    #[tokio::test]
    async fn numeric_fields_are_stored_as_text() {
        let (_dir, app) = parcels_app();
        let mut payload = intake_payload();
        payload["postal_code"] = json!(12345);
        payload["user_id"] = json!(42);

        let (status, body) = send(&app, Method::POST, "/api/v1/parcels", Some(payload)).await;
        assert_eq!(status, StatusCode::OK);
        let barcode = body.as_str().unwrap().to_string();

        let uri = format!("/api/v1/parcels/{barcode}");
        let (_, parcel) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(parcel["postal_code"], json!("12345"));
        assert_eq!(parcel["user_id"], json!("42"));
    }

    #[tokio::test]
    async fn malformed_body_gets_the_generic_error() {
        let (_dir, app) = parcels_app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/parcels")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{bad"))
            .unwrap();

        let (status, body) = send_request(&app, request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "code": 500, "message": "Internal server error" }));
        assert_eq!(parcel_count(&app).await, 0);
    }

    #[tokio::test]
    async fn receive_without_a_body_marks_the_parcel_received() {
        let (_dir, app) = parcels_app();
        let barcode = create_parcel(&app).await;
        let uri = format!("/api/v1/parcels/{barcode}");
        let request = Request::builder()
            .method(Method::PUT)
            .uri(&uri)
            .body(Body::empty())
            .unwrap();

        let (status, body) = send_request(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(1));

        let (_, parcel) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(parcel["shipment_status"], json!("Received"));
        assert!(parcel["received_date"].is_string());
    }
}
