//! HTTP boundary tests against the axum router

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use pettravel::{Status, TravelPlan, api, config::ServerConfig, web};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn post_json(uri: &str, payload: Value) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = api::router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn new_york_form(weight_kg: f64) -> Value {
    json!({
        "species": "Perro",
        "destination": "Estados Unidos",
        "arrivalAirport": "Nueva York",
        "weightKg": weight_kg,
        "birthDate": "2024-01-01",
        "vaccinationDate": "2024-06-01",
        "bloodCollectionDate": "2024-07-15",
        "travelDate": "2025-01-10"
    })
}

#[tokio::test]
async fn options_list_form_choices() {
    let request = Request::builder()
        .uri("/options")
        .body(Body::empty())
        .unwrap();
    let response = api::router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let options: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(options["species"], json!(["Perro", "Gato"]));
    assert_eq!(options["destinations"].as_array().unwrap().len(), 6);
    assert_eq!(options["airports"][0], "N/A");
    assert!(options["airports"]
        .as_array()
        .unwrap()
        .contains(&json!("Nueva York")));
}

#[tokio::test]
async fn plan_for_heavy_dog_via_new_york() {
    let (status, body) = post_json("/plan", new_york_form(10.0)).await;
    assert_eq!(status, StatusCode::OK);

    let plan: TravelPlan = serde_json::from_str(&body).unwrap();
    assert_eq!(plan.airport_rules.len(), 2);
    assert_eq!(plan.airport_rules[1].status, Status::Warning);
    assert_eq!(plan.documentation.len(), 4);
}

#[tokio::test]
async fn plan_json_uses_camel_case_sections() {
    let (_, body) = post_json("/plan", new_york_form(8.0)).await;
    let value: Value = serde_json::from_str(&body).unwrap();

    for key in [
        "validations",
        "travelWindows",
        "documentation",
        "antiparasiticTreatment",
        "airportRules",
    ] {
        assert!(value[key].is_array(), "missing {key}");
    }
    assert_eq!(value["airportRules"][0]["status"], "INFO");
}

#[tokio::test]
async fn incomplete_form_returns_empty_plan() {
    let (status, body) = post_json(
        "/plan",
        json!({ "species": "Gato", "destination": "Malta", "travelDate": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let plan: TravelPlan = serde_json::from_str(&body).unwrap();
    assert_eq!(plan, TravelPlan::default());
}

#[tokio::test]
async fn invalid_date_is_bad_request() {
    let mut form = new_york_form(8.0);
    form["travelDate"] = json!("next week");

    let (status, body) = post_json("/plan", form).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_str(&body).unwrap();
    assert!(error["error"].as_str().unwrap().contains("travelDate"));
}

#[tokio::test]
async fn negative_weight_is_bad_request() {
    let (status, _) = post_json("/plan", new_york_form(-3.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mistyped_weight_is_bad_request() {
    let mut form = new_york_form(8.0);
    form["weightKg"] = json!("10");

    for uri in ["/plan", "/plan/text"] {
        let (status, body) = post_json(uri, form.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");

        let error: Value = serde_json::from_str(&body).unwrap();
        assert!(error["error"].is_string(), "{uri}: {body}");
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/plan")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"species\": "))
        .unwrap();

    let response = api::router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(error["error"].is_string());
}

#[tokio::test]
async fn plan_text_rendering() {
    let (status, body) = post_json("/plan/text", new_york_form(10.0)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("Validaciones\n"));
    assert!(body.contains("⚠️ Entre el 15 de diciembre y el 15 de abril"));
}

#[tokio::test]
async fn app_nests_api_and_limits_body_size() {
    let config = ServerConfig {
        max_body_bytes: 1024,
        ..ServerConfig::default()
    };

    let request = Request::builder()
        .uri("/api/options")
        .body(Body::empty())
        .unwrap();
    let response = web::app(&config).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let oversized = json!({ "species": "x".repeat(4096) });
    let request = Request::builder()
        .method("POST")
        .uri("/api/plan")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(oversized.to_string()))
        .unwrap();
    let response = web::app(&config).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
