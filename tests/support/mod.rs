use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use lag::config::Config;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub type RecordedQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Local stand-in for the Brønnøysund endpoints
pub struct FakeRegistry {
    pub addr: SocketAddr,
    pub queries: RecordedQueries,
}

impl FakeRegistry {
    pub async fn start() -> Self {
        let queries: RecordedQueries = Arc::default();

        let app = Router::new()
            .route("/enheter", get(enheter))
            .route("/frivillige-organisasjoner", get(frivillige))
            .route("/icnpo-kategorier", get(icnpo))
            .route("/broken", get(broken))
            .with_state(queries.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, queries }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}/{}", self.addr, path)
    }

    pub fn config(&self) -> Config {
        Config {
            enhetsregisteret_url: self.url("enheter"),
            frivillighetsregisteret_url: self.url("frivillige-organisasjoner"),
            icnpo_url: self.url("icnpo-kategorier"),
            ..Config::default()
        }
    }

    pub fn last_query(&self) -> HashMap<String, String> {
        self.queries
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request reached the fake registry")
    }
}

async fn enheter(
    State(queries): State<RecordedQueries>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let page: u32 = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(0);
    queries.lock().unwrap().push(params);

    Json(json!({
        "_embedded": {
            "enheter": [
                {
                    "organisasjonsnummer": "971234567",
                    "navn": "BAMBLE KOR",
                    "organisasjonsform": { "kode": "FLI" },
                    "forretningsadresse": {
                        "adresse": ["Storgata 1"],
                        "postnummer": "3970",
                        "poststed": "LANGESUND"
                    },
                    "stiftelsesdato": "1923-05-17",
                    "konkurs": false,
                    "underAvvikling": false,
                    "underTvangsavviklingEllerTvangsopplosning": false
                },
                {
                    "organisasjonsnummer": "971234568",
                    "navn": "KORPSET I KONKURS",
                    "organisasjonsform": { "kode": "FLI" },
                    "konkurs": true,
                    "underAvvikling": false,
                    "underTvangsavviklingEllerTvangsopplosning": false
                }
            ]
        },
        "page": { "size": 2, "totalElements": 5, "totalPages": 3, "number": page }
    }))
}

async fn frivillige(
    State(queries): State<RecordedQueries>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    queries.lock().unwrap().push(params);

    Json(json!({
        "_embedded": {
            "organisasjoner": [
                {
                    "organisasjonsnummer": "998877665",
                    "navn": "Stathelle Speidergruppe",
                    "icnpoKategori": { "kode": "7.3", "navn": "Barne- og ungdomsorganisasjoner" },
                    "registreringsstatus": "Registrert"
                }
            ]
        }
    }))
}

async fn icnpo() -> Json<Value> {
    Json(json!([
        { "kode": "1.3", "navn": "Kunst og kultur" },
        { "kode": "7.3", "navn": "Barne- og ungdomsorganisasjoner" }
    ]))
}

async fn broken() -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, "maintenance").into_response()
}
