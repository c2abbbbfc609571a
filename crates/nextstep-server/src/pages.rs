//! HTML page shells.
//!
//! The real UI lives in the browser; these handlers render minimal shells
//! and hand the client its Firebase configuration as a JSON script tag.
//! No server-side logic beyond string assembly.

use axum::extract::State;
use axum::response::Html;

use crate::config::FirebaseConfig;
use crate::server::AppState;

fn render(title: &str, body: &str, firebase: Option<&FirebaseConfig>) -> String {
    let config_script = match firebase {
        Some(config) => format!(
            "<script>window.__FIREBASE_CONFIG__ = {};</script>",
            serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string())
        ),
        None => String::new(),
    };

    format!(
        "<!DOCTYPE html>\
<html><head><meta charset=\"utf-8\"><title>{title}</title>{config_script}</head>\
<body>\
<h1>{title}</h1>\
{body}\
</body></html>"
    )
}

pub async fn home() -> Html<String> {
    Html(render(
        "NextStep",
        "<p>Personalized career roadmaps, powered by AI.</p>\
         <p><a href=\"/login\">Log in</a> | <a href=\"/form\">Build your roadmap</a></p>",
        None,
    ))
}

pub async fn login(State(state): State<AppState>) -> Html<String> {
    Html(render(
        "NextStep - Login",
        "<div id=\"login\"></div>",
        Some(&state.firebase),
    ))
}

pub async fn form(State(state): State<AppState>) -> Html<String> {
    Html(render(
        "NextStep - Your Profile",
        "<div id=\"profile-form\"></div>",
        Some(&state.firebase),
    ))
}

pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    Html(render(
        "NextStep - Dashboard",
        "<div id=\"dashboard\"></div>",
        Some(&state.firebase),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use nextstep_test_utils::CannedModel;

    use crate::config::FirebaseConfig;
    use crate::server::{AppState, build_router};

    fn test_state() -> AppState {
        AppState {
            model: Arc::new(CannedModel::new("{}")),
            firebase: FirebaseConfig {
                api_key: "fb-test-key".to_string(),
                project_id: "nextstep-test".to_string(),
                ..FirebaseConfig::default()
            },
        }
    }

    async fn get_page(uri: &str) -> (StatusCode, String, String) {
        let app = build_router(test_state());
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = resp.status();
        let content_type = resp
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let bytes = axum::body::to_bytes(resp.into_body(), 1_048_576)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn all_pages_return_html() {
        for uri in ["/", "/login", "/form", "/dashboard"] {
            let (status, content_type, _) = get_page(uri).await;
            assert_eq!(status, StatusCode::OK, "page {uri} should be OK");
            assert!(
                content_type.contains("text/html"),
                "page {uri} content-type should be text/html, got: {content_type}"
            );
        }
    }

    #[tokio::test]
    async fn login_page_embeds_firebase_config() {
        let (_, _, body) = get_page("/login").await;
        assert!(body.contains("__FIREBASE_CONFIG__"));
        assert!(body.contains("\"apiKey\":\"fb-test-key\""));
        assert!(body.contains("\"projectId\":\"nextstep-test\""));
    }

    #[tokio::test]
    async fn home_page_does_not_embed_firebase_config() {
        let (_, _, body) = get_page("/").await;
        assert!(!body.contains("__FIREBASE_CONFIG__"));
    }
}
