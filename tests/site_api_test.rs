//! End-to-end flows against a real Postgres. Needs DATABASE_URL; without it
//! the test skips so the rest of the suite stays runnable anywhere.

use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;
use uuid::Uuid;

async fn json_body(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), 10 * 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, token: Option<&str>, body: &JsonValue) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let body = json!({ "username": username, "password": password });
    let resp = app
        .clone()
        .oneshot(send_json("POST", "/api/auth/login", None, &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    json_body(resp).await["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn admin_and_public_flows_end_to_end() {
    dotenvy::dotenv().ok();
    if env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL not set, skipping site_api_test");
        return;
    }

    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("JWT_SECRET", "test_secret_key");
    env::set_var("JWT_TTL_HOURS", "24");
    env::set_var("ADMIN_USERNAME", "admin");
    env::set_var("ADMIN_PASSWORD", "admin123");
    env::set_var("PUBLIC_RPS", "1000");
    env::set_var("ADMIN_RPS", "1000");
    sunrobotics_backend::config::init_config().expect("init config");

    let pool = sunrobotics_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    let state = sunrobotics_backend::AppState::new(pool);
    state
        .auth_service
        .ensure_admin_user("admin", "admin123")
        .await
        .expect("seed admin");
    let app = sunrobotics_backend::app_router(state, 1000, 1000);

    // Login; a bad password stays out.
    let resp = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/auth/login",
            None,
            &json!({ "username": "admin", "password": "wrong" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let token = login(&app, "admin", "admin123").await;

    // Unique marker so reruns against a persistent database stay clean.
    let run = Uuid::new_v4().simple().to_string();

    // --- Jobs: one active, one inactive ---
    let active_job = json!({
        "title": format!("Robotics Engineer {}", run),
        "department": "Engineering",
        "location": "Remote",
        "type": "Full-time",
        "description": "Build robot control software.",
        "requirements": "Rust, ROS, 3+ years",
        "active": true
    });
    let resp = app
        .clone()
        .oneshot(send_json("POST", "/api/admin/jobs", Some(&token), &active_job))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let active_job = json_body(resp).await;
    let active_id = active_job["id"].as_str().unwrap().to_string();

    let inactive_job = json!({
        "title": format!("Archived Role {}", run),
        "department": "Engineering",
        "location": "On-site",
        "type": "Full-time",
        "description": "No longer hiring.",
        "requirements": "n/a",
        "active": false
    });
    let resp = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/admin/jobs",
            Some(&token),
            &inactive_job,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let inactive_id = json_body(resp).await["id"].as_str().unwrap().to_string();

    // Public listing excludes the inactive job; admin listing has both.
    let resp = app.clone().oneshot(get("/api/jobs", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let public_jobs = json_body(resp).await;
    let public_ids: Vec<&str> = public_jobs
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_str().unwrap())
        .collect();
    assert!(public_ids.contains(&active_id.as_str()));
    assert!(!public_ids.contains(&inactive_id.as_str()));

    let resp = app
        .clone()
        .oneshot(get("/api/admin/jobs", Some(&token)))
        .await
        .unwrap();
    let admin_jobs = json_body(resp).await;
    let admin_ids: Vec<&str> = admin_jobs
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_str().unwrap())
        .collect();
    assert!(admin_ids.contains(&active_id.as_str()));
    assert!(admin_ids.contains(&inactive_id.as_str()));

    // Detail fetch works regardless of the active flag.
    let resp = app
        .clone()
        .oneshot(get(&format!("/api/jobs/{}", inactive_id), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // --- Application flow ---
    let applicant_email = format!("ada+{}@example.com", run);
    let application = json!({
        "jobId": active_id,
        "fullName": "Ada Lovelace",
        "email": applicant_email,
        "phone": "+1 555 0100",
        "resumeUrl": "https://example.com/ada.pdf",
        "coverLetter": "I build engines."
    });
    let resp = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/applications/apply",
            None,
            &application,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Applying to a job that does not exist is a 404.
    let resp = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/applications/apply",
            None,
            &json!({
                "jobId": Uuid::new_v4(),
                "fullName": "Nobody",
                "email": "nobody@example.com"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .clone()
        .oneshot(get("/api/admin/applications", Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let applications = json_body(resp).await;
    let mine: Vec<&JsonValue> = applications
        .as_array()
        .unwrap()
        .iter()
        .filter(|a| a["email"].as_str() == Some(applicant_email.as_str()))
        .collect();
    assert_eq!(mine.len(), 1, "exactly one application for this submit");
    assert_eq!(mine[0]["status"], "NEW");
    assert_eq!(mine[0]["job"]["id"].as_str().unwrap(), active_id);
    let application_id = mine[0]["id"].as_str().unwrap().to_string();

    // Status moves through the fixed vocabulary; anything else is a 400.
    let resp = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            &format!("/api/admin/applications/{}/status", application_id),
            Some(&token),
            &json!({ "status": "REVIEWING" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["status"], "REVIEWING");

    let resp = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            &format!("/api/admin/applications/{}/status", application_id),
            Some(&token),
            &json!({ "status": "SHORTLISTED" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // --- Contact messages ---
    let sender_email = format!("visitor+{}@example.com", run);
    let resp = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/contact",
            None,
            &json!({
                "name": "Visitor",
                "email": sender_email,
                "subject": "Partnership",
                "message": "We would like to talk."
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(get("/api/admin/messages", Some(&token)))
        .await
        .unwrap();
    let messages = json_body(resp).await;
    let msg = messages
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["email"].as_str() == Some(sender_email.as_str()))
        .expect("message listed")
        .clone();
    assert_eq!(msg["read"], false);
    let message_id = msg["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            &format!("/api/admin/messages/{}/read", message_id),
            Some(&token),
            &json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(get("/api/admin/messages", Some(&token)))
        .await
        .unwrap();
    let messages = json_body(resp).await;
    let msg = messages
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["id"].as_str() == Some(message_id.as_str()))
        .expect("message still listed");
    assert_eq!(msg["read"], true);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/admin/messages/{}", message_id))
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // --- Blogs ---
    let resp = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/admin/blogs",
            Some(&token),
            &json!({
                "title": format!("Why robots weld better {}", run),
                "excerpt": "A look at precision welding.",
                "content": "<p>Long form content.</p>",
                "category": "Robotics",
                "author": "Sun Robotics",
                "readTime": "5 min read"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let blog_id = json_body(resp).await["id"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(get(&format!("/api/blogs/{}", blog_id), None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/admin/blogs/{}", blog_id))
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.clone().oneshot(get("/api/blogs", None)).await.unwrap();
    let blogs = json_body(resp).await;
    assert!(blogs
        .as_array()
        .unwrap()
        .iter()
        .all(|b| b["id"].as_str() != Some(blog_id.as_str())));

    // --- Dashboard sanity ---
    let resp = app
        .clone()
        .oneshot(get("/api/admin/dashboard", Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let stats = json_body(resp).await;
    assert!(stats["totalJobs"].as_i64().unwrap() >= 2);
    assert!(stats["totalApplications"].as_i64().unwrap() >= 1);

    // Cleanup: deleting the jobs cascades to the application rows.
    for id in [&active_id, &inactive_id] {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/admin/jobs/{}", id))
                    .header("authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
