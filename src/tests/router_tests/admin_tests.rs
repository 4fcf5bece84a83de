use crate::domain::Subscriber;
use crate::tests::utils::{body_string, get, post_form, send, test_app, FakeBackend};
use chrono::{TimeZone, Utc};
use http::header::COOKIE;

fn subscribers() -> Vec<Subscriber> {
    vec![
        Subscriber {
            id: "1".into(),
            email: "first@example.com".into(),
            name: Some("First".into()),
            subscribed_at: Some(Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap()),
        },
        Subscriber {
            id: "2".into(),
            email: "second@example.com".into(),
            name: None,
            subscribed_at: None,
        },
    ]
}

#[test]
fn newsletter_page_lists_subscribers() {
    let app = test_app(FakeBackend {
        subscribers: subscribers(),
        ..Default::default()
    });

    let mut req = get("/admin/newsletter");
    req.headers_mut()
        .insert(COOKIE, "access_token=admintoken; user_role=admin".parse().unwrap());
    let resp = send(&app, req);
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("first@example.com"));
    assert!(body.contains("2026-05-01"));
    assert!(body.contains("Send to 2 subscribers"));
    // Admin nav link only shows for admins.
    assert!(body.contains("href=\"/admin/newsletter\""));
}

#[test]
fn broadcast_is_sent() {
    let backend = FakeBackend {
        subscribers: subscribers(),
        ..Default::default()
    };
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let body = body_string(send(
        &app,
        post_form("/admin/newsletter", "subject=Summer+offers&message=New+villas+in+Ibiza"),
    ));
    assert!(body.contains("Broadcast &quot;Summer offers&quot; sent.") || body.contains("Broadcast \"Summer offers\" sent."));

    let calls = calls.lock().unwrap();
    let (endpoint, payload) = &calls.posts[0];
    assert_eq!(endpoint, "newsletter/broadcast/");
    assert_eq!(payload["subject"], "Summer offers");
}

#[test]
fn broadcast_missing_subject_keeps_message() {
    let backend = FakeBackend::default();
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let body = body_string(send(&app, post_form("/admin/newsletter", "message=Draft+text")));
    assert!(body.contains("Subject is required"));
    assert!(body.contains("Draft text"));
    assert!(calls.lock().unwrap().posts.is_empty());
}

#[test]
fn agent_invite_is_sent() {
    let backend = FakeBackend::default();
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let body = body_string(send(
        &app,
        post_form("/admin/agents/invite", "name=Luis&email=luis%40villas.es"),
    ));
    assert!(body.contains("Invitation sent to luis@villas.es."));
    assert_eq!(calls.lock().unwrap().posts[0].0, "agents/invite/");
}

#[test]
fn subscribers_export_is_xlsx() {
    let app = test_app(FakeBackend {
        subscribers: subscribers(),
        ..Default::default()
    });

    let resp = send(&app, get("/admin/newsletter/subscribers.xlsx"));
    assert_eq!(resp.status(), 200);
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"newsletter_subscribers_"));
}

#[test]
fn subscribers_export_failure_renders_admin_page() {
    let app = test_app(FakeBackend {
        fail_status: Some(401),
        ..Default::default()
    });

    let resp = send(&app, get("/admin/newsletter/subscribers.xlsx"));
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().get("Content-Disposition").is_none());
    let body = body_string(resp);
    assert!(body.contains("status 401"));
    assert!(body.contains("action=\"/admin/newsletter\""));
}
