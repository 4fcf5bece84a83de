use crate::tests::utils::{body_string, get, post_form, send, test_app, FakeBackend};

#[test]
fn static_pages_render() {
    let app = test_app(FakeBackend::default());
    for (path, text) in [
        ("/about", "About us"),
        ("/privacy", "Privacy Policy"),
        ("/contact", "Contact us"),
    ] {
        let resp = send(&app, get(path));
        assert_eq!(resp.status(), 200, "{path}");
        assert!(body_string(resp).contains(text), "{path}");
    }
}

#[test]
fn contact_posts_json_to_api() {
    let backend = FakeBackend::default();
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let resp = send(
        &app,
        post_form(
            "/contact",
            "name=Ana&email=Ana%40Example.com&phone=%2B34+600&message=Is+it+free+in+May%3F",
        ),
    );
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Thank you!"));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.posts.len(), 1);
    let (endpoint, body) = &calls.posts[0];
    assert_eq!(endpoint, "contact/");
    assert_eq!(body["email"], "ana@example.com");
    assert_eq!(body["phone"], "+34 600");
    assert_eq!(body["message"], "Is it free in May?");
}

#[test]
fn contact_validation_keeps_input() {
    let backend = FakeBackend::default();
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let body = body_string(send(
        &app,
        post_form("/contact", "name=Ana&email=nope&message=Hello"),
    ));
    assert!(body.contains("&#39;nope&#39; is not a valid email address") || body.contains("'nope' is not a valid email address"));
    assert!(body.contains("value=\"Ana\""));
    assert!(calls.lock().unwrap().posts.is_empty());
}

#[test]
fn contact_api_error_is_inline() {
    let app = test_app(FakeBackend {
        fail_status: Some(400),
        ..Default::default()
    });

    let resp = send(
        &app,
        post_form("/contact", "name=Ana&email=a%40b.com&message=Hello"),
    );
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("status 400: backend down"));
    assert!(body.contains("Send message"));
}

#[test]
fn newsletter_signup_redirects() {
    let backend = FakeBackend::default();
    let calls = backend.calls.clone();
    let app = test_app(backend);

    let resp = send(&app, post_form("/newsletter/subscribe", "email=x%40y.com"));
    assert_eq!(resp.status(), 303);
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/?subscribed=1"
    );
    assert_eq!(calls.lock().unwrap().posts[0].0, "newsletter/subscribe/");

    let body = body_string(send(&app, get("/?subscribed=1")));
    assert!(body.contains("Thanks for subscribing"));
}

#[test]
fn newsletter_signup_bad_email() {
    let app = test_app(FakeBackend::default());
    let resp = send(&app, post_form("/newsletter/subscribe", "email="));
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Email is required"));
}
