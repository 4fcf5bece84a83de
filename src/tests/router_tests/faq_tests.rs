use crate::domain::Faq;
use crate::tests::utils::{body_string, get, send, test_app, FakeBackend};

fn faqs() -> Vec<Faq> {
    let faq = |id: &str, q: &str, cat: &str| Faq {
        id: id.into(),
        question: q.into(),
        answer: format!("Answer to {q}"),
        category: cat.into(),
    };
    vec![
        faq("1", "How do I add a villa?", "Listings"),
        faq("2", "When are commissions paid?", "Payments"),
        faq("3", "Can I edit photos?", "Listings"),
    ]
}

#[test]
fn faqs_grouped_by_category() {
    let app = test_app(FakeBackend {
        faqs: faqs(),
        ..Default::default()
    });

    let body = body_string(send(&app, get("/agent/faqs")));
    let listings_at = body.find("<h2>Listings</h2>").unwrap();
    let payments_at = body.find("<h2>Payments</h2>").unwrap();
    assert!(listings_at < payments_at);
    assert!(body.contains("href=\"/agent/faqs?id=3\""));
}

#[test]
fn category_narrows_list() {
    let app = test_app(FakeBackend {
        faqs: faqs(),
        ..Default::default()
    });

    let body = body_string(send(&app, get("/agent/faqs?category=payments")));
    assert!(body.contains("When are commissions paid?"));
    assert!(!body.contains("How do I add a villa?"));
}

#[test]
fn faq_detail_view() {
    let app = test_app(FakeBackend {
        faqs: faqs(),
        ..Default::default()
    });

    let body = body_string(send(&app, get("/agent/faqs?id=2")));
    assert!(body.contains("id=\"faq-2\""));
    assert!(body.contains("Answer to When are commissions paid?"));
    assert!(!body.contains("Can I edit photos?"));
}

#[test]
fn faq_fetch_error_inline() {
    let app = test_app(FakeBackend {
        fail_status: Some(500),
        ..Default::default()
    });

    let resp = send(&app, get("/agent/faqs"));
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("We couldn't load the FAQs"));
}
