use crate::domain::faq::group_by_category;
use crate::domain::Faq;
use crate::session::Role;
use crate::templates::{components::error_notice, desktop_layout};
use maud::{html, Markup};

pub struct FaqVm<'a> {
    pub faqs: &'a [Faq],
    /// Opened FAQ, from `?id=`.
    pub selected: Option<&'a Faq>,
    /// Category narrowed to, from `?category=`.
    pub category: Option<&'a str>,
    pub error: Option<String>,
    pub role: Role,
}

pub fn agent_faqs_page(vm: &FaqVm<'_>) -> Markup {
    let groups = group_by_category(vm.faqs);

    desktop_layout(
        "Agent FAQs",
        vm.role,
        html! {
            main class="container faqs" {
                h1 { "Agent FAQs" }

                @if let Some(err) = &vm.error {
                    (error_notice(&format!("We couldn't load the FAQs: {err}")))
                }

                @if let Some(faq) = vm.selected {
                    article class="faq-detail" id=(format!("faq-{}", faq.id)) {
                        p class="faq-category" { (faq.category) }
                        h2 { (faq.question) }
                        div class="faq-answer" { (faq.answer) }
                        p { a href="/agent/faqs" { "← All questions" } }
                    }
                } @else {
                    nav class="faq-categories" {
                        a href="/agent/faqs" class=[vm.category.is_none().then_some("active")] { "All" }
                        @for (cat, _) in &groups {
                            a href=(format!("/agent/faqs?category={}", url_escape(cat)))
                              class=[vm.category.is_some_and(|c| c.eq_ignore_ascii_case(cat)).then_some("active")]
                            { (cat) }
                        }
                    }

                    @if vm.faqs.is_empty() && vm.error.is_none() {
                        p { "No FAQs have been published yet." }
                    }

                    @for (cat, entries) in &groups {
                        @if vm.category.map_or(true, |c| c.eq_ignore_ascii_case(cat)) {
                            section class="faq-group" {
                                h2 { (cat) }
                                ul {
                                    @for faq in entries {
                                        li {
                                            a href=(format!("/agent/faqs?id={}", url_escape(&faq.id))) { (faq.question) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn url_escape(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}
