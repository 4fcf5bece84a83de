use crate::domain::Subscriber;
use crate::session::Role;
use crate::templates::{
    components::{error_notice, success_notice},
    desktop_layout,
};
use maud::{html, Markup};

#[derive(Default)]
pub struct NewsletterVm {
    pub subscribers: Vec<Subscriber>,
    pub load_error: Option<String>,
    /// Outcome of the form that was just submitted, if any.
    pub sent: Option<String>,
    pub send_error: Option<String>,
    pub subject: String,
    pub message: String,
}

pub fn admin_newsletter_page(vm: &NewsletterVm, role: Role) -> Markup {
    desktop_layout(
        "Newsletter",
        role,
        html! {
            main class="container" {
                h1 { "Newsletter" }

                @if let Some(msg) = &vm.sent {
                    (success_notice(msg))
                }
                @if let Some(err) = &vm.send_error {
                    (error_notice(err))
                }

                div class="card" {
                    h3 { "Send a broadcast" }
                    form method="post" action="/admin/newsletter" {
                        label for="subject" { "Subject" }
                        input type="text" id="subject" name="subject" value=(vm.subject) required;

                        label for="message" { "Message" }
                        textarea id="message" name="message" rows="8" required { (vm.message) }

                        button type="submit" class="primary" {
                            "Send to " (vm.subscribers.len()) " subscribers"
                        }
                    }
                }

                div class="card" {
                    h3 { "Invite an agent" }
                    form method="post" action="/admin/agents/invite" style="display: flex; gap: 10px; align-items: end;" {
                        label { "Name" input type="text" name="name" required; }
                        label { "Email" input type="email" name="email" required; }
                        button type="submit" { "Send invite" }
                    }
                }

                div class="card" {
                    div style="display: flex; justify-content: space-between; align-items: center;" {
                        h3 { "Subscribers (" (vm.subscribers.len()) ")" }
                        a href="/admin/newsletter/subscribers.xlsx" { "Download .xlsx" }
                    }

                    @if let Some(err) = &vm.load_error {
                        (error_notice(&format!("We couldn't load subscribers: {err}")))
                    }

                    div style="overflow-x: auto;" {
                        table class="subscribers" style="width: 100%; border-collapse: collapse;" {
                            thead {
                                tr {
                                    th { "Email" }
                                    th { "Name" }
                                    th { "Subscribed" }
                                }
                            }
                            tbody {
                                @for sub in &vm.subscribers {
                                    tr {
                                        td { (sub.email) }
                                        td { (sub.name.as_deref().unwrap_or("—")) }
                                        td { (sub.subscribed_on()) }
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
