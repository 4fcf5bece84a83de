use crate::domain::forms::ContactMessage;
use crate::session::Role;
use crate::templates::{
    components::{error_notice, success_notice},
    desktop_layout,
};
use maud::{html, Markup};

pub struct ContactVm {
    /// Values to put back into the form.
    pub form: ContactMessage,
    pub error: Option<String>,
    pub sent: bool,
    pub role: Role,
}

pub fn contact_page(vm: &ContactVm) -> Markup {
    desktop_layout(
        "Contact",
        vm.role,
        html! {
            main class="container" {
                h1 { "Contact us" }

                @if vm.sent {
                    (success_notice("Thank you! An agent will get back to you shortly."))
                } @else {
                    @if let Some(err) = &vm.error {
                        (error_notice(err))
                    }

                    form method="post" action="/contact" class="contact-form" {
                        label for="name" { "Name" }
                        input type="text" id="name" name="name" value=(vm.form.name) required;

                        label for="email" { "Email" }
                        input type="email" id="email" name="email" value=(vm.form.email) required;

                        label for="phone" { "Phone (optional)" }
                        input type="tel" id="phone" name="phone" value=(vm.form.phone);

                        label for="message" { "Message" }
                        textarea id="message" name="message" rows="6" required { (vm.form.message) }

                        button type="submit" class="primary" { "Send message" }
                    }
                }
            }
        },
    )
}
