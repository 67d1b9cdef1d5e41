use maud::{html, Markup};

/// Validation problems rendered above a form. Nothing is shown for an
/// empty list.
pub fn error_alert(errors: &[String]) -> Markup {
    html! {
        @if !errors.is_empty() {
            div class="alert error" role="alert" {
                ul {
                    @for error in errors {
                        li { (error) }
                    }
                }
            }
        }
    }
}
