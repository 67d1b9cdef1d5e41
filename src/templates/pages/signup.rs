use maud::{html, Markup};

use crate::auth::signup::SignupForm;
use crate::templates::components::error_alert;
use crate::templates::desktop_layout;

/// Registration form. On a failed submit it re-renders with the problem
/// list on top and everything but the passwords filled back in.
pub fn signup_page(form: &SignupForm, errors: &[String]) -> Markup {
    desktop_layout(
        "Sign Up",
        None,
        html! {
            main class="container narrow" {
                h1 { "Sign Up" }

                (error_alert(errors))

                form action="/signup" method="post" {
                    div class="field-row" {
                        label { "First Name"
                            input type="text" name="first_name" value=(form.first_name) required;
                        }
                        label { "Last Name"
                            input type="text" name="last_name" value=(form.last_name) required;
                        }
                    }
                    label { "Username"
                        input type="text" name="handle" value=(form.handle) required;
                    }
                    label { "Email"
                        input type="email" name="email" value=(form.email) required;
                    }
                    label { "Password"
                        input type="password" name="password" required;
                    }
                    label { "Confirm Password"
                        input type="password" name="confirm_password" required;
                    }
                    button type="submit" { "Sign Up" }
                }

                p { "Already have an account? " a href="/login" { "Sign in" } }
            }
        },
    )
}
