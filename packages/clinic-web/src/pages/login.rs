//! Staff login page

use clinic_client::FailureMessages;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::nav::dashboard_for;

/// Staff login page
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);

    // Redirect if already authenticated
    use_effect(move || {
        if let Some(role) = auth.role() {
            navigator.replace(dashboard_for(role));
        }
    });

    let handle_submit = move |_| {
        let address = email().trim().to_string();
        let secret = password();

        if address.is_empty() || secret.is_empty() {
            error.set(Some("Please enter your email and password".to_string()));
            return;
        }

        spawn(async move {
            is_pending.set(true);
            error.set(None);

            match auth.sign_in(&address, &secret).await {
                Ok(role) => {
                    navigator.push(dashboard_for(role));
                }
                Err(e) => {
                    tracing::warn!("Sign-in failed: {e}");
                    error.set(Some(e.display_message(&login_messages())));
                }
            }

            is_pending.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gray-100 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",

                div {
                    class: "mb-6 text-center",
                    h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Staff Login" }
                    p { class: "text-gray-600 text-sm", "Clinic Dashboard" }
                }

                if let Some(err) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-800 rounded text-sm",
                        "{err}"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "mb-4",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Email"
                        }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "you@clinic.example",
                            autocomplete: "username",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-teal-500",
                            disabled: is_pending()
                        }
                    }
                    div {
                        class: "mb-6",
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Password"
                        }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                            autocomplete: "current-password",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-teal-500",
                            disabled: is_pending()
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "w-full bg-teal-700 text-white py-2 px-4 rounded-md hover:bg-teal-800 focus:outline-none focus:ring-2 focus:ring-teal-500 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_pending(),
                        if is_pending() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}

fn login_messages() -> FailureMessages {
    FailureMessages {
        rejected: "Invalid email or password".to_string(),
        fallback: "Unable to sign in right now. Please try again.".to_string(),
        missing_key: String::new(),
    }
}
