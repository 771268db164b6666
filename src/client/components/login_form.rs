use dioxus::prelude::*;

use crate::{
    client::{context::SessionContext, router::Route},
    model::session::Role,
};

/// Email, password and role form. Login failures are shown inline below the fields.
#[component]
pub fn LoginForm() -> Element {
    let context = use_context::<SessionContext>();
    let navigator = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        let store = context.store.clone();
        let (email, password, role) = (email(), password(), role());

        spawn(async move {
            submitting.set(true);
            error.set(None);

            let result = store.login(&email, &password, role).await;

            submitting.set(false);
            match result {
                Ok(session) => {
                    navigator.replace(Route::home_for(session.role));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx!(
        form {
            class: "flex flex-col gap-2 w-full max-w-sm",
            onsubmit: onsubmit,
            input {
                class: "input w-full",
                r#type: "email",
                placeholder: "Email",
                value: "{email}",
                oninput: move |event| email.set(event.value()),
            }
            input {
                class: "input w-full",
                r#type: "password",
                placeholder: "Password",
                value: "{password}",
                oninput: move |event| password.set(event.value()),
            }
            select {
                class: "select w-full",
                onchange: move |event| {
                    if let Ok(selected) = event.value().parse::<Role>() {
                        role.set(selected);
                    }
                },
                for choice in Role::ALL {
                    option {
                        value: choice.as_str(),
                        selected: choice == role(),
                        {choice.label()}
                    }
                }
            }
            if let Some(message) = error() {
                p { class: "text-error text-sm",
                    "{message}"
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: submitting(),
                "Login"
            }
        }
    )
}
