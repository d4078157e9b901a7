use drive_model::{LoginForm, RegisterForm};
use drive_ui::prelude::*;
use leptos::*;

use crate::{actions, model::ToastLevel, runtime_context::use_drive_runtime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthTab {
    Login,
    Register,
}

fn login_form(email: &str, password: &str) -> Option<LoginForm> {
    let email = email.trim();
    (!email.is_empty() && !password.is_empty()).then(|| LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    })
}

fn register_form(email: &str, full_name: &str, password: &str) -> Option<RegisterForm> {
    let email = email.trim();
    let full_name = full_name.trim();
    (!email.is_empty() && !full_name.is_empty() && !password.is_empty()).then(|| RegisterForm {
        email: email.to_string(),
        full_name: full_name.to_string(),
        password: password.to_string(),
    })
}

fn bind(signal: RwSignal<String>) -> Callback<String> {
    Callback::new(move |value| signal.set(value))
}

#[component]
/// Login and registration forms behind two tabs.
pub(super) fn AuthPanel() -> impl IntoView {
    let runtime = use_drive_runtime();
    let tab = create_rw_signal(AuthTab::Login);
    let email = create_rw_signal(String::new());
    let full_name = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let pending = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let (email, full_name, password) = (
            email.get_untracked(),
            full_name.get_untracked(),
            password.get_untracked(),
        );
        match tab.get_untracked() {
            AuthTab::Login => {
                let Some(form) = login_form(&email, &password) else {
                    runtime.notify(ToastLevel::Warning, "Enter your email and password");
                    return;
                };
                pending.set(true);
                runtime.spawn_action(move |api, host| async move {
                    actions::login(api.as_ref(), &host, &form).await;
                    pending.set(false);
                });
            }
            AuthTab::Register => {
                let Some(form) = register_form(&email, &full_name, &password) else {
                    runtime.notify(ToastLevel::Warning, "Fill in every field to register");
                    return;
                };
                pending.set(true);
                runtime.spawn_action(move |api, host| async move {
                    actions::register(api.as_ref(), &host, &form).await;
                    pending.set(false);
                });
            }
        }
    };

    let is_register = move || tab.get() == AuthTab::Register;

    view! {
        <main class="drive-auth">
            <Card layout_class="drive-auth-card" aria_label="Sign in">
                <Stack align=LayoutAlign::Stretch>
                    <Cluster align=LayoutAlign::Center>
                        <Icon icon=IconName::Cloud size=IconSize::Xl />
                        <Heading level=1>"CloudDrive"</Heading>
                    </Cluster>
                    <TabList aria_label="Account">
                        <Tab
                            selected=Signal::derive(move || tab.get() == AuthTab::Login)
                            on_click=Callback::new(move |_| tab.set(AuthTab::Login))
                        >
                            "Log in"
                        </Tab>
                        <Tab
                            selected=Signal::derive(is_register)
                            on_click=Callback::new(move |_| tab.set(AuthTab::Register))
                        >
                            "Register"
                        </Tab>
                    </TabList>
                    <form class="drive-auth-form" on:submit=on_submit>
                        <Stack>
                            <TextField
                                name="email"
                                input_type="email"
                                autocomplete="email"
                                placeholder="Email"
                                aria_label="Email"
                                required=true
                                value=email
                                on_input=bind(email)
                            />
                            <Show when=is_register>
                                <TextField
                                    name="fullName"
                                    autocomplete="name"
                                    placeholder="Full name"
                                    aria_label="Full name"
                                    required=true
                                    value=full_name
                                    on_input=bind(full_name)
                                />
                            </Show>
                            <TextField
                                name="password"
                                input_type="password"
                                autocomplete="current-password"
                                placeholder="Password"
                                aria_label="Password"
                                required=true
                                value=password
                                on_input=bind(password)
                            />
                            <Button
                                variant=ButtonVariant::Primary
                                button_type="submit"
                                disabled=Signal::derive(move || pending.get())
                            >
                                {move || if is_register() { "Create account" } else { "Log in" }}
                            </Button>
                        </Stack>
                    </form>
                    <Text tone=TextTone::Secondary>
                        {move || {
                            if is_register() {
                                "Already registered? Switch to Log in."
                            } else {
                                "New here? Switch to Register."
                            }
                        }}
                    </Text>
                </Stack>
            </Card>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn login_form_trims_email_and_keeps_password() {
        assert_eq!(
            login_form("  ann@example.com ", " secret "),
            Some(LoginForm {
                email: "ann@example.com".to_string(),
                password: " secret ".to_string(),
            })
        );
        assert_eq!(login_form("   ", "secret"), None);
        assert_eq!(login_form("ann@example.com", ""), None);
    }

    #[test]
    fn register_form_requires_every_field() {
        assert_eq!(register_form("ann@example.com", " ", "secret"), None);
        assert_eq!(
            register_form("ann@example.com", " Ann ", "secret"),
            Some(RegisterForm {
                email: "ann@example.com".to_string(),
                full_name: "Ann".to_string(),
                password: "secret".to_string(),
            })
        );
    }
}
