use drive_model::{ProfileUpdate, User};
use drive_ui::prelude::*;
use leptos::*;

use crate::{actions, runtime_context::use_drive_runtime};

fn initial(user: &User) -> String {
    user.full_name
        .trim()
        .chars()
        .next()
        .or_else(|| user.email.chars().next())
        .map(|first| first.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[component]
fn ProfileSummary(user: User) -> impl IntoView {
    let avatar = initial(&user);
    let User {
        id,
        email,
        full_name,
    } = user;

    view! {
        <Cluster align=LayoutAlign::Center layout_class="drive-profile-summary">
            <span class="drive-avatar" aria-hidden="true">{avatar}</span>
            <Stack gap=LayoutGap::Sm>
                <Heading level=2>{full_name}</Heading>
                <Text tone=TextTone::Secondary>{email}</Text>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {format!("ID: {id}")}
                </Text>
            </Stack>
        </Cluster>
    }
}

#[component]
/// Signed-in user's details, an update form, and logout.
pub(super) fn ProfilePanel() -> impl IntoView {
    let runtime = use_drive_runtime();
    let user = create_rw_signal(None::<User>);
    let full_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let saving = create_rw_signal(false);

    runtime.spawn_action(move |api, host| async move {
        if let Some(loaded) = actions::load_profile(api.as_ref(), &host).await {
            user.set(Some(loaded));
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let update = ProfileUpdate::from_inputs(
            &full_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        );
        saving.set(true);
        runtime.spawn_action(move |api, host| async move {
            if let Some(updated) = actions::update_profile(api.as_ref(), &host, &update).await {
                user.set(Some(updated));
                full_name.set(String::new());
                email.set(String::new());
                password.set(String::new());
            }
            saving.set(false);
        });
    };

    view! {
        <section class="drive-profile">
            <Heading level=1>"Profile"</Heading>
            <Card aria_label="Account">
                {move || match user.get() {
                    Some(user) => view! { <ProfileSummary user /> }.into_view(),
                    None => {
                        view! { <Text tone=TextTone::Secondary>"Loading profile..."</Text> }
                            .into_view()
                    }
                }}
            </Card>
            <Card aria_label="Update profile">
                <form class="drive-profile-form" on:submit=on_submit>
                    <Stack>
                        <Heading level=3>"Update profile"</Heading>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            "Leave a field empty to keep its current value."
                        </Text>
                        <TextField
                            name="fullName"
                            autocomplete="name"
                            placeholder="Full name"
                            aria_label="Full name"
                            value=full_name
                            on_input=Callback::new(move |value| full_name.set(value))
                        />
                        <TextField
                            name="email"
                            input_type="email"
                            autocomplete="email"
                            placeholder="Email"
                            aria_label="Email"
                            value=email
                            on_input=Callback::new(move |value| email.set(value))
                        />
                        <TextField
                            name="password"
                            input_type="password"
                            autocomplete="new-password"
                            placeholder="New password"
                            aria_label="New password"
                            value=password
                            on_input=Callback::new(move |value| password.set(value))
                        />
                        <Cluster>
                            <Button
                                variant=ButtonVariant::Primary
                                button_type="submit"
                                disabled=Signal::derive(move || saving.get())
                            >
                                "Save"
                            </Button>
                            <ConfirmButton
                                label="Log out".to_string()
                                prompt="Log out of CloudDrive?".to_string()
                                leading_icon=IconName::Logout
                                on_confirm=Callback::new(move |()| actions::logout(&runtime))
                            />
                        </Cluster>
                    </Stack>
                </form>
            </Card>
        </section>
    }
}
