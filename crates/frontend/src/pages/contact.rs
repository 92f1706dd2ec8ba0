//! Public contact form, posted to `POST /contact`

use crate::shared::components::PageHeader;
use crate::shared::http;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use mep_contracts::domain::a010_contact::ContactForm;
use mep_contracts::shared::admin_crud::AdminCrud;
use thaw::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    let toast = use_toast();
    let crud = RwSignal::new({
        let mut crud = AdminCrud::<ContactForm>::new();
        crud.open_create();
        crud
    });
    let sending = Signal::derive(move || crud.with(|c| c.is_submitting()));

    let error_for = move |field: &'static str| {
        move || {
            crud.with(|c| c.errors().get(field).map(str::to_string))
                .map(|e| view! { <div class="field-error">{e}</div> })
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut call = None;
        crud.update(|c| call = c.submit());
        let Some(call) = call else {
            return;
        };
        spawn_local(async move {
            match http::execute(&call).await {
                Ok(()) => {
                    crud.update(|c| {
                        c.close();
                        c.open_create();
                    });
                    toast.success("Thank you, your message has been sent");
                }
                Err(e) => {
                    crud.update(|c| c.submit_failed());
                    toast.error(e.user_message());
                }
            }
        });
    };

    view! {
        <PageFrame page_id="contact--page" category=PageCategory::Content>
            <PageHeader title="Contact us" subtitle="Questions, listings and corrections are all welcome">""</PageHeader>
            <Card class="contact-card">
                <form class="contact-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="contact-name">"Name"</label>
                        <input
                            id="contact-name"
                            type="text"
                            prop:value=move || crud.with(|c| c.form().name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                crud.update(|c| c.edit_form(|f| f.name = value));
                            }
                        />
                        {error_for("name")}
                    </div>
                    <div class="form-group">
                        <label for="contact-email">"Email"</label>
                        <input
                            id="contact-email"
                            type="email"
                            prop:value=move || crud.with(|c| c.form().email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                crud.update(|c| c.edit_form(|f| f.email = value));
                            }
                        />
                        {error_for("email")}
                    </div>
                    <div class="form-group">
                        <label for="contact-phone">"Phone (optional)"</label>
                        <input
                            id="contact-phone"
                            type="tel"
                            prop:value=move || crud.with(|c| c.form().phone.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                crud.update(|c| c.edit_form(|f| f.phone = value));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="contact-subject">"Subject (optional)"</label>
                        <input
                            id="contact-subject"
                            type="text"
                            prop:value=move || crud.with(|c| c.form().subject.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                crud.update(|c| c.edit_form(|f| f.subject = value));
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="contact-message">"Message"</label>
                        <textarea
                            id="contact-message"
                            rows="6"
                            prop:value=move || crud.with(|c| c.form().message.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                crud.update(|c| c.edit_form(|f| f.message = value));
                            }
                        />
                        {error_for("message")}
                    </div>
                    <button type="submit" class="button button--primary" disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Send message" }}
                    </button>
                </form>
            </Card>
        </PageFrame>
    }
}
