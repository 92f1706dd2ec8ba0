use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Explicit yes/no question. Cancel, Escape and the overlay all cancel.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] confirm_label: Option<String>,
    /// Disables the buttons while the confirmed action runs
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());

    view! {
        <Modal title=title on_close=on_cancel class="modal--narrow">
            <p class="confirm-dialog__message">{message}</p>
            <div class="modal-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=busy
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    class="button--danger"
                    on_click=move |_| on_confirm.run(())
                    disabled=busy
                >
                    {confirm_label}
                </Button>
            </div>
        </Modal>
    }
}
