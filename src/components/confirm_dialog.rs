//! Modal yes/no confirmation.

use leptos::prelude::*;

/// How the operator closed the dialog. `Cancelled` is dropped silently by
/// callers and never becomes a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
}

#[component]
pub fn ConfirmDialog(message: Signal<String>, on_close: Callback<ConfirmOutcome>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(ConfirmOutcome::Cancelled)>
            <div class="dialog" role="dialog" on:click=move |ev| ev.stop_propagation()>
                <p class="dialog__message">{move || message.get()}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(ConfirmOutcome::Cancelled)>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_close.run(ConfirmOutcome::Confirmed)>
                        "Confirm"
                    </button>
                </div>
            </div>
        </div>
    }
}
