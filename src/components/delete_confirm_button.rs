//! Delete Confirm Button Component
//!
//! Inline delete confirmation: nothing is deleted until the user confirms.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a "Delete" button initially. When clicked, shows `prompt` with
/// Delete/Cancel buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `prompt` - Question shown while waiting for confirmation
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirming.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{move || prompt.get()}</span>
                <button
                    type="button"
                    class="danger confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Delete"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(false);
                    }
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}

/// Prompt text for deleting a record; `title` is None when unknown
pub fn delete_prompt(title: Option<&str>) -> String {
    match title {
        Some(t) if !t.is_empty() => format!("Delete \"{}\"? This cannot be undone.", t),
        _ => "Delete this record? This cannot be undone.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_prompt() {
        assert_eq!(delete_prompt(Some("Dune")), "Delete \"Dune\"? This cannot be undone.");
        assert_eq!(delete_prompt(None), "Delete this record? This cannot be undone.");
        assert_eq!(delete_prompt(Some("")), "Delete this record? This cannot be undone.");
    }
}
