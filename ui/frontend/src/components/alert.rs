use leptos::*;
use map_common::{ALERT_MESSAGE, ALERT_SEVERITY};

#[component]
pub fn WarningBanner(visible: Signal<bool>) -> impl IntoView {
    let class = format!(
        "alert alert-{ALERT_SEVERITY} fixed bottom-4 left-1/2 -translate-x-1/2 px-4 py-3 rounded-lg shadow"
    );

    view! {
        <Show when=move || visible.get()>
            <div class=class.clone() role="alert">
                {ALERT_MESSAGE}
            </div>
        </Show>
    }
}
