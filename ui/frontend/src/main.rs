use leptos::*;
use map_widget::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("Cannot initialize logger: {e}");
    }

    mount_to_body(|| view! { <App/> })
}
