use leptos::*;
use map_common::WidgetView;

const BUTTON: &str = "text-white bg-blue-700 hover:bg-blue-800 disabled:opacity-50 disabled:cursor-not-allowed font-medium rounded-lg text-sm px-5 py-2.5 me-2 mb-2";
const DANGER_BUTTON: &str = "text-white bg-red-700 hover:bg-red-800 disabled:opacity-50 disabled:cursor-not-allowed font-medium rounded-lg text-sm px-5 py-2.5 me-2 mb-2";

#[component]
fn RoomIcon() -> impl IntoView {
    view! {
        <svg class="w-5 h-5" aria-hidden="true" xmlns="http://www.w3.org/2000/svg" fill="currentColor" viewBox="0 0 24 24">
            <path d="M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7m0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5"/>
        </svg>
    }
}

#[component]
fn LinearScaleIcon() -> impl IntoView {
    view! {
        <svg class="w-5 h-5" aria-hidden="true" xmlns="http://www.w3.org/2000/svg" fill="currentColor" viewBox="0 0 24 24">
            <path d="M19.5 9.5c-1.03 0-1.9.62-2.29 1.5h-2.92c-.39-.88-1.26-1.5-2.29-1.5s-1.9.62-2.29 1.5H6.79c-.39-.88-1.26-1.5-2.29-1.5C3.12 9.5 2 10.62 2 12s1.12 2.5 2.5 2.5c1.03 0 1.9-.62 2.29-1.5h2.92c.39.88 1.26 1.5 2.29 1.5s1.9-.62 2.29-1.5h2.92c.39.88 1.26 1.5 2.29 1.5 1.38 0 2.5-1.12 2.5-2.5s-1.12-2.5-2.5-2.5"/>
        </svg>
    }
}

#[component]
pub fn Sidebar(
    state: ReadSignal<WidgetView>,
    on_place: Callback<()>,
    on_line: Callback<()>,
    on_delete: Callback<()>,
    on_hide: Callback<()>,
    on_show: Callback<()>,
) -> impl IntoView {
    let controls = move || state.get().controls;

    view! {
        <div class="absolute top-0 left-0 z-10 m-3 p-3 rounded-lg bg-gray-800/80 text-white font-mono">
            <div class="mb-2">{move || state.get().viewport.to_string()}</div>
            <div class="flex flex-wrap">
                <button on:click=move |_| on_place.call(()) title="Add point" class=BUTTON>
                    <RoomIcon/>
                </button>
                <button on:click=move |_| on_line.call(()) title="Draw line" class=BUTTON>
                    <LinearScaleIcon/>
                </button>
                <button on:click=move |_| on_delete.call(()) disabled=move || !controls().delete_all class=DANGER_BUTTON>
                    "delete all markers"
                </button>
                <button on:click=move |_| on_hide.call(()) disabled=move || !controls().hide_all class=BUTTON>
                    "hide all markers"
                </button>
                <button on:click=move |_| on_show.call(()) disabled=move || !controls().show_all class=BUTTON>
                    "show all markers"
                </button>
            </div>
        </div>
    }
}
