use std::{cell::RefCell, rc::Rc};

use leptos::*;
use map_common::{MapConfig, WidgetController, WidgetView, ALERT_DURATION};
use wasm_bindgen::{prelude::*, JsCast};

use crate::{
    components::{alert::WarningBanner, controls::Sidebar},
    locale_date,
    mapbox::{MapMouseEvent, MapboxAdapter},
};

type Controller = WidgetController<MapboxAdapter>;
type SharedController = Rc<RefCell<Option<Controller>>>;

/// Runs `f` on the live controller and publishes the resulting view.
/// Returns `None` once the map is torn down.
fn dispatch<R>(
    shared: &SharedController,
    set_state: WriteSignal<WidgetView>,
    f: impl FnOnce(&mut Controller) -> R,
) -> Option<R> {
    let Ok(mut guard) = shared.try_borrow_mut() else {
        log::warn!("Map event dropped, controller is busy");
        return None;
    };
    let controller = guard.as_mut()?;
    let result = f(controller);
    let view = controller.view();
    drop(guard);

    set_state.set(view);
    Some(result)
}

fn mount_map(
    shared: &SharedController,
    set_state: WriteSignal<WidgetView>,
    config: &MapConfig,
    container: &web_sys::HtmlElement,
) -> anyhow::Result<()> {
    let mut adapter = MapboxAdapter::new(config, container)?;

    let on_move = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move |_event: JsValue| {
            dispatch(&shared, set_state, |c| c.handle_move());
        }) as Box<dyn FnMut(JsValue)>)
    };
    let on_click = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move |event: JsValue| {
            let at = event.unchecked_into::<MapMouseEvent>().position();
            dispatch(&shared, set_state, |c| {
                // Skip formatting a date for clicks that place nothing.
                if c.placement().is_pending() {
                    c.handle_click_with_date(at, locale_date());
                }
            });
        }) as Box<dyn FnMut(JsValue)>)
    };
    adapter.listen("move", on_move);
    adapter.listen("click", on_click);

    let controller = WidgetController::new(adapter);
    set_state.set(controller.view());
    *shared.borrow_mut() = Some(controller);
    Ok(())
}

#[component]
pub fn MapWidget(config: MapConfig) -> impl IntoView {
    let map_node = create_node_ref::<html::Div>();
    let shared: SharedController = Rc::new(RefCell::new(None));
    let (state, set_state) = create_signal(WidgetView::default());

    {
        let shared = shared.clone();
        create_effect(move |_| {
            let Some(node) = map_node.get() else {
                return;
            };
            if shared.borrow().is_some() {
                return;
            }
            let container: &web_sys::HtmlElement = &node;
            if let Err(e) = mount_map(&shared, set_state, &config, container) {
                log::error!("Cannot create map: {e}");
            }
        });
    }

    {
        let shared = shared.clone();
        on_cleanup(move || {
            // Dropping the controller detaches the listeners and removes the map.
            let controller = shared.borrow_mut().take();
            drop(controller);
        });
    }

    let action = |f: fn(&mut Controller)| {
        let shared = shared.clone();
        Callback::new(move |_: ()| {
            dispatch(&shared, set_state, f);
        })
    };
    let on_place = action(Controller::activate_placement);
    let on_delete = action(Controller::delete_all);
    let on_hide = action(Controller::hide_all);
    let on_show = action(Controller::show_all);

    let on_line = {
        let shared = shared.clone();
        Callback::new(move |_: ()| {
            let Some(ticket) = dispatch(&shared, set_state, |c| c.trigger_unimplemented_alert()) else {
                return;
            };
            let shared = shared.clone();
            set_timeout(
                move || {
                    dispatch(&shared, set_state, |c| c.dismiss_alert(ticket));
                },
                ALERT_DURATION,
            );
        })
    };

    let alert_visible = Signal::derive(move || state.get().alert_visible);

    view! {
        <div class="relative">
            <Sidebar
                state=state
                on_place=on_place
                on_line=on_line
                on_delete=on_delete
                on_hide=on_hide
                on_show=on_show
            />
            <div node_ref=map_node class="w-full h-screen"></div>
            <WarningBanner visible=alert_visible/>
        </div>
    }
}
