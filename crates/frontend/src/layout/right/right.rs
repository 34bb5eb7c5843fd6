use crate::layout::global_context::use_app_store;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;

const DEFAULT_WIDTH: f64 = 320.0;
const MIN_WIDTH: f64 = 240.0;

/// Ширина панели с учетом окна: не больше половины и не шире свободного места
fn clamp_width(wanted: f64, window_width: f64) -> f64 {
    let max_available = window_width - 400.0 - 260.0;
    let max_width = max_available.min(window_width * 0.5).max(MIN_WIDTH);
    wanted.clamp(MIN_WIDTH, max_width)
}

fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[component]
pub fn Right(children: Children) -> impl IntoView {
    let store = use_app_store();
    let is_open = move || store.right_open.get();

    let width = RwSignal::new(DEFAULT_WIDTH);
    let is_resizing = RwSignal::new(false);
    let start_x = RwSignal::new(0.0f64);
    let start_width = RwSignal::new(DEFAULT_WIDTH);

    let on_resize_start = move |ev: leptos::ev::MouseEvent| {
        if !is_open() {
            return;
        }
        is_resizing.set(true);
        start_x.set(ev.client_x() as f64);
        start_width.set(width.get_untracked());
        ev.prevent_default();
    };

    let _ = window_event_listener(leptos::ev::mousemove, move |ev: leptos::ev::MouseEvent| {
        if !is_resizing.get_untracked() {
            return;
        }
        let Some(window_width) = window_width() else {
            return;
        };
        let dx = start_x.get_untracked() - ev.client_x() as f64;
        width.set(clamp_width(start_width.get_untracked() + dx, window_width));
    });

    let _ = window_event_listener(leptos::ev::mouseup, move |_ev: leptos::ev::MouseEvent| {
        if is_resizing.get_untracked() {
            is_resizing.set(false);
        }
    });

    // cursor и user-select на время resize
    Effect::new(move |_| {
        let resizing = is_resizing.get();
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let (cursor, select) = if resizing { ("col-resize", "none") } else { ("", "") };
            let _ = body.style().set_property("cursor", cursor);
            let _ = body.style().set_property("user-select", select);
        }
    });

    view! {
        <div
            data-zone="right"
            class="right-panel"
            class:right-panel--hidden=move || !is_open()
            class:right-panel--resizing=move || is_resizing.get()
            style:width=move || if is_open() { format!("{}px", width.get()) } else { "0px".to_string() }
        >
            <div class="right-panel__resizer" on:mousedown=on_resize_start></div>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_width() {
        assert_eq!(clamp_width(100.0, 1920.0), MIN_WIDTH);
        assert_eq!(clamp_width(500.0, 1920.0), 500.0);
        assert_eq!(clamp_width(1500.0, 1920.0), 960.0);
        // узкое окно: минимальная ширина сохраняется
        assert_eq!(clamp_width(500.0, 800.0), MIN_WIDTH);
    }
}
