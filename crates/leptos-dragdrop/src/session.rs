//! Gesture Session
//!
//! Owns the document/window listeners of one drag gesture.
//! Listeners are registered when the session starts and removed when it is
//! released or dropped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// A single registered event listener, unregistered on drop
struct Listener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    fn bind<F>(target: &web_sys::EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref::<js_sys::Function>())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    fn detach(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref::<js_sys::Function>());
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Handlers invoked by the global listeners of a gesture
pub(crate) struct GestureHandlers<M, U, C>
where
    M: FnMut(&web_sys::MouseEvent) + 'static,
    U: FnMut() + 'static,
    C: Fn() + Clone + 'static,
{
    pub on_move: M,
    pub on_release: U,
    pub on_cancel: C,
}

/// Scoped ownership of a gesture's global listeners
pub struct GestureSession {
    listeners: Vec<Listener>,
}

impl GestureSession {
    /// Register document `mousemove`/`mouseup`/`keydown` and window `blur`.
    /// Returns None (with nothing left registered) if any registration fails.
    pub(crate) fn start<M, U, C>(handlers: GestureHandlers<M, U, C>) -> Option<Self>
    where
        M: FnMut(&web_sys::MouseEvent) + 'static,
        U: FnMut() + 'static,
        C: Fn() + Clone + 'static,
    {
        let GestureHandlers {
            mut on_move,
            mut on_release,
            on_cancel,
        } = handlers;

        let window = web_sys::window()?;
        let document = window.document()?;
        let document: web_sys::EventTarget = document.into();
        let window: web_sys::EventTarget = window.into();

        let cancel_on_key = on_cancel.clone();
        let listeners = vec![
            Listener::bind(&document, "mousemove", move |ev| {
                if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
                    on_move(ev);
                }
            })?,
            Listener::bind(&document, "mouseup", move |_| on_release())?,
            Listener::bind(&document, "keydown", move |ev| {
                if let Some(ev) = ev.dyn_ref::<web_sys::KeyboardEvent>() {
                    if ev.key() == "Escape" {
                        cancel_on_key();
                    }
                }
            })?,
            Listener::bind(&window, "blur", move |_| on_cancel())?,
        ];

        tracing::debug!(listeners = listeners.len(), "gesture session started");
        Some(Self { listeners })
    }

    /// Unregister every listener now and free the closures once the current
    /// event has finished dispatching.
    pub fn release(self) {
        for listener in &self.listeners {
            listener.detach();
        }
        tracing::debug!("gesture session released");
        // The releasing call may come from one of these closures.
        wasm_bindgen_futures::spawn_local(async move {
            drop(self);
        });
    }
}
