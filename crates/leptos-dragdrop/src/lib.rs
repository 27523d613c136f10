//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and item midpoints
//! to find the insertion slot inside a container.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

mod session;
mod slot;

pub use session::GestureSession;
pub use slot::{insertion_index, target_index_after_removal, Axis, Span};

use session::GestureHandlers;

/// Insertion slot inside a drag container
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropTarget {
    /// Container id (column id for tasks, board id for columns)
    pub container: String,
    /// Insertion index counted over the container's rendered items
    pub index: usize,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Global listeners of the gesture in progress
    session: StoredValue<Option<GestureSession>, LocalStorage>,
    /// Invoked with (dragged id, target) when a drag is dropped on a target
    on_drop: Callback<(String, DropTarget)>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks are swallowed after a drag ends
const DRAG_END_CLICK_GUARD_MS: u32 = 100;

pub fn create_dnd_signals(on_drop: Callback<(String, DropTarget)>) -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    let dnd = DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        session: StoredValue::new_local(None),
        on_drop,
    };

    // Owner going away mid-gesture counts as an abort.
    on_cleanup(move || release_session(&dnd));

    dnd
}

impl DndSignals {
    /// Whether `id` is the item currently being dragged
    pub fn is_dragging(&self, id: &str) -> bool {
        self.dragging_id_read.with(|d| d.as_deref() == Some(id))
    }

    /// Active insertion index if the drop target is `container`
    pub fn drop_index_in(&self, container: &str) -> Option<usize> {
        self.drop_target_read.with(|t| {
            t.as_ref()
                .filter(|t| t.container == container)
                .map(|t| t.index)
        })
    }
}

fn release_session(dnd: &DndSignals) {
    if let Some(session) = dnd.session.try_update_value(|s| s.take()).flatten() {
        session.release();
    }
}

fn clear_drag_state(dnd: &DndSignals) -> bool {
    let was_dragging = dnd.dragging_id_read.get_untracked().is_some();
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    release_session(dnd);
    was_dragging
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    if clear_drag_state(dnd) {
        dnd.drag_just_ended_write.set(true);
        let clear = dnd.drag_just_ended_write;
        gloo_timers::callback::Timeout::new(DRAG_END_CLICK_GUARD_MS, move || clear.set(false)).forget();
    }
}

/// Abort the gesture without dropping
pub fn cancel_drag(dnd: &DndSignals) {
    if dnd.pending_id_read.get_untracked().is_some() {
        tracing::debug!("drag cancelled");
    }
    end_drag(dnd);
}

/// Complete the gesture, invoking the drop callback if there is a target
fn finish_drag(dnd: &DndSignals) {
    let dragging_id = dnd.dragging_id_read.get_untracked();
    let drop_target = dnd.drop_target_read.get_untracked();

    end_drag(dnd);

    // If we were actually dragging (not just clicking)
    if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
        tracing::debug!(id = %dragged, container = %target.container, index = target.index, "drop");
        dnd.on_drop.run((dragged, target));
    }
}

/// Start dragging once the pointer has moved far enough from the press point
fn track_threshold(dnd: &DndSignals, ev: &web_sys::MouseEvent) {
    if dnd.dragging_id_read.get_untracked().is_some() {
        return;
    }
    let Some(pending) = dnd.pending_id_read.get_untracked() else {
        return;
    };
    let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
    let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

    // Start dragging if moved beyond threshold
    if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
        dnd.dragging_id_write.set(Some(pending));
    }
}

fn begin_session(dnd: DndSignals) {
    release_session(&dnd);
    let on_cancel = move || cancel_drag(&dnd);
    let session = GestureSession::start(GestureHandlers {
        on_move: move |ev: &web_sys::MouseEvent| track_threshold(&dnd, ev),
        on_release: move || finish_drag(&dnd),
        on_cancel,
    });
    if session.is_none() {
        tracing::warn!("could not register drag listeners");
    }
    dnd.session.set_value(session);
}

fn is_form_control(target: &web_sys::EventTarget) -> bool {
    target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some()
        || target.dyn_ref::<web_sys::HtmlSelectElement>().is_some()
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position and opens the gesture session
pub fn make_on_mousedown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is a form control
        if ev.target().as_ref().is_some_and(is_form_control) {
            return;
        }
        // Nested containers: the innermost item owns the gesture
        ev.stop_propagation();

        dnd.pending_id_write.set(Some(item_id.clone()));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
        begin_session(dnd);
    }
}

fn span_of(rect: &web_sys::DomRect, axis: Axis) -> Span {
    match axis {
        Axis::Vertical => Span::new(rect.top(), rect.height()),
        Axis::Horizontal => Span::new(rect.left(), rect.width()),
    }
}

/// Create mousemove handler for a container: tracks the insertion slot among
/// the descendants matching `item_selector`
pub fn make_on_container_mousemove(
    dnd: DndSignals,
    container: String,
    item_selector: &'static str,
    axis: Axis,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_none() {
            return;
        }
        let Some(element) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let Ok(nodes) = element.query_selector_all(item_selector) else {
            return;
        };
        let spans = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(|item| span_of(&item.get_bounding_client_rect(), axis));
        let pointer = match axis {
            Axis::Vertical => ev.client_y() as f64,
            Axis::Horizontal => ev.client_x() as f64,
        };

        let target = DropTarget {
            container: container.clone(),
            index: insertion_index(spans, pointer),
        };
        let changed = dnd.drop_target_read.with_untracked(|t| t.as_ref() != Some(&target));
        if changed {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}
