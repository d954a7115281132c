//! Animation board: a pannable, zoomable chat message holding the emoji
//! being edited, with a grid and corner control points drawn on top.
//!
//! ARCHITECTURE
//! ============
//! The board owns a `viewport::engine::Engine` behind `Rc<RefCell<_>>`.
//! DOM events are translated into engine calls; the returned actions are
//! folded into `BoardViewState`, which drives the content transform, the
//! cursor, the grid, and the status bar.
//!
//! Corners depend on layout, so they are measured one animation frame after
//! any of their inputs change (camera, selected emoji, image load, window
//! resize) and stored in their own signal. Writing only on change keeps the effect from feeding
//! itself.

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use viewport::camera::Point;
use viewport::corners::CornerSet;
#[cfg(feature = "csr")]
use viewport::engine::{Action, Engine, EngineCore};
#[cfg(feature = "csr")]
use viewport::input::{Button, WheelDelta};

use crate::components::chat_room::{ChatFrame, ChatMessage, EMOJI_CLASS};
use crate::components::control_points::ControlPoints;
use crate::components::grid_layer::GridLayer;
use crate::components::status_bar::StatusBar;
use crate::components::timeline_bar::TimelineBar;
use crate::consts::{CONTROL_POINT_SIZE, EDITING_EMOJI_ID, GRID_SIZE};
use crate::state::board_view::BoardViewState;
use crate::state::chat::BOARD_AUTHOR;
use crate::state::editor::EditorState;

/// Client coordinates of a pointer event as a screen point.
#[cfg(feature = "csr")]
fn client_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Fold engine actions into the board state, notifying only when something
/// visible changed.
#[cfg(feature = "csr")]
fn publish(view_state: RwSignal<BoardViewState>, actions: Vec<Action>) {
    if actions.is_empty() {
        return;
    }
    view_state.maybe_update(|v| v.apply(actions));
}

#[component]
pub fn AnimationEditor() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let view_state = RwSignal::new(BoardViewState::default());
    let corners = RwSignal::new(CornerSet::PLACEHOLDER);

    let board_ref = NodeRef::<leptos::html::Div>::new();
    let container_ref = NodeRef::<leptos::html::Div>::new();
    let emoji_ref = NodeRef::<leptos::html::Img>::new();

    let camera = Memo::new(move |_| view_state.with(|v| v.camera));
    #[cfg(feature = "csr")]
    let layout_epoch = Memo::new(move |_| view_state.with(|v| v.layout_epoch));
    let current_emoji = Memo::new(move |_| editor.with(|s| s.current_emoji.clone()));
    let has_emoji = move || current_emoji.with(|name| !name.is_empty());

    #[cfg(feature = "csr")]
    let engine = {
        let mut core = EngineCore::with_camera(view_state.get_untracked().camera);
        core.marker_size = CONTROL_POINT_SIZE;
        Rc::new(RefCell::new(Engine::new(core)))
    };

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            camera.track();
            layout_epoch.track();
            let selected = has_emoji();
            let emoji = emoji_ref.get().filter(|_| selected).map(Into::into);
            let container = container_ref.get().map(Into::into);
            {
                let mut engine = engine.borrow_mut();
                engine.set_emoji_element(emoji);
                engine.set_container_element(container);
            }
            let engine = Rc::clone(&engine);
            request_animation_frame(move || {
                let next = engine.borrow().corners();
                if corners.get_untracked() != next {
                    corners.set(next);
                }
            });
        });
    }

    #[cfg(feature = "csr")]
    {
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            view_state.update(BoardViewState::invalidate_layout);
        });
        on_cleanup(move || resize.remove());
    }

    #[cfg(feature = "csr")]
    let on_pointer_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            let actions = engine.borrow_mut().on_pointer_down(client_point(&ev), Button::from_dom(ev.button()));
            if actions.is_empty() {
                return;
            }
            ev.prevent_default();
            if let Some(board) = board_ref.get_untracked() {
                if let Err(e) = board.set_pointer_capture(ev.pointer_id()) {
                    log::debug!("pointer capture failed: {e:?}");
                }
            }
            publish(view_state, actions);
        }
    };

    #[cfg(feature = "csr")]
    let on_pointer_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            let actions = engine.borrow_mut().on_pointer_move(client_point(&ev));
            publish(view_state, actions);
        }
    };

    #[cfg(feature = "csr")]
    let on_pointer_up = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            let actions = engine.borrow_mut().on_pointer_up(client_point(&ev));
            publish(view_state, actions);
        }
    };

    #[cfg(feature = "csr")]
    let on_pointer_cancel = {
        let engine = Rc::clone(&engine);
        move |_ev: leptos::ev::PointerEvent| {
            let actions = engine.borrow_mut().on_pointer_cancel();
            publish(view_state, actions);
        }
    };

    #[cfg(feature = "csr")]
    let on_wheel = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::WheelEvent| {
            ev.prevent_default();
            let actions = engine.borrow_mut().on_wheel(WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() });
            publish(view_state, actions);
        }
    };

    #[cfg(not(feature = "csr"))]
    let on_pointer_down = |_ev: leptos::ev::PointerEvent| {};
    #[cfg(not(feature = "csr"))]
    let on_pointer_move = |_ev: leptos::ev::PointerEvent| {};
    #[cfg(not(feature = "csr"))]
    let on_pointer_up = |_ev: leptos::ev::PointerEvent| {};
    #[cfg(not(feature = "csr"))]
    let on_pointer_cancel = |_ev: leptos::ev::PointerEvent| {};
    #[cfg(not(feature = "csr"))]
    let on_wheel = |_ev: leptos::ev::WheelEvent| {};

    let on_emoji_load = move |_: leptos::ev::Event| view_state.update(BoardViewState::invalidate_layout);

    let content_transform = move || camera.get().css_transform();
    let cursor = move || view_state.with(|v| v.cursor.clone());
    let caption = move || editor.with(|s| s.board_caption().to_owned());
    let alt = move || editor.with(|s| s.emoji_alt().to_owned());
    let src = move || editor.with(EditorState::emoji_src);
    let emoji_css = move || editor.with(|s| s.emoji_css.clone());

    view! {
        <div class="animation-editor">
            <div
                class="animation-editor__board"
                node_ref=board_ref
                style:cursor=cursor
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointercancel=on_pointer_cancel.clone()
                on:lostpointercapture=on_pointer_cancel
                on:wheel=on_wheel
            >
                <div class="animation-editor__content" style:transform=content_transform>
                    <ChatFrame>
                        <ChatMessage author=BOARD_AUTHOR>
                            {caption}
                            " "
                            <img
                                id=EDITING_EMOJI_ID
                                class=EMOJI_CLASS
                                node_ref=emoji_ref
                                draggable="false"
                                src=src
                                alt=alt
                                hidden=move || !has_emoji()
                                on:load=on_emoji_load
                            />
                            " "
                            {alt}
                        </ChatMessage>
                    </ChatFrame>
                </div>
                <div class="animation-editor__overlay" node_ref=container_ref>
                    <svg class="animation-editor__svg">
                        <GridLayer camera=camera grid_size=GRID_SIZE/>
                        <ControlPoints corners=corners size=CONTROL_POINT_SIZE/>
                    </svg>
                </div>
            </div>
            <StatusBar view_state=view_state/>
            <TimelineBar/>
            <style>{emoji_css}</style>
        </div>
    }
}
