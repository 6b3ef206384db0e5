//! Leptos components for the two graph demo canvases.
//!
//! Both canvases share one [`DemoSession`]. The unipartite canvas runs an animation loop via
//! `requestAnimationFrame`, ticking the simulation and redrawing each frame; the bipartite
//! canvas is static and redraws only after a command changes its overlay.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::session::{Command, DemoSession};
use crate::components::render;
use crate::components::theme::Theme;
use crate::graph::Point;

/// Session handle captured by the canvas callbacks and button handlers.
pub type SharedSession = Rc<RefCell<DemoSession>>;

/// Fixed frame step handed to the simulation.
const FRAME_DT: f32 = 0.016;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

/// Size the canvas backing store to the logical viewport and grab its 2D context.
fn prepare_canvas(canvas: &HtmlCanvasElement, session: &SharedSession) -> Option<CanvasRenderingContext2d> {
	let (w, h) = {
		let s = session.borrow();
		(s.config.width, s.config.height)
	};
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let ctx = context_2d(canvas);
	if ctx.is_none() {
		warn!("graph-slides: canvas has no 2d context");
	}
	ctx
}

/// Map a pointer event from CSS pixels on the scaled canvas to logical viewport coordinates.
fn logical_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
	let rect = canvas.get_bounding_client_rect();
	let sx = if rect.width() > 0.0 {
		canvas.width() as f64 / rect.width()
	} else {
		1.0
	};
	let sy = if rect.height() > 0.0 {
		canvas.height() as f64 / rect.height()
	} else {
		1.0
	};
	Point::new(
		(ev.client_x() as f64 - rect.left()) * sx,
		(ev.client_y() as f64 - rect.top()) * sy,
	)
}

/// Force-directed layout of the unipartite graph with restart and freeze controls.
///
/// Nodes can be dragged; a node dropped while the layout is frozen stays where it was put.
#[component]
pub fn UnipartiteDemo(session: SharedSession) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (frozen, set_frozen) = signal(session.borrow().unipartite.is_frozen());
	let theme = Theme::default();
	let (session_init, animate_init) = (session.clone(), animate.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = prepare_canvas(&canvas, &session_init) else {
			return;
		};

		let (session_anim, animate_inner, theme) =
			(session_init.clone(), animate_init.clone(), theme.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			{
				let mut s = session_anim.borrow_mut();
				s.tick(FRAME_DT);
				render::render(&s.unipartite_scene(), &ctx, &theme);
			}
			if let (Some(window), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let (Some(window), Some(cb)) = (web_sys::window(), animate_init.borrow().as_ref()) {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let session_md = session.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let p = logical_point(&canvas, &ev);
		session_md.borrow_mut().unipartite.begin_drag(p);
	};

	let session_mm = session.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let p = logical_point(&canvas, &ev);
		session_mm.borrow_mut().unipartite.drag_to(p);
	};

	let session_mu = session.clone();
	let on_mouseup = move |_: MouseEvent| {
		session_mu.borrow_mut().unipartite.end_drag();
	};

	let session_ml = session.clone();
	let on_mouseleave = move |_: MouseEvent| {
		session_ml.borrow_mut().unipartite.end_drag();
	};

	let session_restart = session.clone();
	let on_restart = move |_: MouseEvent| {
		set_frozen.set(session_restart.borrow_mut().dispatch(Command::Restart));
	};

	let session_freeze = session;
	let on_freeze = move |_: MouseEvent| {
		set_frozen.set(session_freeze.borrow_mut().dispatch(Command::ToggleFreeze));
	};

	view! {
		<div class="graph-demo">
			<canvas
				node_ref=canvas_ref
				class="graph-demo-canvas"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=on_mouseup
				on:mouseleave=on_mouseleave
				style="display: block; width: 100%; height: auto; cursor: grab;"
			/>
			<div class="graph-controls">
				<button on:click=on_restart>"Restart layout"</button>
				<button on:click=on_freeze>
					{move || if frozen.get() { "Unfreeze" } else { "Freeze" }}
				</button>
			</div>
		</div>
	}
}

/// Two-column bipartite graph with one-mode projection controls.
#[component]
pub fn BipartiteDemo(session: SharedSession) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<CanvasRenderingContext2d>>> = Rc::new(RefCell::new(None));
	let theme = Theme::default();

	let redraw = {
		let (session, context, theme) = (session.clone(), context.clone(), theme.clone());
		Rc::new(move || {
			if let Some(ctx) = context.borrow().as_ref() {
				render::render(&session.borrow().bipartite_scene(&theme), ctx, &theme);
			}
		})
	};

	let (session_init, context_init, redraw_init) = (session.clone(), context.clone(), redraw.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		*context_init.borrow_mut() = prepare_canvas(&canvas, &session_init);
		redraw_init();
	});

	let handler = |command: Command| {
		let (session, redraw) = (session.clone(), redraw.clone());
		move |_: MouseEvent| {
			session.borrow_mut().dispatch(command);
			redraw();
		}
	};

	view! {
		<div class="graph-demo">
			<canvas
				node_ref=canvas_ref
				class="graph-demo-canvas"
				style="display: block; width: 100%; height: auto;"
			/>
			<div class="graph-controls">
				<button on:click={handler(Command::ProjectLeft)}>"Project left"</button>
				<button on:click={handler(Command::ProjectRight)}>"Project right"</button>
				<button on:click={handler(Command::ClearProjection)}>"Clear projection"</button>
			</div>
		</div>
	}
}
