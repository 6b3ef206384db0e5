//! Leptos component drawing the particle network on a full-window canvas.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::ParticleField;
use crate::components::theme::Theme;

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn draw(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.particles;
	let (width, height) = field.size();
	ctx.clear_rect(0.0, 0.0, width, height);

	ctx.set_line_width(style.link_width);
	for link in field.links() {
		ctx.set_stroke_style_str(&style.link_color.with_alpha(link.strength).to_css());
		ctx.begin_path();
		ctx.move_to(link.from.0, link.from.1);
		ctx.line_to(link.to.0, link.to.1);
		ctx.stroke();
	}

	ctx.set_fill_style_str(&style.color.to_css());
	for p in &field.particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.fill();
	}
}

/// Fixed canvas filling the viewport; tracks window resizes.
#[component]
pub fn NetworkBackground() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some((w, h)) = window_size(&window) else {
			warn!("graph-slides: could not read window size");
			return;
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("graph-slides: background canvas has no 2d context");
			return;
		};

		let theme = Theme::default();
		*field.borrow_mut() = Some(ParticleField::new(&theme.particles, w, h));

		let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (field_anim, animate_inner) = (field.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				draw(f, &ctx, &theme);
				f.update();
			}
			if let (Some(window), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="network"
			style="position: fixed; inset: 0; z-index: -1; display: block;"
		/>
	}
}
