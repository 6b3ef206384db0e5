//! Canvas rendering for graph demo scenes.
//!
//! Paints a [`Scene`] in item order onto a 2D context whose backing store matches the scene's
//! logical size. Rendering uses two passes per frame: background, then items.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::{Item, Scene, Shape};
use super::theme::{Color, Theme};
use crate::graph::{Partition, Point};

/// Renders the complete scene to the canvas.
pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.clear_rect(0.0, 0.0, scene.width, scene.height);
	ctx.set_fill_style_str(&theme.canvas.color.to_css());
	ctx.fill_rect(0.0, 0.0, scene.width, scene.height);

	for Item { shape, .. } in &scene.items {
		match shape {
			Shape::Line { from, to } => draw_line(ctx, theme, *from, *to),
			Shape::Curve {
				from,
				control,
				to,
				width,
			} => draw_curve(ctx, theme, *from, *control, *to, *width),
			Shape::Node {
				at,
				radius,
				label,
				kind,
			} => draw_node(ctx, theme, *at, *radius, label, *kind),
		}
	}
}

fn draw_line(ctx: &CanvasRenderingContext2d, theme: &Theme, from: Point, to: Point) {
	ctx.set_stroke_style_str(&theme.edge.color.to_css());
	ctx.set_line_width(theme.edge.width);
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.line_to(to.x, to.y);
	ctx.stroke();
}

fn draw_curve(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	from: Point,
	control: Point,
	to: Point,
	width: f64,
) {
	let style = &theme.projection;
	ctx.set_stroke_style_str(&style.color.to_css());
	ctx.set_line_width(width);
	if let Some((dash, gap)) = style.dash {
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		));
	}

	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.quadratic_curve_to(control.x, control.y, to.x, to.y);
	ctx.stroke();

	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	at: Point,
	radius: f64,
	label: &str,
	kind: Option<Partition>,
) {
	let style = &theme.node;
	let base_color = style.fill(kind);

	ctx.begin_path();
	let _ = ctx.arc(at.x, at.y, radius, 0.0, 2.0 * PI);
	let gradient = if style.use_gradient {
		gradient_fill(ctx, at, radius, base_color)
	} else {
		None
	};
	match gradient {
		Some(gradient) => {
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&base_color.to_css()),
	}
	ctx.fill();

	if style.border_width > 0.0 {
		ctx.set_stroke_style_str(&style.border_color.to_css());
		ctx.set_line_width(style.border_width);
		ctx.stroke();
	}

	ctx.set_fill_style_str(&style.label_color.to_css());
	ctx.set_font(style.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(label, at.x, at.y + radius + 10.0);
}

fn gradient_fill(
	ctx: &CanvasRenderingContext2d,
	at: Point,
	radius: f64,
	base: Color,
) -> Option<web_sys::CanvasGradient> {
	let gradient = ctx
		.create_radial_gradient(
			at.x - radius * 0.3,
			at.y - radius * 0.3,
			0.0,
			at.x,
			at.y,
			radius,
		)
		.ok()?;
	gradient
		.add_color_stop(0.0, &base.lighten(0.4).to_css())
		.ok()?;
	gradient.add_color_stop(0.7, &base.to_css()).ok()?;
	gradient
		.add_color_stop(1.0, &base.darken(0.2).to_css())
		.ok()?;
	Some(gradient)
}
