use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{NODE_RADIUS, SceneState};

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Paint one frame. The canvas is cleared rather than filled so the page
/// background shows through.
pub fn render(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_links(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, dash, gap) = (1.0 / k, 6.0 / k, 5.0 / k);
	let dash_offset = -(state.flow_time * 12.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);
	let rgb = state.theme.edge_rgb();

	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(dash),
		&JsValue::from_f64(gap),
	));
	ctx.set_line_dash_offset(dash_offset);

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 2.0 * NODE_RADIUS {
			return;
		}

		// t=0: every link at 0.35; t=1: highlighted links at 0.8, the rest at 0.08.
		let lit = state.is_highlighted(n1.index()) && state.is_highlighted(n2.index());
		let (alpha, width) = if lit {
			(0.35 + 0.45 * t, line_width * (1.0 + 0.5 * t))
		} else {
			(0.35 - 0.27 * t, line_width)
		};

		ctx.set_stroke_style_str(&format!("rgba({rgb}, {alpha})"));
		ctx.set_line_width(width);
		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		ctx.stroke();
	});
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_label(state: &SceneState, ctx: &CanvasRenderingContext2d, text: &str, x: f64, y: f64, alpha: f64) {
	let k = state.transform.k;
	ctx.set_fill_style_str(&format!("rgba({}, {alpha})", state.theme.label_rgb()));
	ctx.set_font(&format!("italic {}px Georgia, serif", 12.0 / k.max(0.5)));
	let _ = ctx.fill_text(text, x + NODE_RADIUS + 4.0 / k, y + 4.0 / k);
}

fn draw_nodes(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);

	// Background pass: everything not part of the hover neighbourhood.
	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if has_highlight && state.is_highlighted(idx) {
			return;
		}
		let (x, y) = (node.x() as f64, node.y() as f64);
		let style = &node.data.user_data;
		let (alpha, radius) = (1.0 - 0.6 * t, NODE_RADIUS * (1.0 - 0.15 * t));

		ctx.set_global_alpha(alpha * 0.85);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(style.color);
		ctx.fill();
		ctx.set_global_alpha(1.0);

		if let Some(label) = style.label {
			draw_label(state, ctx, label, x, y, alpha * 0.7);
		}
	});

	if !has_highlight {
		return;
	}

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		if !state.is_highlighted(idx) {
			return;
		}
		let (x, y) = (node.x() as f64, node.y() as f64);
		let style = &node.data.user_data;
		let is_hovered = state.is_hovered(idx);

		let (radius, halo) = if is_hovered {
			(NODE_RADIUS * (1.0 + 0.4 * t), NODE_RADIUS * (2.0 + 1.5 * t))
		} else {
			(NODE_RADIUS * (1.0 + 0.2 * t), NODE_RADIUS * (1.4 + 0.6 * t))
		};

		if t > 0.01 {
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, halo) {
				let alpha = if is_hovered { 0.35 * t } else { 0.18 * t };
				let rgb = state.theme.edge_rgb();
				let _ = gradient.add_color_stop(0.0, &format!("rgba({rgb}, {alpha})"));
				let _ = gradient.add_color_stop(1.0, &format!("rgba({rgb}, 0)"));
				ctx.begin_path();
				let _ = ctx.arc(x, y, halo, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(style.color);
		ctx.fill();

		if is_hovered && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba({}, {})", state.theme.label_rgb(), 0.6 * t));
			ctx.set_line_width(1.2 / k);
			ctx.stroke();
		}

		if let Some(label) = style.label {
			draw_label(state, ctx, label, x, y, 1.0);
		}
	});
}
