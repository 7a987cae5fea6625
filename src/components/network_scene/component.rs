use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::{debug, warn};
use web_sys::HtmlCanvasElement;

use super::render;
use super::state::SceneState;
use super::types::{SceneGraph, SceneTheme};
use crate::dom::{self, DomError, FrameLoop, ListenerGuard};

fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or((800.0, 600.0))
}

fn fit_canvas(canvas: &HtmlCanvasElement) -> (f64, f64) {
	let (w, h) = parent_size(canvas);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	(w, h)
}

/// Wire simulation, drawing, frame loop and resize handling onto `canvas`.
fn mount_scene(
	canvas: HtmlCanvasElement,
	graph: &SceneGraph,
	theme: SceneTheme,
	state: Rc<RefCell<Option<SceneState>>>,
) -> Result<(), DomError> {
	let ctx = dom::context_2d(&canvas)?;
	let (w, h) = fit_canvas(&canvas);
	*state.borrow_mut() = Some(SceneState::new(graph, theme, w, h));
	debug!("network scene mounted at {w}x{h} with {} nodes", graph.nodes.len());

	let state_resize = state.clone();
	let canvas_resize = canvas.clone();
	let on_resize = ListenerGuard::passive(dom::window()?.as_ref(), "resize", move |_| {
		let (nw, nh) = fit_canvas(&canvas_resize);
		if let Some(s) = state_resize.borrow_mut().as_mut() {
			s.resize(nw, nh);
		}
	})?;

	let state_frame = state.clone();
	let frames = FrameLoop::start(move |dt| {
		if let Some(s) = state_frame.borrow_mut().as_mut() {
			s.tick(dt as f32);
			render::render(s, &ctx);
		}
	})?;

	dom::tie_to_owner((on_resize, frames));
	Ok(())
}

/// Decorative force-directed network painted on a canvas that fills its parent.
/// Hovering a node lights up its neighbourhood; nodes can be dragged and stay
/// where they are dropped.
#[component]
pub fn NetworkScene(
	/// Network to simulate; a new value restarts the simulation.
	#[prop(into)]
	graph: Signal<SceneGraph>,
	/// Palette.
	#[prop(default = SceneTheme::default())]
	theme: SceneTheme,
	/// Extra classes of the canvas.
	#[prop(into, optional)]
	class: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<SceneState>>> = Rc::new(RefCell::new(None));
	let state_init = state.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		// Drop the previous run's simulation if the graph changed.
		state_init.borrow_mut().take();
		if let Err(err) = mount_scene(canvas, &graph.get(), theme, state_init.clone()) {
			warn!("network scene disabled: {err}");
		}
	});

	let local_pos = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas = canvas_ref.get_untracked()?;
		let rect = canvas.get_bounding_client_rect();
		Some((
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_pos(&ev) else {
			return;
		};
		if let Some(s) = state_md.borrow_mut().as_mut() {
			s.begin_drag(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_pos(&ev) else {
			return;
		};
		if let Some(s) = state_mm.borrow_mut().as_mut() {
			if s.is_dragging() {
				s.drag_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(s) = state_mu.borrow_mut().as_mut() {
			s.end_drag();
		}
	};

	let state_ml = state;
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(s) = state_ml.borrow_mut().as_mut() {
			s.end_drag();
			s.set_hover(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class=format!("network-scene {class}")
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; width: 100%; height: 100%;"
		/>
	}
}
