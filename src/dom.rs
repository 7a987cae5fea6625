//! Browser services used by the page: window/document lookup, smooth scrolling,
//! repeating timers, animation frames and passive event listeners.
//!
//! Every acquired resource is a guard that releases itself on drop. Components
//! hand guards to [`tie_to_owner`] so they are released when the view unmounts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::{LocalStorage, StoredValue, UpdateValue, on_cleanup};
use log::debug;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{
	AddEventListenerOptions, CanvasRenderingContext2d, Document, Event, EventTarget,
	HtmlCanvasElement, ScrollBehavior, ScrollToOptions, Window,
};

use crate::components::nav::ScrollHost;
use crate::components::pipeline::{Scheduler, TaskHandle};

/// Failure of a platform service the page depends on.
#[derive(Debug, Error)]
pub enum DomError {
	/// Not running inside a browser window.
	#[error("no global `window` available")]
	NoWindow,
	/// The window has no document attached.
	#[error("window has no document")]
	NoDocument,
	/// A canvas refused to hand out a 2d context.
	#[error("canvas has no 2d rendering context")]
	NoContext,
	/// A browser API call threw.
	#[error("{op} failed: {reason}")]
	Js {
		/// The API that was called.
		op: &'static str,
		/// Stringified JS exception.
		reason: String,
	},
}

impl DomError {
	fn js(op: &'static str, value: JsValue) -> Self {
		DomError::Js {
			op,
			reason: value.as_string().unwrap_or_else(|| format!("{value:?}")),
		}
	}
}

/// The global window.
pub fn window() -> Result<Window, DomError> {
	web_sys::window().ok_or(DomError::NoWindow)
}

/// The window's document.
pub fn document() -> Result<Document, DomError> {
	window()?.document().ok_or(DomError::NoDocument)
}

/// Fetch the 2d context of `canvas`.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, DomError> {
	canvas
		.get_context("2d")
		.map_err(|e| DomError::js("getContext", e))?
		.ok_or(DomError::NoContext)?
		.dyn_into()
		.map_err(|_| DomError::NoContext)
}

/// Smooth-scroll the window so that its vertical offset becomes `top`.
pub fn smooth_scroll_to(top: f64) -> Result<(), DomError> {
	let options = ScrollToOptions::new();
	options.set_top(top);
	options.set_behavior(ScrollBehavior::Smooth);
	window()?.scroll_to_with_scroll_to_options(&options);
	Ok(())
}

/// Current vertical scroll offset of the window, 0 outside a browser.
pub fn scroll_offset() -> f64 {
	web_sys::window()
		.and_then(|w| w.scroll_y().ok())
		.unwrap_or(0.0)
}

/// Run `f` once on the next animation frame. Silently dropped outside a browser.
pub fn next_frame(f: impl FnOnce() + 'static) {
	let Ok(window) = window() else {
		return;
	};
	let callback = Closure::once_into_js(f);
	if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
		debug!("requestAnimationFrame refused: {err:?}");
	}
}

/// Keep `value` alive until the current reactive owner is cleaned up, then drop it.
pub fn tie_to_owner<T: 'static>(value: T) {
	let slot = StoredValue::<Option<T>, LocalStorage>::new_local(Some(value));
	on_cleanup(move || {
		slot.try_update_value(|held| held.take());
	});
}

/// [`ScrollHost`] backed by the real window and document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScroll;

impl ScrollHost for BrowserScroll {
	fn scroll_offset(&self) -> f64 {
		scroll_offset()
	}

	fn element_top(&self, id: &str) -> Option<f64> {
		let element = document().ok()?.get_element_by_id(id)?;
		Some(element.get_bounding_client_rect().top())
	}

	fn smooth_scroll_to(&self, top: f64) {
		if let Err(err) = smooth_scroll_to(top) {
			debug!("smooth scroll skipped: {err}");
		}
	}
}

/// [`Scheduler`] backed by `setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// A live `setInterval` registration. Cancelling clears the interval before the
/// callback is dropped.
pub struct BrowserInterval {
	id: i32,
	_tick: Closure<dyn FnMut()>,
}

impl Scheduler for BrowserScheduler {
	type Handle = BrowserInterval;

	fn repeat(&self, period: Duration, tick: Box<dyn FnMut()>) -> Result<BrowserInterval, DomError> {
		let window = window()?;
		let callback = Closure::wrap(tick);
		let id = window
			.set_interval_with_callback_and_timeout_and_arguments_0(
				callback.as_ref().unchecked_ref(),
				period.as_millis() as i32,
			)
			.map_err(|e| DomError::js("setInterval", e))?;
		debug!("interval {id} registered every {}ms", period.as_millis());
		Ok(BrowserInterval { id, _tick: callback })
	}
}

impl TaskHandle for BrowserInterval {
	fn cancel(self) {
		if let Some(window) = web_sys::window() {
			window.clear_interval_with_handle(self.id);
			debug!("interval {} cleared", self.id);
		}
	}
}

/// An event listener registered with `{ passive: true }`, removed on drop.
pub struct ListenerGuard {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
	/// Register `handler` for `event` on `target` as a passive listener.
	pub fn passive(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<Self, DomError> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		let options = AddEventListenerOptions::new();
		options.set_passive(true);
		target
			.add_event_listener_with_callback_and_add_event_listener_options(
				event,
				callback.as_ref().unchecked_ref(),
				&options,
			)
			.map_err(|e| DomError::js("addEventListener", e))?;
		debug!("passive `{event}` listener attached");
		Ok(Self {
			target: target.clone(),
			event,
			callback,
		})
	}
}

impl Drop for ListenerGuard {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
		debug!("`{}` listener removed", self.event);
	}
}

/// A self-rescheduling `requestAnimationFrame` loop. Dropping it cancels the
/// pending frame and frees the callback.
pub struct FrameLoop {
	pending: Rc<Cell<Option<i32>>>,
	callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
	/// Start calling `on_frame(dt_seconds)` once per animation frame.
	pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<Self, DomError> {
		let window = window()?;
		let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
		let (pending_inner, callback_inner) = (pending.clone(), callback.clone());
		let mut last_frame: Option<f64> = None;

		*callback.borrow_mut() = Some(Closure::new(move |now: f64| {
			// Clamp so a backgrounded tab doesn't explode the simulation on return.
			let dt = last_frame.map_or(0.016, |prev| ((now - prev) / 1000.0).clamp(0.0, 0.05));
			last_frame = Some(now);
			pending_inner.set(None);
			on_frame(dt);

			if let (Some(cb), Some(win)) = (callback_inner.borrow().as_ref(), web_sys::window()) {
				pending_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));

		// Must own the callback before the first request: the error path drops it.
		let frame_loop = Self { pending, callback };
		let requested = frame_loop
			.callback
			.borrow()
			.as_ref()
			.map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
		let id = requested
			.transpose()
			.map_err(|e| DomError::js("requestAnimationFrame", e))?;
		frame_loop.pending.set(id);
		Ok(frame_loop)
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		self.callback.borrow_mut().take();
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use leptos::prelude::Owner;

	use super::*;

	struct DropFlag(Rc<Cell<bool>>);

	impl Drop for DropFlag {
		fn drop(&mut self) {
			self.0.set(true);
		}
	}

	#[test]
	fn tied_values_live_until_owner_cleanup() {
		let dropped = Rc::new(Cell::new(false));
		let owner = Owner::new();
		owner.with(|| tie_to_owner(DropFlag(dropped.clone())));
		assert!(!dropped.get());

		owner.cleanup();
		assert!(dropped.get());
	}
}
