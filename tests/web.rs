//! Browser tests for the interactive components: `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use dorj_portfolio::components::metric_chart::MetricChart;
use dorj_portfolio::components::nav::NavShell;
use dorj_portfolio::components::pipeline::PipelineAnimator;
use dorj_portfolio::components::relationship_graph::RelationshipGraph;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::tick;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_container() -> HtmlElement {
	let doc = document();
	let container: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
	doc.body().unwrap().append_child(&container).unwrap();
	container
}

fn find(container: &HtmlElement, selector: &str) -> HtmlElement {
	container
		.query_selector(selector)
		.unwrap()
		.unwrap_or_else(|| panic!("nothing matches {selector}"))
		.dyn_into()
		.unwrap()
}

/// Resolve after `ms` milliseconds of wall-clock time.
async fn sleep(ms: i32) {
	let promise = js_sys::Promise::new(&mut |resolve, _reject| {
		web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

fn bar_height(container: &HtmlElement, which: &str) -> String {
	let style = find(container, &format!("[data-bar='{which}']"))
		.get_attribute("style")
		.unwrap_or_default();
	style
		.split(';')
		.find_map(|rule| rule.trim().strip_prefix("height:"))
		.map(|h| h.trim().to_string())
		.unwrap_or_default()
}

fn cluster_flags(container: &HtmlElement) -> Vec<bool> {
	(0..4)
		.map(|c| {
			find(container, &format!("[data-cluster='{c}']"))
				.get_attribute("data-active")
				.as_deref()
				== Some("true")
		})
		.collect()
}

#[wasm_bindgen_test]
async fn clicking_nodes_flips_cluster_parity() {
	let container = fresh_container();
	let _app = mount_to(container.clone(), || view! { <RelationshipGraph /> });

	assert_eq!(cluster_flags(&container), [false, false, false, false]);
	assert_eq!(find(&container, "[data-status]").text_content().unwrap(), "Network Status: Idle");

	find(&container, "[data-node='0']").click();
	tick().await;
	assert_eq!(cluster_flags(&container), [true, true, false, false]);

	find(&container, "[data-node='1']").click();
	tick().await;
	assert_eq!(cluster_flags(&container), [false, true, true, false]);
	assert_eq!(
		find(&container, "[data-status]").text_content().unwrap(),
		"Analysis: 2 relationships detected."
	);

	// Undo both clicks.
	find(&container, "[data-node='1']").click();
	find(&container, "[data-node='0']").click();
	tick().await;
	assert_eq!(cluster_flags(&container), [false, false, false, false]);
}

#[wasm_bindgen_test]
async fn selecting_a_model_swaps_the_bar_labels() {
	let container = fresh_container();
	let _app = mount_to(container.clone(), || view! { <MetricChart /> });

	let label = |which: &str| {
		find(&container, &format!("[data-bar-label='{which}']"))
			.text_content()
			.unwrap()
	};
	assert_eq!((label("baseline"), label("optimized")), ("5.2%".into(), "2.1%".into()));

	// Bars grow from zero after the first animation frame.
	sleep(100).await;
	tick().await;
	assert_eq!(bar_height(&container, "baseline"), "65%");
	assert_eq!(bar_height(&container, "optimized"), "26.25%");

	find(&container, "[data-dataset='C']").click();
	tick().await;
	assert_eq!((label("baseline"), label("optimized")), ("6.8%".into(), "1.5%".into()));
	assert_eq!(bar_height(&container, "baseline"), "85%");
	assert_eq!(bar_height(&container, "optimized"), "18.75%");
}

#[wasm_bindgen_test]
async fn pipeline_advances_on_its_timer_and_stops_when_unmounted() {
	// Record every interval id the page clears.
	js_sys::eval(
		"window.__cleared = []; const clear = window.clearInterval.bind(window); \
		 window.clearInterval = (id) => { window.__cleared.push(id); clear(id); };",
	)
	.unwrap();
	let cleared = || {
		js_sys::Array::from(&js_sys::Reflect::get(&web_sys::window().unwrap(), &"__cleared".into()).unwrap())
			.length()
	};

	let container = fresh_container();
	let app = mount_to(container.clone(), || view! { <PipelineAnimator /> });

	let current_phase = |container: &HtmlElement| {
		(0..4)
			.find(|p| {
				find(container, &format!("[data-phase='{p}']"))
					.class_name()
					.contains("w-8")
			})
			.unwrap()
	};
	assert_eq!(current_phase(&container), 0);

	sleep(2100).await;
	tick().await;
	assert_eq!(current_phase(&container), 1);

	assert_eq!(cleared(), 0);
	drop(app);
	assert_eq!(container.child_element_count(), 0);
	assert_eq!(cleared(), 1);
}

#[wasm_bindgen_test]
async fn menu_button_toggles_the_mobile_menu() {
	let container = fresh_container();
	let _app = mount_to(container.clone(), || view! { <NavShell /> });

	let button = find(&container, "button[aria-label='Toggle menu']");
	assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("false"));
	assert_eq!(container.query_selector_all("a[href='#about']").unwrap().length(), 1);

	button.click();
	tick().await;
	assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("true"));
	assert_eq!(container.query_selector_all("a[href='#about']").unwrap().length(), 2);

	// Following a link closes the menu even though no #about exists here.
	let links = container.query_selector_all("a[href='#about']").unwrap();
	links
		.item(1)
		.unwrap()
		.dyn_into::<HtmlElement>()
		.unwrap()
		.click();
	tick().await;
	assert_eq!(button.get_attribute("aria-expanded").as_deref(), Some("false"));
}
