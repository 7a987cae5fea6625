use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::debug;

use super::state::{ClusterActivation, NodeToggleSet, status_line};
use crate::components::icons::{Icon, IconSvg};

struct NodeSpot {
	id: usize,
	x: &'static str,
	y: &'static str,
}

struct ClusterSpot {
	id: usize,
	x: &'static str,
	y: &'static str,
	label: &'static str,
	color: &'static str,
}

// Grid corners plus the centre; the centre node is id 4.
const NODES: [NodeSpot; 5] = [
	NodeSpot { id: 0, x: "20%", y: "20%" },
	NodeSpot { id: 1, x: "80%", y: "20%" },
	NodeSpot { id: 4, x: "50%", y: "50%" },
	NodeSpot { id: 2, x: "20%", y: "80%" },
	NodeSpot { id: 3, x: "80%", y: "80%" },
];

const CLUSTERS: [ClusterSpot; 4] = [
	ClusterSpot { id: 0, x: "50%", y: "20%", label: "A", color: "bg-blue-500" },
	ClusterSpot { id: 1, x: "20%", y: "50%", label: "B", color: "bg-red-500" },
	ClusterSpot { id: 2, x: "80%", y: "50%", label: "B", color: "bg-red-500" },
	ClusterSpot { id: 3, x: "50%", y: "80%", label: "A", color: "bg-blue-500" },
];

/// Clickable 5-node board whose four clusters light up by parity.
#[component]
pub fn RelationshipGraph() -> impl IntoView {
	let toggled = RwSignal::new(NodeToggleSet::default());
	let activation = Memo::new(move |_| ClusterActivation::of(toggled.get()));

	let clusters = CLUSTERS
		.iter()
		.map(|spot| {
			let (id, color) = (spot.id, spot.color);
			view! {
				<div
					data-cluster=id.to_string()
					data-active=move || activation.get().is_active(id).to_string()
					class=move || {
						if activation.get().is_active(id) {
							format!(
								"absolute w-10 h-10 -ml-5 -mt-5 flex items-center justify-center text-white text-xs font-bold rounded-sm shadow-sm transition-all duration-300 {color} opacity-100 scale-110 ring-4 ring-offset-2 ring-stone-200"
							)
						} else {
							"absolute w-10 h-10 -ml-5 -mt-5 flex items-center justify-center text-white text-xs font-bold rounded-sm shadow-sm transition-all duration-300 bg-stone-300 opacity-40"
								.to_string()
						}
					}
					style=format!("left: {}; top: {};", spot.x, spot.y)
				>
					{spot.label}
				</div>
			}
		})
		.collect_view();

	let nodes = NODES
		.iter()
		.map(|spot| {
			let id = spot.id;
			let on_click = move |_: MouseEvent| {
				toggled.update(|s| s.toggle(id));
				debug!("node {id} toggled, active clusters {:?}", activation.get_untracked().active());
			};
			view! {
				<button
					data-node=id.to_string()
					aria-pressed=move || toggled.get().contains(id).to_string()
					on:click=on_click
					class=move || {
						if toggled.get().contains(id) {
							"absolute w-8 h-8 -ml-4 -mt-4 rounded-full border-2 flex items-center justify-center transition-all duration-200 z-10 bg-stone-800 border-stone-900 text-nobel-gold"
						} else {
							"absolute w-8 h-8 -ml-4 -mt-4 rounded-full border-2 flex items-center justify-center transition-all duration-200 z-10 bg-white border-stone-300 hover:border-stone-500"
						}
					}
					style=format!("left: {}; top: {};", spot.x, spot.y)
				>
					<Show when=move || toggled.get().contains(id)>
						<IconSvg icon=Icon::Activity size=14 />
					</Show>
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="flex flex-col items-center p-8 bg-white rounded-xl shadow-sm border border-stone-200 my-8">
			<h3 class="font-serif text-xl mb-4 text-stone-800">"Graph Topology Analysis"</h3>
			<p class="text-sm text-stone-500 mb-6 text-center max-w-md">
				"Click the " <strong>"Nodes"</strong> " to simulate user interactions. Watch the colored "
				<strong>"Clusters"</strong> " activate to identify content relationships."
			</p>

			<div class="relative w-64 h-64 bg-[#F5F4F0] rounded-lg border border-stone-200 p-4">
				<div class="absolute inset-0 pointer-events-none flex items-center justify-center opacity-20">
					<div class="w-2/3 h-2/3 border border-stone-400"></div>
					<div class="absolute w-full h-[1px] bg-stone-400"></div>
					<div class="absolute h-full w-[1px] bg-stone-400"></div>
				</div>
				{clusters}
				{nodes}
			</div>

			<div class="mt-6 flex items-center gap-4 text-xs font-mono text-stone-500">
				<div class="flex items-center gap-1">
					<div class="w-3 h-3 rounded-full bg-stone-800"></div>
					" User Tag"
				</div>
				<div class="flex items-center gap-1">
					<div class="w-3 h-3 rounded-sm bg-blue-500"></div>
					" Group A"
				</div>
				<div class="flex items-center gap-1">
					<div class="w-3 h-3 rounded-sm bg-red-500"></div>
					" Group B"
				</div>
			</div>

			<div class="mt-4 h-6 text-sm font-serif italic text-stone-600" data-status="">
				{move || status_line(toggled.get())}
			</div>
		</div>
	}
}
