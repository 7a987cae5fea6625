use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::debug;

use super::state::{DatasetKey, format_percent};
use crate::components::icons::{Icon, IconSvg};
use crate::dom;

// Overshooting ease approximates a spring (stiffness 80, damping 15).
const BAR_TRANSITION: &str = "transition: height 700ms cubic-bezier(0.34, 1.56, 0.64, 1)";

/// Baseline vs optimized error-rate bars with a three-way model selector.
#[component]
pub fn MetricChart(
	/// Dataset selected on mount.
	#[prop(default = DatasetKey::default())]
	initial: DatasetKey,
) -> impl IntoView {
	let selected = RwSignal::new(initial);
	// Bars start at zero and grow once the first frame has painted.
	let grown = RwSignal::new(false);
	dom::next_frame(move || {
		let _ = grown.try_set(true);
	});

	let values = move || selected.get().values();
	let baseline_style = move || {
		let height = if grown.get() { values().baseline_height_percent() } else { 0.0 };
		format!("height: {height}%; {BAR_TRANSITION};")
	};
	let optimized_style = move || {
		let height = if grown.get() { values().optimized_height_percent() } else { 0.0 };
		format!("height: {height}%; {BAR_TRANSITION} 100ms;")
	};

	let selectors = DatasetKey::ALL
		.into_iter()
		.map(|key| {
			let on_click = move |_: MouseEvent| {
				debug!("metric chart switched to {key:?}");
				selected.set(key);
			};
			view! {
				<button
					data-dataset=key.letter()
					on:click=on_click
					class=move || {
						if selected.get() == key {
							"px-3 py-1.5 rounded text-sm font-medium transition-all duration-200 border bg-nobel-gold text-stone-900 border-nobel-gold"
						} else {
							"px-3 py-1.5 rounded text-sm font-medium transition-all duration-200 border bg-transparent text-stone-400 border-stone-700 hover:border-stone-500 hover:text-stone-200"
						}
					}
				>
					{key.label()}
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="flex flex-col md:flex-row gap-8 items-center p-8 bg-stone-900 text-stone-100 rounded-xl my-8 border border-stone-800 shadow-lg">
			<div class="flex-1 min-w-[240px]">
				<h3 class="font-serif text-xl mb-2 text-nobel-gold">"Revenue Optimization"</h3>
				<p class="text-stone-400 text-sm mb-4 leading-relaxed">
					"Comparison of model error rates. Reducing error directly correlated to a "
					<strong>"3M yen monthly revenue increase"</strong> " in my previous role."
				</p>
				<div class="flex gap-2 mt-6">{selectors}</div>
				<div class="mt-6 font-mono text-xs text-stone-500 flex items-center gap-2">
					<IconSvg icon=Icon::BarChart size=14 class="text-nobel-gold" />
					<span>"ERROR RATE (%) - LOWER IS BETTER"</span>
				</div>
			</div>

			<div class="relative w-64 h-72 bg-stone-800/50 rounded-xl border border-stone-700/50 p-6 flex justify-around items-end">
				<div class="absolute inset-0 p-6 flex flex-col justify-between pointer-events-none opacity-10">
					<div class="w-full h-[1px] bg-stone-400"></div>
					<div class="w-full h-[1px] bg-stone-400"></div>
					<div class="w-full h-[1px] bg-stone-400"></div>
					<div class="w-full h-[1px] bg-stone-400"></div>
				</div>

				<div class="w-20 flex flex-col justify-end items-center h-full z-10">
					<div class="flex-1 w-full flex items-end justify-center relative mb-3">
						<div
							data-bar-label="baseline"
							class="absolute -top-5 w-full text-center text-sm font-mono text-stone-400 font-bold bg-stone-900/90 py-1 px-2 rounded backdrop-blur-sm border border-stone-700/50 shadow-sm"
						>
							{move || format_percent(values().baseline)}
						</div>
						<div
							data-bar="baseline"
							class="w-full bg-stone-600 rounded-t-md border-t border-x border-stone-500/30"
							style=baseline_style
						></div>
					</div>
					<div class="h-6 flex items-center text-xs font-bold text-stone-500 uppercase tracking-wider">
						"Baseline"
					</div>
				</div>

				<div class="w-20 flex flex-col justify-end items-center h-full z-10">
					<div class="flex-1 w-full flex items-end justify-center relative mb-3">
						<div
							data-bar-label="optimized"
							class="absolute -top-5 w-full text-center text-sm font-mono text-nobel-gold font-bold bg-stone-900/90 py-1 px-2 rounded backdrop-blur-sm border border-nobel-gold/30 shadow-sm"
						>
							{move || format_percent(values().optimized)}
						</div>
						<div
							data-bar="optimized"
							class="w-full bg-nobel-gold rounded-t-md shadow-[0_0_20px_rgba(197,160,89,0.25)] relative overflow-hidden"
							style=optimized_style
						>
							<div class="absolute inset-0 bg-gradient-to-tr from-transparent to-white/20"></div>
						</div>
					</div>
					<div class="h-6 flex items-center text-xs font-bold text-nobel-gold uppercase tracking-wider">
						"Optimized"
					</div>
				</div>
			</div>
		</div>
	}
}
