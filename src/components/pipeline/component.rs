use leptos::prelude::*;
use log::{debug, warn};

use super::state::{INPUT_CELLS, PhaseTask, PipelinePhase, Stage};
use crate::components::icons::{Icon, IconSvg};
use crate::dom::{self, BrowserScheduler};

fn box_class(shape: &str, active: bool, active_class: &str) -> String {
	let tone = if active { active_class } else { "border-stone-200 bg-stone-50" };
	format!(
		"{shape} border-2 flex flex-col items-center justify-center transition-colors duration-500 {tone}"
	)
}

/// Four-phase "input → transformer → output" animation on a 2 s timer.
#[component]
pub fn PipelineAnimator() -> impl IntoView {
	let phase = RwSignal::new(PipelinePhase::default());

	match PhaseTask::start(&BrowserScheduler, move || phase.update(|p| *p = p.next())) {
		Ok(task) => {
			debug!("pipeline animator started");
			dom::tie_to_owner(task);
		}
		Err(err) => warn!("pipeline animator left static: {err}"),
	}

	let stage_is = move |stage: Stage| phase.get().stage() == stage;
	let arrow_style = move |lit: bool| {
		if lit {
			"opacity: 1; transform: translateX(0);"
		} else {
			"opacity: 0.3; transform: translateX(-5px);"
		}
	};

	view! {
		<div class="flex flex-col items-center p-8 bg-[#F5F4F0] rounded-xl border border-stone-200 my-8">
			<h3 class="font-serif text-xl mb-4 text-stone-900">"Deep Learning Pipeline"</h3>
			<p class="text-sm text-stone-600 mb-6 text-center max-w-md">
				"Visualizing the architecture used for Mongolian-Llama3 and Stable Diffusion image generation."
			</p>

			<div class="relative w-full max-w-lg h-56 bg-white rounded-lg shadow-inner overflow-hidden mb-6 border border-stone-200 flex items-center justify-center gap-8 p-4">
				<div class="flex flex-col items-center gap-2" data-stage="input">
					<div class=move || {
						box_class(
							"w-16 h-16 rounded-lg",
							stage_is(Stage::Input),
							"border-nobel-gold bg-nobel-gold/10",
						)
					}>
						<div class="grid grid-cols-3 gap-1">
							{(0..INPUT_CELLS)
								.map(|cell| {
									view! {
										<div
											data-cell=cell.to_string()
											class=move || {
												if phase.get().input_dot_filled(cell) {
													"w-2 h-2 rounded-full bg-stone-800"
												} else {
													"w-2 h-2 rounded-full bg-stone-300"
												}
											}
										></div>
									}
								})
								.collect_view()}
						</div>
					</div>
					<span class="text-[10px] uppercase font-bold tracking-wider text-stone-500">"Input Data"</span>
				</div>

				<div class="transition-all duration-500" style=move || arrow_style(phase.get().feeds_transformer())>
					"→"
				</div>

				<div class="flex flex-col items-center gap-2" data-stage="transformer">
					<div class=move || {
						box_class(
							"w-24 h-24 rounded-xl gap-2 relative overflow-hidden",
							stage_is(Stage::Transformer),
							"border-stone-800 bg-stone-900 text-white",
						)
					}>
						{move || {
							let class = if stage_is(Stage::Transformer) {
								"text-nobel-gold animate-pulse"
							} else {
								"text-stone-300"
							};
							view! { <IconSvg icon=Icon::Cpu size=24 class=class /> }
						}}
						<Show when=move || phase.get().is_scanning()>
							<div class="absolute inset-0 flex items-center justify-center">
								<div class="w-full h-[1px] bg-nobel-gold absolute top-1/3 animate-ping"></div>
								<div class="w-full h-[1px] bg-nobel-gold absolute top-2/3 animate-ping delay-75"></div>
							</div>
						</Show>
					</div>
					<span class="text-[10px] uppercase font-bold tracking-wider text-stone-500">"Transformer"</span>
				</div>

				<div class="transition-all duration-500" style=move || arrow_style(phase.get().feeds_output())>
					"→"
				</div>

				<div class="flex flex-col items-center gap-2" data-stage="output">
					<div class=move || {
						box_class("w-16 h-16 rounded-lg", stage_is(Stage::Output), "border-green-500 bg-green-50")
					}>
						<Show
							when=move || stage_is(Stage::Output)
							fallback=|| view! { <span class="text-2xl font-serif text-stone-300">"..."</span> }
						>
							<span class="text-2xl font-serif text-green-600">"✔"</span>
						</Show>
					</div>
					<span class="text-[10px] uppercase font-bold tracking-wider text-stone-500">"Output"</span>
				</div>
			</div>

			<div class="flex gap-2">
				{PipelinePhase::ALL
					.into_iter()
					.map(|step| {
						view! {
							<div
								data-phase=step.index().to_string()
								class=move || {
									if phase.get() == step {
										"h-1 rounded-full transition-all duration-300 w-8 bg-nobel-gold"
									} else {
										"h-1 rounded-full transition-all duration-300 w-2 bg-stone-300"
									}
								}
							></div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}
