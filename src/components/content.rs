//! Small static building blocks shared by the page sections.

use leptos::prelude::*;

use crate::profile::Skill;

/// Tool-stack card; cards fade in one after another using `delay`.
#[component]
pub fn SkillCard(
	/// Card content.
	skill: Skill,
	/// CSS `animation-delay`, e.g. `0.2s`.
	#[prop(into)]
	delay: String,
) -> impl IntoView {
	view! {
		<div
			class="flex flex-col group animate-fade-in-up items-center p-8 bg-white rounded-xl border border-stone-200 shadow-sm hover:shadow-md transition-all duration-300 w-full max-w-xs hover:border-nobel-gold/50"
			style=format!("animation-delay: {delay};")
		>
			<h3 class="font-serif text-xl text-stone-900 text-center mb-3">{skill.name}</h3>
			<div class="w-12 h-0.5 bg-nobel-gold mb-4 opacity-60"></div>
			<p class="text-xs text-stone-500 font-bold uppercase tracking-widest text-center leading-relaxed">
				{skill.role}
			</p>
		</div>
	}
}

/// Small uppercase kicker above a section heading.
#[component]
pub fn Eyebrow(
	/// Kicker text.
	#[prop(into)]
	text: String,
) -> impl IntoView {
	view! {
		<div class="inline-block mb-3 text-xs font-bold tracking-widest text-stone-500 uppercase">
			{text}
		</div>
	}
}

/// Attributed pull quote with a gold rule on the left.
#[component]
pub fn QuoteCard(
	/// Quote body, without quotation marks.
	quote: &'static str,
	/// Attribution.
	author: &'static str,
) -> impl IntoView {
	view! {
		<div class="p-6 bg-[#F9F8F4] border border-stone-200 rounded-lg border-l-4 border-l-nobel-gold">
			<p class="font-serif italic text-xl text-stone-800 mb-4">{format!("\"{quote}\"")}</p>
			<span class="text-sm font-bold text-stone-500 tracking-wider uppercase">{format!("— {author}")}</span>
		</div>
	}
}
