use leptos::prelude::*;

use crate::components::content::{Eyebrow, QuoteCard, SkillCard};
use crate::components::icons::{Icon, IconSvg};
use crate::components::metric_chart::MetricChart;
use crate::components::nav::{NavShell, Section, SectionLink};
use crate::components::network_scene::{NetworkScene, SceneTheme, random_tree, skill_constellation};
use crate::components::pipeline::PipelineAnimator;
use crate::components::relationship_graph::RelationshipGraph;
use crate::profile::PROFILE;

#[component]
fn Hero() -> impl IntoView {
	let constellation = Signal::derive(move || skill_constellation(36));

	view! {
		<header class="relative h-screen flex items-center justify-center overflow-hidden">
			<div class="absolute inset-0 z-0">
				<NetworkScene graph=constellation theme=SceneTheme::Paper />
			</div>
			<div class="absolute inset-0 z-0 pointer-events-none bg-[radial-gradient(circle_at_center,rgba(249,248,244,0.92)_0%,rgba(249,248,244,0.6)_50%,rgba(249,248,244,0.3)_100%)]"></div>

			<div class="relative z-10 container mx-auto px-6 text-center pointer-events-none">
				<div class="inline-flex items-center gap-2 mb-6 px-4 py-1.5 border border-nobel-gold text-nobel-gold text-xs tracking-[0.2em] uppercase font-bold rounded-full backdrop-blur-sm bg-white/50">
					<IconSvg icon=Icon::MapPin size=12 />
					{format!("{} • Since {}", PROFILE.location, PROFILE.since)}
				</div>
				<h1 class="font-serif text-5xl md:text-7xl lg:text-8xl font-medium leading-tight md:leading-[1.1] mb-6 text-stone-900 drop-shadow-sm">
					{PROFILE.name}
					<br />
					<span class="italic font-normal text-stone-600 text-3xl md:text-4xl block mt-4">
						{PROFILE.tagline}
					</span>
				</h1>
				<p class="max-w-2xl mx-auto text-lg md:text-xl text-stone-700 font-light leading-relaxed mb-12">
					{PROFILE.summary}
				</p>
				<div class="flex justify-center pointer-events-auto">
					<SectionLink
						section=Section::About
						class="group flex flex-col items-center gap-2 text-sm font-medium text-stone-500 hover:text-stone-900 transition-colors cursor-pointer"
					>
						<span>"VIEW PROFILE"</span>
						<span class="p-2 border border-stone-300 rounded-full group-hover:border-stone-900 transition-colors bg-white/50">
							<IconSvg icon=Icon::ArrowDown size=16 />
						</span>
					</SectionLink>
				</div>
			</div>
		</header>
	}
}

#[component]
fn About() -> impl IntoView {
	view! {
		<section id=Section::About.id() class="py-24 bg-white">
			<div class="container mx-auto px-6 md:px-12 grid grid-cols-1 md:grid-cols-12 gap-12 items-start">
				<div class="md:col-span-4">
					<Eyebrow text="Biography" />
					<h2 class="font-serif text-4xl mb-6 leading-tight text-stone-900">
						{format!("{}+ Years in Japan", PROFILE.years_in_japan())}
					</h2>
					<div class="w-16 h-1 bg-nobel-gold mb-6"></div>
				</div>
				<div class="md:col-span-8 text-lg text-stone-600 leading-relaxed space-y-6">
					<p>
						<span class="text-5xl float-left mr-3 mt-[-8px] font-serif text-nobel-gold">"W"</span>
						"ith over eight years of professional experience in Japan, I have cultivated a deep understanding of both advanced data science methodologies and the nuances of the Japanese tech landscape."
					</p>
					<p>
						"My work focuses on translating complex datasets into actionable strategic insights. Whether it's optimizing large-scale networks, deploying production-grade machine learning models, or analyzing customer behavior, I bring a rigorous, analytical approach to solving business challenges."
					</p>
				</div>
			</div>
		</section>
	}
}

#[component]
fn NetworkExpertise() -> impl IntoView {
	view! {
		<section id=Section::Expertise.id() class="py-24 bg-white border-t border-stone-100">
			<div class="container mx-auto px-6">
				<div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
					<div>
						<div class="inline-flex items-center gap-2 px-3 py-1 bg-stone-100 text-stone-600 text-xs font-bold tracking-widest uppercase rounded-full mb-6 border border-stone-200">
							<IconSvg icon=Icon::Database size=14 />
							"CORE COMPETENCY"
						</div>
						<h2 class="font-serif text-4xl md:text-5xl mb-6 text-stone-900">"Network Analysis"</h2>
						<p class="text-lg text-stone-600 mb-6 leading-relaxed">
							"Understanding the relationships between data points is crucial. I specialize in Graph Theory and Network Analysis to uncover hidden structures within complex systems."
						</p>
						<p class="text-lg text-stone-600 mb-6 leading-relaxed">
							"By identifying key nodes and anomaly patterns (represented here by the interactive visualization) I help organizations detect fraud, optimize logistics, and improve system resilience."
						</p>
					</div>
					<div>
						<RelationshipGraph />
					</div>
				</div>
			</div>
		</section>
	}
}

#[component]
fn LearningExpertise() -> impl IntoView {
	view! {
		<section class="py-24 bg-stone-900 text-stone-100 overflow-hidden relative">
			<div class="absolute top-0 left-0 w-full h-full opacity-10 pointer-events-none">
				<div class="w-96 h-96 rounded-full bg-stone-600 blur-[100px] absolute top-[-100px] left-[-100px]"></div>
				<div class="w-96 h-96 rounded-full bg-nobel-gold blur-[100px] absolute bottom-[-100px] right-[-100px]"></div>
			</div>

			<div class="container mx-auto px-6 relative z-10">
				<div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
					<div class="order-2 lg:order-1">
						<PipelineAnimator />
					</div>
					<div class="order-1 lg:order-2">
						<div class="inline-flex items-center gap-2 px-3 py-1 bg-stone-800 text-nobel-gold text-xs font-bold tracking-widest uppercase rounded-full mb-6 border border-stone-700">
							<IconSvg icon=Icon::Brain size=14 />
							"MACHINE LEARNING"
						</div>
						<h2 class="font-serif text-4xl md:text-5xl mb-6 text-white">"Deep Learning Architectures"</h2>
						<p class="text-lg text-stone-400 mb-6 leading-relaxed">
							"From Recurrent Neural Networks to modern Transformers, I design and deploy architectures that handle sequential data and natural language with high precision."
						</p>
						<p class="text-lg text-stone-400 leading-relaxed">
							"My expertise includes building pipelines that ingest raw data (features), process them through multi-layer attention mechanisms, and output predictive insights with quantified confidence levels."
						</p>
					</div>
				</div>
			</div>
		</section>
	}
}

#[component]
fn Performance() -> impl IntoView {
	view! {
		<section class="py-24 bg-[#F9F8F4]">
			<div class="container mx-auto px-6">
				<div class="max-w-4xl mx-auto text-center mb-12">
					<h2 class="font-serif text-4xl md:text-5xl mb-6 text-stone-900">"Measurable Performance"</h2>
					<p class="text-lg text-stone-600 leading-relaxed">
						"Data Science is ultimately about results. I consistently deliver optimization models that outperform standard industry baselines, reducing error rates and increasing efficiency across varied domains."
					</p>
				</div>
				<div class="max-w-3xl mx-auto">
					<MetricChart />
				</div>
			</div>
		</section>
	}
}

#[component]
fn Impact() -> impl IntoView {
	let environment = Signal::derive(move || random_tree(48));

	view! {
		<section id=Section::Impact.id() class="py-24 bg-white border-t border-stone-200">
			<div class="container mx-auto px-6 grid grid-cols-1 md:grid-cols-12 gap-12">
				<div class="md:col-span-5 relative">
					<div class="aspect-square bg-[#F5F4F0] rounded-xl overflow-hidden relative border border-stone-200 shadow-inner">
						<NetworkScene graph=environment theme=SceneTheme::Inset />
						<div class="absolute bottom-4 left-0 right-0 text-center text-xs text-stone-400 font-serif italic pointer-events-none">
							"Modeling complex environments"
						</div>
					</div>
				</div>
				<div class="md:col-span-7 flex flex-col justify-center">
					<Eyebrow text="PHILOSOPHY" />
					<h2 class="font-serif text-4xl mb-6 text-stone-900">"Data-Driven Decisions"</h2>
					<p class="text-lg text-stone-600 mb-6 leading-relaxed">
						"I believe that the most powerful algorithms are those that solve concrete human problems. Living and working in Tokyo's dynamic environment has taught me the value of precision, context, and long-term thinking."
					</p>
					<p class="text-lg text-stone-600 mb-8 leading-relaxed">
						"My approach combines rigorous statistical analysis with modern AI to build systems that are not just theoretically sound, but robust enough for real-world deployment."
					</p>
					<QuoteCard quote=PROFILE.quote author=PROFILE.quote_author />
				</div>
			</div>
		</section>
	}
}

#[component]
fn Connect() -> impl IntoView {
	let cards = PROFILE
		.skills
		.iter()
		.enumerate()
		.map(|(i, &skill)| view! { <SkillCard skill=skill delay=format!("{:.1}s", i as f64 * 0.1) /> })
		.collect_view();

	view! {
		<section id=Section::Connect.id() class="py-24 bg-[#F5F4F0] border-t border-stone-300">
			<div class="container mx-auto px-6">
				<div class="text-center mb-16">
					<Eyebrow text="GET IN TOUCH" />
					<h2 class="font-serif text-3xl md:text-5xl mb-4 text-stone-900">"Technical Arsenal"</h2>
					<p class="text-stone-500 max-w-2xl mx-auto">
						"Leveraging a comprehensive stack to deliver end-to-end data solutions."
					</p>
				</div>

				<div class="flex flex-col md:flex-row gap-8 justify-center items-center flex-wrap">{cards}</div>

				<div class="text-center mt-20">
					<a
						href=PROFILE.mailto()
						class="inline-flex items-center gap-2 px-8 py-4 bg-stone-900 text-white rounded-full text-lg font-medium hover:bg-stone-800 transition-all shadow-lg hover:shadow-xl transform hover:-translate-y-1"
					>
						<IconSvg icon=Icon::Rocket size=20 />
						"Let's Collaborate"
					</a>
				</div>
			</div>
		</section>
	}
}

#[component]
fn Footer() -> impl IntoView {
	view! {
		<footer class="bg-stone-900 text-stone-400 py-16">
			<div class="container mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-8">
				<div class="text-center md:text-left">
					<div class="text-white font-serif font-bold text-2xl mb-2">{PROFILE.name}</div>
					<p class="text-sm">{format!("{} • {}", PROFILE.title, PROFILE.location)}</p>
				</div>
				<div class="flex gap-6 text-sm">
					{PROFILE
						.socials
						.iter()
						.map(|link| {
							view! {
								<a href=link.href class="hover:text-nobel-gold transition-colors">
									{link.label}
								</a>
							}
						})
						.collect_view()}
				</div>
			</div>
			<div class="text-center mt-12 text-xs text-stone-600">
				{format!("© {} {}. All Rights Reserved.", PROFILE.copyright_year, PROFILE.name)}
			</div>
		</footer>
	}
}

/// The whole portfolio, top to bottom.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="min-h-screen bg-[#F9F8F4] text-stone-800 selection:bg-nobel-gold selection:text-white">
				<NavShell />
				<Hero />
				<main>
					<About />
					<NetworkExpertise />
					<LearningExpertise />
					<Performance />
					<Impact />
					<Connect />
				</main>
				<Footer />
			</div>
		</ErrorBoundary>
	}
}
