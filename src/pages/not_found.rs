use leptos::prelude::*;

/// 404 page; the site only has a single route.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="min-h-screen bg-[#F9F8F4] flex flex-col items-center justify-center gap-6 text-stone-800">
			<h1 class="font-serif text-5xl">"Page not found"</h1>
			<a href="/" class="px-6 py-3 bg-stone-900 text-white rounded-full shadow-sm hover:bg-stone-800 transition-colors">
				"Back to the profile"
			</a>
		</div>
	}
}
