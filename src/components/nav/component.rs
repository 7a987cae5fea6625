use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::{debug, warn};

use super::state::{HeaderStyle, Section, scroll_to_section};
use crate::components::icons::{Icon, IconSvg};
use crate::dom::{self, BrowserScroll, ListenerGuard};
use crate::profile::PROFILE;

/// Open state of the mobile menu, provided by [`NavShell`] to the links it renders.
#[derive(Clone, Copy, Debug)]
pub struct MenuOpen(pub RwSignal<bool>);

/// Anchor that smooth-scrolls to `section` instead of jumping, closing the
/// mobile menu first when rendered inside one.
#[component]
pub fn SectionLink(
	/// Scroll target.
	section: Section,
	/// Classes of the `<a>`.
	#[prop(into, optional)]
	class: String,
	/// Link content.
	children: Children,
) -> impl IntoView {
	let menu = use_context::<MenuOpen>();
	let on_click = move |ev: MouseEvent| {
		ev.prevent_default();
		if let Some(MenuOpen(open)) = menu {
			open.set(false);
		}
		if !scroll_to_section(&BrowserScroll, section) {
			debug!("#{} is not on this page", section.id());
		}
	};

	view! {
		<a href=section.href() class=class on:click=on_click>
			{children()}
		</a>
	}
}

/// Fixed header with scroll-dependent backdrop and a slide-over menu on small screens.
#[component]
pub fn NavShell() -> impl IntoView {
	let header = RwSignal::new(HeaderStyle::for_offset(dom::scroll_offset()));
	let menu_open = RwSignal::new(false);
	provide_context(MenuOpen(menu_open));

	let listener = dom::window().and_then(|window| {
		ListenerGuard::passive(window.as_ref(), "scroll", move |_| {
			let next = HeaderStyle::for_offset(dom::scroll_offset());
			if header.get_untracked() != next {
				header.set(next);
			}
		})
	});
	match listener {
		Ok(guard) => dom::tie_to_owner(guard),
		Err(err) => warn!("header will not react to scrolling: {err}"),
	}

	let to_top = move |_: MouseEvent| {
		if let Err(err) = dom::smooth_scroll_to(0.0) {
			debug!("scroll to top skipped: {err}");
		}
	};

	let desktop_links = Section::ALL
		.into_iter()
		.map(|section| {
			view! {
				<SectionLink
					section=section
					class="hover:text-nobel-gold transition-colors cursor-pointer uppercase"
				>
					{section.label()}
				</SectionLink>
			}
		})
		.collect_view();

	view! {
		<nav class=move || header.get().nav_class()>
			<div class="container mx-auto px-6 flex justify-between items-center">
				<div class="flex items-center gap-4 cursor-pointer" on:click=to_top>
					<div class="w-8 h-8 bg-stone-900 rounded-full flex items-center justify-center text-white font-serif font-bold text-xl shadow-sm pb-1">
						{PROFILE.monogram}
					</div>
					<span class=move || header.get().brand_class()>
						{PROFILE.surname_caps}
						<span class="font-normal text-stone-500 ml-1 text-sm tracking-normal">
							{PROFILE.title_caps}
						</span>
					</span>
				</div>

				<div class="hidden md:flex items-center gap-8 text-sm font-medium tracking-wide text-stone-600">
					{desktop_links}
					<SectionLink
						section=Section::Connect
						class="px-5 py-2 bg-stone-900 text-white rounded-full hover:bg-stone-800 transition-colors shadow-sm cursor-pointer"
					>
						"Contact Me"
					</SectionLink>
				</div>

				<button
					class="md:hidden text-stone-900 p-2"
					aria-label="Toggle menu"
					aria-expanded=move || menu_open.get().to_string()
					on:click=move |_| menu_open.update(|open| *open = !*open)
				>
					{move || {
						let icon = if menu_open.get() { Icon::Close } else { Icon::Menu };
						view! { <IconSvg icon=icon /> }
					}}
				</button>
			</div>
		</nav>

		<Show when=move || menu_open.get()>
			<div class="fixed inset-0 z-40 bg-[#F9F8F4] flex flex-col items-center justify-center gap-8 text-xl font-serif animate-fade-in">
				{Section::ALL
					.into_iter()
					.map(|section| {
						view! {
							<SectionLink
								section=section
								class="hover:text-nobel-gold transition-colors cursor-pointer uppercase"
							>
								{section.label()}
							</SectionLink>
						}
					})
					.collect_view()}
				<SectionLink
					section=Section::Connect
					class="px-6 py-3 bg-stone-900 text-white rounded-full shadow-lg cursor-pointer"
				>
					"Contact Me"
				</SectionLink>
			</div>
		</Show>
	}
}
