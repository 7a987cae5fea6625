//! Inline stroke icons (24×24 viewbox, `currentColor`), drawn after the Lucide set.

use leptos::prelude::*;

/// Glyphs used across the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
	/// Pulse line, on toggled graph nodes.
	Activity,
	/// Scroll hint under the hero.
	ArrowDown,
	/// Metric chart caption.
	BarChart,
	/// Deep-learning section.
	Brain,
	/// Open mobile menu.
	Close,
	/// Transformer stage.
	Cpu,
	/// Network-analysis section.
	Database,
	/// Location line in the hero.
	MapPin,
	/// Closed mobile menu.
	Menu,
	/// Contact button.
	Rocket,
}

fn glyph(icon: Icon) -> AnyView {
	match icon {
		Icon::Activity => view! { <path d="M22 12h-4l-3 9L9 3l-3 9H2" /> }.into_any(),
		Icon::ArrowDown => view! {
			<path d="M12 5v14" />
			<path d="m19 12-7 7-7-7" />
		}
		.into_any(),
		Icon::BarChart => view! {
			<line x1="18" x2="18" y1="20" y2="10" />
			<line x1="12" x2="12" y1="20" y2="4" />
			<line x1="6" x2="6" y1="20" y2="14" />
		}
		.into_any(),
		Icon::Brain => view! {
			<path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z" />
			<path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z" />
			<path d="M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4" />
		}
		.into_any(),
		Icon::Close => view! {
			<path d="M18 6 6 18" />
			<path d="m6 6 12 12" />
		}
		.into_any(),
		Icon::Cpu => view! {
			<rect width="16" height="16" x="4" y="4" rx="2" />
			<rect width="6" height="6" x="9" y="9" rx="1" />
			<path d="M15 2v2M15 20v2M2 15h2M2 9h2M20 15h2M20 9h2M9 2v2M9 20v2" />
		}
		.into_any(),
		Icon::Database => view! {
			<ellipse cx="12" cy="5" rx="9" ry="3" />
			<path d="M3 5V19A9 3 0 0 0 21 19V5" />
			<path d="M3 12A9 3 0 0 0 21 12" />
		}
		.into_any(),
		Icon::MapPin => view! {
			<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
			<circle cx="12" cy="10" r="3" />
		}
		.into_any(),
		Icon::Menu => view! {
			<line x1="4" x2="20" y1="12" y2="12" />
			<line x1="4" x2="20" y1="6" y2="6" />
			<line x1="4" x2="20" y1="18" y2="18" />
		}
		.into_any(),
		Icon::Rocket => view! {
			<path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z" />
			<path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z" />
			<path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0" />
			<path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5" />
		}
		.into_any(),
	}
}

/// Render `icon` at `size` px square.
#[component]
pub fn IconSvg(
	/// Glyph to draw.
	icon: Icon,
	/// Edge length in px.
	#[prop(default = 24)]
	size: u32,
	/// Extra classes, usually a text colour.
	#[prop(into, optional)]
	class: String,
) -> impl IntoView {
	let size = size.to_string();
	view! {
		<svg
			xmlns="http://www.w3.org/2000/svg"
			width=size.clone()
			height=size
			viewBox="0 0 24 24"
			fill="none"
			stroke="currentColor"
			stroke-width="2"
			stroke-linecap="round"
			stroke-linejoin="round"
			class=class
			aria-hidden="true"
		>
			{glyph(icon)}
		</svg>
	}
}
