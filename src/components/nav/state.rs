/// Scroll offset beyond which the header turns solid.
pub const SCROLL_THRESHOLD: f64 = 50.0;
/// Height reserved for the fixed header when scrolling to a section.
pub const HEADER_OFFSET: f64 = 100.0;

/// Backdrop of the fixed navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderStyle {
	/// At the top of the page.
	#[default]
	Transparent,
	/// Scrolled past [`SCROLL_THRESHOLD`].
	Solid,
}

impl HeaderStyle {
	/// Style for a page scrolled to `scroll_y`.
	pub fn for_offset(scroll_y: f64) -> Self {
		if scroll_y > SCROLL_THRESHOLD {
			HeaderStyle::Solid
		} else {
			HeaderStyle::Transparent
		}
	}

	/// Classes of the `<nav>` element.
	pub fn nav_class(self) -> &'static str {
		match self {
			HeaderStyle::Solid => {
				"fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-[#F9F8F4]/90 backdrop-blur-md shadow-sm py-4"
			}
			HeaderStyle::Transparent => {
				"fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent py-6"
			}
		}
	}

	/// The wordmark is hidden on small screens until the header turns solid.
	pub fn brand_class(self) -> &'static str {
		match self {
			HeaderStyle::Solid => "font-serif font-bold text-lg tracking-wide transition-opacity opacity-100",
			HeaderStyle::Transparent => {
				"font-serif font-bold text-lg tracking-wide transition-opacity opacity-0 md:opacity-100"
			}
		}
	}
}

/// Anchored page sections reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
	/// Biography.
	About,
	/// Network and deep-learning expertise.
	Expertise,
	/// Philosophy and impact.
	Impact,
	/// Skills arsenal and contact.
	Connect,
}

impl Section {
	/// Navigation order.
	pub const ALL: [Section; 4] = [
		Section::About,
		Section::Expertise,
		Section::Impact,
		Section::Connect,
	];

	/// DOM id of the section element.
	pub fn id(self) -> &'static str {
		match self {
			Section::About => "about",
			Section::Expertise => "expertise",
			Section::Impact => "impact",
			Section::Connect => "connect",
		}
	}

	/// Navigation link text.
	pub fn label(self) -> &'static str {
		match self {
			Section::About => "About",
			Section::Expertise => "Expertise",
			Section::Impact => "Impact",
			Section::Connect => "Connect",
		}
	}

	/// In-page anchor, e.g. `#about`.
	pub fn href(self) -> String {
		format!("#{}", self.id())
	}
}

/// The scrolling surface the shell drives.
pub trait ScrollHost {
	/// Current vertical scroll offset of the page.
	fn scroll_offset(&self) -> f64;
	/// Top of the element with `id`, relative to the viewport, if it exists.
	fn element_top(&self, id: &str) -> Option<f64>;
	/// Begin a smooth scroll to the absolute page offset `top`.
	fn smooth_scroll_to(&self, top: f64);
}

/// Page offset that leaves an element with viewport top `element_top`
/// exactly [`HEADER_OFFSET`] below the top of the viewport.
pub fn scroll_target(element_top: f64, scroll_offset: f64) -> f64 {
	element_top + scroll_offset - HEADER_OFFSET
}

/// Smooth-scroll to `section`. Returns `false`, touching nothing, when the
/// section element is absent.
pub fn scroll_to_section(host: &impl ScrollHost, section: Section) -> bool {
	let Some(top) = host.element_top(section.id()) else {
		return false;
	};
	host.smooth_scroll_to(scroll_target(top, host.scroll_offset()));
	true
}
