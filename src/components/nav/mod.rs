//! Fixed header, section links and smooth scrolling.

mod component;
mod state;

pub use component::{MenuOpen, NavShell, SectionLink};
pub use state::{
	HEADER_OFFSET, HeaderStyle, SCROLL_THRESHOLD, ScrollHost, Section, scroll_target,
	scroll_to_section,
};
