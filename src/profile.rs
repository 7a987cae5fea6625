//! Static site content.

/// A tool-stack card in the "Technical Arsenal" row.
#[derive(Clone, Copy, Debug)]
pub struct Skill {
	/// Tool or language.
	pub name: &'static str,
	/// What it was used for.
	pub role: &'static str,
}

/// Footer link to an external profile.
#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
	/// Link text.
	pub label: &'static str,
	/// Absolute URL.
	pub href: &'static str,
}

/// Who the page is about.
#[derive(Clone, Copy, Debug)]
pub struct Profile {
	/// Display name.
	pub name: &'static str,
	/// Letter in the brand badge.
	pub monogram: &'static str,
	/// Surname as set in the hero and brand mark.
	pub surname_caps: &'static str,
	/// Job title.
	pub title: &'static str,
	/// Job title as set under the brand mark.
	pub title_caps: &'static str,
	/// City and country.
	pub location: &'static str,
	/// Year of arrival in Japan.
	pub since: u16,
	/// Hero subtitle.
	pub tagline: &'static str,
	/// One-sentence summary, also the meta description.
	pub summary: &'static str,
	/// Contact address.
	pub email: &'static str,
	/// Philosophy quote.
	pub quote: &'static str,
	/// Attribution of `quote`.
	pub quote_author: &'static str,
	/// Arsenal cards, in display order.
	pub skills: &'static [Skill],
	/// Footer links.
	pub socials: &'static [SocialLink],
	/// Year in the footer notice.
	pub copyright_year: u16,
}

impl Profile {
	/// `mailto:` link for the contact button.
	pub fn mailto(&self) -> String {
		format!("mailto:{}", self.email)
	}

	/// Years spent working in Japan as of the copyright year.
	pub fn years_in_japan(&self) -> u16 {
		self.copyright_year.saturating_sub(self.since)
	}
}

/// The site's content.
pub const PROFILE: Profile = Profile {
	name: "B. Dorjzodovsuren",
	monogram: "B",
	surname_caps: "DORJZODOVSUREN",
	title: "Data Scientist",
	title_caps: "DATA SCIENTIST",
	location: "Tokyo, Japan",
	since: 2016,
	tagline: "Bridging Data & Strategy",
	summary: "Experienced Data Scientist specializing in Machine Learning, Algorithmic Optimization, and Advanced Analytics.",
	email: "contact@example.com",
	quote: "The goal is to turn data into information, and information into insight.",
	quote_author: "Carly Fiorina",
	skills: &[
		Skill {
			name: "Python & SQL",
			role: "Core Stack",
		},
		Skill {
			name: "TensorFlow / PyTorch",
			role: "Deep Learning",
		},
		Skill {
			name: "Cloud Infrastructure",
			role: "AWS / GCP",
		},
		Skill {
			name: "Data Visualization",
			role: "Tableau / D3.js",
		},
	],
	socials: &[
		SocialLink {
			label: "LinkedIn",
			href: "#",
		},
		SocialLink {
			label: "GitHub",
			href: "#",
		},
		SocialLink {
			label: "ResearchGate",
			href: "#",
		},
	],
	copyright_year: 2024,
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn mailto_link() {
		assert_eq!(PROFILE.mailto(), "mailto:contact@example.com");
	}

	#[test]
	fn biography_headline_matches_dates() {
		assert!(PROFILE.years_in_japan() >= 8);
	}

	#[test]
	fn arsenal_has_four_cards() {
		assert_eq!(PROFILE.skills.len(), 4);
		assert!(PROFILE.skills.iter().all(|s| !s.name.is_empty() && !s.role.is_empty()));
	}
}
