use serde::Serialize;

pub const SITE_NAME: &str = "joeyjooste.com";
pub const SITE_URL: &str = "https://joeyjooste.com";
pub const MONOGRAM: &str = "JJ";
pub const FIRST_NAME: &str = "JOEY";
pub const LAST_NAME: &str = "JOOSTE";
pub const FULL_NAME: &str = "Joey Jooste";
pub const TAGLINE: &str =
    "software engineer. building fast things with typescript, react & go. mass bloat extinction advocate.";
pub const WHEREABOUTS: &[&str] = &["dublin, ie", "void linux", "dwm"];

pub const PAGE_SPEED_URL: &str = "https://pagespeed.web.dev/analysis?url=https://joeyjooste.com";
pub const FOOTER_NOTES: &[&str] = &["no cookies", "no tracking", "deliberately minimal"];

/// RFC 3339 timestamp stamped by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub year: &'static str,
    pub role: &'static str,
    pub place: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

impl Link {
    pub fn is_mail(&self) -> bool {
        self.href.starts_with("mailto:")
    }
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        year: "2025",
        role: "Engineer",
        place: "Fused",
        note: "AI agents",
    },
    Experience {
        year: "2024",
        role: "Co-founder",
        place: "CodeYard",
        note: "RAG before it was cool",
    },
    Experience {
        year: "2023",
        role: "Freelance",
        place: "Independent",
        note: "Golang APIs, web systems",
    },
];

pub const LINKS: &[Link] = &[
    Link {
        label: "github",
        href: "https://github.com/joeyjooste",
    },
    Link {
        label: "linkedin",
        href: "https://linkedin.com/in/joeyjooste",
    },
    Link {
        label: "email",
        href: "mailto:hello@joeyjooste.com",
    },
];

pub const STACK: &[&str] = &[
    "typescript",
    "react",
    "golang",
    "python",
    "docker",
    "sqlite",
    "linux",
    "helix",
    "git",
];

/// schema.org `Person`, emitted as JSON-LD in the page head.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Person {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    url: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    works_for: Option<Organization>,
    knows_about: &'static [&'static str],
    same_as: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct Organization {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

impl Person {
    fn from_profile() -> Self {
        let current = EXPERIENCE.first();
        Self {
            context: "https://schema.org",
            kind: "Person",
            name: FULL_NAME,
            url: SITE_URL,
            email: LINKS
                .iter()
                .find(|l| l.is_mail())
                .map(|l| l.href.trim_start_matches("mailto:")),
            job_title: current.map(|e| e.role),
            works_for: current.map(|e| Organization {
                kind: "Organization",
                name: e.place,
            }),
            knows_about: STACK,
            same_as: LINKS
                .iter()
                .filter(|l| !l.is_mail())
                .map(|l| l.href)
                .collect(),
        }
    }
}

pub fn structured_data() -> String {
    // only strings and options, serializing can't fail
    serde_json::to_string(&Person::from_profile()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_full_name_matches_hero() {
        assert_eq!(FULL_NAME.to_uppercase(), format!("{FIRST_NAME} {LAST_NAME}"));
    }

    #[test]
    fn test_links() {
        assert_eq!(
            LINKS.iter().map(|l| l.label).collect::<Vec<_>>(),
            vec!["github", "linkedin", "email"]
        );
        assert_eq!(LINKS.iter().filter(|l| l.is_mail()).count(), 1);
        assert!(LINKS
            .iter()
            .filter(|l| !l.is_mail())
            .all(|l| l.href.starts_with("https://")));
    }

    #[test]
    fn test_experience_is_newest_first() {
        let years = EXPERIENCE.iter().map(|e| e.year).collect::<Vec<_>>();
        let mut sorted = years.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(years, sorted);
    }

    #[test]
    fn test_structured_data() {
        let doc: Value =
            serde_json::from_str(&structured_data()).expect("structured data should be json");
        assert_eq!(doc["@type"], "Person");
        assert_eq!(doc["name"], "Joey Jooste");
        assert_eq!(doc["url"], SITE_URL);
        assert_eq!(doc["email"], "hello@joeyjooste.com");
        assert_eq!(doc["jobTitle"], "Engineer");
        assert_eq!(doc["worksFor"]["name"], "Fused");
        assert_eq!(
            doc["sameAs"],
            serde_json::json!([
                "https://github.com/joeyjooste",
                "https://linkedin.com/in/joeyjooste"
            ])
        );
        assert_eq!(doc["knowsAbout"].as_array().map(Vec::len), Some(STACK.len()));
    }

    #[test]
    fn test_build_time_is_stamped() {
        assert!(!BUILD_TIME.is_empty());
        assert!(BUILD_TIME.contains('T'));
    }
}
