use std::fmt;

/// The content panels under the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Work,
    Terminal,
    Stack,
}

impl Section {
    /// Button order.
    pub const ALL: [Section; 3] = [Section::Work, Section::Terminal, Section::Stack];

    pub fn label(self) -> &'static str {
        match self {
            Section::Work => "work",
            Section::Terminal => "terminal",
            Section::Stack => "stack",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which panel is open, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionSelector(Option<Section>);

impl SectionSelector {
    pub fn active(&self) -> Option<Section> {
        self.0
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.0 == Some(section)
    }

    /// Clicking the open panel closes it, anything else switches to it.
    pub fn select(&mut self, section: Section) {
        self.0 = if self.is_active(section) {
            None
        } else {
            Some(section)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let selector = SectionSelector::default();
        assert_eq!(selector.active(), None);
        assert!(Section::ALL.iter().all(|s| !selector.is_active(*s)));
    }

    #[test]
    fn test_select_twice_toggles_off() {
        for section in Section::ALL {
            let mut selector = SectionSelector::default();
            selector.select(section);
            assert_eq!(selector.active(), Some(section));
            selector.select(section);
            assert_eq!(selector.active(), None);
        }
    }

    #[test]
    fn test_select_other_replaces() {
        let mut selector = SectionSelector::default();
        selector.select(Section::Terminal);
        selector.select(Section::Work);
        assert_eq!(selector.active(), Some(Section::Work));
        assert!(!selector.is_active(Section::Terminal));

        selector.select(Section::Stack);
        selector.select(Section::Terminal);
        assert_eq!(selector.active(), Some(Section::Terminal));
    }

    #[test]
    fn test_labels() {
        let labels = Section::ALL.map(|s| s.to_string());
        assert_eq!(labels, ["work", "terminal", "stack"]);
    }
}
