use crate::section::SectionId;

/// One change notification from the intersection observer.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    /// DOM id of the observed element.
    pub target_id: String,
    /// Whether the element now crosses the observer threshold.
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Convenience constructor.
    pub fn new(target_id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            target_id: target_id.into(),
            is_intersecting,
        }
    }
}

/// Per-section "currently visible" flags.
///
/// Backed by a fixed array indexed by [`SectionId::index`], so the set of
/// keys is always exactly the six sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionVisibility {
    flags: [bool; SectionId::COUNT],
}

impl SectionVisibility {
    /// All sections hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `section` is currently visible.
    #[must_use]
    pub fn is_visible(&self, section: SectionId) -> bool {
        self.flags[section.index()]
    }

    /// Set the flag for `section`.
    pub fn set(&mut self, section: SectionId, visible: bool) {
        self.flags[section.index()] = visible;
    }

    /// Apply one observer entry. Entries for ids outside the catalogue are
    /// ignored. Returns `true` if a flag changed.
    pub fn apply(&mut self, entry: &IntersectionEntry) -> bool {
        let Some(section) = SectionId::from_dom_id(&entry.target_id) else {
            log::trace!("ignoring intersection for unknown id {}", entry.target_id);
            return false;
        };
        let changed = self.is_visible(section) != entry.is_intersecting;
        self.set(section, entry.is_intersecting);
        changed
    }

    /// Apply a batch of entries in order. Returns `true` if any flag
    /// changed.
    pub fn apply_all(&mut self, entries: &[IntersectionEntry]) -> bool {
        entries
            .iter()
            .fold(false, |changed, entry| self.apply(entry) || changed)
    }

    /// Iterate `(section, visible)` pairs in page order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, bool)> + '_ {
        SectionId::ALL.into_iter().map(|s| (s, self.is_visible(s)))
    }

    /// CSS class list for a section's reveal wrapper.
    #[must_use]
    pub fn reveal_class(&self, section: SectionId) -> &'static str {
        reveal_class(self.is_visible(section))
    }
}

/// CSS class list for a reveal wrapper in the given state. The stylesheet
/// fades and slides `.reveal` elements in once `.visible` is added.
#[must_use]
pub const fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal visible"
    } else {
        "reveal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_hidden() {
        let vis = SectionVisibility::new();
        assert!(vis.iter().all(|(_, v)| !v));
        assert_eq!(vis.iter().count(), 6);
    }

    #[test]
    fn entering_sets_only_that_flag() {
        for section in SectionId::ALL {
            let mut vis = SectionVisibility::new();
            assert!(vis.apply(&IntersectionEntry::new(section.as_str(), true)));
            for (other, visible) in vis.iter() {
                assert_eq!(visible, other == section, "{other} after {section}");
            }
        }
    }

    #[test]
    fn leaving_clears_the_flag() {
        for section in SectionId::ALL {
            let mut vis = SectionVisibility::new();
            let _ = vis.apply(&IntersectionEntry::new(section.as_str(), true));
            assert!(vis.apply(&IntersectionEntry::new(section.as_str(), false)));
            assert!(!vis.is_visible(section));
            assert_eq!(vis, SectionVisibility::new());
        }
    }

    #[test]
    fn unknown_id_is_ignored() {
        let mut vis = SectionVisibility::new();
        vis.set(SectionId::Skills, true);
        let before = vis;
        assert!(!vis.apply(&IntersectionEntry::new("contact", true)));
        assert!(!vis.apply(&IntersectionEntry::new("skills-extra", false)));
        assert_eq!(vis, before);
    }

    #[test]
    fn batch_reports_change_and_keeps_last_state() {
        let mut vis = SectionVisibility::new();
        let entries = [
            IntersectionEntry::new("projects", true),
            IntersectionEntry::new("education", true),
            IntersectionEntry::new("projects", false),
        ];
        assert!(vis.apply_all(&entries));
        assert!(!vis.is_visible(SectionId::Projects));
        assert!(vis.is_visible(SectionId::Education));
        // Re-applying an identical state is not a change.
        assert!(!vis.apply_all(&[IntersectionEntry::new("education", true)]));
    }

    #[test]
    fn reveal_class_follows_flag() {
        let mut vis = SectionVisibility::new();
        assert_eq!(vis.reveal_class(SectionId::Summary), "reveal");
        vis.set(SectionId::Summary, true);
        assert_eq!(vis.reveal_class(SectionId::Summary), "reveal visible");
    }
}
