//! Section visibility tracking for the reveal animations.
//!
//! [`VisibilityTracker`] owns the registration lifecycle of an
//! intersection observer over the six page sections; the observer's
//! callback feeds [`IntersectionEntry`] batches into a
//! [`SectionVisibility`], which in turn selects each section's reveal CSS
//! class.

mod state;
mod tracker;

pub use state::{reveal_class, IntersectionEntry, SectionVisibility};
pub use tracker::{RegionObserver, VisibilityTracker};
