//! Append-only record of the optical elements a source has traversed.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::source::Target;

/// Something that can appear in an optical path.
pub trait PathElement: fmt::Debug + Send + Sync + 'static {
    fn tag(&self) -> &str;

    /// Lets an inspector downcast an entry back to the concrete element.
    fn as_any(&self) -> &dyn Any;
}

/// An optical element that acts on sources.
pub trait Relay: Send + Sync {
    fn relay(&self, target: &mut Target) -> Result<()>;
}

/// Relay `target` through `elements` in order, stopping at the first failure.
pub fn propagate(target: &mut Target, elements: &[&dyn Relay]) -> Result<()> {
    for (idx, element) in elements.iter().enumerate() {
        tracing::debug!(step = idx, target = target.tag(), "Relaying through element");
        element.relay(target)?;
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct PathEntry {
    tag: String,
    element: Arc<dyn PathElement>,
}

impl PathEntry {
    pub fn new(element: Arc<dyn PathElement>) -> Self {
        Self {
            tag: element.tag().to_string(),
            element,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn element(&self) -> &Arc<dyn PathElement> {
        &self.element
    }

    pub fn downcast<T: PathElement>(&self) -> Option<&T> {
        self.element.as_any().downcast_ref::<T>()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OpticalPath {
    entries: Vec<PathEntry>,
}

impl OpticalPath {
    pub fn push(&mut self, entry: PathEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&PathEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathEntry> {
        self.entries.iter()
    }

    pub fn tags(&self) -> Vec<&str> {
        self.entries.iter().map(PathEntry::tag).collect()
    }
}

impl<'a> IntoIterator for &'a OpticalPath {
    type Item = &'a PathEntry;
    type IntoIter = std::slice::Iter<'a, PathEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Marker(&'static str);

    impl PathElement for Marker {
        fn tag(&self) -> &str {
            self.0
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[derive(Debug)]
    struct Other;

    impl PathElement for Other {
        fn tag(&self) -> &str {
            "other"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut path = OpticalPath::default();
        for tag in ["atmosphere", "telescope", "EM_shift"] {
            path.push(PathEntry::new(Arc::new(Marker(tag))));
        }
        assert_eq!(path.tags(), vec!["atmosphere", "telescope", "EM_shift"]);
        assert_eq!(path.last().unwrap().tag(), "EM_shift");
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn downcast_recovers_concrete_element() {
        let entry = PathEntry::new(Arc::new(Marker("telescope")));
        assert_eq!(entry.downcast::<Marker>().unwrap().0, "telescope");
        assert!(entry.downcast::<Other>().is_none());
    }

    #[test]
    fn cloned_entries_share_the_element() {
        let entry = PathEntry::new(Arc::new(Other));
        let copy = entry.clone();
        assert!(Arc::ptr_eq(entry.element(), copy.element()));
    }
}
