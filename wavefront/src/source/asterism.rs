use crate::source::Source;

pub const ASTERISM_TAG: &str = "asterism";

/// Ordered collection of guide stars sharing a propagation path.
#[derive(Debug, Clone, Default)]
pub struct Asterism {
    sources: Vec<Source>,
}

impl Asterism {
    pub fn new(sources: Vec<Source>) -> Self {
        Self { sources }
    }

    pub fn tag(&self) -> &'static str {
        ASTERISM_TAG
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn sources_mut(&mut self) -> &mut [Source] {
        &mut self.sources
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Source> {
        self.sources.iter()
    }

    pub fn into_sources(self) -> Vec<Source> {
        self.sources
    }
}

impl FromIterator<Source> for Asterism {
    fn from_iter<I: IntoIterator<Item = Source>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// What an optical element acts on: one source or a whole asterism.
#[derive(Debug, Clone)]
pub enum Target {
    Source(Source),
    Asterism(Asterism),
}

impl Target {
    pub fn tag(&self) -> &'static str {
        match self {
            Target::Source(source) => source.tag(),
            Target::Asterism(asterism) => asterism.tag(),
        }
    }

    pub fn len(&self) -> usize {
        self.sources().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources().is_empty()
    }

    pub fn sources(&self) -> &[Source] {
        match self {
            Target::Source(source) => std::slice::from_ref(source),
            Target::Asterism(asterism) => asterism.sources(),
        }
    }

    /// Flat, ordered view of the individual sources.
    pub fn expand(&mut self) -> &mut [Source] {
        match self {
            Target::Source(source) => std::slice::from_mut(source),
            Target::Asterism(asterism) => asterism.sources_mut(),
        }
    }

    pub fn as_source(&self) -> Option<&Source> {
        match self {
            Target::Source(source) => Some(source),
            Target::Asterism(_) => None,
        }
    }

    pub fn as_asterism(&self) -> Option<&Asterism> {
        match self {
            Target::Asterism(asterism) => Some(asterism),
            Target::Source(_) => None,
        }
    }

    pub fn into_sources(self) -> Vec<Source> {
        match self {
            Target::Source(source) => vec![source],
            Target::Asterism(asterism) => asterism.into_sources(),
        }
    }
}

impl From<Source> for Target {
    fn from(source: Source) -> Self {
        Target::Source(source)
    }
}

impl From<Asterism> for Target {
    fn from(asterism: Asterism) -> Self {
        Target::Asterism(asterism)
    }
}
