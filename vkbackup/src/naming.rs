use std::collections::HashSet;
use std::fmt::Display;

/// Hands out file names for one backup run.
///
/// The first use of a base name returns it unchanged and registers it. Any
/// later use gets the discriminator appended to the stem. Suffixed names are
/// never registered, so two photos sharing both likes and upload date end up
/// with the same suffixed name.
#[derive(Debug, Default)]
pub struct NameDisambiguator {
    registry: HashSet<String>,
}

impl NameDisambiguator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, base_name: &str, discriminator: impl Display) -> String {
        if self.registry.contains(base_name) {
            return match base_name.rsplit_once('.') {
                Some((stem, ext)) => format!("{stem}-{discriminator}.{ext}"),
                None => format!("{base_name}-{discriminator}"),
            };
        }
        self.registry.insert(base_name.to_string());
        base_name.to_string()
    }

    #[cfg(test)]
    fn is_registered(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.registry.len()
    }
}
