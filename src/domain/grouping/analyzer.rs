//! Grouping analyzer - infers intent groups from source name prefixes.
//!
//! Pure analysis over a list of raw intent identifiers (training-phrase file
//! names with their language suffix removed). Never touches the filesystem.

use super::NamingScheme;

/// Outcome of grouping analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognizedGroups {
    /// Prefix groups with at least two members, in first-seen order.
    pub prefixes: Vec<String>,
    /// True when at least two identifiers ended up ungrouped.
    pub includes_default: bool,
}

impl RecognizedGroups {
    /// No grouping at all: every intent is independent.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if nothing was recognized.
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty() && !self.includes_default
    }

    /// Number of recognized groups, the default group included.
    pub fn len(&self) -> usize {
        self.prefixes.len() + usize::from(self.includes_default)
    }
}

/// Infers the recognized groups for a set of raw identifiers.
///
/// Each identifier is split once on the group separator. A left-hand side
/// seen at least twice becomes a group; singletons and identifiers without a
/// separator count as ungrouped. Two or more ungrouped identifiers enable the
/// default group. A lone group with nothing ungrouped is discarded, since a
/// single namespace cannot distinguish anything.
pub fn analyze_groups<I, S>(scheme: &NamingScheme, identifiers: I) -> RecognizedGroups
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tallies: Vec<(String, usize)> = Vec::new();
    let mut ungrouped = 0usize;

    for identifier in identifiers {
        let identifier = identifier.as_ref();
        match identifier.split_once(scheme.group_separator) {
            // A leading separator yields no usable prefix
            Some((prefix, _)) if !prefix.is_empty() => {
                match tallies.iter_mut().find(|(seen, _)| seen == prefix) {
                    Some((_, count)) => *count += 1,
                    None => tallies.push((prefix.to_string(), 1)),
                }
            }
            _ => ungrouped += 1,
        }
    }

    let mut prefixes = Vec::new();
    for (prefix, count) in tallies {
        if count >= 2 {
            prefixes.push(prefix);
        } else {
            ungrouped += count;
        }
    }

    let includes_default = ungrouped >= 2;
    let groups = RecognizedGroups {
        prefixes,
        includes_default,
    };

    if groups.len() == 1 && ungrouped == 0 {
        return RecognizedGroups::none();
    }
    groups
}
