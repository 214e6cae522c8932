//! Character alias groups: one main name plus interchangeable synonyms.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One group of interchangeable character names.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AliasGroup {
    /// Canonical name used in titles and descriptions.
    pub main: String,
    pub aliases: Vec<String>,
}

impl AliasGroup {
    pub fn contains(&self, name: &str) -> bool {
        self.main == name || self.aliases.iter().any(|a| a == name)
    }

    /// Main name first, then synonyms; duplicates dropped, order kept.
    pub fn names(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.aliases.len() + 1);
        for name in std::iter::once(&self.main).chain(self.aliases.iter()) {
            if !out.contains(name) {
                out.push(name.clone());
            }
        }
        out
    }
}

/// Alias configuration, kept in file order.
///
/// Stored on disk as `{ "Main": ["alias", ...] }`. A name that appears in no group
/// is treated as its own singleton group. If a malformed table lists a name in more
/// than one group, the first group wins.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AliasTable {
    groups: Vec<AliasGroup>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group. Later groups lose to earlier ones on overlapping names.
    pub fn add_group<I, S>(&mut self, main: impl Into<String>, aliases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.push(AliasGroup {
            main: main.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
        });
    }

    pub fn groups(&self) -> &[AliasGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The group containing `name`, if any.
    pub fn group_of(&self, name: &str) -> Option<&AliasGroup> {
        self.groups.iter().find(|g| g.contains(name))
    }

    /// Every name interchangeable with `name`, main name first.
    /// Returns `[name]` when the name belongs to no group.
    pub fn expand(&self, name: &str) -> Vec<String> {
        match self.group_of(name) {
            Some(group) => group.names(),
            None => vec![name.to_string()],
        }
    }

    /// Main name of the group containing `name`, or `name` unchanged.
    pub fn canonicalize<'a>(&'a self, name: &'a str) -> &'a str {
        self.group_of(name).map(|g| g.main.as_str()).unwrap_or(name)
    }
}

impl Serialize for AliasTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.main, &group.aliases)?;
        }
        map.end()
    }
}

struct AliasTableVisitor;

impl<'de> Visitor<'de> for AliasTableVisitor {
    type Value = AliasTable;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of main character names to alias lists")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AliasTable, A::Error> {
        let mut groups = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((main, aliases)) = access.next_entry::<String, Vec<String>>()? {
            groups.push(AliasGroup { main, aliases });
        }
        Ok(AliasTable { groups })
    }
}

impl<'de> Deserialize<'de> for AliasTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AliasTableVisitor)
    }
}
