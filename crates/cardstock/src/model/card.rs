//! Card model: property indices, mutation, and validation.

use super::parameter::Parameter;
use super::property::Property;
use crate::build;
use crate::error::{EncodingError, EncodingResult};

/// Options for a new card.
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// vCard version string written on serialization.
    pub version: String,
    /// Column at which [`Card::to_folded_string`] wraps output lines.
    pub wrap_column: usize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            version: "4.0".to_string(),
            wrap_column: 75,
        }
    }
}

/// One field slot: all properties sharing a name, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldEntry {
    name: String,
    props: Vec<Property>,
}

/// One group slot: the field names tagged with a group label, one entry per
/// tagged property, in tag-insertion order. [`Card::group`] reads this
/// index; it is maintained incrementally, never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GroupEntry {
    name: String,
    members: Vec<String>,
}

/// A contact card.
///
/// Owns an insertion-ordered mapping from lowercase property name to the
/// ordered list of properties under that name (duplicates allowed, e.g.
/// multiple `email` entries), plus a derived group index maintained
/// incrementally as properties are added and removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    version: Option<String>,
    wrap_column: usize,
    fields: Vec<FieldEntry>,
    groups: Vec<GroupEntry>,
}

impl Card {
    /// Creates an empty vCard 4.0.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CardConfig::default())
    }

    /// Creates an empty card with the given options.
    #[must_use]
    pub fn with_config(config: CardConfig) -> Self {
        Self {
            version: Some(config.version),
            wrap_column: config.wrap_column,
            fields: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Returns the card's version string, if set.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Sets the card's version string.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    /// Strict parsing unsets the version so a missing VERSION line is
    /// detectable.
    pub(crate) fn clear_version(&mut self) {
        self.version = None;
    }

    /// Returns the column used by [`Card::to_folded_string`].
    #[must_use]
    pub fn wrap_column(&self) -> usize {
        self.wrap_column
    }

    /// Adds a field from positional values.
    ///
    /// A single value yields a scalar property, several values become
    /// structured components. If every value is empty, nothing is added.
    pub fn add(&mut self, name: &str, values: &[&str]) {
        self.add_with_params(name, values, Vec::new());
    }

    /// Adds a field with parameters. A no-op when every value is empty.
    pub fn add_with_params(&mut self, name: &str, values: &[&str], params: Vec<Parameter>) {
        if let Some(prop) = Property::create(name, values, params) {
            self.add_property(prop);
        }
    }

    /// Adds a field tagged with a group label. A no-op when every value is
    /// empty.
    pub fn add_in_group(&mut self, group: &str, name: &str, values: &[&str]) {
        if let Some(prop) = Property::create(name, values, Vec::new()) {
            self.add_property(prop.with_group(group));
        }
    }

    /// Adds an already-built property, updating the name and group indices.
    pub fn add_property(&mut self, prop: Property) {
        if let Some(group) = &prop.group {
            match self.groups.iter_mut().find(|g| &g.name == group) {
                Some(entry) => entry.members.push(prop.name.clone()),
                None => self.groups.push(GroupEntry {
                    name: group.clone(),
                    members: vec![prop.name.clone()],
                }),
            }
        }

        match self.fields.iter_mut().find(|f| f.name == prop.name) {
            Some(entry) => entry.props.push(prop),
            None => self.fields.push(FieldEntry {
                name: prop.name.clone(),
                props: vec![prop],
            }),
        }
    }

    /// Returns all properties stored under `name` (case-insensitive), in
    /// insertion order.
    #[must_use]
    pub fn field(&self, name: &str) -> &[Property] {
        let name = name.to_ascii_lowercase();
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map_or(&[], |f| f.props.as_slice())
    }

    /// Returns the properties of `name` whose group equals `group`.
    #[must_use]
    pub fn field_in_group(&self, name: &str, group: &str) -> Vec<&Property> {
        self.field(name)
            .iter()
            .filter(|p| p.group.as_deref() == Some(group))
            .collect()
    }

    /// Returns every property tagged with the group label, in group-tag
    /// insertion order.
    #[must_use]
    pub fn group(&self, label: &str) -> Vec<&Property> {
        let Some(entry) = self.groups.iter().find(|g| g.name == label) else {
            return Vec::new();
        };

        // Each member entry names the nth group-tagged property of its
        // field, counting occurrences of that field name so far.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut props = Vec::with_capacity(entry.members.len());

        for member in &entry.members {
            let nth = match counts.iter_mut().find(|(name, _)| *name == member.as_str()) {
                Some((_, next)) => {
                    let n = *next;
                    *next += 1;
                    n
                }
                None => {
                    counts.push((member.as_str(), 1));
                    0
                }
            };

            if let Some(prop) = self
                .field(member)
                .iter()
                .filter(|p| p.group.as_deref() == Some(label))
                .nth(nth)
            {
                props.push(prop);
            }
        }

        props
    }

    /// Removes all properties under `name`, cascading group cleanup.
    ///
    /// For each removed property that belongs to a group, the group index
    /// entry is dropped and every sibling field sharing that group loses its
    /// group-tagged properties as well.
    pub fn remove(&mut self, name: &str) {
        let name = name.to_ascii_lowercase();
        let Some(pos) = self.fields.iter().position(|f| f.name == name) else {
            return;
        };
        let removed = self.fields.remove(pos);

        for prop in &removed.props {
            let Some(group) = prop.group.as_deref() else {
                continue;
            };
            let Some(gpos) = self.groups.iter().position(|g| g.name == group) else {
                continue;
            };
            let members = self.groups.remove(gpos).members;

            for member in members {
                if member == name {
                    continue;
                }
                if let Some(field) = self.fields.iter_mut().find(|f| f.name == member) {
                    field.props.retain(|p| p.group.as_deref() != Some(group));
                }
            }
        }
    }

    /// Iterates all properties in name-then-insertion order.
    #[must_use]
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.fields.iter().flat_map(|f| f.props.iter())
    }

    /// Returns the number of properties on the card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.iter().map(|f| f.props.len()).sum()
    }

    /// Returns whether the card has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(|f| f.props.is_empty())
    }

    /// Serializes the card to vCard text.
    ///
    /// ## Errors
    /// [`EncodingError::MissingFullName`] if the card has no `fn` property,
    /// [`EncodingError::MissingVersion`] if the version has been unset.
    pub fn serialize(&self) -> EncodingResult<String> {
        self.validate()?;
        build::serialize_card(self)
    }

    /// Serializes the card with long lines folded at the configured wrap
    /// column.
    ///
    /// ## Errors
    /// Same as [`Card::serialize`].
    pub fn to_folded_string(&self) -> EncodingResult<String> {
        let raw = self.serialize()?;
        let mut out = String::with_capacity(raw.len());
        for line in raw.lines() {
            out.push_str(&build::fold_line(line, self.wrap_column));
            out.push('\n');
        }
        Ok(out)
    }

    /// Returns whether [`Card::serialize`] would succeed.
    ///
    /// Only the structural [`EncodingError`] category is mapped to `false`;
    /// the serializer has no other failure class.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.serialize().is_ok()
    }

    fn validate(&self) -> EncodingResult<()> {
        if self.field("fn").is_empty() {
            return Err(EncodingError::MissingFullName);
        }
        Ok(())
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}
