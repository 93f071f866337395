//! Document model for the canvas DSL
//!
//! A parsed canvas is a [`CanvasDocument`]: a title, a description, an
//! inferred [`CanvasType`], and an ordered [`Sections`] table holding the
//! items of every known section key. The section-key superset is a closed
//! enumeration; every key is always present (possibly empty), so consumers
//! never have to handle a missing section.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// The canvas templates the DSL can describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasType {
    /// Business Model Canvas
    Bmc,
    /// Lean Model Canvas
    Lmc,
}

impl CanvasType {
    /// The DSL keyword that opens a canvas block of this type
    pub fn keyword(&self) -> &'static str {
        match self {
            CanvasType::Bmc => "bmc",
            CanvasType::Lmc => "lmc",
        }
    }

    /// Look up a canvas type from its DSL keyword
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "bmc" => Some(CanvasType::Bmc),
            "lmc" => Some(CanvasType::Lmc),
            _ => None,
        }
    }

    /// The ordered canonical section list for this canvas type.
    ///
    /// This ordering is part of the external contract: the formatter emits
    /// sections in this order and the layout engine produces one block per
    /// entry.
    pub fn canonical_sections(&self) -> &'static [SectionKey; 9] {
        match self {
            CanvasType::Bmc => &BMC_CANONICAL,
            CanvasType::Lmc => &LMC_CANONICAL,
        }
    }
}

impl std::fmt::Display for CanvasType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A section of a canvas. Closed enumeration over the union of all BMC and
/// LMC sections (9 + 9 with 4 shared, 14 distinct).
///
/// Variant order is the canonical superset order used by [`Sections`]
/// iteration: the BMC canonical list followed by the LMC-only keys in LMC
/// canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKey {
    CustomerSegments,
    ValuePropositions,
    Channels,
    CustomerRelationships,
    RevenueStreams,
    KeyResources,
    KeyActivities,
    KeyPartnerships,
    CostStructure,
    Problem,
    Solution,
    UniqueValueProposition,
    UnfairAdvantage,
    KeyMetrics,
}

/// Number of distinct section keys across both canvas types
pub const SECTION_COUNT: usize = 14;

/// All section keys in canonical superset order
pub const ALL_SECTIONS: [SectionKey; SECTION_COUNT] = [
    SectionKey::CustomerSegments,
    SectionKey::ValuePropositions,
    SectionKey::Channels,
    SectionKey::CustomerRelationships,
    SectionKey::RevenueStreams,
    SectionKey::KeyResources,
    SectionKey::KeyActivities,
    SectionKey::KeyPartnerships,
    SectionKey::CostStructure,
    SectionKey::Problem,
    SectionKey::Solution,
    SectionKey::UniqueValueProposition,
    SectionKey::UnfairAdvantage,
    SectionKey::KeyMetrics,
];

/// BMC canonical section order
pub const BMC_CANONICAL: [SectionKey; 9] = [
    SectionKey::CustomerSegments,
    SectionKey::ValuePropositions,
    SectionKey::Channels,
    SectionKey::CustomerRelationships,
    SectionKey::RevenueStreams,
    SectionKey::KeyResources,
    SectionKey::KeyActivities,
    SectionKey::KeyPartnerships,
    SectionKey::CostStructure,
];

/// LMC canonical section order
pub const LMC_CANONICAL: [SectionKey; 9] = [
    SectionKey::Problem,
    SectionKey::Solution,
    SectionKey::UniqueValueProposition,
    SectionKey::UnfairAdvantage,
    SectionKey::CustomerSegments,
    SectionKey::KeyMetrics,
    SectionKey::Channels,
    SectionKey::CostStructure,
    SectionKey::RevenueStreams,
];

impl SectionKey {
    /// The kebab-case spelling used by the DSL
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::CustomerSegments => "customer-segments",
            SectionKey::ValuePropositions => "value-propositions",
            SectionKey::Channels => "channels",
            SectionKey::CustomerRelationships => "customer-relationships",
            SectionKey::RevenueStreams => "revenue-streams",
            SectionKey::KeyResources => "key-resources",
            SectionKey::KeyActivities => "key-activities",
            SectionKey::KeyPartnerships => "key-partnerships",
            SectionKey::CostStructure => "cost-structure",
            SectionKey::Problem => "problem",
            SectionKey::Solution => "solution",
            SectionKey::UniqueValueProposition => "unique-value-proposition",
            SectionKey::UnfairAdvantage => "unfair-advantage",
            SectionKey::KeyMetrics => "key-metrics",
        }
    }

    /// Look up a section key from its kebab-case spelling
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_SECTIONS.iter().copied().find(|k| k.as_str() == name)
    }

    /// Sections that exist only on the Business Model Canvas
    pub fn is_bmc_only(&self) -> bool {
        matches!(
            self,
            SectionKey::ValuePropositions
                | SectionKey::CustomerRelationships
                | SectionKey::KeyResources
                | SectionKey::KeyActivities
                | SectionKey::KeyPartnerships
        )
    }

    /// Sections that exist only on the Lean Model Canvas
    pub fn is_lmc_only(&self) -> bool {
        matches!(
            self,
            SectionKey::Problem
                | SectionKey::Solution
                | SectionKey::UniqueValueProposition
                | SectionKey::UnfairAdvantage
                | SectionKey::KeyMetrics
        )
    }

    /// Sections shared by both canvas types
    pub fn is_shared(&self) -> bool {
        !self.is_bmc_only() && !self.is_lmc_only()
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered item lists for every section key.
///
/// Backed by a fixed array indexed by key discriminant, so every key is
/// always present and iteration follows the canonical superset order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sections {
    items: [Vec<String>; SECTION_COUNT],
}

impl Sections {
    /// Create a table with every section empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Items of a section, in source order
    pub fn get(&self, key: SectionKey) -> &[String] {
        &self.items[key as usize]
    }

    /// Append an item to a section
    pub fn push(&mut self, key: SectionKey, item: impl Into<String>) {
        self.items[key as usize].push(item.into());
    }

    /// Replace a section's item list (used by parse -> modify -> format callers)
    pub fn set(&mut self, key: SectionKey, items: Vec<String>) {
        self.items[key as usize] = items;
    }

    /// Whether a section has any items
    pub fn is_used(&self, key: SectionKey) -> bool {
        !self.items[key as usize].is_empty()
    }

    /// Keys that carry at least one item, in canonical superset order
    pub fn used(&self) -> impl Iterator<Item = SectionKey> + '_ {
        ALL_SECTIONS.into_iter().filter(|&k| self.is_used(k))
    }

    /// All (key, items) pairs in canonical superset order
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &[String])> {
        ALL_SECTIONS.into_iter().map(|k| (k, self.get(k)))
    }
}

impl Serialize for Sections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(SECTION_COUNT))?;
        for (key, items) in self.iter() {
            map.serialize_entry(key.as_str(), items)?;
        }
        map.end()
    }
}

/// A parsed canvas document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasDocument {
    /// Canvas title (may be empty)
    pub title: String,
    /// Canvas description (may be empty)
    pub description: String,
    /// Inferred canvas type; classification is total and defaults to BMC
    pub canvas_type: CanvasType,
    /// Item lists for every known section key
    pub sections: Sections,
}

impl CanvasDocument {
    /// An empty BMC document
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            canvas_type: CanvasType::Bmc,
            sections: Sections::new(),
        }
    }
}

impl Default for CanvasDocument {
    fn default() -> Self {
        Self::empty()
    }
}
