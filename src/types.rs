//! Common core types: closed enumerations and the entity identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable unique identifier of an entity.
///
/// Ids come from the source dataset as short strings; a newtype keeps them
/// from mixing with other string fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Entity category. Closed set; exhaustive matching keeps the per-category
/// stats and the institution size bonus statically checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A startup company.
    Startup,
    /// Incubator or accelerator program.
    Incubator,
    /// Venture capital fund or angel group.
    Vc,
    /// University or research institution.
    University,
    /// Coworking space.
    Coworking,
    /// Public funding body.
    Funding,
    /// Community or recurring event series.
    Community,
}

impl Category {
    /// All categories, in a fixed deterministic order.
    pub const ALL: [Category; 7] = [
        Category::Startup,
        Category::Incubator,
        Category::Vc,
        Category::University,
        Category::Coworking,
        Category::Funding,
        Category::Community,
    ];

    /// Wire spelling, as it appears in the source dataset.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Startup => "startup",
            Category::Incubator => "incubator",
            Category::Vc => "vc",
            Category::University => "university",
            Category::Coworking => "coworking",
            Category::Funding => "funding",
            Category::Community => "community",
        }
    }

    /// Fixed display color used by both the map markers and the graph nodes.
    pub fn color(self) -> &'static str {
        match self {
            Category::Startup => "#10b981",
            Category::Incubator => "#f59e0b",
            Category::Vc => "#3b82f6",
            Category::University => "#8b5cf6",
            Category::Coworking => "#f97316",
            Category::Funding => "#ef4444",
            Category::Community => "#14b8a6",
        }
    }

    /// Human-readable display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Startup => "Startups",
            Category::Incubator => "Inkubatoren & Acceleratoren",
            Category::Vc => "VCs & Angels",
            Category::University => "Universitäten & Forschung",
            Category::Coworking => "Coworking Spaces",
            Category::Funding => "Öffentliche Förderungen",
            Category::Community => "Communities & Events",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Industry vertical of an entity. Closed set, mirroring the source
/// dataset's subcategory labels; free-form descriptors live in `tags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subcategory {
    /// Deep tech.
    Deeptech,
    /// Biotechnology.
    Biotech,
    /// Financial technology.
    Fintech,
    /// Climate tech.
    Climate,
    /// Health tech.
    Healthtech,
    /// Education tech.
    Edtech,
    /// Property tech.
    Proptech,
    /// Mobility and transport.
    Mobility,
    /// Software as a service.
    Saas,
    /// Artificial intelligence.
    Ai,
    /// Hardware.
    Hardware,
    /// Marketplace businesses.
    Marketplace,
    /// Business-to-business.
    B2b,
    /// Business-to-consumer.
    B2c,
    /// Enterprise software.
    Enterprise,
    /// Sustainability.
    Sustainability,
    /// Energy.
    Energy,
    /// Food tech.
    Foodtech,
    /// Legal tech.
    Legaltech,
    /// Insurance tech.
    Insurtech,
    /// Cybersecurity.
    Cybersecurity,
    /// Blockchain.
    Blockchain,
    /// Internet of things.
    Iot,
    /// Robotics.
    Robotics,
    /// Space tech.
    Space,
    /// Quantum computing.
    Quantum,
    /// Anything without a better fit.
    Other,
}

impl Subcategory {
    /// Wire spelling, as it appears in the source dataset.
    pub fn as_str(self) -> &'static str {
        match self {
            Subcategory::Deeptech => "deeptech",
            Subcategory::Biotech => "biotech",
            Subcategory::Fintech => "fintech",
            Subcategory::Climate => "climate",
            Subcategory::Healthtech => "healthtech",
            Subcategory::Edtech => "edtech",
            Subcategory::Proptech => "proptech",
            Subcategory::Mobility => "mobility",
            Subcategory::Saas => "saas",
            Subcategory::Ai => "ai",
            Subcategory::Hardware => "hardware",
            Subcategory::Marketplace => "marketplace",
            Subcategory::B2b => "b2b",
            Subcategory::B2c => "b2c",
            Subcategory::Enterprise => "enterprise",
            Subcategory::Sustainability => "sustainability",
            Subcategory::Energy => "energy",
            Subcategory::Foodtech => "foodtech",
            Subcategory::Legaltech => "legaltech",
            Subcategory::Insurtech => "insurtech",
            Subcategory::Cybersecurity => "cybersecurity",
            Subcategory::Blockchain => "blockchain",
            Subcategory::Iot => "iot",
            Subcategory::Robotics => "robotics",
            Subcategory::Space => "space",
            Subcategory::Quantum => "quantum",
            Subcategory::Other => "other",
        }
    }
}

impl fmt::Display for Subcategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Funding stage of a startup, ordered by maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FundingStage {
    /// Pre-seed.
    PreSeed,
    /// Seed.
    Seed,
    /// Series A.
    SeriesA,
    /// Series B.
    SeriesB,
    /// Series C.
    SeriesC,
    /// Growth stage.
    Growth,
    /// Exited (acquisition or IPO).
    Exit,
}

impl FundingStage {
    /// Wire spelling, as it appears in the source dataset.
    pub fn as_str(self) -> &'static str {
        match self {
            FundingStage::PreSeed => "pre-seed",
            FundingStage::Seed => "seed",
            FundingStage::SeriesA => "series-a",
            FundingStage::SeriesB => "series-b",
            FundingStage::SeriesC => "series-c",
            FundingStage::Growth => "growth",
            FundingStage::Exit => "exit",
        }
    }
}

impl fmt::Display for FundingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FundingStage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use FundingStage::*;
        [PreSeed, Seed, SeriesA, SeriesB, SeriesC, Growth, Exit]
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| format!("unknown funding stage: {s}"))
    }
}

/// Team size bracket, ordered by headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TeamSize {
    /// 1–10 people.
    #[serde(rename = "1-10")]
    UpTo10,
    /// 11–50 people.
    #[serde(rename = "11-50")]
    From11To50,
    /// 51–200 people.
    #[serde(rename = "51-200")]
    From51To200,
    /// More than 200 people.
    #[serde(rename = "200+")]
    Over200,
}

impl TeamSize {
    /// Wire spelling, as it appears in the source dataset.
    pub fn as_str(self) -> &'static str {
        match self {
            TeamSize::UpTo10 => "1-10",
            TeamSize::From11To50 => "11-50",
            TeamSize::From51To200 => "51-200",
            TeamSize::Over200 => "200+",
        }
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use TeamSize::*;
        [UpTo10, From11To50, From51To200, Over200]
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| format!("unknown team size bracket: {s}"))
    }
}

/// Relationship type carried by a directed connection between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// Source invested in the target.
    InvestedIn,
    /// Source was incubated by the target.
    IncubatedBy,
    /// Source went through the target's accelerator program.
    AcceleratedBy,
    /// Source and target have a partnership.
    PartneredWith,
    /// Source was founded at the target (typically a university).
    FoundedAt,
    /// Source is a member of the target.
    MemberOf,
    /// Source received funding from the target.
    FundedBy,
    /// Source is a spinoff from the target.
    SpinoffFrom,
    /// Source was acquired by the target.
    AcquiredBy,
    /// Source is mentored by the target.
    MentoredBy,
}
