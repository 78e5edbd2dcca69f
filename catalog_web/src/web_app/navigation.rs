// web_app/navigation.rs - Section navigation
//
// Exactly one section is active at a time. Activating the catalog or the
// sales section asks for a data load; the home section never does.

use std::fmt;
use std::str::FromStr;

/// A page section, identified in markup by its `data-target` / element id
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Catalog,
    Sales,
}

impl Section {
    /// In navigation order
    pub const ALL: [Section; 3] = [Section::Home, Section::Catalog, Section::Sales];

    pub fn target_id(self) -> &'static str {
        match self {
            Section::Home => "homePage",
            Section::Catalog => "categoryPage",
            Section::Sales => "salesPage",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Catalog => "Catalog",
            Section::Sales => "Sales",
        }
    }

    /// Load to run when this section becomes active
    pub fn load(self) -> Option<DataLoad> {
        match self {
            Section::Home => None,
            Section::Catalog => Some(DataLoad::Catalog),
            Section::Sales => Some(DataLoad::Sales),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("unknown navigation target {0:?}")]
    UnknownTarget(String),
}

impl FromStr for Section {
    type Err = NavigationError;

    fn from_str(target: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.target_id() == target)
            .ok_or_else(|| NavigationError::UnknownTarget(target.to_string()))
    }
}

/// Data load requested by a navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataLoad {
    /// Categories + products, then the first filter pass
    Catalog,
    /// Products, keeping the on-sale ones
    Sales,
}

/// Which section is visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navigation {
    active: Section,
}

impl Navigation {
    /// Home is active on start-up.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    /// Activate `section` and deactivate every other one. Re-activating the
    /// current section requests its load again.
    pub fn activate(&mut self, section: Section) -> Option<DataLoad> {
        if self.active != section {
            tracing::debug!(from = %self.active, to = %section, "switching section");
        }
        self.active = section;
        section.load()
    }

    /// Activate the section named by a navigation target identifier. An
    /// unknown target leaves the current section active.
    pub fn navigate(&mut self, target: &str) -> Result<Option<DataLoad>, NavigationError> {
        let section = target.parse::<Section>()?;
        Ok(self.activate(section))
    }
}
