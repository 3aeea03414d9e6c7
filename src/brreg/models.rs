use chrono::NaiveDate;
use serde::Deserialize;

/// Which registry a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Registry {
    /// General business registry, restricted to voluntary associations (FLI)
    #[default]
    Enhetsregisteret,
    /// Registry of voluntary organizations, supports ICNPO categories
    Frivillighetsregisteret,
}

impl Registry {
    pub fn supports_categories(self) -> bool {
        matches!(self, Registry::Frivillighetsregisteret)
    }
}

impl std::fmt::Display for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Registry::Enhetsregisteret => write!(f, "Enhetsregisteret"),
            Registry::Frivillighetsregisteret => write!(f, "Frivillighetsregisteret"),
        }
    }
}

/// ICNPO category (international nonprofit classification)
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "kode")]
    pub code: String,
    #[serde(rename = "navn")]
    pub label: String,
}

/// Business address as reported by the registry
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Address {
    #[serde(rename = "adresse", default)]
    pub lines: Vec<String>,
    #[serde(rename = "postnummer")]
    pub postal_code: Option<String>,
    #[serde(rename = "poststed")]
    pub locality: Option<String>,
}

impl Address {
    /// Single-line rendering: street lines, then "postal code locality".
    /// Returns None when nothing printable is left.
    pub fn formatted(&self) -> Option<String> {
        let mut parts: Vec<String> = self
            .lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        let postal = [self.postal_code.as_deref(), self.locality.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !postal.is_empty() {
            parts.push(postal);
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub homepage: Option<String>,
}

/// Raw status information, in whichever shape the source registry uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSource {
    /// Boolean flags from Enhetsregisteret. Forced and voluntary dissolution
    /// are folded into `dissolving`.
    Flagged { bankrupt: bool, dissolving: bool },
    /// Free-text status such as "Registrert" or "Under avvikling"
    Text(String),
}

impl Default for StatusSource {
    fn default() -> Self {
        StatusSource::Flagged {
            bankrupt: false,
            dissolving: false,
        }
    }
}

/// An organization as displayed in the result list, normalized from either registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub org_number: String,
    pub name: String,
    pub org_form: Option<String>,
    pub category: Option<Category>,
    pub address: Option<Address>,
    pub contact: Contact,
    pub founded: Option<NaiveDate>,
    pub status: StatusSource,
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageResult {
    pub organizations: Vec<Organization>,
    pub total_elements: u64,
    pub total_pages: u32,
}
