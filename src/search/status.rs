use crate::brreg::{Registry, StatusSource};

/// Display status of an organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgStatus {
    Active,
    UnderDissolution,
    Bankrupt,
    /// Free-text status that does not look active
    Unclassified(String),
}

impl OrgStatus {
    pub fn label(&self) -> &str {
        match self {
            OrgStatus::Active => "Aktiv",
            OrgStatus::UnderDissolution => "Under avvikling",
            OrgStatus::Bankrupt => "Konkurs",
            OrgStatus::Unclassified(text) => text,
        }
    }
}

/// Derive the display status. Flags win in priority order bankrupt, then
/// dissolving; free text is matched case-insensitively against "aktiv" and
/// "registrert".
pub fn classify(source: &StatusSource) -> OrgStatus {
    match source {
        StatusSource::Flagged { bankrupt: true, .. } => OrgStatus::Bankrupt,
        StatusSource::Flagged {
            dissolving: true, ..
        } => OrgStatus::UnderDissolution,
        StatusSource::Flagged { .. } => OrgStatus::Active,
        StatusSource::Text(text) => {
            let lower = text.to_lowercase();
            if lower.contains("aktiv") || lower.contains("registrert") {
                OrgStatus::Active
            } else {
                OrgStatus::Unclassified(text.clone())
            }
        }
    }
}

/// Text for the status badge. Free-text statuses are shown as the registry wrote them.
pub fn badge_label(source: &StatusSource) -> Option<String> {
    let label = match source {
        StatusSource::Text(text) => text.trim().to_string(),
        flagged => classify(flagged).label().to_string(),
    };
    (!label.is_empty()).then_some(label)
}

/// Client-side status filter applied to the fetched page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    UnderDissolution,
    Bankrupt,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::UnderDissolution,
        StatusFilter::Bankrupt,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "Alle statuser",
            StatusFilter::Active => "Kun aktive",
            StatusFilter::UnderDissolution => "Under avvikling",
            StatusFilter::Bankrupt => "Konkurs",
        }
    }

    /// Stable key used as the `<option>` value
    pub fn key(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::UnderDissolution => "dissolving",
            StatusFilter::Bankrupt => "bankrupt",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Free-text statuses never classify as dissolving or bankrupt, so those
    /// filters only make sense for flagged records.
    pub fn available_for(self, mode: Registry) -> bool {
        match self {
            StatusFilter::All | StatusFilter::Active => true,
            StatusFilter::UnderDissolution | StatusFilter::Bankrupt => {
                mode == Registry::Enhetsregisteret
            }
        }
    }

    pub fn matches(self, status: &OrgStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => *status == OrgStatus::Active,
            StatusFilter::UnderDissolution => *status == OrgStatus::UnderDissolution,
            StatusFilter::Bankrupt => *status == OrgStatus::Bankrupt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(bankrupt: bool, dissolving: bool) -> StatusSource {
        StatusSource::Flagged {
            bankrupt,
            dissolving,
        }
    }

    #[test]
    fn test_flag_priority() {
        assert_eq!(classify(&flags(true, false)), OrgStatus::Bankrupt);
        assert_eq!(classify(&flags(true, true)), OrgStatus::Bankrupt);
        assert_eq!(classify(&flags(false, true)), OrgStatus::UnderDissolution);
        assert_eq!(classify(&flags(false, false)), OrgStatus::Active);
    }

    #[test]
    fn test_labels() {
        assert_eq!(classify(&flags(true, false)).label(), "Konkurs");
        assert_eq!(classify(&flags(false, true)).label(), "Under avvikling");
        assert_eq!(classify(&flags(false, false)).label(), "Aktiv");
    }

    #[test]
    fn test_text_status_heuristic() {
        assert_eq!(
            classify(&StatusSource::Text("Registrert".to_string())),
            OrgStatus::Active
        );
        assert_eq!(
            classify(&StatusSource::Text("AKTIV".to_string())),
            OrgStatus::Active
        );

        let dissolving = classify(&StatusSource::Text("Under avvikling".to_string()));
        assert_eq!(
            dissolving,
            OrgStatus::Unclassified("Under avvikling".to_string())
        );
        assert!(!StatusFilter::Active.matches(&dissolving));
        assert!(StatusFilter::All.matches(&dissolving));
        // The heuristic only recognizes active records
        assert!(!StatusFilter::UnderDissolution.matches(&dissolving));
    }

    #[test]
    fn test_badge_label() {
        assert_eq!(
            badge_label(&StatusSource::Text("Registrert".to_string())),
            Some("Registrert".to_string())
        );
        assert_eq!(badge_label(&StatusSource::Text("  ".to_string())), None);
        assert_eq!(badge_label(&flags(false, true)), Some("Under avvikling".to_string()));
    }

    #[test]
    fn test_flag_filters_only_for_enhetsregisteret() {
        for filter in StatusFilter::ALL {
            assert!(filter.available_for(Registry::Enhetsregisteret));
        }
        let frivillig: Vec<StatusFilter> = StatusFilter::ALL
            .into_iter()
            .filter(|f| f.available_for(Registry::Frivillighetsregisteret))
            .collect();
        assert_eq!(frivillig, vec![StatusFilter::All, StatusFilter::Active]);
    }

    #[test]
    fn test_filter_keys_round_trip() {
        for filter in StatusFilter::ALL {
            assert_eq!(StatusFilter::from_key(filter.key()), Some(filter));
        }
        assert_eq!(StatusFilter::from_key("nope"), None);
    }
}
