use crate::brreg::Organization;
use crate::search::status::{badge_label, classify, OrgStatus};
use chrono::{Datelike, NaiveDate};
use std::ops::Range;

const DETAIL_URL: &str = "https://w2.brreg.no/enhet/sok/detalj.jsp?orgnr=";
const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Name split around the first case-insensitive match of the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedName {
    pub before: String,
    pub matched: String,
    pub after: String,
}

/// Byte range of the first case-insensitive occurrence of `needle`
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    for (start, _) in haystack.char_indices() {
        let mut hay = haystack[start..].char_indices();
        let mut end = start;
        let mut matched = true;

        for n in needle.chars() {
            match hay.next() {
                Some((offset, h)) if h.to_lowercase().eq(n.to_lowercase()) => {
                    end = start + offset + h.len_utf8();
                }
                _ => {
                    matched = false;
                    break;
                }
            }
        }

        if matched {
            return Some(start..end);
        }
    }

    None
}

pub fn highlight(name: &str, query: &str) -> HighlightedName {
    match find_case_insensitive(name, query.trim()) {
        Some(range) => HighlightedName {
            before: name[..range.start].to_string(),
            matched: name[range.clone()].to_string(),
            after: name[range.end..].to_string(),
        },
        None => HighlightedName {
            before: name.to_string(),
            matched: String::new(),
            after: String::new(),
        },
    }
}

/// Whole years since `founded`, counting a year only once its anniversary has passed
pub fn age_in_years(founded: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - founded.year();
    if (today.month(), today.day()) < (founded.month(), founded.day()) {
        years -= 1;
    }
    // Founding dates in the future are registry typos
    years.max(0)
}

/// Norwegian date format, e.g. 17.05.1923
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn homepage_url(homepage: &str) -> Option<String> {
    let homepage = homepage.trim();
    if homepage.is_empty() {
        return None;
    }
    let lower = homepage.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Some(homepage.to_string())
    } else {
        Some(format!("https://{}", homepage))
    }
}

pub fn map_search_url(address: &str) -> String {
    format!("{}{}", MAP_SEARCH_URL, urlencoding::encode(address))
}

pub fn detail_url(org_number: &str) -> String {
    format!("{}{}", DETAIL_URL, org_number)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Founded {
    pub date: String,
    pub age: i32,
}

/// Everything one result card shows, derived from an organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgCard {
    pub org_number: String,
    pub name: HighlightedName,
    pub org_form: Option<String>,
    /// ICNPO code followed by its label
    pub category: Option<String>,
    pub status: OrgStatus,
    pub status_label: Option<String>,
    pub locality: Option<String>,
    pub founded: Option<Founded>,
    pub homepage: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub map_url: Option<String>,
    pub detail_url: String,
}

impl OrgCard {
    pub fn build(org: &Organization, query: &str, today: NaiveDate) -> Self {
        let address = org.address.as_ref().and_then(|a| a.formatted());
        let map_url = address.as_deref().map(map_search_url);

        OrgCard {
            org_number: org.org_number.clone(),
            name: highlight(&org.name, query),
            org_form: org.org_form.clone(),
            category: org
                .category
                .as_ref()
                .map(|c| format!("{} — {}", c.code, c.label)),
            status: classify(&org.status),
            status_label: badge_label(&org.status),
            locality: org.address.as_ref().and_then(|a| a.locality.clone()),
            founded: org.founded.map(|date| Founded {
                date: format_date(date),
                age: age_in_years(date, today),
            }),
            homepage: org.contact.homepage.as_deref().and_then(homepage_url),
            email: org.contact.email.clone(),
            phone: org.contact.phone.clone(),
            address,
            map_url,
            detail_url: detail_url(&org.org_number),
        }
    }
}
