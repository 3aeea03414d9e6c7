use crate::brreg::models::{
    Address, Category, Contact, Organization, PageResult, Registry, StatusSource,
};
use crate::config::Config;
use crate::search::request::SearchRequest;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, warn};

const USER_AGENT: &str = "lag/0.1 +https://data.brreg.no";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request to {registry} failed: {source}")]
    Request {
        registry: Registry,
        #[source]
        source: reqwest::Error,
    },
    #[error("{registry} returned status {status}")]
    Status {
        registry: Registry,
        status: StatusCode,
    },
}

impl FetchError {
    pub fn registry(&self) -> Registry {
        match self {
            FetchError::Request { registry, .. } | FetchError::Status { registry, .. } => *registry,
        }
    }

    /// Short message shown in place of the result list
    pub fn user_message(&self) -> String {
        format!("Feil fra {}", self.registry())
    }
}

/// Anything that can serve pages of organizations and the category list
#[async_trait::async_trait]
pub trait RegistrySource: Send + Sync {
    async fn fetch_page(&self, request: &SearchRequest) -> Result<PageResult, FetchError>;

    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError>;
}

/// Paged HAL response shared by both registries
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct PagedResponse<T> {
    #[serde(rename = "_embedded")]
    embedded: Option<Embedded<T>>,
    page: Option<PageDescriptor>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct Embedded<T> {
    #[serde(alias = "enheter", alias = "organisasjoner", default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageDescriptor {
    total_pages: Option<u32>,
    total_elements: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct CodeRef {
    kode: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryRef {
    kode: Option<String>,
    navn: Option<String>,
}

/// Entity from Enhetsregisteret
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnhetResponse {
    organisasjonsnummer: String,
    navn: String,
    organisasjonsform: Option<CodeRef>,
    forretningsadresse: Option<Address>,
    postadresse: Option<Address>,
    stiftelsesdato: Option<String>,
    hjemmeside: Option<String>,
    epostadresse: Option<String>,
    telefon: Option<String>,
    mobil: Option<String>,
    konkurs: Option<bool>,
    under_avvikling: Option<bool>,
    under_tvangsavvikling_eller_tvangsopplosning: Option<bool>,
    status: Option<String>,
}

/// Organization from Frivillighetsregisteret
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FrivilligResponse {
    organisasjonsnummer: String,
    navn: String,
    icnpo_kategori: Option<CategoryRef>,
    forretningsadresse: Option<Address>,
    postadresse: Option<Address>,
    stiftelsesdato: Option<String>,
    hjemmeside: Option<String>,
    epostadresse: Option<String>,
    telefon: Option<String>,
    registreringsstatus: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_date(value: Option<String>) -> Option<NaiveDate> {
    let raw = value?;
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            debug!("Ignoring unparseable founding date '{}': {}", raw, e);
            None
        }
    }
}

impl From<EnhetResponse> for Organization {
    fn from(raw: EnhetResponse) -> Self {
        let has_flags = raw.konkurs.is_some()
            || raw.under_avvikling.is_some()
            || raw.under_tvangsavvikling_eller_tvangsopplosning.is_some();

        let status = match (has_flags, non_empty(raw.status)) {
            (false, Some(text)) => StatusSource::Text(text),
            _ => StatusSource::Flagged {
                bankrupt: raw.konkurs.unwrap_or(false),
                dissolving: raw.under_avvikling.unwrap_or(false)
                    || raw
                        .under_tvangsavvikling_eller_tvangsopplosning
                        .unwrap_or(false),
            },
        };

        Organization {
            org_number: raw.organisasjonsnummer,
            name: raw.navn,
            org_form: raw.organisasjonsform.and_then(|f| non_empty(f.kode)),
            category: None,
            address: raw.forretningsadresse.or(raw.postadresse),
            contact: Contact {
                phone: non_empty(raw.telefon).or_else(|| non_empty(raw.mobil)),
                email: non_empty(raw.epostadresse),
                homepage: non_empty(raw.hjemmeside),
            },
            founded: parse_date(raw.stiftelsesdato),
            status,
        }
    }
}

impl From<FrivilligResponse> for Organization {
    fn from(raw: FrivilligResponse) -> Self {
        let category = raw.icnpo_kategori.and_then(|c| {
            non_empty(c.kode).map(|code| Category {
                code,
                label: c.navn.unwrap_or_default(),
            })
        });

        Organization {
            org_number: raw.organisasjonsnummer,
            name: raw.navn,
            org_form: None,
            category,
            address: raw.forretningsadresse.or(raw.postadresse),
            contact: Contact {
                phone: non_empty(raw.telefon),
                email: non_empty(raw.epostadresse),
                homepage: non_empty(raw.hjemmeside),
            },
            founded: parse_date(raw.stiftelsesdato),
            status: StatusSource::Text(raw.registreringsstatus.unwrap_or_default()),
        }
    }
}

impl<T: Into<Organization>> From<PagedResponse<T>> for PageResult {
    fn from(raw: PagedResponse<T>) -> Self {
        let organizations: Vec<Organization> = raw
            .embedded
            .map(|e| e.items)
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect();

        let total_pages = raw.page.as_ref().and_then(|p| p.total_pages).unwrap_or(0);
        let total_elements = raw
            .page
            .as_ref()
            .and_then(|p| p.total_elements)
            .unwrap_or(organizations.len() as u64);

        PageResult {
            organizations,
            total_elements,
            total_pages,
        }
    }
}

/// HTTP client for the Brønnøysund registries
#[derive(Clone)]
pub struct BrregClient {
    client: Client,
    enhetsregisteret_url: String,
    frivillighetsregisteret_url: String,
    icnpo_url: String,
    municipality_number: String,
}

impl BrregClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build configured HTTP client, using defaults: {}", e);
                Client::new()
            });

        Self {
            client,
            enhetsregisteret_url: config.enhetsregisteret_url.clone(),
            frivillighetsregisteret_url: config.frivillighetsregisteret_url.clone(),
            icnpo_url: config.icnpo_url.clone(),
            municipality_number: config.municipality_number.clone(),
        }
    }

    fn endpoint(&self, registry: Registry) -> &str {
        match registry {
            Registry::Enhetsregisteret => &self.enhetsregisteret_url,
            Registry::Frivillighetsregisteret => &self.frivillighetsregisteret_url,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        registry: Registry,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Request { registry, source })?;

        let status = response.status();
        if !status.is_success() {
            error!("{} returned status {} for {}", registry, status, url);
            return Err(FetchError::Status { registry, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Request { registry, source })
    }
}

#[async_trait::async_trait]
impl RegistrySource for BrregClient {
    /// Fetch one page of organizations for the given request
    async fn fetch_page(&self, request: &SearchRequest) -> Result<PageResult, FetchError> {
        let registry = request.mode;
        let params = request.query_params(&self.municipality_number);
        debug!("Fetching {} page {} with {:?}", registry, request.page, params);

        let url = self.endpoint(registry).to_string();
        match registry {
            Registry::Enhetsregisteret => {
                let raw: PagedResponse<EnhetResponse> =
                    self.get_json(registry, &url, &params).await?;
                Ok(raw.into())
            }
            Registry::Frivillighetsregisteret => {
                let raw: PagedResponse<FrivilligResponse> =
                    self.get_json(registry, &url, &params).await?;
                Ok(raw.into())
            }
        }
    }

    /// Fetch the flat ICNPO category list
    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let url = self.icnpo_url.clone();
        self.get_json(Registry::Frivillighetsregisteret, &url, &[])
            .await
    }
}
