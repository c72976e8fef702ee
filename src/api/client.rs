use super::types::{AreaQuery, AreaScore, LockerQuery, ParcelLocker};
use crate::core::config::{ApiConfig, MapConfig};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const AREA_PATH: &str = "/api/obszar";
pub const LOCKERS_PATH: &str = "/api/paczkomaty";

/// The scoring backend as seen by the map
#[async_trait]
pub trait LocationApi: Send + Sync {
    /// Score the circular area described by `query`
    async fn area_score(&self, query: AreaQuery) -> Result<AreaScore>;

    /// Parcel lockers around `query`
    async fn parcel_lockers(&self, query: LockerQuery) -> Result<Vec<ParcelLocker>>;
}

/// [`LocationApi`] over HTTP. No auth, no pagination, no retries.
pub struct HttpLocationApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpLocationApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Client for the backend configured in `config.api`
    pub fn for_map(config: &MapConfig) -> Result<Self> {
        Self::new(config.api.clone())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<Q, T>(&self, path: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + std::fmt::Debug + Sync,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        log::debug!("GET {url} {query:?}");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl LocationApi for HttpLocationApi {
    async fn area_score(&self, query: AreaQuery) -> Result<AreaScore> {
        self.get_json(AREA_PATH, &query).await
    }

    async fn parcel_lockers(&self, query: LockerQuery) -> Result<Vec<ParcelLocker>> {
        let lockers: Vec<ParcelLocker> = self.get_json(LOCKERS_PATH, &query).await?;
        log::info!(
            "fetched {} parcel lockers around ({}, {})",
            lockers.len(),
            query.lat,
            query.lon
        );
        Ok(lockers)
    }
}
