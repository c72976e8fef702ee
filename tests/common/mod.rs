//! Scripted scoring backend shared by the integration tests

use async_trait::async_trait;
use hexscout::{
    api::{AreaQuery, AreaScore, LockerQuery, ParcelLocker},
    LocationApi, MapError, Result,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// One scripted response: how long to take, and whether to fail
#[derive(Debug, Clone, Copy)]
pub struct Reply {
    pub delay: Duration,
    pub fail: bool,
}

impl Reply {
    pub fn after_ms(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            delay: Duration::from_millis(5),
            fail: true,
        }
    }
}

/// Answers calls in order from a script. The n-th area score (1-based)
/// carries `score == n`, so tests can tell responses apart.
#[derive(Default)]
pub struct ScriptedApi {
    area_replies: Mutex<VecDeque<Reply>>,
    area_calls: Mutex<Vec<AreaQuery>>,
    locker_replies: Mutex<VecDeque<Result<Vec<ParcelLocker>>>>,
    locker_calls: Mutex<Vec<LockerQuery>>,
}

impl ScriptedApi {
    pub fn with_area_replies(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            area_replies: Mutex::new(replies.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn push_lockers(&self, reply: Result<Vec<ParcelLocker>>) {
        self.locker_replies.lock().unwrap().push_back(reply);
    }

    pub fn area_calls(&self) -> Vec<AreaQuery> {
        self.area_calls.lock().unwrap().clone()
    }

    pub fn locker_calls(&self) -> Vec<LockerQuery> {
        self.locker_calls.lock().unwrap().clone()
    }
}

pub fn score(n: f64) -> AreaScore {
    AreaScore {
        score: n,
        shop_count: 1.0,
        building: 2.0,
        parking: 3.0,
        business: 4.0,
        health: 5.0,
        education: 6.0,
        public_safety: 7.0,
        government_institutions: 8.0,
        catering: 9.0,
        tourism: 10.0,
        population: 1234.4,
    }
}

pub fn locker(id: &str, lat: f64, lon: f64) -> ParcelLocker {
    ParcelLocker {
        id: id.to_string(),
        name: id.to_string(),
        lat,
        lon,
        status: "Operating".to_string(),
        location_type: "Outdoor".to_string(),
        opening_hours: "24/7".to_string(),
    }
}

#[async_trait]
impl LocationApi for ScriptedApi {
    async fn area_score(&self, query: AreaQuery) -> Result<AreaScore> {
        let (reply, n) = {
            let mut calls = self.area_calls.lock().unwrap();
            calls.push(query);
            let reply = self
                .area_replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Reply::after_ms(1));
            (reply, calls.len())
        };

        tokio::time::sleep(reply.delay).await;
        if reply.fail {
            return Err(MapError::Http {
                status: 500,
                url: "http://backend/api/obszar".to_string(),
            });
        }
        Ok(score(n as f64))
    }

    async fn parcel_lockers(&self, query: LockerQuery) -> Result<Vec<ParcelLocker>> {
        self.locker_calls.lock().unwrap().push(query);
        self.locker_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
