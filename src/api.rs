// src/api.rs
use gloo_net::http::{Request, Response};

use crate::config::AppConfig;
use crate::error::Result;
use crate::model::{ActivityMap, ApiMessage};

/// Answer to a signup/unregister request that came back with a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub ok: bool,
    pub body: ApiMessage,
}

/// The activities backend. Futures are polled on the browser's single thread,
/// so no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn activities(&self) -> Result<ActivityMap>;
    async fn signup(&self, activity: &str, email: &str) -> Result<Reply>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<Reply>;
}

pub fn activities_url(cfg: &AppConfig) -> String {
    cfg.endpoint("activities")
}

pub fn signup_url(cfg: &AppConfig, activity: &str, email: &str) -> String {
    member_url(cfg, activity, "signup", email)
}

pub fn unregister_url(cfg: &AppConfig, activity: &str, email: &str) -> String {
    member_url(cfg, activity, "unregister", email)
}

fn member_url(cfg: &AppConfig, activity: &str, verb: &str, email: &str) -> String {
    cfg.endpoint(&format!(
        "activities/{}/{verb}?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    ))
}

/// Talks to the real backend through the browser's fetch API.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpBackend {
    cfg: AppConfig,
}

impl HttpBackend {
    pub fn new(cfg: AppConfig) -> Self {
        Self { cfg }
    }

    async fn post(&self, url: &str) -> Result<Reply> {
        log::debug!("POST {url}");
        let resp = Request::post(url).send().await?;
        reply_from(resp).await
    }
}

async fn reply_from(resp: Response) -> Result<Reply> {
    let ok = resp.ok();
    let body = resp.json::<ApiMessage>().await?;
    Ok(Reply { ok, body })
}

impl Backend for HttpBackend {
    async fn activities(&self) -> Result<ActivityMap> {
        let url = activities_url(&self.cfg);
        log::debug!("GET {url}");
        let resp = Request::get(&url).send().await?;
        Ok(resp.json::<ActivityMap>().await?)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Reply> {
        self.post(&signup_url(&self.cfg, activity, email)).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Reply> {
        self.post(&unregister_url(&self.cfg, activity, email)).await
    }
}
