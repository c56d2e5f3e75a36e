// src/core/net.rs
//
// Blocking HTTP with a cookie jar. The timetable form only answers with the
// schedule when the POST carries the session cookie set by the first GET.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub struct HttpSession {
    client: Client,
}

impl HttpSession {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    pub fn get(&self, url: &str) -> Result<String> {
        logd!("HTTP: GET {url}");
        let resp = self.client.get(url).send()?;
        body(resp, url)
    }

    pub fn post_form(&self, url: &str, form: &[(&str, String)]) -> Result<String> {
        logd!("HTTP: POST {url} ({} fields)", form.len());
        let resp = self.client.post(url).form(form).send()?;
        body(resp, url)
    }
}

fn body(resp: Response, url: &str) -> Result<String> {
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp.text()?)
}
