use gloo_net::http::{Method, Request};
use gloo_net::Error;
use serde::{de::DeserializeOwned, Serialize};

use rankup_core::{KeyValueStore, TOKEN_KEY};

use crate::storage::BrowserStorage;

/* API base URL */
const BASE: &str = "http://127.0.0.1:8080/api";

/* Bearer credential persisted by the session store, if any */
fn bearer() -> Option<String> {
    BrowserStorage.get(TOKEN_KEY)
}

/* Generic JSON call */
pub async fn fetch_json<T, U>(method: Method, path: &str, body: Option<&T>) -> Result<U, Error>
where
    T: Serialize + ?Sized,
    U: DeserializeOwned,
{
    let url = format!("{BASE}{path}");
    let builder = match method {
        Method::GET => Request::get(&url),
        Method::POST => Request::post(&url),
        Method::PUT => Request::put(&url),
        Method::PATCH => Request::patch(&url),
        Method::DELETE => Request::delete(&url),
        _ => Request::get(&url),
    };

    let builder = if let Some(token) = bearer() {
        builder.header("Authorization", &format!("Bearer {token}"))
    } else {
        builder
    };

    let resp = if let Some(b) = body {
        builder.json(b)?.send().await?
    } else {
        builder.send().await?
    };

    if !resp.ok() {
        return Err(Error::GlooError(format!(
            "HTTP {} – {}",
            resp.status(),
            resp.status_text()
        )));
    }

    resp.json().await
}

/// Call whose success response carries no JSON (201 / 204, DELETE …).
pub async fn fetch_empty<T>(method: Method, path: &str, body: Option<&T>) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    let url = format!("{BASE}{path}");
    let mut req = match method {
        Method::DELETE => Request::delete(&url),
        Method::PUT => Request::put(&url),
        Method::POST => Request::post(&url),
        _ => unreachable!("fetch_empty: DELETE / PUT / POST only"),
    };

    if let Some(token) = bearer() {
        req = req.header("Authorization", &format!("Bearer {token}"));
    }

    let resp = match (method, body) {
        (Method::PUT | Method::POST, Some(b)) => req.json(b)?.send().await?,
        _ => req.send().await?,
    };

    match resp.status() {
        200 | 201 | 204 => Ok(()),
        s => Err(Error::GlooError(format!("HTTP {} – {}", s, resp.status_text()))),
    }
}
