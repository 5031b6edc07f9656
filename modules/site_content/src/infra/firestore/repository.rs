//! Firestore REST v1 repository

use crate::config::FirestoreConfig;
use crate::contract::{Collection, ContentItem, HomeContent};
use crate::domain::repository::{ContentRepository, HOME_COLLECTION, HOME_DOCUMENT_ID};
use crate::infra::storage::document::{home_from_json, home_to_json, item_from_json, item_to_json};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use url::Url;

use super::codec::{decode_fields, encode_fields};

const PAGE_SIZE: &str = "300";

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
    next_page_token: Option<String>,
}

impl Document {
    /// Last segment of `projects/.../documents/<collection>/<id>`
    fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }
}

/// Repository over the Firestore `documents` REST endpoints
pub struct FirestoreRepository {
    client: reqwest::Client,
    documents_url: Url,
    api_key: Option<String>,
    access_token: Option<String>,
}

impl FirestoreRepository {
    pub fn new(cfg: &FirestoreConfig) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), cfg)
    }

    pub fn with_client(client: reqwest::Client, cfg: &FirestoreConfig) -> Result<Self> {
        if cfg.project_id.is_empty() {
            return Err(anyhow!("firestore.project_id is required"));
        }
        let mut documents_url = Url::parse(&cfg.endpoint)
            .with_context(|| format!("invalid firestore endpoint '{}'", cfg.endpoint))?;
        documents_url
            .path_segments_mut()
            .map_err(|_| anyhow!("firestore endpoint cannot carry a path"))?
            .pop_if_empty()
            .extend([
                "v1",
                "projects",
                cfg.project_id.as_str(),
                "databases",
                cfg.database.as_str(),
                "documents",
            ]);

        Ok(Self {
            client,
            documents_url,
            api_key: cfg.api_key.clone().filter(|k| !k.is_empty()),
            access_token: cfg.access_token.clone().filter(|t| !t.is_empty()),
        })
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.documents_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("firestore endpoint cannot carry a path"))?
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut req = self.client.request(method, url);
        if let Some(key) = &self.api_key {
            req = req.query(&[("key", key)]);
        }
        if let Some(token) = &self.access_token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Map<String, Value>>> {
        let resp = self
            .request(Method::GET, self.url(&[collection, id])?)
            .send()
            .await
            .with_context(|| format!("GET {}/{}", collection, id))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let doc: Document = check(resp).await?.json().await?;
        Ok(Some(decode_fields(&doc.fields)))
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<(String, Map<String, Value>)>> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut req = self
                .request(Method::GET, self.url(&[collection])?)
                .query(&[("pageSize", PAGE_SIZE)]);
            if let Some(token) = &page_token {
                req = req.query(&[("pageToken", token)]);
            }
            let resp = req
                .send()
                .await
                .with_context(|| format!("list {}", collection))?;
            let page: ListResponse = check(resp).await?.json().await?;

            documents.extend(
                page.documents
                    .into_iter()
                    .map(|doc| (doc.id().to_string(), decode_fields(&doc.fields))),
            );

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(documents)
    }

    /// Write a document; with `must_exist` only the given fields are
    /// updated and a missing document yields `false`
    async fn write_document(
        &self,
        collection: &str,
        id: &str,
        data: &Map<String, Value>,
        must_exist: bool,
    ) -> Result<bool> {
        let mut req = self
            .request(Method::PATCH, self.url(&[collection, id])?)
            .json(&json!({ "fields": encode_fields(data) }));
        if must_exist {
            let mask: Vec<(&str, &str)> = data
                .keys()
                .map(|field| ("updateMask.fieldPaths", field.as_str()))
                .collect();
            req = req
                .query(&mask)
                .query(&[("currentDocument.exists", "true")]);
        }

        let resp = req
            .send()
            .await
            .with_context(|| format!("PATCH {}/{}", collection, id))?;
        if must_exist && resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        check(resp).await?;
        Ok(true)
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<()> {
        let resp = self
            .request(Method::DELETE, self.url(&[collection, id])?)
            .send()
            .await
            .with_context(|| format!("DELETE {}/{}", collection, id))?;
        check(resp).await?;
        Ok(())
    }
}

/// Turn a non-success response into an error carrying the body
async fn check(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = resp.url().path().to_string();
    let body = resp.text().await.unwrap_or_default();
    Err(anyhow!("firestore request {} failed with {}: {}", url, status, body))
}

#[async_trait]
impl ContentRepository for FirestoreRepository {
    async fn get_home(&self) -> Result<Option<HomeContent>> {
        self.get_document(HOME_COLLECTION, HOME_DOCUMENT_ID)
            .await?
            .map(|fields| home_from_json(Value::Object(fields)))
            .transpose()
    }

    async fn set_home(&self, home: &HomeContent) -> Result<()> {
        self.write_document(HOME_COLLECTION, HOME_DOCUMENT_ID, &home_to_json(home)?, false)
            .await?;
        Ok(())
    }

    async fn update_home(&self, home: &HomeContent) -> Result<bool> {
        self.write_document(HOME_COLLECTION, HOME_DOCUMENT_ID, &home_to_json(home)?, true)
            .await
    }

    async fn list_items(&self, collection: Collection) -> Result<Vec<ContentItem>> {
        self.list_documents(collection.as_str())
            .await?
            .into_iter()
            .map(|(id, fields)| item_from_json(&id, Value::Object(fields)))
            .collect()
    }

    async fn get_item(&self, collection: Collection, id: &str) -> Result<Option<ContentItem>> {
        self.get_document(collection.as_str(), id)
            .await?
            .map(|fields| item_from_json(id, Value::Object(fields)))
            .transpose()
    }

    async fn set_item(&self, collection: Collection, item: &ContentItem) -> Result<()> {
        self.write_document(collection.as_str(), &item.id, &item_to_json(item)?, false)
            .await?;
        Ok(())
    }

    async fn update_item(&self, collection: Collection, item: &ContentItem) -> Result<bool> {
        self.write_document(collection.as_str(), &item.id, &item_to_json(item)?, true)
            .await
    }

    async fn delete_item(&self, collection: Collection, id: &str) -> Result<()> {
        self.delete_document(collection.as_str(), id).await
    }
}
