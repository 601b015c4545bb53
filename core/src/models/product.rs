// core/src/models/product.rs

use serde::{Deserialize, Serialize};

use super::{decode, nullable, reject_null_keys, Violations};
use crate::error::StoreResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Urls {
  pub regular: String,
  pub small: String,
  pub thumb: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
  #[serde(rename = "self")]
  pub self_link: String,
  pub html: String,
}

/// The photographer credited on a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUser {
  pub id: String,
  pub first_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub portfolio_url: Option<String>,
  pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
  pub title: String,
}

impl Tag {
  pub fn new(title: impl Into<String>) -> Self {
    Self { title: title.into() }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub alt_description: Option<String>,
  pub likes: i64,
  pub urls: Urls,
  pub links: Links,
  pub user: ProductUser,
  #[serde(default)]
  pub tags: Vec<Tag>,
}

impl Product {
  pub fn has_tag(&self, title: &str) -> bool {
    self.tags.iter().any(|tag| tag.title == title)
  }

  /// Checks every required field of the document.
  pub fn validate(&self) -> StoreResult<()> {
    let mut violations = Violations::default();
    violations.require("urls.regular", &self.urls.regular);
    violations.require("urls.small", &self.urls.small);
    violations.require("urls.thumb", &self.urls.thumb);
    violations.require("links.self", &self.links.self_link);
    violations.require("links.html", &self.links.html);
    violations.require("user.id", &self.user.id);
    violations.require("user.first_name", &self.user.first_name);
    violations.require("user.username", &self.user.username);
    for (idx, tag) in self.tags.iter().enumerate() {
      violations.require(&format!("tags.{}.title", idx), &tag.title);
    }
    violations.into_result("Product")
  }
}

/// Fields accepted by `ProductStore::create`. Any `id` in the input is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub alt_description: Option<String>,
  pub likes: i64,
  pub urls: Urls,
  pub links: Links,
  pub user: ProductUser,
  #[serde(default)]
  pub tags: Vec<Tag>,
}

impl NewProduct {
  /// Parses a raw JSON payload, reporting missing or mistyped fields as a validation error.
  pub fn from_json(value: serde_json::Value) -> StoreResult<Self> {
    decode("Product", value)
  }

  pub(crate) fn into_product(self, id: String) -> Product {
    Product {
      id,
      description: self.description,
      alt_description: self.alt_description,
      likes: self.likes,
      urls: self.urls,
      links: self.links,
      user: self.user,
      tags: self.tags,
    }
  }
}

/// Sparse update for a product. Each present key replaces the stored value wholesale;
/// `null` clears `description` and `alt_description` and is rejected for the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductChanges {
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub description: Option<Option<String>>,
  #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
  pub alt_description: Option<Option<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub likes: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub urls: Option<Urls>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub links: Option<Links>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user: Option<ProductUser>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tags: Option<Vec<Tag>>,
}

impl ProductChanges {
  const REQUIRED_KEYS: &'static [&'static str] = &["likes", "urls", "links", "user", "tags"];

  pub fn from_json(value: serde_json::Value) -> StoreResult<Self> {
    reject_null_keys("Product", &value, Self::REQUIRED_KEYS)?;
    decode("Product", value)
  }

  pub fn is_empty(&self) -> bool {
    *self == Self::default()
  }

  pub fn apply_to(self, product: &mut Product) {
    if let Some(description) = self.description {
      product.description = description;
    }
    if let Some(alt_description) = self.alt_description {
      product.alt_description = alt_description;
    }
    if let Some(likes) = self.likes {
      product.likes = likes;
    }
    if let Some(urls) = self.urls {
      product.urls = urls;
    }
    if let Some(links) = self.links {
      product.links = links;
    }
    if let Some(user) = self.user {
      product.user = user;
    }
    if let Some(tags) = self.tags {
      product.tags = tags;
    }
  }
}
