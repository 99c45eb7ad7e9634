//! Hypermedia decoration of review responses.
//!
//! Applied by the route handlers right before serialization, the models and the
//! business logic never see links.

use crate::models;
use serde::Serialize;

use super::Enriched;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    fn new(base: &str, path: String) -> Self {
        Self {
            href: format!("{}{}", base.trim_end_matches('/'), path),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    #[serde(rename = "product-reviews")]
    pub product_reviews: Link,
    #[serde(rename = "user-reviews")]
    pub user_reviews: Link,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelfLink {
    #[serde(rename = "self")]
    pub self_link: Link,
}

/// A single review with its `_links`
#[derive(Debug, Clone, Serialize)]
pub struct Linked<T> {
    #[serde(flatten)]
    pub item: T,
    #[serde(rename = "_links")]
    pub links: ReviewLinks,
}

#[derive(Debug, Clone, Serialize)]
pub struct Embedded<T> {
    pub reviews: Vec<Linked<T>>,
}

/// A list of reviews, each with its own `_links`, plus a link to the list itself
#[derive(Debug, Clone, Serialize)]
pub struct Collection<T> {
    #[serde(rename = "_embedded")]
    pub embedded: Embedded<T>,
    #[serde(rename = "_links")]
    pub links: SelfLink,
}

/// Anything carrying the ids a review link is made of
pub trait Linkable {
    fn review_id(&self) -> i64;
    fn product_id(&self) -> i64;
    fn user_id(&self) -> i64;
}

impl Linkable for models::Review {
    fn review_id(&self) -> i64 {
        self.id
    }

    fn product_id(&self) -> i64 {
        self.product_id
    }

    fn user_id(&self) -> i64 {
        self.user_id
    }
}

impl Linkable for Enriched {
    fn review_id(&self) -> i64 {
        self.id
    }

    fn product_id(&self) -> i64 {
        self.product_id
    }

    fn user_id(&self) -> i64 {
        self.user_id
    }
}

pub fn review_path(id: i64) -> String {
    format!("/api/reviews/{}", id)
}

pub fn product_reviews_path(product_id: i64) -> String {
    format!("/api/reviews/product/{}", product_id)
}

pub fn user_reviews_path(user_id: i64) -> String {
    format!("/api/reviews/user/{}", user_id)
}

impl<T: Linkable> Linked<T> {
    pub fn new(item: T, base: &str) -> Self {
        let links = ReviewLinks {
            self_link: Link::new(base, review_path(item.review_id())),
            product_reviews: Link::new(base, product_reviews_path(item.product_id())),
            user_reviews: Link::new(base, user_reviews_path(item.user_id())),
        };

        Self { item, links }
    }
}

impl<T: Linkable> Collection<T> {
    pub fn new(items: Vec<T>, base: &str, self_path: String) -> Self {
        let reviews = items
            .into_iter()
            .map(|item| Linked::new(item, base))
            .collect();

        Self {
            embedded: Embedded { reviews },
            links: SelfLink {
                self_link: Link::new(base, self_path),
            },
        }
    }
}
