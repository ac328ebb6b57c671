use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_LINK: &str = "#";
pub const DEFAULT_IMAGE: &str = "/static/img/illus1.png";

/// The two record sets the site is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Sections,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Products, Collection::Sections];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Sections => "sections",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name())
    }

    /// Prefix put in front of the numeric part of every new id.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Collection::Products => "p",
            Collection::Sections => "s",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed element of a collection document.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const COLLECTION: Collection;

    fn id(&self) -> &str;
}

fn default_link() -> String {
    DEFAULT_LINK.to_string()
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub badge: String,
    #[serde(default = "default_link")]
    pub link: String,
    // Keys written by hand into the document survive a load/save cycle.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    pub fn new(id: String, draft: ProductDraft) -> Self {
        Self {
            id,
            tag: draft.tag,
            title: draft.title,
            desc: draft.desc,
            price: draft.price,
            badge: draft.badge,
            link: draft.link,
            extra: serde_json::Map::new(),
        }
    }

    /// Overwrite every editable field; the id stays.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.title = draft.title;
        self.desc = draft.desc;
        self.price = draft.price;
        self.tag = draft.tag;
        self.badge = draft.badge;
        self.link = draft.link;
    }
}

impl Record for Product {
    const COLLECTION: Collection = Collection::Products;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Editable fields of a product, as they arrive from the admin form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub desc: String,
    pub price: i64,
    pub tag: String,
    pub badge: String,
    pub link: String,
}

impl ProductDraft {
    pub fn new(title: impl Into<String>, desc: impl Into<String>, price: i64) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
            price,
            tag: String::new(),
            badge: String::new(),
            link: default_link(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = badge.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub reverse: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record for Section {
    const COLLECTION: Collection = Collection::Sections;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Editable fields of a section in their raw form-encoded shape.
///
/// `bullets` is a comma separated list, `reverse` is the `"1"`/`"0"` flag
/// the admin form posts. Parsing happens in the sections service.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionDraft {
    pub title: String,
    pub desc: String,
    pub bullets: String,
    pub image: String,
    pub reverse: String,
}

impl SectionDraft {
    pub fn new(title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            desc: desc.into(),
            bullets: String::new(),
            image: String::new(),
            reverse: "0".to_string(),
        }
    }

    pub fn with_bullets(mut self, bullets: impl Into<String>) -> Self {
        self.bullets = bullets.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_reverse(mut self, reverse: impl Into<String>) -> Self {
        self.reverse = reverse.into();
        self
    }
}
