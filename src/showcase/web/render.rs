//! # Rendering
//!
//! HTML views are minijinja templates compiled once at startup. Handlers pass
//! plain serializable context structs; templates never see the store.

use super::templates;
use crate::error::Result;
use crate::model::{Product, Section};
use minijinja::Environment;
use serde::Serialize;

/// Site-wide strings every page can use.
#[derive(Debug, Clone, Serialize)]
pub struct SiteInfo {
    pub title: String,
    pub subtitle: String,
}

#[derive(Serialize)]
struct IndexView<'a> {
    site: &'a SiteInfo,
    products: &'a [Product],
    sections: &'a [Section],
}

#[derive(Serialize)]
struct ProductsView<'a> {
    site: &'a SiteInfo,
    products: &'a [Product],
}

#[derive(Serialize)]
struct ProductEditView<'a> {
    site: &'a SiteInfo,
    product: &'a Product,
}

#[derive(Serialize)]
struct SectionsView<'a> {
    site: &'a SiteInfo,
    sections: &'a [Section],
}

#[derive(Serialize)]
struct SectionEditView<'a> {
    site: &'a SiteInfo,
    section: &'a Section,
    bullets_str: String,
}

pub struct Renderer {
    env: Environment<'static>,
    site: SiteInfo,
}

impl Renderer {
    pub fn new(site: SiteInfo) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("base.html", templates::BASE)?;
        env.add_template("index.html", templates::INDEX)?;
        env.add_template("admin.html", templates::ADMIN)?;
        env.add_template("admin_edit.html", templates::ADMIN_EDIT)?;
        env.add_template("admin_sections.html", templates::ADMIN_SECTIONS)?;
        env.add_template("admin_sections_edit.html", templates::ADMIN_SECTIONS_EDIT)?;
        Ok(Self { env, site })
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }

    pub fn index(&self, products: &[Product], sections: &[Section]) -> Result<String> {
        self.render(
            "index.html",
            IndexView {
                site: &self.site,
                products,
                sections,
            },
        )
    }

    pub fn products(&self, products: &[Product]) -> Result<String> {
        self.render(
            "admin.html",
            ProductsView {
                site: &self.site,
                products,
            },
        )
    }

    pub fn product_edit(&self, product: &Product) -> Result<String> {
        self.render(
            "admin_edit.html",
            ProductEditView {
                site: &self.site,
                product,
            },
        )
    }

    pub fn sections(&self, sections: &[Section]) -> Result<String> {
        self.render(
            "admin_sections.html",
            SectionsView {
                site: &self.site,
                sections,
            },
        )
    }

    pub fn section_edit(&self, section: &Section) -> Result<String> {
        self.render(
            "admin_sections_edit.html",
            SectionEditView {
                site: &self.site,
                section,
                bullets_str: crate::commands::sections::format_bullets(&section.bullets),
            },
        )
    }
}
