use super::AppState;
use crate::error::ShowcaseError;
use axum::{extract::State, response::Html};
use serde::{Deserialize, Deserializer};

type PageResult = Result<Html<String>, ShowcaseError>;

pub async fn home(State(state): State<AppState>) -> PageResult {
    let landing = state.api.landing()?;
    let html = state.renderer.index(&landing.products, &landing.sections)?;
    Ok(Html(html))
}

fn default_link() -> String {
    crate::model::DEFAULT_LINK.to_string()
}

fn default_reverse() -> String {
    "0".to_string()
}

// Flattened form fields reach serde as strings, so numbers are parsed here.
fn integer_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}

pub mod products {
    use super::{default_link, integer_field, PageResult};
    use crate::error::ShowcaseError;
    use crate::model::ProductDraft;
    use crate::web::AppState;
    use axum::{
        extract::{Path, State},
        response::{Html, IntoResponse, Redirect, Response},
        Form,
    };
    use serde::Deserialize;

    const LIST_URL: &str = "/admin";

    #[derive(Debug, Deserialize)]
    pub struct ProductForm {
        pub title: String,
        pub desc: String,
        #[serde(deserialize_with = "integer_field")]
        pub price: i64,
        #[serde(default)]
        pub tag: String,
        #[serde(default)]
        pub badge: String,
        #[serde(default = "default_link")]
        pub link: String,
    }

    impl From<ProductForm> for ProductDraft {
        fn from(f: ProductForm) -> Self {
            ProductDraft::new(f.title, f.desc, f.price)
                .with_tag(f.tag)
                .with_badge(f.badge)
                .with_link(f.link)
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct ProductEditForm {
        pub pid: String,
        #[serde(flatten)]
        pub form: ProductForm,
    }

    #[derive(Debug, Deserialize)]
    pub struct DeleteForm {
        pub pid: String,
    }

    pub async fn list(State(state): State<AppState>) -> PageResult {
        let products = state.api.list_products()?;
        Ok(Html(state.renderer.products(&products)?))
    }

    pub async fn add(
        State(state): State<AppState>,
        Form(form): Form<ProductForm>,
    ) -> Result<Redirect, ShowcaseError> {
        state.api.add_product(form.into())?;
        Ok(Redirect::to(LIST_URL))
    }

    pub async fn edit_form(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Response, ShowcaseError> {
        match state.api.get_product(&id)? {
            Some(product) => Ok(Html(state.renderer.product_edit(&product)?).into_response()),
            None => Ok(Redirect::to(LIST_URL).into_response()),
        }
    }

    pub async fn edit(
        State(state): State<AppState>,
        Form(form): Form<ProductEditForm>,
    ) -> Result<Redirect, ShowcaseError> {
        state.api.update_product(&form.pid, form.form.into())?;
        Ok(Redirect::to(LIST_URL))
    }

    pub async fn delete(
        State(state): State<AppState>,
        Form(form): Form<DeleteForm>,
    ) -> Result<Redirect, ShowcaseError> {
        state.api.delete_product(&form.pid)?;
        Ok(Redirect::to(LIST_URL))
    }
}

pub mod sections {
    use super::{default_reverse, PageResult};
    use crate::error::ShowcaseError;
    use crate::model::SectionDraft;
    use crate::web::AppState;
    use axum::{
        extract::{Path, State},
        response::{Html, IntoResponse, Redirect, Response},
        Form,
    };
    use serde::Deserialize;

    const LIST_URL: &str = "/admin/sections";

    #[derive(Debug, Deserialize)]
    pub struct SectionForm {
        pub title: String,
        pub desc: String,
        #[serde(default)]
        pub bullets: String,
        #[serde(default)]
        pub image: String,
        #[serde(default = "default_reverse")]
        pub reverse: String,
    }

    impl From<SectionForm> for SectionDraft {
        fn from(f: SectionForm) -> Self {
            SectionDraft::new(f.title, f.desc)
                .with_bullets(f.bullets)
                .with_image(f.image)
                .with_reverse(f.reverse)
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct SectionEditForm {
        pub sid: String,
        #[serde(flatten)]
        pub form: SectionForm,
    }

    #[derive(Debug, Deserialize)]
    pub struct DeleteForm {
        pub sid: String,
    }

    pub async fn list(State(state): State<AppState>) -> PageResult {
        let sections = state.api.list_sections()?;
        Ok(Html(state.renderer.sections(&sections)?))
    }

    pub async fn add(
        State(state): State<AppState>,
        Form(form): Form<SectionForm>,
    ) -> Result<Redirect, ShowcaseError> {
        state.api.add_section(form.into())?;
        Ok(Redirect::to(LIST_URL))
    }

    pub async fn edit_form(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Response, ShowcaseError> {
        match state.api.get_section(&id)? {
            Some(section) => Ok(Html(state.renderer.section_edit(&section)?).into_response()),
            None => Ok(Redirect::to(LIST_URL).into_response()),
        }
    }

    pub async fn edit(
        State(state): State<AppState>,
        Form(form): Form<SectionEditForm>,
    ) -> Result<Redirect, ShowcaseError> {
        state.api.update_section(&form.sid, form.form.into())?;
        Ok(Redirect::to(LIST_URL))
    }

    pub async fn delete(
        State(state): State<AppState>,
        Form(form): Form<DeleteForm>,
    ) -> Result<Redirect, ShowcaseError> {
        state.api.delete_section(&form.sid)?;
        Ok(Redirect::to(LIST_URL))
    }
}
