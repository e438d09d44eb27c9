//! Landing page route handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use lego_store_core::ThemePreference;
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{Catalog, HERO_IMAGE};
use crate::error::Result;
use crate::faq::FaqAccordion;
use crate::filters;
use crate::icons::IconResolver;
use crate::state::AppState;
use crate::theme::{CookieStorage, ThemeStore};

/// Avatars shown next to the customer count in the hero.
const HERO_AVATARS: [&str; 4] = [
    "https://i.pravatar.cc/100?img=11",
    "https://i.pravatar.cc/100?img=12",
    "https://i.pravatar.cc/100?img=13",
    "https://i.pravatar.cc/100?img=14",
];

/// Query parameters for the landing page.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// Open FAQ entries, e.g. `0,2`.
    pub faq: Option<String>,
}

/// One accordion row, with its open state and the link that toggles it.
#[derive(Debug, Clone)]
pub struct FaqItemView {
    pub index: usize,
    pub question: &'static str,
    pub answer: &'static str,
    pub open: bool,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notice-success",
            Self::Error => "notice-error",
        }
    }
}

/// Feedback shown under the email capture form.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// State of the email capture form in the promo section.
#[derive(Debug, Clone, Default)]
pub struct PromoForm {
    /// Value to prefill the input with.
    pub email: String,
    pub notice: Option<Notice>,
}

/// Landing page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub theme: ThemePreference,
    pub icons: &'a IconResolver,
    pub catalog: &'a Catalog,
    pub hero_image: &'static str,
    pub hero_avatars: &'static [&'static str],
    pub faqs: Vec<FaqItemView>,
    pub promo: PromoForm,
}

impl<'a> HomeTemplate<'a> {
    #[must_use]
    pub fn new(
        state: &'a AppState,
        theme: ThemePreference,
        accordion: &FaqAccordion,
        promo: PromoForm,
    ) -> Self {
        let catalog = state.catalog();
        let faqs = catalog
            .faqs
            .iter()
            .enumerate()
            .map(|(index, entry)| FaqItemView {
                index,
                question: entry.question,
                answer: entry.answer,
                open: accordion.is_open(index),
                href: accordion.toggled(index).href(index),
            })
            .collect();

        Self {
            theme,
            icons: state.icons(),
            catalog,
            hero_image: HERO_IMAGE,
            hero_avatars: &HERO_AVATARS,
            faqs,
            promo,
        }
    }

    /// Render to an HTML response. Failures surface as `AppError::Template`.
    pub fn to_html(&self) -> Result<Html<String>> {
        Ok(Html(self.render()?))
    }
}

/// Display the landing page.
#[instrument(skip(state, theme))]
pub async fn home(
    State(state): State<AppState>,
    theme: ThemeStore<CookieStorage>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>> {
    let accordion = FaqAccordion::from_query(query.faq.as_deref(), state.catalog().faqs.len());
    HomeTemplate::new(&state, theme.get(), &accordion, PromoForm::default()).to_html()
}
