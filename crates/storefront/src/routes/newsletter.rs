//! Newsletter subscription route handler.
//!
//! The promo section offers 20% off the first order for subscribing. No
//! mailing backend is wired up yet: a valid address is logged and
//! acknowledged, nothing is stored.

use axum::{Form, extract::State, response::Html};
use lego_store_core::Email;
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::faq::FaqAccordion;
use crate::routes::home::{HomeTemplate, Notice, NoticeKind, PromoForm};
use crate::state::AppState;
use crate::theme::{CookieStorage, ThemeStore};

const SUBSCRIBED_MESSAGE: &str = "Спасибо! Промокод на скидку 20% придёт на";
const INVALID_MESSAGE: &str = "Пожалуйста, введите корректный email.";

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    pub email: String,
}

/// Subscribe to the newsletter.
///
/// Re-renders the landing page with a notice in the promo section. An invalid
/// address keeps the input prefilled so it can be corrected.
#[instrument(skip(state, theme, form))]
pub async fn subscribe(
    State(state): State<AppState>,
    theme: ThemeStore<CookieStorage>,
    Form(form): Form<SubscribeForm>,
) -> Result<Html<String>> {
    let promo = match Email::normalize(&form.email) {
        Ok(email) => {
            add_breadcrumb(
                "newsletter",
                "Newsletter subscription",
                Some(&[("domain", email.domain())]),
            );
            tracing::info!(email = %email, "Newsletter subscription received");
            PromoForm {
                email: String::new(),
                notice: Some(Notice {
                    kind: NoticeKind::Success,
                    message: format!("{SUBSCRIBED_MESSAGE} {email}"),
                }),
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected newsletter address");
            PromoForm {
                email: form.email.trim().to_string(),
                notice: Some(Notice {
                    kind: NoticeKind::Error,
                    message: INVALID_MESSAGE.to_string(),
                }),
            }
        }
    };

    HomeTemplate::new(&state, theme.get(), &FaqAccordion::default(), promo).to_html()
}
