//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::{DASHBOARD_PATH, SIGN_IN_PATH};

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

const HERO_TITLE: &str = "Enterprise-Grade Database Solutions";
const HERO_SUBTITLE: &str = "Secure, scalable, and reliable database infrastructure for modern organizations";

pub(crate) const FEATURES: [(&str, &str); 6] = [
    (
        "Advanced Security",
        "Row-level security, encryption, and role-based access control for maximum data protection",
    ),
    ("Optimized Schema", "Carefully designed database schema with proper relationships and constraints"),
    ("Automated Backups", "Point-in-time recovery with encrypted backups and 30-day retention"),
    ("Multi-Tenant", "Built-in organization management with granular access controls"),
    ("Document Security", "AES-256 encryption for sensitive documents with secure key management"),
    ("Real-Time Ready", "Built-in support for real-time updates and collaborative features"),
];

pub(crate) const STATS: [(&str, &str); 4] = [
    ("99.99%", "Uptime"),
    ("256-bit", "Encryption"),
    ("30 Days", "Backup Retention"),
    ("24/7", "Support"),
];

/// Hero, feature cards and a call to action. Signed-in visitors are offered
/// the dashboard instead of the sign-in form.
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cta_href = move || if auth.get().is_authenticated() { DASHBOARD_PATH } else { SIGN_IN_PATH };
    let cta_label = move || if auth.get().is_authenticated() { "Open Dashboard" } else { "Get Started" };

    view! {
        <div class="landing-page">
            <section class="landing-hero">
                <h1 class="landing-hero__title">{HERO_TITLE}</h1>
                <p class="landing-hero__subtitle">{HERO_SUBTITLE}</p>
                <a class="btn btn--primary landing-hero__cta" href=cta_href>
                    {cta_label}
                </a>
            </section>

            <section class="landing-features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| view! { <FeatureCard title=*title body=*body/> })
                    .collect::<Vec<_>>()}
            </section>

            <section class="landing-stats">
                {STATS
                    .iter()
                    .map(|(value, label)| view! { <StatCard value=*value label=*label/> })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}

#[component]
fn FeatureCard(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3>{title}</h3>
            <p>{body}</p>
        </div>
    }
}

#[component]
fn StatCard(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
