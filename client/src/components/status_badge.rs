//! Colored pill showing a canonical moderation status.

use content::CanonicalStatus;
use leptos::prelude::*;

#[component]
pub fn StatusBadge(status: CanonicalStatus) -> impl IntoView {
    view! { <span class=status.badge_class() data-status=status.as_str()>{status.label()}</span> }
}
