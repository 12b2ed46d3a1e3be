use leptos::prelude::*;

/// 404 fallback for unknown routes.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="not-found">
			<h1>"404"</h1>
			<p>"This page got garbage-collected."</p>
			<a href="/">"Back to the portfolio"</a>
		</main>
	}
}
