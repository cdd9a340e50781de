//! Search view: query input, trigger handling and result display.

use dealscout_core::api::SearchRequest;
use dealscout_core::session::SearchSession;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::SearchClient;
use crate::components::ProductGrid;

/// Search page controller.
///
/// Owns the [`SearchSession`] and translates user intent into exactly one
/// outbound request per trigger (button click or Enter in the input). All
/// lifecycle transitions go through the session's named transition
/// functions; the grid below renders from the session's current state.
///
/// Overlapping triggers are not prevented here — each one fires its own
/// request, and the session's token guard makes the latest issued request
/// win while stale settles are discarded.
#[component]
pub fn SearchView(
    /// Search endpoint override; defaults to the fixed service path.
    #[prop(optional)]
    endpoint: Option<String>,
) -> impl IntoView {
    let session = RwSignal::new(SearchSession::new());
    let client = StoredValue::new(match endpoint {
        Some(endpoint) => SearchClient::new(endpoint),
        None => SearchClient::default(),
    });
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let run_search = move || {
        // Drop keyboard focus so a held Enter key cannot re-trigger while
        // the request is out.
        if let Some(input) = input_ref.get() {
            let _ = input.blur();
        }

        let query = session.with_untracked(|s| s.query().to_string());
        let Some(token) = session.try_update(|s| s.begin_search()) else {
            return;
        };

        let client = client.get_value();
        spawn_local(async move {
            let request = SearchRequest::new(query);
            let result = client.search(&request).await;
            session.update(|s| match result {
                Ok(response) => {
                    s.on_search_succeeded(token, response.products, response.message);
                }
                Err(error) => {
                    s.on_search_failed(token, &error);
                }
            });
        });
    };

    let searching = Signal::derive(move || session.with(|s| s.is_searching()));
    let products = Signal::derive(move || session.with(|s| s.results().to_vec()));
    let message = move || session.with(|s| s.message().map(str::to_string));

    view! {
        <section class="search-view">
            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Search..."
                    node_ref=input_ref
                    prop:value=move || session.with(|s| s.query().to_string())
                    on:input=move |ev| {
                        session.update(|s| s.set_query(event_target_value(&ev)));
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            run_search();
                        }
                    }
                />
                <button
                    class="search-button"
                    aria-label="Search"
                    on:click=move |_| run_search()
                >
                    <SearchIcon/>
                </button>
            </div>
            {move || {
                message().map(|text| view! { <p class="search-message">{text}</p> })
            }}
            <ProductGrid products=products searching=searching/>
        </section>
    }
}

#[component]
fn SearchIcon() -> impl IntoView {
    view! {
        <svg
            width="20"
            height="20"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
        >
            <circle cx="11" cy="11" r="8"></circle>
            <line x1="21" y1="21" x2="16.65" y2="16.65"></line>
        </svg>
    }
}
