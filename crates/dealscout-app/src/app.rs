//! Application shell and page layout.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Style, Title};

use crate::components::SearchView;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="DealScout"/>
        <Style>{APP_STYLES}</Style>
        <main class="page">
            <div class="page-inner">
                <Header/>
                <SearchView/>
            </div>
        </main>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <span class="brand">"DealScout"</span>
        </header>
    }
}

const APP_STYLES: &str = r##"
:root {
    --bg: #121212;
    --surface: #1a1a1a;
    --surface-raised: #1e1e1e;
    --border: #333;
    --text: #e5e5e5;
    --text-muted: #9ca3af;
    --accent: #16a34a;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.page { min-height: 100vh; padding: 1rem; }

.page-inner { max-width: 72rem; margin: 0 auto; }

.site-header {
    display: flex;
    justify-content: center;
    align-items: center;
    margin: 1.5rem 0 2.5rem;
}

.brand {
    font-size: 1.75rem;
    font-weight: 700;
    letter-spacing: 0.05em;
    border: 1px solid var(--text);
    border-radius: 9999px;
    padding: 0.5rem 1.5rem;
}

/* Search bar */
.search-bar { position: relative; margin-bottom: 2rem; }

.search-bar input {
    width: 100%;
    background: var(--surface-raised);
    border: 1px solid var(--border);
    border-radius: 9999px;
    padding: 0.75rem 3.5rem 0.75rem 1.5rem;
    color: var(--text);
    font-size: 1rem;
}

.search-bar input:focus { outline: none; }

.search-button {
    position: absolute;
    right: 1rem;
    top: 50%;
    transform: translateY(-50%);
    background: none;
    border: none;
    color: var(--text);
    cursor: pointer;
}

.search-message {
    margin-bottom: 1.5rem;
    color: var(--text-muted);
}

/* Product grid: 1 column, 2 from 640px, 4 from 1024px */
.product-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1rem;
}

@media (min-width: 640px) {
    .product-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .product-grid { grid-template-columns: repeat(4, 1fr); }
}

.product-card {
    background: var(--surface);
    border-radius: 0.5rem;
    overflow: hidden;
    display: flex;
    flex-direction: column;
}

.product-media { position: relative; display: block; }

.product-image {
    aspect-ratio: 1;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    background: #1f2937;
}

.product-image img {
    width: 100%;
    height: 100%;
    object-fit: contain;
}

.discount-badge {
    position: absolute;
    top: 0.5rem;
    left: 0.5rem;
    background: var(--accent);
    color: white;
    padding: 0.25rem 0.5rem;
    font-size: 0.875rem;
    font-weight: 500;
    border-radius: 0.25rem;
}

.product-info {
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 1rem;
    flex-grow: 1;
}

.product-row {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 0.5rem;
}

.product-details { min-width: 0; flex: 1; }

.product-title {
    font-size: 1.05rem;
    font-weight: 500;
    white-space: nowrap;
    overflow: hidden;
    text-overflow: ellipsis;
}

.product-price {
    display: flex;
    align-items: flex-end;
    gap: 0.5rem;
}

.sale-price { font-size: 1.75rem; font-weight: 700; }

.list-price {
    color: var(--text-muted);
    text-decoration: line-through;
    font-size: 1.05rem;
}

.source-badge {
    width: 3rem;
    height: 3rem;
    object-fit: contain;
    border-radius: 0.375rem;
    flex-shrink: 0;
}

.buy-button {
    display: block;
    width: 100%;
    text-align: center;
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: 0.375rem;
    color: var(--text);
    text-decoration: none;
    padding: 0.5rem 0;
    margin-top: auto;
}

.buy-button:hover { background: var(--border); }

/* Skeleton loading */
.skeleton-image {
    aspect-ratio: 1;
    background: linear-gradient(90deg, #1f2937 25%, #27303f 50%, #1f2937 75%);
    background-size: 200% 100%;
    animation: shimmer 1.5s infinite;
}

.skeleton-text {
    height: 1.25rem;
    border-radius: 0.25rem;
    background: linear-gradient(90deg, #1f2937 25%, #27303f 50%, #1f2937 75%);
    background-size: 200% 100%;
    animation: shimmer 1.5s infinite;
}

.skeleton-text.short { width: 40%; }

@keyframes shimmer {
    0% { background-position: 200% 0; }
    100% { background-position: -200% 0; }
}
"##;
