//! Product grid renderer.

use dealscout_core::grid::{self, GridView, ProductTile};
use dealscout_core::product::Product;
use leptos::prelude::*;

/// Responsive grid of product tiles.
///
/// Pure presentation: what it shows is entirely a function of `searching`
/// and `products`. While a search is outstanding it renders a fixed set of
/// skeleton tiles regardless of any stale results; settled and empty it
/// renders an empty grid (a "no results" message, if any, comes from the
/// session upstream).
#[component]
pub fn ProductGrid(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] searching: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="product-grid">
            {move || match grid::plan(searching.get(), &products.get()) {
                GridView::Loading { placeholders } => (0..placeholders)
                    .map(|_| view! { <TileSkeleton/> }.into_any())
                    .collect::<Vec<_>>(),
                GridView::Tiles(tiles) => tiles
                    .into_iter()
                    .map(|tile| view! { <Tile tile=tile/> }.into_any())
                    .collect::<Vec<_>>(),
            }}
        </div>
    }
}

#[component]
fn Tile(tile: ProductTile) -> impl IntoView {
    let image_alt = tile.title.clone();
    let logo_alt = format!("{} logo", tile.source);
    let media_href = tile.detail_url.clone();
    let buy_href = tile.detail_url.clone();

    view! {
        <article class="product-card">
            <a
                href=media_href
                target="_blank"
                rel="noopener noreferrer"
                class="product-media"
            >
                <div class="product-image">
                    <img src=tile.image_src alt=image_alt loading="lazy"/>
                </div>
                {tile
                    .discount_badge
                    .map(|badge| view! { <span class="discount-badge">{badge}</span> })}
            </a>
            <div class="product-info">
                <div class="product-row">
                    <div class="product-details">
                        <h3 class="product-title">{tile.title}</h3>
                        <div class="product-price">
                            <span class="sale-price">{tile.sale_price_display}</span>
                            {tile
                                .list_price_display
                                .map(|list| view! { <span class="list-price">{list}</span> })}
                        </div>
                    </div>
                    <img class="source-badge" src=tile.logo_asset alt=logo_alt/>
                </div>
                <a
                    href=buy_href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="buy-button"
                >
                    "Buy"
                </a>
            </div>
        </article>
    }
}

#[component]
fn TileSkeleton() -> impl IntoView {
    view! {
        <article class="product-card skeleton">
            <div class="skeleton-image"></div>
            <div class="product-info">
                <div class="skeleton-text"></div>
                <div class="skeleton-text short"></div>
            </div>
        </article>
    }
}
