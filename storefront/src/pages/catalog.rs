//! Home, listings, product detail and search results.

use blush_commerce::data::FetchState;
use blush_commerce::prelude::*;
use blush_core::StoreConfig;
use blush_router::{decode_query, Screen};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_location, use_params_map};

use crate::components::{category_label, ErrorPanel, LoadingScreen, ProductGrid};
use crate::context::{CartContext, WishlistContext};
use crate::hooks::{use_product, use_products};

#[component]
pub fn HomePage() -> impl IntoView {
    let options = Signal::derive(|| ListOptions::default().with_page(1, 8));
    let featured = use_products(options);

    view! {
        <Title text=Screen::Home.title()/>
        <h2>"Bestsellers"</h2>
        <ProductGrid fetch=featured empty_title="New arrivals are on their way"/>
    }
}

/// `/products` and `/products/:category`.
#[component]
pub fn ProductListingPage() -> impl IntoView {
    let params = use_params_map();
    let per_page = expect_context::<StoreConfig>().per_page;
    let category = Memo::new(move |_| params.with(|p| p.get("category")));

    let options = Signal::derive(move || {
        let options = ListOptions::default().with_page(1, per_page);
        match category.get() {
            Some(category) => options.with_category(category),
            None => options,
        }
    });
    let products = use_products(options);

    let heading = move || {
        category
            .get()
            .map(|c| category_label(&c))
            .unwrap_or_else(|| "All products".to_string())
    };

    view! {
        <Title text=Screen::ProductListing.title()/>
        <h2>{heading}</h2>
        <ProductGrid fetch=products empty_title="No products here yet"/>
    }
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Signal::derive(move || params.with(|p| p.get("slug").unwrap_or_default()));
    let product = use_product(slug);
    let cart = CartContext::expect();
    let wishlist = WishlistContext::expect();
    let notice = RwSignal::new(None::<String>);

    let body = move || match product.state.get() {
        FetchState::Idle | FetchState::Pending => view! { <LoadingScreen/> }.into_any(),
        FetchState::Failed(e) => view! {
            <ErrorPanel message=format!("Couldn't load this product: {}", e) on_retry=product.refetch/>
        }
        .into_any(),
        FetchState::Ready(None) => view! {
            <div class="empty-state">
                <h3>"Product not found"</h3>
                <a href="/products" class="btn">"Back to products"</a>
            </div>
        }
        .into_any(),
        FetchState::Ready(Some(p)) => {
            let id = p.id.clone();
            let for_cart = p.clone();
            let saved = {
                let id = id.clone();
                move || wishlist.contains(&id)
            };
            view! {
                <article class="product-detail">
                    <img src=p.image_url.clone().unwrap_or_default() alt=p.name.clone()/>
                    <div>
                        <p class="brand">{p.brand.clone()}</p>
                        <h1>{p.name.clone()}</h1>
                        <p class="price">{p.price.display()}</p>
                        <button
                            class="btn"
                            disabled=!p.in_stock
                            on:click=move |_| {
                                let message = match cart.add(&for_cart, 1) {
                                    Ok(()) => "Added to bag".to_string(),
                                    Err(e) => e.to_string(),
                                };
                                notice.set(Some(message));
                            }
                        >
                            "Add to bag"
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| {
                            wishlist.toggle(id.clone());
                        }>
                            {move || if saved() { "Saved" } else { "Save to wishlist" }}
                        </button>
                        {move || notice.get().map(|n| view! { <p class="notice">{n}</p> })}
                    </div>
                </article>
            }
            .into_any()
        }
    };

    view! {
        <Title text=Screen::ProductDetail.title()/>
        {body}
    }
}

/// `/search?q=...`
#[component]
pub fn SearchPage() -> impl IntoView {
    let location = use_location();
    let query = Memo::new(move |_| decode_query(&location.search.get()).unwrap_or_default());
    let options = Signal::derive(move || ListOptions::default().with_query(query.get()));
    let results = use_products(options);

    view! {
        <Title text=Screen::Search.title()/>
        <h2>"Results for \u{201c}" {move || query.get()} "\u{201d}"</h2>
        <ProductGrid fetch=results empty_title="Nothing matched your search"/>
    }
}
