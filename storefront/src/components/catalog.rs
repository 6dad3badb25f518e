//! Product cards, grids and filters.

use blush_commerce::data::FetchState;
use blush_commerce::prelude::*;
use leptos::prelude::*;
use leptos_router::components::A;

use super::{EmptyState, ErrorPanel, SkeletonGrid};
use crate::context::{CartContext, WishlistContext};
use crate::hooks::Fetch;

/// Category handles and their labels.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("skincare", "Skincare"),
    ("makeup", "Makeup"),
    ("haircare", "Haircare"),
    ("fragrance", "Fragrance"),
    ("bath-body", "Bath & Body"),
];

pub(crate) fn category_label(handle: &str) -> String {
    CATEGORIES
        .iter()
        .find(|(h, _)| *h == handle)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| handle.replace('-', " "))
}

#[component]
pub fn FilterSidebar() -> impl IntoView {
    view! {
        <aside class="filter-sidebar">
            <h3>"Categories"</h3>
            <ul>
                <li><A href="/products">"All products"</A></li>
                {CATEGORIES
                    .iter()
                    .map(|(handle, label)| view! {
                        <li><A href=format!("/products/{}", handle)>{*label}</A></li>
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = CartContext::expect();
    let wishlist = WishlistContext::expect();
    let notice = RwSignal::new(None::<String>);

    let href = product.href();
    let price = product.price.display();
    let id = product.id.clone();
    let saved = {
        let id = id.clone();
        move || wishlist.contains(&id)
    };
    let in_stock = product.in_stock;

    let add = {
        let product = product.clone();
        move |_| {
            let message = match cart.add(&product, 1) {
                Ok(()) => "Added to bag".to_string(),
                Err(e) => e.to_string(),
            };
            notice.set(Some(message));
        }
    };

    let image_src = product.image_url.clone().unwrap_or_default();
    let image_alt = product.name.clone();
    let name = product.name.clone();

    view! {
        <div class="product-card">
            <A href=href.clone()>
                <img src=image_src alt=image_alt/>
            </A>
            <div class="product-info">
                <p class="brand">{product.brand.clone()}</p>
                <A href=href>
                    <h3>{name}</h3>
                </A>
                <p class="price">{price}</p>
                <div class="product-actions">
                    <button class="btn" disabled=!in_stock on:click=add>
                        {if in_stock { "Add to bag" } else { "Out of stock" }}
                    </button>
                    <button
                        class="btn btn-icon"
                        aria-pressed=move || saved().to_string()
                        on:click=move |_| {
                            wishlist.toggle(id.clone());
                        }
                    >
                        "♡"
                    </button>
                </div>
                {move || notice.get().map(|n| view! { <p class="notice">{n}</p> })}
            </div>
        </div>
    }
}

/// Grid over a product fetch with loading, error and empty states.
#[component]
pub fn ProductGrid(
    fetch: Fetch<Page<Product>>,
    #[prop(into)] empty_title: String,
) -> impl IntoView {
    move || match fetch.state.get() {
        FetchState::Idle | FetchState::Pending => view! { <SkeletonGrid/> }.into_any(),
        FetchState::Failed(e) => view! {
            <ErrorPanel message=format!("Couldn't load products: {}", e) on_retry=fetch.refetch/>
        }
        .into_any(),
        FetchState::Ready(page) if page.is_empty() => view! {
            <EmptyState
                title=empty_title.clone()
                hint="Try another category or search term."
                action=("/products".to_string(), "Browse all products".to_string())
            />
        }
        .into_any(),
        FetchState::Ready(page) => view! {
            <div class="products">
                {page
                    .items
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product/> })
                    .collect_view()}
            </div>
            {page.has_more.then(|| view! { <p class="more">"More products available"</p> })}
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("bath-body"), "Bath & Body");
        assert_eq!(category_label("nail-art"), "nail art");
    }
}
