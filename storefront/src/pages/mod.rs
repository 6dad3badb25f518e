//! Screens.

mod account;
mod admin;
mod auth;
mod catalog;
mod checkout;
mod shop;

pub use account::{AccountIndex, AddressesPage, OrderDetailPage, OrdersPage, ProfilePage, WishlistPage};
pub use admin::{AdminDashboardPage, AdminIndex, AdminOrdersPage, AdminProductsPage};
pub use auth::{ForgotPasswordPage, LoginPage, RegisterPage};
pub use catalog::{HomePage, ProductDetailPage, ProductListingPage, SearchPage};
pub use checkout::CheckoutPage;
pub use shop::{CartPage, NotFoundPage, OrderConfirmationPage};
