//! State containers injected into the component tree.
//!
//! Auth, cart, wishlist, address book, return-to memory and services are
//! provided once at the app root. Checkout progress is provided by the
//! checkout layout, so leaving checkout drops it.

use std::sync::Arc;
use std::time::Duration;

use blush_auth::{AuthError, PendingReturn, ReturnTo, Session, SessionProvider, User};
use blush_commerce::data::{CatalogService, Delay, OrderService, StubCatalog, StubOrders};
use blush_commerce::prelude::*;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{info, warn};

/// Signed-in state plus the provider that produces it.
#[derive(Clone)]
pub struct AuthContext {
    session: RwSignal<Session>,
    provider: Arc<dyn SessionProvider>,
}

impl AuthContext {
    pub fn provide(provider: Arc<dyn SessionProvider>) -> Self {
        let ctx = Self {
            session: RwSignal::new(Session::loading()),
            provider,
        };
        provide_context(ctx.clone());
        ctx
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn session(&self) -> ReadSignal<Session> {
        self.session.read_only()
    }

    /// Re-read the current user from the provider.
    pub fn refresh(&self) {
        let session = self.session;
        let provider = Arc::clone(&self.provider);
        session.set(Session::loading());
        spawn_local(async move {
            let next = match provider.current().await {
                Ok(Some(user)) => Session::authenticated(user),
                Ok(None) => Session::anonymous(),
                Err(e) => {
                    warn!(error = %e, "session lookup failed");
                    Session::failed(e.to_string())
                }
            };
            session.try_set(next);
        });
    }

    pub async fn login(&self, email: String, password: String) -> Result<User, AuthError> {
        let user = self.provider.login(&email, &password).await?;
        self.session.try_set(Session::authenticated(user.clone()));
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), AuthError> {
        self.provider.logout().await?;
        self.session.try_set(Session::anonymous());
        Ok(())
    }
}

/// Where to send the visitor after signing in.
///
/// The auth guard stores the bounced path here. The guest guard that mounts
/// for that bounce holds its ticket: it consumes the path on sign-in and
/// releases it when the visitor leaves without signing in.
#[derive(Clone, Copy)]
pub struct ReturnToContext(RwSignal<PendingReturn>);

impl ReturnToContext {
    pub fn provide() -> Self {
        let ctx = Self(RwSignal::new(PendingReturn::new()));
        provide_context(ctx);
        ctx
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn remember(&self, from: Option<ReturnTo>) {
        if let Some(from) = from {
            self.0.update(|pending| {
                pending.remember(from);
            });
        }
    }

    /// Current value without subscribing.
    pub fn peek(&self) -> Option<ReturnTo> {
        self.0.with_untracked(|pending| pending.current().cloned())
    }

    pub fn ticket(&self) -> Option<u64> {
        self.0.with_untracked(PendingReturn::ticket)
    }

    pub fn release(&self, ticket: u64) {
        self.0.try_update(|pending| pending.release(ticket));
    }

    pub fn clear(&self) {
        self.0.update(PendingReturn::clear);
    }
}

#[derive(Clone, Copy)]
pub struct CartContext(RwSignal<Cart>);

impl CartContext {
    pub fn provide() -> Self {
        let ctx = Self(RwSignal::new(Cart::new()));
        provide_context(ctx);
        ctx
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.0.with(|cart| cart.lines().to_vec())
    }

    pub fn item_count(&self) -> u32 {
        self.0.with(Cart::item_count)
    }

    pub fn subtotal(&self) -> Money {
        self.0.with(Cart::subtotal)
    }

    pub fn is_empty(&self) -> bool {
        self.0.with(Cart::is_empty)
    }

    pub fn add(&self, product: &Product, quantity: u32) -> Result<(), CommerceError> {
        let mut result = Ok(());
        self.0.update(|cart| {
            result = cart.add_item(product.id.clone(), product.name.clone(), product.price, quantity);
        });
        if result.is_ok() {
            info!(product = %product.id, quantity, "added to bag");
        }
        result
    }

    pub fn set_quantity(&self, product_id: &ProductId, quantity: u32) -> Result<(), CommerceError> {
        let mut result = Ok(());
        self.0.update(|cart| result = cart.update_quantity(product_id, quantity));
        result
    }

    pub fn remove(&self, product_id: &ProductId) -> Result<(), CommerceError> {
        let mut result = Ok(());
        self.0.update(|cart| result = cart.remove_item(product_id));
        result
    }

    pub fn clear(&self) {
        self.0.update(Cart::clear);
    }
}

#[derive(Clone, Copy)]
pub struct WishlistContext(RwSignal<Wishlist>);

impl WishlistContext {
    pub fn provide() -> Self {
        let ctx = Self(RwSignal::new(Wishlist::default()));
        provide_context(ctx);
        ctx
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn items(&self) -> Vec<ProductId> {
        self.0.with(|w| w.items().to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.with(Wishlist::len)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.0.with(|w| w.contains(id))
    }

    /// Returns whether the product is saved afterwards.
    pub fn toggle(&self, id: ProductId) -> bool {
        let mut saved = false;
        self.0.update(|w| saved = w.toggle(id));
        saved
    }

    pub fn remove(&self, id: &ProductId) {
        self.0.update(|w| {
            w.remove(id);
        });
    }
}

/// Saved shipping addresses.
#[derive(Clone, Copy)]
pub struct AddressBookContext(RwSignal<Vec<Address>>);

impl AddressBookContext {
    pub fn provide() -> Self {
        let ctx = Self(RwSignal::new(Vec::new()));
        provide_context(ctx);
        ctx
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn addresses(&self) -> Vec<Address> {
        self.0.get()
    }

    /// Validate and store an address. The first one becomes the default.
    pub fn add(&self, mut address: Address) -> Result<(), CommerceError> {
        address.validate()?;
        self.0.update(|book| {
            address.is_default = book.is_empty();
            if address.id.is_none() {
                address.id = Some(AddressId::generate());
            }
            book.push(address);
        });
        Ok(())
    }

    pub fn remove(&self, id: &AddressId) {
        self.0.update(|book| book.retain(|a| a.id.as_ref() != Some(id)));
    }
}

/// Checkout progress, scoped to the checkout layout.
#[derive(Clone, Copy)]
pub struct CheckoutContext(RwSignal<CheckoutProgress>);

impl CheckoutContext {
    pub fn provide() -> Self {
        let ctx = Self(RwSignal::new(CheckoutProgress::new()));
        provide_context(ctx);
        ctx
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn progress(&self) -> CheckoutProgress {
        self.0.get()
    }

    pub fn step(&self) -> Option<CheckoutStep> {
        self.0.with(CheckoutProgress::step)
    }

    pub fn next_step(&self) {
        self.0.update(|p| {
            p.next_step();
        });
    }

    pub fn previous_step(&self) {
        self.0.update(|p| {
            p.previous_step();
        });
    }

    pub fn set_current_step(&self, step: u8) {
        self.0.update(|p| p.set_current_step(step));
    }

    pub fn set_selected_address(&self, address: Address) {
        self.0.update(|p| p.set_selected_address(address));
    }

    pub fn set_selected_payment(&self, payment: PaymentMethod) {
        self.0.update(|p| p.set_selected_payment(payment));
    }

    pub fn reset_checkout(&self) {
        self.0.update(CheckoutProgress::reset_checkout);
    }
}

/// Data services used by the hooks.
#[derive(Clone)]
pub struct Services {
    pub catalog: Arc<dyn CatalogService>,
    pub orders: Arc<dyn OrderService>,
}

impl Services {
    /// Placeholder services that wait `latency` and return nothing.
    pub fn stub(delay: Arc<dyn Delay>, latency: Duration) -> Self {
        Self {
            catalog: Arc::new(StubCatalog::new(Arc::clone(&delay), latency)),
            orders: Arc::new(StubOrders::new(delay, latency)),
        }
    }

    pub fn provide(self) {
        provide_context(self);
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }
}
