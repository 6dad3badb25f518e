//! Route tree nodes.

use crate::error::RouteError;
use crate::layout::LayoutKind;
use crate::pattern::Pattern;
use serde::{Deserialize, Serialize};

/// Leaf screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Home,
    ProductListing,
    ProductDetail,
    Login,
    Register,
    ForgotPassword,
    Profile,
    Addresses,
    Orders,
    OrderDetail,
    Wishlist,
    Cart,
    Search,
    OrderConfirmation,
    Checkout,
    AdminDashboard,
    AdminProducts,
    AdminOrders,
    NotFound,
}

impl Screen {
    /// Document title suffix.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::ProductListing => "Shop",
            Screen::ProductDetail => "Product",
            Screen::Login => "Sign in",
            Screen::Register => "Create account",
            Screen::ForgotPassword => "Reset password",
            Screen::Profile => "My profile",
            Screen::Addresses => "My addresses",
            Screen::Orders => "My orders",
            Screen::OrderDetail => "Order details",
            Screen::Wishlist => "My wishlist",
            Screen::Cart => "Bag",
            Screen::Search => "Search",
            Screen::OrderConfirmation => "Order placed",
            Screen::Checkout => "Checkout",
            Screen::AdminDashboard => "Dashboard",
            Screen::AdminProducts => "Products",
            Screen::AdminOrders => "Orders",
            Screen::NotFound => "Page not found",
        }
    }
}

/// What a node renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// Chrome around an outlet for the node's children.
    Layout(LayoutKind),
    Screen(Screen),
    /// Index redirect, relative to the parent path unless it starts with `/`.
    Redirect(String),
}

/// A node in the route tree. Built once at startup and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    pattern: Pattern,
    element: Element,
    children: Vec<RouteNode>,
}

impl RouteNode {
    fn build(path: &str, element: Element) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: Pattern::parse(path)?,
            element,
            children: Vec::new(),
        })
    }

    /// A layout; pass `""` for a pathless group.
    pub fn layout(path: &str, kind: LayoutKind) -> Result<Self, RouteError> {
        Self::build(path, Element::Layout(kind))
    }

    pub fn screen(path: &str, screen: Screen) -> Result<Self, RouteError> {
        Self::build(path, Element::Screen(screen))
    }

    /// Default child rendered when the parent path is visited exactly.
    pub fn index(screen: Screen) -> Self {
        Self {
            pattern: Pattern::default(),
            element: Element::Screen(screen),
            children: Vec::new(),
        }
    }

    /// Index child that redirects.
    pub fn index_redirect(to: impl Into<String>) -> Self {
        Self {
            pattern: Pattern::default(),
            element: Element::Redirect(to.into()),
            children: Vec::new(),
        }
    }

    /// `*` route.
    pub fn catch_all(screen: Screen) -> Result<Self, RouteError> {
        Self::build("*", Element::Screen(screen))
    }

    pub fn child(mut self, node: RouteNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = RouteNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn child_nodes(&self) -> &[RouteNode] {
        &self.children
    }
}
