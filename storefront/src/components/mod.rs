//! Shared components.

mod catalog;
mod chrome;
mod feedback;
mod search;
mod stepper;

pub use catalog::{FilterSidebar, ProductCard, ProductGrid, CATEGORIES};
pub(crate) use catalog::category_label;
pub use chrome::{Breadcrumbs, Footer, Header};
pub use feedback::{EmptyState, ErrorPanel, LoadingScreen, SkeletonGrid};
pub use search::SearchForm;
pub use stepper::Stepper;
