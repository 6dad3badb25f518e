//! Checkout stepper.

use blush_commerce::prelude::*;
use leptos::prelude::*;

use crate::context::CheckoutContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Done,
    Active,
    Upcoming,
}

impl Mark {
    fn class(&self) -> &'static str {
        match self {
            Mark::Done => "step done",
            Mark::Active => "step active",
            Mark::Upcoming => "step",
        }
    }
}

/// One entry per checkout step. An out-of-range raw step marks nothing
/// active.
fn marks(progress: &CheckoutProgress) -> Vec<(CheckoutStep, Mark)> {
    let active = progress.step();
    CheckoutStep::ALL
        .iter()
        .map(|&step| {
            let mark = if active == Some(step) {
                Mark::Active
            } else if progress.is_completed(step) {
                Mark::Done
            } else {
                Mark::Upcoming
            };
            (step, mark)
        })
        .collect()
}

#[component]
pub fn Stepper() -> impl IntoView {
    let checkout = CheckoutContext::expect();

    view! {
        <ol class="stepper" aria-label="Checkout progress">
            {move || {
                marks(&checkout.progress())
                    .into_iter()
                    .map(|(step, mark)| view! {
                        <li class=mark.class() aria-current=(mark == Mark::Active).then_some("step")>
                            <span class="step-number">{step.number()}</span>
                            <span class="step-label">{step.display_name()}</span>
                        </li>
                    })
                    .collect_view()
            }}
        </ol>
    }
}
