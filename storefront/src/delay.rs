//! Browser timer for the stub services.

use std::time::Duration;

use blush_commerce::data::Delay;
use futures::channel::oneshot;
use futures::future::BoxFuture;
use leptos::prelude::set_timeout;

/// Waits using `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutDelay;

impl Delay for TimeoutDelay {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        let (done, fired) = oneshot::channel::<()>();
        set_timeout(
            move || {
                let _ = done.send(());
            },
            duration,
        );
        Box::pin(async move {
            let _ = fired.await;
        })
    }
}
