//! Shared fixtures for unit tests.

use std::future::Future;
use std::pin::pin;
use std::task::{Context, Poll, Waker};

use crate::net::types::Session;

/// Drive a future that never actually suspends (non-hydrate stubs).
pub fn block_on<F: Future>(fut: F) -> F::Output {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

pub fn session(id: &str) -> Session {
    Session {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        display_name: None,
        avatar_url: None,
    }
}
