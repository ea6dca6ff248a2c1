//! Browser-side driver for the project-generation pipeline.
//!
//! Starts a generation, then polls its status once per second and folds each
//! response into the shared `GenerationState` until the backend reports done
//! or failed. Transient poll failures are tolerated up to a small budget.

#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{GenerationRequest, GenerationStatus};
use crate::state::generation::GenerationState;

/// Delay between status polls.
pub const POLL_INTERVAL_MS: u32 = 1_000;

/// Consecutive failed polls tolerated before giving up.
pub const MAX_POLL_FAILURES: u32 = 5;

/// What the poller does after a poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollStep {
    Continue,
    Stop,
}

/// Decide the next step from a poll result and the running failure count.
pub fn next_step(result: Result<&GenerationStatus, ()>, failures: &mut u32) -> PollStep {
    match result {
        Ok(status) => {
            *failures = 0;
            if status.done || status.error.is_some() { PollStep::Stop } else { PollStep::Continue }
        }
        Err(()) => {
            *failures += 1;
            if *failures >= MAX_POLL_FAILURES { PollStep::Stop } else { PollStep::Continue }
        }
    }
}

/// Kick off a generation and keep `generation` updated until it finishes.
pub fn start(config: ClientConfig, generation: RwSignal<GenerationState>, request: GenerationRequest) {
    generation.update(|g| g.start(format!("Preparing \"{}\"...", request.name)));
    let run = generation.with_untracked(|g| g.run);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let started = match crate::net::api::start_generation(&config, &request).await {
            Ok(started) => started,
            Err(e) => {
                log::warn!("start generation failed: {e}");
                generation.try_update(|g| g.fail_for(run, e.to_string()));
                return;
            }
        };
        log::info!("generation started: {}", started.generation_id);

        let mut failures = 0;
        loop {
            gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
            // Dismissed or replaced by a newer generation.
            if !generation.try_with_untracked(|g| g.is_current(run)).unwrap_or(false) {
                return;
            }
            let result = crate::net::api::fetch_generation(&config, &started.generation_id).await;
            match &result {
                Ok(status) => {
                    generation.try_update(|g| g.apply_status_for(run, status));
                }
                Err(e) => log::warn!("poll generation {}: {e}", started.generation_id),
            }
            if next_step(result.as_ref().map_err(|_| ()), &mut failures) == PollStep::Stop {
                if failures >= MAX_POLL_FAILURES {
                    generation.try_update(|g| g.fail_for(run, "Lost contact with the generator."));
                }
                return;
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request, run);
    }
}
