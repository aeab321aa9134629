use rand::Rng;
use serde::Serialize;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep_until, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::config::LiveRateConfig;
use crate::services::aggregate_service::round1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PulsePhase {
    Idle,
    Pulsing,
}

/// Latest published value of the live success rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiveRate {
    pub rate: f64,
    pub phase: PulsePhase,
    pub ticks: u64,
}

impl LiveRate {
    pub fn new(rate: f64) -> Self {
        LiveRate {
            rate,
            phase: PulsePhase::Idle,
            ticks: 0,
        }
    }
}

/// One step of the bounded random walk
///
/// Adds a uniform delta in `[-max_step, +max_step]`, rounds to one decimal and
/// clamps into `[floor, ceiling]`.
pub fn step<R: Rng + ?Sized>(rate: f64, config: &LiveRateConfig, rng: &mut R) -> f64 {
    let delta = if config.max_step > 0.0 {
        rng.gen_range(-config.max_step..=config.max_step)
    } else {
        0.0
    };
    round1(rate + delta).clamp(config.floor, config.ceiling)
}

/// Owned handle to the periodic live-rate task
///
/// Created when the view activates. `stop` (or dropping the handle) cancels
/// the timer; once `stop` returns no further update is published.
pub struct LiveRateSimulator {
    updates: watch::Receiver<LiveRate>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl LiveRateSimulator {
    /// Spawn the timer task on the current tokio runtime
    pub fn start<R>(config: LiveRateConfig, rng: R) -> Self
    where
        R: Rng + Send + 'static,
    {
        let initial = LiveRate::new(config.initial_rate.clamp(config.floor, config.ceiling));
        let first_tick = Instant::now() + config.interval;
        let (tx, rx) = watch::channel(initial);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        info!(
            "Live rate simulator started at {}% (every {}ms)",
            initial.rate,
            config.interval.as_millis()
        );
        let handle = tokio::spawn(run(config, first_tick, rng, tx, shutdown_rx));

        LiveRateSimulator {
            updates: rx,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn current(&self) -> LiveRate {
        *self.updates.borrow()
    }

    /// Receiver notified on every published change
    pub fn subscribe(&self) -> watch::Receiver<LiveRate> {
        self.updates.clone()
    }

    /// Cancel the timer and wait for the task to finish
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                error!("Live rate simulator task failed: {}", e);
                return;
            }
        }
        info!("Live rate simulator stopped");
    }
}

impl Drop for LiveRateSimulator {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Live rate simulator dropped, aborting timer task");
            handle.abort();
        }
    }
}

async fn run<R: Rng>(
    config: LiveRateConfig,
    first_tick: Instant,
    mut rng: R,
    tx: watch::Sender<LiveRate>,
    mut shutdown: oneshot::Receiver<()>,
) {
    let mut ticker = interval_at(first_tick, config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut pulse_deadline: Option<Instant> = None;

    loop {
        let deadline = pulse_deadline;
        tokio::select! {
            // Shutdown wins over a tick that is ready at the same time
            biased;
            _ = &mut shutdown => {
                debug!("Live rate simulator received shutdown");
                break;
            }
            _ = ticker.tick() => {
                let mut state = *tx.borrow();
                state.rate = step(state.rate, &config, &mut rng);
                state.phase = PulsePhase::Pulsing;
                state.ticks += 1;
                debug!("Live rate tick {}: {}%", state.ticks, state.rate);
                tx.send_replace(state);
                pulse_deadline = Some(Instant::now() + config.pulse);
            }
            _ = async move {
                if let Some(at) = deadline {
                    sleep_until(at).await;
                }
            }, if deadline.is_some() => {
                pulse_deadline = None;
                tx.send_modify(|state| state.phase = PulsePhase::Idle);
            }
        }
    }
}
