//! Counter coordinator
//!
//! One `Counter` per embedded widget. It owns the configuration and the
//! scheduler state, and turns host lifecycle signals into start/stop/reset
//! transitions. Cloning a `Counter` yields another handle to the same
//! counter; the refresh timer is cancelled once the last handle is dropped.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use tracing::{debug, error, info, warn};

use super::{CounterConfig, SchedulerState};
use crate::{
    api::{CounterEvent, ErrorPayload, Host, LogLevel},
    engine,
    error::ConfigError,
    tasks::refresh_timer,
    utils::{Clock, SystemClock},
};

#[derive(Clone)]
pub struct Counter {
    inner: Arc<CounterInner>,
}

pub(crate) struct CounterInner {
    host: Arc<dyn Host>,
    clock: Arc<dyn Clock>,
    config: Mutex<CounterConfig>,
    scheduler: Mutex<SchedulerState>,
}

impl Counter {
    /// Create a counter measuring against the host machine's local clock
    pub fn new(host: Arc<dyn Host>, config: CounterConfig) -> Self {
        Self::with_clock(host, Arc::new(SystemClock), config)
    }

    pub fn with_clock(host: Arc<dyn Host>, clock: Arc<dyn Clock>, config: CounterConfig) -> Self {
        Self {
            inner: Arc::new(CounterInner {
                host,
                clock,
                config: Mutex::new(config),
                scheduler: Mutex::new(SchedulerState::new()),
            }),
        }
    }

    // ── Host lifecycle ───────────────────────────────────────────────

    /// The host activated the widget. Only the first call starts the counter.
    pub fn on_start(&self) -> Result<(), String> {
        if !self.lock_scheduler()?.initialize() {
            debug!("Counter already started, ignoring start signal");
            return Ok(());
        }
        self.start()
    }

    /// Presentation resumed
    pub fn on_play(&self) -> Result<(), String> {
        self.reset()
    }

    /// Presentation stopped
    pub fn on_stop(&self) -> Result<(), String> {
        self.stop()
    }

    /// Replace the configuration and restart the counter with it
    pub fn reconfigure(&self, config: CounterConfig) -> Result<(), String> {
        info!(
            "Reconfiguring counter: type={}, date={:?}, time={:?}, refresh={}",
            config.direction, config.date, config.time, config.refresh
        );
        *self.lock_config()? = config;
        self.reset()
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// Validate the configuration, tick once, then arm the refresh timer.
    /// Any timer pending from an earlier start is cancelled first.
    pub fn start(&self) -> Result<(), String> {
        // Claim the timer slot before emitting; a stop or reset that lands
        // while the host handles the first result invalidates this start.
        let generation = self.lock_scheduler()?.next_generation();
        let config = self.config()?;

        let valid = match engine::validate(&config) {
            Ok(valid) => valid,
            Err(e) if e.is_reportable() => {
                self.report(&e);
                return Ok(());
            }
            Err(_) => {
                debug!("No date or time configured, counter stays idle");
                return Ok(());
            }
        };

        info!("Starting {} counter", valid.direction);
        let result = engine::compute_valid(&valid, &config, self.inner.clock.now());
        self.send_event(CounterEvent::DataUpdate(result));

        match config.refresh_interval() {
            Some(interval) => {
                if !refresh_timer::arm_if_current(self, generation, interval)? {
                    debug!("Start superseded by a stop or reset, timer not armed");
                }
                Ok(())
            }
            None => {
                debug!("Refresh interval {:?} disables the timer", config.refresh);
                Ok(())
            }
        }
    }

    /// Cancel the pending refresh timer, if any
    pub fn stop(&self) -> Result<(), String> {
        if self.lock_scheduler()?.cancel() {
            info!("Counter stopped");
        }
        Ok(())
    }

    /// Stop then start again. Does nothing before the host's first start.
    pub fn reset(&self) -> Result<(), String> {
        if !self.lock_scheduler()?.is_initialized() {
            debug!("Counter not started yet, ignoring reset");
            return Ok(());
        }
        self.stop()?;
        self.start()
    }

    /// Compute the current result and emit it to the host
    pub fn tick(&self) -> Result<(), String> {
        let config = self.config()?;
        match engine::compute(&config, self.inner.clock.now()) {
            Ok(result) => self.send_event(CounterEvent::DataUpdate(result)),
            Err(e) if e.is_reportable() => self.report(&e),
            Err(_) => debug!("Tick skipped, no date or time configured"),
        }
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Current configuration
    pub fn config(&self) -> Result<CounterConfig, String> {
        self.lock_config().map(|config| config.clone())
    }

    /// Check if a refresh tick is pending
    pub fn is_scheduled(&self) -> Result<bool, String> {
        self.lock_scheduler().map(|scheduler| scheduler.is_scheduled())
    }

    // ── Internals ────────────────────────────────────────────────────

    pub(crate) fn lock_scheduler(&self) -> Result<MutexGuard<'_, SchedulerState>, String> {
        self.inner
            .scheduler
            .lock()
            .map_err(|e| {
                warn!("Scheduler state lock poisoned: {}", e);
                format!("Failed to lock scheduler state: {}", e)
            })
    }

    fn lock_config(&self) -> Result<MutexGuard<'_, CounterConfig>, String> {
        self.inner
            .config
            .lock()
            .map_err(|e| {
                warn!("Counter config lock poisoned: {}", e);
                format!("Failed to lock counter config: {}", e)
            })
    }

    pub(crate) fn downgrade(&self) -> Weak<CounterInner> {
        Arc::downgrade(&self.inner)
    }

    pub(crate) fn upgrade(inner: &Weak<CounterInner>) -> Option<Self> {
        inner.upgrade().map(|inner| Self { inner })
    }

    fn send_event(&self, event: CounterEvent) {
        let errored = event.is_error();
        debug!("Emitting {} event", event.name());
        self.inner.host.emit(event);
        self.inner.host.set_uptime_error(errored);
    }

    fn report(&self, err: &ConfigError) {
        let message = err.to_string();
        error!("Counter configuration error: {}", message);
        self.inner.host.log(
            LogLevel::Error,
            &message,
            err.code().unwrap_or_default(),
            err.context(),
        );
        self.send_event(CounterEvent::DataError(ErrorPayload::from(err)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StdoutHost;

    #[test]
    fn poisoned_locks_surface_as_errors() {
        let counter = Counter::new(Arc::new(StdoutHost), CounterConfig::default());

        let inner = Arc::clone(&counter.inner);
        let _ = std::thread::spawn(move || {
            let _config = inner.config.lock().unwrap();
            let _scheduler = inner.scheduler.lock().unwrap();
            panic!("poison both locks");
        })
        .join();

        let err = counter.config().unwrap_err();
        assert!(err.contains("Failed to lock counter config"));
        let err = counter.is_scheduled().unwrap_err();
        assert!(err.contains("Failed to lock scheduler state"));
        assert!(counter.stop().is_err());
    }
}
