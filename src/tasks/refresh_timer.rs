//! Refresh timer task
//!
//! A debounced one-shot timer: arming cancels whatever timer is pending and
//! spawns a fresh one for the full interval. After each tick the timer
//! re-arms itself, so the counter keeps reporting until it is stopped.

use std::{sync::Weak, time::Duration};
use tokio::time::sleep;
use tracing::{debug, error};

use crate::state::{counter::CounterInner, Counter, SchedulerState};

/// Arm the refresh timer if `generation` still owns the slot. Returns false
/// when a stop or reset happened since the generation was reserved.
pub fn arm_if_current(counter: &Counter, generation: u64, interval: Duration) -> Result<bool, String> {
    let mut scheduler = counter.lock_scheduler()?;
    if !scheduler.is_current(generation) {
        return Ok(false);
    }
    arm_locked(&mut scheduler, counter, interval);
    Ok(true)
}

fn arm_locked(scheduler: &mut SchedulerState, counter: &Counter, interval: Duration) {
    let generation = scheduler.next_generation();
    debug!(
        "Arming refresh timer #{} for {}s",
        generation,
        interval.as_secs()
    );

    let handle = tokio::spawn(refresh_timer_task(counter.downgrade(), generation, interval));
    scheduler.set_pending(generation, handle);
}

/// Wait one interval, then tick and re-arm unless cancelled in the meantime
async fn refresh_timer_task(counter: Weak<CounterInner>, generation: u64, interval: Duration) {
    sleep(interval).await;

    let Some(counter) = Counter::upgrade(&counter) else {
        debug!("Counter dropped, refresh timer #{} exits", generation);
        return;
    };

    if let Err(e) = fire(&counter, generation) {
        error!("Refresh timer #{} failed: {}", generation, e);
    }
}

fn fire(counter: &Counter, generation: u64) -> Result<(), String> {
    if !counter.lock_scheduler()?.begin_tick(generation) {
        debug!("Refresh timer #{} was superseded", generation);
        return Ok(());
    }

    counter.tick()?;

    // Completed countdowns keep ticking; only stop/reset end the loop.
    // A stop or reset during the tick already decided what comes next.
    match counter.config()?.refresh_interval() {
        Some(interval) => {
            arm_if_current(counter, generation, interval)?;
        }
        None => debug!("Refresh disabled, timer not re-armed"),
    }
    Ok(())
}
