//! Roller - drives a `DiceSession` with gloo timers
//!
//! One spawned task per roll: sleep a tick period, advance the session, repeat
//! until it settles. The task and its ticket are kept so teardown can cancel
//! both before the session is gone.

use dioxus::core::Task;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::celebration::Celebration;
use crate::config::DiceConfig;
use crate::dice::{DiceSession, PickTicket, TickOutcome};

pub fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 32];
    if let Err(err) = getrandom::fill(&mut buf) {
        warn!("getrandom failed, seeding from clock: {}", err);
        return SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
    }
    SmallRng::from_seed(buf)
}

#[derive(Clone, Copy)]
pub struct Roller {
    session: Signal<DiceSession>,
    celebration: Signal<Option<Celebration>>,
    active: Signal<Option<(PickTicket, Task)>>,
    bursts: Signal<u64>,
    config: DiceConfig,
}

pub fn use_roller(session: Signal<DiceSession>) -> Roller {
    let config = use_context::<DiceConfig>();
    let celebration = use_signal(|| None::<Celebration>);
    let active = use_signal(|| None::<(PickTicket, Task)>);
    let bursts = use_signal(|| 0u64);

    let roller = Roller { session, celebration, active, bursts, config };
    use_drop(move || {
        let mut roller = roller;
        roller.stop();
    });
    roller
}

impl Roller {
    /// Current confetti burst, if one is showing
    pub fn celebration(&self) -> Option<Celebration> {
        self.celebration.read().clone()
    }

    /// Start a roll. Ignored when the set is empty or a roll is already running.
    pub fn roll(&mut self) {
        let Some(ticket) = self.session.write().roll() else {
            debug!("roll refused");
            return;
        };
        let mut this = *self;
        let task = spawn(async move {
            this.drive(ticket).await;
        });
        self.active.set(Some((ticket, task)));
    }

    /// Cancel the running roll, if any. Safe to call during teardown.
    pub fn stop(&mut self) {
        let Ok(mut active) = self.active.try_write() else {
            return;
        };
        if let Some((ticket, task)) = active.take() {
            task.cancel();
            if let Ok(mut session) = self.session.try_write() {
                session.cancel(ticket);
            }
        }
    }

    async fn drive(&mut self, ticket: PickTicket) {
        let mut rng = fresh_rng();
        loop {
            let period = self.session.peek().tick_period_ms();
            TimeoutFuture::new(period).await;
            let outcome = self.session.write().tick(ticket, &mut rng, js_sys::Date::now());
            match outcome {
                TickOutcome::Rolling => continue,
                TickOutcome::Stale => break,
                TickOutcome::Settled(settlement) => {
                    self.release(ticket);
                    if settlement.celebrates() {
                        self.celebrate(&mut rng).await;
                    }
                    return;
                }
            }
        }
        self.release(ticket);
    }

    fn release(&mut self, ticket: PickTicket) {
        let owned = matches!(*self.active.peek(), Some((t, _)) if t == ticket);
        if owned {
            self.active.set(None);
        }
    }

    async fn celebrate(&mut self, rng: &mut SmallRng) {
        let id = *self.bursts.peek() + 1;
        self.bursts.set(id);
        let burst = Celebration::burst(
            rng,
            id,
            self.config.confetti_pieces,
            self.config.celebration_ms,
        );
        let shown_ms = burst.duration_ms;
        self.celebration.set(Some(burst));

        TimeoutFuture::new(shown_ms).await;
        // a newer burst owns the overlay now
        if self.celebration.peek().as_ref().map(|c| c.id) == Some(id) {
            self.celebration.set(None);
        }
    }
}
