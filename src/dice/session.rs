//! Dice session - single owner of one widget's state
//!
//! UI code holds a `Signal<DiceSession>` and only mutates through these methods.

use dioxus::logger::tracing::info;
use rand::Rng;

use super::choices::ChoiceSet;
use super::history::RollHistory;
use super::sequencer::{Phase, PickSequencer, PickTicket, TickOutcome, Timing};

#[derive(Debug, Clone)]
pub struct DiceSession {
    choices: ChoiceSet,
    sequencer: PickSequencer,
    history: Option<RollHistory>,
}

impl DiceSession {
    pub fn new(timing: Timing) -> Self {
        Self {
            choices: ChoiceSet::new(),
            sequencer: PickSequencer::new(timing),
            history: None,
        }
    }

    pub fn with_choices(mut self, choices: ChoiceSet) -> Self {
        self.choices = choices;
        self
    }

    pub fn with_history(mut self, history: RollHistory) -> Self {
        self.history = Some(history);
        self
    }

    pub fn choices(&self) -> &ChoiceSet {
        &self.choices
    }

    pub fn history(&self) -> Option<&RollHistory> {
        self.history.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    pub fn is_running(&self) -> bool {
        self.sequencer.is_running()
    }

    pub fn display(&self) -> Option<&str> {
        self.sequencer.display()
    }

    pub fn result(&self) -> Option<&str> {
        self.sequencer.result()
    }

    pub fn progress(&self) -> f32 {
        self.sequencer.progress()
    }

    pub fn tick_period_ms(&self) -> u32 {
        self.sequencer.tick_period_ms()
    }

    pub fn can_roll(&self) -> bool {
        self.sequencer.can_trigger(&self.choices)
    }

    pub fn add_choice(&mut self, text: &str) -> bool {
        self.choices.add(text)
    }

    pub fn remove_choice(&mut self, index: usize) -> Option<String> {
        self.choices.remove(index)
    }

    /// Empty the set and forget the shown result
    pub fn clear_choices(&mut self) {
        self.choices.clear();
        self.sequencer.clear_result();
    }

    pub fn shuffle_choices<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.choices.shuffle(rng);
    }

    pub fn clear_history(&mut self) {
        if let Some(history) = self.history.as_mut() {
            history.clear();
        }
    }

    pub fn roll(&mut self) -> Option<PickTicket> {
        self.sequencer.trigger(&self.choices)
    }

    /// Advance the running roll; logs the committed value to history on completion.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        ticket: PickTicket,
        rng: &mut R,
        now_ms: f64,
    ) -> TickOutcome {
        let outcome = self.sequencer.tick(ticket, &self.choices, rng);
        if let TickOutcome::Settled(settlement) = &outcome {
            if let Some(result) = settlement.result.as_deref() {
                info!(result, "dice settled");
                if let Some(history) = self.history.as_mut() {
                    history.record(result, now_ms);
                }
            }
        }
        outcome
    }

    pub fn cancel(&mut self, ticket: PickTicket) -> bool {
        self.sequencer.cancel(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn settle(session: &mut DiceSession, rng: &mut SmallRng, now_ms: f64) -> (u32, TickOutcome) {
        let ticket = session.roll().expect("roll refused");
        let mut ticks = 0;
        loop {
            ticks += 1;
            let outcome = session.tick(ticket, rng, now_ms);
            if outcome != TickOutcome::Rolling {
                return (ticks, outcome);
            }
        }
    }

    #[test]
    fn pizza_or_sushi() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut session = DiceSession::new(Timing::fixed_duration(2000, 100))
            .with_history(RollHistory::default());
        session.add_choice("Pizza");
        session.add_choice("Sushi");

        let (ticks, outcome) = settle(&mut session, &mut rng, 1_700_000_000_000.0);
        assert_eq!(ticks, 20);
        assert!(!session.is_running());

        let result = session.result().unwrap().to_string();
        assert!(result == "Pizza" || result == "Sushi");
        match outcome {
            TickOutcome::Settled(s) => {
                assert!(s.celebrates());
                assert_eq!(s.result.as_deref(), Some(result.as_str()));
            }
            other => panic!("unexpected outcome {other:?}"),
        }

        let history = session.history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().result, result);
        assert_eq!(history.latest().unwrap().timestamp_ms, 1_700_000_000_000.0);
    }

    #[test]
    fn empty_roll_changes_nothing() {
        let mut session = DiceSession::new(Timing::default()).with_history(RollHistory::default());
        assert!(!session.can_roll());
        assert!(session.roll().is_none());
        assert!(!session.is_running());
        assert_eq!(session.result(), None);
        assert!(session.history().unwrap().is_empty());
    }

    #[test]
    fn one_celebration_per_completed_roll() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut session = DiceSession::new(Timing::tick_count(20, 100));
        session.add_choice("a");
        session.add_choice("b");
        let mut celebrations = 0;
        for _ in 0..5 {
            let ticket = session.roll().unwrap();
            assert!(!session.can_roll());
            loop {
                match session.tick(ticket, &mut rng, 0.0) {
                    TickOutcome::Rolling => {}
                    TickOutcome::Settled(s) => {
                        if s.celebrates() {
                            celebrations += 1;
                        }
                        break;
                    }
                    TickOutcome::Stale => unreachable!(),
                }
            }
            // ticking a finished roll never celebrates again
            assert_eq!(session.tick(ticket, &mut rng, 0.0), TickOutcome::Stale);
        }
        assert_eq!(celebrations, 5);
    }

    #[test]
    fn history_stays_bounded() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut session =
            DiceSession::new(Timing::tick_count(1, 100)).with_history(RollHistory::default());
        session.add_choice("x");
        for i in 0..30 {
            settle(&mut session, &mut rng, i as f64);
        }
        let history = session.history().unwrap();
        assert_eq!(history.len(), 10);
        assert_eq!(history.latest().unwrap().timestamp_ms, 29.0);
    }

    #[test]
    fn no_history_without_log() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut session = DiceSession::new(Timing::tick_count(1, 100));
        session.add_choice("x");
        settle(&mut session, &mut rng, 0.0);
        assert!(session.history().is_none());
        assert_eq!(session.result(), Some("x"));
    }

    #[test]
    fn clear_choices_forgets_result() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut session = DiceSession::new(Timing::tick_count(1, 100));
        session.add_choice("x");
        settle(&mut session, &mut rng, 0.0);
        session.clear_choices();
        assert!(session.choices().is_empty());
        assert_eq!(session.result(), None);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn emptied_rerun_leaves_history_alone() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut session =
            DiceSession::new(Timing::tick_count(1, 100)).with_history(RollHistory::default());
        session.add_choice("old");
        settle(&mut session, &mut rng, 1.0);

        let ticket = session.roll().unwrap();
        session.remove_choice(0);
        match session.tick(ticket, &mut rng, 2.0) {
            TickOutcome::Settled(s) => assert!(!s.celebrates()),
            other => panic!("unexpected outcome {other:?}"),
        }
        let history = session.history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().timestamp_ms, 1.0);
    }

    #[test]
    fn cancel_skips_history() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut session =
            DiceSession::new(Timing::tick_count(5, 100)).with_history(RollHistory::default());
        session.add_choice("x");
        let ticket = session.roll().unwrap();
        session.tick(ticket, &mut rng, 0.0);
        assert!(session.cancel(ticket));
        assert!(session.can_roll());
        assert!(session.history().unwrap().is_empty());
    }
}
