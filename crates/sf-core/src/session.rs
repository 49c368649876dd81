//! Review session controller.
//!
//! A session presents one due card at a time. Each turn it asks the store for
//! every card due today, picks one for the day, hands it to the [`Renderer`],
//! and commits the answer back to the store as a new schedule. The clock is
//! read again when the answer is recorded, so a session left open past
//! midnight schedules against the new day.

use sf_model::{CardId, CardStats, ReviewDate};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::{CoreError, Result};
use crate::picker::pick;
use crate::scheduler::Outcome;
use crate::store::Store;

/// What the renderer is asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewTurn {
    pub today: ReviewDate,
    pub stats: CardStats,
    /// Cards due today, including this one.
    pub due_count: usize,
}

/// The user's answer to a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Correct,
    Incorrect,
    Quit,
}

/// Presents cards and collects answers.
pub trait Renderer {
    fn present(&mut self, turn: &ReviewTurn) -> Result<Response>;

    /// Nothing is left to review for `today`.
    fn finished(&mut self, today: ReviewDate) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub correct: usize,
    pub incorrect: usize,
    /// Every due card was answered.
    pub finished: bool,
}

type CommitHook<'s> = Box<dyn FnMut(&Store) -> Result<()> + 's>;

pub struct Session<'s, C: Clock + ?Sized, R: Renderer + ?Sized> {
    store: &'s mut Store,
    clock: &'s C,
    renderer: &'s mut R,
    on_commit: Option<CommitHook<'s>>,
    picked: Option<CardId>,
    summary: SessionSummary,
}

impl<'s, C: Clock + ?Sized, R: Renderer + ?Sized> Session<'s, C, R> {
    pub fn new(store: &'s mut Store, clock: &'s C, renderer: &'s mut R) -> Self {
        Self {
            store,
            clock,
            renderer,
            on_commit: None,
            picked: None,
            summary: SessionSummary::default(),
        }
    }

    /// Run `hook` with the store after every recorded answer.
    #[must_use]
    pub fn on_commit(mut self, hook: impl FnMut(&Store) -> Result<()> + 's) -> Self {
        self.on_commit = Some(Box::new(hook));
        self
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Pick today's card, or `None` when nothing is due.
    pub fn next_turn(&mut self) -> Result<Option<ReviewTurn>> {
        let today = self.clock.today();
        let due = self.store.due_as_of(today);
        if due.is_empty() {
            self.picked = None;
            return Ok(None);
        }
        let date_key = today.to_string();
        let stats = (*pick(&due, &date_key, |stats| stats.card_id().to_string())?).clone();
        debug!(card_id = %stats.card_id().short(), due = due.len(), "presenting card");
        self.picked = Some(stats.card_id().clone());
        Ok(Some(ReviewTurn {
            today,
            due_count: due.len(),
            stats,
        }))
    }

    pub fn record_correct(&mut self) -> Result<CardStats> {
        self.record(Outcome::Correct)
    }

    pub fn record_incorrect(&mut self) -> Result<CardStats> {
        self.record(Outcome::Incorrect)
    }

    /// Apply `outcome` to the card from the last [`Session::next_turn`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NothingDue`] if no card is currently picked. A
    /// failed transition keeps the card picked.
    pub fn record(&mut self, outcome: Outcome) -> Result<CardStats> {
        let id = self.picked.as_ref().ok_or(CoreError::NothingDue)?;
        let current = self.store.get(id).ok_or(CoreError::NothingDue)?;
        let next = outcome.apply(current, self.clock.today())?;
        self.store.upsert(next.clone())?;
        self.picked = None;
        match outcome {
            Outcome::Correct => self.summary.correct += 1,
            Outcome::Incorrect => self.summary.incorrect += 1,
        }
        if let Some(hook) = self.on_commit.as_mut() {
            hook(&*self.store)?;
        }
        Ok(next)
    }

    /// Review until nothing is due or the renderer quits.
    pub fn run(mut self) -> Result<SessionSummary> {
        loop {
            let Some(turn) = self.next_turn()? else {
                self.renderer.finished(self.clock.today())?;
                self.summary.finished = true;
                break;
            };
            match self.renderer.present(&turn)? {
                Response::Correct => {
                    self.record_correct()?;
                }
                Response::Incorrect => {
                    self.record_incorrect()?;
                }
                Response::Quit => break,
            }
        }
        info!(
            correct = self.summary.correct,
            incorrect = self.summary.incorrect,
            finished = self.summary.finished,
            "Review session ended"
        );
        Ok(self.summary)
    }
}
