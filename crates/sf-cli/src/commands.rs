use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::info_span;

use sf_core::snapshot;
use sf_core::{
    CardStats, Clock, Deck, FileSource, FixedClock, ReviewDate, Session, SessionSummary,
    SystemClock, parse,
};

use crate::cli::{CheckArgs, DeckArgs};
use crate::render::TerminalRenderer;
use crate::types::CheckReport;

pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let parsed = parse(&text);
    Ok(CheckReport {
        path: args.file.clone(),
        cards: parsed.cards.len(),
        errors: parsed.errors,
    })
}

/// Cards due as of the requested date, in store order.
pub fn run_due(args: &DeckArgs) -> Result<(ReviewDate, Vec<CardStats>)> {
    let deck = load_deck(args)?;
    let today = clock_for(args).today();
    let due = deck.store.due_as_of(today).into_iter().cloned().collect();
    Ok((today, due))
}

pub fn run_review(args: &DeckArgs) -> Result<SessionSummary> {
    let stdin = io::stdin();
    review_with(args, stdin.lock(), io::stdout())
}

/// Run a review session reading answers from `input` and writing prompts to
/// `output`.
pub fn review_with<I: BufRead, O: Write>(
    args: &DeckArgs,
    input: I,
    output: O,
) -> Result<SessionSummary> {
    let span = info_span!("review", file = %args.file.display());
    let _guard = span.enter();

    let mut deck = load_deck(args)?;
    let clock = clock_for(args);
    let mut renderer = TerminalRenderer::new(input, output);
    let mut session = Session::new(&mut deck.store, clock.as_ref(), &mut renderer);
    if let Some(path) = args.state.clone() {
        session = session.on_commit(move |store| snapshot::save(&path, &store.snapshot()));
    }
    let summary = session.run().context("review session")?;
    Ok(summary)
}

fn load_deck(args: &DeckArgs) -> Result<Deck> {
    let mut deck = Deck::load(&FileSource::new(&args.file))
        .with_context(|| format!("load cards from {}", args.file.display()))?;
    if let Some(path) = &args.state {
        let saved = snapshot::load(path).context("load review state")?;
        deck.store.restore(&saved);
    }
    Ok(deck)
}

fn clock_for(args: &DeckArgs) -> Box<dyn Clock> {
    match args.today {
        Some(today) => Box::new(FixedClock(today)),
        None => Box::new(SystemClock),
    }
}
