//! Line-oriented terminal renderer for review sessions.

use std::io::{self, BufRead, Write};

use sf_core::{CoreError, Renderer, Response, ReviewDate, ReviewTurn};

/// Shows the question, waits for Enter, shows the answer, then asks whether
/// the answer was right. End of input is treated as quitting.
pub struct TerminalRenderer<I, O> {
    input: I,
    output: O,
    announced: Option<ReviewDate>,
}

impl<I: BufRead, O: Write> TerminalRenderer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            announced: None,
        }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    fn announce(&mut self, today: ReviewDate) -> io::Result<()> {
        if self.announced != Some(today) {
            writeln!(self.output, "reviewing for {today}")?;
            self.announced = Some(today);
        }
        Ok(())
    }

    /// Next input line, trimmed and lowercased. `None` at end of input.
    fn read_answer(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_lowercase()))
    }

    fn ask(&mut self, turn: &ReviewTurn) -> io::Result<Response> {
        self.announce(turn.today)?;
        let stats = &turn.stats;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "[{} due] Q: {}",
            turn.due_count,
            stats.card().front()
        )?;
        write!(self.output, "(press Enter to show the answer) ")?;
        if self.read_answer()?.is_none() {
            return Ok(Response::Quit);
        }
        writeln!(self.output, "A: {}", stats.card().back())?;

        loop {
            write!(self.output, "right? [y/n/q] ")?;
            let Some(answer) = self.read_answer()? else {
                return Ok(Response::Quit);
            };
            match answer.as_str() {
                "y" | "yes" | "right" => return Ok(Response::Correct),
                "n" | "no" | "wrong" => return Ok(Response::Incorrect),
                "q" | "quit" => return Ok(Response::Quit),
                _ => writeln!(self.output, "please answer y (right), n (wrong) or q (quit)")?,
            }
        }
    }
}

impl<I: BufRead, O: Write> Renderer for TerminalRenderer<I, O> {
    fn present(&mut self, turn: &ReviewTurn) -> sf_core::Result<Response> {
        self.ask(turn).map_err(CoreError::Render)
    }

    fn finished(&mut self, today: ReviewDate) -> sf_core::Result<()> {
        self.announce(today)
            .and_then(|()| writeln!(self.output, "done!"))
            .and_then(|()| self.output.flush())
            .map_err(CoreError::Render)
    }
}
