use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use dyngraph_core::{WUGraph, Weight};

use crate::error::Error;
use crate::input::Tokens;
use crate::menu::{
    MenuChoice, MENU, PROMPT_END, PROMPT_FIRST, PROMPT_LABEL, PROMPT_REMOVE_LABEL, PROMPT_SECOND,
    PROMPT_START, PROMPT_WEIGHT,
};
use crate::render::Outcome;

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Render outcomes as JSON lines.
    pub json: bool,
    /// Skip the menu banner and prompts.
    pub quiet: bool,
}

/// One run of the interactive menu over a fresh graph.
///
/// The session owns the graph; it is discarded when the session ends.
#[derive(Debug)]
pub struct Session<R, W> {
    graph: WUGraph<String>,
    input: Tokens<R>,
    output: W,
    options: SessionOptions,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            graph: WUGraph::default(),
            input: Tokens::new(input),
            output,
            options,
        }
    }

    /// Run the menu loop until `0` is chosen or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    /// Rejected operations and malformed input are reported and skipped.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            if !self.options.quiet {
                self.output.write_all(MENU.as_bytes())?;
                self.output.flush()?;
            }
            let Some(token) = self.input.next_token()? else {
                break;
            };
            match MenuChoice::from_token(&token) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => {
                    tracing::debug!(?choice, "menu choice");
                    if self.dispatch(choice)?.is_break() {
                        break;
                    }
                }
                None => {
                    tracing::debug!(%token, "invalid menu choice");
                    self.emit(&Outcome::InvalidChoice(&token))?;
                }
            }
        }
        self.emit(&Outcome::Exit)?;
        self.output.flush()?;
        Ok(())
    }

    /// Collect the arguments for `choice` and apply it.
    ///
    /// Breaks if input ran out before every argument was read.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>, Error> {
        match choice {
            MenuChoice::Exit => {}
            MenuChoice::AddVertex => {
                let Some(label) = self.ask(PROMPT_LABEL)? else {
                    return Ok(ControlFlow::Break(()));
                };
                match self.graph.add_vertex(label.clone()) {
                    Ok(()) => self.emit(&Outcome::VertexAdded(&label))?,
                    Err(error) => self.emit(&Outcome::Rejected { choice, error })?,
                }
            }
            MenuChoice::RemoveVertex => {
                let Some(label) = self.ask(PROMPT_REMOVE_LABEL)? else {
                    return Ok(ControlFlow::Break(()));
                };
                match self.graph.remove_vertex(&label) {
                    Ok(detached) => self.emit(&Outcome::VertexRemoved {
                        label: &label,
                        detached: detached.len(),
                    })?,
                    Err(error) => self.emit(&Outcome::Rejected { choice, error })?,
                }
            }
            MenuChoice::AddEdge => {
                let Some((a, b)) = self.ask_pair(PROMPT_FIRST, PROMPT_SECOND)? else {
                    return Ok(ControlFlow::Break(()));
                };
                let Some(raw) = self.ask(PROMPT_WEIGHT)? else {
                    return Ok(ControlFlow::Break(()));
                };
                let Ok(weight) = raw.parse::<Weight>() else {
                    self.emit(&Outcome::InvalidWeight(&raw))?;
                    return Ok(ControlFlow::Continue(()));
                };
                match self.graph.add_edge(a.clone(), b.clone(), weight) {
                    Ok(()) => self.emit(&Outcome::EdgeAdded {
                        a: &a,
                        b: &b,
                        weight,
                    })?,
                    Err(error) => self.emit(&Outcome::Rejected { choice, error })?,
                }
            }
            MenuChoice::RemoveEdge => {
                let Some((a, b)) = self.ask_pair(PROMPT_FIRST, PROMPT_SECOND)? else {
                    return Ok(ControlFlow::Break(()));
                };
                match self.graph.remove_edge(&a, &b) {
                    Ok(weight) => self.emit(&Outcome::EdgeRemoved {
                        a: &a,
                        b: &b,
                        weight,
                    })?,
                    Err(error) => self.emit(&Outcome::Rejected { choice, error })?,
                }
            }
            MenuChoice::ShortestPath => {
                let Some((start, end)) = self.ask_pair(PROMPT_START, PROMPT_END)? else {
                    return Ok(ControlFlow::Break(()));
                };
                match self.graph.shortest_path(&start, &end) {
                    Ok(found) => self.emit(&Outcome::Path(found))?,
                    Err(error) => self.emit(&Outcome::Rejected { choice, error })?,
                }
            }
            MenuChoice::PrintGraph => {
                let outcome = Outcome::Graph(&self.graph);
                outcome.write_to(&mut self.output, self.options.json)?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        if !self.options.quiet {
            self.output.write_all(prompt.as_bytes())?;
            self.output.flush()?;
        }
        Ok(self.input.next_token()?)
    }

    fn ask_pair(&mut self, first: &str, second: &str) -> Result<Option<(String, String)>, Error> {
        let Some(a) = self.ask(first)? else {
            return Ok(None);
        };
        let Some(b) = self.ask(second)? else {
            return Ok(None);
        };
        Ok(Some((a, b)))
    }

    fn emit(&mut self, outcome: &Outcome<'_>) -> Result<(), Error> {
        outcome.write_to(&mut self.output, self.options.json)
    }

    #[must_use]
    pub const fn graph(&self) -> &WUGraph<String> {
        &self.graph
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }
}
