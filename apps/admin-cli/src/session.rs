//! Interactive session: turns commands into controller intents, runs the
//! resulting requests in the background and folds their outcomes back in.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use postdesk_core::controller::{Outcome, Request};
use postdesk_core::ports::PostsApi;
use postdesk_core::domain::PostId;
use postdesk_core::{ControllerError, PostListController};

use crate::command::{Command, parse_line, words};
use crate::render::render;

/// Whether the loop keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    controller: PostListController,
    api: Arc<dyn PostsApi>,
    outcomes_tx: mpsc::UnboundedSender<Outcome>,
    outcomes_rx: mpsc::UnboundedReceiver<Outcome>,
    in_flight: usize,
}

impl Session {
    pub fn new(api: Arc<dyn PostsApi>) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            controller: PostListController::new(),
            api,
            outcomes_tx,
            outcomes_rx,
            in_flight: 0,
        }
    }

    pub fn controller(&self) -> &PostListController {
        &self.controller
    }

    /// Issue the initial load.
    pub fn mount(&mut self) {
        let request = self.controller.mount();
        self.dispatch(request);
    }

    /// Run `request` on its own task. Requests are never cancelled, so
    /// several loads may race; the controller drops stale ones.
    fn dispatch(&mut self, request: Request) {
        let api = Arc::clone(&self.api);
        let tx = self.outcomes_tx.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let outcome = request.execute(api.as_ref()).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("Session closed before request settled");
            }
        });
    }

    fn dispatch_opt(&mut self, request: Option<Request>) {
        if let Some(request) = request {
            self.dispatch(request);
        }
    }

    fn settle(&mut self, outcome: Outcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.controller.apply(outcome);
    }

    /// Wait until every dispatched request has settled.
    pub async fn drain(&mut self) {
        while self.in_flight > 0 {
            match self.outcomes_rx.recv().await {
                Some(outcome) => self.settle(outcome),
                None => break,
            }
        }
    }

    /// Apply one command. Refused intents are reported, not fatal.
    pub fn handle(&mut self, command: Command) -> Result<Flow, ControllerError> {
        match command {
            Command::Reload => {
                let request = self.controller.reload();
                self.dispatch(request);
            }
            Command::Search { text } => {
                let request = self.controller.set_search(words(text));
                self.dispatch_opt(request);
            }
            Command::Toggle { id } => self.controller.request_toggle(PostId(id))?,
            Command::Delete { id } => self.controller.request_delete(PostId(id))?,
            Command::Confirm => {
                let request = self.controller.confirm()?;
                self.dispatch_opt(request);
            }
            Command::Cancel => self.controller.cancel()?,
            Command::OpenForm => self.controller.open_form(),
            Command::CloseForm => self.controller.close_form(),
            Command::Edit { field, value } => self.controller.edit_draft(field, words(value)),
            Command::Publish => {
                let request = self.controller.submit()?;
                self.dispatch_opt(request);
            }
            Command::Reset => self.controller.request_reset()?,
            Command::Dismiss => self.controller.dismiss_notice(),
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Read commands from stdin until `quit` or end of input, redrawing
    /// after every command and every settled request.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.mount();
        println!("{}", render(self.controller()));

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };

                    let command = match parse_line(&line) {
                        Ok(Some(command)) => command,
                        Ok(None) => continue,
                        Err(err) => {
                            println!("{err}");
                            continue;
                        }
                    };

                    match self.handle(command) {
                        Ok(Flow::Quit) => break,
                        Ok(Flow::Continue) => {}
                        Err(err) => println!("{err}"),
                    }
                }
                Some(outcome) = self.outcomes_rx.recv() => {
                    self.settle(outcome);
                }
            }

            println!("{}", render(self.controller()));
        }

        Ok(())
    }
}
