//! Interactive session: form, display state and the quote service.
//!
//! Output goes straight to a writer so the in-flight label is on screen while
//! the request blocks. A failed quote call never touches the current offers;
//! the user sees a localized alert and can try again.
use std::io::{self, Write};

use log::{error, info};

use crate::api::QuoteService;
use crate::command::{ClientCommand, HELP};
use crate::form::QuoteForm;
use crate::render::{render_form, render_notice, render_table};
use crate::view::ViewState;

/// Whether the prompt loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Leave the loop.
    Quit,
}

/// Client session state.
pub struct Session<S: QuoteService> {
    service: S,
    form: QuoteForm,
    view: ViewState,
}

impl<S: QuoteService> Session<S> {
    /// Create a session with an initial form and view.
    pub fn new(service: S, form: QuoteForm, view: ViewState) -> Self {
        Self {
            service,
            form,
            view,
        }
    }

    /// Current display state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Submit the form, showing the calculating label until the service answers.
    pub fn submit<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.view.begin_submit();
        let shown = write!(out, "{}", render_notice(&self.view, self.view.submit_label()))
            .and_then(|()| out.flush());
        if let Err(e) = shown {
            self.view.finish_submit();
            return Err(e);
        }

        let result = self.service.request_quote(&self.form);
        self.view.finish_submit();

        match result {
            Ok(response) => {
                info!(
                    "Received fair price {} with {} offers",
                    response.fair_price,
                    response.offers.len()
                );
                self.view.replace_offers(response.offers);
                write!(out, "{}", render_table(&self.view))
            }
            Err(e) => {
                error!("Quote request failed: {}", e);
                let alert = self.view.labels().connection_error;
                write!(out, "{}", render_notice(&self.view, alert))
            }
        }
    }

    /// Apply one command, writing its output to `out`.
    pub fn execute<W: Write>(&mut self, command: ClientCommand, out: &mut W) -> io::Result<Flow> {
        match command {
            ClientCommand::Submit => self.submit(out)?,
            ClientCommand::Set(field, value) => self.form.set(field, &value),
            ClientCommand::Sort(key) => {
                self.view.click_header(key);
                write!(out, "{}", render_table(&self.view))?;
            }
            ClientCommand::Filter(text) => {
                self.view.set_filter(&text);
                write!(out, "{}", render_table(&self.view))?;
            }
            ClientCommand::Lang(language) => {
                self.view.set_language(language);
                write!(out, "{}", self.screen())?;
            }
            ClientCommand::Show => write!(out, "{}", self.screen())?,
            ClientCommand::Help => writeln!(out, "{}", HELP)?,
            ClientCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Form followed by the offers table, if any.
    pub fn screen(&self) -> String {
        let mut out = render_form(&self.view, &self.form);
        out.push_str(&render_table(&self.view));
        out
    }
}
