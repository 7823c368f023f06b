//! Insurance Client — an interactive terminal front end for the fair price calculator.
//! It keeps a quote form, submits it to the server's `/api/quote` endpoint, and shows the
//! returned company offers in a table that can be sorted, filtered and relabeled in
//! Arabic or English.
//!
//! Usage example (CLI):
//! ```bash
//! insurance_client --server-url http://127.0.0.1:3000 --lang en --city Riyadh --year 2015 --submit
//! ```
//!
//! Type `help` at the prompt for the list of commands.
#![warn(missing_docs)]
use std::io::{self, BufRead, Write};

use clap::Parser;
use insurance_client::api::HttpQuoteService;
use insurance_client::args::Args;
use insurance_client::command::ClientCommand;
use insurance_client::form::QuoteForm;
use insurance_client::session::{Flow, Session};
use insurance_client::view::ViewState;
use insurance_common::Result;
use log::{info, warn};

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();

    let service = HttpQuoteService::new(&args.server_url)?;
    info!("Using quote endpoint {}", service.endpoint());

    let form = QuoteForm {
        model: args.model,
        year: args.year,
        city: args.city,
        accidents: args.accidents,
        driver_age: args.driver_age,
    };
    let mut session = Session::new(service, form, ViewState::new(args.lang));

    let mut stdout = io::stdout();
    write!(stdout, "{}", session.screen())?;
    if args.submit {
        session.submit(&mut stdout)?;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match ClientCommand::parse(&line?) {
            Ok(command) => {
                if session.execute(command, &mut stdout)? == Flow::Quit {
                    break;
                }
            }
            Err(e) => {
                warn!("{}", e);
                writeln!(stdout, "{} (type `help`)", e)?;
            }
        }
    }

    info!("Client stopping...");
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
