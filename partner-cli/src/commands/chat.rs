use std::future::Future;

use anyhow::Result;
use owo_colors::OwoColorize;
use partner_core::chat::{ChatSession, Responder};
use partner_core::config::PartnerConfig;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::render::Render;
use crate::utils::tui;

pub async fn run(config: &PartnerConfig) -> Result<()> {
    let mut session = ChatSession::new(config.chat.clone());

    for message in session.messages() {
        println!("{}", message.render());
    }
    println!("{}", "Type a message and press enter. /quit to leave.".dimmed());

    converse(
        &mut session,
        BufReader::new(tokio::io::stdin()),
        tokio::signal::ctrl_c,
    )
    .await
}

/// Read lines and print replies until end of input, `/quit`, or an interrupt
/// at the prompt. An interrupt while a reply is pending only cancels that reply.
async fn converse<P, I, F, Fut>(
    session: &mut ChatSession<P>,
    input: I,
    mut interrupt: F,
) -> Result<()>
where
    P: Responder,
    I: AsyncBufRead + Unpin,
    F: FnMut() -> Fut,
    Fut: Future,
{
    let mut lines = input.lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = interrupt() => {
                tracing::debug!("interrupted at prompt");
                println!();
                break;
            }
        };
        let Some(line) = line else {
            break;
        };
        if matches!(line.trim(), "/quit" | "/exit") {
            break;
        }

        let Some(handle) = session.send(&line)? else {
            continue;
        };

        let spinner = tui::create_spinner("  partner is typing".dimmed().to_string());
        let outcome = tokio::select! {
            reply = session.next_reply() => Some(reply.map(|m| m.map(|m| m.render()))),
            _ = interrupt() => None,
        };
        spinner.finish_and_clear();

        match outcome {
            Some(Ok(Some(rendered))) => println!("{}", rendered),
            Some(Ok(None)) => {}
            Some(Err(e)) => eprintln!("  {}", e.to_string().red()),
            None => {
                session.cancel(handle);
                println!("{}", "  (reply cancelled)".dimmed());
            }
        }
    }

    Ok(())
}
