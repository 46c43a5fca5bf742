use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use turismo_session::{ChatSession, SubmitOutcome};

/// Interactive chat loop.
///
/// Pure presentation: reads lines, forwards them to the session, prints
/// whatever the transcript says. All protocol decisions (trimming, busy
/// rejection, fallback text) live in the controller.
pub async fn run(session: &ChatSession) -> Result<()> {
    println!("TurismoMgta — your guide to Isla de Margarita. Type /quit to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == "/quit" {
            break;
        }

        match session.submit(&line).await {
            SubmitOutcome::Accepted => {
                let transcript = session.snapshot();
                if let Some(reply) = transcript.last() {
                    println!("turismo> {}", reply.text);
                }
            }
            SubmitOutcome::RejectedEmpty => {}
            SubmitOutcome::RejectedBusy => {
                println!("(still waiting on the previous reply)");
            }
        }
    }

    Ok(())
}
