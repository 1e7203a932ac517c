use futures::future::join_all;
use log::info;
use std::io;
use tokio::io::{ AsyncBufRead, AsyncBufReadExt };
use crate::client::{ ChatClient, Submission };

const CMD_CLEAR: &str = "/clear";
const CMD_QUIT: &str = "/quit";

/// Reads lines from `input` and submits each one, like a chat form would.
///
/// `/clear` clears the conversation and `/quit` (or end of input) stops
/// reading. Replies still in flight are awaited before returning.
pub async fn run_prompt<R>(client: &ChatClient, input: R) -> io::Result<()>
    where R: AsyncBufRead + Unpin
{
    let mut lines = input.lines();
    let mut pending: Vec<Submission> = Vec::new();

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            CMD_QUIT => {
                break;
            }
            CMD_CLEAR => {
                client.clear();
            }
            _ => {
                if let Some(submission) = client.submit(&line) {
                    pending.push(submission);
                }
            }
        }
        pending.retain(|s| !s.is_finished());
    }

    if !pending.is_empty() {
        info!("Waiting for {} reply(ies) before exiting", pending.len());
    }
    join_all(pending.into_iter().map(Submission::wait)).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::error::ChatError;
    use crate::models::chat::Sender;
    use crate::transport::{ ChatTransport, HttpReply };
    use crate::view::MemoryView;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::Arc;
    use tokio::io::{ AsyncWriteExt, BufReader };
    use tokio::sync::{ oneshot, Mutex };

    struct EchoTransport;

    #[async_trait]
    impl ChatTransport for EchoTransport {
        async fn post_chat(&self, message: &str) -> Result<HttpReply, ChatError> {
            Ok(HttpReply {
                status: StatusCode::OK,
                body: serde_json::json!({ "response": message.to_uppercase() }).to_string(),
            })
        }

        fn endpoint(&self) -> String {
            "echo://chat".to_string()
        }
    }

    fn client() -> (ChatClient, Arc<MemoryView>) {
        let config = ClientConfig::new("http://localhost").unwrap();
        let view = Arc::new(MemoryView::new());
        let client = ChatClient::new(&config, view.clone(), Arc::new(EchoTransport));
        (client, view)
    }

    #[tokio::test]
    async fn blank_lines_are_skipped() {
        let (client, view) = client();
        run_prompt(&client, "\n   \nhello\n\n".as_bytes()).await.unwrap();

        let turns = view.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].sender, Sender::User);
        assert_eq!(turns[0].text, "hello");
        assert_eq!(turns[1].text, "HELLO");
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let (client, view) = client();
        run_prompt(&client, "one\n/quit\ntwo\n".as_bytes()).await.unwrap();
        assert_eq!(view.bot_texts(), vec!["ONE"]);
    }

    /// Holds every reply until the test opens the gate.
    struct GatedTransport {
        gate: Mutex<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait]
    impl ChatTransport for GatedTransport {
        async fn post_chat(&self, message: &str) -> Result<HttpReply, ChatError> {
            let gate = self.gate.lock().await.take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            EchoTransport.post_chat(message).await
        }

        fn endpoint(&self) -> String {
            "gated://chat".to_string()
        }
    }

    #[tokio::test]
    async fn clear_empties_the_view() {
        let (open, gate) = oneshot::channel();
        let config = ClientConfig::new("http://localhost").unwrap();
        let view = Arc::new(MemoryView::new());
        let transport = Arc::new(GatedTransport { gate: Mutex::new(Some(gate)) });
        let client = ChatClient::new(&config, view.clone(), transport);

        let (writer, reader) = tokio::io::duplex(64);
        let prompt = {
            let client = client.clone();
            tokio::spawn(async move { run_prompt(&client, BufReader::new(reader)).await })
        };

        let mut writer = writer;
        writer.write_all(b"one\n").await.unwrap();
        while view.len() < 1 {
            tokio::task::yield_now().await;
        }
        writer.write_all(b"/clear\n").await.unwrap();
        while !view.is_empty() {
            tokio::task::yield_now().await;
        }
        assert_eq!(client.in_flight(), 1);

        open.send(()).unwrap();
        drop(writer);
        prompt.await.unwrap().unwrap();

        let turns = view.turns();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].sender, Sender::Bot);
        assert_eq!(turns[0].text, "ONE");
    }
}
