use crate::helpers::sse::{is_done, parse_token};
use actix_web::rt;
use futures_util::StreamExt;
use reqwest_eventsource::{retry, Error as EventSourceError, Event, EventSource};
use std::io::Write;

/// Terminal client for the guest relay: prints tokens as they arrive.
pub struct GuestChatCommand {
    server: String,
    message: String,
}

impl GuestChatCommand {
    pub fn new(server: String, message: String) -> Self {
        Self { server, message }
    }
}

impl crate::console::commands::CallableTrait for GuestChatCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let url = format!("{}/api/guest/chat", self.server.trim_end_matches('/'));
        let body = serde_json::json!({ "message": self.message });

        rt::System::new().block_on(async move {
            let request = reqwest::Client::new().post(&url).json(&body);
            let mut events = EventSource::new(request)?;
            events.set_retry_policy(Box::new(retry::Never));

            let mut stdout = std::io::stdout();
            while let Some(event) = events.next().await {
                match event {
                    Ok(Event::Open) => {}
                    Ok(Event::Message(message)) if is_done(&message.data) => break,
                    Ok(Event::Message(message)) => {
                        if let Some(token) = parse_token(&message.data) {
                            write!(stdout, "{}", token.content)?;
                            stdout.flush()?;
                        }
                    }
                    Err(EventSourceError::StreamEnded) => break,
                    Err(err) => {
                        events.close();
                        return Err(err.into());
                    }
                }
            }
            events.close();
            writeln!(stdout)?;

            Ok(())
        })
    }
}
