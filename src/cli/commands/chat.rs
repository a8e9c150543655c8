use anyhow::Result;

use super::remote::connect;
use crate::chat::ChatSession;
use crate::config::ResolvedConfig;

pub async fn run_chat(config: ResolvedConfig) -> Result<()> {
    let controller = connect(&config)?;
    let mut session = ChatSession::new(config, controller);
    session.run().await
}
