use std::sync::Arc;

use console::style;

use musa_llm::LlmProvider;
use musa_runtime::ChatSession;

pub(super) async fn cmd_check(config: musa_config::MusaConfig) -> musa_core::Result<()> {
    println!("Checking configuration...");
    match config.validate() {
        Ok(warnings) => {
            for w in &warnings {
                println!("{w}");
            }
            println!("{} configuration ok", style("✅").green());
        }
        Err(e) => {
            return Err(musa_core::MusaError::Config(e));
        }
    }

    let api_key = config.require_gemini_key()?;
    let provider = Arc::new(musa_llm::GeminiProvider::new(api_key));
    provider.health_check().await?;
    println!("{} API key present", style("✅").green());

    println!("Probing {}...", config.assistant.model);
    let session = ChatSession::new(&config, provider)?;
    session.check().await?;
    println!("{} {} is answering", style("✅").green(), config.assistant.model);
    Ok(())
}
