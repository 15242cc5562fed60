use musa_memory::ConversationMemory;

pub(super) fn cmd_clear(config: musa_config::MusaConfig, yes: bool) -> musa_core::Result<()> {
    let mut memory = ConversationMemory::open(&config.memory.file_path, config.memory.capacity);
    if memory.is_empty() {
        println!("Nothing to clear.");
        return Ok(());
    }

    if !yes {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("Delete {} stored interactions?", memory.len()))
            .default(false)
            .interact()
            .map_err(|e| musa_core::MusaError::Other(anyhow::anyhow!(e)))?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    memory.clear()?;
    println!("🗑️  Conversation history cleared.");
    Ok(())
}
