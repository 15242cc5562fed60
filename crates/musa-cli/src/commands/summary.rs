use musa_classifier::aggregate_patterns;
use musa_memory::ConversationMemory;

pub(super) fn cmd_summary(config: musa_config::MusaConfig, json: bool) -> musa_core::Result<()> {
    let memory = ConversationMemory::open(&config.memory.file_path, config.memory.capacity);
    if memory.is_empty() {
        println!(
            "No conversation history at {}",
            config.memory.file_path.display()
        );
        return Ok(());
    }

    let patterns = aggregate_patterns(&memory.snapshot());
    let preferences = memory.preferences();

    if json {
        let payload = serde_json::json!({
            "summary": memory.summary(),
            "patterns": patterns,
            "preferences": preferences,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", memory.summary());
    println!();
    println!("Intents:");
    for (intent, count) in &patterns.intent_counts {
        println!("  {intent}: {count}");
    }
    println!("Sentiments:");
    for (sentiment, count) in &patterns.sentiment_counts {
        println!("  {sentiment}: {count}");
    }
    println!("Topics:");
    for (topic, count) in &patterns.topic_counts {
        println!("  {topic}: {count}");
    }
    match preferences.complexity_preference {
        Some(complexity) => println!("Preferred complexity: {complexity}"),
        None => println!("Preferred complexity: unknown"),
    }
    Ok(())
}
