//! `storepilot ask`: one query through the full pipeline, printed to stdout.

use sp_contextpack::Topic;
use sp_domain::config::Config;

use crate::bootstrap;

pub async fn ask(config: &Config, query: &str, topic: Topic, json_output: bool) -> anyhow::Result<()> {
    if query.is_empty() {
        anyhow::bail!("query must not be empty");
    }

    let assistant = bootstrap::build_assistant(config)?;
    let answer = assistant.ask(topic, query).await;

    if json_output {
        let out = serde_json::json!({
            "topic": topic.as_str(),
            "response": answer.text,
            "source": answer.source.as_str(),
            "failure": answer.source.failure(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", answer.text);
    }

    Ok(())
}
