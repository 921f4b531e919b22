use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pesantren_moderation::{
    config::AppConfig,
    domain::{ContentAnalysisRecord, ContentItem},
    infrastructure::shutdown::Shutdown,
    moderation::ModerationService,
};
use serde_json::Value;

pub struct ModerationApp {
    config: AppConfig,
    service: ModerationService,
    shutdown: Shutdown,
}

impl ModerationApp {
    pub fn initialize(config: AppConfig, shutdown: Shutdown) -> Self {
        let service = ModerationService::new(config.moderation.clone());
        Self {
            config,
            service,
            shutdown,
        }
    }

    pub async fn run(self, input: PathBuf) -> Result<()> {
        let ModerationApp {
            config,
            service,
            shutdown,
        } = self;

        let items = read_items(&input).await?;
        tracing::info!(
            input = %input.display(),
            items = items.len(),
            delay_ms = config.moderation.analysis_delay.as_millis() as u64,
            "moderation batch started"
        );

        let mut shutdown_listener = shutdown.subscribe();
        let results = tokio::select! {
            results = service.analyze_batch(&items) => results,
            _ = shutdown_listener.notified() => {
                tracing::warn!(
                    target: "lifecycle",
                    "shutdown requested; batch aborted without writing a report"
                );
                return Ok(());
            }
        };

        let records: Vec<ContentAnalysisRecord> = results
            .into_iter()
            .map(|(id, result)| service.to_analysis_record(&result, id))
            .collect();
        let report = serde_json::to_string_pretty(&records)?;

        match config.io.output_path.as_deref() {
            Some(path) => {
                tokio::fs::write(path, report)
                    .await
                    .with_context(|| format!("failed to write report to {path}"))?;
                tracing::info!(output = %path, records = records.len(), "report written");
            }
            None => println!("{report}"),
        }

        tracing::info!("moderation batch finished");
        Ok(())
    }
}

async fn read_items(path: &Path) -> Result<Vec<ContentItem>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_items(&raw).with_context(|| format!("{} is not a JSON array", path.display()))
}

fn parse_items(raw: &str) -> Result<Vec<ContentItem>> {
    let entries: Vec<Value> = serde_json::from_str(raw)?;
    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<ContentItem>(entry) {
            Ok(item) => items.push(item),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping unreadable batch entry");
            }
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use pesantren_moderation::domain::ItemId;

    use super::*;

    #[test]
    fn unreadable_entries_do_not_sink_the_batch() {
        let items = parse_items(
            r#"[
                {"id": 1, "content": "berita pondok", "type": "news"},
                {"content": "tanpa id"},
                {"id": 3, "content": 42},
                "bukan objek"
            ]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, ItemId::Number(1));
        assert_eq!(items[1].id, ItemId::Number(3));
    }

    #[test]
    fn non_array_input_is_an_error() {
        assert!(parse_items(r#"{"id": 1}"#).is_err());
    }
}
