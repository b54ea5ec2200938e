//! Search command - inspect retrieval without calling the generation API

use clap::Args;
use serde::Serialize;

use crate::config::AppConfig;
use crate::domain::{KeywordScorer, KnowledgeBase, ScoredChunk};
use crate::infrastructure::knowledge_base::load_knowledge_base;
use crate::infrastructure::logging::{self, LoggingConfig};

#[derive(Args, Debug, PartialEq, Eq)]
pub struct SearchArgs {
    /// Free-text query
    pub query: String,

    /// Number of chunks to show (defaults to `retrieval.top_k`)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    source: String,
    results: Vec<ScoredChunk<'a>>,
}

pub async fn run(args: SearchArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&LoggingConfig::from(&config));

    let kb = load_knowledge_base(&config.knowledge_base.path).await;
    let scorer = KeywordScorer::new(config.retrieval.weights());
    let top_k = args.top_k.unwrap_or(config.retrieval.top_k);

    let results = rank(&scorer, &kb, &args.query, top_k);

    if args.json {
        let output = SearchOutput {
            query: &args.query,
            source: kb.source().to_string(),
            results,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No chunks matched {:?} ({})", args.query, kb.source());
        return Ok(());
    }

    for (position, result) in results.iter().enumerate() {
        println!("#{} score={}", position + 1, result.score);
        println!("{}", result.chunk);
        println!();
    }

    Ok(())
}

fn rank<'a>(
    scorer: &KeywordScorer,
    kb: &'a KnowledgeBase,
    query: &str,
    top_k: usize,
) -> Vec<ScoredChunk<'a>> {
    let mut results = scorer.score_chunks(query, kb.chunks());
    results.truncate(top_k);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_truncates() {
        let kb = KnowledgeBase::with_chunks(["react one", "react two", "vue three"]);
        let results = rank(&KeywordScorer::default(), &kb, "react", 1);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].chunk, "react one");
    }

    #[test]
    fn test_rank_no_match() {
        let kb = KnowledgeBase::with_chunks(["alpha", "beta"]);
        assert!(rank(&KeywordScorer::default(), &kb, "gamma", 3).is_empty());
    }
}
