//! Guided Sizing Session
//!
//! Drives one complete conversation against an in-memory repository,
//! printing every exchange and the record persisted at the end.
//!
//! Run with: cargo run --example guided_session

use shockbot::engine;
use shockbot::recommend::{InMemoryRepository, StoredRecommendation};
use stillwater::prelude::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let repo = InMemoryRepository::new();
    repo.seed(StoredRecommendation {
        stroke_mm: 100.0,
        recommendations: vec!["SA-100".to_string(), "SA-100HD".to_string()],
    });

    let (prompt, mut session) = engine::start();
    println!("bot>  {prompt}");

    let answers = ["1", "1000 kg", "2 m/sec", "100", "500", "100", "2", "INR"];
    for answer in answers {
        println!("user> {answer}");
        let turn = engine::handle(&session, answer)
            .run(&repo)
            .await
            .expect("conversation step failed");
        println!("bot>  {}", turn.reply);
        session = turn.session;
    }

    let records = repo.records();
    println!("\npersisted records: {}", records.len());
    if let Some(record) = records.first() {
        println!("record {} created at {}", record.id, record.created_at);
    }
}
