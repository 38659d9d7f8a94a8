//! Quorum shell bootstrap: wires the screens to the Gemini gateway and runs
//! a one-shot resolver pass over the built-in sample resolution.
//!
//! Requires GEMINI_API_KEY (or user_config.toml) for the live call.
//! Track record storage: ./data/quorum_track_record (sled).

use quorum_core::{GatewayError, GeminiClient, RiskLevel, SledTrackRecordStore};
use quorum_shell::{AppShell, AppTab, ResolutionResolver, ScreenState, TrackRecordScreen};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let service = match GeminiClient::from_env() {
        Ok(client) => client,
        Err(GatewayError::MissingApiKey) => {
            eprintln!("Quorum — Independent Director Assistance Shell");
            eprintln!("  No API credential found.");
            eprintln!("  Set GEMINI_API_KEY in the environment (or .env),");
            eprintln!("  or put api_key = \"...\" in user_config.toml.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let mut shell = AppShell::new();
    shell.login("Demo Director", "Independent Director");
    shell.set_active_tab(AppTab::Resolver);

    let store = Arc::new(SledTrackRecordStore::open_path(Path::new(
        "./data/quorum_track_record",
    ))?);
    let track_record = TrackRecordScreen::mount(store);
    info!(
        "Track record loaded: {} entr{}",
        track_record.items().len(),
        if track_record.items().len() == 1 { "y" } else { "ies" }
    );

    let mut resolver = ResolutionResolver::new();
    resolver.load_sample();
    info!("Running fiduciary analysis on the sample resolution");
    resolver.analyze(&service).await;

    match resolver.state() {
        ScreenState::Ready(analysis) => {
            println!("{}", analysis.title);
            println!("Risk level: {}", analysis.risk_level.as_str());
            if analysis.risk_level == RiskLevel::High {
                println!("High scrutiny recommended before the next board cycle.");
            }
            println!("\nSuggested inquiries for management:");
            for inquiry in &analysis.inquiries {
                println!("  - {inquiry}");
            }
            println!("\nCompliance: {}", analysis.compliance_notes);
        }
        _ => {
            if let Some(alert) = resolver.alert() {
                eprintln!("{alert}");
            }
        }
    }

    Ok(())
}
