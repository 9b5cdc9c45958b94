use crate::infra::{
    parse_activity, InMemoryCrewAlerts, InMemoryRecommendationLog, InMemoryStressHistory,
};
use astra_wellness::config::AppConfig;
use astra_wellness::error::AppError;
use astra_wellness::wellness::checks::{
    CheckSubmission, CrewAlert, CrewMemberId, StressAnalysis, StressCheckService,
};
use astra_wellness::wellness::{ActivityLevel, RawSignals};
use chrono::SecondsFormat;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Hours slept in the last rest period
    #[arg(long)]
    pub(crate) sleep_hours: f64,
    /// Self-reported mood from 1 (very low) to 10 (great)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) mood: i32,
    /// Resting heart rate in beats per minute
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) heart_rate: i32,
    /// Physical activity today: none, light, moderate or intense
    #[arg(long, value_parser = parse_activity)]
    pub(crate) activity: ActivityLevel,
    /// Crew member identifier the check is recorded under
    #[arg(long, default_value = "crew-member")]
    pub(crate) member: String,
    /// Display name used in crew alerts
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Print the full analysis as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        sleep_hours,
        mood,
        heart_rate,
        activity,
        member,
        name,
        json,
    } = args;

    let config = AppConfig::load()?;
    let log = Arc::new(InMemoryRecommendationLog::default());
    let alerts = Arc::new(InMemoryCrewAlerts::default());
    let service = StressCheckService::new(
        Arc::new(InMemoryStressHistory::default()),
        log.clone(),
        alerts.clone(),
        config.history,
    );

    let analysis = service.analyze(CheckSubmission {
        member_id: CrewMemberId(member),
        display_name: name,
        signals: RawSignals {
            sleep_hours,
            mood_level: mood,
            heart_rate_bpm: heart_rate,
            activity_level: activity,
        },
    })?;

    if json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Analysis payload unavailable: {err}"),
        }
        return Ok(());
    }

    println!("{}", render_analysis(&analysis, &alerts.events()));
    println!("Recommendations logged: {}", log.len());
    Ok(())
}

pub(crate) fn render_analysis(analysis: &StressAnalysis, alerts: &[CrewAlert]) -> String {
    let result = &analysis.result;
    let mut lines = vec![
        format!(
            "Stress check {} for {} at {}",
            analysis.check_id.0,
            analysis.member_id.0,
            analysis
                .recorded_at
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        ),
        format!(
            "Stress level: {} (score {}/100)",
            result.level.label().to_uppercase(),
            result.score
        ),
        format!("  {}", result.explanation),
    ];

    if result.factors.is_empty() {
        lines.push("Contributing factors: none".to_string());
    } else {
        lines.push(format!("Contributing factors: {}", result.factors.join(", ")));
    }

    lines.push("Signal breakdown:".to_string());
    for contribution in &result.contributions {
        lines.push(format!(
            "  - {:?}: {:+}",
            contribution.signal, contribution.points
        ));
    }

    lines.push("Recommendations:".to_string());
    for recommendation in &analysis.recommendations {
        let action = recommendation
            .action_label
            .as_deref()
            .map(|label| format!(" [{label}]"))
            .unwrap_or_default();
        lines.push(format!(
            "  {} {}{}",
            recommendation.icon, recommendation.title, action
        ));
        lines.push(format!("    {}", recommendation.description));
    }

    if alerts.is_empty() {
        lines.push("Crew alerts: none raised".to_string());
    } else {
        lines.push("Crew alerts:".to_string());
        for alert in alerts {
            lines.push(format!("  - {}", alert.message));
        }
    }

    lines.join("\n")
}
