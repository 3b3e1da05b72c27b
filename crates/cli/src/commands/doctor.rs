use pokedex_core::config::{AppConfig, LoadOptions};
use serde::Serialize;

use crate::commands::{CommandResult, EXIT_CONFIG, EXIT_DICTIONARY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code = exit_code(&report);

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

/// Exit code of the first failing check, or 0 when nothing failed.
fn exit_code(report: &DoctorReport) -> u8 {
    report
        .checks
        .iter()
        .find(|check| check.status == CheckStatus::Fail)
        .map(|check| match check.name {
            "config_validation" => EXIT_CONFIG,
            "dictionary_load" => EXIT_DICTIONARY,
            _ => 1,
        })
        .unwrap_or(0)
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_dictionary(&config));
            checks.push(check_application_id(&config));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "dictionary_load",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }

    let all_pass = checks.iter().all(|check| check.status != CheckStatus::Fail);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_dictionary(config: &AppConfig) -> DoctorCheck {
    let source = match &config.skill.dictionary_path {
        Some(path) => format!("`{}`", path.display()),
        None => "bundled dictionary".to_string(),
    };

    match config.skill.load_dictionary() {
        Ok(dictionary) if dictionary.is_empty() => DoctorCheck {
            name: "dictionary_load",
            status: CheckStatus::Fail,
            details: format!("{source} has no entries"),
        },
        Ok(dictionary) => DoctorCheck {
            name: "dictionary_load",
            status: CheckStatus::Pass,
            details: format!("{} monsters loaded from {source}", dictionary.len()),
        },
        Err(error) => {
            DoctorCheck { name: "dictionary_load", status: CheckStatus::Fail, details: error.to_string() }
        }
    }
}

fn check_application_id(config: &AppConfig) -> DoctorCheck {
    match &config.skill.application_id {
        Some(application_id) => DoctorCheck {
            name: "application_id",
            status: CheckStatus::Pass,
            details: format!("requests must carry `{application_id}`"),
        },
        None => DoctorCheck {
            name: "application_id",
            status: CheckStatus::Skipped,
            details: "not configured; requests from any skill are accepted".to_string(),
        },
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
