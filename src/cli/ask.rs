use serde_json::{json, Value};
use tracing::info;

use crate::cli::commands::AskArgs;
use crate::errors::SolverError;
use crate::models::Threshold;

/// Env var holding the bearer token sent to the server.
const TOKEN_ENV: &str = crate::api::auth::API_TOKEN_ENV;

pub async fn handle_ask(args: AskArgs) -> Result<(), SolverError> {
    // Validate locally so a bad value never reaches the server
    let threshold = args
        .threshold
        .as_deref()
        .map(str::parse::<Threshold>)
        .transpose()?;

    let url = format!("{}/api/match", args.server.trim_end_matches('/'));
    info!(url = %url, "Asking server");

    let mut body = json!({ "query": args.query });
    if let Some(t) = threshold {
        body["threshold"] = json!(t.value());
    }

    let client = reqwest::Client::new();
    let mut request = client.post(&url).json(&body);
    if let Ok(token) = std::env::var(TOKEN_ENV) {
        if !token.is_empty() {
            request = request.bearer_auth(token);
        }
    }

    let resp = request.send().await
        .map_err(|e| SolverError::Network(format!("Failed to reach server: {}", e)))?;
    let status = resp.status();
    let payload: Value = resp.json().await
        .map_err(|e| SolverError::Network(format!("Invalid response: {}", e)))?;

    if !status.is_success() {
        let message = payload["error"].as_str().unwrap_or("unknown error");
        return Err(SolverError::Network(format!("Server returned {}: {}", status, message)));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", render_answer(&payload));
    Ok(())
}

/// Plain-text summary of a `/api/match` response.
fn render_answer(payload: &Value) -> String {
    let best = &payload["best"];
    if best.is_null() {
        return format!(
            "No match found at threshold {}%",
            payload["threshold"].as_f64().unwrap_or(0.0)
        );
    }

    let answer = if best["answer"].as_bool().unwrap_or(false) { "True" } else { "False" };
    let mut out = format!(
        "{} ({:.2}%)\nQuestion: {}",
        answer,
        best["confidence"].as_f64().unwrap_or(0.0),
        best["question"].as_str().unwrap_or(""),
    );
    if let Some(explanation) = best["explanation"].as_str() {
        out.push_str(&format!("\nWhy: {}", explanation));
    }
    out
}
