//! Output formatting for rendered prompts.

use crate::cli::OutputFormat;
use crate::error::Result;
use chrono::{DateTime, Local};
use serde::Serialize;

/// Estimated tokens per whitespace-separated word.
pub const TOKENS_PER_WORD: f64 = 1.3;

/// Estimates the token count of `text` from its word count.
pub fn estimate_tokens(text: &str) -> usize {
    (text.split_whitespace().count() as f64 * TOKENS_PER_WORD) as usize
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    prompt: &'a str,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<&'a str>,
}

/// Formats the rendered prompt, token estimate and simulated response.
///
/// A zero token estimate and an empty response are left out of every format.
///
/// # Arguments
/// * `prompt` - Rendered prompt
/// * `response` - Simulated response, if any
/// * `tokens` - Token estimate, if requested
/// * `format` - Output format
/// * `now` - Generation time
pub fn format_output(
    prompt: &str,
    response: Option<&str>,
    tokens: Option<usize>,
    format: OutputFormat,
    now: DateTime<Local>,
) -> Result<String> {
    let tokens = tokens.filter(|&tokens| tokens > 0);
    let response = response.filter(|response| !response.is_empty());
    let out = match format {
        OutputFormat::Json => {
            let out = JsonOutput {
                prompt,
                timestamp: now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
                tokens,
                response,
            };
            serde_json::to_string_pretty(&out)?
        }
        OutputFormat::Markdown => {
            let mut out = format!("# Prompt\n\n{prompt}");
            if let Some(tokens) = tokens {
                out.push_str(&format!(
                    "\n\n## Metadata\n- Tokens: {tokens}\n- Timestamp: {}",
                    now.format("%Y-%m-%d %H:%M:%S")
                ));
            }
            if let Some(response) = response {
                out.push_str(&format!("\n\n# Simulated Response\n\n{response}"));
            }
            out
        }
        OutputFormat::Text => {
            let mut out = prompt.to_string();
            if let Some(tokens) = tokens {
                out.push_str(&format!("\n\n[Tokens: {tokens}]"));
            }
            if let Some(response) = response {
                out.push_str(&format!("\n\n---\n{response}"));
            }
            out
        }
    };
    Ok(out)
}
