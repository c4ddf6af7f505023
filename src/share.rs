//! Share the last result via the platform share sheet or the clipboard

use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::error::{DiceError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

impl ShareOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Shared => "Shared!",
            Self::Copied => "Copied to clipboard!",
        }
    }
}

pub fn share_text(result: &str) -> String {
    format!("\u{1F3B2} Decision Dice picked \"{result}\" for me! Let fate decide for you.")
}

/// Script body for `document::eval`; returns "shared", "copied" or "error:<reason>"
pub fn share_script(text: &str) -> String {
    // serde_json gives a correctly escaped JS string literal
    let literal = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"
        const text = {literal};
        try {{
            if (navigator.share) {{
                await navigator.share({{ title: "Decision Dice", text }});
                return "shared";
            }}
            await navigator.clipboard.writeText(text);
            return "copied";
        }} catch (e) {{
            return "error:" + (e && e.message ? e.message : String(e));
        }}
        "#
    )
}

pub fn parse_reply(reply: &str) -> Result<ShareOutcome> {
    match reply {
        "shared" => Ok(ShareOutcome::Shared),
        "copied" => Ok(ShareOutcome::Copied),
        other => Err(DiceError::Share(
            other.strip_prefix("error:").unwrap_or(other).to_string(),
        )),
    }
}

pub async fn share_result(result: &str) -> Result<ShareOutcome> {
    let script = share_script(&share_text(result));
    let reply = document::eval(&script)
        .join::<String>()
        .await
        .map_err(|err| DiceError::Script(format!("{err:?}")))?;
    let outcome = parse_reply(&reply);
    if let Ok(done) = &outcome {
        info!(?done, "share finished");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_mentions_result() {
        assert!(share_text("Sushi").contains("\"Sushi\""));
    }

    #[test]
    fn script_escapes_quotes() {
        let script = share_script(r#"say "hi" </script>"#);
        assert!(script.contains(r#"const text = "say \"hi\" </script>";"#));
        assert!(script.contains("navigator.clipboard.writeText"));
    }

    #[test]
    fn replies_map_to_outcomes() {
        assert_eq!(parse_reply("shared").unwrap(), ShareOutcome::Shared);
        assert_eq!(parse_reply("copied").unwrap(), ShareOutcome::Copied);
        match parse_reply("error:denied") {
            Err(DiceError::Share(reason)) => assert_eq!(reason, "denied"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
