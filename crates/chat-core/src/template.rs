//! Message template variable substitution.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// Values available to `{{...}}` placeholders in a message template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVars {
    /// Time-of-day greeting ("Bom dia" / "Boa tarde" / "Boa noite").
    pub greeting: String,
    /// Recipient display name.
    pub name: String,
    /// Formatted current date.
    pub date: String,
    /// Formatted current time.
    pub time: String,
}

impl TemplateVars {
    /// Vars for the current wall-clock moment. Preview and actual send may
    /// render slightly different values when time has advanced in between;
    /// that drift is accepted behavior.
    pub fn now(name: impl Into<String>) -> Self {
        let now = Local::now();
        Self {
            greeting: greeting_for_hour(now.hour()).to_string(),
            name: name.into(),
            date: now.format("%d/%m/%Y").to_string(),
            time: now.format("%H:%M").to_string(),
        }
    }

    fn lookup(&self, ident: &str) -> Option<&str> {
        match ident {
            "greeting" => Some(&self.greeting),
            "name" => Some(&self.name),
            "date" => Some(&self.date),
            "time" => Some(&self.time),
            _ => None,
        }
    }
}

/// Greeting tri-split at 12:00 and 18:00.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Bom dia"
    } else if hour < 18 {
        "Boa tarde"
    } else {
        "Boa noite"
    }
}

/// Replace each known `{{identifier}}` placeholder with its value. Unknown
/// placeholders pass through untouched; this is not an error.
pub fn apply_vars(template: &str, vars: &TemplateVars) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        match after.find("}}") {
            Some(close) => {
                let ident = &after[..close];
                match vars.lookup(ident.trim()) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(ident);
                        out.push_str("}}");
                    }
                }
                rest = &after[close + 2..];
            }
            None => {
                // Unterminated placeholder: emit literally.
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVars {
        TemplateVars {
            greeting: "Bom dia".into(),
            name: "Ana".into(),
            date: "10/05/2024".into(),
            time: "09:30".into(),
        }
    }

    #[test]
    fn substitutes_known_placeholders() {
        let out = apply_vars("{{greeting}} {{name}}, hoje é {{date}} às {{time}}.", &vars());
        assert_eq!(out, "Bom dia Ana, hoje é 10/05/2024 às 09:30.");
    }

    #[test]
    fn unknown_placeholders_pass_through() {
        let out = apply_vars("Olá {{name}}, {{unknown}}", &vars());
        assert_eq!(out, "Olá Ana, {{unknown}}");
    }

    #[test]
    fn unterminated_placeholder_is_literal() {
        let out = apply_vars("Olá {{name", &vars());
        assert_eq!(out, "Olá {{name");
    }

    #[test]
    fn no_placeholders_is_identity() {
        let out = apply_vars("sem variáveis", &vars());
        assert_eq!(out, "sem variáveis");
    }

    #[test]
    fn greeting_tri_split() {
        assert_eq!(greeting_for_hour(0), "Bom dia");
        assert_eq!(greeting_for_hour(11), "Bom dia");
        assert_eq!(greeting_for_hour(12), "Boa tarde");
        assert_eq!(greeting_for_hour(17), "Boa tarde");
        assert_eq!(greeting_for_hour(18), "Boa noite");
        assert_eq!(greeting_for_hour(23), "Boa noite");
    }
}
