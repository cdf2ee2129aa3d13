// LLM prompt constants for the Analysis module.

/// Lead analysis prompt template. Replace `{lead_text}` before sending.
/// The key names requested here are exactly the ones the strict parse
/// path reads back out.
pub const LEAD_ANALYZE_PROMPT_TEMPLATE: &str = "You are LeadLens. \
Return ONLY valid JSON with these keys: \
score (0-100), decision (Pursue|Negotiate|Decline), riskLevel (Low|Medium|High), \
redFlags (array of strings), suggestedReply (string). \
No markdown, no extra text.\n\nLead:\n{lead_text}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_carries_the_lead_placeholder() {
        assert!(LEAD_ANALYZE_PROMPT_TEMPLATE.contains("{lead_text}"));
    }
}
