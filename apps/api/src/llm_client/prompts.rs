// Cross-cutting prompt fragments shared by every provider prompt.
// Provider-specific schemas live next to the provider adapters.

/// Enforces a bare JSON object as the whole reply.
pub const JSON_ONLY_INSTRUCTION: &str = "IMPORTANT: Your response MUST be a valid JSON object. \
    Do not include any text outside the JSON structure. \
    Do not include markdown formatting, explanations, or any other content outside the JSON object.";

pub const ENGLISH_ONLY_INSTRUCTION: &str = "IMPORTANT: ALL content must be in ENGLISH only. \
    Do not use any other language in your response.";

/// Pushes the model toward resume-specific detail instead of boilerplate.
pub const SPECIFICITY_INSTRUCTION: &str = "IMPORTANT: Be specific and detailed in your analysis. \
    Include actual metrics, project names, technologies, and other concrete details from the resume \
    whenever possible. Do not make assumptions or use generic responses.";

/// Joins a role preamble, a response schema and the shared rules into one system prompt.
pub fn build_system_prompt(preamble: &str, schema: &str) -> String {
    [
        preamble,
        "Respond in the following JSON format:",
        schema,
        JSON_ONLY_INSTRUCTION,
        ENGLISH_ONLY_INSTRUCTION,
        SPECIFICITY_INSTRUCTION,
    ]
    .join("\n\n")
}
