//! System prompt assembly for the companion persona.

use mindmate_core::config::IdentityConfig;

/// Build the system prompt: persona rules, retrieved knowledge context,
/// and the trailing conversation history. Knowledge entries are joined by
/// blank lines, history turns by single newlines.
pub fn build_system_prompt(
    identity: &IdentityConfig,
    knowledge_context: &[String],
    history: &[String],
) -> String {
    format!(
        "You are {name}, {persona}. Your role is to:\n\
         - Provide supportive, empathetic responses\n\
         - Suggest appropriate mental health exercises when relevant\n\
         - Never provide medical advice or diagnosis\n\
         - Always maintain a warm, understanding tone\n\
         - Encourage professional help when appropriate\n\
         \n\
         Knowledge base context:\n\
         {knowledge}\n\
         \n\
         Conversation history:\n\
         {history}\n\
         \n\
         Respond with JSON in this format:\n\
         {{\n\
           \"message\": \"your empathetic response\",\n\
           \"sentimentScore\": 1-5 (user's emotional state),\n\
           \"suggestedExercises\": [\"exercise1\", \"exercise2\"] (optional),\n\
           \"concernLevel\": \"low|medium|high\"\n\
         }}",
        name = identity.name,
        persona = identity.persona,
        knowledge = knowledge_context.join("\n\n"),
        history = history.join("\n"),
    )
}
