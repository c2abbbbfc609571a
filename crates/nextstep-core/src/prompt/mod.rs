//! Deterministic prompt templates for the three model calls.
//!
//! Each builder is pure string assembly over its inputs: identical inputs
//! always yield byte-identical prompts. No randomness, no timestamps.
//! Every template states the persona, embeds the user's fields verbatim,
//! and pins the output contract (raw JSON only, schema by example).

use crate::roadmap::types::{ChatContext, UserProfile};

// ---------------------------------------------------------------------------
// Schema examples
// ---------------------------------------------------------------------------

/// Output schema for a fresh roadmap, shown to the model by example.
const ROADMAP_SCHEMA: &str = r#"{
  "careerPath": "Name of the career path",
  "summary": "Brief 2-3 sentence explanation of why this career suits them",
  "estimatedDuration": "Total time estimate (e.g., '12-18 months')",
  "phases": [
    {
      "title": "Phase name",
      "duration": "Time estimate (e.g., '2-3 months')",
      "description": "Brief description of what this phase covers",
      "subtopics": [
        "Specific topic 1 to learn",
        "Specific topic 2 to learn",
        "Specific topic 3 to learn",
        "Specific topic 4 to learn"
      ]
    }
  ]
}"#;

/// Output schema for a transition roadmap: the same shape plus the
/// transferable-skills list.
const TRANSITION_SCHEMA: &str = r#"{
  "careerPath": "New career path name",
  "summary": "2-3 sentences explaining the transition strategy and why it's achievable",
  "estimatedDuration": "Realistic transition time estimate",
  "transferableSkills": ["skill1", "skill2", "skill3"],
  "phases": [
    {
      "title": "Phase name",
      "duration": "Time estimate",
      "description": "Brief description emphasizing what they already know vs. what's new",
      "subtopics": [
        "Topic 1",
        "Topic 2",
        "Topic 3",
        "Topic 4"
      ]
    }
  ]
}"#;

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build the roadmap-generation prompt from a user profile.
pub fn build_roadmap_prompt(profile: &UserProfile) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str(
        "You are an expert career counselor and roadmap designer. \
         Based on the following user profile, create a detailed, \
         personalized career roadmap.\n\n",
    );

    prompt.push_str("User Profile:\n");
    prompt.push_str(&format!("- Name: {}\n", profile.name));
    prompt.push_str(&format!("- Education: {}\n", profile.education));
    prompt.push_str(&format!("- Interests: {}\n", profile.interests));
    prompt.push_str(&format!("- Current Skills: {}\n", profile.skills));
    prompt.push_str(&format!("- Career Goals: {}\n\n", profile.goals));

    prompt.push_str(
        "Please analyze this profile and:\n\
         1. Identify the most suitable career path that aligns with their interests, skills, and goals\n\
         2. Consider current market demand for skills\n\
         3. Create a structured learning roadmap with 6-9 phases\n\
         4. Each phase should include a title, duration estimate, and 4-6 specific subtopics to learn\n\n",
    );

    prompt.push_str(
        "Return your response ONLY as a valid JSON object in this exact format \
         (no markdown, no code blocks, just raw JSON):\n",
    );
    prompt.push_str(ROADMAP_SCHEMA);
    prompt.push_str(
        "\n\nMake it practical, actionable, and tailored to their specific profile. \
         Focus on modern, in-demand skills.\n",
    );

    prompt
}

/// Build the chat prompt from the user's message and dashboard context.
///
/// Empty context fields read as "Not specified" so the model is never
/// shown a dangling label.
pub fn build_chat_prompt(message: &str, context: &ChatContext) -> String {
    let mut prompt = String::with_capacity(1024);

    prompt.push_str(
        "You are a friendly and knowledgeable AI career assistant for NextStep, \
         a career guidance platform.\n\n",
    );

    prompt.push_str("User Context:\n");
    prompt.push_str(&format!(
        "- Career Path: {}\n",
        or_not_specified(&context.career_path)
    ));
    prompt.push_str(&format!(
        "- Current Phase: {}\n\n",
        or_not_specified(&context.current_phase)
    ));

    prompt.push_str(&format!("User Message: {message}\n\n"));

    prompt.push_str(
        "Provide a helpful, encouraging, and specific response. \
         Keep it concise (2-4 sentences) but informative.\n\
         If they ask about learning resources, suggest specific platforms or tools.\n\
         If they ask about career transitions, provide actionable advice.\n\
         Be supportive and motivational.\n",
    );

    prompt
}

/// Build the career-transition prompt.
pub fn build_transition_prompt(
    current_career: &str,
    new_interests: &str,
    current_skills: &str,
    profile: &UserProfile,
) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str(
        "You are an expert career transition counselor. \
         A user wants to transition their career path.\n\n",
    );

    prompt.push_str("Current Situation:\n");
    prompt.push_str(&format!("- Current Career Path: {current_career}\n"));
    prompt.push_str(&format!("- Current Skills: {current_skills}\n"));
    prompt.push_str(&format!("- New Interests: {new_interests}\n"));
    prompt.push_str(&format!("- Education: {}\n", profile.education));
    prompt.push_str(&format!("- Name: {}\n\n", profile.name));

    prompt.push_str(
        "Task: Create a TRANSITION roadmap that:\n\
         1. Identifies transferable skills from their current path\n\
         2. Builds on their existing knowledge\n\
         3. Provides a smooth transition to their new career interest\n\
         4. Highlights which skills they can reuse vs. need to learn\n\
         5. Makes the transition feel achievable and less overwhelming\n\n",
    );

    prompt.push_str(
        "Return your response ONLY as a valid JSON object in this exact format \
         (no markdown, no code blocks):\n",
    );
    prompt.push_str(TRANSITION_SCHEMA);
    prompt.push_str(
        "\n\nFocus on making the transition feel smooth and leveraging their existing expertise.\n",
    );

    prompt
}

fn or_not_specified(value: &str) -> &str {
    if value.is_empty() { "Not specified" } else { value }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Ana".to_string(),
            education: "BSc CS".to_string(),
            interests: "data".to_string(),
            skills: "Python".to_string(),
            goals: "become a data engineer".to_string(),
        }
    }

    // -- build_roadmap_prompt tests --

    #[test]
    fn roadmap_prompt_embeds_every_profile_field() {
        let prompt = build_roadmap_prompt(&sample_profile());
        assert!(prompt.contains("- Name: Ana"));
        assert!(prompt.contains("- Education: BSc CS"));
        assert!(prompt.contains("- Interests: data"));
        assert!(prompt.contains("- Current Skills: Python"));
        assert!(prompt.contains("- Career Goals: become a data engineer"));
    }

    #[test]
    fn roadmap_prompt_pins_output_contract() {
        let prompt = build_roadmap_prompt(&sample_profile());
        assert!(prompt.contains("ONLY as a valid JSON object"));
        assert!(prompt.contains("no markdown, no code blocks, just raw JSON"));
        assert!(prompt.contains("\"careerPath\""));
        assert!(prompt.contains("\"phases\""));
        assert!(prompt.contains("\"subtopics\""));
    }

    #[test]
    fn roadmap_prompt_is_deterministic() {
        let profile = sample_profile();
        assert_eq!(build_roadmap_prompt(&profile), build_roadmap_prompt(&profile));
    }

    #[test]
    fn roadmap_prompt_tolerates_empty_profile() {
        let prompt = build_roadmap_prompt(&UserProfile::default());
        assert!(prompt.contains("- Name: \n"));
        assert!(prompt.contains("- Career Goals: \n"));
    }

    // -- build_chat_prompt tests --

    #[test]
    fn chat_prompt_embeds_message_and_context() {
        let context = ChatContext {
            career_path: "Data Engineering".to_string(),
            current_phase: "Phase 2".to_string(),
        };
        let prompt = build_chat_prompt("What should I learn next?", &context);
        assert!(prompt.contains("- Career Path: Data Engineering"));
        assert!(prompt.contains("- Current Phase: Phase 2"));
        assert!(prompt.contains("User Message: What should I learn next?"));
    }

    #[test]
    fn chat_prompt_defaults_empty_context_fields() {
        let prompt = build_chat_prompt("hi", &ChatContext::default());
        assert!(prompt.contains("- Career Path: Not specified"));
        assert!(prompt.contains("- Current Phase: Not specified"));
    }

    #[test]
    fn chat_prompt_is_deterministic() {
        let context = ChatContext::default();
        assert_eq!(
            build_chat_prompt("same question", &context),
            build_chat_prompt("same question", &context)
        );
    }

    // -- build_transition_prompt tests --

    #[test]
    fn transition_prompt_embeds_situation() {
        let prompt = build_transition_prompt(
            "Web Development",
            "machine learning",
            "JavaScript, React",
            &sample_profile(),
        );
        assert!(prompt.contains("- Current Career Path: Web Development"));
        assert!(prompt.contains("- Current Skills: JavaScript, React"));
        assert!(prompt.contains("- New Interests: machine learning"));
        assert!(prompt.contains("- Education: BSc CS"));
        assert!(prompt.contains("- Name: Ana"));
    }

    #[test]
    fn transition_prompt_pins_transition_schema() {
        let prompt = build_transition_prompt("a", "b", "c", &UserProfile::default());
        assert!(prompt.contains("TRANSITION roadmap"));
        assert!(prompt.contains("\"transferableSkills\""));
        assert!(prompt.contains("no markdown, no code blocks"));
    }

    #[test]
    fn transition_prompt_is_deterministic() {
        let profile = sample_profile();
        assert_eq!(
            build_transition_prompt("x", "y", "z", &profile),
            build_transition_prompt("x", "y", "z", &profile)
        );
    }
}
