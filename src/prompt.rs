use crate::models::{Mood, UserInputData};

/// Indian platforms the model may source recommendations from.
pub const INDIAN_PLATFORMS: [&str; 10] = [
    "Amazon.in",
    "Myntra",
    "Nykaa",
    "Flipkart",
    "Swiggy",
    "Zomato",
    "Blinkit",
    "Zepto",
    "Spotify",
    "YouTube",
];

/// Render the analysis prompt for one questionnaire submission. All seven
/// input fields are embedded verbatim; the free-text fields keep their
/// surrounding quotes so the model sees where user text starts and ends.
pub fn build_analysis_prompt(input: &UserInputData) -> String {
    let moods = Mood::ALL.map(|m| m.as_str()).join(", ");
    let platforms = INDIAN_PLATFORMS.join(", ");

    format!(
        r#"You are an expert AI psychologist and Indian lifestyle concierge.
Analyze the following detailed user profile to determine their precise mood and provide hyper-personalized recommendations.

User Context:
- Primary Thoughts: "{text}"
- Gender Identity: {gender}
- Energy Level (1-5): {energy_level}
- Social Context: {social_context}
- Current Activity: {activity_context}
- Primary Goal: {primary_goal}
- User Location: "{location}"

Instructions:
- Perform deep NLP-based sentiment analysis on the text combined with the provided context.
- Classify mood into exactly one: {moods}.
- Provide recommendations specific to INDIA.
- IMPORTANT: Use Gender Identity to tailor Shopping (Clothes/Makeup) and Lifestyle picks.
- Use Indian platforms: {platforms}.
- DO NOT provide any URLs or direct links. Just provide the name of the service/product and the platform where it can be found.
- Tailor food suggestions based on activity and energy level.
- Ensure all suggestions are relevant for the location: "{location}".
- Output MUST be valid JSON matching the specified schema."#,
        text = input.text,
        gender = input.gender,
        energy_level = input.energy_level,
        social_context = input.social_context,
        activity_context = input.activity_context,
        primary_goal = input.primary_goal,
        location = input.location,
    )
}
