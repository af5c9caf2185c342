use crate::models::trip::TripRequest;

/// System message sent with every itinerary completion.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful travel assistant that creates well-structured itineraries.";

/// Build the itinerary prompt for a trip request.
///
/// The template spells out one block per day in the plain-text line convention
/// the formatter parses: `Day N – Title` headings, trailing-colon section
/// headings, `-` bullets, and one tip and one budget line per day.
pub fn build_trip_prompt(request: &TripRequest) -> String {
    let interests = if request.interests.is_empty() {
        "General sightseeing".to_string()
    } else {
        request.interests.join(", ")
    };

    let mut day_structure = String::new();
    for day_num in 1..=request.days {
        day_structure.push_str(&format!(
            "\
Day {day_num} – [Create an engaging title for this day]

Morning:
- [Morning activity 1]
- [Morning activity 2]

Afternoon:
- [Afternoon activity 1]
- [Afternoon activity 2]

Evening:
- [Evening activity 1]
- [Evening activity 2]

💡 Travel Tip: [helpful tip for day {day_num}]
Budget Estimate: $[amount for day {day_num}]

"
        ));
    }

    format!(
        "\
You are TripTactix, an AI-powered travel itinerary planner.

User Input:
- Destination: {destination}
- Dates: {from_date} to {to_date}
- Duration: {days} days (MUST generate exactly {days} days)
- Budget: ${budget} USD total
- Interests: {interests}

CRITICAL INSTRUCTION: You MUST create itinerary for exactly {days} days. Not more, not less.

Fill in this template for ALL {days} days:

{day_structure}
RULES:
1. Replace [Create an engaging title for this day] with actual titles like \"Arrival & City Exploration\", \"Cultural Heritage Tour\", etc.
2. Replace all [activity] placeholders with real, specific activities in {destination}
3. Replace [helpful tip] with practical travel advice
4. Replace [amount] with realistic daily budget (total should be around ${budget})
5. Make each day unique and interesting
6. Consider user interests: {interests}
7. Output ONLY plain text in the template's line format. No markdown bold, no HTML tags, no extra text before or after.
8. Generate ALL {days} days - this is mandatory.

Start generating now:
",
        destination = request.destination,
        from_date = request.from_date,
        to_date = request.to_date,
        days = request.days,
        budget = request.budget,
        interests = interests,
        day_structure = day_structure,
    )
}
