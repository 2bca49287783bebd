//! Keyword-based intent routing.
//!
//! Classifies a chat message into one of a small fixed set of coaching
//! categories and maps each category to the persona the coach adopts for the
//! reply. Plain keyword counting; no model call.

use fitcoach_types::chat::CoachIntent;

const WORKOUT_KEYWORDS: &[&str] = &[
    "workout", "exercise", "training", "train", "gym", "lift", "lifting", "squat", "deadlift",
    "bench", "cardio", "run", "running", "routine", "reps", "sets", "muscle", "strength",
    "stretch", "hiit", "yoga",
];

const NUTRITION_KEYWORDS: &[&str] = &[
    "eat", "eating", "food", "meal", "diet", "nutrition", "calorie", "calories", "protein",
    "carb", "carbs", "fat", "snack", "breakfast", "lunch", "dinner", "hydration", "water",
    "supplement",
];

const PROGRESS_KEYWORDS: &[&str] = &[
    "progress", "track", "tracking", "goal", "goals", "improve", "improving", "result",
    "results", "trend", "plateau", "history", "stats", "consistent", "streak",
];

const GENERAL_PERSONA: &str = "You are a friendly, knowledgeable AI fitness coach. \
    You help users with workouts, nutrition and motivation, and you keep advice \
    safe and practical.";

const WORKOUT_PERSONA: &str = "You are an expert strength and conditioning coach. \
    You design effective, safe workouts, explain proper form, and adapt training \
    volume and intensity to the user's recent activity.";

const NUTRITION_PERSONA: &str = "You are a registered sports nutritionist. \
    You give practical meal and macro guidance that supports the user's training \
    and goals, referencing what they have recently eaten.";

const PROGRESS_PERSONA: &str = "You are a supportive progress coach. \
    You analyse the user's logged workouts and meals, point out trends and \
    consistency, and suggest the next realistic milestone.";

/// Routes chat messages to a coaching persona.
pub struct IntentRouter;

impl IntentRouter {
    /// Classify a message by keyword hits.
    ///
    /// The category with the most hits wins; ties go to workout, then
    /// nutrition, then progress. No hits at all means `General`.
    pub fn classify(message: &str) -> CoachIntent {
        let lowered = message.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        let hits = |keywords: &[&str]| words.iter().filter(|w| keywords.contains(w)).count();

        let scored = [
            (CoachIntent::Workout, hits(WORKOUT_KEYWORDS)),
            (CoachIntent::Nutrition, hits(NUTRITION_KEYWORDS)),
            (CoachIntent::Progress, hits(PROGRESS_KEYWORDS)),
        ];

        let mut best = (CoachIntent::General, 0);
        for (intent, count) in scored {
            if count > best.1 {
                best = (intent, count);
            }
        }
        best.0
    }

    /// The base persona for an intent.
    pub fn persona(intent: CoachIntent) -> &'static str {
        match intent {
            CoachIntent::Workout => WORKOUT_PERSONA,
            CoachIntent::Nutrition => NUTRITION_PERSONA,
            CoachIntent::Progress => PROGRESS_PERSONA,
            CoachIntent::General => GENERAL_PERSONA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_workout() {
        assert_eq!(
            IntentRouter::classify("Can you build me a leg workout with squats?"),
            CoachIntent::Workout
        );
    }

    #[test]
    fn test_classify_nutrition() {
        assert_eq!(
            IntentRouter::classify("How much protein should I eat at breakfast?"),
            CoachIntent::Nutrition
        );
    }

    #[test]
    fn test_classify_progress() {
        assert_eq!(
            IntentRouter::classify("Am I making progress toward my goals?"),
            CoachIntent::Progress
        );
    }

    #[test]
    fn test_classify_general_without_keywords() {
        assert_eq!(IntentRouter::classify("Hello there!"), CoachIntent::General);
        assert_eq!(IntentRouter::classify(""), CoachIntent::General);
    }

    #[test]
    fn test_tie_prefers_workout() {
        // one workout hit ("workout"), one nutrition hit ("eat")
        assert_eq!(
            IntentRouter::classify("What should I eat after my workout?"),
            CoachIntent::Workout
        );
    }

    #[test]
    fn test_more_hits_beat_priority() {
        assert_eq!(
            IntentRouter::classify("After my workout, which meal has more protein and carbs?"),
            CoachIntent::Nutrition
        );
    }

    #[test]
    fn test_matches_whole_words_only() {
        assert_eq!(IntentRouter::classify("setsquare"), CoachIntent::General);
        assert_eq!(IntentRouter::classify("running-shoes"), CoachIntent::Workout);
    }

    #[test]
    fn test_every_intent_has_a_persona() {
        for intent in [
            CoachIntent::Workout,
            CoachIntent::Nutrition,
            CoachIntent::Progress,
            CoachIntent::General,
        ] {
            assert!(!IntentRouter::persona(intent).is_empty());
        }
    }
}
