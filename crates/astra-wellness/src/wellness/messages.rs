//! Text lookup for everything the scorer and selector show to a crew member.
//!
//! Templates are addressed by key and may contain `{name}` placeholders. The
//! English catalog is the default; other catalogs plug in through
//! [`MessageCatalog`] without touching the scoring rules.

/// Formatting capability injected into the scorer and the recommendation selector.
pub trait MessageCatalog: Send + Sync {
    fn format(&self, key: &str, params: &[(&str, String)]) -> String;
}

/// Built-in English templates. Unknown keys render as the key itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl EnglishCatalog {
    pub fn template(key: &str) -> Option<&'static str> {
        let text = match key {
            "factor_sleep_severe" => "severely inadequate sleep",
            "factor_sleep_low" => "insufficient sleep",
            "factor_sleep_mild" => "slightly low sleep",
            "factor_sleep_excess" => "excessive sleep",
            "factor_mood_very_low" => "very low mood",
            "factor_mood_low" => "low mood",
            "factor_mood_neutral" => "neutral mood",
            "factor_hr_low" => "unusually low heart rate",
            "factor_hr_high" => "elevated heart rate",
            "factor_hr_mild" => "slightly elevated heart rate",
            "factor_activity_none" => "no physical activity",

            "expl_low" => "Your vitals and well-being indicators are within optimal range. Keep maintaining your healthy routines!",
            "expl_med_factors" => "Moderate stress detected. Contributing factors: {factors}. Consider taking short breaks.",
            "expl_med" => "Moderate stress levels detected. Consider incorporating relaxation activities.",
            "expl_high_factors" => "High stress detected! Key concerns: {factors}. Immediate attention recommended.",
            "expl_high" => "High stress levels detected. Please take immediate steps to relax and consider reaching out for support.",

            "rec_breath_title" => "Breathing Exercise",
            "rec_breath_desc" => "Take 5 minutes for deep breathing. Inhale for 4 seconds, hold for 4, exhale for 6.",
            "btn_start_now" => "Start Now",
            "rec_chat_title" => "Talk to ASTRA",
            "rec_chat_desc" => "Share what's on your mind. I'm here to listen and provide support.",
            "btn_open_chat" => "Open Chat",
            "rec_rest_title" => "Rest Reminder",
            "rec_rest_desc" => "You've had only {hours} hours of sleep. Consider scheduling a 20-minute power nap.",
            "btn_set_reminder" => "Set Reminder",
            "rec_game_title" => "Stress-Relief Game",
            "rec_game_desc" => "Play a calming space game to shift your focus and improve your mood.",
            "btn_play_now" => "Play Now",
            "rec_relax_title" => "Relaxation Exercise",
            "rec_relax_desc" => "Your heart rate is elevated. Try progressive muscle relaxation to calm down.",
            "btn_learn_more" => "Learn More",
            "rec_activity_title" => "Physical Activity",
            "rec_activity_desc" => "Light exercise can significantly reduce stress. Try 15 minutes of stretching.",
            "btn_view_exercises" => "View Exercises",
            "rec_great_title" => "Great Work!",
            "rec_great_desc" => "Your stress levels are optimal. Keep up your healthy habits!",
            "rec_crew_title" => "Connect with Crew",
            "rec_crew_desc" => "Social connection can help reduce stress. Check in with your crewmates.",
            "btn_view_crew" => "View Crew",

            "crew_member" => "A crew member",
            "alert_msg_generated" => "{name} is experiencing high stress and may need support.",
            _ => return None,
        };
        Some(text)
    }
}

impl MessageCatalog for EnglishCatalog {
    fn format(&self, key: &str, params: &[(&str, String)]) -> String {
        interpolate(Self::template(key).unwrap_or(key), params)
    }
}

/// Replace every `{name}` token with its value. Tokens without a value are left as-is.
pub fn interpolate(template: &str, params: &[(&str, String)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}
