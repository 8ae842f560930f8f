use credcheck_common::TopicLabel;

/// Ordered (keywords, label) rules, evaluated top to bottom — first match
/// wins. A post mentioning both vaccines and microchips is Health
/// Misinformation, not Vaccine Conspiracy, because rule order is a priority.
const TOPIC_RULES: &[(&[&str], TopicLabel)] = &[
    (&["covid", "vaccine", "bleach"], TopicLabel::HealthMisinformation),
    (&["election", "vote", "rigged"], TopicLabel::ElectionMisinformation),
    (&["5g", "tower", "radiation"], TopicLabel::FiveGConspiracy),
    (&["climate", "global warming", "hoax"], TopicLabel::ClimateDenial),
    (&["moon", "nasa", "landing"], TopicLabel::SpaceConspiracy),
    (&["microchip", "track", "gates"], TopicLabel::VaccineConspiracy),
];

/// Map free text to one of the seven fixed topic labels. Total: every input
/// maps to exactly one label, defaulting to General Misinformation.
pub fn extract_topic(text: &str) -> TopicLabel {
    let lower = text.to_lowercase();
    for (keywords, label) in TOPIC_RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *label;
        }
    }
    TopicLabel::GeneralMisinformation
}
