//! Feedback rendering: hint lines, randomized selection, and the fixed
//! boundary messages surfaced to students.
//!
//! The check itself is deterministic; all randomness is confined to
//! [select_hints], which shuffles the rendered hint lines and keeps at most
//! [MAX_RENDERED_HINTS] of them. Capping the hints keeps feedback digestible
//! and avoids handing out the full answer on one failed attempt. The
//! generator is a parameter so tests can seed it; production callers pass
//! `rand::thread_rng()`.

use rand::seq::SliceRandom;
use rand::Rng;

use super::checker::Discordance;
use super::key::AnswerKey;

/// Upper bound on hints surfaced per failed check
pub const MAX_RENDERED_HINTS: usize = 3;

/// Fixed message shown when the format check rejects a submission
pub const FORMAT_REJECTED_MESSAGE: &str = "Het formaat voor meerkeuzevragen is als volgt:";

/// Fixed preamble above the hint list of a failed answer check
pub const ANSWER_REJECTED_PREAMBLE: &str = "Je mist correcte antwoorden of je hebt verkeerde antwoorden. \
     Gebruik onderstaande hints om je inzending te corrigeren. Je krijgt een paar hints per inzending. \
     Gebruik deze om de stof beter te begrijpen en pas dan je antwoord aan. Het heeft geen zin alle \
     combinaties te proberen, want dan saboteer je je eigen begrip van de leerstof.";

/// Instruction line describing a passing format check
pub const FORMAT_INSTRUCTION: &str = "Je inzending volgt het vaste formaat voor meerkeuzevragen.";

/// Instruction line describing a failing format check
pub const FORMAT_NEGATIVE_INSTRUCTION: &str =
    "Je inzending volgt niet het vaste formaat voor meerkeuzevragen.";

/// Instruction line describing a passing answer check
pub const ANSWER_INSTRUCTION: &str = "Je hebt alle correcte antwoorden per vraag aangeduid.";

/// Instruction line describing a failing answer check
pub const ANSWER_NEGATIVE_INSTRUCTION: &str =
    "Je hebt niet alle correcte antwoorden per vraag aangeduid.";

/// Render one line per discordance that carries a hint, in key order.
///
/// The question number in the line is 1-based regardless of the grammar's
/// numbering baseline. Hintless discordances produce no line; they still
/// fail the check.
pub fn hint_lines(discordances: &[Discordance], key: &AnswerKey) -> Vec<String> {
    discordances
        .iter()
        .filter_map(|discordance| {
            let question = key.questions.get(discordance.question)?;
            let answer = question.answers.get(discordance.option)?;
            let hint = answer.hint.as_deref()?;
            if hint.is_empty() {
                return None;
            }
            Some(format!("Vraag {}: {}", discordance.question + 1, hint))
        })
        .collect()
}

/// Shuffle the hint lines uniformly and keep at most [MAX_RENDERED_HINTS]
pub fn select_hints<R: Rng>(mut lines: Vec<String>, rng: &mut R) -> Vec<String> {
    lines.shuffle(rng);
    lines.truncate(MAX_RENDERED_HINTS);
    lines
}

/// Embed the selected hints in a simple list-style text fragment
pub fn render_feedback(selected: &[String]) -> String {
    let mut fragment = String::from(ANSWER_REJECTED_PREAMBLE);
    fragment.push('\n');
    for line in selected {
        fragment.push_str("- ");
        fragment.push_str(line);
        fragment.push('\n');
    }
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mchoice::key::{Answer, Question};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rozen_key() -> AnswerKey {
        AnswerKey::new(vec![Question::new(
            "Rozen zijn (meestal)",
            vec![
                Answer::new("Rood", true, Some("Mis je geen kleur die op de naam van de bloem lijkt?")),
                Answer::new("Bloemen", true, Some("Je weet toch wat rozen zijn?")),
                Answer::new("Groen", false, Some("Komaan, je weet dat het over de blaadjes gaat.")),
            ],
        )])
    }

    fn all_discordant() -> Vec<Discordance> {
        vec![
            Discordance { question: 0, option: 0 },
            Discordance { question: 0, option: 1 },
            Discordance { question: 0, option: 2 },
        ]
    }

    #[test]
    fn test_hint_lines_are_prefixed_with_question_number() {
        let lines = hint_lines(&all_discordant(), &rozen_key());
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert!(line.starts_with("Vraag 1: "), "bad prefix in {line:?}");
        }
        assert_eq!(
            lines[0],
            "Vraag 1: Mis je geen kleur die op de naam van de bloem lijkt?"
        );
    }

    #[test]
    fn test_hintless_discordances_render_nothing() {
        let key = AnswerKey::new(vec![Question::new(
            "A?",
            vec![Answer::new("B", true, None), Answer::new("C", false, Some("hint"))],
        )]);
        let discordances = vec![
            Discordance { question: 0, option: 0 },
            Discordance { question: 0, option: 1 },
        ];
        assert_eq!(hint_lines(&discordances, &key), vec!["Vraag 1: hint".to_string()]);
    }

    #[test]
    fn test_out_of_range_discordance_renders_nothing() {
        let lines = hint_lines(&[Discordance { question: 7, option: 0 }], &rozen_key());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_select_hints_keeps_at_most_three() {
        let lines: Vec<String> = (0..10).map(|i| format!("Vraag 1: hint {i}")).collect();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_hints(lines, &mut rng).len(), MAX_RENDERED_HINTS);
    }

    #[test]
    fn test_select_hints_is_a_permutation_selection() {
        let lines = hint_lines(&all_discordant(), &rozen_key());
        let mut rng = StdRng::seed_from_u64(42);
        let mut selected = select_hints(lines.clone(), &mut rng);

        // three hints in, three out: same set, possibly different order
        assert_eq!(selected.len(), 3);
        selected.sort();
        let mut expected = lines;
        expected.sort();
        assert_eq!(selected, expected);
    }

    #[test]
    fn test_select_hints_is_deterministic_under_a_seed() {
        let lines: Vec<String> = (0..6).map(|i| format!("Vraag {}: hint", i + 1)).collect();
        let first = select_hints(lines.clone(), &mut StdRng::seed_from_u64(9));
        let second = select_hints(lines, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_feedback_is_a_list_fragment() {
        let fragment = render_feedback(&["Vraag 1: hint".to_string()]);
        assert!(fragment.starts_with(ANSWER_REJECTED_PREAMBLE));
        assert!(fragment.ends_with("- Vraag 1: hint\n"));
    }
}
