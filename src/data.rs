// src/data.rs

use crate::error::QuizError;
use crate::model::{Field, LandingContent, QuizDefinition};
use std::collections::HashSet;

/// Carga los pasos del quiz desde el YAML embebido y los valida
pub fn read_steps_embedded() -> Result<QuizDefinition, QuizError> {
    parse_steps(include_str!("data/quiz_steps.yaml"))
}

pub fn parse_steps(source: &str) -> Result<QuizDefinition, QuizError> {
    let definition: QuizDefinition = serde_yaml::from_str(source)?;
    validate_definition(&definition)?;
    log::debug!(
        "Quiz definition loaded: {} steps, {} questions",
        definition.step_count(),
        definition.steps.iter().map(|s| s.questions.len()).sum::<usize>()
    );
    Ok(definition)
}

/// Contenido estático de la landing
pub fn read_landing_embedded() -> Result<LandingContent, QuizError> {
    Ok(serde_yaml::from_str(include_str!("data/landing.yaml"))?)
}

/// Cada campo aparece exactamente una vez; sólo los campos de selección llevan opciones.
pub fn validate_definition(definition: &QuizDefinition) -> Result<(), QuizError> {
    if definition.steps.is_empty() {
        return Err(QuizError::InvalidDefinition("no steps".into()));
    }

    let mut seen = HashSet::new();
    for (si, step) in definition.steps.iter().enumerate() {
        for q in &step.questions {
            if !seen.insert(q.field) {
                return Err(QuizError::InvalidDefinition(format!(
                    "{} appears more than once (again in step {si})",
                    q.field
                )));
            }

            if q.field.is_choice() {
                if q.options.is_empty() {
                    return Err(QuizError::InvalidDefinition(format!(
                        "{} has no options",
                        q.field
                    )));
                }
                let mut unique = HashSet::new();
                if let Some(dup) = q.options.iter().find(|o| !unique.insert(o.as_str())) {
                    return Err(QuizError::InvalidDefinition(format!(
                        "{}: duplicate option \"{dup}\"",
                        q.field
                    )));
                }
            } else if !q.options.is_empty() {
                return Err(QuizError::InvalidDefinition(format!(
                    "{} does not take options",
                    q.field
                )));
            }

            if let Some(orphan) = q.option_hints.keys().find(|k| !q.has_option(k)) {
                return Err(QuizError::InvalidDefinition(format!(
                    "{}: hint for unknown option \"{orphan}\"",
                    q.field
                )));
            }
        }
    }

    if let Some(missing) = Field::ALL.iter().find(|f| !seen.contains(*f)) {
        return Err(QuizError::InvalidDefinition(format!(
            "{missing} is not asked in any step"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field::*;

    #[test]
    fn embedded_steps_follow_the_fixed_partition() {
        let def = read_steps_embedded().expect("embedded steps ok");
        let fields: Vec<Vec<Field>> = def
            .steps
            .iter()
            .map(|s| s.questions.iter().map(|q| q.field).collect())
            .collect();
        assert_eq!(
            fields,
            vec![
                vec![TiktokLinks, PinterestBoard, InstagramLinks],
                vec![SkinTone, Undertone, SkinType, SkinConcerns],
                vec![Coverage, Finish, DesiredLook, BlushShades, LipTones, ApplicationStyle],
                vec![FoundationFormula, Longevity, ConcealerUse, BlushFormula, BrowStyle],
                vec![Climate, Environment, TimeSpent, Occasions, TrendSensitivity],
                vec![Budget, EthicalFilters, IngredientsToAvoid, BrandsToAvoid],
            ]
        );
    }

    #[test]
    fn embedded_steps_keep_titles_and_subtitles() {
        let def = read_steps_embedded().expect("embedded steps ok");
        let titles: Vec<(&str, &str)> = def
            .steps
            .iter()
            .map(|s| (s.title.as_str(), s.subtitle.as_str()))
            .collect();
        assert_eq!(
            titles,
            vec![
                ("Share Your Inspiration", "Show us the looks you love"),
                ("Skin Attributes", "Help us match your perfect shades"),
                ("Your Aesthetic", "The look you want to achieve"),
                ("Product Preferences", "Your formula favorites"),
                ("Lifestyle & Context", "How you wear your makeup"),
                ("Preferences & Constraints", "Your non-negotiables"),
            ]
        );
    }

    #[test]
    fn option_list_sizes_match_the_field_table() {
        let def = read_steps_embedded().expect("embedded steps ok");
        let expected = [
            (SkinTone, 7),
            (Undertone, 5),
            (SkinType, 7),
            (SkinConcerns, 7),
            (Coverage, 4),
            (Finish, 4),
            (DesiredLook, 5),
            (BlushShades, 5),
            (LipTones, 5),
            (ApplicationStyle, 5),
            (FoundationFormula, 5),
            (Longevity, 4),
            (ConcealerUse, 4),
            (BlushFormula, 3),
            (BrowStyle, 4),
            (Climate, 4),
            (Environment, 3),
            (TimeSpent, 4),
            (Occasions, 4),
            (TrendSensitivity, 5),
            (Budget, 5),
            (EthicalFilters, 5),
            (IngredientsToAvoid, 6),
        ];
        for (field, n) in expected {
            let q = def.question(field).expect("field present");
            assert_eq!(q.options.len(), n, "{field}");
        }
        let q = def.question(Longevity).unwrap();
        assert_eq!(q.options[0], "4–6 hours");
        let q = def.question(Budget).unwrap();
        assert_eq!(q.options[4], "No preference");
        let q = def.question(Undertone).unwrap();
        assert_eq!(
            q.option_hints.get("Unsure").map(String::as_str),
            Some("We'll guide you")
        );
    }

    #[test]
    fn rejects_duplicated_field() {
        let yaml = r#"
steps:
  - title: A
    subtitle: a
    questions:
      - field: brandsToAvoid
        label: x
      - field: brandsToAvoid
        label: y
"#;
        let err = parse_steps(yaml).unwrap_err();
        assert!(matches!(err, QuizError::InvalidDefinition(_)));
        assert!(err.to_string().contains("brandsToAvoid"));
    }

    #[test]
    fn rejects_missing_fields_and_choice_without_options() {
        let missing = r#"
steps:
  - title: A
    subtitle: a
    questions:
      - field: brandsToAvoid
        label: x
"#;
        assert!(matches!(
            parse_steps(missing),
            Err(QuizError::InvalidDefinition(_))
        ));

        let no_options = r#"
steps:
  - title: A
    subtitle: a
    questions:
      - field: skinTone
        label: x
"#;
        let err = parse_steps(no_options).unwrap_err();
        assert!(err.to_string().contains("has no options"));
    }

    #[test]
    fn rejects_unknown_field_names() {
        let yaml = r#"
steps:
  - title: A
    subtitle: a
    questions:
      - field: favouriteColour
        label: x
"#;
        assert!(matches!(parse_steps(yaml), Err(QuizError::Yaml(_))));
    }

    /// YAML embebido con un único fragmento sustituido
    fn embedded_with(from: &str, to: &str) -> String {
        let yaml = include_str!("data/quiz_steps.yaml");
        assert!(yaml.contains(from), "fragment not found: {from}");
        yaml.replacen(from, to, 1)
    }

    fn definition_error(yaml: &str) -> String {
        match parse_steps(yaml) {
            Err(err @ QuizError::InvalidDefinition(_)) => err.to_string(),
            other => panic!("expected InvalidDefinition, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_step_list() {
        assert!(definition_error("steps: []").contains("no steps"));
    }

    #[test]
    fn rejects_duplicated_option() {
        let yaml = embedded_with("[Cream, Liquid, Powder]", "[Cream, Cream, Powder]");
        assert!(definition_error(&yaml).contains("blushFormula: duplicate option \"Cream\""));
    }

    #[test]
    fn rejects_options_on_a_non_choice_field() {
        let yaml = embedded_with(
            "placeholder: \"https://pinterest.com/yourboard\"",
            "placeholder: \"https://pinterest.com/yourboard\"\n        options: [A]",
        );
        assert!(definition_error(&yaml).contains("pinterestBoard does not take options"));
    }

    #[test]
    fn rejects_hint_for_an_option_that_does_not_exist() {
        let yaml = embedded_with(
            "options: [Cream, Liquid, Powder]",
            "options: [Cream, Liquid, Powder]\n        option_hints: {Gel: x}",
        );
        assert!(definition_error(&yaml).contains("blushFormula: hint for unknown option \"Gel\""));
    }

    #[test]
    fn landing_content_loads() {
        let landing = read_landing_embedded().expect("landing ok");
        assert_eq!(landing.brand, "Beauty Outsiders");
        assert_eq!(landing.hero.indicators.len(), 3);
        assert_eq!(landing.nav.len(), 3);
        assert!(landing.sections.iter().any(|s| s.anchor.is_some()));
    }
}
