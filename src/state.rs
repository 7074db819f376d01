use crate::model::Field;
use serde::{Deserialize, Serialize, Serializer};

/// Registro de respuestas de una sesión del quiz.
///
/// Se serializa con las mismas claves camelCase que el formulario; las
/// selecciones únicas sin responder salen como `""`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    // Inspiración
    pub tiktok_links: Vec<String>,
    pub pinterest_board: String,
    pub instagram_links: Vec<String>,

    // Piel
    #[serde(serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub skin_tone: Option<String>,
    #[serde(serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub undertone: Option<String>,
    pub skin_type: Vec<String>,
    pub skin_concerns: Vec<String>,

    // Estética
    #[serde(serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub coverage: Option<String>,
    #[serde(serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub finish: Option<String>,
    pub desired_look: Vec<String>,
    pub blush_shades: Vec<String>,
    pub lip_tones: Vec<String>,
    #[serde(serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub application_style: Option<String>,

    // Producto
    pub foundation_formula: Vec<String>,
    #[serde(serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub longevity: Option<String>,
    pub concealer_use: Vec<String>,
    pub blush_formula: Vec<String>,
    #[serde(serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub brow_style: Option<String>,

    // Estilo de vida
    #[serde(serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub climate: Option<String>,
    #[serde(serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub environment: Option<String>,
    #[serde(serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub time_spent: Option<String>,
    pub occasions: Vec<String>,
    pub trend_sensitivity: Vec<String>,

    // Restricciones
    #[serde(serialize_with = "blank_if_none", deserialize_with = "none_if_blank")]
    pub budget: Option<String>,
    pub ethical_filters: Vec<String>,
    pub ingredients_to_avoid: Vec<String>,
    pub brands_to_avoid: String,
}

pub const INITIAL_TIKTOK_LINKS: usize = 3;
pub const INITIAL_INSTAGRAM_LINKS: usize = 2;

impl Default for QuizState {
    fn default() -> Self {
        Self {
            tiktok_links: vec![String::new(); INITIAL_TIKTOK_LINKS],
            pinterest_board: String::new(),
            instagram_links: vec![String::new(); INITIAL_INSTAGRAM_LINKS],
            skin_tone: None,
            undertone: None,
            skin_type: Vec::new(),
            skin_concerns: Vec::new(),
            coverage: None,
            finish: None,
            desired_look: Vec::new(),
            blush_shades: Vec::new(),
            lip_tones: Vec::new(),
            application_style: None,
            foundation_formula: Vec::new(),
            longevity: None,
            concealer_use: Vec::new(),
            blush_formula: Vec::new(),
            brow_style: None,
            climate: None,
            environment: None,
            time_spent: None,
            occasions: Vec::new(),
            trend_sensitivity: Vec::new(),
            budget: None,
            ethical_filters: Vec::new(),
            ingredients_to_avoid: Vec::new(),
            brands_to_avoid: String::new(),
        }
    }
}

fn blank_if_none<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(value.as_deref().unwrap_or(""))
}

fn none_if_blank<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(if raw.is_empty() { None } else { Some(raw) })
}

// Accesores por campo. Devuelven `None` si el campo es de otro tipo.
impl QuizState {
    pub fn links(&self, field: Field) -> Option<&Vec<String>> {
        match field {
            Field::TiktokLinks => Some(&self.tiktok_links),
            Field::InstagramLinks => Some(&self.instagram_links),
            _ => None,
        }
    }

    pub fn links_mut(&mut self, field: Field) -> Option<&mut Vec<String>> {
        match field {
            Field::TiktokLinks => Some(&mut self.tiktok_links),
            Field::InstagramLinks => Some(&mut self.instagram_links),
            _ => None,
        }
    }

    /// URL y texto libre
    pub fn text(&self, field: Field) -> Option<&String> {
        match field {
            Field::PinterestBoard => Some(&self.pinterest_board),
            Field::BrandsToAvoid => Some(&self.brands_to_avoid),
            _ => None,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::PinterestBoard => Some(&mut self.pinterest_board),
            Field::BrandsToAvoid => Some(&mut self.brands_to_avoid),
            _ => None,
        }
    }

    pub fn choice(&self, field: Field) -> Option<&Option<String>> {
        use Field::*;
        match field {
            SkinTone => Some(&self.skin_tone),
            Undertone => Some(&self.undertone),
            Coverage => Some(&self.coverage),
            Finish => Some(&self.finish),
            ApplicationStyle => Some(&self.application_style),
            Longevity => Some(&self.longevity),
            BrowStyle => Some(&self.brow_style),
            Climate => Some(&self.climate),
            Environment => Some(&self.environment),
            TimeSpent => Some(&self.time_spent),
            Budget => Some(&self.budget),
            _ => None,
        }
    }

    pub fn choice_mut(&mut self, field: Field) -> Option<&mut Option<String>> {
        use Field::*;
        match field {
            SkinTone => Some(&mut self.skin_tone),
            Undertone => Some(&mut self.undertone),
            Coverage => Some(&mut self.coverage),
            Finish => Some(&mut self.finish),
            ApplicationStyle => Some(&mut self.application_style),
            Longevity => Some(&mut self.longevity),
            BrowStyle => Some(&mut self.brow_style),
            Climate => Some(&mut self.climate),
            Environment => Some(&mut self.environment),
            TimeSpent => Some(&mut self.time_spent),
            Budget => Some(&mut self.budget),
            _ => None,
        }
    }

    pub fn selections(&self, field: Field) -> Option<&Vec<String>> {
        use Field::*;
        match field {
            SkinType => Some(&self.skin_type),
            SkinConcerns => Some(&self.skin_concerns),
            DesiredLook => Some(&self.desired_look),
            BlushShades => Some(&self.blush_shades),
            LipTones => Some(&self.lip_tones),
            FoundationFormula => Some(&self.foundation_formula),
            ConcealerUse => Some(&self.concealer_use),
            BlushFormula => Some(&self.blush_formula),
            Occasions => Some(&self.occasions),
            TrendSensitivity => Some(&self.trend_sensitivity),
            EthicalFilters => Some(&self.ethical_filters),
            IngredientsToAvoid => Some(&self.ingredients_to_avoid),
            _ => None,
        }
    }

    pub fn selections_mut(&mut self, field: Field) -> Option<&mut Vec<String>> {
        use Field::*;
        match field {
            SkinType => Some(&mut self.skin_type),
            SkinConcerns => Some(&mut self.skin_concerns),
            DesiredLook => Some(&mut self.desired_look),
            BlushShades => Some(&mut self.blush_shades),
            LipTones => Some(&mut self.lip_tones),
            FoundationFormula => Some(&mut self.foundation_formula),
            ConcealerUse => Some(&mut self.concealer_use),
            BlushFormula => Some(&mut self.blush_formula),
            Occasions => Some(&mut self.occasions),
            TrendSensitivity => Some(&mut self.trend_sensitivity),
            EthicalFilters => Some(&mut self.ethical_filters),
            IngredientsToAvoid => Some(&mut self.ingredients_to_avoid),
            _ => None,
        }
    }

    pub fn is_selected(&self, field: Field, value: &str) -> bool {
        if let Some(set) = self.selections(field) {
            return set.iter().any(|v| v == value);
        }
        self.choice(field)
            .and_then(|c| c.as_deref())
            .is_some_and(|c| c == value)
    }

    /// Una respuesta "cuenta" si no está vacía; los enlaces en blanco no cuentan.
    pub fn is_answered(&self, field: Field) -> bool {
        if let Some(links) = self.links(field) {
            links.iter().any(|l| !l.trim().is_empty())
        } else if let Some(text) = self.text(field) {
            !text.trim().is_empty()
        } else if let Some(choice) = self.choice(field) {
            choice.is_some()
        } else {
            self.selections(field).is_some_and(|s| !s.is_empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldKind;

    #[test]
    fn every_field_has_exactly_one_accessor_matching_its_kind() {
        let s = QuizState::default();
        for field in Field::ALL {
            let hits = [
                s.links(field).is_some(),
                s.text(field).is_some(),
                s.choice(field).is_some(),
                s.selections(field).is_some(),
            ];
            assert_eq!(hits.iter().filter(|h| **h).count(), 1, "{field}");
            let expected = match field.kind() {
                FieldKind::LinkList => 0,
                FieldKind::Url | FieldKind::FreeText => 1,
                FieldKind::SingleChoice => 2,
                FieldKind::MultiChoice => 3,
            };
            assert!(hits[expected], "{field}");
        }
    }

    #[test]
    fn default_has_blank_link_slots() {
        let s = QuizState::default();
        assert_eq!(s.tiktok_links, vec!["", "", ""]);
        assert_eq!(s.instagram_links, vec!["", ""]);
        assert!(Field::ALL.iter().all(|f| !s.is_answered(*f)));
    }

    #[test]
    fn snapshot_json_uses_form_keys_and_blank_single_choices() {
        let mut s = QuizState::default();
        s.skin_tone = Some("Medium".into());
        s.skin_type.push("Dry".into());
        let json = serde_json::to_value(&s).expect("serializable");
        assert_eq!(json["skinTone"], "Medium");
        assert_eq!(json["undertone"], "");
        assert_eq!(json["skinType"], serde_json::json!(["Dry"]));
        assert_eq!(json["tiktokLinks"], serde_json::json!(["", "", ""]));
        assert_eq!(json["brandsToAvoid"], "");
        assert_eq!(json.as_object().map(|o| o.len()), Some(Field::ALL.len()));

        let back: QuizState = serde_json::from_value(json).expect("deserializable");
        assert_eq!(back, s);
    }

    #[test]
    fn whitespace_does_not_count_as_answer() {
        let mut s = QuizState::default();
        s.tiktok_links[1] = "   ".into();
        s.brands_to_avoid = "\n".into();
        assert!(!s.is_answered(Field::TiktokLinks));
        assert!(!s.is_answered(Field::BrandsToAvoid));
        s.tiktok_links[2] = "https://www.tiktok.com/@x/video/1".into();
        assert!(s.is_answered(Field::TiktokLinks));
    }
}
