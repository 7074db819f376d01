use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Cada pregunta del quiz escribe en exactamente uno de estos campos.
/// El nombre serializado coincide con la clave del snapshot enviado.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    // Inspiración
    TiktokLinks,
    PinterestBoard,
    InstagramLinks,
    // Piel
    SkinTone,
    Undertone,
    SkinType,
    SkinConcerns,
    // Estética
    Coverage,
    Finish,
    DesiredLook,
    BlushShades,
    LipTones,
    ApplicationStyle,
    // Producto
    FoundationFormula,
    Longevity,
    ConcealerUse,
    BlushFormula,
    BrowStyle,
    // Estilo de vida
    Climate,
    Environment,
    TimeSpent,
    Occasions,
    TrendSensitivity,
    // Restricciones
    Budget,
    EthicalFilters,
    IngredientsToAvoid,
    BrandsToAvoid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    LinkList,
    Url,
    SingleChoice,
    MultiChoice,
    FreeText,
}

impl Field {
    pub const ALL: [Field; 27] = [
        Field::TiktokLinks,
        Field::PinterestBoard,
        Field::InstagramLinks,
        Field::SkinTone,
        Field::Undertone,
        Field::SkinType,
        Field::SkinConcerns,
        Field::Coverage,
        Field::Finish,
        Field::DesiredLook,
        Field::BlushShades,
        Field::LipTones,
        Field::ApplicationStyle,
        Field::FoundationFormula,
        Field::Longevity,
        Field::ConcealerUse,
        Field::BlushFormula,
        Field::BrowStyle,
        Field::Climate,
        Field::Environment,
        Field::TimeSpent,
        Field::Occasions,
        Field::TrendSensitivity,
        Field::Budget,
        Field::EthicalFilters,
        Field::IngredientsToAvoid,
        Field::BrandsToAvoid,
    ];

    pub fn kind(self) -> FieldKind {
        use Field::*;
        match self {
            TiktokLinks | InstagramLinks => FieldKind::LinkList,
            PinterestBoard => FieldKind::Url,
            BrandsToAvoid => FieldKind::FreeText,
            SkinTone | Undertone | Coverage | Finish | ApplicationStyle | Longevity | BrowStyle
            | Climate | Environment | TimeSpent | Budget => FieldKind::SingleChoice,
            SkinType | SkinConcerns | DesiredLook | BlushShades | LipTones | FoundationFormula
            | ConcealerUse | BlushFormula | Occasions | TrendSensitivity | EthicalFilters
            | IngredientsToAvoid => FieldKind::MultiChoice,
        }
    }

    /// Nombre tal y como aparece en el snapshot (camelCase).
    pub fn name(self) -> &'static str {
        use Field::*;
        match self {
            TiktokLinks => "tiktokLinks",
            PinterestBoard => "pinterestBoard",
            InstagramLinks => "instagramLinks",
            SkinTone => "skinTone",
            Undertone => "undertone",
            SkinType => "skinType",
            SkinConcerns => "skinConcerns",
            Coverage => "coverage",
            Finish => "finish",
            DesiredLook => "desiredLook",
            BlushShades => "blushShades",
            LipTones => "lipTones",
            ApplicationStyle => "applicationStyle",
            FoundationFormula => "foundationFormula",
            Longevity => "longevity",
            ConcealerUse => "concealerUse",
            BlushFormula => "blushFormula",
            BrowStyle => "browStyle",
            Climate => "climate",
            Environment => "environment",
            TimeSpent => "timeSpent",
            Occasions => "occasions",
            TrendSensitivity => "trendSensitivity",
            Budget => "budget",
            EthicalFilters => "ethicalFilters",
            IngredientsToAvoid => "ingredientsToAvoid",
            BrandsToAvoid => "brandsToAvoid",
        }
    }

    pub fn is_choice(self) -> bool {
        matches!(self.kind(), FieldKind::SingleChoice | FieldKind::MultiChoice)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Question {
    pub field: Field,
    pub label: String,
    #[serde(default)]
    pub hint: Option<String>,
    /// En listas de enlaces `{n}` se sustituye por el número de entrada (1-based).
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub add_label: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub option_hints: BTreeMap<String, String>,
}

impl Question {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Step {
    pub title: String,
    pub subtitle: String,
    pub questions: Vec<Question>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizDefinition {
    pub steps: Vec<Step>,
}

impl QuizDefinition {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn question(&self, field: Field) -> Option<&Question> {
        self.steps
            .iter()
            .flat_map(|s| &s.questions)
            .find(|q| q.field == field)
    }
}

// Contenido de la landing

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    HowItWorks,
    Features,
    About,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub anchor: Anchor,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Indicator {
    pub number: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Card {
    #[serde(default)]
    pub badge: Option<String>,
    pub title: String,
    pub body: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Section {
    #[serde(default)]
    pub anchor: Option<Anchor>,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Hero {
    pub title: String,
    pub highlight: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub indicators: Vec<Indicator>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Footer {
    pub tagline: String,
    pub columns: Vec<FooterColumn>,
    pub copyright: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LandingContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub sign_in: String,
    pub hero: Hero,
    pub sections: Vec<Section>,
    pub closing: Section,
    pub closing_cta: String,
    pub footer: Footer,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Landing,
    Quiz,
}
