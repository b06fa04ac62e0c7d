//! German/English UI strings. Presentation only; nothing here touches the
//! simulation.

use serde::{Deserialize, Serialize};
use crate::domain::Category;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    #[default]
    En,
}

impl Language {
    /// Two-letter code used for persistence
    pub const fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "de" => Some(Language::De),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub const fn toggle(self) -> Self {
        match self {
            Language::De => Language::En,
            Language::En => Language::De,
        }
    }

    /// German when the locale starts with "de", English otherwise
    pub fn from_locale(locale: &str) -> Self {
        if locale.to_ascii_lowercase().starts_with("de") {
            Language::De
        } else {
            Language::En
        }
    }

    /// Inspect LC_ALL, LANG and LC_MESSAGES in that order
    pub fn detect_from_env() -> Self {
        ["LC_ALL", "LANG", "LC_MESSAGES"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.is_empty())
            .map_or(Language::En, |locale| Self::from_locale(&locale))
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::De => &GERMAN,
            Language::En => &ENGLISH,
        }
    }
}

pub struct Strings {
    pub title: &'static str,
    pub run: &'static str,
    pub pause: &'static str,
    pub step: &'static str,
    pub clear: &'static str,
    pub random: &'static str,
    pub info: &'static str,
    pub language: &'static str,
    pub speed: &'static str,
    pub steps_per_second: &'static str,
    pub generation: &'static str,
    pub population: &'static str,
    pub status: &'static str,
    pub running: &'static str,
    pub paused: &'static str,
    pub presets: &'static str,
    pub still_lifes: &'static str,
    pub oscillators: &'static str,
    pub spaceships: &'static str,
    pub other: &'static str,
    pub controls: &'static str,
    pub key_hints: &'static [&'static str],
    pub info_title: &'static str,
    pub info_lines: &'static [&'static str],
}

impl Strings {
    /// Heading over a group of preset buttons
    pub fn category(&self, category: Category) -> &'static str {
        match category {
            Category::StillLife => self.still_lifes,
            Category::Oscillator => self.oscillators,
            Category::Spaceship => self.spaceships,
            Category::Other => self.other,
        }
    }
}

static GERMAN: Strings = Strings {
    title: "Spiel des Lebens",
    run: "Start",
    pause: "Pause",
    step: "Schritt",
    clear: "Loeschen",
    random: "Zufall",
    info: "Info / Erklaerung",
    language: "English",
    speed: "Geschwindigkeit",
    steps_per_second: "Schritte/s",
    generation: "Generation",
    population: "Zellen",
    status: "Status",
    running: "Laeuft",
    paused: "Pausiert",
    presets: "Presets",
    still_lifes: "Still Lives",
    oscillators: "Oscillators",
    spaceships: "Spaceships",
    other: "Sonst",
    controls: "Steuerung",
    key_hints: &[
        "R = Start/Pause",
        "Leertaste = 1 Schritt",
        "C = Loeschen",
        "1-7 = Presets, 0 = Zufall",
        "Hoch/Runter = Tempo",
        "L = Sprache, I = Info",
    ],
    info_title: "So funktioniert's",
    info_lines: &[
        "Regeln: 3 Nachbarn = Geburt, 2-3 = Ueberleben, sonst Tod.",
        "Schritt: 1 Generation (nur pausiert).",
        "Feld ringfoermig: raus = gegenueber rein.",
        "Start: 1 Muster (Glider). Mehr: Presets 1-7 oder zeichnen.",
        "Presets fuegen hinzu, nur Zufall ersetzt alles.",
        "Links: 1 Klick = 1 Zelle. Ziehen = malen.",
        "Rechts halten + Links = nur setzen (leben).",
    ],
};

static ENGLISH: Strings = Strings {
    title: "Game of Life",
    run: "Start",
    pause: "Pause",
    step: "Step",
    clear: "Clear",
    random: "Random",
    info: "Info / Help",
    language: "Deutsch",
    speed: "Speed",
    steps_per_second: "steps/s",
    generation: "Generation",
    population: "Cells",
    status: "Status",
    running: "Running",
    paused: "Paused",
    presets: "Presets",
    still_lifes: "Still Lives",
    oscillators: "Oscillators",
    spaceships: "Spaceships",
    other: "Other",
    controls: "Controls",
    key_hints: &[
        "R = Start/Pause",
        "Space = 1 step",
        "C = Clear",
        "1-7 = Presets, 0 = Random",
        "Up/Down = Speed",
        "L = Language, I = Info",
    ],
    info_title: "How it works",
    info_lines: &[
        "Rules: 3 neighbors = birth, 2-3 = survive, else death.",
        "Step: 1 generation (paused only).",
        "Grid wraps: exit = enter opposite.",
        "Start: 1 pattern (Glider). More: presets 1-7 or draw.",
        "Presets add to the grid, only Random replaces all.",
        "Left: 1 click = 1 cell. Drag = draw.",
        "Right hold + Left = set only (alive).",
    ],
};
