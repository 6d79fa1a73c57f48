/// Toast bracket a char level falls into, from lightest to heaviest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum ToastProfile {
    /// `[0, 0.2)`
    Fresh,
    /// `[0.2, 0.45)`
    Caramel,
    /// `[0.45, 0.7)`
    Spice,
    /// `[0.7, 1]`
    Smoke,
}

impl ToastProfile {
    /// Bracket for a char level. Boundaries belong to the upper bracket.
    pub fn classify(char_level: f64) -> Self {
        if char_level < 0.2 {
            Self::Fresh
        } else if char_level < 0.45 {
            Self::Caramel
        } else if char_level < 0.7 {
            Self::Spice
        } else {
            Self::Smoke
        }
    }

    /// Tasting notes for the bracket, in display order.
    pub fn notes(self) -> [&'static str; 3] {
        match self {
            Self::Fresh => ["свежее дерево", "травы", "цветочный мёд"],
            Self::Caramel => ["карамель", "ваниль", "жареные орехи"],
            Self::Spice => ["пряности", "дым", "кленовый сироп"],
            Self::Smoke => ["какао", "копчёность", "карамелизованный сахар"],
        }
    }
}

/// Tasting notes for a char level.
pub fn flavor_notes(char_level: f64) -> [&'static str; 3] {
    ToastProfile::classify(char_level).notes()
}

#[cfg(test)]
#[path = "../../tests/unit/flavor/notes.rs"]
mod tests;
