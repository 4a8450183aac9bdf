//! Footer year stamp.

use crate::effect::{Effect, Target};

#[must_use]
pub fn stamp(year: u32) -> Effect {
    Effect::text(Target::Year, year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_writes_year_text() {
        assert_eq!(stamp(2026), Effect::text(Target::Year, "2026"));
    }
}
