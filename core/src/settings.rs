use core::ops::RangeInclusive;
use serde::{Deserialize, Serialize};

use crate::*;

pub const WIDTH_RANGE: RangeInclusive<Coord> = 9..=30;
pub const HEIGHT_RANGE: RangeInclusive<Coord> = 9..=24;
pub const MAX_MINES: CellCount = 668;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    #[default]
    Beginner,
    Intermediate,
    Expert,
    Custom,
}

impl Preset {
    /// Board of a named preset, `None` for `Custom`
    pub const fn config(self) -> Option<GameConfig> {
        match self {
            Self::Beginner => Some(GameConfig::new_unchecked((9, 9), 10)),
            Self::Intermediate => Some(GameConfig::new_unchecked((16, 16), 40)),
            Self::Expert => Some(GameConfig::new_unchecked((30, 16), 99)),
            Self::Custom => None,
        }
    }
}

/// Player-chosen game options, as kept by a settings store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub preset: Preset,
    /// Board used when `preset` is `Custom`
    pub custom: GameConfig,
    pub question_marks: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: Preset::Beginner,
            custom: GameConfig::new_unchecked((30, 24), 150),
            question_marks: true,
        }
    }
}

impl Settings {
    pub fn preset(preset: Preset, question_marks: bool) -> Self {
        Self {
            preset,
            question_marks,
            ..Default::default()
        }
    }

    pub fn custom(
        width: Coord,
        height: Coord,
        mines: CellCount,
        question_marks: bool,
    ) -> Result<Self> {
        let settings = Self {
            preset: Preset::Custom,
            custom: GameConfig::new_unchecked((width, height), mines),
            question_marks,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn game_config(&self) -> GameConfig {
        self.preset.config().unwrap_or(self.custom)
    }

    /// Most mines a custom board of `size` may hold; one cell always stays free for the first click.
    pub fn max_mines(size: Coord2) -> CellCount {
        MAX_MINES.min(mult(size.0, size.1).saturating_sub(1))
    }

    pub fn validate(&self) -> Result<()> {
        let GameConfig {
            size: (width, height),
            mines,
        } = self.game_config();

        check_range("width", width.into(), &WIDTH_RANGE)?;
        check_range("height", height.into(), &HEIGHT_RANGE)?;
        check_range("mines", mines, &(1..=Self::max_mines((width, height))))
    }
}

fn check_range<T>(name: &'static str, value: CellCount, range: &RangeInclusive<T>) -> Result<()>
where
    T: Copy + Into<CellCount>,
{
    let (min, max) = ((*range.start()).into(), (*range.end()).into());
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(GameError::SettingOutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for preset in [Preset::Beginner, Preset::Intermediate, Preset::Expert] {
            let settings = Settings::preset(preset, false);
            assert_eq!(settings.validate(), Ok(()));
            assert_eq!(settings.game_config(), preset.config().unwrap());
        }
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[test]
    fn custom_board_is_range_checked() {
        assert!(Settings::custom(30, 24, MAX_MINES, true).is_ok());
        assert_eq!(
            Settings::custom(8, 9, 10, true),
            Err(GameError::SettingOutOfRange {
                name: "width",
                value: 8,
                min: 9,
                max: 30
            })
        );
        assert!(matches!(
            Settings::custom(9, 25, 10, true),
            Err(GameError::SettingOutOfRange { name: "height", .. })
        ));
        assert_eq!(
            Settings::custom(9, 9, 81, true),
            Err(GameError::SettingOutOfRange {
                name: "mines",
                value: 81,
                min: 1,
                max: 80
            })
        );
    }

    #[test]
    fn custom_config_ignored_for_named_preset() {
        let mut settings = Settings::preset(Preset::Expert, true);
        settings.custom = GameConfig::new_unchecked((9, 9), 5);
        assert_eq!(settings.game_config().size, (30, 16));
    }

    #[test]
    fn settings_survive_json() {
        let settings = Settings::custom(20, 12, 45, false).unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }
}
