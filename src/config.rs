//! Maze settings, from the command line or a TOML file

use serde::Deserialize;

use crate::error::MazeError;

/// Settings for generating one maze
///
/// Dimensions are display dimensions: they are halved into maze cells, so
/// odd values lose their last row or column.
///
/// # Examples
/// ```
/// use glyph_maze::MazeConfig;
///
/// let config = MazeConfig::from_toml("width = 21\nheight = 11\nseed = 7").unwrap();
/// assert_eq!(config.dimensions(), Ok((21, 11)));
/// assert_eq!(config.rooms(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MazeConfig {
    /// Display width
    pub width: Option<usize>,
    /// Display height
    pub height: Option<usize>,
    /// Random seed, entropy when absent
    pub seed: Option<u64>,
    /// Number of rooms to clear
    pub rooms: Option<usize>,
}

impl MazeConfig {
    pub fn from_toml(text: &str) -> Result<Self, MazeError> {
        toml::from_str(text).map_err(|e| MazeError::Config(e.message().to_string()))
    }

    /// Values set in `other` take precedence.
    pub fn merge(self, other: MazeConfig) -> MazeConfig {
        MazeConfig {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
            seed: other.seed.or(self.seed),
            rooms: other.rooms.or(self.rooms),
        }
    }

    /// Display dimensions, validated to hold at least one maze cell.
    pub fn dimensions(&self) -> Result<(usize, usize), MazeError> {
        let width = self.width.ok_or(MazeError::MissingDimension("width"))?;
        let height = self.height.ok_or(MazeError::MissingDimension("height"))?;
        if width < 2 || height < 2 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok((width, height))
    }

    pub fn rooms(&self) -> usize {
        self.rooms.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::MazeConfig;
    use crate::error::MazeError;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(MazeConfig::from_toml("").unwrap(), MazeConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = MazeConfig::from_toml("widht = 3").unwrap_err();
        assert!(matches!(err, MazeError::Config(_)));
        assert!(MazeConfig::from_toml("width = -4").is_err());
    }

    #[test]
    fn command_line_overrides_file() {
        let file = MazeConfig::from_toml("width = 30\nheight = 20\nrooms = 2").unwrap();
        let cli = MazeConfig {
            width: Some(10),
            seed: Some(1),
            ..Default::default()
        };
        let merged = file.merge(cli);
        assert_eq!(merged.dimensions(), Ok((10, 20)));
        assert_eq!(merged.seed, Some(1));
        assert_eq!(merged.rooms(), 2);
    }

    #[test]
    fn dimensions_are_validated() {
        let missing = MazeConfig {
            width: Some(4),
            ..Default::default()
        };
        assert_eq!(
            missing.dimensions(),
            Err(MazeError::MissingDimension("height"))
        );

        for (width, height) in [(0, 5), (5, 1), (1, 1)] {
            let config = MazeConfig {
                width: Some(width),
                height: Some(height),
                ..Default::default()
            };
            assert_eq!(
                config.dimensions(),
                Err(MazeError::InvalidDimensions { width, height })
            );
        }
    }
}
