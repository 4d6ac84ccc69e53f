//! Tests for game settings presets and validation

#[cfg(test)]
mod tests {
    use wordgrid::io::configuration::MAX_GRID_SIZE;
    use wordgrid::{Difficulty, DirectionFlags, GameSettings, GenerationError};

    #[test]
    fn test_default_settings() {
        let settings = GameSettings::default();
        assert_eq!(settings.grid_size, 15);
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.directions, DirectionFlags::ALL);
        assert_eq!(settings.direction_set().len(), 6);
    }

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(GameSettings::for_difficulty(Difficulty::Easy).grid_size, 10);
        assert_eq!(GameSettings::for_difficulty(Difficulty::Medium).grid_size, 15);
        assert_eq!(GameSettings::for_difficulty(Difficulty::Hard).grid_size, 20);
    }

    #[test]
    fn test_validation_bounds() {
        let settings = GameSettings::default();
        assert!(settings.with_grid_size(1).validate().is_ok());
        assert!(settings.with_grid_size(MAX_GRID_SIZE).validate().is_ok());
        assert!(matches!(
            settings.with_grid_size(0).validate(),
            Err(GenerationError::InvalidParameter {
                parameter: "grid_size",
                ..
            })
        ));
        assert!(settings.with_grid_size(MAX_GRID_SIZE + 1).validate().is_err());
    }

    #[test]
    fn test_with_directions() {
        let settings = GameSettings::default().with_directions(DirectionFlags::NONE);
        assert!(settings.direction_set().is_empty());
    }
}
