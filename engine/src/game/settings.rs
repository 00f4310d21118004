use super::types::FieldSize;

/// Board-level parameters of a session. The logic and render rates live with
/// the loop that owns the clock, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSettings {
    pub field_size: FieldSize,
    /// Inclusive range for the number of bad fruits spawned on reset.
    pub bad_fruit_min: u32,
    pub bad_fruit_max: u32,
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.field_size.width < 10 || self.field_size.width > 100 {
            return Err("Field width must be between 10 and 100".to_string());
        }
        if self.field_size.height < 10 || self.field_size.height > 100 {
            return Err("Field height must be between 10 and 100".to_string());
        }
        if self.bad_fruit_min < 1 {
            return Err("Bad fruit minimum must be at least 1".to_string());
        }
        if self.bad_fruit_max > 20 {
            return Err("Bad fruit maximum must not exceed 20".to_string());
        }
        if self.bad_fruit_min > self.bad_fruit_max {
            return Err("Bad fruit minimum must not exceed the maximum".to_string());
        }
        Ok(())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_size: FieldSize::new(25, 25),
            bad_fruit_min: 1,
            bad_fruit_max: 8,
        }
    }
}
