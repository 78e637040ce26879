use stdg_engine::paint::Color;

/// Colors of the scene.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CarStyle {
    pub background: Color,
    /// Shared by the body and the cabin.
    pub body: Color,
    pub wheels: Color,
}

impl Default for CarStyle {
    fn default() -> Self {
        Self {
            background: Color::rgb(151, 244, 247),
            body: Color::rgb(255, 0, 115),
            wheels: Color::rgb(77, 66, 66),
        }
    }
}
