use stdg_engine::core::{App, AppControl, FrameCtx};
use stdg_engine::scene::DrawList;
use stdg_engine::window::RuntimeConfig;

use crate::geometry::CarGeometry;
use crate::style::CarStyle;

/// Position of the car in the first frame.
pub const START_POSITION: i64 = 10;

/// Header for the demo window: `window 400 400`, `title a moving car`.
pub fn window_config() -> RuntimeConfig {
    RuntimeConfig::new().title("a moving car").size(400, 400)
}

/// The endless animation.
///
/// Owns the car position. As an iterator it yields the geometry of every
/// frame, one pixel further right each time, and never ends; restarting
/// means building a new value.
#[derive(Debug, Clone)]
pub struct CarAnimation {
    position: i64,
    style: CarStyle,
}

impl Default for CarAnimation {
    fn default() -> Self {
        Self::new(CarStyle::default())
    }
}

impl CarAnimation {
    pub fn new(style: CarStyle) -> Self {
        Self { position: START_POSITION, style }
    }

    /// Position the next frame will be drawn at.
    #[inline]
    pub fn position(&self) -> i64 {
        self.position
    }

    #[inline]
    pub fn style(&self) -> CarStyle {
        self.style
    }

    /// Records `car` into `list`: background, body and cabin, wheels.
    ///
    /// Each group selects its own color, so a frame has the same shape
    /// whatever the style.
    pub fn draw(&self, car: &CarGeometry, list: &mut DrawList) {
        list.push_color(self.style.background);
        list.push_clear();

        list.push_color(self.style.body);
        list.push_solid_rect(car.body);
        list.push_solid_rect(car.cabin);

        list.push_color(self.style.wheels);
        for wheel in &car.wheels {
            list.push_solid_circle(wheel.center, wheel.radius);
        }
    }
}

impl Iterator for CarAnimation {
    type Item = CarGeometry;

    fn next(&mut self) -> Option<CarGeometry> {
        let car = CarGeometry::at(self.position);
        self.position += 1;
        Some(car)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl App for CarAnimation {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if let Some(car) = self.next() {
            self.draw(&car, ctx.draw_list);
        }
        AppControl::Continue
    }
}
