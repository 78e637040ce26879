use stdg_engine::coords::{Rect, Vec2};

// Shapes at position 0; every frame shifts them right by the position.
const BODY: Rect = Rect::new(0, 200, 100, 20);
const CABIN: Rect = Rect::new(15, 178, 70, 40);
const WHEEL_Y: i64 = 221;
const WHEEL_RADIUS: u32 = 12;
const WHEEL_XS: [i64; 2] = [25, 75];

/// A filled wheel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Wheel {
    pub center: Vec2,
    pub radius: u32,
}

/// Everything drawn for one frame, in paint order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CarGeometry {
    pub position: i64,
    pub body: Rect,
    pub cabin: Rect,
    /// Rear wheel first.
    pub wheels: [Wheel; 2],
}

impl CarGeometry {
    /// Lays the car out with its left edge at `position`.
    pub fn at(position: i64) -> Self {
        let shift = Vec2::horizontal(position);
        Self {
            position,
            body: BODY.translated(shift),
            cabin: CABIN.translated(shift),
            wheels: WHEEL_XS.map(|x| Wheel {
                center: Vec2::new(x + position, WHEEL_Y),
                radius: WHEEL_RADIUS,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_at_start() {
        let car = CarGeometry::at(10);
        assert_eq!(car.body, Rect::new(10, 200, 100, 20));
        assert_eq!(car.cabin, Rect::new(25, 178, 70, 40));
        assert_eq!(car.wheels[0], Wheel { center: Vec2::new(35, 221), radius: 12 });
        assert_eq!(car.wheels[1], Wheel { center: Vec2::new(85, 221), radius: 12 });
    }

    #[test]
    fn offsets_hold_at_any_position() {
        for position in [-40, 0, 1, 399, 1_000_000, i64::from(u32::MAX)] {
            let car = CarGeometry::at(position);
            assert_eq!(car.body.origin.x, position);
            assert_eq!(car.cabin.origin.x, car.body.origin.x + 15);
            assert_eq!(car.wheels[0].center.x, position + 25);
            assert_eq!(car.wheels[1].center.x, position + 75);
            assert!(car.wheels.iter().all(|w| w.center.y == 221 && w.radius == 12));
        }
    }

    #[test]
    fn vertical_layout_never_moves() {
        assert_eq!(CarGeometry::at(3).body.origin.y, CarGeometry::at(300).body.origin.y);
        assert_eq!(CarGeometry::at(3).cabin.origin.y, 178);
    }
}
