use std::f64::consts::PI;

pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}
