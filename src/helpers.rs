use std::f64::consts::PI;

pub fn modulus(a: f64, b: f64) -> f64 {
    ((a % b) + b) % b
}

///Wraps an angle in radians to [0, 2pi).
pub fn normalise_angle(angle: f64) -> f64 {
    modulus(angle, 2. * PI)
}

///atan2 with the result wrapped to [0, 2pi).
pub fn normalised_atan2(y: f64, x: f64) -> f64 {
    let result = y.atan2(x);
    if result < 0. { result + 2. * PI } else { result }
}

pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

pub fn unit(a: [f64; 3]) -> [f64; 3] {
    let magnitude = norm(a);
    [a[0] / magnitude, a[1] / magnitude, a[2] / magnitude]
}

pub fn vector_diff(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [b[0] - a[0], b[1] - a[1], b[2] - a[2]]
}
