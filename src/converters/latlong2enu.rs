///East, north and up unit vectors at a point on the Earth. Latitude and
///longitude in degrees.
pub fn enu_basis(lat: f64, long: f64) -> ([f64; 3], [f64; 3], [f64; 3]) {
    let phi = lat.to_radians();
    let lambda = long.to_radians();
    (east(lambda), north(phi, lambda), up(phi, lambda))
}

fn east(lambda: f64) -> [f64; 3] {
    [-lambda.sin(), lambda.cos(), 0.]
}

fn north(phi: f64, lambda: f64) -> [f64; 3] {
    [
        -lambda.cos() * phi.sin(),
        -lambda.sin() * phi.sin(),
        phi.cos(),
    ]
}

///The up (zenith) unit vector. Takes radians, unlike `enu_basis`: visibility
///scales this directly to build station positions.
pub(crate) fn up(phi: f64, lambda: f64) -> [f64; 3] {
    [
        lambda.cos() * phi.cos(),
        lambda.sin() * phi.cos(),
        phi.sin(),
    ]
}
