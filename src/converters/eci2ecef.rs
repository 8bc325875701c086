use crate::data::{EARTH_ROTATION_RATE, J2000};
use crate::types::{Ecef, Eci};

///Greenwich apparent sidereal time at `time` (Unix seconds), in radians.
pub fn gast(time: f64) -> f64 {
    let days = (time - J2000) / 86400.;
    (280.4606 + 360.9856473662 * days).to_radians()
}

///Rotates an inertial state into the Earth fixed basis at `time`. The
///velocity picks up the frame rotation terms.
pub fn eci2ecef(state: &Eci, time: f64) -> Ecef {
    let theta = gast(time);
    Ecef::new(ecef_position(state, theta), ecef_velocity(state, theta))
}

fn ecef_position(state: &Eci, theta: f64) -> [f64; 3] {
    [
        theta.cos() * state.x + theta.sin() * state.y,
        -theta.sin() * state.x + theta.cos() * state.y,
        state.z,
    ]
}

fn ecef_velocity(state: &Eci, theta: f64) -> [f64; 3] {
    let u = -EARTH_ROTATION_RATE * (theta.sin() * state.x - theta.cos() * state.y)
        + theta.cos() * state.vx
        + theta.sin() * state.vy;
    let v = -EARTH_ROTATION_RATE * (theta.cos() * state.x + theta.sin() * state.y)
        - theta.sin() * state.vx
        + theta.cos() * state.vy;
    [u, v, state.vz]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::norm;
    use approx::assert_relative_eq;

    #[test]
    fn test_gast_at_epoch() {
        assert_relative_eq!(gast(J2000), 280.4606_f64.to_radians(), epsilon = 1e-12);
        assert_relative_eq!(
            gast(J2000 + 86400.),
            (280.4606_f64 + 360.9856473662).to_radians(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_rotation_preserves_radius() {
        let state = Eci::new([7000., 100., 1000.], [1., 2., 3.]);
        let ecef = eci2ecef(&state, J2000 + 12345.);
        assert_relative_eq!(
            norm(ecef.position()),
            norm(state.position()),
            epsilon = 1e-12
        );
        assert_relative_eq!(ecef.z, state.z);
        assert_relative_eq!(ecef.vz, state.vz);
    }

    #[test]
    fn test_frame_rotation_velocity() {
        //A satellite at rest in ECI moves westward in ECEF at omega * rho.
        let state = Eci::new([7000., 0., 0.], [0., 0., 0.]);
        let ecef = eci2ecef(&state, J2000 + 3600.);
        assert_relative_eq!(
            norm(ecef.velocity()),
            EARTH_ROTATION_RATE * 7000.,
            epsilon = 1e-12
        );
    }
}
