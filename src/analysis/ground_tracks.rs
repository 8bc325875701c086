use crate::converters::ecef2latlong::ecef2latlong;
use crate::types::{Ecef, SubPoint};

///Maps Earth fixed samples to the sub satellite points they fly over.
pub fn ground_tracks(states: &[Ecef]) -> Vec<SubPoint> {
    states
        .iter()
        .map(|state| ecef2latlong(state.position()))
        .collect()
}
