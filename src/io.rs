use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Eci, State};

///Flat CSV row for a propagation sample.
#[derive(Serialize, Deserialize)]
struct StateRecord {
    x: f64,
    y: f64,
    z: f64,
    vx: f64,
    vy: f64,
    vz: f64,
    time: f64,
}

impl From<&State> for StateRecord {
    fn from(state: &State) -> StateRecord {
        StateRecord {
            x: state.eci.x,
            y: state.eci.y,
            z: state.eci.z,
            vx: state.eci.vx,
            vy: state.eci.vy,
            vz: state.eci.vz,
            time: state.time,
        }
    }
}

impl From<StateRecord> for State {
    fn from(record: StateRecord) -> State {
        State {
            eci: Eci::new(
                [record.x, record.y, record.z],
                [record.vx, record.vy, record.vz],
            ),
            time: record.time,
        }
    }
}

///Writes propagation samples to a CSV file.
pub fn write_states(path: impl AsRef<Path>, states: &[State]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for state in states {
        writer.serialize(StateRecord::from(state))?;
    }
    writer.flush()?;
    debug!(
        "wrote {} states to {}",
        states.len(),
        path.as_ref().display()
    );
    Ok(())
}

///Reads propagation samples back from a CSV file.
pub fn read_states(path: impl AsRef<Path>) -> Result<Vec<State>> {
    let mut states = Vec::new();
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    for record in reader.deserialize() {
        let record: StateRecord = record?;
        states.push(State::from(record));
    }
    Ok(states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_trip() {
        let states = [
            State {
                eci: Eci::new([7000., 0.1, -3.5], [0., 7.5, 0.001]),
                time: 946728000.,
            },
            State {
                eci: Eci::new([6999.3, 75.2, -3.1], [-0.08, 7.49, 0.002]),
                time: 946728010.,
            },
        ];
        let file = tempfile::NamedTempFile::new().unwrap();
        write_states(file.path(), &states).unwrap();
        let read = read_states(file.path()).unwrap();
        assert_eq!(read.len(), 2);
        for (a, b) in states.iter().zip(&read) {
            assert_relative_eq!(a.eci.x, b.eci.x);
            assert_relative_eq!(a.eci.y, b.eci.y);
            assert_relative_eq!(a.eci.z, b.eci.z);
            assert_relative_eq!(a.eci.vx, b.eci.vx);
            assert_relative_eq!(a.eci.vy, b.eci.vy);
            assert_relative_eq!(a.eci.vz, b.eci.vz);
            assert_relative_eq!(a.time, b.time);
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(read_states("/nonexistent/states.csv").is_err());
    }
}
