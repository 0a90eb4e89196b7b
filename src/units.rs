/// Meters per second in one knot.
pub const MPS_PER_KNOT: f64 = 0.5144;

pub fn mps_to_knots(mps: f64) -> f64 {
    mps / MPS_PER_KNOT
}

pub fn knots_to_mps(knots: f64) -> f64 {
    knots * MPS_PER_KNOT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gale_in_knots() {
        assert!((mps_to_knots(40.0) - 77.7605).abs() < 1e-4);
    }

    #[test]
    fn knots_and_mps_are_inverse() {
        for v in [0.0, 0.3, 12.5, 40.0, -3.2, 1250.0] {
            assert!((knots_to_mps(mps_to_knots(v)) - v).abs() < 1e-9);
        }
    }
}
